use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use flight_calc::io::write_report;
use flight_calc::Scenario;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(&Scenario::default(), &mut stdout.lock(), &mut stderr.lock())
}

/// Run `scenario`, writing the report to `out` or a single diagnostic to
/// `diag`. Nothing reaches `out` unless the whole pass succeeded.
fn execute<O: Write, D: Write>(scenario: &Scenario, out: &mut O, diag: &mut D) -> ExitCode {
    let report = match flight_calc::run(scenario) {
        Ok(report) => report,
        Err(err) => {
            debug!(?err, "calculation aborted");
            let _ = writeln!(diag, "error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write_report(&mut *out, &report).and_then(|()| out.flush()) {
        let _ = writeln!(diag, "error: failed to write report: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_calc::ScenarioBuilder;

    fn capture(scenario: &Scenario) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let code = execute(scenario, &mut out, &mut diag);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn success_prints_report_only() {
        let (code, out, diag) = capture(&Scenario::default());
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("Corrected New Velocity: 48880.00 km/h\n"));
        assert!(diag.is_empty());
    }

    #[test]
    fn failure_prints_one_diagnostic_and_no_report() {
        let s = ScenarioBuilder::new("bad").time_s(-5.0).build();
        let (code, out, diag) = capture(&s);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert_eq!(diag.lines().count(), 1);
        assert!(diag.contains("`time_s`"), "{diag}");
        assert!(diag.contains("-5"), "{diag}");
        assert!(diag.contains(">= 0"), "{diag}");
    }

    #[test]
    fn fuel_exhaustion_fails_the_run() {
        let s = ScenarioBuilder::new("dry").burn_rate_kgs(100.0).build();
        let (code, out, diag) = capture(&s);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert!(diag.starts_with("error: fuel exhausted"), "{diag}");
    }
}
