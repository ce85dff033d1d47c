use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::units::{Kilograms, Kilometers, KilometersPerHour};

/// The three derived quantities of one calculation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "velocity_kmh")]
    pub velocity: KilometersPerHour,
    #[serde(rename = "distance_km")]
    pub distance: Kilometers,
    #[serde(rename = "fuel_kg")]
    pub fuel: Kilograms,
}

impl Report {
    /// `<Label>: <value> <unit>`, two decimals, in output order.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Corrected New Velocity: {:.2}", self.velocity),
            format!("Corrected New Distance: {:.2}", self.distance),
            format!("Corrected Remaining Fuel: {:.2}", self.fuel),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Write the report, one quantity per line.
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> io::Result<()> {
    for line in report.lines() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
