use tracing::{debug, warn};

use crate::error::CalcError;
use crate::units::{Kilograms, KilogramsPerSecond, Seconds};
use crate::validation::{validate, Param};

/// What to do when the burn over the interval exceeds the fuel on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FuelPolicy {
    /// Fail with [`CalcError::FuelExhausted`].
    #[default]
    Strict,
    /// Report an empty tank (0 kg) and log a warning.
    Clamp,
}

/// Seconds until the tank runs dry at a constant burn rate.
/// `None` when nothing is being burned.
pub fn time_to_depletion(initial: Kilograms, burn_rate: KilogramsPerSecond) -> Option<Seconds> {
    if burn_rate.value() > 0.0 {
        Some(Seconds::new(initial.value() / burn_rate.value()))
    } else {
        None
    }
}

/// Linear depletion: m = m0 - rate * t
pub fn remaining_fuel(
    initial: Kilograms,
    burn_rate: KilogramsPerSecond,
    time: Seconds,
    policy: FuelPolicy,
) -> Result<Kilograms, CalcError> {
    validate(&[
        Param::non_negative("initial_fuel_kg", initial.value()),
        Param::non_negative("burn_rate_kgs", burn_rate.value()),
        Param::non_negative("time_s", time.value()),
    ])?;

    let burned = Kilograms::new(burn_rate.value() * time.value());
    validate(&[Param::finite("fuel_burned_kg", burned.value())])?;
    let remaining = initial.value() - burned.value();

    if remaining >= 0.0 {
        debug!(m0 = initial.value(), burned = burned.value(), m = remaining, "remaining fuel");
        return Ok(Kilograms::new(remaining));
    }

    // remaining < 0 implies burn_rate > 0
    let depleted_at = time_to_depletion(initial, burn_rate).unwrap_or(time);
    match policy {
        FuelPolicy::Strict => Err(CalcError::FuelExhausted { initial, burned, depleted_at }),
        FuelPolicy::Clamp => {
            warn!(
                initial = initial.value(),
                burned = burned.value(),
                depleted_at = depleted_at.value(),
                "fuel exhausted before end of interval, clamping to 0 kg"
            );
            Ok(Kilograms::new(0.0))
        }
    }
}
