use tracing::debug;

use crate::error::CalcError;
use crate::units::{MetersPerSecond, MetersPerSecondSquared, Seconds};
use crate::validation::{validate, Param};

// ---------------------------------------------------------------------------
// Uniformly accelerated motion
// ---------------------------------------------------------------------------

/// Final velocity after `time` under constant `acceleration`: v = v0 + a * t
///
/// All inputs must be finite and non-negative.
pub fn final_velocity(
    initial: MetersPerSecond,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
) -> Result<MetersPerSecond, CalcError> {
    validate(&[
        Param::non_negative("initial_velocity_ms", initial.value()),
        Param::non_negative("acceleration_ms2", acceleration.value()),
        Param::non_negative("time_s", time.value()),
    ])?;

    let v = MetersPerSecond::new(initial.value() + acceleration.value() * time.value());
    validate(&[Param::finite("final_velocity_ms", v.value())])?;
    debug!(
        v0 = initial.value(),
        a = acceleration.value(),
        t = time.value(),
        v = v.value(),
        "final velocity"
    );
    Ok(v)
}
