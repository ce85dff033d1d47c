use tracing::debug;

use crate::error::CalcError;
use crate::units::{
    Kilometers, KilometersPerHour, MetersPerSecond, MetersPerSecondSquared, Seconds, METERS_PER_KM,
};
use crate::validation::{validate, Param};

/// Which motion model the distance calculation assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceModel {
    /// Craft coasts at its *initial* velocity for the whole interval.
    /// Acceleration is ignored, so the result disagrees with the final
    /// velocity. Kept as the default to reproduce the legacy figures.
    #[default]
    ConstantInitialVelocity,
    /// d = v0 t + a t^2 / 2, consistent with the velocity calculation.
    UniformAcceleration,
}

// ---------------------------------------------------------------------------
// Constant-velocity traversal (legacy)
// ---------------------------------------------------------------------------

/// d = d0 + v0 [km/h] * t [h]
///
/// Assumes constant velocity equal to `initial_velocity`; see
/// [`DistanceModel::ConstantInitialVelocity`].
pub fn distance_traveled(
    initial: Kilometers,
    initial_velocity: KilometersPerHour,
    time: Seconds,
) -> Result<Kilometers, CalcError> {
    validate(&[
        Param::non_negative("initial_distance_km", initial.value()),
        Param::non_negative("initial_velocity_kmh", initial_velocity.value()),
        Param::non_negative("time_s", time.value()),
    ])?;

    let d = Kilometers::new(initial.value() + initial_velocity.value() * time.hours());
    validate(&[Param::finite("final_distance_km", d.value())])?;
    debug!(d0 = initial.value(), d = d.value(), "distance (constant initial velocity)");
    Ok(d)
}

// ---------------------------------------------------------------------------
// Uniformly accelerated traversal
// ---------------------------------------------------------------------------

/// d = d0 + (v0 t + a t^2 / 2) / 1000
pub fn distance_under_acceleration(
    initial: Kilometers,
    initial_velocity: MetersPerSecond,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
) -> Result<Kilometers, CalcError> {
    validate(&[
        Param::non_negative("initial_distance_km", initial.value()),
        Param::non_negative("initial_velocity_ms", initial_velocity.value()),
        Param::non_negative("acceleration_ms2", acceleration.value()),
        Param::non_negative("time_s", time.value()),
    ])?;

    let t = time.value();
    let meters = initial_velocity.value() * t + 0.5 * acceleration.value() * t * t;
    let d = Kilometers::new(initial.value() + meters / METERS_PER_KM);
    validate(&[Param::finite("final_distance_km", d.value())])?;
    debug!(d0 = initial.value(), d = d.value(), "distance (uniform acceleration)");
    Ok(d)
}
