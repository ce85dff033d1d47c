use tracing::{debug, info_span};

use crate::error::CalcError;
use crate::io::Report;
use crate::physics::{
    distance_traveled, distance_under_acceleration, final_velocity, remaining_fuel, DistanceModel,
};
use crate::scenario::Scenario;
use crate::units::kmh_to_ms;
use crate::validation::{validate, Param};

// ---------------------------------------------------------------------------
// Single calculation pass
// ---------------------------------------------------------------------------

/// Run every calculator for `scenario` and collect the results.
///
/// Either all three quantities are produced or the first error is
/// returned; a partial report never escapes.
pub fn run(scenario: &Scenario) -> Result<Report, CalcError> {
    let _span = info_span!("run", scenario = %scenario.name).entered();

    scenario.validate()?;

    let initial_velocity_ms = kmh_to_ms(scenario.initial_velocity);
    let velocity = final_velocity(initial_velocity_ms, scenario.acceleration, scenario.time)?;

    let distance = match scenario.distance_model {
        DistanceModel::ConstantInitialVelocity => distance_traveled(
            scenario.initial_distance,
            scenario.initial_velocity,
            scenario.time,
        )?,
        DistanceModel::UniformAcceleration => distance_under_acceleration(
            scenario.initial_distance,
            initial_velocity_ms,
            scenario.acceleration,
            scenario.time,
        )?,
    };

    let fuel = remaining_fuel(
        scenario.initial_fuel,
        scenario.burn_rate,
        scenario.time,
        scenario.fuel_policy,
    )?;

    let velocity = velocity.to_kmh();
    validate(&[Param::finite("final_velocity_kmh", velocity.value())])?;

    let report = Report { velocity, distance, fuel };
    debug!(?report, "pass complete");
    Ok(report)
}
