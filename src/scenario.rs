use crate::error::CalcError;
use crate::physics::{DistanceModel, FuelPolicy};
use crate::units::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds,
};
use crate::validation::{validate, Param};

// ---------------------------------------------------------------------------
// Scenario: initial conditions for one calculation pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub initial_velocity: KilometersPerHour,
    pub acceleration: MetersPerSecondSquared,
    pub time: Seconds,
    pub initial_distance: Kilometers,
    pub initial_fuel: Kilograms,
    pub burn_rate: KilogramsPerSecond,
    pub distance_model: DistanceModel,
    pub fuel_policy: FuelPolicy,
}

impl Scenario {
    /// Check the inputs as supplied, in their own units, before anything
    /// converts them.
    pub fn validate(&self) -> Result<(), CalcError> {
        validate(&[
            Param::non_negative("initial_velocity_kmh", self.initial_velocity.value()),
            Param::non_negative("acceleration_ms2", self.acceleration.value()),
            Param::non_negative("time_s", self.time.value()),
            Param::non_negative("initial_distance_km", self.initial_distance.value()),
            Param::non_negative("initial_fuel_kg", self.initial_fuel.value()),
            Param::non_negative("burn_rate_kgs", self.burn_rate.value()),
        ])
    }
}

impl Default for Scenario {
    fn default() -> Self {
        presets::legacy()
    }
}

// ---------------------------------------------------------------------------
// Scenario builder
// ---------------------------------------------------------------------------

/// Starts from the legacy preset; override only what differs.
pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scenario: Scenario { name: name.into(), ..presets::legacy() },
        }
    }

    pub fn initial_velocity_kmh(mut self, v: f64) -> Self { self.scenario.initial_velocity = KilometersPerHour::new(v); self }
    pub fn acceleration_ms2(mut self, v: f64) -> Self { self.scenario.acceleration = MetersPerSecondSquared::new(v); self }
    pub fn time_s(mut self, v: f64) -> Self { self.scenario.time = Seconds::new(v); self }
    pub fn initial_distance_km(mut self, v: f64) -> Self { self.scenario.initial_distance = Kilometers::new(v); self }
    pub fn initial_fuel_kg(mut self, v: f64) -> Self { self.scenario.initial_fuel = Kilograms::new(v); self }
    pub fn burn_rate_kgs(mut self, v: f64) -> Self { self.scenario.burn_rate = KilogramsPerSecond::new(v); self }
    pub fn distance_model(mut self, m: DistanceModel) -> Self { self.scenario.distance_model = m; self }
    pub fn fuel_policy(mut self, p: FuelPolicy) -> Self { self.scenario.fuel_policy = p; self }

    pub fn build(self) -> Scenario {
        self.scenario
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// One hour of 3 m/s^2 thrust from 10 000 km/h, burning 0.5 kg/s.
    pub fn legacy() -> Scenario {
        Scenario {
            name: "Legacy".into(),
            initial_velocity: KilometersPerHour::new(10_000.0),
            acceleration: MetersPerSecondSquared::new(3.0),
            time: Seconds::new(3600.0),
            initial_distance: Kilometers::new(0.0),
            initial_fuel: Kilograms::new(5000.0),
            burn_rate: KilogramsPerSecond::new(0.5),
            distance_model: DistanceModel::ConstantInitialVelocity,
            fuel_policy: FuelPolicy::Strict,
        }
    }
}
