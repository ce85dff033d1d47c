pub mod units;
pub mod error;
pub mod validation;
pub mod physics;
pub mod scenario;
pub mod calculator;
pub mod io;

pub use calculator::run;
pub use error::CalcError;
pub use io::Report;
pub use scenario::{presets, Scenario, ScenarioBuilder};
