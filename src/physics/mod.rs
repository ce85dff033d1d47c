pub mod kinematics;
pub mod distance;
pub mod fuel;

pub use kinematics::final_velocity;
pub use distance::{distance_traveled, distance_under_acceleration, DistanceModel};
pub use fuel::{remaining_fuel, time_to_depletion, FuelPolicy};
