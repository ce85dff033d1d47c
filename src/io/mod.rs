pub mod report;
pub mod json;

pub use report::{write_report, Report};
