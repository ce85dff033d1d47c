use thiserror::Error;

use crate::units::{Kilograms, Seconds};

/// Everything that can stop a calculation pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Not a finite real number (non-numeric text, NaN or infinity).
    #[error("invalid type for `{param}`: expected a finite real number, got `{value}`")]
    InvalidType { param: &'static str, value: String },

    #[error("invalid range for `{param}`: {value} violates constraint `{constraint}`")]
    InvalidRange {
        param: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Strict fuel policy: the burn over the interval exceeds the supply.
    #[error(
        "fuel exhausted: burn of {burned:.2} exceeds initial supply of {initial:.2} (tank empty at t = {depleted_at:.2})"
    )]
    FuelExhausted {
        initial: Kilograms,
        burned: Kilograms,
        depleted_at: Seconds,
    },
}

impl CalcError {
    /// Name of the offending parameter, if the error is tied to one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            CalcError::InvalidType { param, .. } | CalcError::InvalidRange { param, .. } => {
                Some(*param)
            }
            CalcError::FuelExhausted { .. } => None,
        }
    }
}
