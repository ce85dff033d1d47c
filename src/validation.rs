//! Shared input guards applied by every calculator before it computes.

use tracing::debug;

use crate::error::CalcError;

/// What a parameter must satisfy beyond being a finite real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Any finite value.
    Finite,
    /// Finite and `>= 0`.
    NonNegative,
}

impl Constraint {
    fn describe(self) -> &'static str {
        match self {
            Constraint::Finite => "finite",
            Constraint::NonNegative => ">= 0",
        }
    }
}

/// One named caller-supplied parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub value: f64,
    pub constraint: Constraint,
}

impl Param {
    pub fn finite(name: &'static str, value: f64) -> Self {
        Self { name, value, constraint: Constraint::Finite }
    }

    pub fn non_negative(name: &'static str, value: f64) -> Self {
        Self { name, value, constraint: Constraint::NonNegative }
    }

    fn check(&self) -> Result<(), CalcError> {
        if !self.value.is_finite() {
            return Err(CalcError::InvalidType {
                param: self.name,
                value: self.value.to_string(),
            });
        }
        if self.constraint == Constraint::NonNegative && self.value < 0.0 {
            return Err(CalcError::InvalidRange {
                param: self.name,
                value: self.value,
                constraint: self.constraint.describe(),
            });
        }
        Ok(())
    }
}

/// Check every parameter in order; the first violation wins.
pub fn validate(params: &[Param]) -> Result<(), CalcError> {
    for p in params {
        p.check()?;
    }
    debug!(count = params.len(), "parameters validated");
    Ok(())
}

/// Parse a textual parameter value into a finite real.
///
/// Anything that is not a number, or parses to NaN/infinity, is an
/// `InvalidType` error carrying the original text.
pub fn parse_param(name: &'static str, text: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidType {
        param: name,
        value: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_params() {
        let params = [
            Param::non_negative("a", 0.0),
            Param::non_negative("b", 3.0),
            Param::finite("c", -7.5),
        ];
        assert!(validate(&params).is_ok());
    }

    #[test]
    fn empty_set_is_valid() {
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn negative_is_invalid_range() {
        let err = validate(&[Param::non_negative("time_s", -1.0)]).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidRange { param: "time_s", value: -1.0, constraint: ">= 0" }
        );
    }

    #[test]
    fn nan_and_infinity_are_invalid_type() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate(&[Param::finite("x", v)]).unwrap_err();
            assert!(matches!(err, CalcError::InvalidType { param: "x", .. }), "{v}");
        }
    }

    #[test]
    fn non_finite_is_type_error_even_when_negative() {
        let err = validate(&[Param::non_negative("x", f64::NEG_INFINITY)]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidType { .. }));
    }

    #[test]
    fn first_violation_is_reported() {
        let params = [
            Param::non_negative("ok", 1.0),
            Param::non_negative("first", -1.0),
            Param::non_negative("second", f64::NAN),
        ];
        assert_eq!(validate(&params).unwrap_err().param(), Some("first"));
    }

    #[test]
    fn parse_param_accepts_numbers() {
        assert_eq!(parse_param("v", "10000").unwrap(), 10_000.0);
        assert_eq!(parse_param("v", " 0.5 ").unwrap(), 0.5);
        assert_eq!(parse_param("v", "-3").unwrap(), -3.0);
    }

    #[test]
    fn parse_param_rejects_text_and_non_finite() {
        for text in ["x", "", "12km", "NaN", "inf"] {
            let err = parse_param("v", text).unwrap_err();
            assert_eq!(err, CalcError::InvalidType { param: "v", value: text.to_string() });
        }
    }
}
