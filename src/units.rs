use serde::Serialize;

// ---------------------------------------------------------------------------
// Conversion constants
// ---------------------------------------------------------------------------

pub const METERS_PER_KM: f64 = 1000.0;   // m / km
pub const SECONDS_PER_HOUR: f64 = 3600.0; // s / h

// ---------------------------------------------------------------------------
// Unit-tagged scalar quantities
// ---------------------------------------------------------------------------

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            pub const UNIT: &'static str = $symbol;

            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Raw magnitude, stripped of its unit.
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, Self::UNIT),
                    None => write!(f, "{} {}", self.0, Self::UNIT),
                }
            }
        }
    };
}

quantity!(
    /// Speed in kilometres per hour.
    KilometersPerHour,
    "km/h"
);
quantity!(
    /// Speed in metres per second.
    MetersPerSecond,
    "m/s"
);
quantity!(MetersPerSecondSquared, "m/s^2");
quantity!(Seconds, "s");
quantity!(Kilometers, "km");
quantity!(Kilograms, "kg");
quantity!(KilogramsPerSecond, "kg/s");

impl Seconds {
    /// Elapsed time expressed in hours.
    pub fn hours(self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }
}

// ---------------------------------------------------------------------------
// km/h <-> m/s
// ---------------------------------------------------------------------------

/// v [km/h] * 1000 / 3600
pub fn kmh_to_ms(v: KilometersPerHour) -> MetersPerSecond {
    MetersPerSecond(v.0 * METERS_PER_KM / SECONDS_PER_HOUR)
}

/// v [m/s] * 3600 / 1000, inverse of [`kmh_to_ms`].
pub fn ms_to_kmh(v: MetersPerSecond) -> KilometersPerHour {
    KilometersPerHour(v.0 * SECONDS_PER_HOUR / METERS_PER_KM)
}

impl KilometersPerHour {
    pub fn to_ms(self) -> MetersPerSecond {
        kmh_to_ms(self)
    }
}

impl MetersPerSecond {
    pub fn to_kmh(self) -> KilometersPerHour {
        ms_to_kmh(self)
    }
}

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(v: KilometersPerHour) -> Self {
        kmh_to_ms(v)
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(v: MetersPerSecond) -> Self {
        ms_to_kmh(v)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kmh_to_ms_known_value() {
        let v = kmh_to_ms(KilometersPerHour::new(36.0));
        assert_relative_eq!(v.value(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn ms_to_kmh_known_value() {
        let v = ms_to_kmh(MetersPerSecond::new(10.0));
        assert_relative_eq!(v.value(), 36.0, epsilon = 1e-12);
    }

    #[test]
    fn round_trip_preserves_value() {
        for v in [0.0, 1.0, 0.3, 100.0, 10_000.0, 123_456.789, 1e9] {
            let back = ms_to_kmh(kmh_to_ms(KilometersPerHour::new(v)));
            assert_relative_eq!(back.value(), v, max_relative = 1e-12);
        }
    }

    #[test]
    fn conversion_does_not_restrict_sign() {
        let v = kmh_to_ms(KilometersPerHour::new(-36.0));
        assert_relative_eq!(v.value(), -10.0, epsilon = 1e-12);
    }

    #[test]
    fn from_impls_match_functions() {
        let kmh = KilometersPerHour::new(10_000.0);
        let ms: MetersPerSecond = kmh.into();
        assert_eq!(ms, kmh_to_ms(kmh));
        assert_eq!(KilometersPerHour::from(ms), ms.to_kmh());
    }

    #[test]
    fn display_honours_precision_and_unit() {
        assert_eq!(format!("{:.2}", Kilometers::new(10_000.0)), "10000.00 km");
        assert_eq!(format!("{}", Seconds::new(3.5)), "3.5 s");
    }

    #[test]
    fn seconds_to_hours() {
        assert_relative_eq!(Seconds::new(5400.0).hours(), 1.5);
    }
}
