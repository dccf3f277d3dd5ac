//! Conversion engine
//!
//! Every conversion pivots through the kind's base unit: the source value
//! is taken to the base unit, then from the base unit to the target. The
//! formulas themselves belong to the kind's registry.

use crate::{Unit, UnitsError};

/// Convert `value` from `from` to `to`.
///
/// Converting to the same unit returns `value` untouched, with no
/// floating-point round trip.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> Result<f64, UnitsError> {
    if from == to {
        return Ok(value);
    }
    let registry = U::registry()?;
    let base = registry.to_base(value, from)?;
    registry.from_base(base, to)
}

/// Express `value` in `unit` as a value in the kind's base unit
pub fn to_base<U: Unit>(value: f64, unit: U) -> Result<f64, UnitsError> {
    convert(value, unit, U::BASE)
}

/// Express `value` in the kind's base unit as a value in `unit`
pub fn from_base<U: Unit>(value: f64, unit: U) -> Result<f64, UnitsError> {
    convert(value, U::BASE, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DurationUnit, LengthUnit, TemperatureUnit, VolumeUnit};

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-12 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_is_exact() {
        fn check<U: Unit>() {
            for &unit in U::ALL {
                for v in [0.1 + 0.2, -40.123, 1e-300, f64::MAX, -0.0] {
                    let same = convert(v, unit, unit).unwrap();
                    assert_eq!(same.to_bits(), v.to_bits(), "{:?}", unit);
                }
            }
        }
        check::<LengthUnit>();
        check::<DurationUnit>();
        check::<TemperatureUnit>();
        check::<VolumeUnit>();
        check::<crate::MassUnit>();
        check::<crate::ElectricCurrentUnit>();
        check::<crate::AmountOfSubstanceUnit>();
        check::<crate::LuminousIntensityUnit>();
    }

    #[test]
    fn test_round_trip_through_base() {
        fn check<U: Unit>() {
            for &unit in U::ALL {
                for v in [0.0, 1.0, -3.5, 1234.5678, 1e-9, 6.02e23] {
                    let base = convert(v, unit, U::BASE).unwrap();
                    let back = convert(base, U::BASE, unit).unwrap();
                    assert_close(back, v);
                }
            }
        }
        check::<LengthUnit>();
        check::<DurationUnit>();
        check::<TemperatureUnit>();
        check::<VolumeUnit>();
        check::<crate::MassUnit>();
        check::<crate::ElectricCurrentUnit>();
        check::<crate::AmountOfSubstanceUnit>();
        check::<crate::LuminousIntensityUnit>();
    }

    #[test]
    fn test_duration_conversions() {
        assert_eq!(convert(2.0, DurationUnit::Hour, DurationUnit::Second).unwrap(), 7200.0);
        assert_eq!(convert(7200.0, DurationUnit::Second, DurationUnit::Hour).unwrap(), 2.0);
        assert_eq!(convert(1.0, DurationUnit::Week, DurationUnit::Day).unwrap(), 7.0);
        assert_close(convert(1500.0, DurationUnit::Millisecond, DurationUnit::Second).unwrap(), 1.5);
    }

    #[test]
    fn test_length_conversions() {
        assert_close(convert(1.0, LengthUnit::Foot, LengthUnit::Inch).unwrap(), 12.0);
        assert_close(convert(1.0, LengthUnit::Mile, LengthUnit::Meter).unwrap(), 1609.34);
        assert_eq!(to_base(5.0, LengthUnit::Kilometer).unwrap(), 5000.0);
        assert_eq!(from_base(5000.0, LengthUnit::Kilometer).unwrap(), 5.0);
    }

    #[test]
    fn test_affine_temperature() {
        assert_close(convert(100.0, TemperatureUnit::DegreeCelsius, TemperatureUnit::Kelvin).unwrap(), 373.15);
        assert_close(convert(32.0, TemperatureUnit::DegreeFahrenheit, TemperatureUnit::DegreeCelsius).unwrap(), 0.0);
        assert_close(convert(-40.0, TemperatureUnit::DegreeCelsius, TemperatureUnit::DegreeFahrenheit).unwrap(), -40.0);
    }

    #[test]
    fn test_undefined_unit_is_unsupported() {
        let err = convert(1.0, LengthUnit::Undefined, LengthUnit::Meter).unwrap_err();
        assert!(matches!(err, UnitsError::UnsupportedConversion { .. }));
        // identical units short-circuit before the table is consulted
        assert_eq!(convert(1.0, LengthUnit::Undefined, LengthUnit::Undefined).unwrap(), 1.0);
    }
}
