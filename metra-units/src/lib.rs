//! Metra Units - Quantities, unit conversion and quantity parsing
//!
//! A [`Quantity`] is a finite value tagged with a unit of one kind.
//! Conversions between units of a kind pivot through the kind's base
//! unit, using the formulas in that kind's [`UnitRegistry`].
//!
//! Kinds:
//! - Length (m, km, ft, in, mi, ...)
//! - Mass (kg, g, lb, oz, ...)
//! - Duration (s, min, h, d, ...)
//! - ElectricCurrent (A, mA, ...)
//! - Temperature (K, °C, °F, ...)
//! - AmountOfSubstance (mol, mmol, ...)
//! - LuminousIntensity (cd)
//! - Volume (m³, l, ml, gal, cup, ...)
//!
//! Text goes through the [`AbbreviationCache`]: [`QuantityParser`] reads
//! "5.5 m" or "1ft 2in", and [`Quantity`]'s `Display` writes "5.5 m".

mod abbreviations;
mod base_units;
mod compare;
mod convert;
mod dimension;
mod dynamic;
mod error;
mod format;
mod kinds;
mod parse;
mod quantity;
mod registry;
mod unit;

pub use abbreviations::{AbbreviationCache, AbbreviationCacheBuilder, MatchCase};
pub use base_units::{BaseUnits, UnitSystem};
pub use compare::{equals, equals_absolute, equals_relative, ComparisonType};
pub use convert::{convert, from_base, to_base};
pub use dimension::BaseDimensions;
pub use dynamic::{convert_any, AnyQuantity, UnitId};
pub use error::UnitsError;
pub use format::{format_quantity, FormatOptions};
pub use kinds::{
    AmountOfSubstanceUnit, DurationUnit, ElectricCurrentUnit, LengthUnit, LuminousIntensityUnit, MassUnit,
    QuantityKind, TemperatureUnit, VolumeUnit,
};
pub use parse::QuantityParser;
pub use quantity::Quantity;
pub use registry::UnitRegistry;
pub use unit::{AbbreviationEntry, Conversion, Unit};

pub type AmountOfSubstance = Quantity<AmountOfSubstanceUnit>;
pub type Duration = Quantity<DurationUnit>;
pub type ElectricCurrent = Quantity<ElectricCurrentUnit>;
pub type Length = Quantity<LengthUnit>;
pub type LuminousIntensity = Quantity<LuminousIntensityUnit>;
pub type Mass = Quantity<MassUnit>;
pub type Temperature = Quantity<TemperatureUnit>;
pub type Volume = Quantity<VolumeUnit>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_convert() {
        let length = Length::parse("1ft 2in").unwrap();
        let inches = length.to_unit(LengthUnit::Inch).unwrap();
        assert!((inches.value() - 14.0).abs() < 1e-9);
        assert_eq!(inches.to_string(), "14 in");
    }

    #[test]
    fn test_kinds_are_distinct_dimensions() {
        for a in QuantityKind::ALL {
            for b in QuantityKind::ALL {
                assert_eq!(a.is_compatible_with(b), a == b, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_shared_state_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AbbreviationCache>();
        assert_send_sync::<Length>();
        assert_send_sync::<BaseUnits>();
        assert_send_sync::<UnitRegistry<VolumeUnit>>();
    }
}
