//! Volume units (base: cubic meter)
//!
//! The three cup sizes share the bare "cup" abbreviation, so parsing it
//! without a qualifier is ambiguous.

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{
    AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, LengthUnit, QuantityKind, Unit, UnitRegistry,
    UnitsError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VolumeUnit {
    Undefined = 0,
    CubicCentimeter,
    CubicDecimeter,
    CubicFoot,
    CubicInch,
    CubicMeter,
    Deciliter,
    ImperialGallon,
    Liter,
    MetricCup,
    Milliliter,
    UsCustomaryCup,
    UsGallon,
    UsLegalCup,
    UsOunce,
    UsTablespoon,
    UsTeaspoon,
}

impl Unit for VolumeUnit {
    const KIND: QuantityKind = QuantityKind::Volume;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::VOLUME;
    const BASE: Self = VolumeUnit::CubicMeter;
    const UNDEFINED: Self = VolumeUnit::Undefined;

    const ALL: &'static [Self] = &[
        VolumeUnit::CubicCentimeter,
        VolumeUnit::CubicDecimeter,
        VolumeUnit::CubicFoot,
        VolumeUnit::CubicInch,
        VolumeUnit::CubicMeter,
        VolumeUnit::Deciliter,
        VolumeUnit::ImperialGallon,
        VolumeUnit::Liter,
        VolumeUnit::MetricCup,
        VolumeUnit::Milliliter,
        VolumeUnit::UsCustomaryCup,
        VolumeUnit::UsGallon,
        VolumeUnit::UsLegalCup,
        VolumeUnit::UsOunce,
        VolumeUnit::UsTablespoon,
        VolumeUnit::UsTeaspoon,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (VolumeUnit::CubicCentimeter, "en-US", &["cm³"]),
        (VolumeUnit::CubicCentimeter, "ru-RU", &["см³"]),
        (VolumeUnit::CubicDecimeter, "en-US", &["dm³"]),
        (VolumeUnit::CubicDecimeter, "ru-RU", &["дм³"]),
        (VolumeUnit::CubicFoot, "en-US", &["ft³"]),
        (VolumeUnit::CubicInch, "en-US", &["in³"]),
        (VolumeUnit::CubicMeter, "en-US", &["m³"]),
        (VolumeUnit::CubicMeter, "ru-RU", &["м³"]),
        (VolumeUnit::Deciliter, "en-US", &["dl"]),
        (VolumeUnit::Deciliter, "ru-RU", &["дл"]),
        (VolumeUnit::ImperialGallon, "en-US", &["gal(imp.)"]),
        (VolumeUnit::Liter, "en-US", &["l"]),
        (VolumeUnit::Liter, "ru-RU", &["л"]),
        (VolumeUnit::MetricCup, "en-US", &["cup(metric)", "cup"]),
        (VolumeUnit::Milliliter, "en-US", &["ml"]),
        (VolumeUnit::Milliliter, "ru-RU", &["мл"]),
        (VolumeUnit::UsCustomaryCup, "en-US", &["cup(US)", "cup"]),
        (VolumeUnit::UsGallon, "en-US", &["gal(U.S.)", "gal"]),
        (VolumeUnit::UsLegalCup, "en-US", &["cup(legal)", "cup"]),
        (VolumeUnit::UsOunce, "en-US", &["floz"]),
        (VolumeUnit::UsTablespoon, "en-US", &["tbsp"]),
        (VolumeUnit::UsTeaspoon, "en-US", &["tsp"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::Undefined => "Undefined",
            VolumeUnit::CubicCentimeter => "CubicCentimeter",
            VolumeUnit::CubicDecimeter => "CubicDecimeter",
            VolumeUnit::CubicFoot => "CubicFoot",
            VolumeUnit::CubicInch => "CubicInch",
            VolumeUnit::CubicMeter => "CubicMeter",
            VolumeUnit::Deciliter => "Deciliter",
            VolumeUnit::ImperialGallon => "ImperialGallon",
            VolumeUnit::Liter => "Liter",
            VolumeUnit::MetricCup => "MetricCup",
            VolumeUnit::Milliliter => "Milliliter",
            VolumeUnit::UsCustomaryCup => "UsCustomaryCup",
            VolumeUnit::UsGallon => "UsGallon",
            VolumeUnit::UsLegalCup => "UsLegalCup",
            VolumeUnit::UsOunce => "UsOunce",
            VolumeUnit::UsTablespoon => "UsTablespoon",
            VolumeUnit::UsTeaspoon => "UsTeaspoon",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let factor = match self {
            VolumeUnit::Undefined => return None,
            VolumeUnit::CubicCentimeter => 1e-6,
            VolumeUnit::CubicDecimeter => 1e-3,
            VolumeUnit::CubicFoot => 0.028316846592,
            VolumeUnit::CubicInch => 1.6387064e-5,
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::Deciliter => 1e-4,
            VolumeUnit::ImperialGallon => 0.00454609,
            VolumeUnit::Liter => 1e-3,
            VolumeUnit::MetricCup => 0.00025,
            VolumeUnit::Milliliter => 1e-6,
            VolumeUnit::UsCustomaryCup => 0.0002365882365,
            VolumeUnit::UsGallon => 0.003785411784,
            VolumeUnit::UsLegalCup => 0.00024,
            VolumeUnit::UsOunce => 2.95735295625e-5,
            VolumeUnit::UsTablespoon => 1.478676478125e-5,
            VolumeUnit::UsTeaspoon => 4.92892159375e-6,
        };
        Some(Conversion::Linear(factor))
    }

    /// Only the cubes of a length unit map onto base units
    fn base_units(self) -> Option<BaseUnits> {
        let length = match self {
            VolumeUnit::CubicMeter => LengthUnit::Meter,
            VolumeUnit::CubicDecimeter | VolumeUnit::Liter => LengthUnit::Decimeter,
            VolumeUnit::CubicCentimeter | VolumeUnit::Milliliter => LengthUnit::Centimeter,
            VolumeUnit::CubicFoot => LengthUnit::Foot,
            VolumeUnit::CubicInch => LengthUnit::Inch,
            _ => return None,
        };
        Some(BaseUnits::UNDEFINED.with_length(length))
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<VolumeUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    #[test]
    fn test_liter_is_cubic_decimeter() {
        assert_eq!(convert(1.0, VolumeUnit::Liter, VolumeUnit::CubicDecimeter).unwrap(), 1.0);
        assert_eq!(VolumeUnit::Liter.base_units(), VolumeUnit::CubicDecimeter.base_units());
        assert!(VolumeUnit::UsGallon.base_units().is_none());
    }

    #[test]
    fn test_kitchen_measures() {
        let tsp = convert(3.0, VolumeUnit::UsTeaspoon, VolumeUnit::UsTablespoon).unwrap();
        assert!((tsp - 1.0).abs() < 1e-12);
        let oz = convert(2.0, VolumeUnit::UsTablespoon, VolumeUnit::UsOunce).unwrap();
        assert!((oz - 1.0).abs() < 1e-12);
    }
}
