//! Length units (base: meter)

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LengthUnit {
    Undefined = 0,
    Centimeter,
    Decimeter,
    Foot,
    Inch,
    Kilometer,
    Megameter,
    Meter,
    Micrometer,
    Mile,
    Millimeter,
    Nanometer,
    NauticalMile,
    Yard,
}

impl Unit for LengthUnit {
    const KIND: QuantityKind = QuantityKind::Length;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::LENGTH;
    const BASE: Self = LengthUnit::Meter;
    const UNDEFINED: Self = LengthUnit::Undefined;

    const ALL: &'static [Self] = &[
        LengthUnit::Centimeter,
        LengthUnit::Decimeter,
        LengthUnit::Foot,
        LengthUnit::Inch,
        LengthUnit::Kilometer,
        LengthUnit::Megameter,
        LengthUnit::Meter,
        LengthUnit::Micrometer,
        LengthUnit::Mile,
        LengthUnit::Millimeter,
        LengthUnit::Nanometer,
        LengthUnit::NauticalMile,
        LengthUnit::Yard,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (LengthUnit::Centimeter, "en-US", &["cm"]),
        (LengthUnit::Centimeter, "ru-RU", &["см"]),
        (LengthUnit::Decimeter, "en-US", &["dm"]),
        (LengthUnit::Decimeter, "ru-RU", &["дм"]),
        (LengthUnit::Foot, "en-US", &["ft", "'", "′"]),
        (LengthUnit::Foot, "ru-RU", &["фут"]),
        (LengthUnit::Inch, "en-US", &["in", "\"", "″"]),
        (LengthUnit::Inch, "ru-RU", &["дюйм"]),
        (LengthUnit::Kilometer, "en-US", &["km"]),
        (LengthUnit::Kilometer, "ru-RU", &["км"]),
        (LengthUnit::Megameter, "en-US", &["Mm"]),
        (LengthUnit::Megameter, "ru-RU", &["Мм"]),
        (LengthUnit::Meter, "en-US", &["m"]),
        (LengthUnit::Meter, "ru-RU", &["м"]),
        (LengthUnit::Micrometer, "en-US", &["µm"]),
        (LengthUnit::Micrometer, "ru-RU", &["мкм"]),
        (LengthUnit::Mile, "en-US", &["mi"]),
        (LengthUnit::Mile, "ru-RU", &["миля"]),
        (LengthUnit::Millimeter, "en-US", &["mm"]),
        (LengthUnit::Millimeter, "ru-RU", &["мм"]),
        (LengthUnit::Nanometer, "en-US", &["nm"]),
        (LengthUnit::Nanometer, "ru-RU", &["нм"]),
        (LengthUnit::NauticalMile, "en-US", &["NM"]),
        (LengthUnit::NauticalMile, "ru-RU", &["мил"]),
        (LengthUnit::Yard, "en-US", &["yd"]),
        (LengthUnit::Yard, "ru-RU", &["ярд"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Undefined => "Undefined",
            LengthUnit::Centimeter => "Centimeter",
            LengthUnit::Decimeter => "Decimeter",
            LengthUnit::Foot => "Foot",
            LengthUnit::Inch => "Inch",
            LengthUnit::Kilometer => "Kilometer",
            LengthUnit::Megameter => "Megameter",
            LengthUnit::Meter => "Meter",
            LengthUnit::Micrometer => "Micrometer",
            LengthUnit::Mile => "Mile",
            LengthUnit::Millimeter => "Millimeter",
            LengthUnit::Nanometer => "Nanometer",
            LengthUnit::NauticalMile => "NauticalMile",
            LengthUnit::Yard => "Yard",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let factor = match self {
            LengthUnit::Undefined => return None,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Decimeter => 1e-1,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 2.54e-2,
            LengthUnit::Kilometer => 1e3,
            LengthUnit::Megameter => 1e6,
            LengthUnit::Meter => 1.0,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Mile => 1609.34,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::NauticalMile => 1852.0,
            LengthUnit::Yard => 0.9144,
        };
        Some(Conversion::Linear(factor))
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            LengthUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_length(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<LengthUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
