//! Mass units (base: kilogram)

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MassUnit {
    Undefined = 0,
    Gram,
    Kilogram,
    LongTon,
    Microgram,
    Milligram,
    Ounce,
    Pound,
    ShortTon,
    Stone,
    Tonne,
}

impl Unit for MassUnit {
    const KIND: QuantityKind = QuantityKind::Mass;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::MASS;
    const BASE: Self = MassUnit::Kilogram;
    const UNDEFINED: Self = MassUnit::Undefined;

    const ALL: &'static [Self] = &[
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::LongTon,
        MassUnit::Microgram,
        MassUnit::Milligram,
        MassUnit::Ounce,
        MassUnit::Pound,
        MassUnit::ShortTon,
        MassUnit::Stone,
        MassUnit::Tonne,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (MassUnit::Gram, "en-US", &["g"]),
        (MassUnit::Gram, "ru-RU", &["г"]),
        (MassUnit::Kilogram, "en-US", &["kg"]),
        (MassUnit::Kilogram, "ru-RU", &["кг"]),
        (MassUnit::LongTon, "en-US", &["long-ton", "LT"]),
        (MassUnit::Microgram, "en-US", &["µg"]),
        (MassUnit::Microgram, "ru-RU", &["мкг"]),
        (MassUnit::Milligram, "en-US", &["mg"]),
        (MassUnit::Milligram, "ru-RU", &["мг"]),
        (MassUnit::Ounce, "en-US", &["oz"]),
        (MassUnit::Pound, "en-US", &["lb", "lbs", "lbm"]),
        (MassUnit::Pound, "ru-RU", &["фунт"]),
        (MassUnit::ShortTon, "en-US", &["ton", "ST"]),
        (MassUnit::Stone, "en-US", &["st"]),
        (MassUnit::Tonne, "en-US", &["t"]),
        (MassUnit::Tonne, "ru-RU", &["т"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            MassUnit::Undefined => "Undefined",
            MassUnit::Gram => "Gram",
            MassUnit::Kilogram => "Kilogram",
            MassUnit::LongTon => "LongTon",
            MassUnit::Microgram => "Microgram",
            MassUnit::Milligram => "Milligram",
            MassUnit::Ounce => "Ounce",
            MassUnit::Pound => "Pound",
            MassUnit::ShortTon => "ShortTon",
            MassUnit::Stone => "Stone",
            MassUnit::Tonne => "Tonne",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let factor = match self {
            MassUnit::Undefined => return None,
            MassUnit::Gram => 1e-3,
            MassUnit::Kilogram => 1.0,
            MassUnit::LongTon => 1016.0469088,
            MassUnit::Microgram => 1e-9,
            MassUnit::Milligram => 1e-6,
            MassUnit::Ounce => 0.028349523125,
            MassUnit::Pound => 0.45359237,
            MassUnit::ShortTon => 907.18474,
            MassUnit::Stone => 6.35029318,
            MassUnit::Tonne => 1e3,
        };
        Some(Conversion::Linear(factor))
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            MassUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_mass(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<MassUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
