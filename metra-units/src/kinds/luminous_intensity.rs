use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LuminousIntensityUnit {
    Undefined = 0,
    Candela,
}

impl Unit for LuminousIntensityUnit {
    const KIND: QuantityKind = QuantityKind::LuminousIntensity;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::LUMINOUS_INTENSITY;
    const BASE: Self = LuminousIntensityUnit::Candela;
    const UNDEFINED: Self = LuminousIntensityUnit::Undefined;
    const ALL: &'static [Self] = &[LuminousIntensityUnit::Candela];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (LuminousIntensityUnit::Candela, "en-US", &["cd"]),
        (LuminousIntensityUnit::Candela, "ru-RU", &["кд"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            LuminousIntensityUnit::Undefined => "Undefined",
            LuminousIntensityUnit::Candela => "Candela",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        match self {
            LuminousIntensityUnit::Undefined => None,
            LuminousIntensityUnit::Candela => Some(Conversion::IDENTITY),
        }
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            LuminousIntensityUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_luminous_intensity(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<LuminousIntensityUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
