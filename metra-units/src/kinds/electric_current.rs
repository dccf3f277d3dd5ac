//! Electric current units (base: ampere)

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElectricCurrentUnit {
    Undefined = 0,
    Ampere,
    Centiampere,
    Kiloampere,
    Megaampere,
    Microampere,
    Milliampere,
    Nanoampere,
    Picoampere,
}

impl Unit for ElectricCurrentUnit {
    const KIND: QuantityKind = QuantityKind::ElectricCurrent;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::CURRENT;
    const BASE: Self = ElectricCurrentUnit::Ampere;
    const UNDEFINED: Self = ElectricCurrentUnit::Undefined;

    const ALL: &'static [Self] = &[
        ElectricCurrentUnit::Ampere,
        ElectricCurrentUnit::Centiampere,
        ElectricCurrentUnit::Kiloampere,
        ElectricCurrentUnit::Megaampere,
        ElectricCurrentUnit::Microampere,
        ElectricCurrentUnit::Milliampere,
        ElectricCurrentUnit::Nanoampere,
        ElectricCurrentUnit::Picoampere,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (ElectricCurrentUnit::Ampere, "en-US", &["A"]),
        (ElectricCurrentUnit::Centiampere, "en-US", &["cA"]),
        (ElectricCurrentUnit::Kiloampere, "en-US", &["kA"]),
        (ElectricCurrentUnit::Megaampere, "en-US", &["MA"]),
        (ElectricCurrentUnit::Microampere, "en-US", &["µA"]),
        (ElectricCurrentUnit::Milliampere, "en-US", &["mA"]),
        (ElectricCurrentUnit::Nanoampere, "en-US", &["nA"]),
        (ElectricCurrentUnit::Picoampere, "en-US", &["pA"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            ElectricCurrentUnit::Undefined => "Undefined",
            ElectricCurrentUnit::Ampere => "Ampere",
            ElectricCurrentUnit::Centiampere => "Centiampere",
            ElectricCurrentUnit::Kiloampere => "Kiloampere",
            ElectricCurrentUnit::Megaampere => "Megaampere",
            ElectricCurrentUnit::Microampere => "Microampere",
            ElectricCurrentUnit::Milliampere => "Milliampere",
            ElectricCurrentUnit::Nanoampere => "Nanoampere",
            ElectricCurrentUnit::Picoampere => "Picoampere",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let factor = match self {
            ElectricCurrentUnit::Undefined => return None,
            ElectricCurrentUnit::Ampere => 1.0,
            ElectricCurrentUnit::Centiampere => 1e-2,
            ElectricCurrentUnit::Kiloampere => 1e3,
            ElectricCurrentUnit::Megaampere => 1e6,
            ElectricCurrentUnit::Microampere => 1e-6,
            ElectricCurrentUnit::Milliampere => 1e-3,
            ElectricCurrentUnit::Nanoampere => 1e-9,
            ElectricCurrentUnit::Picoampere => 1e-12,
        };
        Some(Conversion::Linear(factor))
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            ElectricCurrentUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_current(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<ElectricCurrentUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
