//! Amount of substance units (base: mole)

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AmountOfSubstanceUnit {
    Undefined = 0,
    Centimole,
    Kilomole,
    Micromole,
    Millimole,
    Mole,
    Nanomole,
    PoundMole,
}

impl Unit for AmountOfSubstanceUnit {
    const KIND: QuantityKind = QuantityKind::AmountOfSubstance;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::AMOUNT;
    const BASE: Self = AmountOfSubstanceUnit::Mole;
    const UNDEFINED: Self = AmountOfSubstanceUnit::Undefined;

    const ALL: &'static [Self] = &[
        AmountOfSubstanceUnit::Centimole,
        AmountOfSubstanceUnit::Kilomole,
        AmountOfSubstanceUnit::Micromole,
        AmountOfSubstanceUnit::Millimole,
        AmountOfSubstanceUnit::Mole,
        AmountOfSubstanceUnit::Nanomole,
        AmountOfSubstanceUnit::PoundMole,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (AmountOfSubstanceUnit::Centimole, "en-US", &["cmol"]),
        (AmountOfSubstanceUnit::Kilomole, "en-US", &["kmol"]),
        (AmountOfSubstanceUnit::Micromole, "en-US", &["µmol"]),
        (AmountOfSubstanceUnit::Millimole, "en-US", &["mmol"]),
        (AmountOfSubstanceUnit::Mole, "en-US", &["mol"]),
        (AmountOfSubstanceUnit::Mole, "ru-RU", &["моль"]),
        (AmountOfSubstanceUnit::Nanomole, "en-US", &["nmol"]),
        (AmountOfSubstanceUnit::PoundMole, "en-US", &["lbmol"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            AmountOfSubstanceUnit::Undefined => "Undefined",
            AmountOfSubstanceUnit::Centimole => "Centimole",
            AmountOfSubstanceUnit::Kilomole => "Kilomole",
            AmountOfSubstanceUnit::Micromole => "Micromole",
            AmountOfSubstanceUnit::Millimole => "Millimole",
            AmountOfSubstanceUnit::Mole => "Mole",
            AmountOfSubstanceUnit::Nanomole => "Nanomole",
            AmountOfSubstanceUnit::PoundMole => "PoundMole",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let factor = match self {
            AmountOfSubstanceUnit::Undefined => return None,
            AmountOfSubstanceUnit::Centimole => 1e-2,
            AmountOfSubstanceUnit::Kilomole => 1e3,
            AmountOfSubstanceUnit::Micromole => 1e-6,
            AmountOfSubstanceUnit::Millimole => 1e-3,
            AmountOfSubstanceUnit::Mole => 1.0,
            AmountOfSubstanceUnit::Nanomole => 1e-9,
            AmountOfSubstanceUnit::PoundMole => 453.59237,
        };
        Some(Conversion::Linear(factor))
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            AmountOfSubstanceUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_amount(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<AmountOfSubstanceUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
