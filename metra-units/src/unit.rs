//! Unit representation with conversion formulas
//!
//! Every quantity kind supplies an enum of its units implementing [`Unit`]:
//! the list of real units, the undefined sentinel, the base unit, a
//! formula per unit relating it to the base unit, and the abbreviation
//! table. The engine only ever talks to kinds through this trait.

use std::fmt;
use std::hash::Hash;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::{BaseDimensions, BaseUnits, QuantityKind, UnitRegistry, UnitsError};

/// Abbreviations of one unit in one locale, first entry is the default
pub type AbbreviationEntry<U> = (U, &'static str, &'static [&'static str]);

/// Formula relating a unit to its kind's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// base = value * factor
    Linear(f64),
    /// base = value * factor + offset
    Affine { factor: f64, offset: f64 },
}

impl Conversion {
    pub const IDENTITY: Conversion = Conversion::Linear(1.0);

    /// Convert a value in this unit to the base unit
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => value * factor,
            Conversion::Affine { factor, offset } => value * factor + offset,
        }
    }

    /// Convert a value in the base unit to this unit
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => value / factor,
            Conversion::Affine { factor, offset } => (value - offset) / factor,
        }
    }

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY || self == (Conversion::Affine { factor: 1.0, offset: 0.0 })
    }
}

/// A unit of one quantity kind
pub trait Unit:
    Copy + Eq + Hash + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The quantity kind these units measure
    const KIND: QuantityKind;

    /// Dimensionality shared by every unit of the kind
    const BASE_DIMENSIONS: BaseDimensions;

    /// Unit every conversion pivots through
    const BASE: Self;

    /// Sentinel that never appears in a constructed quantity
    const UNDEFINED: Self;

    /// Every unit except the sentinel, in declaration order
    const ALL: &'static [Self];

    /// Abbreviation table keyed by locale tag
    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>];

    /// Stable index of the variant
    fn ordinal(self) -> usize;

    /// Variant name, e.g. "Foot"
    fn name(self) -> &'static str;

    /// Formula to and from the base unit; `None` for the sentinel
    fn conversion(self) -> Option<Conversion>;

    /// Base units the unit is expressed in, when it maps onto them
    fn base_units(self) -> Option<BaseUnits> {
        None
    }

    /// The kind's conversion table, built once per process
    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError>;

    fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.ordinal() == ordinal)
    }

    /// Look up a unit by its variant name, ignoring case
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_round_trip() {
        let hour = Conversion::Linear(3600.0);
        assert_eq!(hour.to_base(2.0), 7200.0);
        assert_eq!(hour.from_base(7200.0), 2.0);
    }

    #[test]
    fn test_affine() {
        let celsius = Conversion::Affine { factor: 1.0, offset: 273.15 };
        assert_eq!(celsius.to_base(0.0), 273.15);
        assert_eq!(celsius.from_base(273.15), 0.0);
    }

    #[test]
    fn test_identity() {
        assert!(Conversion::IDENTITY.is_identity());
        assert!(Conversion::Affine { factor: 1.0, offset: 0.0 }.is_identity());
        assert!(!Conversion::Linear(1000.0).is_identity());
    }
}
