//! Per-kind conversion tables
//!
//! A registry is built once per quantity kind from the kind's [`Unit`]
//! implementation: a slot per variant ordinal holding the formula to and
//! from the base unit. Building fails if any listed unit lacks a formula,
//! so lookups afterwards only fail for the undefined sentinel.

use std::marker::PhantomData;
use tracing::{debug, warn};
use crate::{Conversion, Unit, UnitsError};

/// Conversion table for the units of one kind
#[derive(Debug)]
pub struct UnitRegistry<U: Unit> {
    conversions: Vec<Option<Conversion>>,
    _unit: PhantomData<U>,
}

impl<U: Unit> UnitRegistry<U> {
    /// Build the table, checking that every unit in `U::ALL` has a formula
    pub fn build() -> Result<Self, UnitsError> {
        let len = U::ALL
            .iter()
            .map(|u| u.ordinal() + 1)
            .max()
            .unwrap_or(0)
            .max(U::UNDEFINED.ordinal() + 1);
        let mut conversions = vec![None; len];

        for &unit in U::ALL {
            let conversion = unit.conversion().ok_or_else(|| {
                warn!(kind = %U::KIND, unit = unit.name(), "unit has no conversion formula");
                UnitsError::UnsupportedConversion {
                    kind: U::KIND,
                    unit: unit.name().to_string(),
                }
            })?;
            conversions[unit.ordinal()] = Some(conversion);
        }

        debug!(kind = %U::KIND, units = U::ALL.len(), base = U::BASE.name(), "unit registry built");

        Ok(UnitRegistry {
            conversions,
            _unit: PhantomData,
        })
    }

    /// The formula for `unit`
    pub fn conversion(&self, unit: U) -> Result<Conversion, UnitsError> {
        self.conversions
            .get(unit.ordinal())
            .copied()
            .flatten()
            .ok_or_else(|| UnitsError::UnsupportedConversion {
                kind: U::KIND,
                unit: unit.name().to_string(),
            })
    }

    /// Value in `unit` expressed in the base unit
    pub fn to_base(&self, value: f64, unit: U) -> Result<f64, UnitsError> {
        Ok(self.conversion(unit)?.to_base(value))
    }

    /// Value in the base unit expressed in `unit`
    pub fn from_base(&self, value: f64, unit: U) -> Result<f64, UnitsError> {
        Ok(self.conversion(unit)?.from_base(value))
    }

    /// Number of units with a formula
    pub fn len(&self) -> usize {
        self.conversions.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::LazyLock;
    use serde::{Deserialize, Serialize};
    use crate::{AbbreviationEntry, BaseDimensions, QuantityKind};

    /// Unit table with a hole: `Broken` is listed but has no formula
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum GappyUnit {
        Undefined,
        Whole,
        Broken,
    }

    impl Unit for GappyUnit {
        const KIND: QuantityKind = QuantityKind::Length;
        const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::LENGTH;
        const BASE: Self = GappyUnit::Whole;
        const UNDEFINED: Self = GappyUnit::Undefined;
        const ALL: &'static [Self] = &[GappyUnit::Whole, GappyUnit::Broken];
        const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[];

        fn ordinal(self) -> usize {
            self as usize
        }

        fn name(self) -> &'static str {
            match self {
                GappyUnit::Undefined => "Undefined",
                GappyUnit::Whole => "Whole",
                GappyUnit::Broken => "Broken",
            }
        }

        fn conversion(self) -> Option<Conversion> {
            match self {
                GappyUnit::Whole => Some(Conversion::IDENTITY),
                _ => None,
            }
        }

        fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
            static REGISTRY: LazyLock<Result<UnitRegistry<GappyUnit>, UnitsError>> =
                LazyLock::new(UnitRegistry::build);
            REGISTRY.as_ref().map_err(Clone::clone)
        }
    }

    #[test]
    fn test_build_rejects_missing_formula() {
        let err = UnitRegistry::<GappyUnit>::build().unwrap_err();
        assert_eq!(
            err,
            UnitsError::UnsupportedConversion {
                kind: QuantityKind::Length,
                unit: "Broken".to_string(),
            }
        );
        assert!(GappyUnit::registry().is_err());
    }

    #[test]
    fn test_complete_registry() {
        let registry = UnitRegistry::<crate::LengthUnit>::build().unwrap();
        assert_eq!(registry.len(), crate::LengthUnit::ALL.len());
        assert_eq!(registry.to_base(1.0, crate::LengthUnit::Kilometer).unwrap(), 1000.0);
        assert_eq!(registry.from_base(1000.0, crate::LengthUnit::Kilometer).unwrap(), 1.0);
    }

    #[test]
    fn test_sentinel_has_no_formula() {
        let registry = UnitRegistry::<crate::LengthUnit>::build().unwrap();
        assert!(matches!(
            registry.conversion(crate::LengthUnit::Undefined),
            Err(UnitsError::UnsupportedConversion { .. })
        ));
    }
}
