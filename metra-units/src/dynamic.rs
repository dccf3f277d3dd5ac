//! Kind-erased units and quantities
//!
//! For callers that only learn the quantity kind at run time, such as
//! the command line front end. A [`UnitId`] names a unit by kind and
//! variant ordinal; [`AnyQuantity`] pairs it with a value.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::kinds::dispatch_kind;
use crate::{
    convert, AbbreviationCache, BaseUnits, FormatOptions, Quantity, QuantityKind, Unit, UnitsError,
};

/// A unit of any kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId {
    pub kind: QuantityKind,
    pub index: u16,
}

impl UnitId {
    pub fn of<U: Unit>(unit: U) -> Self {
        UnitId {
            kind: U::KIND,
            index: unit.ordinal() as u16,
        }
    }

    /// The typed unit, if this id belongs to `U`'s kind
    pub fn downcast<U: Unit>(self) -> Option<U> {
        if self.kind != U::KIND {
            return None;
        }
        U::from_ordinal(self.index as usize)
    }

    /// Variant name, e.g. "Foot"
    pub fn name(self) -> &'static str {
        dispatch_kind!(self.kind, U => self.downcast::<U>().map_or("Undefined", |u| u.name()))
    }

    pub fn is_base(self) -> bool {
        self == self.kind.base_unit()
    }

    pub fn base_units(self) -> Option<BaseUnits> {
        dispatch_kind!(self.kind, U => self.downcast::<U>().and_then(|u| u.base_units()))
    }

    /// Abbreviations in the shared cache's default locale
    pub fn abbreviations(self) -> &'static [String] {
        AbbreviationCache::shared().abbreviations_for_id(self, None)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value with a unit of any kind, checked like [`Quantity`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnyQuantityRepr", into = "AnyQuantityRepr")]
pub struct AnyQuantity {
    value: f64,
    unit: UnitId,
}

/// Unchecked wire form
#[derive(Serialize, Deserialize)]
struct AnyQuantityRepr {
    value: f64,
    unit: UnitId,
}

impl TryFrom<AnyQuantityRepr> for AnyQuantity {
    type Error = UnitsError;

    fn try_from(repr: AnyQuantityRepr) -> Result<Self, Self::Error> {
        AnyQuantity::new(repr.value, repr.unit)
    }
}

impl From<AnyQuantity> for AnyQuantityRepr {
    fn from(q: AnyQuantity) -> Self {
        AnyQuantityRepr {
            value: q.value,
            unit: q.unit,
        }
    }
}

impl AnyQuantity {
    /// Checked like [`Quantity::new`]
    pub fn new(value: f64, unit: UnitId) -> Result<Self, UnitsError> {
        dispatch_kind!(unit.kind, U => {
            let typed = unit.downcast::<U>().ok_or(UnitsError::UndefinedUnit { kind: unit.kind })?;
            Quantity::new(value, typed).map(AnyQuantity::from)
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> UnitId {
        self.unit
    }

    pub fn kind(&self) -> QuantityKind {
        self.unit.kind
    }

    pub fn downcast<U: Unit>(&self) -> Option<Quantity<U>> {
        Quantity::new(self.value, self.unit.downcast::<U>()?).ok()
    }

    /// The same quantity expressed in `unit`, which must be of the same kind
    pub fn to_unit(&self, unit: UnitId) -> Result<Self, UnitsError> {
        AnyQuantity::new(convert_any(self.value, self.unit, unit)?, unit)
    }

    pub fn format(&self, options: &FormatOptions, cache: &AbbreviationCache) -> Result<String, UnitsError> {
        dispatch_kind!(self.kind(), U => match self.downcast::<U>() {
            Some(q) => q.format_with(options, cache),
            None => Err(UnitsError::UndefinedUnit { kind: self.kind() }),
        })
    }
}

impl<U: Unit> From<Quantity<U>> for AnyQuantity {
    fn from(q: Quantity<U>) -> Self {
        AnyQuantity {
            value: q.value(),
            unit: UnitId::of(q.unit()),
        }
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(&FormatOptions::default(), AbbreviationCache::shared()) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

/// Convert between two units of the same kind
pub fn convert_any(value: f64, from: UnitId, to: UnitId) -> Result<f64, UnitsError> {
    if from.kind != to.kind {
        return Err(UnitsError::IncompatibleKinds {
            from: from.kind,
            to: to.kind,
        });
    }
    dispatch_kind!(from.kind, U => {
        let undefined = || UnitsError::UndefinedUnit { kind: from.kind };
        let source = from.downcast::<U>().ok_or_else(undefined)?;
        let target = to.downcast::<U>().ok_or_else(undefined)?;
        convert(value, source, target)
    })
}
