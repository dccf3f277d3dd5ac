//! Quantity type - a value with a unit of one kind

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::compare::{self, ComparisonType};
use crate::format::{format_quantity, FormatOptions};
use crate::{
    convert, AbbreviationCache, BaseDimensions, QuantityKind, QuantityParser, Unit, UnitSystem, UnitsError,
};

/// A finite value tagged with a unit.
///
/// The unit is never the undefined sentinel and the value is never NaN
/// or infinite; every constructor and operation checks both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    try_from = "QuantityRepr<U>",
    into = "QuantityRepr<U>",
    bound(serialize = "U: Unit", deserialize = "U: Unit")
)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

/// Unchecked wire form
#[derive(Serialize, Deserialize)]
#[serde(bound = "U: Unit")]
struct QuantityRepr<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> TryFrom<QuantityRepr<U>> for Quantity<U> {
    type Error = UnitsError;

    fn try_from(repr: QuantityRepr<U>) -> Result<Self, Self::Error> {
        Quantity::new(repr.value, repr.unit)
    }
}

impl<U: Unit> From<Quantity<U>> for QuantityRepr<U> {
    fn from(q: Quantity<U>) -> Self {
        QuantityRepr {
            value: q.value,
            unit: q.unit,
        }
    }
}

impl<U: Unit> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Result<Self, UnitsError> {
        if unit.is_undefined() {
            return Err(UnitsError::UndefinedUnit { kind: U::KIND });
        }
        if !value.is_finite() {
            return Err(UnitsError::NonFiniteValue { kind: U::KIND, value });
        }
        Ok(Quantity { value, unit })
    }

    /// Zero in the base unit
    pub fn zero() -> Self {
        Quantity { value: 0.0, unit: U::BASE }
    }

    /// Most negative representable quantity, in the base unit
    pub fn min_value() -> Self {
        Quantity { value: f64::MIN, unit: U::BASE }
    }

    /// Largest representable quantity, in the base unit
    pub fn max_value() -> Self {
        Quantity { value: f64::MAX, unit: U::BASE }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn kind(&self) -> QuantityKind {
        U::KIND
    }

    pub fn base_dimensions(&self) -> BaseDimensions {
        U::BASE_DIMENSIONS
    }

    /// The value expressed in `unit`
    pub fn as_unit(&self, unit: U) -> Result<f64, UnitsError> {
        if unit.is_undefined() {
            return Err(UnitsError::UndefinedUnit { kind: U::KIND });
        }
        convert(self.value, self.unit, unit)
    }

    /// The same quantity expressed in `unit`
    pub fn to_unit(&self, unit: U) -> Result<Self, UnitsError> {
        Quantity::new(self.as_unit(unit)?, unit)
    }

    pub fn to_base_unit(&self) -> Result<Self, UnitsError> {
        self.to_unit(U::BASE)
    }

    /// The same quantity in the unit `system` uses for this kind
    pub fn to_unit_system(&self, system: &UnitSystem) -> Result<Self, UnitsError> {
        self.to_unit(system.unit_for::<U>()?)
    }

    /// Sum in this quantity's unit
    pub fn add(&self, other: &Self) -> Result<Self, UnitsError> {
        Quantity::new(self.value + other.as_unit(self.unit)?, self.unit)
    }

    /// Difference in this quantity's unit
    pub fn subtract(&self, other: &Self) -> Result<Self, UnitsError> {
        Quantity::new(self.value - other.as_unit(self.unit)?, self.unit)
    }

    pub fn negate(&self) -> Self {
        Quantity {
            value: -self.value,
            unit: self.unit,
        }
    }

    pub fn scale(&self, factor: f64) -> Result<Self, UnitsError> {
        Quantity::new(self.value * factor, self.unit)
    }

    pub fn divide_by_scalar(&self, divisor: f64) -> Result<Self, UnitsError> {
        Quantity::new(self.value / divisor, self.unit)
    }

    /// Dimensionless quotient, taken in the base unit
    pub fn ratio(&self, other: &Self) -> Result<f64, UnitsError> {
        Ok(self.as_unit(U::BASE)? / other.as_unit(U::BASE)?)
    }

    /// Order after converting `other` into this quantity's unit
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, UnitsError> {
        let other = other.as_unit(self.unit)?;
        Ok(self.value.partial_cmp(&other).unwrap_or(Ordering::Equal))
    }

    /// Compare within `tolerance` after converting `other` into this
    /// quantity's unit. Relative tolerances are fractions of `self`.
    pub fn equals_with_tolerance(
        &self,
        other: &Self,
        tolerance: f64,
        comparison: ComparisonType,
    ) -> Result<bool, UnitsError> {
        compare::equals(self.value, other.as_unit(self.unit)?, tolerance, comparison)
    }

    /// Parse with the shared abbreviation cache and its default locale
    pub fn parse(text: &str) -> Result<Self, UnitsError> {
        QuantityParser::shared().parse(text, None)
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        QuantityParser::shared().try_parse(text, None)
    }

    pub fn format(&self, options: &FormatOptions) -> Result<String, UnitsError> {
        self.format_with(options, AbbreviationCache::shared())
    }

    pub fn format_with(&self, options: &FormatOptions, cache: &AbbreviationCache) -> Result<String, UnitsError> {
        format_quantity(self.value, self.unit, options, cache)
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Exact comparison after converting into the left operand's unit
impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        other.as_unit(self.unit).is_ok_and(|v| v == self.value)
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(&FormatOptions::default()) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "{} {}", self.value, self.unit.name()),
        }
    }
}
