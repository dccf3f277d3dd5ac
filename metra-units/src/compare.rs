//! Tolerance comparison
//!
//! Values are compared as plain numbers here; [`crate::Quantity`] brings
//! both sides into the same unit before calling in.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::UnitsError;

/// How a tolerance is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonType {
    /// Tolerance is a fraction of the reference value
    #[default]
    Relative,
    /// Tolerance is in the reference value's unit
    Absolute,
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonType::Relative => write!(f, "relative"),
            ComparisonType::Absolute => write!(f, "absolute"),
        }
    }
}

impl FromStr for ComparisonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relative" => Ok(ComparisonType::Relative),
            "absolute" => Ok(ComparisonType::Absolute),
            _ => Err(format!("unknown comparison type: {}", s)),
        }
    }
}

/// Whether `other` is within `tolerance` of `reference`
pub fn equals(reference: f64, other: f64, tolerance: f64, comparison: ComparisonType) -> Result<bool, UnitsError> {
    match comparison {
        ComparisonType::Relative => equals_relative(reference, other, tolerance),
        ComparisonType::Absolute => equals_absolute(reference, other, tolerance),
    }
}

/// `|reference - other| <= tolerance * |reference|`
pub fn equals_relative(reference: f64, other: f64, tolerance: f64) -> Result<bool, UnitsError> {
    check_tolerance(tolerance)?;
    Ok((reference - other).abs() <= tolerance * reference.abs())
}

/// `|reference - other| <= tolerance`
pub fn equals_absolute(reference: f64, other: f64, tolerance: f64) -> Result<bool, UnitsError> {
    check_tolerance(tolerance)?;
    Ok((reference - other).abs() <= tolerance)
}

fn check_tolerance(tolerance: f64) -> Result<(), UnitsError> {
    // NaN fails too
    if !(tolerance >= 0.0) {
        return Err(UnitsError::InvalidTolerance(tolerance));
    }
    Ok(())
}
