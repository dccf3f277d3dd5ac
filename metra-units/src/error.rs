//! Errors raised by the unit engine

use metra_core::{codes, MetraError, Severity};
use thiserror::Error;
use crate::QuantityKind;

/// Errors that can occur when constructing, converting, parsing or
/// comparing quantities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitsError {
    /// NaN or infinite value supplied to a constructor
    #[error("{kind} cannot be created with the non-finite value {value}")]
    NonFiniteValue { kind: QuantityKind, value: f64 },

    /// The undefined sentinel supplied where a real unit is required
    #[error("{kind} cannot be created with an undefined unit")]
    UndefinedUnit { kind: QuantityKind },

    /// The unit table has no formula for a unit it lists
    #[error("unsupported conversion: {kind} has no conversion for unit {unit}")]
    UnsupportedConversion { kind: QuantityKind, unit: String },

    /// Conversion requested between units of different kinds
    #[error("cannot convert between {from} and {to}: different quantity kinds")]
    IncompatibleKinds { from: QuantityKind, to: QuantityKind },

    /// Input does not follow "<number> <unit>"
    #[error("unable to parse {input:?}: expected \"<number> <unit>\", e.g. \"5.5 m\" or \"1ft 2in\"")]
    ParseFormat { input: String },

    /// No unit of the kind has this abbreviation
    #[error("unknown unit abbreviation {abbreviation:?} for {kind}")]
    UnknownAbbreviation { abbreviation: String, kind: QuantityKind },

    /// Several units of the kind share this abbreviation
    #[error("cannot parse {abbreviation:?} since it could be any of these {kind} units: {}", candidates.join(", "))]
    AmbiguousUnit {
        abbreviation: String,
        kind: QuantityKind,
        candidates: Vec<String>,
    },

    /// Negative (or NaN) tolerance given to the comparator
    #[error("tolerance must be greater than or equal to 0, got {0}")]
    InvalidTolerance(f64),

    /// No abbreviation registered for the unit in any locale
    #[error("no abbreviation is specified for {kind} unit {unit}")]
    MissingAbbreviation { kind: QuantityKind, unit: String },

    /// No unit of the kind is expressed in the given unit system
    #[error("no {kind} unit is expressed in the base units {base_units}")]
    NoUnitForSystem { kind: QuantityKind, base_units: String },
}

impl UnitsError {
    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            UnitsError::NonFiniteValue { .. } => codes::INVALID_VALUE,
            UnitsError::UndefinedUnit { .. } => codes::UNDEFINED_UNIT,
            UnitsError::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
            UnitsError::IncompatibleKinds { .. } => codes::INCOMPATIBLE_KINDS,
            UnitsError::ParseFormat { .. } => codes::PARSE_ERROR,
            UnitsError::UnknownAbbreviation { .. } => codes::UNKNOWN_UNIT,
            UnitsError::AmbiguousUnit { .. } => codes::AMBIGUOUS_UNIT,
            UnitsError::InvalidTolerance(_) => codes::INVALID_TOLERANCE,
            UnitsError::MissingAbbreviation { .. } => codes::MISSING_ABBREVIATION,
            UnitsError::NoUnitForSystem { .. } => codes::NO_UNIT_FOR_SYSTEM,
        }
    }

    /// Defects in the unit tables are fatal; everything else is caller input
    pub fn severity(&self) -> Severity {
        match self {
            UnitsError::UnsupportedConversion { .. } | UnitsError::MissingAbbreviation { .. } => Severity::Fatal,
            _ => Severity::Error,
        }
    }

    /// Whether a `try_*` entry point reports this error as a plain failure
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            UnitsError::ParseFormat { .. }
                | UnitsError::UnknownAbbreviation { .. }
                | UnitsError::AmbiguousUnit { .. }
        )
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            UnitsError::AmbiguousUnit { candidates, .. } => Some(format!(
                "Specify the unit explicitly instead of parsing text; candidates: {}",
                candidates.join(", ")
            )),
            UnitsError::UnknownAbbreviation { kind, .. } => {
                Some(format!("List the abbreviations of {} with the units method", kind))
            }
            UnitsError::ParseFormat { .. } => {
                Some("Use the form \"<number> <unit>\", e.g. \"5.5 m\" or \"1ft 2in\"".to_string())
            }
            UnitsError::InvalidTolerance(_) => Some("Pass a tolerance of 0 or more".to_string()),
            UnitsError::UnsupportedConversion { .. } | UnitsError::MissingAbbreviation { .. } => {
                Some("This is a defect in the unit tables, please report it".to_string())
            }
            _ => None,
        }
    }
}

impl From<UnitsError> for MetraError {
    fn from(err: UnitsError) -> Self {
        let mut out = MetraError::new(err.code(), err.to_string()).with_severity(err.severity());
        if let Some(suggestion) = err.suggestion() {
            out = out.with_suggestion(suggestion);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = UnitsError::AmbiguousUnit {
            abbreviation: "cup".to_string(),
            kind: QuantityKind::Volume,
            candidates: vec!["MetricCup".to_string(), "UsLegalCup".to_string()],
        };
        let text = err.to_string();
        assert!(text.contains("MetricCup, UsLegalCup"));
        assert!(text.contains("Volume"));
    }

    #[test]
    fn test_severity() {
        let defect = UnitsError::UnsupportedConversion {
            kind: QuantityKind::Length,
            unit: "Foot".to_string(),
        };
        assert_eq!(defect.severity(), Severity::Fatal);
        assert!(!defect.is_recoverable());

        let input = UnitsError::ParseFormat { input: "m".to_string() };
        assert_eq!(input.severity(), Severity::Error);
        assert!(input.is_recoverable());
    }

    #[test]
    fn test_into_metra_error() {
        let err: MetraError = UnitsError::InvalidTolerance(-1.0).into();
        assert_eq!(err.code, codes::INVALID_TOLERANCE);
        assert!(err.suggestion.is_some());
        assert!(!err.is_fatal());
    }
}
