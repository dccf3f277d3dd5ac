//! Quantity rendering

use metra_core::number::format_value;
use metra_core::Locale;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationCache, Unit, UnitsError};

/// How a quantity is written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Locale for the abbreviation and separators; the cache default when unset
    pub locale: Option<Locale>,
    /// Significant digits after the radix
    pub significant_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            locale: None,
            significant_digits: 2,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }
}

/// "{value} {default abbreviation}", e.g. "1,234.57 m"
pub fn format_quantity<U: Unit>(
    value: f64,
    unit: U,
    options: &FormatOptions,
    cache: &AbbreviationCache,
) -> Result<String, UnitsError> {
    let locale = options.locale.as_ref().unwrap_or(cache.default_locale());
    let abbreviation = cache.default_abbreviation(unit, Some(locale))?;
    let number = format_value(value, options.significant_digits, &locale.number_format());
    Ok(format!("{} {}", number, abbreviation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DurationUnit, LengthUnit};

    #[test]
    fn test_format_default() {
        let cache = AbbreviationCache::shared();
        let opts = FormatOptions::default();
        assert_eq!(format_quantity(0.0, DurationUnit::Second, &opts, cache).unwrap(), "0 s");
        assert_eq!(format_quantity(1234.5678, LengthUnit::Meter, &opts, cache).unwrap(), "1,234.57 m");
        assert_eq!(format_quantity(2.5e6, LengthUnit::Meter, &opts, cache).unwrap(), "2.5e+06 m");
    }

    #[test]
    fn test_format_locale() {
        let cache = AbbreviationCache::shared();
        let opts = FormatOptions::new().with_locale(Locale::RU_RU).with_significant_digits(1);
        assert_eq!(format_quantity(1.26, LengthUnit::Kilometer, &opts, cache).unwrap(), "1,3 км");
    }

    #[test]
    fn test_format_huge_digit_count() {
        let cache = AbbreviationCache::shared();
        let opts = FormatOptions::new().with_significant_digits(100_000);
        assert_eq!(format_quantity(5.5, LengthUnit::Meter, &opts, cache).unwrap(), "5.5 m");
    }

    #[test]
    fn test_format_missing_abbreviation() {
        let cache = AbbreviationCache::builder().build();
        let err = format_quantity(1.0, LengthUnit::Meter, &FormatOptions::default(), &cache).unwrap_err();
        assert!(matches!(err, UnitsError::MissingAbbreviation { .. }));
    }
}
