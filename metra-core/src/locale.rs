//! Locale model
//!
//! A locale is an IETF-style tag ("en-US", "ru-RU"). It keys the
//! abbreviation tables and selects the separators used when reading and
//! writing numbers.

use std::borrow::Cow;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Language tag identifying a set of abbreviations and a number format.
///
/// Tags are stored in canonical case ("en-US"), so "en-us" and "EN_us"
/// name the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// English (United States). Also the fallback for missing entries.
    pub const EN_US: Locale = Locale(Cow::Borrowed("en-US"));

    /// Russian (Russia)
    pub const RU_RU: Locale = Locale(Cow::Borrowed("ru-RU"));

    /// Norwegian Bokmål (Norway)
    pub const NB_NO: Locale = Locale(Cow::Borrowed("nb-NO"));

    /// German (Germany)
    pub const DE_DE: Locale = Locale(Cow::Borrowed("de-DE"));

    /// Locale used when a lookup in the requested locale finds nothing
    pub const FALLBACK: Locale = Self::EN_US;

    /// Create a locale from any tag, normalizing its case and separators
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(Cow::Owned(canonical_tag(&tag.into())))
    }

    /// The full tag, e.g. "en-US"
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The language subtag, e.g. "en"
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }

    /// Separators used for numbers in this locale
    pub fn number_format(&self) -> NumberFormat {
        match self.language().to_ascii_lowercase().as_str() {
            "de" | "nl" | "it" | "es" | "pt" | "da" | "id" | "tr" => NumberFormat {
                decimal_separator: ',',
                group_separator: '.',
            },
            "ru" | "nb" | "nn" | "no" | "fr" | "sv" | "fi" | "pl" | "cs" | "uk" | "sk" => NumberFormat {
                decimal_separator: ',',
                group_separator: '\u{a0}',
            },
            _ => NumberFormat::INVARIANT,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0.into_owned()
    }
}

/// Lowercase language, titlecase script, uppercase region: "zh-Hant-TW"
fn canonical_tag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .enumerate()
        .map(|(i, subtag)| match subtag.len() {
            _ if i == 0 => subtag.to_ascii_lowercase(),
            2 => subtag.to_ascii_uppercase(),
            4 => {
                let lower = subtag.to_ascii_lowercase();
                let mut chars = lower.chars();
                chars
                    .next()
                    .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            }
            _ => subtag.to_ascii_lowercase(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Decimal and digit-group separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
}

impl NumberFormat {
    /// Culture-invariant format: "1,234.5"
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
        group_separator: ',',
    };
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_subtag() {
        assert_eq!(Locale::EN_US.language(), "en");
        assert_eq!(Locale::new("nb_NO").language(), "nb");
        assert_eq!(Locale::new("fr").language(), "fr");
    }

    #[test]
    fn test_number_format() {
        assert_eq!(Locale::EN_US.number_format(), NumberFormat::INVARIANT);
        assert_eq!(Locale::RU_RU.number_format().decimal_separator, ',');
        assert_eq!(Locale::DE_DE.number_format().group_separator, '.');
        assert_eq!(Locale::new("xx-YY").number_format(), NumberFormat::INVARIANT);
    }

    #[test]
    fn test_owned_and_borrowed_compare_equal() {
        assert_eq!(Locale::new("en-US"), Locale::EN_US);
        assert!(Locale::new("EN-us").is_fallback());
        assert!(!Locale::RU_RU.is_fallback());
    }

    #[test]
    fn test_tags_are_canonicalized() {
        assert_eq!(Locale::new("en-us"), Locale::EN_US);
        assert_eq!(Locale::new("RU_ru"), Locale::RU_RU);
        assert_eq!(Locale::from(" nb-no "), Locale::NB_NO);
        assert_eq!(Locale::new("zh-hant-tw").tag(), "zh-Hant-TW");
        assert_eq!(Locale::new("FR").tag(), "fr");
        assert!(Locale::new("en-us").is_fallback());
    }

    #[test]
    fn test_lowercase_tag_hashes_like_canonical() {
        use std::collections::HashSet;
        let set: HashSet<Locale> = [Locale::EN_US].into_iter().collect();
        assert!(set.contains(&Locale::new("en-us")));
    }

    #[test]
    fn test_serde_string() {
        let json = serde_json::to_string(&Locale::RU_RU).unwrap();
        assert_eq!(json, "\"ru-RU\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::RU_RU);
        let lower: Locale = serde_json::from_str("\"ru-ru\"").unwrap();
        assert_eq!(lower, Locale::RU_RU);
    }
}
