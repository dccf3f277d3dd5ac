//! Abbreviation cache
//!
//! Maps units to their abbreviations per locale and back. A cache is
//! assembled with [`AbbreviationCacheBuilder`] and is read-only once
//! built, so a single instance can be shared by any number of threads.
//! [`AbbreviationCache::shared`] is the process-wide instance built from
//! the tables every kind supplies.

use std::collections::HashMap;
use std::sync::LazyLock;
use metra_core::Locale;
use tracing::{debug, trace};
use crate::kinds::dispatch_kind;
use crate::{QuantityKind, Unit, UnitId, UnitsError};

/// Whether reverse lookups compare abbreviations case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCase {
    Insensitive,
    Sensitive,
}

/// Read-only abbreviation tables for one or more locales
#[derive(Debug, Clone)]
pub struct AbbreviationCache {
    default_locale: Locale,
    by_unit: HashMap<Locale, HashMap<UnitId, Vec<String>>>,
    /// Keyed by lowercased abbreviation; entries keep the registered spelling
    by_abbreviation: HashMap<Locale, HashMap<String, Vec<(UnitId, String)>>>,
}

static SHARED: LazyLock<AbbreviationCache> = LazyLock::new(AbbreviationCache::with_defaults);

impl AbbreviationCache {
    pub fn builder() -> AbbreviationCacheBuilder {
        AbbreviationCacheBuilder::default()
    }

    /// Cache holding every kind's tables, default locale en-US
    pub fn with_defaults() -> Self {
        Self::builder().with_all_kinds().build()
    }

    /// The process-wide cache, built on first use
    pub fn shared() -> &'static AbbreviationCache {
        &SHARED
    }

    /// Locale used when a lookup does not name one
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Locales with at least one abbreviation
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.by_unit.keys().collect();
        locales.sort();
        locales
    }

    /// Abbreviations of `unit` in `locale`, falling back to en-US
    pub fn abbreviations<U: Unit>(&self, unit: U, locale: Option<&Locale>) -> &[String] {
        self.abbreviations_for_id(UnitId::of(unit), locale)
    }

    pub fn abbreviations_for_id(&self, unit: UnitId, locale: Option<&Locale>) -> &[String] {
        let locale = locale.unwrap_or(&self.default_locale);
        let found = self.lookup(unit, locale);
        if found.is_empty() && !locale.is_fallback() {
            return self.lookup(unit, &Locale::FALLBACK);
        }
        found
    }

    fn lookup(&self, unit: UnitId, locale: &Locale) -> &[String] {
        self.by_unit
            .get(locale)
            .and_then(|units| units.get(&unit))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first abbreviation registered for `unit`
    pub fn default_abbreviation<U: Unit>(&self, unit: U, locale: Option<&Locale>) -> Result<&str, UnitsError> {
        self.default_abbreviation_for_id(UnitId::of(unit), locale)
    }

    pub fn default_abbreviation_for_id(&self, unit: UnitId, locale: Option<&Locale>) -> Result<&str, UnitsError> {
        self.abbreviations_for_id(unit, locale)
            .first()
            .map(String::as_str)
            .ok_or_else(|| UnitsError::MissingAbbreviation {
                kind: unit.kind,
                unit: unit.name().to_string(),
            })
    }

    /// Units that `abbreviation` names in `locale`, optionally restricted
    /// to one kind. No locale fallback happens here.
    pub fn units_for_abbreviation(
        &self,
        abbreviation: &str,
        kind: Option<QuantityKind>,
        locale: Option<&Locale>,
        case: MatchCase,
    ) -> Vec<UnitId> {
        let locale = locale.unwrap_or(&self.default_locale);
        let key = abbreviation.to_lowercase();

        let mut units: Vec<UnitId> = Vec::new();
        let entries = self.by_abbreviation.get(locale).and_then(|m| m.get(&key));
        for (unit, spelling) in entries.into_iter().flatten() {
            if kind.is_some_and(|k| k != unit.kind) {
                continue;
            }
            if case == MatchCase::Sensitive && spelling != abbreviation {
                continue;
            }
            if !units.contains(unit) {
                units.push(*unit);
            }
        }

        trace!(abbreviation, locale = %locale, ?case, matches = units.len(), "abbreviation lookup");
        units
    }
}

impl Default for AbbreviationCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Collects abbreviation tables before freezing them into a cache
#[derive(Debug, Clone, Default)]
pub struct AbbreviationCacheBuilder {
    default_locale: Option<Locale>,
    by_unit: HashMap<Locale, HashMap<UnitId, Vec<String>>>,
}

impl AbbreviationCacheBuilder {
    pub fn default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Add every entry of `U`'s abbreviation table
    pub fn with_kind<U: Unit>(mut self) -> Self {
        for (unit, locale, abbreviations) in U::ABBREVIATIONS {
            self.push(UnitId::of(*unit), Locale::from(*locale), abbreviations.iter().map(|a| a.to_string()), false);
        }
        self
    }

    /// Add the tables of every kind
    pub fn with_all_kinds(self) -> Self {
        QuantityKind::ALL
            .into_iter()
            .fold(self, |builder, kind| dispatch_kind!(kind, U => builder.with_kind::<U>()))
    }

    /// Add abbreviations after any already registered for the unit
    pub fn map_unit_to_abbreviation<U: Unit>(mut self, unit: U, locale: Locale, abbreviations: &[&str]) -> Self {
        self.push(UnitId::of(unit), locale, abbreviations.iter().map(|a| a.to_string()), false);
        self
    }

    /// Make `abbreviation` the unit's default in `locale`
    pub fn map_unit_to_default_abbreviation<U: Unit>(mut self, unit: U, locale: Locale, abbreviation: &str) -> Self {
        self.push(UnitId::of(unit), locale, std::iter::once(abbreviation.to_string()), true);
        self
    }

    fn push(&mut self, unit: UnitId, locale: Locale, abbreviations: impl Iterator<Item = String>, as_default: bool) {
        let list = self.by_unit.entry(locale).or_default().entry(unit).or_default();
        for abbreviation in abbreviations {
            list.retain(|a| *a != abbreviation);
            if as_default {
                list.insert(0, abbreviation);
            } else {
                list.push(abbreviation);
            }
        }
    }

    pub fn build(self) -> AbbreviationCache {
        let mut by_abbreviation: HashMap<Locale, HashMap<String, Vec<(UnitId, String)>>> = HashMap::new();
        let mut count = 0;

        for (locale, units) in &self.by_unit {
            let reverse = by_abbreviation.entry(locale.clone()).or_default();
            // stable candidate order regardless of hash order
            let mut ids: Vec<&UnitId> = units.keys().collect();
            ids.sort();
            for id in ids {
                for abbreviation in &units[id] {
                    reverse
                        .entry(abbreviation.to_lowercase())
                        .or_default()
                        .push((*id, abbreviation.clone()));
                    count += 1;
                }
            }
        }

        let default_locale = self.default_locale.unwrap_or_default();
        debug!(locales = self.by_unit.len(), abbreviations = count, default_locale = %default_locale, "abbreviation cache built");

        AbbreviationCache {
            default_locale,
            by_unit: self.by_unit,
            by_abbreviation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthUnit, MassUnit, VolumeUnit};

    #[test]
    fn test_default_abbreviation() {
        let cache = AbbreviationCache::shared();
        assert_eq!(cache.default_abbreviation(LengthUnit::Foot, None).unwrap(), "ft");
        assert_eq!(cache.default_abbreviation(LengthUnit::Meter, Some(&Locale::RU_RU)).unwrap(), "м");
        assert_eq!(
            cache.abbreviations(LengthUnit::Inch, None),
            &["in".to_string(), "\"".to_string(), "″".to_string()]
        );
    }

    #[test]
    fn test_falls_back_to_en_us() {
        let cache = AbbreviationCache::shared();
        assert_eq!(cache.default_abbreviation(MassUnit::Ounce, Some(&Locale::RU_RU)).unwrap(), "oz");
        assert_eq!(cache.default_abbreviation(MassUnit::Ounce, Some(&Locale::new("xx-XX"))).unwrap(), "oz");
    }

    #[test]
    fn test_lowercase_locale_tags() {
        let cache = AbbreviationCache::shared();
        assert_eq!(cache.default_abbreviation(LengthUnit::Meter, Some(&Locale::new("en-us"))).unwrap(), "m");
        assert_eq!(cache.default_abbreviation(LengthUnit::Meter, Some(&Locale::new("ru-ru"))).unwrap(), "м");
        let units = cache.units_for_abbreviation("км", None, Some(&Locale::new("RU_ru")), MatchCase::Insensitive);
        assert_eq!(units, vec![UnitId::of(LengthUnit::Kilometer)]);
    }

    #[test]
    fn test_missing_abbreviation() {
        let cache = AbbreviationCache::builder().build();
        let err = cache.default_abbreviation(LengthUnit::Meter, None).unwrap_err();
        assert_eq!(
            err,
            UnitsError::MissingAbbreviation {
                kind: QuantityKind::Length,
                unit: "Meter".to_string(),
            }
        );
    }

    #[test]
    fn test_reverse_lookup_shared_abbreviation() {
        let cache = AbbreviationCache::shared();
        let cups = cache.units_for_abbreviation("cup", Some(QuantityKind::Volume), None, MatchCase::Insensitive);
        assert_eq!(cups.len(), 3);
        assert!(cups.contains(&UnitId::of(VolumeUnit::MetricCup)));
        assert!(cups.contains(&UnitId::of(VolumeUnit::UsLegalCup)));
        assert!(cups.contains(&UnitId::of(VolumeUnit::UsCustomaryCup)));
    }

    #[test]
    fn test_reverse_lookup_case() {
        let cache = AbbreviationCache::shared();
        let any_case = cache.units_for_abbreviation("mm", Some(QuantityKind::Length), None, MatchCase::Insensitive);
        assert_eq!(any_case.len(), 2);

        let exact = cache.units_for_abbreviation("Mm", Some(QuantityKind::Length), None, MatchCase::Sensitive);
        assert_eq!(exact, vec![UnitId::of(LengthUnit::Megameter)]);
    }

    #[test]
    fn test_reverse_lookup_across_kinds() {
        let cache = AbbreviationCache::shared();
        // meter and minute
        let m = cache.units_for_abbreviation("m", None, None, MatchCase::Sensitive);
        assert_eq!(m.len(), 2);
        let length = cache.units_for_abbreviation("m", Some(QuantityKind::Length), None, MatchCase::Sensitive);
        assert_eq!(length, vec![UnitId::of(LengthUnit::Meter)]);
    }

    #[test]
    fn test_builder_mappings() {
        let cache = AbbreviationCache::builder()
            .default_locale(Locale::NB_NO)
            .with_kind::<LengthUnit>()
            .map_unit_to_abbreviation(LengthUnit::Foot, Locale::NB_NO, &["fot"])
            .map_unit_to_default_abbreviation(LengthUnit::Meter, Locale::EN_US, "meter")
            .build();

        assert_eq!(cache.default_locale(), &Locale::NB_NO);
        assert_eq!(cache.default_abbreviation(LengthUnit::Foot, None).unwrap(), "fot");
        // nothing in nb-NO for yards
        assert_eq!(cache.default_abbreviation(LengthUnit::Yard, None).unwrap(), "yd");
        assert_eq!(cache.default_abbreviation(LengthUnit::Meter, Some(&Locale::EN_US)).unwrap(), "meter");
        assert_eq!(cache.abbreviations(LengthUnit::Meter, Some(&Locale::EN_US)).len(), 2);
        assert!(cache.default_abbreviation(MassUnit::Gram, None).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let cache = AbbreviationCache::shared();
                    assert_eq!(cache.default_abbreviation(MassUnit::Kilogram, None).unwrap(), "kg");
                });
            }
        });
    }
}
