//! Quantity and unit parsing
//!
//! Grammar: one or more segments `<number><optional space><abbreviation>`,
//! separated by whitespace. The abbreviation is the run of characters up
//! to the next whitespace or digit. Segments are converted into the unit
//! of the first one and summed, so "1ft 2in" is 1 + 2/12 ft.

use metra_core::number::{parse_decimal, scan_literal};
use metra_core::{Locale, NumberFormat};
use tracing::debug;
use crate::kinds::dispatch_kind;
use crate::{
    convert, AbbreviationCache, AnyQuantity, MatchCase, Quantity, QuantityKind, Unit, UnitId, UnitsError,
};

/// One `<number><abbreviation>` pair of the input
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment<'t> {
    value: f64,
    abbreviation: &'t str,
}

/// Parses quantities and units against one abbreviation cache
#[derive(Debug, Clone, Copy)]
pub struct QuantityParser<'a> {
    cache: &'a AbbreviationCache,
}

impl<'a> QuantityParser<'a> {
    pub fn new(cache: &'a AbbreviationCache) -> Self {
        QuantityParser { cache }
    }

    pub fn cache(&self) -> &'a AbbreviationCache {
        self.cache
    }

    /// Parse into a quantity of `U`, reading numbers and abbreviations in
    /// `locale` (the cache default when `None`)
    pub fn parse<U: Unit>(&self, text: &str, locale: Option<&Locale>) -> Result<Quantity<U>, UnitsError> {
        let locale = locale.unwrap_or(self.cache.default_locale());
        let segments = tokenize(text, &locale.number_format())?;

        let mut target: Option<U> = None;
        let mut total = 0.0;
        for segment in segments {
            let unit = self.resolve_unit::<U>(segment.abbreviation, locale)?;
            let first = *target.get_or_insert(unit);
            total += convert(segment.value, unit, first)?;
        }

        match target {
            Some(unit) => Quantity::new(total, unit),
            None => Err(UnitsError::ParseFormat { input: text.to_string() }),
        }
    }

    /// Like [`parse`](Self::parse) but reports failure as `None`
    pub fn try_parse<U: Unit>(&self, text: &str, locale: Option<&Locale>) -> Option<Quantity<U>> {
        self.parse(text, locale).ok()
    }

    /// Resolve a lone abbreviation, e.g. "ft", to a unit of `U`
    pub fn parse_unit<U: Unit>(&self, abbreviation: &str, locale: Option<&Locale>) -> Result<U, UnitsError> {
        let locale = locale.unwrap_or(self.cache.default_locale());
        self.resolve_unit::<U>(abbreviation.trim(), locale)
    }

    pub fn try_parse_unit<U: Unit>(&self, abbreviation: &str, locale: Option<&Locale>) -> Option<U> {
        self.parse_unit(abbreviation, locale).ok()
    }

    /// Parse into a quantity of a kind chosen at run time
    pub fn parse_any(&self, text: &str, kind: QuantityKind, locale: Option<&Locale>) -> Result<AnyQuantity, UnitsError> {
        dispatch_kind!(kind, U => self.parse::<U>(text, locale).map(AnyQuantity::from))
    }

    /// Resolve a lone abbreviation to a unit of `kind`
    pub fn parse_unit_any(
        &self,
        abbreviation: &str,
        kind: QuantityKind,
        locale: Option<&Locale>,
    ) -> Result<UnitId, UnitsError> {
        let locale = locale.unwrap_or(self.cache.default_locale());
        self.resolve(abbreviation.trim(), kind, locale)
    }

    fn resolve_unit<U: Unit>(&self, abbreviation: &str, locale: &Locale) -> Result<U, UnitsError> {
        self.resolve(abbreviation, U::KIND, locale)?
            .downcast::<U>()
            .ok_or_else(|| UnitsError::UnknownAbbreviation {
                abbreviation: abbreviation.to_string(),
                kind: U::KIND,
            })
    }

    /// Find the single unit of `kind` that `abbreviation` names.
    ///
    /// Case is ignored unless that leaves several candidates, in which
    /// case an exact-case match narrows them down. A locale other than the
    /// fallback is retried as the fallback when nothing matches.
    fn resolve(&self, abbreviation: &str, kind: QuantityKind, locale: &Locale) -> Result<UnitId, UnitsError> {
        if abbreviation.is_empty() {
            return Err(UnitsError::ParseFormat { input: abbreviation.to_string() });
        }

        let mut units = self.matching(abbreviation, kind, locale);
        if units.is_empty() && !locale.is_fallback() {
            debug!(abbreviation, locale = %locale, "no match, retrying with fallback locale");
            units = self.matching(abbreviation, kind, &Locale::FALLBACK);
        }

        match units.as_slice() {
            [] => Err(UnitsError::UnknownAbbreviation {
                abbreviation: abbreviation.to_string(),
                kind,
            }),
            [unit] => Ok(*unit),
            _ => {
                let mut candidates: Vec<String> = units.iter().map(|u| u.name().to_string()).collect();
                candidates.sort();
                Err(UnitsError::AmbiguousUnit {
                    abbreviation: abbreviation.to_string(),
                    kind,
                    candidates,
                })
            }
        }
    }

    fn matching(&self, abbreviation: &str, kind: QuantityKind, locale: &Locale) -> Vec<UnitId> {
        let any_case = self
            .cache
            .units_for_abbreviation(abbreviation, Some(kind), Some(locale), MatchCase::Insensitive);
        if any_case.len() <= 1 {
            return any_case;
        }

        let exact = self
            .cache
            .units_for_abbreviation(abbreviation, Some(kind), Some(locale), MatchCase::Sensitive);
        if exact.is_empty() { any_case } else { exact }
    }
}

impl QuantityParser<'static> {
    /// Parser over the process-wide cache
    pub fn shared() -> Self {
        QuantityParser::new(AbbreviationCache::shared())
    }
}

impl Default for QuantityParser<'static> {
    fn default() -> Self {
        Self::shared()
    }
}

/// Split `text` into segments; fails on anything outside the grammar
fn tokenize<'t>(text: &'t str, format: &NumberFormat) -> Result<Vec<Segment<'t>>, UnitsError> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return Err(UnitsError::ParseFormat { input: text.to_string() });
    }

    let mut segments = Vec::new();
    while !rest.is_empty() {
        let literal_len = scan_literal(rest, format).ok_or_else(|| UnitsError::ParseFormat {
            input: rest.to_string(),
        })?;
        let literal = &rest[..literal_len];
        let value = parse_decimal(literal, format).map_err(|_| UnitsError::ParseFormat {
            input: literal.to_string(),
        })?;

        let after = rest[literal_len..].trim_start();
        let abbreviation_len = after
            .find(|c: char| c.is_whitespace() || c.is_ascii_digit())
            .unwrap_or(after.len());
        if abbreviation_len == 0 {
            // number without a unit
            return Err(UnitsError::ParseFormat { input: rest.to_string() });
        }

        segments.push(Segment {
            value,
            abbreviation: &after[..abbreviation_len],
        });
        rest = after[abbreviation_len..].trim_start();
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DurationUnit, LengthUnit, MassUnit, TemperatureUnit, VolumeUnit};

    fn parser() -> QuantityParser<'static> {
        QuantityParser::shared()
    }

    #[test]
    fn test_parse_simple() {
        let q: Quantity<LengthUnit> = parser().parse("5.5 m", None).unwrap();
        assert_eq!(q.value(), 5.5);
        assert_eq!(q.unit(), LengthUnit::Meter);

        let q: Quantity<LengthUnit> = parser().parse("5.5m", None).unwrap();
        assert_eq!(q.unit(), LengthUnit::Meter);
        let q: Quantity<LengthUnit> = parser().parse("  -2e3 km ", None).unwrap();
        assert_eq!(q.value(), -2000.0);
    }

    #[test]
    fn test_parse_composite() {
        let q: Quantity<LengthUnit> = parser().parse("1ft 2in", None).unwrap();
        assert_eq!(q.unit(), LengthUnit::Foot);
        assert!((q.value() - (1.0 + 2.0 / 12.0)).abs() < 1e-12);

        let q: Quantity<DurationUnit> = parser().parse("1 h 30 min", None).unwrap();
        assert_eq!(q.unit(), DurationUnit::Hour);
        assert!((q.value() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_symbols() {
        let q: Quantity<LengthUnit> = parser().parse("5' 6\"", None).unwrap();
        assert!((q.value() - 5.5).abs() < 1e-12);
        let t: Quantity<TemperatureUnit> = parser().parse("21.5 °C", None).unwrap();
        assert_eq!(t.unit(), TemperatureUnit::DegreeCelsius);
        let v: Quantity<VolumeUnit> = parser().parse("2 m³", None).unwrap();
        assert_eq!(v.unit(), VolumeUnit::CubicMeter);
    }

    #[test]
    fn test_ambiguous() {
        let err = parser().parse::<VolumeUnit>("1 cup", None).unwrap_err();
        match err {
            UnitsError::AmbiguousUnit { abbreviation, kind, candidates } => {
                assert_eq!(abbreviation, "cup");
                assert_eq!(kind, QuantityKind::Volume);
                assert_eq!(candidates, vec!["MetricCup", "UsCustomaryCup", "UsLegalCup"]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
        // the qualified spelling is fine
        assert_eq!(parser().parse_unit::<VolumeUnit>("cup(metric)", None).unwrap(), VolumeUnit::MetricCup);
    }

    #[test]
    fn test_case_narrows_ambiguity() {
        assert_eq!(parser().parse_unit::<LengthUnit>("mm", None).unwrap(), LengthUnit::Millimeter);
        assert_eq!(parser().parse_unit::<LengthUnit>("Mm", None).unwrap(), LengthUnit::Megameter);
        assert_eq!(parser().parse_unit::<LengthUnit>("KM", None).unwrap(), LengthUnit::Kilometer);
        assert!(matches!(
            parser().parse_unit::<LengthUnit>("MM", None),
            Err(UnitsError::AmbiguousUnit { .. })
        ));
        assert_eq!(parser().parse_unit::<MassUnit>("st", None).unwrap(), MassUnit::Stone);
        assert_eq!(parser().parse_unit::<MassUnit>("ST", None).unwrap(), MassUnit::ShortTon);
    }

    #[test]
    fn test_unknown_abbreviation() {
        let err = parser().parse::<LengthUnit>("3 parsecs", None).unwrap_err();
        assert_eq!(
            err,
            UnitsError::UnknownAbbreviation {
                abbreviation: "parsecs".to_string(),
                kind: QuantityKind::Length,
            }
        );
        // a unit of another kind is unknown here
        assert!(matches!(
            parser().parse::<LengthUnit>("3 kg", None),
            Err(UnitsError::UnknownAbbreviation { .. })
        ));
    }

    #[test]
    fn test_format_errors() {
        for input in ["", "   ", "m", "5", "5 m 3", "abc 5 m"] {
            let err = parser().parse::<LengthUnit>(input, None).unwrap_err();
            assert!(matches!(err, UnitsError::ParseFormat { .. }), "{:?} gave {:?}", input, err);
        }
        match parser().parse::<LengthUnit>("5 m 3", None).unwrap_err() {
            UnitsError::ParseFormat { input } => assert_eq!(input, "3"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_try_parse_never_fails_loudly() {
        assert!(parser().try_parse::<LengthUnit>("", None).is_none());
        assert!(parser().try_parse::<VolumeUnit>("1 cup", None).is_none());
        assert!(parser().try_parse::<LengthUnit>("1e400 m", None).is_none());
        assert_eq!(parser().try_parse::<LengthUnit>("bogus", None).unwrap_or_default(), Quantity::zero());
        assert!(parser().try_parse_unit::<LengthUnit>("", None).is_none());
    }

    #[test]
    fn test_locale() {
        let ru = Locale::RU_RU;
        let q: Quantity<LengthUnit> = parser().parse("1,5 м", Some(&ru)).unwrap();
        assert_eq!(q.value(), 1.5);
        assert_eq!(q.unit(), LengthUnit::Meter);
        // invariant decimal point is accepted too
        let q: Quantity<LengthUnit> = parser().parse("1.5 км", Some(&ru)).unwrap();
        assert_eq!(q.unit(), LengthUnit::Kilometer);
        // no ru-RU entry for ounces, en-US is used
        assert_eq!(parser().parse_unit::<MassUnit>("oz", Some(&ru)).unwrap(), MassUnit::Ounce);
    }

    #[test]
    fn test_locale_tag_case_is_ignored() {
        let q: Quantity<LengthUnit> = parser().parse("5 m", Some(&Locale::new("en-us"))).unwrap();
        assert_eq!(q.unit(), LengthUnit::Meter);
        let q: Quantity<LengthUnit> = parser().parse("1,5 м", Some(&Locale::new("ru-ru"))).unwrap();
        assert_eq!(q.value(), 1.5);
        assert_eq!(q.unit(), LengthUnit::Meter);
    }

    #[test]
    fn test_parse_any() {
        let q = parser().parse_any("2 h", QuantityKind::Duration, None).unwrap();
        assert_eq!(q.unit(), UnitId::of(DurationUnit::Hour));
        assert_eq!(q.value(), 2.0);
        assert_eq!(
            parser().parse_unit_any("lb", QuantityKind::Mass, None).unwrap(),
            UnitId::of(MassUnit::Pound)
        );
    }

    #[test]
    fn test_custom_cache() {
        let cache = AbbreviationCache::builder()
            .with_kind::<LengthUnit>()
            .map_unit_to_abbreviation(LengthUnit::Meter, Locale::EN_US, &["metre"])
            .build();
        let parser = QuantityParser::new(&cache);
        let q: Quantity<LengthUnit> = parser.parse("3 metre", None).unwrap();
        assert_eq!(q.unit(), LengthUnit::Meter);
        assert!(parser.parse::<MassUnit>("3 kg", None).is_err());
    }
}
