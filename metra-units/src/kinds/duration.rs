//! Duration units (base: second)
//!
//! Months and years are fixed-length: 30 and 365 days.

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationUnit {
    Undefined = 0,
    Day,
    Hour,
    Microsecond,
    Millisecond,
    Minute,
    Month30,
    Nanosecond,
    Second,
    Week,
    Year365,
}

const DAY: f64 = 24.0 * 3600.0;

impl Unit for DurationUnit {
    const KIND: QuantityKind = QuantityKind::Duration;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::TIME;
    const BASE: Self = DurationUnit::Second;
    const UNDEFINED: Self = DurationUnit::Undefined;

    const ALL: &'static [Self] = &[
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Microsecond,
        DurationUnit::Millisecond,
        DurationUnit::Minute,
        DurationUnit::Month30,
        DurationUnit::Nanosecond,
        DurationUnit::Second,
        DurationUnit::Week,
        DurationUnit::Year365,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (DurationUnit::Day, "en-US", &["d", "day", "days"]),
        (DurationUnit::Day, "ru-RU", &["сут", "д"]),
        (DurationUnit::Hour, "en-US", &["h", "hr", "hrs", "hour", "hours"]),
        (DurationUnit::Hour, "ru-RU", &["ч", "час"]),
        (DurationUnit::Microsecond, "en-US", &["µs", "microsec", "microsecs", "microsecond", "microseconds"]),
        (DurationUnit::Microsecond, "ru-RU", &["мксек", "мкс"]),
        (DurationUnit::Millisecond, "en-US", &["ms", "millisec", "millisecs", "millisecond", "milliseconds"]),
        (DurationUnit::Millisecond, "ru-RU", &["мсек", "мс"]),
        (DurationUnit::Minute, "en-US", &["min", "m", "minute", "minutes"]),
        (DurationUnit::Minute, "ru-RU", &["мин"]),
        (DurationUnit::Month30, "en-US", &["mo", "month", "months"]),
        (DurationUnit::Month30, "ru-RU", &["месяц"]),
        (DurationUnit::Nanosecond, "en-US", &["ns", "nanosec", "nanosecs", "nanosecond", "nanoseconds"]),
        (DurationUnit::Nanosecond, "ru-RU", &["нсек", "нс"]),
        (DurationUnit::Second, "en-US", &["s", "sec", "secs", "second", "seconds"]),
        (DurationUnit::Second, "ru-RU", &["сек", "с"]),
        (DurationUnit::Week, "en-US", &["wk", "week", "weeks"]),
        (DurationUnit::Week, "ru-RU", &["нед"]),
        (DurationUnit::Year365, "en-US", &["yr", "year", "years"]),
        (DurationUnit::Year365, "ru-RU", &["год"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            DurationUnit::Undefined => "Undefined",
            DurationUnit::Day => "Day",
            DurationUnit::Hour => "Hour",
            DurationUnit::Microsecond => "Microsecond",
            DurationUnit::Millisecond => "Millisecond",
            DurationUnit::Minute => "Minute",
            DurationUnit::Month30 => "Month30",
            DurationUnit::Nanosecond => "Nanosecond",
            DurationUnit::Second => "Second",
            DurationUnit::Week => "Week",
            DurationUnit::Year365 => "Year365",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let factor = match self {
            DurationUnit::Undefined => return None,
            DurationUnit::Day => DAY,
            DurationUnit::Hour => 3600.0,
            DurationUnit::Microsecond => 1e-6,
            DurationUnit::Millisecond => 1e-3,
            DurationUnit::Minute => 60.0,
            DurationUnit::Month30 => 30.0 * DAY,
            DurationUnit::Nanosecond => 1e-9,
            DurationUnit::Second => 1.0,
            DurationUnit::Week => 7.0 * DAY,
            DurationUnit::Year365 => 365.0 * DAY,
        };
        Some(Conversion::Linear(factor))
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            DurationUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_time(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<DurationUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
