//! Temperature units (base: kelvin)
//!
//! Most scales are offset from kelvin, so these are the affine formulas
//! in the table. Converting a temperature difference is not the same
//! operation and is not modelled here.

use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{AbbreviationEntry, BaseDimensions, BaseUnits, Conversion, QuantityKind, Unit, UnitRegistry, UnitsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Undefined = 0,
    DegreeCelsius,
    DegreeDelisle,
    DegreeFahrenheit,
    DegreeRankine,
    DegreeReaumur,
    Kelvin,
    SolarTemperature,
}

impl Unit for TemperatureUnit {
    const KIND: QuantityKind = QuantityKind::Temperature;
    const BASE_DIMENSIONS: BaseDimensions = BaseDimensions::TEMPERATURE;
    const BASE: Self = TemperatureUnit::Kelvin;
    const UNDEFINED: Self = TemperatureUnit::Undefined;

    const ALL: &'static [Self] = &[
        TemperatureUnit::DegreeCelsius,
        TemperatureUnit::DegreeDelisle,
        TemperatureUnit::DegreeFahrenheit,
        TemperatureUnit::DegreeRankine,
        TemperatureUnit::DegreeReaumur,
        TemperatureUnit::Kelvin,
        TemperatureUnit::SolarTemperature,
    ];

    const ABBREVIATIONS: &'static [AbbreviationEntry<Self>] = &[
        (TemperatureUnit::DegreeCelsius, "en-US", &["°C", "degC"]),
        (TemperatureUnit::DegreeDelisle, "en-US", &["°De"]),
        (TemperatureUnit::DegreeFahrenheit, "en-US", &["°F", "degF"]),
        (TemperatureUnit::DegreeRankine, "en-US", &["°R"]),
        (TemperatureUnit::DegreeReaumur, "en-US", &["°Ré"]),
        (TemperatureUnit::Kelvin, "en-US", &["K"]),
        (TemperatureUnit::SolarTemperature, "en-US", &["T⊙"]),
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Undefined => "Undefined",
            TemperatureUnit::DegreeCelsius => "DegreeCelsius",
            TemperatureUnit::DegreeDelisle => "DegreeDelisle",
            TemperatureUnit::DegreeFahrenheit => "DegreeFahrenheit",
            TemperatureUnit::DegreeRankine => "DegreeRankine",
            TemperatureUnit::DegreeReaumur => "DegreeReaumur",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::SolarTemperature => "SolarTemperature",
        }
    }

    fn conversion(self) -> Option<Conversion> {
        let conversion = match self {
            TemperatureUnit::Undefined => return None,
            TemperatureUnit::DegreeCelsius => Conversion::Affine { factor: 1.0, offset: 273.15 },
            TemperatureUnit::DegreeDelisle => Conversion::Affine { factor: -2.0 / 3.0, offset: 373.15 },
            TemperatureUnit::DegreeFahrenheit => Conversion::Affine {
                factor: 5.0 / 9.0,
                offset: 459.67 * 5.0 / 9.0,
            },
            TemperatureUnit::DegreeRankine => Conversion::Linear(5.0 / 9.0),
            TemperatureUnit::DegreeReaumur => Conversion::Affine { factor: 1.25, offset: 273.15 },
            TemperatureUnit::Kelvin => Conversion::IDENTITY,
            TemperatureUnit::SolarTemperature => Conversion::Linear(5778.0),
        };
        Some(conversion)
    }

    fn base_units(self) -> Option<BaseUnits> {
        match self {
            TemperatureUnit::Undefined => None,
            unit => Some(BaseUnits::UNDEFINED.with_temperature(unit)),
        }
    }

    fn registry() -> Result<&'static UnitRegistry<Self>, UnitsError> {
        static REGISTRY: LazyLock<Result<UnitRegistry<TemperatureUnit>, UnitsError>> =
            LazyLock::new(UnitRegistry::build);
        REGISTRY.as_ref().map_err(Clone::clone)
    }
}
