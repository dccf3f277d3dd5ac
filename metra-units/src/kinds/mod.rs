//! Quantity kinds and their unit tables

mod amount_of_substance;
mod duration;
mod electric_current;
mod length;
mod luminous_intensity;
mod mass;
mod temperature;
mod volume;

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::{BaseDimensions, Unit, UnitId};

pub use amount_of_substance::AmountOfSubstanceUnit;
pub use duration::DurationUnit;
pub use electric_current::ElectricCurrentUnit;
pub use length::LengthUnit;
pub use luminous_intensity::LuminousIntensityUnit;
pub use mass::MassUnit;
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;

/// Run `$body` with `$unit` bound to the unit type of `$kind`
macro_rules! dispatch_kind {
    ($kind:expr, $unit:ident => $body:expr) => {
        match $kind {
            $crate::QuantityKind::AmountOfSubstance => {
                type $unit = $crate::AmountOfSubstanceUnit;
                $body
            }
            $crate::QuantityKind::Duration => {
                type $unit = $crate::DurationUnit;
                $body
            }
            $crate::QuantityKind::ElectricCurrent => {
                type $unit = $crate::ElectricCurrentUnit;
                $body
            }
            $crate::QuantityKind::Length => {
                type $unit = $crate::LengthUnit;
                $body
            }
            $crate::QuantityKind::LuminousIntensity => {
                type $unit = $crate::LuminousIntensityUnit;
                $body
            }
            $crate::QuantityKind::Mass => {
                type $unit = $crate::MassUnit;
                $body
            }
            $crate::QuantityKind::Temperature => {
                type $unit = $crate::TemperatureUnit;
                $body
            }
            $crate::QuantityKind::Volume => {
                type $unit = $crate::VolumeUnit;
                $body
            }
        }
    };
}

pub(crate) use dispatch_kind;

/// The kinds of quantity with a unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuantityKind {
    AmountOfSubstance,
    Duration,
    ElectricCurrent,
    Length,
    LuminousIntensity,
    Mass,
    Temperature,
    Volume,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::AmountOfSubstance,
        QuantityKind::Duration,
        QuantityKind::ElectricCurrent,
        QuantityKind::Length,
        QuantityKind::LuminousIntensity,
        QuantityKind::Mass,
        QuantityKind::Temperature,
        QuantityKind::Volume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::AmountOfSubstance => "AmountOfSubstance",
            QuantityKind::Duration => "Duration",
            QuantityKind::ElectricCurrent => "ElectricCurrent",
            QuantityKind::Length => "Length",
            QuantityKind::LuminousIntensity => "LuminousIntensity",
            QuantityKind::Mass => "Mass",
            QuantityKind::Temperature => "Temperature",
            QuantityKind::Volume => "Volume",
        }
    }

    pub fn base_dimensions(self) -> BaseDimensions {
        dispatch_kind!(self, U => <U as Unit>::BASE_DIMENSIONS)
    }

    /// Kinds whose fully defined dimensions agree
    pub fn is_compatible_with(self, other: QuantityKind) -> bool {
        self.base_dimensions().is_compatible_with(&other.base_dimensions())
    }

    pub fn base_unit(self) -> UnitId {
        dispatch_kind!(self, U => UnitId::of(<U as Unit>::BASE))
    }

    /// Every unit of the kind, in declaration order
    pub fn units(self) -> Vec<UnitId> {
        dispatch_kind!(self, U => <U as Unit>::ALL.iter().map(|&u| UnitId::of(u)).collect())
    }

    /// Find a unit of this kind by variant name, ignoring case
    pub fn unit_by_name(self, name: &str) -> Option<UnitId> {
        dispatch_kind!(self, U => <U as Unit>::from_name(name).map(UnitId::of))
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_' && *c != ' ').collect();
        QuantityKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown quantity kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("length".parse::<QuantityKind>(), Ok(QuantityKind::Length));
        assert_eq!("amount_of_substance".parse::<QuantityKind>(), Ok(QuantityKind::AmountOfSubstance));
        assert!("speed".parse::<QuantityKind>().is_err());
    }

    #[test]
    fn test_dimensions_per_kind() {
        assert_eq!(QuantityKind::Length.base_dimensions(), BaseDimensions::LENGTH);
        assert_eq!(QuantityKind::Duration.base_dimensions(), BaseDimensions::TIME);
        assert_eq!(QuantityKind::Volume.base_dimensions(), BaseDimensions::VOLUME);
        assert!(QuantityKind::Length.is_compatible_with(QuantityKind::Length));
        assert!(!QuantityKind::Length.is_compatible_with(QuantityKind::Volume));
    }

    #[test]
    fn test_base_units_are_listed() {
        for kind in QuantityKind::ALL {
            let base = kind.base_unit();
            assert_eq!(base.kind, kind);
            assert!(kind.units().contains(&base), "{} base unit missing", kind);
        }
    }

    #[test]
    fn test_every_registry_builds() {
        for kind in QuantityKind::ALL {
            let ok = dispatch_kind!(kind, U => <U as Unit>::registry().is_ok());
            assert!(ok, "{} registry failed to build", kind);
        }
    }

    #[test]
    fn test_unit_by_name() {
        let foot = QuantityKind::Length.unit_by_name("foot").unwrap();
        assert_eq!(foot, UnitId::of(LengthUnit::Foot));
        assert!(QuantityKind::Length.unit_by_name("Second").is_none());
    }
}
