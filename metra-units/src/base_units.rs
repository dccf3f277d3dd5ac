//! Base unit choices
//!
//! [`BaseUnits`] picks one concrete unit per SI base quantity. A unit
//! declares the base units it is expressed in (a cubic foot is expressed
//! in feet), and a [`UnitSystem`] uses that to pick the unit of a kind
//! that agrees with the system.

use std::any::Any;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{
    AbbreviationCache, AmountOfSubstanceUnit, DurationUnit, ElectricCurrentUnit, LengthUnit, LuminousIntensityUnit,
    MassUnit, QuantityKind, TemperatureUnit, Unit, UnitsError,
};

/// One unit choice per SI base quantity; `Undefined` means "no choice"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseUnits {
    length: LengthUnit,
    mass: MassUnit,
    time: DurationUnit,
    current: ElectricCurrentUnit,
    temperature: TemperatureUnit,
    amount: AmountOfSubstanceUnit,
    luminous_intensity: LuminousIntensityUnit,
}

impl BaseUnits {
    /// No choice for any base quantity
    pub const UNDEFINED: BaseUnits = BaseUnits::new(
        LengthUnit::Undefined,
        MassUnit::Undefined,
        DurationUnit::Undefined,
        ElectricCurrentUnit::Undefined,
        TemperatureUnit::Undefined,
        AmountOfSubstanceUnit::Undefined,
        LuminousIntensityUnit::Undefined,
    );

    /// Meter, kilogram, second, ampere, kelvin, mole, candela
    pub const SI: BaseUnits = BaseUnits::new(
        LengthUnit::Meter,
        MassUnit::Kilogram,
        DurationUnit::Second,
        ElectricCurrentUnit::Ampere,
        TemperatureUnit::Kelvin,
        AmountOfSubstanceUnit::Mole,
        LuminousIntensityUnit::Candela,
    );

    /// Every component must be given; pass `Undefined` to leave one open
    pub const fn new(
        length: LengthUnit,
        mass: MassUnit,
        time: DurationUnit,
        current: ElectricCurrentUnit,
        temperature: TemperatureUnit,
        amount: AmountOfSubstanceUnit,
        luminous_intensity: LuminousIntensityUnit,
    ) -> Self {
        BaseUnits {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminous_intensity,
        }
    }

    pub const fn with_length(self, length: LengthUnit) -> Self {
        BaseUnits { length, ..self }
    }

    pub const fn with_mass(self, mass: MassUnit) -> Self {
        BaseUnits { mass, ..self }
    }

    pub const fn with_time(self, time: DurationUnit) -> Self {
        BaseUnits { time, ..self }
    }

    pub const fn with_current(self, current: ElectricCurrentUnit) -> Self {
        BaseUnits { current, ..self }
    }

    pub const fn with_temperature(self, temperature: TemperatureUnit) -> Self {
        BaseUnits { temperature, ..self }
    }

    pub const fn with_amount(self, amount: AmountOfSubstanceUnit) -> Self {
        BaseUnits { amount, ..self }
    }

    pub const fn with_luminous_intensity(self, luminous_intensity: LuminousIntensityUnit) -> Self {
        BaseUnits { luminous_intensity, ..self }
    }

    pub fn length(&self) -> LengthUnit {
        self.length
    }

    pub fn mass(&self) -> MassUnit {
        self.mass
    }

    pub fn time(&self) -> DurationUnit {
        self.time
    }

    pub fn current(&self) -> ElectricCurrentUnit {
        self.current
    }

    pub fn temperature(&self) -> TemperatureUnit {
        self.temperature
    }

    pub fn amount(&self) -> AmountOfSubstanceUnit {
        self.amount
    }

    pub fn luminous_intensity(&self) -> LuminousIntensityUnit {
        self.luminous_intensity
    }

    /// Whether every component has a choice
    pub fn is_fully_defined(&self) -> bool {
        self.first_open_kind().is_none()
    }

    pub fn is_undefined(&self) -> bool {
        *self == Self::UNDEFINED
    }

    /// Kind of the first component without a choice
    fn first_open_kind(&self) -> Option<QuantityKind> {
        [
            (self.length.is_undefined(), QuantityKind::Length),
            (self.mass.is_undefined(), QuantityKind::Mass),
            (self.time.is_undefined(), QuantityKind::Duration),
            (self.current.is_undefined(), QuantityKind::ElectricCurrent),
            (self.temperature.is_undefined(), QuantityKind::Temperature),
            (self.amount.is_undefined(), QuantityKind::AmountOfSubstance),
            (self.luminous_intensity.is_undefined(), QuantityKind::LuminousIntensity),
        ]
        .into_iter()
        .find_map(|(open, kind)| open.then_some(kind))
    }

    /// Whether every choice made here is also made by `other`.
    ///
    /// The fully undefined value is a subset of nothing.
    pub fn is_subset_of(&self, other: &BaseUnits) -> bool {
        fn agrees<U: Unit>(mine: U, theirs: U) -> bool {
            mine.is_undefined() || mine == theirs
        }

        !self.is_undefined()
            && agrees(self.length, other.length)
            && agrees(self.mass, other.mass)
            && agrees(self.time, other.time)
            && agrees(self.current, other.current)
            && agrees(self.temperature, other.temperature)
            && agrees(self.amount, other.amount)
            && agrees(self.luminous_intensity, other.luminous_intensity)
    }

    /// Compare against a value of any type, or nothing.
    ///
    /// Only another `BaseUnits` with the same choices is equal; `None` and
    /// values of other types never are.
    pub fn eq_dyn(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|o| o.downcast_ref::<BaseUnits>())
            .is_some_and(|o| o == self)
    }
}

impl Default for BaseUnits {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

fn write_component<U: Unit>(f: &mut fmt::Formatter<'_>, first: &mut bool, label: &str, unit: U) -> fmt::Result {
    if unit.is_undefined() {
        return Ok(());
    }
    if !*first {
        write!(f, ", ")?;
    }
    *first = false;

    let cache = AbbreviationCache::shared();
    let abbreviation = cache.default_abbreviation(unit, None).unwrap_or(unit.name());
    write!(f, "[{}]: {}", label, abbreviation)
}

/// "[Length]: m, [Mass]: kg, ..." in fixed order, skipping open components
impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write_component(f, &mut first, "Length", self.length)?;
        write_component(f, &mut first, "Mass", self.mass)?;
        write_component(f, &mut first, "Time", self.time)?;
        write_component(f, &mut first, "Current", self.current)?;
        write_component(f, &mut first, "Temperature", self.temperature)?;
        write_component(f, &mut first, "Amount", self.amount)?;
        write_component(f, &mut first, "LuminousIntensity", self.luminous_intensity)
    }
}

/// A coherent choice of base units, used to pick units for any kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitSystem {
    base_units: BaseUnits,
}

impl UnitSystem {
    /// A system needs a choice for every base quantity
    pub fn new(base_units: BaseUnits) -> Result<Self, UnitsError> {
        match base_units.first_open_kind() {
            Some(kind) => Err(UnitsError::NoUnitForSystem {
                kind,
                base_units: base_units.to_string(),
            }),
            None => Ok(UnitSystem { base_units }),
        }
    }

    pub fn si() -> Self {
        UnitSystem { base_units: BaseUnits::SI }
    }

    pub fn base_units(&self) -> &BaseUnits {
        &self.base_units
    }

    /// First unit of `U` whose declared base units agree with this system
    pub fn unit_for<U: Unit>(&self) -> Result<U, UnitsError> {
        U::ALL
            .iter()
            .copied()
            .find(|u| u.base_units().is_some_and(|b| b.is_subset_of(&self.base_units)))
            .ok_or_else(|| UnitsError::NoUnitForSystem {
                kind: U::KIND,
                base_units: self.base_units.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VolumeUnit;

    #[test]
    fn test_equal_when_all_components_match() {
        let a = BaseUnits::new(
            LengthUnit::Meter,
            MassUnit::Kilogram,
            DurationUnit::Second,
            ElectricCurrentUnit::Ampere,
            TemperatureUnit::Kelvin,
            AmountOfSubstanceUnit::Mole,
            LuminousIntensityUnit::Candela,
        );
        assert_eq!(a, BaseUnits::SI);
        assert_eq!(a, a);
    }

    #[test]
    fn test_any_component_breaks_equality() {
        let si = BaseUnits::SI;
        assert_ne!(si.with_length(LengthUnit::Foot), si);
        assert_ne!(si.with_mass(MassUnit::Pound), si);
        assert_ne!(si.with_time(DurationUnit::Minute), si);
        assert_ne!(si.with_current(ElectricCurrentUnit::Milliampere), si);
        assert_ne!(si.with_temperature(TemperatureUnit::DegreeCelsius), si);
        assert_ne!(si.with_amount(AmountOfSubstanceUnit::Kilomole), si);
        assert_ne!(si.with_luminous_intensity(LuminousIntensityUnit::Undefined), si);
    }

    #[test]
    fn test_undefined_components_are_equal() {
        assert_eq!(BaseUnits::UNDEFINED, BaseUnits::default());
        assert!(BaseUnits::UNDEFINED.is_undefined());
        assert!(!BaseUnits::UNDEFINED.is_fully_defined());
    }

    #[test]
    fn test_eq_dyn() {
        let si = BaseUnits::SI;
        assert!(si.eq_dyn(Some(&BaseUnits::SI as &dyn Any)));
        assert!(!si.eq_dyn(None));
        assert!(!si.eq_dyn(Some(&"[Length]: m" as &dyn Any)));
        assert!(!si.eq_dyn(Some(&BaseUnits::UNDEFINED as &dyn Any)));
    }

    #[test]
    fn test_optional_equality() {
        let none: Option<BaseUnits> = None;
        let some = Some(BaseUnits::SI);
        assert_eq!(none, None);
        assert_ne!(some, none);
        assert_ne!(none, some);
    }

    #[test]
    fn test_display_si() {
        assert_eq!(
            BaseUnits::SI.to_string(),
            "[Length]: m, [Mass]: kg, [Time]: s, [Current]: A, [Temperature]: K, [Amount]: mol, [LuminousIntensity]: cd"
        );
    }

    #[test]
    fn test_display_skips_open_components() {
        let units = BaseUnits::UNDEFINED.with_length(LengthUnit::Foot).with_time(DurationUnit::Hour);
        assert_eq!(units.to_string(), "[Length]: ft, [Time]: h");
        assert_eq!(BaseUnits::UNDEFINED.to_string(), "");
    }

    #[test]
    fn test_subset() {
        let feet = BaseUnits::UNDEFINED.with_length(LengthUnit::Foot);
        assert!(!feet.is_subset_of(&BaseUnits::SI));
        assert!(feet.is_subset_of(&BaseUnits::SI.with_length(LengthUnit::Foot)));
        assert!(!BaseUnits::UNDEFINED.is_subset_of(&BaseUnits::SI));
    }

    #[test]
    fn test_unit_system_picks_units() {
        let si = UnitSystem::si();
        assert_eq!(si.unit_for::<LengthUnit>().unwrap(), LengthUnit::Meter);
        assert_eq!(si.unit_for::<VolumeUnit>().unwrap(), VolumeUnit::CubicMeter);
        assert_eq!(si.unit_for::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);

        let imperial = UnitSystem::new(BaseUnits::SI.with_length(LengthUnit::Foot).with_mass(MassUnit::Pound)).unwrap();
        assert_eq!(imperial.unit_for::<VolumeUnit>().unwrap(), VolumeUnit::CubicFoot);
        assert_eq!(imperial.unit_for::<MassUnit>().unwrap(), MassUnit::Pound);
    }

    #[test]
    fn test_unit_system_requires_every_component() {
        let partial = BaseUnits::UNDEFINED.with_length(LengthUnit::Meter);
        let err = UnitSystem::new(partial).unwrap_err();
        assert!(matches!(err, UnitsError::NoUnitForSystem { kind: QuantityKind::Mass, .. }));
    }
}
