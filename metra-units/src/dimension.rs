//! Dimensional analysis types
//!
//! Each quantity kind has dimensions represented as a 7-element vector of
//! exponents: [length, mass, time, current, temperature, amount,
//! luminous intensity]. A component may be undefined when the kind's
//! dimensionality is not modeled.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Dimension indices for the 7 SI base quantities
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOUS_INTENSITY: usize = 6;

/// Exponents of the 7 SI base quantities. `None` marks an undefined
/// component, which compares equal only to another undefined component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseDimensions {
    exponents: [Option<i32>; 7],
}

impl BaseDimensions {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: BaseDimensions = BaseDimensions::new(0, 0, 0, 0, 0, 0, 0);

    /// Nothing about the dimensionality is known
    pub const UNDEFINED: BaseDimensions = BaseDimensions { exponents: [None; 7] };

    /// Length [L]
    pub const LENGTH: BaseDimensions = BaseDimensions::new(1, 0, 0, 0, 0, 0, 0);

    /// Mass [M]
    pub const MASS: BaseDimensions = BaseDimensions::new(0, 1, 0, 0, 0, 0, 0);

    /// Time [T]
    pub const TIME: BaseDimensions = BaseDimensions::new(0, 0, 1, 0, 0, 0, 0);

    /// Electric current [I]
    pub const CURRENT: BaseDimensions = BaseDimensions::new(0, 0, 0, 1, 0, 0, 0);

    /// Temperature [Θ]
    pub const TEMPERATURE: BaseDimensions = BaseDimensions::new(0, 0, 0, 0, 1, 0, 0);

    /// Amount of substance [N]
    pub const AMOUNT: BaseDimensions = BaseDimensions::new(0, 0, 0, 0, 0, 1, 0);

    /// Luminous intensity [J]
    pub const LUMINOUS_INTENSITY: BaseDimensions = BaseDimensions::new(0, 0, 0, 0, 0, 0, 1);

    /// Area [L^2]
    pub const AREA: BaseDimensions = BaseDimensions::new(2, 0, 0, 0, 0, 0, 0);

    /// Volume [L^3]
    pub const VOLUME: BaseDimensions = BaseDimensions::new(3, 0, 0, 0, 0, 0, 0);

    /// Velocity [L T^-1]
    pub const VELOCITY: BaseDimensions = BaseDimensions::new(1, 0, -1, 0, 0, 0, 0);

    /// Acceleration [L T^-2]
    pub const ACCELERATION: BaseDimensions = BaseDimensions::new(1, 0, -2, 0, 0, 0, 0);

    /// Force [M L T^-2]
    pub const FORCE: BaseDimensions = BaseDimensions::new(1, 1, -2, 0, 0, 0, 0);

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: BaseDimensions = BaseDimensions::new(-1, 1, -2, 0, 0, 0, 0);

    /// Frequency [T^-1]
    pub const FREQUENCY: BaseDimensions = BaseDimensions::new(0, 0, -1, 0, 0, 0, 0);

    /// Create dimensions from concrete exponents
    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        current: i32,
        temperature: i32,
        amount: i32,
        luminous_intensity: i32,
    ) -> Self {
        BaseDimensions {
            exponents: [
                Some(length),
                Some(mass),
                Some(time),
                Some(current),
                Some(temperature),
                Some(amount),
                Some(luminous_intensity),
            ],
        }
    }

    /// Create dimensions where some components may be undefined
    pub const fn from_exponents(exponents: [Option<i32>; 7]) -> Self {
        BaseDimensions { exponents }
    }

    pub fn exponents(&self) -> [Option<i32>; 7] {
        self.exponents
    }

    pub fn length(&self) -> Option<i32> {
        self.exponents[LENGTH]
    }

    pub fn mass(&self) -> Option<i32> {
        self.exponents[MASS]
    }

    pub fn time(&self) -> Option<i32> {
        self.exponents[TIME]
    }

    pub fn current(&self) -> Option<i32> {
        self.exponents[CURRENT]
    }

    pub fn temperature(&self) -> Option<i32> {
        self.exponents[TEMPERATURE]
    }

    pub fn amount(&self) -> Option<i32> {
        self.exponents[AMOUNT]
    }

    pub fn luminous_intensity(&self) -> Option<i32> {
        self.exponents[LUMINOUS_INTENSITY]
    }

    /// Check that every component is a concrete exponent
    pub fn is_defined(&self) -> bool {
        self.exponents.iter().all(Option::is_some)
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == Some(0))
    }

    /// Two kinds are compatible when their dimensions are fully defined and
    /// equal. Undefined dimensions are equal to each other but never
    /// compatible with anything.
    pub fn is_compatible_with(&self, other: &BaseDimensions) -> bool {
        self.is_defined() && other.is_defined() && self == other
    }

    /// Overflowing components become undefined
    fn zip_with(&self, other: &BaseDimensions, op: impl Fn(i32, i32) -> Option<i32>) -> BaseDimensions {
        let mut result = [None; 7];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = match (self.exponents[i], other.exponents[i]) {
                (Some(a), Some(b)) => op(a, b),
                _ => None,
            };
        }
        BaseDimensions { exponents: result }
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &BaseDimensions) -> BaseDimensions {
        self.zip_with(other, i32::checked_add)
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &BaseDimensions) -> BaseDimensions {
        self.zip_with(other, i32::checked_sub)
    }

    /// Raise to integer power (multiply exponents)
    pub fn power(&self, exp: i32) -> BaseDimensions {
        BaseDimensions {
            exponents: self.exponents.map(|e| e.and_then(|e| e.checked_mul(exp))),
        }
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> BaseDimensions {
        self.power(-1)
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        if !self.is_defined() {
            return None;
        }
        let e = self.exponents.map(|e| e.unwrap_or(0));
        match e {
            [0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0] => Some("amount of substance"),
            [0, 0, 0, 0, 0, 0, 1] => Some("luminous intensity"),
            [1, 0, -1, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0] => Some("acceleration"),
            [1, 1, -2, 0, 0, 0, 0] => Some("force"),
            [-1, 1, -2, 0, 0, 0, 0] => Some("pressure"),
            [2, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [0, 0, -1, 0, 0, 0, 0] => Some("frequency"),
            _ => None,
        }
    }
}

impl fmt::Display for BaseDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J"];
        let mut parts = Vec::new();

        for (i, exp) in self.exponents.iter().enumerate() {
            match exp {
                None => parts.push(format!("{}^?", names[i])),
                Some(0) => {}
                Some(1) => parts.push(names[i].to_string()),
                Some(e) => parts.push(format!("{}^{}", names[i], e)),
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for BaseDimensions {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(BaseDimensions::DIMENSIONLESS.is_dimensionless());
        assert!(!BaseDimensions::LENGTH.is_dimensionless());
        assert!(!BaseDimensions::UNDEFINED.is_dimensionless());
    }

    #[test]
    fn test_equality_is_reflexive_and_componentwise() {
        assert_eq!(BaseDimensions::LENGTH, BaseDimensions::LENGTH);
        assert_eq!(BaseDimensions::new(1, 0, 0, 0, 0, 0, 0), BaseDimensions::LENGTH);
        assert_ne!(BaseDimensions::new(1, 0, 0, 0, 0, 0, 1), BaseDimensions::LENGTH);
        assert_eq!(BaseDimensions::UNDEFINED, BaseDimensions::UNDEFINED);
    }

    #[test]
    fn test_undefined_equal_only_to_undefined() {
        let partial = BaseDimensions::from_exponents([Some(1), None, Some(0), Some(0), Some(0), Some(0), Some(0)]);
        assert_ne!(partial, BaseDimensions::LENGTH);
        assert_eq!(partial, partial);
        assert_eq!(partial.mass(), None);
        assert_eq!(partial.length(), Some(1));
    }

    #[test]
    fn test_undefined_kinds_are_not_compatible() {
        assert!(BaseDimensions::LENGTH.is_compatible_with(&BaseDimensions::LENGTH));
        assert!(!BaseDimensions::LENGTH.is_compatible_with(&BaseDimensions::TIME));
        assert!(!BaseDimensions::UNDEFINED.is_compatible_with(&BaseDimensions::UNDEFINED));
    }

    #[test]
    fn test_multiply() {
        let velocity = BaseDimensions::LENGTH.divide(&BaseDimensions::TIME);
        assert_eq!(velocity, BaseDimensions::VELOCITY);
    }

    #[test]
    fn test_force() {
        // Force = Mass * Acceleration = M * L * T^-2
        let force = BaseDimensions::MASS.multiply(&BaseDimensions::ACCELERATION);
        assert_eq!(force, BaseDimensions::FORCE);
    }

    #[test]
    fn test_power() {
        assert_eq!(BaseDimensions::LENGTH.power(3), BaseDimensions::VOLUME);
        assert_eq!(BaseDimensions::TIME.invert(), BaseDimensions::FREQUENCY);
    }

    #[test]
    fn test_undefined_propagates() {
        let product = BaseDimensions::UNDEFINED.multiply(&BaseDimensions::LENGTH);
        assert!(!product.is_defined());
        assert_eq!(product.name(), None);
    }

    #[test]
    fn test_exponent_overflow_is_undefined() {
        let huge = BaseDimensions::LENGTH.power(i32::MAX);
        assert_eq!(huge.length(), Some(i32::MAX));

        let squared = huge.power(2);
        assert_eq!(squared.length(), None);
        assert_eq!(squared.mass(), Some(0));
        assert!(!squared.is_defined());

        assert_eq!(huge.multiply(&BaseDimensions::LENGTH).length(), None);
        assert_eq!(BaseDimensions::LENGTH.power(i32::MIN).divide(&BaseDimensions::LENGTH).length(), None);
        assert_eq!(BaseDimensions::LENGTH.power(i32::MIN).invert().length(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BaseDimensions::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", BaseDimensions::LENGTH), "L");
        assert_eq!(format!("{}", BaseDimensions::VELOCITY), "L T^-1");
        let partial = BaseDimensions::from_exponents([Some(2), None, Some(0), Some(0), Some(0), Some(0), Some(0)]);
        assert_eq!(format!("{}", partial), "L^2 M^?");
    }
}
