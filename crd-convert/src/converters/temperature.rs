//! Affine temperature conversion
//!
//! Temperature scales differ by an offset, so no multiplicative factor
//! exists. Every conversion goes through Celsius.

use crd_core::{UnitError, UnitResult};
use crd_units::{TemperatureUnit, UnitDescriptor};
use crate::traits::{expect_dimensions, UnitConverter};

#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureConverter;

impl TemperatureConverter {
    pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Kelvin => value - 273.15,
            TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
            TemperatureUnit::Rankine => value / 1.8 - 273.15,
        }
    }

    pub fn from_celsius(value: f64, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Kelvin => value + 273.15,
            TemperatureUnit::Fahrenheit => 1.8 * value + 32.0,
            TemperatureUnit::Rankine => (value + 273.15) * 1.8,
        }
    }

    pub fn convert_value(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
        if from == to {
            return value;
        }
        Self::from_celsius(Self::to_celsius(value, from), to)
    }
}

impl UnitConverter for TemperatureConverter {
    fn name(&self) -> &'static str {
        "temperature"
    }

    fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64> {
        let (from, to) = expect_dimensions(self.name(), from, to)?;
        // Scales only exist to the first power
        if from.power != 1.0 || to.power != 1.0 {
            return Err(UnitError::invalid_conversion(from, to));
        }
        let (Ok(src), Ok(dst)) = (TemperatureUnit::try_from(from.unit), TemperatureUnit::try_from(to.unit)) else {
            return Err(UnitError::invalid_conversion(from, to));
        };
        Ok(Self::convert_value(value, src, dst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crd_units::{FamilyMember, PressureUnit};

    fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
        TemperatureConverter.convert(value, &from.into(), &to.into()).unwrap()
    }

    #[test]
    fn test_reference_points() {
        assert_eq!(convert(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin), 273.15);
        assert_relative_eq!(convert(1000.0, TemperatureUnit::Kelvin, TemperatureUnit::Rankine), 1800.0, max_relative = 1e-12);
        assert_relative_eq!(convert(500.0, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit), 440.33, max_relative = 1e-9);
        assert_relative_eq!(convert(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit), 212.0);
        assert_relative_eq!(convert(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius), 0.0);
        assert_relative_eq!(convert(491.67, TemperatureUnit::Rankine, TemperatureUnit::Celsius), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for from in TemperatureUnit::members() {
            for to in TemperatureUnit::members() {
                let there = convert(310.0, *from, *to);
                let back = convert(there, *to, *from);
                assert_relative_eq!(back, 310.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for unit in TemperatureUnit::members() {
            assert_eq!(convert(-40.123, *unit, *unit), -40.123);
        }
    }

    #[test]
    fn test_rejects_other_families() {
        let err = TemperatureConverter
            .convert(0.0, &TemperatureUnit::Celsius.into(), &PressureUnit::Bar.into())
            .unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversion(_)));

        let err = TemperatureConverter
            .convert(0.0, &TemperatureUnit::Celsius.pow(2.0).into(), &TemperatureUnit::Kelvin.pow(2.0).into())
            .unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversion(_)));
    }
}
