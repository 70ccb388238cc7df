//! Converter for products/quotients of absolute families
//!
//! The factor is `numerator_factor / denominator_factor`; each side's factor
//! is the product over its terms of the family factor raised to the term's
//! power. Every from-side term is paired with an unused to-side term of the
//! same family and power.

use crd_core::{UnitError, UnitResult};
use crd_units::{CompositeDimension, Dimension, GenericCompositeDimension, UnitDescriptor, UnitFamily};
use crate::converters::absolute_factor;
use crate::traits::UnitConverter;

#[derive(Debug, Clone)]
pub struct CompositeConverter {
    shape: GenericCompositeDimension,
}

impl CompositeConverter {
    pub fn new(shape: GenericCompositeDimension) -> Self {
        CompositeConverter { shape }
    }

    pub fn shape(&self) -> &GenericCompositeDimension {
        &self.shape
    }

    /// Multiplicative factor from `from` to `to`
    pub fn factor(&self, from: &CompositeDimension, to: &CompositeDimension) -> UnitResult<f64> {
        if !from.is_instance(&self.shape) || !to.is_instance(&self.shape) {
            return Err(UnitError::invalid_conversion(from, to));
        }
        let numerator = side_factor(&from.numerator, &to.numerator, from, to)?;
        let denominator = side_factor(&from.denominator, &to.denominator, from, to)?;
        Ok(numerator / denominator)
    }
}

fn side_factor(
    from_side: &[Dimension],
    to_side: &[Dimension],
    from: &CompositeDimension,
    to: &CompositeDimension,
) -> UnitResult<f64> {
    let mut unused: Vec<&Dimension> = to_side.iter().collect();
    let mut factor = 1.0;

    for term in from_side {
        let generic = term.to_generic();
        let Some(index) = unused.iter().position(|d| d.is_instance(&generic)) else {
            return Err(UnitError::invalid_conversion(from, to));
        };
        let target = unused.swap_remove(index);

        if term.family() == UnitFamily::Temperature {
            // Affine scales do not distribute over products
            if term.unit != target.unit {
                return Err(UnitError::invalid_conversion(from, to));
            }
            continue;
        }
        factor *= absolute_factor(term.unit, target.unit)?.powf(term.power);
    }

    Ok(factor)
}

impl UnitConverter for CompositeConverter {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64> {
        match (from.as_composite(), to.as_composite()) {
            (Some(f), Some(t)) => Ok(value * self.factor(f, t)?),
            _ => Err(UnitError::wrong_descriptor(format!(
                "composite converter for {} got {} and {}",
                self.shape, from, to
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crd_units::{
        divide, AmountUnit, EnergyUnit, GenericDimension, LengthUnit, MassUnit, TemperatureUnit,
        TimeUnit,
    };

    fn mass_rate() -> CompositeConverter {
        CompositeConverter::new(GenericDimension::new(UnitFamily::Mass).divide(UnitFamily::Time))
    }

    #[test]
    fn test_mass_rate() {
        let from = divide(MassUnit::KiloGram, TimeUnit::Hour);
        let to = divide(MassUnit::MetricTonne, TimeUnit::Day);
        assert_relative_eq!(10.0 * mass_rate().factor(&from, &to).unwrap(), 0.24, max_relative = 1e-12);
    }

    #[test]
    fn test_identity_factor() {
        let rate = divide(MassUnit::Pound, TimeUnit::Minute);
        assert_eq!(mass_rate().factor(&rate, &rate), Ok(1.0));
    }

    #[test]
    fn test_order_of_terms_does_not_matter() {
        let converter = CompositeConverter::new(
            GenericDimension::new(UnitFamily::Mass)
                .multiply(GenericDimension::with_power(UnitFamily::Length, 2.0))
                .divide(GenericDimension::with_power(UnitFamily::Time, 2.0)),
        );
        let from = CompositeDimension::new(
            [LengthUnit::KiloMeter.pow(2.0), MassUnit::Gram.into()],
            [TimeUnit::Hour.pow(2.0)],
        );
        let to = CompositeDimension::new(
            [MassUnit::KiloGram.into(), LengthUnit::Meter.pow(2.0)],
            [TimeUnit::Second.pow(2.0)],
        );
        let expected = 1e-3 * 1e6 / (3600.0 * 3600.0);
        assert_relative_eq!(converter.factor(&from, &to).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_repeated_family_terms() {
        // each from-side term pairs with exactly one unused to-side term
        let converter = CompositeConverter::new(GenericCompositeDimension::new(
            [UnitFamily::Length, UnitFamily::Length],
            Vec::<GenericDimension>::new(),
        ));
        let from = CompositeDimension::new([LengthUnit::Meter, LengthUnit::Foot], Vec::<Dimension>::new());
        let to = CompositeDimension::new([LengthUnit::Meter, LengthUnit::Meter], Vec::<Dimension>::new());
        assert_relative_eq!(converter.factor(&from, &to).unwrap(), 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let from = divide(MassUnit::KiloGram, TimeUnit::Hour);
        let to = divide(AmountUnit::Mol, TimeUnit::Hour);
        let err = mass_rate().factor(&from, &to).unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversion(_)));
    }

    #[test]
    fn test_temperature_terms() {
        let converter = CompositeConverter::new(
            GenericDimension::new(UnitFamily::Energy)
                .divide(UnitFamily::Temperature)
                .divide(UnitFamily::Amount),
        );
        let from = divide(EnergyUnit::KiloJoule, TemperatureUnit::Kelvin).divide(AmountUnit::KiloMol);
        let same_scale = divide(EnergyUnit::Joule, TemperatureUnit::Kelvin).divide(AmountUnit::Mol);
        assert_relative_eq!(converter.factor(&from, &same_scale).unwrap(), 1.0);

        let other_scale = divide(EnergyUnit::Joule, TemperatureUnit::Celsius).divide(AmountUnit::Mol);
        let err = converter.factor(&from, &other_scale).unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversion(_)));
    }

    #[test]
    fn test_plain_descriptor_rejected() {
        let err = mass_rate()
            .convert(1.0, &MassUnit::Gram.into(), &MassUnit::KiloGram.into())
            .unwrap_err();
        assert!(matches!(err, UnitError::WrongUnitDescriptorType(_)));
    }
}
