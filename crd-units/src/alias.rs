//! Aliased unit families
//!
//! Pressure and Energy are written with one symbol but are composites of the
//! base SI families. Each mapping names the reference unit that is exactly
//! equal to its base composite: `1 Pa = 1 kg / m / s^2`, `1 J = 1 kg * m^2 / s^2`.

use crd_core::{UnitError, UnitResult};
use crate::{
    CompositeDimension, Dimension, EnergyUnit, LengthUnit, MassUnit, MeasurementUnit,
    PressureUnit, TimeUnit, UnitDescriptor, UnitFamily,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AliasMapping {
    pub family: UnitFamily,
    /// Unit whose factor to `base` is exactly 1
    pub reference: MeasurementUnit,
    /// Equivalent composite in SI base units
    pub base: CompositeDimension,
}

impl AliasMapping {
    pub fn for_family(family: UnitFamily) -> Option<AliasMapping> {
        match family {
            UnitFamily::Pressure => Some(AliasMapping {
                family,
                reference: PressureUnit::Pascal.into(),
                base: CompositeDimension::new(
                    [Dimension::new(MassUnit::KiloGram)],
                    [Dimension::new(LengthUnit::Meter), TimeUnit::Second.pow(2.0)],
                ),
            }),
            UnitFamily::Energy => Some(AliasMapping {
                family,
                reference: EnergyUnit::Joule.into(),
                base: CompositeDimension::new(
                    [Dimension::new(MassUnit::KiloGram), LengthUnit::Meter.pow(2.0)],
                    [TimeUnit::Second.pow(2.0)],
                ),
            }),
            _ => None,
        }
    }

    /// Every mapping, one per aliased family
    pub fn all() -> Vec<AliasMapping> {
        UnitFamily::ALL
            .iter()
            .filter_map(|family| AliasMapping::for_family(*family))
            .collect()
    }

    /// `reference^power` written in base units, as `(numerator, denominator)`.
    ///
    /// A negative power swaps the sides so every returned power is positive.
    pub fn expand(&self, power: f64) -> (Vec<Dimension>, Vec<Dimension>) {
        let scale = |dims: &[Dimension]| -> Vec<Dimension> {
            dims.iter().map(|d| d.raise_to_power(power.abs())).collect()
        };
        let numerator = scale(&self.base.numerator);
        let denominator = scale(&self.base.denominator);
        if power < 0.0 {
            (denominator, numerator)
        } else {
            (numerator, denominator)
        }
    }
}

/// Rewrite every aliased term of `descriptor` as its base composite.
///
/// Aliased terms must already be expressed in their reference unit (convert
/// with `to_si` first); anything else would change the numeric value and is
/// rejected with `InvalidConversion`. The result is simplified.
pub fn expand_aliases(descriptor: &UnitDescriptor) -> UnitResult<CompositeDimension> {
    let (numerator, denominator) = match descriptor {
        UnitDescriptor::Dimension(d) => (vec![*d], Vec::new()),
        UnitDescriptor::Composite(c) => (c.numerator.clone(), c.denominator.clone()),
    };

    let mut result = CompositeDimension::non_dimensional();
    for (dims, inverted) in [(numerator, false), (denominator, true)] {
        for dim in dims {
            let Some(mapping) = AliasMapping::for_family(dim.family()) else {
                if inverted {
                    result.denominator.push(dim);
                } else {
                    result.numerator.push(dim);
                }
                continue;
            };
            if dim.unit != mapping.reference {
                return Err(UnitError::invalid_conversion(
                    dim,
                    format!("base units ({} required)", mapping.reference),
                ));
            }
            let (num, den) = mapping.expand(dim.power);
            if inverted {
                result.numerator.extend(den);
                result.denominator.extend(num);
            } else {
                result.numerator.extend(num);
                result.denominator.extend(den);
            }
        }
    }

    result.simplify();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{divide, AmountUnit, TemperatureUnit};

    #[test]
    fn test_mappings() {
        let all = AliasMapping::all();
        assert_eq!(all.len(), 2);
        for mapping in &all {
            assert!(mapping.family.is_aliased());
            assert_eq!(mapping.reference, mapping.family.si());
            assert!(mapping.base.terms().all(|d| d.unit.is_si()));
        }
        assert!(AliasMapping::for_family(UnitFamily::Length).is_none());
    }

    #[test]
    fn test_expand_pressure() {
        let expanded = expand_aliases(&PressureUnit::Pascal.into()).unwrap();
        assert_eq!(expanded.to_string(), "kg / m / s^2");
    }

    #[test]
    fn test_expand_molar_energy() {
        let molar: UnitDescriptor = divide(EnergyUnit::Joule, AmountUnit::Mol).into();
        let expanded = expand_aliases(&molar).unwrap();
        assert_eq!(
            expanded,
            CompositeDimension::new(
                [Dimension::new(MassUnit::KiloGram), LengthUnit::Meter.pow(2.0)],
                [TimeUnit::Second.pow(2.0), Dimension::new(AmountUnit::Mol)],
            )
        );
    }

    #[test]
    fn test_expand_in_denominator() {
        // m^3 / J  ->  m^3 * s^2 / kg / m^2  ->  m * s^2 / kg
        let descriptor: UnitDescriptor = divide(LengthUnit::Meter.pow(3.0), EnergyUnit::Joule).into();
        let expanded = expand_aliases(&descriptor).unwrap();
        assert_eq!(
            expanded,
            CompositeDimension::new(
                [Dimension::new(LengthUnit::Meter), TimeUnit::Second.pow(2.0)],
                [Dimension::new(MassUnit::KiloGram)],
            )
        );
    }

    #[test]
    fn test_expand_heat_capacity() {
        let descriptor: UnitDescriptor = divide(EnergyUnit::Joule, TemperatureUnit::Kelvin)
            .divide(AmountUnit::Mol)
            .into();
        let expanded = expand_aliases(&descriptor).unwrap();
        assert_eq!(expanded.to_string(), "kg * m^2 / K / mol / s^2");
    }

    #[test]
    fn test_non_reference_unit_rejected() {
        let err = expand_aliases(&PressureUnit::Bar.into()).unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversion(_)));
    }

    #[test]
    fn test_negative_power_swaps_sides() {
        let mapping = AliasMapping::for_family(UnitFamily::Energy).unwrap();
        let (num, den) = mapping.expand(-1.0);
        assert_eq!(num, vec![TimeUnit::Second.pow(2.0)]);
        assert_eq!(den.len(), 2);
    }
}
