//! Dimension algebra over concrete units
//!
//! A `Dimension` is one unit raised to a power. A `CompositeDimension` is a
//! product/quotient of dimensions kept as two bags, so equality, hashing and
//! printing do not depend on the order terms were combined in.

use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};
use crate::algebra::{self, Term};
use crate::{GenericCompositeDimension, GenericDimension, MeasurementUnit, UnitDescriptor, UnitFamily};

/// One measurement unit raised to a power
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimension {
    pub unit: MeasurementUnit,
    pub power: f64,
}

impl Dimension {
    /// The unit to the first power
    pub fn new(unit: impl Into<MeasurementUnit>) -> Self {
        Dimension { unit: unit.into(), power: 1.0 }
    }

    pub fn with_power(unit: impl Into<MeasurementUnit>, power: f64) -> Self {
        Dimension { unit: unit.into(), power }
    }

    pub fn family(&self) -> UnitFamily {
        self.unit.family()
    }

    /// Raise to a power; powers multiply, so `(m^2)^3 = m^6`
    pub fn raise_to_power(self, power: f64) -> Dimension {
        Dimension { unit: self.unit, power: self.power * power }
    }

    pub fn invert(self) -> Dimension {
        self.raise_to_power(-1.0)
    }

    /// `self * other`; `self` leads the numerator
    pub fn multiply(&self, other: impl Into<UnitDescriptor>) -> CompositeDimension {
        match other.into() {
            UnitDescriptor::Dimension(d) => CompositeDimension {
                numerator: vec![*self, d],
                denominator: Vec::new(),
            },
            UnitDescriptor::Composite(c) => {
                let mut numerator = Vec::with_capacity(c.numerator.len() + 1);
                numerator.push(*self);
                numerator.extend(c.numerator);
                CompositeDimension { numerator, denominator: c.denominator }
            }
        }
    }

    /// `self / other`
    pub fn divide(&self, other: impl Into<UnitDescriptor>) -> CompositeDimension {
        match other.into() {
            UnitDescriptor::Dimension(d) => CompositeDimension {
                numerator: vec![*self],
                denominator: vec![d],
            },
            UnitDescriptor::Composite(c) => {
                let mut numerator = Vec::with_capacity(c.denominator.len() + 1);
                numerator.push(*self);
                numerator.extend(c.denominator);
                CompositeDimension { numerator, denominator: c.numerator }
            }
        }
    }

    /// Same family and same power as `generic`
    pub fn is_instance(&self, generic: &GenericDimension) -> bool {
        self.family() == generic.family && self.power == generic.power
    }

    pub fn to_generic(&self) -> GenericDimension {
        GenericDimension::with_power(self.family(), self.power)
    }

    /// Same power, unit replaced by `f(unit)`
    pub fn map_unit(&self, f: impl Fn(MeasurementUnit) -> MeasurementUnit) -> Dimension {
        Dimension { unit: f(self.unit), power: self.power }
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
            && algebra::power_bits(self.power) == algebra::power_bits(other.power)
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        algebra::power_bits(self.power).hash(state);
    }
}

impl From<MeasurementUnit> for Dimension {
    fn from(unit: MeasurementUnit) -> Self {
        Dimension::new(unit)
    }
}

impl Term for Dimension {
    type Key = MeasurementUnit;

    fn key(&self) -> MeasurementUnit {
        self.unit
    }

    fn exponent(&self) -> f64 {
        self.power
    }

    fn from_parts(key: MeasurementUnit, exponent: f64) -> Self {
        Dimension::with_power(key, exponent)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", algebra::render_power(self.unit.symbol(), self.power))
    }
}

/// Product/quotient of dimensions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompositeDimension {
    pub numerator: Vec<Dimension>,
    pub denominator: Vec<Dimension>,
}

impl CompositeDimension {
    pub fn new<N, D>(numerator: N, denominator: D) -> Self
    where
        N: IntoIterator,
        N::Item: Into<Dimension>,
        D: IntoIterator,
        D::Item: Into<Dimension>,
    {
        CompositeDimension {
            numerator: numerator.into_iter().map(Into::into).collect(),
            denominator: denominator.into_iter().map(Into::into).collect(),
        }
    }

    /// The unit of non-dimensional quantities: nothing on either side
    pub fn non_dimensional() -> Self {
        CompositeDimension::default()
    }

    pub fn is_non_dimensional(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    /// `self * other`, returned as a new composite
    pub fn multiply(&self, other: impl Into<UnitDescriptor>) -> CompositeDimension {
        let mut result = self.clone();
        match other.into() {
            UnitDescriptor::Dimension(d) => result.numerator.push(d),
            UnitDescriptor::Composite(c) => {
                result.numerator.extend(c.numerator);
                result.denominator.extend(c.denominator);
            }
        }
        result
    }

    /// `self / other`, returned as a new composite
    pub fn divide(&self, other: impl Into<UnitDescriptor>) -> CompositeDimension {
        let mut result = self.clone();
        match other.into() {
            UnitDescriptor::Dimension(d) => result.denominator.push(d),
            UnitDescriptor::Composite(c) => {
                result.numerator.extend(c.denominator);
                result.denominator.extend(c.numerator);
            }
        }
        result
    }

    /// Canonicalize in place.
    ///
    /// Only identical units merge or cancel: meters never fold into
    /// kilometers, and aliased units (Pa, J) are never expanded into their
    /// base composite here.
    pub fn simplify(&mut self) {
        algebra::simplify_terms(&mut self.numerator, &mut self.denominator);
    }

    /// Simplified copy
    pub fn simplified(&self) -> CompositeDimension {
        let mut result = self.clone();
        result.simplify();
        result
    }

    /// Structural match against a family-level shape (bag semantics)
    pub fn is_instance(&self, generic: &GenericCompositeDimension) -> bool {
        self.to_generic() == *generic
    }

    pub fn to_generic(&self) -> GenericCompositeDimension {
        GenericCompositeDimension {
            numerator: self.numerator.iter().map(Dimension::to_generic).collect(),
            denominator: self.denominator.iter().map(Dimension::to_generic).collect(),
        }
    }

    /// First numerator term matching `generic`
    pub fn numerator_for(&self, generic: &GenericDimension) -> Option<&Dimension> {
        self.numerator.iter().find(|d| d.is_instance(generic))
    }

    /// First denominator term matching `generic`
    pub fn denominator_for(&self, generic: &GenericDimension) -> Option<&Dimension> {
        self.denominator.iter().find(|d| d.is_instance(generic))
    }

    /// Every term, numerator first
    pub fn terms(&self) -> impl Iterator<Item = &Dimension> {
        self.numerator.iter().chain(self.denominator.iter())
    }

    pub fn contains_family(&self, family: UnitFamily) -> bool {
        self.terms().any(|d| d.family() == family)
    }

    /// Same shape, every unit replaced by `f(unit)`
    pub fn map_units(&self, f: impl Fn(MeasurementUnit) -> MeasurementUnit) -> CompositeDimension {
        CompositeDimension {
            numerator: self.numerator.iter().map(|d| d.map_unit(&f)).collect(),
            denominator: self.denominator.iter().map(|d| d.map_unit(&f)).collect(),
        }
    }
}

impl PartialEq for CompositeDimension {
    fn eq(&self, other: &Self) -> bool {
        algebra::same_terms(&self.numerator, &self.denominator, &other.numerator, &other.denominator)
    }
}

impl Eq for CompositeDimension {}

impl Hash for CompositeDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        algebra::hash_terms(&self.numerator, &self.denominator, state);
    }
}

impl fmt::Display for CompositeDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.numerator.iter().map(|d| d.to_string()).collect();
        let denominator = self.denominator.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", algebra::render_terms(numerator, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthUnit, MassUnit, PressureUnit, TemperatureUnit, TimeUnit};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_dimension_eq() {
        assert_eq!(Dimension::new(TemperatureUnit::Kelvin), Dimension::new(TemperatureUnit::Kelvin));
        assert_ne!(Dimension::new(TemperatureUnit::Celsius), Dimension::new(TemperatureUnit::Rankine));
        assert_ne!(Dimension::new(LengthUnit::Meter), LengthUnit::Meter.pow(2.0));
    }

    #[test]
    fn test_dimension_eq_agrees_with_composite_eq() {
        let odd = LengthUnit::Meter.pow(f64::NAN);
        assert_eq!(odd, odd);
        assert_eq!(
            CompositeDimension::new([odd], Vec::<Dimension>::new()),
            CompositeDimension::new([odd], Vec::<Dimension>::new())
        );

        let zero = LengthUnit::Meter.pow(0.0);
        let negative_zero = LengthUnit::Meter.pow(-0.0);
        assert_eq!(zero, negative_zero);
        assert_eq!(hash_of(&zero), hash_of(&negative_zero));
    }

    #[test]
    fn test_composite_order_independent() {
        let c1 = Dimension::new(TemperatureUnit::Kelvin).multiply(PressureUnit::Bar);
        let c2 = Dimension::new(PressureUnit::Bar).multiply(TemperatureUnit::Kelvin);
        assert_eq!(c1, c2);
        assert_eq!(hash_of(&c1), hash_of(&c2));
        assert_eq!(c1.to_string(), c2.to_string());
    }

    #[test]
    fn test_primitives_multiplication() {
        let composite = Dimension::new(TemperatureUnit::Celsius).multiply(PressureUnit::Bar);
        assert_eq!(composite.numerator.len(), 2);
        assert_eq!(composite.denominator.len(), 0);
        assert_eq!(composite.to_string(), "bar * °C");
    }

    #[test]
    fn test_composite_multiplication() {
        let composite = Dimension::new(TemperatureUnit::Kelvin)
            .multiply(PressureUnit::Pascal)
            .multiply(MassUnit::Gram);
        assert_eq!(composite.numerator.len(), 3);
        assert_eq!(composite.to_string(), "K * Pa * g");
    }

    #[test]
    fn test_multiplication_does_not_mutate() {
        let base = Dimension::new(MassUnit::Gram).divide(TimeUnit::Second);
        let product = base.multiply(LengthUnit::Meter);
        assert_eq!(base.numerator.len(), 1);
        assert_eq!(product.numerator.len(), 2);
    }

    #[test]
    fn test_primitives_division() {
        let composite = Dimension::new(MassUnit::KiloGram).divide(LengthUnit::KiloMeter);
        assert_eq!(composite.numerator.len(), 1);
        assert_eq!(composite.denominator.len(), 1);
        assert_eq!(composite.to_string(), "kg / km");
    }

    #[test]
    fn test_composite_division() {
        let composite = Dimension::new(MassUnit::Gram)
            .divide(PressureUnit::Bar)
            .divide(LengthUnit::Foot);
        assert_eq!(composite.numerator.len(), 1);
        assert_eq!(composite.denominator.len(), 2);
        assert_eq!(composite.to_string(), "g / bar / ft");
    }

    #[test]
    fn test_divide_by_composite_flips_sides() {
        let rate = Dimension::new(MassUnit::KiloGram).divide(TimeUnit::Hour);
        let per_rate = Dimension::new(LengthUnit::Meter).divide(rate.clone());
        assert_eq!(per_rate, CompositeDimension::new([Dimension::new(LengthUnit::Meter), Dimension::new(TimeUnit::Hour)], [MassUnit::KiloGram]));

        let ratio = rate.divide(rate.clone());
        assert_eq!(ratio.numerator.len(), 2);
        assert_eq!(ratio.denominator.len(), 2);
        assert!(ratio.simplified().is_non_dimensional());
    }

    #[test]
    fn test_power() {
        let dimension = Dimension::new(TemperatureUnit::Kelvin).raise_to_power(3.0);
        assert_eq!(dimension.power, 3.0);
        assert_eq!(dimension.to_string(), "K^3");
        assert_eq!(dimension.raise_to_power(2.0).power, 6.0);
    }

    #[test]
    fn test_multiple_operations() {
        let composite = TemperatureUnit::Kelvin
            .pow(1.5)
            .multiply(LengthUnit::CentiMeter)
            .divide(MassUnit::Gram)
            .divide(PressureUnit::Bar);
        assert_eq!(composite.numerator.len(), 2);
        assert_eq!(composite.denominator.len(), 2);
        assert_eq!(composite.to_string(), "K^1.5 * cm / bar / g");
    }

    #[test]
    fn test_numerator_for() {
        let composite = CompositeDimension::new(
            [LengthUnit::CentiMeter.pow(2.0), MassUnit::Gram.into()],
            [PressureUnit::Bar.pow(3.0), TemperatureUnit::Celsius.into()],
        );
        let area = composite.numerator_for(&GenericDimension::with_power(UnitFamily::Length, 2.0)).unwrap();
        assert_eq!(area.unit, LengthUnit::CentiMeter.into());
        assert!(composite.numerator_for(&GenericDimension::new(UnitFamily::Length)).is_none());

        let temperature = composite.denominator_for(&GenericDimension::new(UnitFamily::Temperature)).unwrap();
        assert_eq!(temperature.unit, TemperatureUnit::Celsius.into());
        assert!(composite.denominator_for(&GenericDimension::new(UnitFamily::Pressure)).is_none());
    }

    #[test]
    fn test_is_instance() {
        let composite = CompositeDimension::new(
            [LengthUnit::CentiMeter.pow(2.0), TemperatureUnit::Kelvin.into()],
            [MassUnit::Gram.into(), PressureUnit::Bar.pow(3.0)],
        );
        let generic = GenericDimension::new(UnitFamily::Temperature)
            .multiply(GenericDimension::with_power(UnitFamily::Length, 2.0))
            .divide(UnitFamily::Mass)
            .divide(GenericDimension::with_power(UnitFamily::Pressure, 3.0));
        assert!(composite.is_instance(&generic));

        let other = CompositeDimension::new([LengthUnit::CentiMeter.pow(3.0)], [MassUnit::Gram, MassUnit::Gram]);
        let generic = GenericDimension::with_power(UnitFamily::Length, 3.0)
            .divide(UnitFamily::Mass)
            .divide(UnitFamily::Temperature);
        assert!(!other.is_instance(&generic));
    }

    #[test]
    fn test_simplify_non_dimensional() {
        let mut composite = CompositeDimension::new([LengthUnit::Meter], [LengthUnit::Meter]);
        composite.simplify();
        assert!(composite.numerator.is_empty());
        assert!(composite.denominator.is_empty());
        assert!(composite.is_non_dimensional());
    }

    #[test]
    fn test_simplify_simple_dimensions() {
        let mut composite = CompositeDimension::new(
            [MeasurementUnit::from(LengthUnit::Meter), TimeUnit::Second.into()],
            [TimeUnit::Second],
        );
        composite.simplify();
        assert!(composite.denominator.is_empty());
        assert_eq!(composite.numerator, vec![Dimension::new(LengthUnit::Meter)]);
    }

    #[test]
    fn test_simplify_exponent_dimensions() {
        let mut composite = CompositeDimension::new([TemperatureUnit::Kelvin.pow(2.0)], [TemperatureUnit::Kelvin]);
        composite.simplify();
        assert!(composite.denominator.is_empty());
        assert_eq!(composite.numerator, vec![Dimension::new(TemperatureUnit::Kelvin)]);
    }

    #[test]
    fn test_simplify_same_side_merges() {
        let mut composite = CompositeDimension::new([TimeUnit::Second, TimeUnit::Second], [TemperatureUnit::Rankine]);
        composite.simplify();
        assert_eq!(composite.numerator, vec![TimeUnit::Second.pow(2.0)]);
        assert_eq!(composite.denominator, vec![Dimension::new(TemperatureUnit::Rankine)]);

        let mut composite = CompositeDimension::new([LengthUnit::Foot], [MassUnit::Gram, MassUnit::Gram]);
        composite.simplify();
        assert_eq!(composite.numerator, vec![Dimension::new(LengthUnit::Foot)]);
        assert_eq!(composite.denominator, vec![MassUnit::Gram.pow(2.0)]);
    }

    #[test]
    fn test_simplify_keeps_different_units_of_same_family() {
        let mut composite = CompositeDimension::new([LengthUnit::Meter], [LengthUnit::KiloMeter]);
        composite.simplify();
        assert_eq!(composite.numerator, vec![Dimension::new(LengthUnit::Meter)]);
        assert_eq!(composite.denominator, vec![Dimension::new(LengthUnit::KiloMeter)]);
    }

    #[test]
    fn test_simplify_aliased_dimension_is_not_expanded() {
        let mut composite = CompositeDimension::new(
            [Dimension::new(PressureUnit::Pascal), Dimension::new(LengthUnit::Meter), TimeUnit::Second.pow(2.0)],
            [MassUnit::KiloGram],
        );
        composite.simplify();
        assert_eq!(
            composite.numerator,
            vec![Dimension::new(PressureUnit::Pascal), Dimension::new(LengthUnit::Meter), TimeUnit::Second.pow(2.0)]
        );
        assert_eq!(composite.denominator, vec![Dimension::new(MassUnit::KiloGram)]);
    }

    #[test]
    fn test_simplify_negative_exponents_merge() {
        let mut composite = CompositeDimension::new([LengthUnit::Foot.pow(-1.0)], [LengthUnit::Foot.pow(-2.0)]);
        composite.simplify();
        assert_eq!(composite.numerator, vec![Dimension::new(LengthUnit::Foot)]);
        assert!(composite.denominator.is_empty());
    }

    #[test]
    fn test_simplify_negative_exponent() {
        let mut composite = CompositeDimension::new(Vec::<Dimension>::new(), [LengthUnit::Foot.pow(-1.0)]);
        composite.simplify();
        assert_eq!(composite.numerator, vec![Dimension::new(LengthUnit::Foot)]);
        assert!(composite.denominator.is_empty());
    }

    #[test]
    fn test_display_empty_numerator() {
        let composite = CompositeDimension::new(Vec::<Dimension>::new(), [TimeUnit::Second]);
        assert_eq!(composite.to_string(), "1 / s");
        assert_eq!(CompositeDimension::non_dimensional().to_string(), "1");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_unit() -> impl Strategy<Value = MeasurementUnit> {
            let units: Vec<MeasurementUnit> = UnitFamily::ALL
                .iter()
                .flat_map(|family| family.members().iter().copied())
                .collect();
            proptest::sample::select(units)
        }

        fn any_dimension() -> impl Strategy<Value = Dimension> {
            (any_unit(), -3i32..=3).prop_map(|(unit, power)| Dimension::with_power(unit, power as f64))
        }

        proptest! {
            #[test]
            fn prop_multiplication_commutes(a in any_dimension(), b in any_dimension()) {
                let ab = a.multiply(b);
                let ba = b.multiply(a);
                prop_assert_eq!(&ab, &ba);
                prop_assert_eq!(hash_of(&ab), hash_of(&ba));
                prop_assert_eq!(ab.to_string(), ba.to_string());
            }

            #[test]
            fn prop_simplify_is_idempotent(num in prop::collection::vec(any_dimension(), 0..5),
                                           den in prop::collection::vec(any_dimension(), 0..5)) {
                let once = CompositeDimension::new(num, den).simplified();
                let twice = once.simplified();
                prop_assert_eq!(once.numerator, twice.numerator);
                prop_assert_eq!(once.denominator, twice.denominator);
            }

            #[test]
            fn prop_self_quotient_cancels(num in prop::collection::vec(any_dimension(), 0..5)) {
                let composite = CompositeDimension::new(num.clone(), num);
                prop_assert!(composite.simplified().is_non_dimensional());
            }
        }
    }
}
