//! Family-level descriptors
//!
//! Mirrors `Dimension`/`CompositeDimension` with unit families in place of
//! concrete units. Used as converter-registry keys and for shape checks;
//! never carries a numeric value.

use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};
use crd_core::{UnitError, UnitResult};
use crate::algebra::{self, Term};
use crate::UnitFamily;

/// A unit family raised to a power
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenericDimension {
    pub family: UnitFamily,
    pub power: f64,
}

impl GenericDimension {
    pub fn new(family: UnitFamily) -> Self {
        GenericDimension { family, power: 1.0 }
    }

    pub fn with_power(family: UnitFamily, power: f64) -> Self {
        GenericDimension { family, power }
    }

    pub fn raise_to_power(self, power: f64) -> GenericDimension {
        GenericDimension { family: self.family, power: self.power * power }
    }

    pub fn multiply(&self, other: impl Into<GenericDescriptor>) -> GenericCompositeDimension {
        match other.into() {
            GenericDescriptor::Dimension(d) => GenericCompositeDimension {
                numerator: vec![*self, d],
                denominator: Vec::new(),
            },
            GenericDescriptor::Composite(c) => {
                let mut numerator = vec![*self];
                numerator.extend(c.numerator);
                GenericCompositeDimension { numerator, denominator: c.denominator }
            }
        }
    }

    pub fn divide(&self, other: impl Into<GenericDescriptor>) -> GenericCompositeDimension {
        match other.into() {
            GenericDescriptor::Dimension(d) => GenericCompositeDimension {
                numerator: vec![*self],
                denominator: vec![d],
            },
            GenericDescriptor::Composite(c) => {
                let mut numerator = vec![*self];
                numerator.extend(c.denominator);
                GenericCompositeDimension { numerator, denominator: c.numerator }
            }
        }
    }
}

impl PartialEq for GenericDimension {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && algebra::power_bits(self.power) == algebra::power_bits(other.power)
    }
}

impl Eq for GenericDimension {}

impl Hash for GenericDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        algebra::power_bits(self.power).hash(state);
    }
}

impl From<UnitFamily> for GenericDimension {
    fn from(family: UnitFamily) -> Self {
        GenericDimension::new(family)
    }
}

impl Term for GenericDimension {
    type Key = UnitFamily;

    fn key(&self) -> UnitFamily {
        self.family
    }

    fn exponent(&self) -> f64 {
        self.power
    }

    fn from_parts(key: UnitFamily, exponent: f64) -> Self {
        GenericDimension::with_power(key, exponent)
    }
}

impl fmt::Display for GenericDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", algebra::render_power(self.family.name(), self.power))
    }
}

/// Product/quotient of generic dimensions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericCompositeDimension {
    pub numerator: Vec<GenericDimension>,
    pub denominator: Vec<GenericDimension>,
}

impl GenericCompositeDimension {
    pub fn new<N, D>(numerator: N, denominator: D) -> Self
    where
        N: IntoIterator,
        N::Item: Into<GenericDimension>,
        D: IntoIterator,
        D::Item: Into<GenericDimension>,
    {
        GenericCompositeDimension {
            numerator: numerator.into_iter().map(Into::into).collect(),
            denominator: denominator.into_iter().map(Into::into).collect(),
        }
    }

    pub fn multiply(&self, other: impl Into<GenericDescriptor>) -> GenericCompositeDimension {
        let mut result = self.clone();
        match other.into() {
            GenericDescriptor::Dimension(d) => result.numerator.push(d),
            GenericDescriptor::Composite(c) => {
                result.numerator.extend(c.numerator);
                result.denominator.extend(c.denominator);
            }
        }
        result
    }

    pub fn divide(&self, other: impl Into<GenericDescriptor>) -> GenericCompositeDimension {
        let mut result = self.clone();
        match other.into() {
            GenericDescriptor::Dimension(d) => result.denominator.push(d),
            GenericDescriptor::Composite(c) => {
                result.numerator.extend(c.denominator);
                result.denominator.extend(c.numerator);
            }
        }
        result
    }

    /// Merge and cancel equal families in place
    pub fn simplify(&mut self) {
        algebra::simplify_terms(&mut self.numerator, &mut self.denominator);
    }

    pub fn contains_family(&self, family: UnitFamily) -> bool {
        self.numerator.iter().chain(self.denominator.iter()).any(|d| d.family == family)
    }
}

impl PartialEq for GenericCompositeDimension {
    fn eq(&self, other: &Self) -> bool {
        algebra::same_terms(&self.numerator, &self.denominator, &other.numerator, &other.denominator)
    }
}

impl Eq for GenericCompositeDimension {}

impl Hash for GenericCompositeDimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        algebra::hash_terms(&self.numerator, &self.denominator, state);
    }
}

impl fmt::Display for GenericCompositeDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.numerator.iter().map(|d| d.to_string()).collect();
        let denominator = self.denominator.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", algebra::render_terms(numerator, denominator))
    }
}

/// Either generic shape; the key type of the converter registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericDescriptor {
    Dimension(GenericDimension),
    Composite(GenericCompositeDimension),
}

impl GenericDescriptor {
    pub fn multiply(&self, other: impl Into<GenericDescriptor>) -> GenericCompositeDimension {
        match self {
            GenericDescriptor::Dimension(d) => d.multiply(other),
            GenericDescriptor::Composite(c) => c.multiply(other),
        }
    }

    pub fn divide(&self, other: impl Into<GenericDescriptor>) -> GenericCompositeDimension {
        match self {
            GenericDescriptor::Dimension(d) => d.divide(other),
            GenericDescriptor::Composite(c) => c.divide(other),
        }
    }

    /// Fails with `InvalidOperation` for composites
    pub fn raise_to_power(&self, power: f64) -> UnitResult<GenericDimension> {
        match self {
            GenericDescriptor::Dimension(d) => Ok(d.raise_to_power(power)),
            GenericDescriptor::Composite(c) => Err(UnitError::invalid_operation(format!(
                "cannot raise composite {} to a power",
                c
            ))),
        }
    }

    pub fn contains_family(&self, family: UnitFamily) -> bool {
        match self {
            GenericDescriptor::Dimension(d) => d.family == family,
            GenericDescriptor::Composite(c) => c.contains_family(family),
        }
    }
}

impl From<UnitFamily> for GenericDescriptor {
    fn from(family: UnitFamily) -> Self {
        GenericDescriptor::Dimension(GenericDimension::new(family))
    }
}

impl From<GenericDimension> for GenericDescriptor {
    fn from(dimension: GenericDimension) -> Self {
        GenericDescriptor::Dimension(dimension)
    }
}

impl From<GenericCompositeDimension> for GenericDescriptor {
    fn from(composite: GenericCompositeDimension) -> Self {
        GenericDescriptor::Composite(composite)
    }
}

impl fmt::Display for GenericDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericDescriptor::Dimension(d) => write!(f, "{}", d),
            GenericDescriptor::Composite(c) => write!(f, "{}", c),
        }
    }
}
