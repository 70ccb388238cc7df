//! Unit descriptors and the named algebra operations
//!
//! A `UnitDescriptor` is whatever a physical property may be expressed in:
//! a single `Dimension` or a `CompositeDimension`. Every family enum,
//! `MeasurementUnit`, `Dimension` and `CompositeDimension` converts into it,
//! so `multiply`/`divide` accept any of them.

use std::fmt;
use serde::{Serialize, Deserialize};
use crd_core::{UnitError, UnitResult};
use crate::{
    CompositeDimension, Dimension, GenericDescriptor, MeasurementUnit, UnitFamily,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitDescriptor {
    Dimension(Dimension),
    Composite(CompositeDimension),
}

impl UnitDescriptor {
    pub fn to_generic(&self) -> GenericDescriptor {
        match self {
            UnitDescriptor::Dimension(d) => GenericDescriptor::Dimension(d.to_generic()),
            UnitDescriptor::Composite(c) => GenericDescriptor::Composite(c.to_generic()),
        }
    }

    /// Structural match against a family-level shape.
    ///
    /// A dimension only matches a generic dimension and a composite only a
    /// generic composite.
    pub fn is_instance(&self, generic: &GenericDescriptor) -> bool {
        match (self, generic) {
            (UnitDescriptor::Dimension(d), GenericDescriptor::Dimension(g)) => d.is_instance(g),
            (UnitDescriptor::Composite(c), GenericDescriptor::Composite(g)) => c.is_instance(g),
            _ => false,
        }
    }

    pub fn multiply(&self, other: impl Into<UnitDescriptor>) -> CompositeDimension {
        match self {
            UnitDescriptor::Dimension(d) => d.multiply(other),
            UnitDescriptor::Composite(c) => c.multiply(other),
        }
    }

    pub fn divide(&self, other: impl Into<UnitDescriptor>) -> CompositeDimension {
        match self {
            UnitDescriptor::Dimension(d) => d.divide(other),
            UnitDescriptor::Composite(c) => c.divide(other),
        }
    }

    /// Fails with `InvalidOperation` for composites
    pub fn raise_to_power(&self, power: f64) -> UnitResult<Dimension> {
        match self {
            UnitDescriptor::Dimension(d) => Ok(d.raise_to_power(power)),
            UnitDescriptor::Composite(c) => Err(UnitError::invalid_operation(format!(
                "cannot raise composite {} to a power",
                c
            ))),
        }
    }

    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            UnitDescriptor::Dimension(d) => Some(d),
            UnitDescriptor::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeDimension> {
        match self {
            UnitDescriptor::Dimension(_) => None,
            UnitDescriptor::Composite(c) => Some(c),
        }
    }

    /// Every dimension in the descriptor, numerator first
    pub fn terms(&self) -> Vec<Dimension> {
        match self {
            UnitDescriptor::Dimension(d) => vec![*d],
            UnitDescriptor::Composite(c) => c.terms().copied().collect(),
        }
    }

    /// Same shape, every unit replaced by `f(unit)`
    pub fn map_units(&self, f: impl Fn(MeasurementUnit) -> MeasurementUnit) -> UnitDescriptor {
        match self {
            UnitDescriptor::Dimension(d) => UnitDescriptor::Dimension(d.map_unit(f)),
            UnitDescriptor::Composite(c) => UnitDescriptor::Composite(c.map_units(f)),
        }
    }

    /// Same shape with the SI member of each family substituted
    pub fn to_si(&self) -> UnitDescriptor {
        self.map_units(MeasurementUnit::si)
    }

    pub fn contains_family(&self, family: UnitFamily) -> bool {
        match self {
            UnitDescriptor::Dimension(d) => d.family() == family,
            UnitDescriptor::Composite(c) => c.contains_family(family),
        }
    }
}

impl From<Dimension> for UnitDescriptor {
    fn from(dimension: Dimension) -> Self {
        UnitDescriptor::Dimension(dimension)
    }
}

impl From<CompositeDimension> for UnitDescriptor {
    fn from(composite: CompositeDimension) -> Self {
        UnitDescriptor::Composite(composite)
    }
}

impl From<MeasurementUnit> for UnitDescriptor {
    fn from(unit: MeasurementUnit) -> Self {
        UnitDescriptor::Dimension(Dimension::new(unit))
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitDescriptor::Dimension(d) => write!(f, "{}", d),
            UnitDescriptor::Composite(c) => write!(f, "{}", c),
        }
    }
}

/// `lhs * rhs`
pub fn multiply(lhs: impl Into<UnitDescriptor>, rhs: impl Into<UnitDescriptor>) -> CompositeDimension {
    lhs.into().multiply(rhs)
}

/// `lhs / rhs`
pub fn divide(lhs: impl Into<UnitDescriptor>, rhs: impl Into<UnitDescriptor>) -> CompositeDimension {
    lhs.into().divide(rhs)
}

/// `base^power`; only single dimensions can be raised
pub fn power(base: impl Into<UnitDescriptor>, power: f64) -> UnitResult<Dimension> {
    base.into().raise_to_power(power)
}
