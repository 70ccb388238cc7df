//! Physical Property - a value bound to a unit descriptor of one kind

use std::fmt;
use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crd_core::{UnitError, UnitResult};
use crd_convert::ConversionContext;
use crd_units::{expand_aliases, UnitDescriptor};
use crate::kind::{AliasedKind, PropertyKind};

/// A value in a unit whose shape matches the kind `K`.
///
/// Instances are immutable; every conversion returns a new property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProperty", into = "RawProperty", bound = "")]
pub struct PhysicalProperty<K: PropertyKind> {
    value: f64,
    descriptor: UnitDescriptor,
    kind: PhantomData<K>,
}

/// Serialized form; validated against the kind when read back
#[derive(Serialize, Deserialize)]
pub struct RawProperty {
    value: f64,
    unit: UnitDescriptor,
}

impl<K: PropertyKind> PhysicalProperty<K> {
    /// Create a property, checking `unit` against the kind's shape
    pub fn new(value: f64, unit: impl Into<UnitDescriptor>) -> UnitResult<Self> {
        let descriptor = unit.into();
        if !descriptor.is_instance(&K::shape()) {
            return Err(UnitError::wrong_descriptor(format!(
                "{} is not a {} unit (expected {})",
                descriptor,
                K::NAME,
                K::shape()
            )));
        }
        Ok(Self::from_parts(value, descriptor))
    }

    /// Caller guarantees `descriptor` matches `K`
    pub(crate) fn from_parts(value: f64, descriptor: UnitDescriptor) -> Self {
        PhysicalProperty { value, descriptor, kind: PhantomData }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn descriptor(&self) -> &UnitDescriptor {
        &self.descriptor
    }

    /// Convert to `target` using the standard converter table
    pub fn to_unit(&self, target: impl Into<UnitDescriptor>) -> UnitResult<Self> {
        self.to_unit_in(target, &ConversionContext::standard())
    }

    /// Convert to `target` using the converters in `ctx`.
    ///
    /// A target of the wrong descriptor kind (single dimension vs composite)
    /// is `WrongUnitDescriptorType`; a target of the right kind but another
    /// family shape is `InvalidConversion`.
    pub fn to_unit_in(&self, target: impl Into<UnitDescriptor>, ctx: &ConversionContext) -> UnitResult<Self> {
        let target = target.into();
        if target.as_dimension().is_some() != K::VARIANT.is_single_dimension() {
            return Err(UnitError::wrong_descriptor(format!(
                "{} cannot be expressed in {}",
                K::NAME,
                target
            )));
        }
        let value = ctx.convert(self.value, &self.descriptor, &target)?;
        Ok(Self::from_parts(value, target))
    }

    /// Convert to the SI member of every family in the descriptor
    pub fn to_si(&self) -> UnitResult<Self> {
        self.to_si_in(&ConversionContext::standard())
    }

    pub fn to_si_in(&self, ctx: &ConversionContext) -> UnitResult<Self> {
        self.to_unit_in(self.descriptor.to_si(), ctx)
    }
}

impl<K: AliasedKind> PhysicalProperty<K> {
    /// Express the property in base SI units.
    ///
    /// The value is first converted to the aliases' reference units (Pa, J),
    /// which equal their base composites exactly, so the number carries over
    /// unchanged.
    pub fn to_base_units(&self) -> UnitResult<PhysicalProperty<K::Base>> {
        self.to_base_units_in(&ConversionContext::standard())
    }

    pub fn to_base_units_in(&self, ctx: &ConversionContext) -> UnitResult<PhysicalProperty<K::Base>> {
        let si = self.to_si_in(ctx)?;
        let base = expand_aliases(&si.descriptor)?;
        PhysicalProperty::new(si.value, base)
    }
}

impl<K: PropertyKind> TryFrom<RawProperty> for PhysicalProperty<K> {
    type Error = UnitError;

    fn try_from(raw: RawProperty) -> UnitResult<Self> {
        PhysicalProperty::new(raw.value, raw.unit)
    }
}

impl<K: PropertyKind> From<PhysicalProperty<K>> for RawProperty {
    fn from(property: PhysicalProperty<K>) -> Self {
        RawProperty { value: property.value, unit: property.descriptor }
    }
}

impl<K: PropertyKind> fmt::Display for PhysicalProperty<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.descriptor.to_string();
        if unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, unit)
        }
    }
}
