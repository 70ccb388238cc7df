//! Converter traits

use std::fmt;
use crd_core::{UnitError, UnitResult};
use crd_units::{Dimension, FamilyMember, UnitDescriptor};

/// Converts values between two descriptors of one generic shape
pub trait UnitConverter: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;
    fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64>;
}

/// A family whose conversions are a pure multiplicative factor
pub trait AbsoluteUnitConverter: UnitConverter {
    type Unit: FamilyMember;

    /// Value of one `unit` expressed in the family's pivot unit
    fn pivot_factor(&self, unit: Self::Unit) -> f64;

    /// `factor(from, to) = factor(from -> pivot) * factor(pivot -> to)`; exactly 1 when equal
    fn factor(&self, from: Self::Unit, to: Self::Unit) -> f64 {
        if from == to {
            1.0
        } else {
            self.pivot_factor(from) / self.pivot_factor(to)
        }
    }

    /// Convert `value` between two dimensions of this family with equal powers
    fn convert_dimension(&self, value: f64, from: &Dimension, to: &Dimension) -> UnitResult<f64> {
        if from.power != to.power {
            return Err(UnitError::invalid_conversion(from, to));
        }
        let (Ok(src), Ok(dst)) = (<Self::Unit>::try_from(from.unit), <Self::Unit>::try_from(to.unit)) else {
            return Err(UnitError::invalid_conversion(from, to));
        };
        Ok(value * self.factor(src, dst).powf(from.power))
    }
}

/// Both descriptors as single dimensions, or `WrongUnitDescriptorType`
pub(crate) fn expect_dimensions<'a>(
    converter: &str,
    from: &'a UnitDescriptor,
    to: &'a UnitDescriptor,
) -> UnitResult<(&'a Dimension, &'a Dimension)> {
    match (from.as_dimension(), to.as_dimension()) {
        (Some(f), Some(t)) => Ok((f, t)),
        _ => Err(UnitError::wrong_descriptor(format!(
            "{} converts single dimensions, got {} and {}",
            converter, from, to
        ))),
    }
}
