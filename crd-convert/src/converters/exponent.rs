//! Converter for a single absolute family raised to a fixed power (Area, Volume)

use crd_core::{UnitError, UnitResult};
use crd_units::{GenericDimension, UnitDescriptor};
use crate::converters::absolute_factor;
use crate::traits::{expect_dimensions, UnitConverter};

#[derive(Debug, Clone, Copy)]
pub struct ExponentConverter {
    shape: GenericDimension,
}

impl ExponentConverter {
    pub fn new(shape: GenericDimension) -> Self {
        ExponentConverter { shape }
    }

    pub fn shape(&self) -> GenericDimension {
        self.shape
    }
}

impl UnitConverter for ExponentConverter {
    fn name(&self) -> &'static str {
        "exponent"
    }

    fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64> {
        let (from, to) = expect_dimensions(self.name(), from, to)?;
        if !from.is_instance(&self.shape) || !to.is_instance(&self.shape) {
            return Err(UnitError::invalid_conversion(from, to));
        }
        Ok(value * absolute_factor(from.unit, to.unit)?.powf(self.shape.power))
    }
}
