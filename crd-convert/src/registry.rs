//! Converter Registry
//!
//! Maps a generic descriptor to the converter for that shape. The table is
//! assembled with a builder and immutable once built, so it can be shared
//! across threads behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info, warn};
use crd_core::{UnitError, UnitResult};
use crd_units::{
    GenericCompositeDimension, GenericDescriptor, GenericDimension, UnitDescriptor, UnitFamily,
};
use crate::alias::verify_alias_mappings;
use crate::converters::{
    AmountConverter, CompositeConverter, EnergyConverter, ExponentConverter, LengthConverter,
    MassConverter, NonDimensionalConverter, PressureConverter, TemperatureConverter, TimeConverter,
};
use crate::UnitConverter;

static STANDARD: LazyLock<Arc<ConverterRegistry>> = LazyLock::new(|| {
    Arc::new(
        ConverterRegistry::try_standard()
            .expect("standard converter table has unique shapes and valid alias mappings"),
    )
});

/// Immutable shape-to-converter table
#[derive(Debug)]
pub struct ConverterRegistry {
    converters: HashMap<GenericDescriptor, Arc<dyn UnitConverter>>,
}

/// Collects registrations; duplicates are reported by `build`
#[derive(Debug, Default)]
pub struct ConverterRegistryBuilder {
    entries: Vec<(GenericDescriptor, Arc<dyn UnitConverter>)>,
}

impl ConverterRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_converter<C: UnitConverter + 'static>(
        mut self,
        shape: impl Into<GenericDescriptor>,
        converter: C,
    ) -> Self {
        self.entries.push((shape.into(), Arc::new(converter)));
        self
    }

    /// Register `CompositeConverter` for `shape`
    pub fn with_composite(self, shape: GenericCompositeDimension) -> Self {
        self.with_converter(shape.clone(), CompositeConverter::new(shape))
    }

    /// Register `ExponentConverter` for `family^power`
    pub fn with_exponent(self, family: UnitFamily, power: f64) -> Self {
        let shape = GenericDimension::with_power(family, power);
        self.with_converter(shape, ExponentConverter::new(shape))
    }

    pub fn build(self) -> UnitResult<ConverterRegistry> {
        let mut converters: HashMap<GenericDescriptor, Arc<dyn UnitConverter>> =
            HashMap::with_capacity(self.entries.len());

        for (shape, converter) in self.entries {
            if converters.contains_key(&shape) {
                warn!(shape = %shape, "duplicate converter registration");
                return Err(UnitError::duplicate_converter(shape));
            }
            debug!(shape = %shape, converter = converter.name(), "registered converter");
            converters.insert(shape, converter);
        }

        info!(converters = converters.len(), "built converter registry");
        Ok(ConverterRegistry { converters })
    }
}

impl ConverterRegistry {
    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder::new()
    }

    /// Builder pre-loaded with every standard converter
    pub fn standard_builder() -> ConverterRegistryBuilder {
        use UnitFamily::*;

        let g = GenericDimension::new;
        let gp = GenericDimension::with_power;

        Self::builder()
            // Fractions and cancelled ratios
            .with_converter(NonDimensional, NonDimensionalConverter)
            .with_composite(GenericCompositeDimension::default())

            // Plain families
            .with_converter(Temperature, TemperatureConverter)
            .with_converter(Length, LengthConverter)
            .with_converter(Mass, MassConverter)
            .with_converter(Amount, AmountConverter)
            .with_converter(Time, TimeConverter)
            .with_converter(Pressure, PressureConverter)
            .with_converter(Energy, EnergyConverter)

            // Area, volume
            .with_exponent(Length, 2.0)
            .with_exponent(Length, 3.0)

            // Rates
            .with_composite(g(Mass).divide(Time))
            .with_composite(g(Amount).divide(Time))
            .with_composite(gp(Length, 3.0).divide(Time))

            // Volumetric and molar
            .with_composite(gp(Length, 3.0).divide(Amount))
            .with_composite(g(Mass).divide(gp(Length, 3.0)))
            .with_composite(g(Amount).divide(gp(Length, 3.0)))
            .with_composite(g(Mass).divide(Amount))
            .with_composite(g(Energy).divide(Amount))
            .with_composite(g(Energy).divide(Temperature).divide(Amount))

            // Aliases written in base units
            .with_composite(g(Mass).divide(Length).divide(gp(Time, 2.0)))
            .with_composite(g(Mass).multiply(gp(Length, 2.0)).divide(gp(Time, 2.0)))
            .with_composite(g(Mass).multiply(gp(Length, 2.0)).divide(gp(Time, 2.0)).divide(Amount))
            .with_composite(
                g(Mass)
                    .multiply(gp(Length, 2.0))
                    .divide(gp(Time, 2.0))
                    .divide(Temperature)
                    .divide(Amount),
            )
    }

    /// The standard table, after checking the alias mappings
    pub fn try_standard() -> UnitResult<ConverterRegistry> {
        verify_alias_mappings()?;
        Self::standard_builder().build()
    }

    /// Shared process-wide standard table, built on first use
    pub fn standard() -> Arc<ConverterRegistry> {
        Arc::clone(&STANDARD)
    }

    pub fn lookup(&self, shape: &GenericDescriptor) -> UnitResult<&dyn UnitConverter> {
        self.converters
            .get(shape)
            .map(|c| c.as_ref())
            .ok_or_else(|| UnitError::undefined_converter(shape))
    }

    pub fn contains(&self, shape: &GenericDescriptor) -> bool {
        self.converters.contains_key(shape)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &GenericDescriptor> {
        self.converters.keys()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Convert `value` from `from` to `to`.
    ///
    /// Both descriptors must have the same generic shape; the converter is
    /// looked up by that shape.
    pub fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64> {
        let shape = from.to_generic();
        if to.to_generic() != shape {
            return Err(UnitError::invalid_conversion(from, to));
        }
        self.lookup(&shape)?.convert(value, from, to)
    }
}
