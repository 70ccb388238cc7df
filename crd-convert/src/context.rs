//! Conversion Context

use std::sync::Arc;
use tracing::trace;
use crd_core::UnitResult;
use crd_units::UnitDescriptor;
use crate::ConverterRegistry;

/// Carries the converter table to every conversion call site
#[derive(Debug, Clone)]
pub struct ConversionContext {
    pub registry: Arc<ConverterRegistry>,
    pub tracing: bool,
}

impl ConversionContext {
    pub fn new(registry: Arc<ConverterRegistry>) -> Self {
        Self { registry, tracing: false }
    }

    /// Context over the shared standard table
    pub fn standard() -> Self {
        Self::new(ConverterRegistry::standard())
    }

    /// Emit a `trace!` event for every conversion
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64> {
        let result = self.registry.convert(value, from, to)?;
        if self.tracing {
            trace!(%from, %to, value, result, "converted");
        }
        Ok(result)
    }
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self::standard()
    }
}
