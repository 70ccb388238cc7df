//! crdlib Convert - Unit converters and the converter registry
//!
//! Converters:
//! - Absolute (Length, Mass, Amount, Time, Pressure, Energy): a factor through the SI pivot
//! - Temperature: affine, through Celsius
//! - Exponent (Area, Volume): the family factor raised to the power
//! - Composite: per-term factors over a product/quotient shape
//!
//! `ConverterRegistry` keys converters by generic descriptor and is immutable
//! once built. `ConversionContext` carries a registry to call sites.

mod alias;
mod context;
mod registry;
mod traits;

pub mod converters;

pub use alias::{verify_alias_mapping, verify_alias_mappings};
pub use context::ConversionContext;
pub use converters::absolute_factor;
pub use registry::{ConverterRegistry, ConverterRegistryBuilder};
pub use traits::{AbsoluteUnitConverter, UnitConverter};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AbsoluteUnitConverter, ConversionContext, ConverterRegistry, UnitConverter,
    };
}
