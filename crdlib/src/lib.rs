//! crdlib - Dimensional analysis and unit conversion
//!
//! Typed physical properties over a closed catalogue of unit families, with
//! unit algebra, a converter registry and base-unit expansion of aliased
//! units (Pa, J).
//!
//! ```
//! use crdlib::prelude::*;
//!
//! let rate = MassRate::new(10.0, divide(MassUnit::KiloGram, TimeUnit::Hour))?;
//! let daily = rate.to_unit(divide(MassUnit::MetricTonne, TimeUnit::Day))?;
//! assert!((daily.value() - 0.24).abs() < 1e-12);
//!
//! let pressure = Pressure::new(15.0, PressureUnit::Bar)?;
//! assert_eq!(pressure.to_base_units()?.value(), 1_500_000.0);
//! # Ok::<(), crdlib::UnitError>(())
//! ```

pub use crd_core::{codes, UnitError, UnitResult};
pub use crd_units as units;
pub use crd_convert as convert;
pub use crd_properties as properties;

pub use crd_convert::{ConversionContext, ConverterRegistry, UnitConverter};
pub use crd_properties::{gas_constant, PhysicalProperty};
pub use crd_units::{
    divide, multiply, power, unit_of, CompositeDimension, Dimension, GenericCompositeDimension,
    GenericDescriptor, GenericDimension, MeasurementUnit, UnitDescriptor, UnitFamily,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crd_core::prelude::*;
    pub use crd_units::prelude::*;
    pub use crd_convert::prelude::*;
    pub use crd_properties::prelude::*;
}
