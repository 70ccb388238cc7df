//! crdlib Units - Measurement units and dimension algebra
//!
//! Families (each with one SI member):
//! - Temperature (°C, K, °F, °R)
//! - Length (mm, cm, m, km, in, ft)
//! - Mass (mg, g, kg, MT, lb)
//! - Amount (mol, kmol)
//! - Time (ms, s, min, hr, d)
//! - Pressure (mbar, bar, psi, Pa, kPa), aliased to kg / m / s^2
//! - Energy (J, kJ, MJ, GJ, cal, kcal, Btu), aliased to kg * m^2 / s^2
//!
//! `Dimension` and `CompositeDimension` carry concrete units; the
//! `Generic*` mirrors carry families only and key the converter registry.

mod algebra;
mod alias;
mod descriptor;
mod dimension;
mod generic;
mod unit;

pub use alias::{expand_aliases, AliasMapping};
pub use descriptor::{divide, multiply, power, UnitDescriptor};
pub use dimension::{CompositeDimension, Dimension};
pub use generic::{GenericCompositeDimension, GenericDescriptor, GenericDimension};
pub use unit::{
    unit_of, AmountUnit, EnergyUnit, FamilyMember, LengthUnit, MassUnit, MeasurementUnit,
    NonDimensionalUnit, PressureUnit, TemperatureUnit, TimeUnit, UnitFamily,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        divide, multiply, power, unit_of, AmountUnit, CompositeDimension, Dimension, EnergyUnit,
        GenericCompositeDimension, GenericDescriptor, GenericDimension, LengthUnit, MassUnit,
        MeasurementUnit, PressureUnit, TemperatureUnit, TimeUnit, UnitDescriptor, UnitFamily,
    };
}
