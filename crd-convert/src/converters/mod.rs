//! Converter implementations

mod absolute;
mod composite;
mod exponent;
mod temperature;

pub use absolute::{
    absolute_factor, AmountConverter, EnergyConverter, LengthConverter, MassConverter,
    NonDimensionalConverter, PressureConverter, TimeConverter,
};
pub use composite::CompositeConverter;
pub use exponent::ExponentConverter;
pub use temperature::TemperatureConverter;
