//! Physical constants

use crd_units::{CompositeDimension, Dimension, AmountUnit, LengthUnit, MassUnit, TemperatureUnit, TimeUnit};
use crate::GasConstant;

/// Universal gas constant (CODATA 2018, exact)
pub const GAS_CONSTANT_VALUE: f64 = 8.31446261815324;

/// R = 8.31446261815324 kg * m^2 / s^2 / K / mol
pub fn gas_constant() -> GasConstant {
    let unit = CompositeDimension::new(
        [Dimension::new(MassUnit::KiloGram), LengthUnit::Meter.pow(2.0)],
        [
            TimeUnit::Second.pow(2.0),
            Dimension::new(TemperatureUnit::Kelvin),
            Dimension::new(AmountUnit::Mol),
        ],
    );
    GasConstant::from_parts(GAS_CONSTANT_VALUE, unit.into())
}
