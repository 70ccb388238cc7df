//! crdlib Properties - Typed physical properties
//!
//! `PhysicalProperty<K>` pairs a value with a unit descriptor whose shape is
//! fixed by the kind `K`. The aliases below name every supported kind:
//!
//! - Plain: Temperature, Length, Mass, Amount, Time, MassFraction,
//!   VolumeFraction, MolecularFraction
//! - Exponent: Area, Volume
//! - Composite: MassRate, MolarRate, VolumetricRate, MolarVolume, Density,
//!   MolarConcentration, MolarMass, GasConstant, BasePressure, BaseEnergy,
//!   BaseMolarEnergy
//! - Aliased: Pressure, Energy, MolarEnergy, MolarHeatCapacity

mod constants;
mod property;

pub mod kind;

pub use constants::{gas_constant, GAS_CONSTANT_VALUE};
pub use kind::{AliasedKind, PropertyKind, PropertyVariant};
pub use property::PhysicalProperty;

pub type Temperature = PhysicalProperty<kind::Temperature>;
pub type Length = PhysicalProperty<kind::Length>;
pub type Mass = PhysicalProperty<kind::Mass>;
pub type Amount = PhysicalProperty<kind::Amount>;
pub type Time = PhysicalProperty<kind::Time>;
pub type MassFraction = PhysicalProperty<kind::MassFraction>;
pub type VolumeFraction = PhysicalProperty<kind::VolumeFraction>;
pub type MolecularFraction = PhysicalProperty<kind::MolecularFraction>;

pub type Area = PhysicalProperty<kind::Area>;
pub type Volume = PhysicalProperty<kind::Volume>;

pub type MassRate = PhysicalProperty<kind::MassRate>;
pub type MolarRate = PhysicalProperty<kind::MolarRate>;
pub type VolumetricRate = PhysicalProperty<kind::VolumetricRate>;
pub type MolarVolume = PhysicalProperty<kind::MolarVolume>;
pub type Density = PhysicalProperty<kind::Density>;
pub type MolarConcentration = PhysicalProperty<kind::MolarConcentration>;
pub type MolarMass = PhysicalProperty<kind::MolarMass>;
pub type GasConstant = PhysicalProperty<kind::GasConstant>;
pub type BasePressure = PhysicalProperty<kind::BasePressure>;
pub type BaseEnergy = PhysicalProperty<kind::BaseEnergy>;
pub type BaseMolarEnergy = PhysicalProperty<kind::BaseMolarEnergy>;

pub type Pressure = PhysicalProperty<kind::Pressure>;
pub type Energy = PhysicalProperty<kind::Energy>;
pub type MolarEnergy = PhysicalProperty<kind::MolarEnergy>;
pub type MolarHeatCapacity = PhysicalProperty<kind::MolarHeatCapacity>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        gas_constant, Amount, Area, Density, Energy, Length, Mass, MassFraction, MassRate,
        MolarConcentration, MolarEnergy, MolarHeatCapacity, MolarMass, MolarRate, MolarVolume,
        MolecularFraction, PhysicalProperty, Pressure, Temperature, Time, Volume, VolumeFraction,
        VolumetricRate,
    };
}
