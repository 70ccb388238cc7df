//! Property kinds
//!
//! A kind binds a property type to one generic descriptor at the type
//! level. Aliased kinds also name the kind their base-unit form belongs to.

use std::fmt;
use crd_units::{GenericDescriptor, GenericDimension, UnitFamily};
use crd_units::UnitFamily as F;

/// How a kind's shape is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyVariant {
    /// One family to the first power
    Plain,
    /// One family to a fixed power
    Exponent,
    /// Product/quotient of families
    Composite,
    /// One aliased family (Pressure, Energy)
    AliasedPlain,
    /// Composite containing an aliased family
    AliasedComposite,
}

impl PropertyVariant {
    pub fn is_aliased(self) -> bool {
        matches!(self, PropertyVariant::AliasedPlain | PropertyVariant::AliasedComposite)
    }

    /// Plain-like variants are expressed in a single dimension
    pub fn is_single_dimension(self) -> bool {
        matches!(
            self,
            PropertyVariant::Plain | PropertyVariant::Exponent | PropertyVariant::AliasedPlain
        )
    }
}

pub trait PropertyKind:
    Copy + Clone + fmt::Debug + PartialEq + Default + Send + Sync + 'static
{
    const NAME: &'static str;
    const VARIANT: PropertyVariant;

    fn shape() -> GenericDescriptor;
}

/// A kind written in an aliased family, with a base-unit counterpart
pub trait AliasedKind: PropertyKind {
    type Base: PropertyKind;
}

macro_rules! property_kind {
    ($(#[$meta:meta])* $name:ident : $variant:ident => $shape:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl PropertyKind for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANT: PropertyVariant = PropertyVariant::$variant;

            fn shape() -> GenericDescriptor {
                $shape.into()
            }
        }
    };
}

fn g(family: UnitFamily) -> GenericDimension {
    GenericDimension::new(family)
}

fn gp(family: UnitFamily, power: f64) -> GenericDimension {
    GenericDimension::with_power(family, power)
}

property_kind!(MassFraction: Plain => F::NonDimensional);
property_kind!(VolumeFraction: Plain => F::NonDimensional);
property_kind!(MolecularFraction: Plain => F::NonDimensional);

property_kind!(Temperature: Plain => F::Temperature);
property_kind!(Length: Plain => F::Length);
property_kind!(Mass: Plain => F::Mass);
property_kind!(Amount: Plain => F::Amount);
property_kind!(Time: Plain => F::Time);

property_kind!(Area: Exponent => gp(F::Length, 2.0));
property_kind!(Volume: Exponent => gp(F::Length, 3.0));

property_kind!(MassRate: Composite => g(F::Mass).divide(F::Time));
property_kind!(MolarRate: Composite => g(F::Amount).divide(F::Time));
property_kind!(VolumetricRate: Composite => gp(F::Length, 3.0).divide(F::Time));
property_kind!(MolarVolume: Composite => gp(F::Length, 3.0).divide(F::Amount));
property_kind!(Density: Composite => g(F::Mass).divide(gp(F::Length, 3.0)));
property_kind!(MolarConcentration: Composite => g(F::Amount).divide(gp(F::Length, 3.0)));
property_kind!(MolarMass: Composite => g(F::Mass).divide(F::Amount));
property_kind!(
    /// Shape of the universal gas constant, kg * m^2 / s^2 / K / mol
    GasConstant: Composite => g(F::Mass)
        .multiply(gp(F::Length, 2.0))
        .divide(gp(F::Time, 2.0))
        .divide(F::Temperature)
        .divide(F::Amount)
);
property_kind!(
    /// Pressure in base units, kg / m / s^2
    BasePressure: Composite => g(F::Mass).divide(F::Length).divide(gp(F::Time, 2.0))
);
property_kind!(
    /// Energy in base units, kg * m^2 / s^2
    BaseEnergy: Composite => g(F::Mass).multiply(gp(F::Length, 2.0)).divide(gp(F::Time, 2.0))
);
property_kind!(
    BaseMolarEnergy: Composite => g(F::Mass)
        .multiply(gp(F::Length, 2.0))
        .divide(gp(F::Time, 2.0))
        .divide(F::Amount)
);

property_kind!(Pressure: AliasedPlain => F::Pressure);
property_kind!(Energy: AliasedPlain => F::Energy);
property_kind!(MolarEnergy: AliasedComposite => g(F::Energy).divide(F::Amount));
property_kind!(MolarHeatCapacity: AliasedComposite => g(F::Energy).divide(F::Temperature).divide(F::Amount));

impl AliasedKind for Pressure {
    type Base = BasePressure;
}

impl AliasedKind for Energy {
    type Base = BaseEnergy;
}

impl AliasedKind for MolarEnergy {
    type Base = BaseMolarEnergy;
}

impl AliasedKind for MolarHeatCapacity {
    type Base = GasConstant;
}
