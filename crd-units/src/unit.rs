//! Measurement units organized by family
//!
//! Each family is a closed enumeration with one canonical SI member.
//! `MeasurementUnit` is the sum of all families; lookup by symbol is a pure
//! function over the enumerations, no global table is involved.

use std::fmt;
use serde::{Serialize, Deserialize};
use crd_core::{UnitError, UnitResult};
use crate::{Dimension, UnitDescriptor};

/// Tag of a primitive measurement-unit family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitFamily {
    NonDimensional,
    Temperature,
    Length,
    Mass,
    Amount,
    Time,
    Pressure,
    Energy,
}

impl UnitFamily {
    pub const ALL: [UnitFamily; 8] = [
        UnitFamily::NonDimensional,
        UnitFamily::Temperature,
        UnitFamily::Length,
        UnitFamily::Mass,
        UnitFamily::Amount,
        UnitFamily::Time,
        UnitFamily::Pressure,
        UnitFamily::Energy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitFamily::NonDimensional => "NonDimensional",
            UnitFamily::Temperature => "Temperature",
            UnitFamily::Length => "Length",
            UnitFamily::Mass => "Mass",
            UnitFamily::Amount => "Amount",
            UnitFamily::Time => "Time",
            UnitFamily::Pressure => "Pressure",
            UnitFamily::Energy => "Energy",
        }
    }

    /// All members of this family
    pub fn members(self) -> &'static [MeasurementUnit] {
        match self {
            UnitFamily::NonDimensional => NonDimensionalUnit::UNITS,
            UnitFamily::Temperature => TemperatureUnit::UNITS,
            UnitFamily::Length => LengthUnit::UNITS,
            UnitFamily::Mass => MassUnit::UNITS,
            UnitFamily::Amount => AmountUnit::UNITS,
            UnitFamily::Time => TimeUnit::UNITS,
            UnitFamily::Pressure => PressureUnit::UNITS,
            UnitFamily::Energy => EnergyUnit::UNITS,
        }
    }

    /// Canonical SI member of this family
    pub fn si(self) -> MeasurementUnit {
        match self {
            UnitFamily::NonDimensional => NonDimensionalUnit::SI.into(),
            UnitFamily::Temperature => TemperatureUnit::SI.into(),
            UnitFamily::Length => LengthUnit::SI.into(),
            UnitFamily::Mass => MassUnit::SI.into(),
            UnitFamily::Amount => AmountUnit::SI.into(),
            UnitFamily::Time => TimeUnit::SI.into(),
            UnitFamily::Pressure => PressureUnit::SI.into(),
            UnitFamily::Energy => EnergyUnit::SI.into(),
        }
    }

    /// Families conventionally written as one symbol that decompose into base SI families
    pub fn is_aliased(self) -> bool {
        matches!(self, UnitFamily::Pressure | UnitFamily::Energy)
    }

    /// Families whose conversions are purely multiplicative
    pub fn is_absolute(self) -> bool {
        self != UnitFamily::Temperature
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Behaviour shared by every family enumeration
pub trait FamilyMember:
    Copy + Eq + fmt::Debug + Into<MeasurementUnit> + TryFrom<MeasurementUnit, Error = UnitError> + 'static
{
    const FAMILY: UnitFamily;
    const SI: Self;

    fn members() -> &'static [Self];
    fn symbol(self) -> &'static str;
}

macro_rules! unit_family {
    (
        $(#[$meta:meta])*
        $name:ident in $family:ident, si = $si:ident {
            $($variant:ident => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub(crate) const UNITS: &'static [MeasurementUnit] = &[$(MeasurementUnit::$family($name::$variant)),+];

            pub fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }

            /// Raise this unit to a power
            pub fn pow(self, power: f64) -> Dimension {
                Dimension::with_power(self, power)
            }
        }

        impl FamilyMember for $name {
            const FAMILY: UnitFamily = UnitFamily::$family;
            const SI: Self = $name::$si;

            fn members() -> &'static [Self] {
                Self::ALL
            }

            fn symbol(self) -> &'static str {
                $name::symbol(self)
            }
        }

        impl From<$name> for MeasurementUnit {
            fn from(unit: $name) -> Self {
                MeasurementUnit::$family(unit)
            }
        }

        impl From<$name> for Dimension {
            fn from(unit: $name) -> Self {
                Dimension::new(unit)
            }
        }

        impl From<$name> for UnitDescriptor {
            fn from(unit: $name) -> Self {
                UnitDescriptor::Dimension(Dimension::new(unit))
            }
        }

        impl TryFrom<MeasurementUnit> for $name {
            type Error = UnitError;

            fn try_from(unit: MeasurementUnit) -> UnitResult<Self> {
                match unit {
                    MeasurementUnit::$family(u) => Ok(u),
                    other => Err(UnitError::wrong_descriptor(format!(
                        "{} is a {} unit, expected a {} unit",
                        other, other.family(), UnitFamily::$family
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

unit_family! {
    /// Unit of quantities that have no unit of measurement
    NonDimensionalUnit in NonDimensional, si = NonDimensional {
        NonDimensional => "",
    }
}

unit_family! {
    TemperatureUnit in Temperature, si = Kelvin {
        Celsius => "°C",
        Kelvin => "K",
        Fahrenheit => "°F",
        Rankine => "°R",
    }
}

unit_family! {
    LengthUnit in Length, si = Meter {
        MilliMeter => "mm",
        CentiMeter => "cm",
        Meter => "m",
        KiloMeter => "km",
        Inch => "in",
        Foot => "ft",
    }
}

unit_family! {
    MassUnit in Mass, si = KiloGram {
        MilliGram => "mg",
        Gram => "g",
        KiloGram => "kg",
        MetricTonne => "MT",
        Pound => "lb",
    }
}

unit_family! {
    AmountUnit in Amount, si = Mol {
        Mol => "mol",
        KiloMol => "kmol",
    }
}

unit_family! {
    TimeUnit in Time, si = Second {
        MilliSecond => "ms",
        Second => "s",
        Minute => "min",
        Hour => "hr",
        Day => "d",
    }
}

unit_family! {
    /// Pressure units; Pascal is equivalent to kg / m / s^2
    PressureUnit in Pressure, si = Pascal {
        MilliBar => "mbar",
        Bar => "bar",
        Psi => "psi",
        Pascal => "Pa",
        KiloPascal => "kPa",
    }
}

unit_family! {
    /// Energy units; Joule is equivalent to kg * m^2 / s^2
    EnergyUnit in Energy, si = Joule {
        Joule => "J",
        KiloJoule => "kJ",
        MegaJoule => "MJ",
        GigaJoule => "GJ",
        Calorie => "cal",
        KiloCalorie => "kcal",
        Btu => "Btu",
    }
}

/// A member of exactly one unit family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeasurementUnit {
    NonDimensional(NonDimensionalUnit),
    Temperature(TemperatureUnit),
    Length(LengthUnit),
    Mass(MassUnit),
    Amount(AmountUnit),
    Time(TimeUnit),
    Pressure(PressureUnit),
    Energy(EnergyUnit),
}

impl MeasurementUnit {
    pub fn family(self) -> UnitFamily {
        match self {
            MeasurementUnit::NonDimensional(_) => UnitFamily::NonDimensional,
            MeasurementUnit::Temperature(_) => UnitFamily::Temperature,
            MeasurementUnit::Length(_) => UnitFamily::Length,
            MeasurementUnit::Mass(_) => UnitFamily::Mass,
            MeasurementUnit::Amount(_) => UnitFamily::Amount,
            MeasurementUnit::Time(_) => UnitFamily::Time,
            MeasurementUnit::Pressure(_) => UnitFamily::Pressure,
            MeasurementUnit::Energy(_) => UnitFamily::Energy,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MeasurementUnit::NonDimensional(u) => u.symbol(),
            MeasurementUnit::Temperature(u) => u.symbol(),
            MeasurementUnit::Length(u) => u.symbol(),
            MeasurementUnit::Mass(u) => u.symbol(),
            MeasurementUnit::Amount(u) => u.symbol(),
            MeasurementUnit::Time(u) => u.symbol(),
            MeasurementUnit::Pressure(u) => u.symbol(),
            MeasurementUnit::Energy(u) => u.symbol(),
        }
    }

    /// The SI member of this unit's family
    pub fn si(self) -> MeasurementUnit {
        self.family().si()
    }

    pub fn is_si(self) -> bool {
        self == self.si()
    }

    /// Raise this unit to a power
    pub fn pow(self, power: f64) -> Dimension {
        Dimension::with_power(self, power)
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Look up a unit of `family` by its display symbol
pub fn unit_of(family: UnitFamily, symbol: &str) -> Option<MeasurementUnit> {
    family.members().iter().copied().find(|unit| unit.symbol() == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_of() {
        assert_eq!(unit_of(UnitFamily::Length, "ft"), Some(LengthUnit::Foot.into()));
        assert_eq!(unit_of(UnitFamily::Temperature, "°R"), Some(TemperatureUnit::Rankine.into()));
        assert_eq!(unit_of(UnitFamily::Mass, "MT"), Some(MassUnit::MetricTonne.into()));
        assert_eq!(unit_of(UnitFamily::Mass, "ft"), None);
        assert_eq!(unit_of(UnitFamily::Energy, "btu"), None);
    }

    #[test]
    fn test_families_are_disjoint() {
        for family in UnitFamily::ALL {
            for unit in family.members() {
                assert_eq!(unit.family(), family, "{} listed under {}", unit, family);
            }
        }
    }

    #[test]
    fn test_si_members() {
        assert_eq!(UnitFamily::Temperature.si(), TemperatureUnit::Kelvin.into());
        assert_eq!(UnitFamily::Pressure.si(), PressureUnit::Pascal.into());
        assert_eq!(UnitFamily::Energy.si(), EnergyUnit::Joule.into());
        assert!(MeasurementUnit::from(MassUnit::KiloGram).is_si());
        assert!(!MeasurementUnit::from(MassUnit::Gram).is_si());
        for family in UnitFamily::ALL {
            assert!(family.members().contains(&family.si()));
        }
    }

    #[test]
    fn test_try_from_wrong_family() {
        let unit: MeasurementUnit = PressureUnit::Bar.into();
        assert!(LengthUnit::try_from(unit).is_err());
        assert_eq!(PressureUnit::try_from(unit), Ok(PressureUnit::Bar));
    }

    #[test]
    fn test_aliased_families() {
        assert!(UnitFamily::Pressure.is_aliased());
        assert!(UnitFamily::Energy.is_aliased());
        assert!(!UnitFamily::Length.is_aliased());
        assert!(!UnitFamily::Temperature.is_absolute());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MeasurementUnit::from(TemperatureUnit::Celsius)), "°C");
        assert_eq!(format!("{}", TimeUnit::Hour), "hr");
        assert_eq!(format!("{}", UnitFamily::Amount), "Amount");
    }
}
