//! Multiplicative converters, one per absolute family
//!
//! Each family pivots through its SI member. Factors use exact definitions
//! where one exists (inch, foot, pound, thermochemical calorie, IT Btu, psi).

use crd_core::{UnitError, UnitResult};
use crd_units::{
    AmountUnit, EnergyUnit, LengthUnit, MassUnit, MeasurementUnit, NonDimensionalUnit,
    PressureUnit, TimeUnit,
    UnitDescriptor,
};
use crate::traits::{expect_dimensions, AbsoluteUnitConverter, UnitConverter};

macro_rules! absolute_converter {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl UnitConverter for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn convert(&self, value: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> UnitResult<f64> {
                let (from, to) = expect_dimensions($label, from, to)?;
                self.convert_dimension(value, from, to)
            }
        }
    };
}

absolute_converter!(
    /// Fractions and ratios; the only member converts to itself
    NonDimensionalConverter, "non-dimensional"
);
absolute_converter!(LengthConverter, "length");
absolute_converter!(MassConverter, "mass");
absolute_converter!(AmountConverter, "amount");
absolute_converter!(TimeConverter, "time");
absolute_converter!(
    /// Pivots through Pascal, the reference unit of the pressure alias
    PressureConverter, "pressure"
);
absolute_converter!(
    /// Pivots through Joule, the reference unit of the energy alias
    EnergyConverter, "energy"
);

impl AbsoluteUnitConverter for NonDimensionalConverter {
    type Unit = NonDimensionalUnit;

    fn pivot_factor(&self, _unit: NonDimensionalUnit) -> f64 {
        1.0
    }
}

impl AbsoluteUnitConverter for LengthConverter {
    type Unit = LengthUnit;

    fn pivot_factor(&self, unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::MilliMeter => 1e-3,
            LengthUnit::CentiMeter => 1e-2,
            LengthUnit::Meter => 1.0,
            LengthUnit::KiloMeter => 1e3,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }
}

impl AbsoluteUnitConverter for MassConverter {
    type Unit = MassUnit;

    fn pivot_factor(&self, unit: MassUnit) -> f64 {
        match unit {
            MassUnit::MilliGram => 1e-6,
            MassUnit::Gram => 1e-3,
            MassUnit::KiloGram => 1.0,
            MassUnit::MetricTonne => 1e3,
            MassUnit::Pound => 0.45359237,
        }
    }
}

impl AbsoluteUnitConverter for AmountConverter {
    type Unit = AmountUnit;

    fn pivot_factor(&self, unit: AmountUnit) -> f64 {
        match unit {
            AmountUnit::Mol => 1.0,
            AmountUnit::KiloMol => 1e3,
        }
    }
}

impl AbsoluteUnitConverter for TimeConverter {
    type Unit = TimeUnit;

    fn pivot_factor(&self, unit: TimeUnit) -> f64 {
        match unit {
            TimeUnit::MilliSecond => 1e-3,
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86400.0,
        }
    }
}

impl AbsoluteUnitConverter for PressureConverter {
    type Unit = PressureUnit;

    fn pivot_factor(&self, unit: PressureUnit) -> f64 {
        match unit {
            PressureUnit::MilliBar => 100.0,
            PressureUnit::Bar => 1e5,
            PressureUnit::Psi => 6894.757293168,
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1e3,
        }
    }
}

impl AbsoluteUnitConverter for EnergyConverter {
    type Unit = EnergyUnit;

    fn pivot_factor(&self, unit: EnergyUnit) -> f64 {
        match unit {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::KiloJoule => 1e3,
            EnergyUnit::MegaJoule => 1e6,
            EnergyUnit::GigaJoule => 1e9,
            EnergyUnit::Calorie => 4.184,
            EnergyUnit::KiloCalorie => 4184.0,
            EnergyUnit::Btu => 1055.05585262,
        }
    }
}

/// Multiplicative factor between two units of one absolute family.
///
/// Temperature is affine and has no factor; units of different families
/// have none either. Both fail with `InvalidConversion`.
pub fn absolute_factor(from: MeasurementUnit, to: MeasurementUnit) -> UnitResult<f64> {
    use MeasurementUnit as U;
    match (from, to) {
        (U::NonDimensional(a), U::NonDimensional(b)) => Ok(NonDimensionalConverter.factor(a, b)),
        (U::Length(a), U::Length(b)) => Ok(LengthConverter.factor(a, b)),
        (U::Mass(a), U::Mass(b)) => Ok(MassConverter.factor(a, b)),
        (U::Amount(a), U::Amount(b)) => Ok(AmountConverter.factor(a, b)),
        (U::Time(a), U::Time(b)) => Ok(TimeConverter.factor(a, b)),
        (U::Pressure(a), U::Pressure(b)) => Ok(PressureConverter.factor(a, b)),
        (U::Energy(a), U::Energy(b)) => Ok(EnergyConverter.factor(a, b)),
        _ => Err(UnitError::invalid_conversion(from, to)),
    }
}
