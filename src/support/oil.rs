//! Typed material properties for oil-immersed windings.
//!
//! [`TransformerOil`] and [`InsulationPaper`] expose the constant table of
//! [`constants`] as [`uom`] quantities for the typed models: the coil
//! buoyancy and inlet velocity, and the paper resistance of a disc face.

use std::marker::PhantomData;

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{bluebook::constants, units::ThermalExpansionCoefficient};

/// Mineral transformer oil as characterized in Section 15 of the Bluebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformerOil;

impl TransformerOil {
    /// Density `ρ`.
    #[must_use]
    pub fn density() -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(constants::FLUID_DENSITY_OF_OIL)
    }

    /// Specific heat `c`.
    #[must_use]
    pub fn specific_heat() -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(constants::SPECIFIC_HEAT_OF_OIL)
    }

    /// Volume coefficient of thermal expansion `β`.
    #[must_use]
    pub fn expansion_coefficient() -> ThermalExpansionCoefficient {
        ThermalExpansionCoefficient {
            dimension: PhantomData,
            units: PhantomData,
            value: constants::VOLUME_COEFFICIENT_OF_THERMAL_EXPANSION_OF_OIL,
        }
    }
}

/// Paper insulation wrapped around winding conductors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsulationPaper;

impl InsulationPaper {
    /// Thermal conductivity `k`.
    #[must_use]
    pub fn thermal_conductivity() -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(constants::THERMAL_CONDUCTIVITY_OF_PAPER)
    }
}

/// Standard gravity `g`.
#[must_use]
pub fn gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(constants::ACCELERATION_DUE_TO_GRAVITY)
}
