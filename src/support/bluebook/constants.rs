//! Physical constants used by the Bluebook correlations.
//!
//! Values are in SI units. The symbol each constant carries in Section 15 of
//! the Bluebook is noted alongside it.

/// Specific heat of transformer oil, J/(kg·K) (`c`).
pub const SPECIFIC_HEAT_OF_OIL: f64 = 1880.0;

/// Density of transformer oil, kg/m³ (`ρ`).
pub const FLUID_DENSITY_OF_OIL: f64 = 867.0;

/// Thermal conductivity of transformer oil, W/(m·K) (`k`).
pub const THERMAL_CONDUCTIVITY_OF_OIL: f64 = 0.11;

/// Thermal conductivity of paper insulation, W/(m·K) (`k`).
pub const THERMAL_CONDUCTIVITY_OF_PAPER: f64 = 0.16;

/// Volume coefficient of thermal expansion of transformer oil, 1/K (`β`).
pub const VOLUME_COEFFICIENT_OF_THERMAL_EXPANSION_OF_OIL: f64 = 6.8e-4;

/// Standard acceleration due to gravity, m/s² (`g`).
pub const ACCELERATION_DUE_TO_GRAVITY: f64 = 9.80665;
