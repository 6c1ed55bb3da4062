//! Extensions to [`uom`].
//!
//! The typed layers of this crate ([`crate::support::oil`] and
//! [`crate::models`]) use [`uom`] quantities, while the correlations in
//! [`crate::support::bluebook`] work on plain `f64` values in SI units with
//! temperatures in degrees Celsius.
//!
//! This module fills the gaps between the two:
//!
//! - [`ThermalExpansionCoefficient`]: a quantity with units of 1/K, which
//!   [`uom`] does not provide.
//! - [`TemperatureRise`]: subtracts two absolute temperatures to get a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//!
//! ```
//! use uom::si::{
//!     f64::ThermodynamicTemperature, temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//! use transformer_cooling::support::units::TemperatureRise;
//!
//! let top_oil = ThermodynamicTemperature::new::<degree_celsius>(65.0);
//! let bottom_oil = ThermodynamicTemperature::new::<degree_celsius>(45.0);
//! assert!((top_oil.rise_above(bottom_oil).get::<kelvin>() - 20.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_rise;

pub use quantities::ThermalExpansionCoefficient;
pub use temperature_rise::TemperatureRise;
