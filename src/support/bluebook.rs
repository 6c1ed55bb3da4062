//! Closed-form oil flow and heat transfer correlations.
//!
//! This module encodes the equations of Section 15 of the *Bluebook*
//! (Transformer Engineering, 2nd edition) used for the thermal and hydraulic
//! design of oil-immersed power transformer windings.
//!
//! Every function is a pure map from `f64` inputs to a single `f64` output.
//! Inputs are expected in SI units, with temperatures in degrees Celsius.
//!
//! # Numerical behavior
//!
//! No function checks its inputs. Unphysical values (zero perimeters,
//! zero viscosity, a temperature of −50 °C in [`oil_viscosity`], and so on)
//! follow ordinary IEEE-754 arithmetic and produce infinities or `NaN`.
//! Callers that need validation should perform it before calling in, as the
//! typed models in [`crate::models`] do.
//!
//! # Organization
//!
//! - [`constants`]: Named physical constants for oil, paper, and gravity
//! - Duct geometry: [`hydraulic_diameter`], [`hydraulic_diameter_of_rect`]
//! - Dimensionless groups: [`reynolds_number`], [`prandtl_number`]
//! - Laminar friction: [`k`], [`friction_coefficient_circular_duct`],
//!   [`friction_coefficient_rectangular_duct`]
//! - Pressure change: [`pressure_change_rectangular_duct`],
//!   [`pressure_change_using_k_and_d`], [`pressure_change_in_coil`]
//! - Oil behavior: [`oil_viscosity`], [`initial_oil_velocity`]
//! - Heat transfer: [`convection_coefficient`], [`heat_transfer_coefficient`]
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use transformer_cooling::support::bluebook::{
//!     constants::THERMAL_CONDUCTIVITY_OF_PAPER, convection_coefficient,
//!     heat_transfer_coefficient, hydraulic_diameter_of_rect,
//! };
//!
//! // A 6 mm x 50 mm radial duct, 40 mm long, with 60 °C bulk oil and
//! // a disc surface running 10 K hotter.
//! let d = hydraulic_diameter_of_rect(0.006, 0.05);
//! let h_conv = convection_coefficient(d, 0.04, 60.0, 10.0, 0.02);
//! let h = heat_transfer_coefficient(h_conv, 0.0005, THERMAL_CONDUCTIVITY_OF_PAPER);
//!
//! assert!(h < h_conv);
//! assert_relative_eq!(heat_transfer_coefficient(h_conv, 0.0, 0.16), h_conv);
//! ```

pub mod constants;
mod dimensionless;
mod friction;
mod geometry;
mod heat_transfer;
mod oil;
mod pressure;

pub use dimensionless::{prandtl_number, reynolds_number};
pub use friction::{friction_coefficient_circular_duct, friction_coefficient_rectangular_duct, k};
pub use geometry::{hydraulic_diameter, hydraulic_diameter_of_rect};
pub use heat_transfer::{convection_coefficient, heat_transfer_coefficient};
pub use oil::{initial_oil_velocity, oil_viscosity};
pub use pressure::{
    pressure_change_in_coil, pressure_change_rectangular_duct, pressure_change_using_k_and_d,
};
