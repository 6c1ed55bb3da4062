//! Cooling of a single winding disc.
//!
//! A disc is one layer of a disc-type winding. Oil flows past it through a
//! radial duct above and below and through axial ducts along its inner and
//! outer edges. This module derives the duct geometry of a [`Disc`],
//! evaluates its surface heat transfer coefficients with the Bluebook
//! correlations, and computes the disc temperature that balances its loss.
//!
//! [`DiscCooling`] is the [`twine_core::Model`] adapter. It evaluates one
//! heat balance per call; converging on a steady disc temperature is left
//! to the caller.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use uom::si::{
//!     electric_current::ampere,
//!     electrical_resistance::ohm,
//!     f64::{ElectricCurrent, ElectricalResistance, Length, ThermodynamicTemperature, Velocity},
//!     length::millimeter,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//! use transformer_cooling::models::thermal::disc::{
//!     Disc, DiscConditions, DiscCooling, DiscDimensions, DuctGaps, NodeTemperatures,
//!     PathVelocities, SpaceFactors,
//! };
//!
//! let mm = Length::new::<millimeter>;
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//! let speed = Velocity::new::<meter_per_second>;
//!
//! let disc = Disc::new(DiscDimensions {
//!     inner_diameter: mm(576.0),
//!     radial_build: mm(47.6),
//!     height: mm(9.5),
//!     paper_cover: mm(0.46),
//!     gaps: DuctGaps { above: mm(3.8), below: mm(3.8), inner: mm(6.35), outer: mm(6.35) },
//!     space_factors: SpaceFactors { above: 0.57, below: 0.57, inner: 0.54, outer: 0.6 },
//!     resistance_at_20c: ElectricalResistance::new::<ohm>(0.0043),
//!     eddy_pu: 0.02,
//! })?;
//!
//! let balance = DiscCooling::new(disc).call(&DiscConditions {
//!     current: ElectricCurrent::new::<ampere>(113.6),
//!     disc_temperature: celsius(50.0),
//!     oil: NodeTemperatures {
//!         bottom_inner: celsius(40.0),
//!         bottom_outer: celsius(40.5),
//!         top_inner: celsius(41.0),
//!         top_outer: celsius(41.5),
//!     },
//!     velocities: PathVelocities {
//!         below: speed(0.01),
//!         above: speed(0.01),
//!         inner: speed(0.03),
//!         outer: speed(0.03),
//!     },
//! })?;
//!
//! assert!(balance.temperature > celsius(41.5));
//! # Ok::<(), transformer_cooling::models::thermal::disc::DiscError>(())
//! ```

mod balance;
mod geometry;

#[cfg(test)]
pub(crate) mod test_support;

pub use balance::{
    DiscConditions, HeatBalance, NodeTemperatures, PathVelocities, SurfaceCoefficients,
    heat_balance, surface_coefficients,
};
pub use geometry::{Disc, DiscDimensions, DuctGaps, Face, SpaceFactors};

use thiserror::Error;
use tracing::debug;
use twine_core::Model;
use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin, thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::ConstraintError;

/// Errors raised while building or evaluating a [`Disc`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscError {
    /// A construction parameter violates its physical bound.
    #[error("invalid {field}: {source}")]
    Invalid {
        field: &'static str,
        source: ConstraintError,
    },

    /// The heat balance did not produce a finite disc temperature.
    #[error("non-finite heat balance: {context}")]
    NonFinite { context: String },
}

/// [`Model`] adapter evaluating one [`heat_balance`] of a disc per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscCooling {
    disc: Disc,
}

impl DiscCooling {
    /// Creates a model evaluating `disc`.
    #[must_use]
    pub fn new(disc: Disc) -> Self {
        Self { disc }
    }

    /// The disc this model evaluates.
    #[must_use]
    pub fn disc(&self) -> &Disc {
        &self.disc
    }
}

impl Model for DiscCooling {
    type Input = DiscConditions;
    type Output = HeatBalance;
    type Error = DiscError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let balance = heat_balance(&self.disc, input)?;

        debug!(
            h_below = balance.surface.below.get::<watt_per_square_meter_kelvin>(),
            h_above = balance.surface.above.get::<watt_per_square_meter_kelvin>(),
            h_inner = balance.surface.inner.get::<watt_per_square_meter_kelvin>(),
            h_outer = balance.surface.outer.get::<watt_per_square_meter_kelvin>(),
            temperature = balance.temperature.get::<degree_celsius>(),
            "evaluated disc heat balance"
        );

        Ok(balance)
    }
}
