//! Natural circulation driving conditions for a coil.
//!
//! Oil heated in a coil rises, and the column of warmer oil produces a
//! buoyancy pressure at the coil bottom that drives circulation. Before any
//! flow network is solved, the Bluebook estimates this pressure and the inlet
//! velocity that would carry the coil loss away at the assumed oil
//! temperature rise.
//!
//! In a directed-flow coil the oil enters the bottom section through either
//! its inner or its outer axial duct, and washers switch the side from one
//! section to the next. [`InletLocation`] records the side, and
//! [`CoilConditions::fed_through`] takes the inlet area from the bottom disc.

use thiserror::Error;
use tracing::warn;
use twine_core::Model;
use uom::ConstZero;
use uom::si::{
    f64::{Area, Length, Power, Pressure, TemperatureInterval, ThermodynamicTemperature, Velocity},
    temperature_interval::kelvin,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    oil::{TransformerOil, gravity},
    units::TemperatureRise,
};

use super::disc::Disc;

/// Errors raised by [`driving_conditions`] and [`CoilConditions::fed_through`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoilError {
    /// A coil quantity violates its physical bound.
    #[error("invalid {field}: {source}")]
    Invalid {
        field: &'static str,
        source: ConstraintError,
    },

    /// The inlet is on both sides, so the flow is not directed.
    #[error("non-directed flow has no single inlet duct")]
    NonDirectedFlow,
}

/// Side of a section through which oil enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InletLocation {
    /// Both axial ducts, non-directed flow.
    Both,
    /// The inner axial duct.
    #[default]
    Inner,
    /// The outer axial duct.
    Outer,
}

impl InletLocation {
    /// Inlet of section `index` in a stack whose bottom section, index 0,
    /// has this inlet and whose inlets alternate from section to section.
    ///
    /// Non-directed sections stay non-directed.
    #[must_use]
    pub fn alternated(self, index: usize) -> Self {
        match self {
            Self::Inner if index % 2 == 1 => Self::Outer,
            Self::Outer if index % 2 == 1 => Self::Inner,
            other => other,
        }
    }

    /// Wetted area of the face of `disc` along this inlet duct.
    ///
    /// # Errors
    ///
    /// Returns [`CoilError::NonDirectedFlow`] for [`InletLocation::Both`].
    pub fn inlet_area(self, disc: &Disc) -> Result<Area, CoilError> {
        match self {
            Self::Inner => Ok(disc.inner().area),
            Self::Outer => Ok(disc.outer().area),
            Self::Both => Err(CoilError::NonDirectedFlow),
        }
    }
}

/// Coil-level quantities known before the flow is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilConditions {
    /// Overall height of the coil.
    pub height: Length,
    /// Total loss of the coil.
    pub loss: Power,
    /// Flow area of the duct feeding the bottom disc.
    pub inlet_area: Area,
    /// Oil temperature entering the bottom of the coil.
    pub bottom_oil: ThermodynamicTemperature,
    /// Oil temperature leaving the top of the coil.
    pub top_oil: ThermodynamicTemperature,
}

impl CoilConditions {
    /// Conditions for a coil fed through the `inlet` duct of `bottom_disc`.
    ///
    /// # Errors
    ///
    /// Returns [`CoilError::NonDirectedFlow`] if `inlet` is
    /// [`InletLocation::Both`].
    pub fn fed_through(
        bottom_disc: &Disc,
        inlet: InletLocation,
        height: Length,
        loss: Power,
        bottom_oil: ThermodynamicTemperature,
        top_oil: ThermodynamicTemperature,
    ) -> Result<Self, CoilError> {
        Ok(Self {
            height,
            loss,
            inlet_area: inlet.inlet_area(bottom_disc)?,
            bottom_oil,
            top_oil,
        })
    }
}

/// Initial estimates that seed a coil flow calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivingConditions {
    /// Buoyancy pressure at the bottom of the coil, `p₀ = β·ρ·g·H·ΔT`.
    pub pressure: Pressure,
    /// Oil velocity at the coil inlet, `v₀ = loss / (ρ·c·A·ΔT)`.
    pub velocity: Velocity,
    /// Top-to-bottom oil temperature rise the estimates were made with.
    pub temperature_rise: TemperatureInterval,
}

/// Estimates the buoyancy pressure and inlet velocity of a coil.
///
/// A coil whose top and bottom oil are at the same temperature has neither,
/// and the inlet velocity is undefined. In that case a rise of 1 K is
/// assumed so the estimates stay usable as a starting point, and a warning
/// is logged.
///
/// # Errors
///
/// Returns [`CoilError::Invalid`] if the height or inlet area is not
/// strictly positive, or if the loss is negative.
pub fn driving_conditions(conditions: &CoilConditions) -> Result<DrivingConditions, CoilError> {
    let height = StrictlyPositive::new(conditions.height)
        .map_err(invalid("height"))?
        .get();
    let inlet_area = StrictlyPositive::new(conditions.inlet_area)
        .map_err(invalid("inlet_area"))?
        .get();
    let loss = NonNegative::new(conditions.loss)
        .map_err(invalid("loss"))?
        .get();

    let mut rise = conditions.top_oil.rise_above(conditions.bottom_oil);
    if rise == TemperatureInterval::ZERO {
        warn!("top and bottom oil temperatures are equal, assuming a rise of 1 K");
        rise = fallback_rise();
    }

    let density = TransformerOil::density();
    let expansion = TransformerOil::expansion_coefficient() * rise;
    let heat_capacity_flux = density * TransformerOil::specific_heat() * inlet_area * rise;

    Ok(DrivingConditions {
        pressure: density * gravity() * height * expansion,
        velocity: loss / heat_capacity_flux,
        temperature_rise: rise,
    })
}

fn fallback_rise() -> TemperatureInterval {
    TemperatureInterval::new::<kelvin>(1.0)
}

fn invalid(field: &'static str) -> impl Fn(ConstraintError) -> CoilError {
    move |source| CoilError::Invalid { field, source }
}

/// [`Model`] adapter for [`driving_conditions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoilDriving;

impl Model for CoilDriving {
    type Input = CoilConditions;
    type Output = DrivingConditions;
    type Error = CoilError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        driving_conditions(input)
    }
}
