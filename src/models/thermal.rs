//! Thermal models of oil-immersed transformer windings.

pub mod coil;
pub mod disc;
