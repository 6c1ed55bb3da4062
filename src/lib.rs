//! # Transformer Cooling
//!
//! Oil flow and heat transfer calculations for the thermal design of
//! oil-immersed power transformer windings, following Section 15 of the
//! *Bluebook* (Transformer Engineering, 2nd edition).
//!
//! ## Crate layout
//!
//! - [`support`]: The Bluebook formula library and the utilities models use.
//! - [`models`]: Typed [`twine_core::Model`] implementations for winding discs
//!   and coils.
//!
//! The formula library in [`support::bluebook`] is the stable core: pure
//! `f64` functions with no validation. The typed models add units,
//! construction-time checks and error reporting on top of it.

pub mod models;
pub mod support;
