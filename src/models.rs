//! Typed models built on the Bluebook correlations.
//!
//! # Organization
//!
//! Models are grouped by domain. Each model keeps its computation in plain
//! functions over validated inputs and exposes a thin [`twine_core::Model`]
//! adapter so it can be composed with other Twine models and solvers.
//!
//! Unlike [`crate::support::bluebook`], models check their inputs when they
//! are constructed and report problems as errors.

pub mod thermal;
