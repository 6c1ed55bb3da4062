//! Supporting utilities used by models.
//!
//! [`bluebook`] is the formula library at the heart of this crate. The other
//! modules supply what the typed models need on top of it.

pub mod bluebook;
pub mod constraint;
pub mod oil;
pub mod units;
