//! Numeric invariants checked once, at construction.
//!
//! The correlations in [`crate::support::bluebook`] accept any `f64` and let
//! unphysical inputs turn into infinities or `NaN`. The typed models in
//! [`crate::models`] instead check their geometry when they are built, using
//! the wrapper and markers defined here:
//!
//! - [`StrictlyPositive`]: greater than zero (lengths, areas, resistances)
//! - [`NonNegative`]: zero or greater (insulation thickness, eddy loss)
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1` (space factors)
//!
//! A value that passed its check is carried as a [`Constrained<T, C>`].
//!
//! ```
//! use transformer_cooling::support::constraint::{ConstraintError, StrictlyPositive};
//!
//! let radial_build = StrictlyPositive::new(0.0476).unwrap();
//! assert_eq!(radial_build.get(), 0.0476);
//!
//! assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
//! ```

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{One, Zero};
use thiserror::Error;

/// A bound on a value, checked by a zero-sized marker type.
pub trait Constraint<T> {
    /// Checks `value` against the bound.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] naming how the bound is missed.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value misses its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("must not be negative")]
    Negative,
    #[error("must be greater than zero")]
    Zero,
    #[error("is not a number")]
    NotANumber,
    #[error("must not exceed one")]
    AboveMaximum,
}

/// A value that passed the check of `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C`.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// The checked value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

/// Where `value` lies relative to zero, failing on `NaN`.
fn sign<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}

/// Greater than zero: lengths, areas and resistances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Checks that `value` is greater than zero.
    ///
    /// # Errors
    ///
    /// Fails on zero, negative values and `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}

/// Zero or greater: insulation thickness, eddy loss, coil loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// Checks that `value` is not below zero.
    ///
    /// # Errors
    ///
    /// Fails on negative values and `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal | Ordering::Greater => Ok(()),
        }
    }
}

/// A fraction in `(0, 1]`: space factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Checks that `value` lies in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Fails on values at or below zero, above one, and `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        if *value > T::one() {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    }
}
