//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::Serialize;

/// An item weight (strictly positive, finite).
///
/// Serializes as its raw value; there is no `Deserialize` impl, so every
/// `Weight` in the program went through [`Weight::new`] validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    /// Create a new weight, validating it's positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidWeight`] if the weight is zero,
    /// negative, or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxpack::Weight;
    ///
    /// let w = Weight::new(2.5)?;
    /// assert_eq!(w.value(), 2.5);
    /// assert!(Weight::new(0.0).is_err());
    /// assert!(Weight::new(-3.0).is_err());
    /// assert!(Weight::new(f64::NAN).is_err());
    /// # Ok::<(), boxpack::Error>(())
    /// ```
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if value > 0.0 && value.is_finite() {
            Ok(Weight(value))
        } else {
            Err(crate::Error::InvalidWeight { value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A box capacity (strictly positive, finite), immutable once a box is created.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Capacity(f64);

impl Capacity {
    /// Create a new capacity, validating it's positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCapacity`] if the capacity is zero,
    /// negative, or not finite.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if value > 0.0 && value.is_finite() {
            Ok(Capacity(value))
        } else {
            Err(crate::Error::InvalidCapacity { value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Capacity> for f64 {
    fn from(capacity: Capacity) -> Self {
        capacity.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
