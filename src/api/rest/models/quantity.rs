use std::{convert::TryFrom, fmt};

use serde::Serialize;

use super::error::QuantityValidationError;

/// A validated order quantity, denominated in base-asset units.
///
/// Quantity values must be:
/// + Strictly positive
/// + Finite
///
/// Per-pair minimum trade sizes are part of the exchange's symbol metadata
/// rather than a static bound, and are enforced at order-placement time.
///
/// # Examples
///
/// ```
/// use ataix_sdk::models::Quantity;
///
/// // Create a quantity value
/// let quantity = Quantity::try_from(0.01).unwrap();
/// assert_eq!(quantity.as_f64(), 0.01);
///
/// // Non-positive or non-finite values will fail
/// assert!(Quantity::try_from(0.0).is_err());
/// assert!(Quantity::try_from(-1.0).is_err());
/// assert!(Quantity::try_from(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    /// Returns the quantity value as its underlying `f64` representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ataix_sdk::models::Quantity;
    ///
    /// let quantity = Quantity::try_from(0.25).unwrap();
    /// assert_eq!(quantity.as_f64(), 0.25);
    /// ```
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<Quantity> for f64 {
    fn from(value: Quantity) -> f64 {
        value.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = QuantityValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(QuantityValidationError::NotFinite);
        }

        if value <= 0.0 {
            return Err(QuantityValidationError::NotPositive { value });
        }

        Ok(Quantity(value))
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(value as f64)
    }
}

impl Eq for Quantity {}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.partial_cmp(other).expect("`Quantity` must be finite")
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}
