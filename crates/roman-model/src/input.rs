use std::str::FromStr;

use crate::error::ModelError;
use crate::numeral::{RomanNumeral, to_roman};

/// Integer parsed from a request parameter.
///
/// Accepts an optional leading `+` or `-` followed by ASCII digits, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanInput(i64);

impl RomanInput {
    #[inline]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Reject values greater than `max`.
    ///
    /// Conversion is only available on the returned [`BoundedInput`], so the size of the
    /// numeral is always bounded by the caller's limit.
    pub fn check_max(self, max: i64) -> Result<BoundedInput, ModelError> {
        if self.0 > max {
            return Err(ModelError::OutOfRange { value: self.0, max });
        }
        Ok(BoundedInput(self.0))
    }
}

/// A [`RomanInput`] that passed [`RomanInput::check_max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedInput(i64);

impl BoundedInput {
    #[inline]
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn to_roman(&self) -> RomanNumeral {
        to_roman(self.0)
    }
}

impl FromStr for RomanInput {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(RomanInput)
            .map_err(|_| ModelError::InvalidInput(s.to_string()))
    }
}
