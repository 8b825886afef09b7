use std::fmt;
use std::ops::RangeInclusive;

use mx_matrix::Element;

use crate::error::{GenError, Result};

/// Inclusive bounds for generated cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    low: Element,
    high: Element,
}

impl ValueRange {
    /// Lower bound used when none is given.
    pub const DEFAULT_LOW: Element = 0;
    /// Upper bound used when none is given.
    pub const DEFAULT_HIGH: Element = 100;

    /// # Errors
    /// Returns [`GenError::InvalidRange`] if `low > high`.
    pub fn new(low: Element, high: Element) -> Result<Self> {
        if low > high {
            return Err(GenError::InvalidRange { low, high });
        }
        Ok(ValueRange { low, high })
    }

    pub fn low(&self) -> Element {
        self.low
    }

    pub fn high(&self) -> Element {
        self.high
    }

    pub fn contains(&self, v: Element) -> bool {
        RangeInclusive::from(*self).contains(&v)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

impl From<ValueRange> for RangeInclusive<Element> {
    fn from(r: ValueRange) -> Self {
        r.low..=r.high
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
