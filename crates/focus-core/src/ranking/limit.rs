use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::FocusError;

/// Size of the focus set. Always a non-negative whole number.
///
/// Raw numbers coming from config or the command line go through
/// `TryFrom`, which rejects negative, fractional and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusLimit(usize);

impl FocusLimit {
    pub const DEFAULT: FocusLimit = FocusLimit(3);

    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for FocusLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FocusLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<usize> for FocusLimit {
    fn from(limit: usize) -> Self {
        Self(limit)
    }
}

impl TryFrom<i64> for FocusLimit {
    type Error = FocusError;

    fn try_from(limit: i64) -> Result<Self, Self::Error> {
        usize::try_from(limit)
            .map(Self)
            .map_err(|_| FocusError::invalid_argument("limit", format!("must be >= 0, got {limit}")))
    }
}

impl TryFrom<f64> for FocusLimit {
    type Error = FocusError;

    fn try_from(limit: f64) -> Result<Self, Self::Error> {
        if !limit.is_finite() {
            return Err(FocusError::invalid_argument(
                "limit",
                format!("must be finite, got {limit}"),
            ));
        }
        if limit < 0.0 {
            return Err(FocusError::invalid_argument(
                "limit",
                format!("must be >= 0, got {limit}"),
            ));
        }
        if limit.fract() != 0.0 {
            return Err(FocusError::invalid_argument(
                "limit",
                format!("must be a whole number, got {limit}"),
            ));
        }
        Ok(Self(limit as usize))
    }
}
