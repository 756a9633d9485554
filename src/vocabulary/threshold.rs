//! Minimum-frequency threshold.

use std::fmt;
use std::num::NonZeroU64;

use serde::Serialize;

use crate::error::{GlossaError, Result};

/// A validated minimum-frequency threshold.
///
/// Zero and negative thresholds cannot be represented, so filtering with a
/// `MinFrequency` never fails.
///
/// # Examples
///
/// ```
/// use glossa::vocabulary::MinFrequency;
///
/// assert_eq!(MinFrequency::default().get(), 3);
/// assert_eq!(MinFrequency::new(5).unwrap().get(), 5);
/// assert!(MinFrequency::new(0).is_err());
/// assert!(MinFrequency::new(-2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MinFrequency(NonZeroU64);

impl MinFrequency {
    /// The threshold used when none is configured.
    pub const DEFAULT: u64 = 3;

    /// Validate a threshold.
    pub fn new(value: i64) -> Result<Self> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(MinFrequency)
            .ok_or_else(|| {
                GlossaError::invalid_config(format!(
                    "minimum frequency must be a positive integer, got {value}"
                ))
            })
    }

    /// Get the threshold value.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Check whether a count meets this threshold.
    pub fn admits(self, count: u64) -> bool {
        count >= self.get()
    }
}

impl Default for MinFrequency {
    fn default() -> Self {
        MinFrequency(NonZeroU64::new(Self::DEFAULT).unwrap_or(NonZeroU64::MIN))
    }
}

impl TryFrom<i64> for MinFrequency {
    type Error = GlossaError;

    fn try_from(value: i64) -> Result<Self> {
        MinFrequency::new(value)
    }
}

impl From<NonZeroU64> for MinFrequency {
    fn from(value: NonZeroU64) -> Self {
        MinFrequency(value)
    }
}

impl fmt::Display for MinFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
