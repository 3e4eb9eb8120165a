//! # Height — The External Processing Counter
//!
//! Defines `Height`, a newtype over the monotonically non-decreasing
//! counter the execution environment advances as it processes steps.
//! License validity windows are expressed in heights, never in wall-clock
//! time, so that every validity check is a pure function of its inputs.
//!
//! The counter is read-only context from the registries' point of view:
//! it is supplied per call and never stored, cached, or advanced here.

use serde::{Deserialize, Serialize};

/// A point on the external monotonic counter.
///
/// Supplied by the environment with every height-dependent call. The
/// registries only compare heights and offset them by validity periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u64);

impl Height {
    /// Wrap a raw counter value.
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Access the raw counter value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The height reached after `period` further processing steps.
    ///
    /// Saturates at `u64::MAX`: a validity window that would overflow the
    /// counter clamps to the maximum representable height, making the
    /// license effectively perpetual until revoked. The counter itself can
    /// never exceed `u64::MAX`, so the clamped boundary is unreachable.
    pub fn offset_by(&self, period: u64) -> Self {
        Self(self.0.saturating_add(period))
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
