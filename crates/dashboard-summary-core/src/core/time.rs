// crates/dashboard-summary-core/src/core/time.rs
// ============================================================================
// Module: Timestamp Normalization
// Description: Float epoch seconds to (seconds, nanos) conversion.
// Purpose: Give every summary timestamp a single canonical wire form.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Summary producers persist timestamps as float epoch seconds where the
//! fractional part carries sub-second precision. [`normalize`] converts them
//! into a [`Timestamp`] of whole seconds plus nanoseconds.
//!
//! Normalization is total over [`EpochSeconds`], which only admits finite,
//! non-negative values within the representable range. Rejecting anything else
//! is the caller's job and happens when constructing [`EpochSeconds`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Nanoseconds per second as a float scale factor.
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Largest accepted epoch-seconds value (9999-12-31T23:59:59Z).
pub const MAX_EPOCH_SECONDS: f64 = 253_402_300_799.0;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Canonical timestamp as whole seconds and nanoseconds.
///
/// # Invariants
/// - `0 <= nanos < 1_000_000_000` for values produced by [`normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second nanoseconds.
    pub nanos: i32,
}

/// Validated float epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EpochSeconds(f64);

impl EpochSeconds {
    /// Validates a raw float epoch-seconds value.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError`] for non-finite, negative, or out-of-range
    /// values.
    pub fn new(value: f64) -> Result<Self, TimestampError> {
        if !value.is_finite() {
            return Err(TimestampError::NonFinite);
        }
        if value < 0.0 {
            return Err(TimestampError::Negative(value));
        }
        if value > MAX_EPOCH_SECONDS {
            return Err(TimestampError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw float value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Timestamp validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimestampError {
    /// NaN or infinite input.
    #[error("timestamp is not finite")]
    NonFinite,
    /// Negative input.
    #[error("timestamp is negative: {0}")]
    Negative(f64),
    /// Input past the largest supported timestamp.
    #[error("timestamp out of range: {0}")]
    OutOfRange(f64),
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Converts validated epoch seconds into a canonical [`Timestamp`].
///
/// `seconds = floor(value)` and `nanos = round(fraction * 1e9)`. A fraction that
/// rounds up to a full second carries into `seconds`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "EpochSeconds bounds both casts to their target ranges."
)]
pub fn normalize(value: EpochSeconds) -> Timestamp {
    let raw = value.get();
    let whole = raw.floor();
    let nanos = ((raw - whole) * NANOS_PER_SECOND).round();
    let (whole, nanos) = if nanos >= NANOS_PER_SECOND { (whole + 1.0, 0.0) } else { (whole, nanos) };
    Timestamp {
        seconds: whole as i64,
        nanos: nanos as i32,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions."
    )]

    use super::EpochSeconds;
    use super::Timestamp;
    use super::TimestampError;
    use super::normalize;

    fn normalized(value: f64) -> Timestamp {
        normalize(EpochSeconds::new(value).expect("valid timestamp"))
    }

    #[test]
    fn splits_fractional_seconds() {
        assert_eq!(
            normalized(915_166_800.916_166_782),
            Timestamp {
                seconds: 915_166_800,
                nanos: 916_166_782,
            }
        );
    }

    #[test]
    fn fraction_only_has_zero_seconds() {
        assert_eq!(
            normalized(0.1),
            Timestamp {
                seconds: 0,
                nanos: 100_000_000,
            }
        );
        assert_eq!(
            normalized(0.916_166_782),
            Timestamp {
                seconds: 0,
                nanos: 916_166_782,
            }
        );
    }

    #[test]
    fn whole_seconds_have_zero_nanos() {
        assert_eq!(
            normalized(916_166_800.0),
            Timestamp {
                seconds: 916_166_800,
                nanos: 0,
            }
        );
        assert_eq!(normalized(0.0), Timestamp::default());
    }

    #[test]
    fn rounding_to_a_full_second_carries() {
        assert_eq!(
            normalized(41.999_999_999_9),
            Timestamp {
                seconds: 42,
                nanos: 0,
            }
        );
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(EpochSeconds::new(f64::NAN), Err(TimestampError::NonFinite));
        assert_eq!(EpochSeconds::new(f64::INFINITY), Err(TimestampError::NonFinite));
        assert_eq!(EpochSeconds::new(-1.5), Err(TimestampError::Negative(-1.5)));
        assert!(matches!(EpochSeconds::new(1e300), Err(TimestampError::OutOfRange(_))));
    }
}
