// LogWise - core/offset.rs
//
// Short-form duration offsets used to build a window around an anchor,
// e.g. "--before 10m --after 1h" in the original command-line workflow.

use crate::util::constants;
use crate::util::error::OffsetError;
use chrono::Duration;

/// A non-negative duration with second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Offset {
    seconds: u64,
}

impl Offset {
    /// Values above `MAX_OFFSET_SECONDS` are clamped, keeping every offset
    /// safe for `Duration` conversion and window arithmetic.
    pub const fn from_seconds(seconds: u64) -> Self {
        let seconds = if seconds > constants::MAX_OFFSET_SECONDS {
            constants::MAX_OFFSET_SECONDS
        } else {
            seconds
        };
        Self { seconds }
    }

    pub const fn as_seconds(self) -> u64 {
        self.seconds
    }

    pub fn to_duration(self) -> Duration {
        // seconds <= MAX_OFFSET_SECONDS, so the cast cannot truncate.
        Duration::seconds(self.seconds as i64)
    }

    /// Parse a short offset string: a non-negative integer with an optional
    /// trailing unit letter — `s` seconds, `m` minutes, `h` hours.
    ///
    /// A bare number is read as minutes ("90" → 90 minutes), matching the
    /// long-standing command-line convention. Any other shape is surfaced
    /// to the operator as `InvalidFormat`, never silently defaulted.
    /// Offsets over `MAX_OFFSET_SECONDS` are rejected the same way: a
    /// window wider than a year is operator error, not a real request.
    pub fn parse(input: &str) -> Result<Self, OffsetError> {
        let invalid = || OffsetError::InvalidFormat {
            input: input.to_string(),
        };

        let (digits, multiplier) = match input.strip_suffix(['s', 'm', 'h']) {
            Some(rest) => {
                let unit = match input.as_bytes()[input.len() - 1] {
                    b's' => 1,
                    b'm' => constants::SECONDS_PER_MINUTE,
                    _ => constants::SECONDS_PER_HOUR,
                };
                (rest, unit)
            }
            None => (input, constants::SECONDS_PER_MINUTE),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u64 = digits.parse().map_err(|_| invalid())?;
        let seconds = value
            .checked_mul(multiplier)
            .filter(|&s| s <= constants::MAX_OFFSET_SECONDS)
            .ok_or_else(invalid)?;

        Ok(Self::from_seconds(seconds))
    }
}
