// LogWise - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Crate metadata
// =============================================================================

/// Crate display name.
pub const APP_NAME: &str = "LogWise";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Grammar registry limits
// =============================================================================

/// Maximum regex pattern length in a grammar descriptor, to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4_096;

/// Named capture groups every grammar pattern must define.
pub const REQUIRED_CAPTURE_GROUPS: &[&str] = &["mon", "day", "hour", "min", "sec"];

/// Capture group that carries the embedded year. Mandatory for grammars
/// that do not take an externally supplied year.
pub const YEAR_CAPTURE_GROUP: &str = "year";

// =============================================================================
// Offsets
// =============================================================================

/// Multiplier applied to a bare numeric offset with no unit suffix.
/// A bare number is read as minutes, not seconds.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Multiplier for the `h` offset suffix.
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Largest accepted offset: 366 days in seconds. Keeps every offset well
/// inside `i64` and `chrono` arithmetic range; no log window is wider
/// than a year.
pub const MAX_OFFSET_SECONDS: u64 = 366 * 24 * 3_600;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
