// LogWise - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Per-line parse outcomes (no match, invalid calendar value) are data, not
// errors — see core::model::LineParse. Only configuration-level failures
// (bad grammar descriptors, malformed offsets, an empty time index) reach
// the caller as typed errors. Nothing here is fatal to a host process.

use std::fmt;
use std::path::PathBuf;

/// Top-level error type for all LogWise operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogwiseError {
    /// Grammar descriptor loading or validation failed.
    Grammar(GrammarError),

    /// A before/after offset string could not be parsed.
    Offset(OffsetError),

    /// A filtering session could not be established.
    Session(SessionError),
}

impl fmt::Display for LogwiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar(e) => write!(f, "Grammar error: {e}"),
            Self::Offset(e) => write!(f, "Offset error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
        }
    }
}

impl std::error::Error for LogwiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grammar(e) => Some(e),
            Self::Offset(e) => Some(e),
            Self::Session(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Grammar errors
// ---------------------------------------------------------------------------

/// Errors related to grammar descriptor loading and validation.
#[derive(Debug)]
pub enum GrammarError {
    /// TOML descriptor could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A required field is missing from the descriptor.
    MissingField {
        grammar_id: String,
        field: &'static str,
    },

    /// The descriptor's regex pattern is invalid.
    InvalidRegex {
        grammar_id: String,
        pattern: String,
        source: regex::Error,
    },

    /// The descriptor's regex pattern exceeds the maximum allowed length.
    RegexTooLong {
        grammar_id: String,
        length: usize,
        max_length: usize,
    },

    /// The descriptor's regex pattern lacks a required named capture group.
    MissingCaptureGroup {
        grammar_id: String,
        group: &'static str,
    },

    /// The registry has no fallback grammar, so detection cannot classify
    /// files that match none of the distinctive patterns.
    NoFallbackGrammar,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::MissingField { grammar_id, field } => {
                write!(
                    f,
                    "Grammar '{grammar_id}': missing required field '{field}'"
                )
            }
            Self::InvalidRegex {
                grammar_id,
                pattern,
                source,
            } => write!(
                f,
                "Grammar '{grammar_id}': invalid regex '{pattern}': {source}"
            ),
            Self::RegexTooLong {
                grammar_id,
                length,
                max_length,
            } => write!(
                f,
                "Grammar '{grammar_id}': regex is {length} chars, \
                 exceeds maximum of {max_length}"
            ),
            Self::MissingCaptureGroup { grammar_id, group } => write!(
                f,
                "Grammar '{grammar_id}': pattern has no '{group}' capture group"
            ),
            Self::NoFallbackGrammar => {
                write!(f, "Grammar registry has no fallback grammar")
            }
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::InvalidRegex { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<GrammarError> for LogwiseError {
    fn from(e: GrammarError) -> Self {
        Self::Grammar(e)
    }
}

// ---------------------------------------------------------------------------
// Offset errors
// ---------------------------------------------------------------------------

/// Errors related to before/after offset parsing.
#[derive(Debug)]
pub enum OffsetError {
    /// The offset string is not a non-negative integer with an optional
    /// trailing `s`, `m`, or `h` unit letter.
    InvalidFormat { input: String },
}

impl fmt::Display for OffsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input } => write!(
                f,
                "Invalid offset '{input}': expected a non-negative number \
                 with an optional s/m/h suffix (e.g. 30s, 10m, 1h, 90)"
            ),
        }
    }
}

impl std::error::Error for OffsetError {}

impl From<OffsetError> for LogwiseError {
    fn from(e: OffsetError) -> Self {
        Self::Offset(e)
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to establishing a filtering session.
#[derive(Debug)]
pub enum SessionError {
    /// No line in the entire file produced a parseable timestamp, so there
    /// is nothing to anchor a window on. Distinct from a single line that
    /// fails to parse, which is silently excluded.
    EmptyTimeIndex,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTimeIndex => {
                write!(f, "No parseable timestamps found in the log content")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<SessionError> for LogwiseError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Convenience type alias for LogWise results.
pub type Result<T> = std::result::Result<T, LogwiseError>;
