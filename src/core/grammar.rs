// LogWise - core/grammar.rs
//
// Timestamp grammar registry: descriptor loading, validation, and format
// detection. A grammar is one recognised timestamp notation, declared as a
// TOML descriptor and compiled into a runtime `Grammar`. New log dialects
// are added by registering a descriptor, not by branching in the parser.

use crate::core::model::LogLine;
use crate::util::constants;
use crate::util::error::GrammarError;
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML grammar descriptor as deserialized from a .toml file.
/// This is validated and compiled into a `Grammar` for runtime use.
#[derive(Debug, Deserialize)]
pub struct GrammarDefinition {
    pub grammar: GrammarMeta,
    pub detection: DetectionDef,
    pub parsing: ParsingDef,
}

#[derive(Debug, Deserialize)]
pub struct GrammarMeta {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct DetectionDef {
    /// A fallback grammar never classifies a file during detection; it is
    /// assigned only when no distinctive grammar matched any line.
    #[serde(default)]
    pub fallback: bool,
}

#[derive(Debug, Deserialize)]
pub struct ParsingDef {
    pub regex: String,
    /// True when the notation omits the year and the caller must supply one.
    #[serde(default)]
    pub requires_year: bool,
}

// =============================================================================
// Runtime grammar
// =============================================================================

/// Compiled runtime representation of one timestamp grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Unique grammar identifier (e.g. "bracketed").
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Description of the notation this grammar covers.
    pub description: String,

    /// Compiled line pattern, anchored at line start. Named capture groups:
    /// mon, day, hour, min, sec, and (unless `requires_year`) year.
    pub pattern: Regex,

    /// True when the caller must supply the calendar year externally.
    pub requires_year: bool,

    /// True for the permissive fallback grammar.
    pub is_fallback: bool,
}

// =============================================================================
// Descriptor validation and compilation
// =============================================================================

/// Parse a TOML string into a `GrammarDefinition`.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_grammar_toml(
    toml_content: &str,
    source_path: &PathBuf,
) -> Result<GrammarDefinition, GrammarError> {
    toml::from_str(toml_content).map_err(|e| GrammarError::TomlParse {
        path: source_path.clone(),
        source: e,
    })
}

/// Validate a `GrammarDefinition` and compile it into a runtime `Grammar`.
///
/// Validates:
/// - Required fields are present and non-empty
/// - The regex is valid and within the size limit
/// - The required field-extraction capture groups exist
/// - A `year` capture group exists iff the grammar embeds the year
pub fn validate_and_compile(def: GrammarDefinition) -> Result<Grammar, GrammarError> {
    let id = &def.grammar.id;

    if id.is_empty() {
        return Err(GrammarError::MissingField {
            grammar_id: "(empty)".to_string(),
            field: "grammar.id",
        });
    }
    if def.grammar.name.is_empty() {
        return Err(GrammarError::MissingField {
            grammar_id: id.clone(),
            field: "grammar.name",
        });
    }
    if def.parsing.regex.is_empty() {
        return Err(GrammarError::MissingField {
            grammar_id: id.clone(),
            field: "parsing.regex",
        });
    }
    if def.parsing.regex.len() > constants::MAX_REGEX_PATTERN_LENGTH {
        return Err(GrammarError::RegexTooLong {
            grammar_id: id.clone(),
            length: def.parsing.regex.len(),
            max_length: constants::MAX_REGEX_PATTERN_LENGTH,
        });
    }

    let pattern = Regex::new(&def.parsing.regex).map_err(|e| GrammarError::InvalidRegex {
        grammar_id: id.clone(),
        pattern: def.parsing.regex.clone(),
        source: e,
    })?;

    let capture_names: Vec<&str> = pattern.capture_names().flatten().collect();
    for &group in constants::REQUIRED_CAPTURE_GROUPS {
        if !capture_names.contains(&group) {
            return Err(GrammarError::MissingCaptureGroup {
                grammar_id: id.clone(),
                group,
            });
        }
    }
    if !def.parsing.requires_year && !capture_names.contains(&constants::YEAR_CAPTURE_GROUP) {
        return Err(GrammarError::MissingCaptureGroup {
            grammar_id: id.clone(),
            group: constants::YEAR_CAPTURE_GROUP,
        });
    }

    Ok(Grammar {
        id: id.clone(),
        name: def.grammar.name,
        description: def.grammar.description,
        pattern,
        requires_year: def.parsing.requires_year,
        is_fallback: def.detection.fallback,
    })
}

// =============================================================================
// Built-in grammars (embedded at compile time)
// =============================================================================

/// Embedded TOML content for built-in grammar descriptors, in detection
/// priority order. Each tuple is (filename, TOML content).
///
/// The fallback descriptor must come last: its pattern is a substring of
/// the bracketed shapes and would otherwise false-positive against them.
pub fn builtin_grammar_sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("bracketed.toml", include_str!("../../grammars/bracketed.toml")),
        ("dmesg.toml", include_str!("../../grammars/dmesg.toml")),
        (
            "traditional.toml",
            include_str!("../../grammars/traditional.toml"),
        ),
    ]
}

/// Load and validate all built-in grammars, preserving priority order.
///
/// Invalid descriptors are logged and skipped (non-fatal); a failure here
/// is a packaging bug, not a runtime condition.
pub fn load_builtin_grammars() -> Vec<Grammar> {
    let mut grammars = Vec::new();

    for (filename, content) in builtin_grammar_sources() {
        let path = PathBuf::from(format!("<builtin>/{filename}"));
        match parse_grammar_toml(content, &path).and_then(validate_and_compile) {
            Ok(grammar) => {
                tracing::debug!(grammar_id = %grammar.id, "Loaded built-in grammar");
                grammars.push(grammar);
            }
            Err(e) => {
                tracing::error!(file = filename, error = %e, "Failed to load built-in grammar");
            }
        }
    }

    grammars
}

// =============================================================================
// Format detection
// =============================================================================

/// Classify a file's timestamp notation.
///
/// A single linear pass over the lines in order: for each line the
/// distinctive (non-fallback) grammars are tried in registry priority
/// order, and the first grammar that matches any line classifies the whole
/// file — one file, one notation. If no line ever matches, the fallback
/// grammar is assigned.
///
/// Returns `NoFallbackGrammar` if the registry cannot guarantee a
/// classification.
pub fn detect<'a>(
    lines: &[LogLine],
    grammars: &'a [Grammar],
) -> Result<&'a Grammar, GrammarError> {
    let fallback = grammars
        .iter()
        .find(|g| g.is_fallback)
        .ok_or(GrammarError::NoFallbackGrammar)?;

    for line in lines {
        for grammar in grammars.iter().filter(|g| !g.is_fallback) {
            if grammar.pattern.is_match(&line.text) {
                tracing::debug!(
                    grammar_id = %grammar.id,
                    line_index = line.index,
                    "Detected timestamp grammar"
                );
                return Ok(grammar);
            }
        }
    }

    tracing::debug!(grammar_id = %fallback.id, "No distinctive grammar matched; using fallback");
    Ok(fallback)
}

// =============================================================================
// Tests
// =============================================================================
