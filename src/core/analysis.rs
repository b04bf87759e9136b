// LogWise - core/analysis.rs
//
// Boundary interface to the external analysis service. The filtering core
// only ever hands a finished text payload across this trait; transport,
// retry policy, prompt content, and report rendering all live on the host
// side. Keeping the boundary here is what lets the core stay synchronous
// and independently testable.

use crate::core::model::Timestamp;
use serde::Serialize;
use std::fmt;

/// A completed analysis of a filtered log excerpt.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The analysis text produced by the service.
    pub analysis: String,

    /// When the analysis completed, as reported by the collaborator.
    pub completed_at: Timestamp,
}

/// Failure reported by the analysis collaborator.
#[derive(Debug)]
pub enum AnalysisError {
    /// The submission did not produce a report.
    Submission { message: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submission { message } => write!(f, "Analysis submission failed: {message}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Sink that accepts a filtered log excerpt for analysis.
///
/// Implemented by the host (typically over an HTTP inference client); the
/// core treats it as an opaque boundary and never inspects the report
/// beyond handing it back to the caller.
pub trait AnalysisSink {
    fn submit_for_analysis(&self, text: &str) -> Result<AnalysisReport, AnalysisError>;
}
