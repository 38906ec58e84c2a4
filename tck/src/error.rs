//! Verification error type shared by every checker in the kit.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VerificationError>;

/// A failed expectation about captured CLI output.
///
/// Every variant is terminal for the check that produced it; the calling
/// test is expected to surface it as a failure.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum VerificationError {
    /// No line of the output matches the expected pattern
    #[error("output does not contain pattern `{pattern}`")]
    PatternNotFound { pattern: String },

    /// A labeled value was never found after its section header
    #[error("field `{label}` not found in section `{section}`")]
    FieldNotFound { section: String, label: String },

    /// Value extraction was asked to read a line with no numeric token
    #[error("no numeric value in line `{line}`")]
    NoNumericValue { line: String },

    /// A textual amount could not be parsed
    #[error("invalid amount `{input}`: {reason}")]
    InvalidAmount { input: String, reason: String },

    /// An aggregate balance differs from the sum of its components
    #[error(
        "{aggregate} balance mismatch: expected {expected} (sum of components), got {actual}"
    )]
    EndowmentMismatch {
        aggregate: &'static str,
        expected: u64,
        actual: u64,
    },

    /// Two ABI documents disagree on a compared field
    #[error("ABI mismatch on `{field}`: expected {expected}, got {actual}")]
    AbiMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// A caller-supplied pattern is not a valid regular expression
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Output or artifact content is not the expected JSON
    #[error("invalid JSON in {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading an artifact failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact accessor has no file for the contract
    #[error("no {kind} artifact for contract `{contract}` at {}", .path.display())]
    ArtifactNotFound {
        contract: String,
        kind: &'static str,
        path: PathBuf,
    },

    /// Several expectations of one composite check failed
    #[error("{} expectations failed:\n  - {}", .0.len(), join_errors(.0))]
    Multiple(Vec<VerificationError>),
}

fn join_errors(errors: &[VerificationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  - ")
}

impl VerificationError {
    /// Fold a list of collected failures into a single result.
    ///
    /// An empty list is success, a single failure is returned as is.
    pub fn collect(mut errors: Vec<VerificationError>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(VerificationError::Multiple(errors)),
        }
    }
}
