//! ABI comparison between a contract's packaged ABI and the one the node reports.
//!
//! The node serializes an ABI back with fields the source file does not
//! have (empty `variants`, index details, ...), so documents are compared on
//! the fields that matter for compatibility only:
//! - `version` and `structs` must be equal
//! - `actions` and `tables` entries are paired by `name` and their `type`
//!   must agree; an entry present on one side only is not checked

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::artifacts::ContractArtifacts;
use crate::error::{Result, VerificationError};
use crate::output::CliOutput;

/// A `{ "name": ..., "type": ... }` record of the `actions` or `tables` list.
///
/// Other keys of the record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiNamedType {
    /// Action or table name
    pub name: String,
    /// Struct the action or table row is encoded as
    #[serde(rename = "type")]
    pub type_name: String,
}

/// The compared subset of an ABI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiDocument {
    /// ABI format version, e.g. `cyberway::abi/1.1`
    pub version: String,
    /// Struct definitions, kept as raw JSON for deep comparison
    pub structs: Value,
    /// Declared actions
    #[serde(default)]
    pub actions: Vec<AbiNamedType>,
    /// Declared tables
    #[serde(default)]
    pub tables: Vec<AbiNamedType>,
}

impl AbiDocument {
    /// Parse an ABI document from JSON text.
    pub fn parse(json: &str, what: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| VerificationError::Json {
            what: what.to_string(),
            source,
        })
    }

    /// Load an ABI document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| VerificationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse the ABI printed by `cleos get abi`.
    pub fn from_output(output: &CliOutput) -> Result<Self> {
        Self::parse(&output.joined(), "CLI output")
    }
}

/// List every difference between `reference` and `observed`.
///
/// Returns an empty list when the documents agree.
pub fn abi_differences(reference: &AbiDocument, observed: &AbiDocument) -> Vec<VerificationError> {
    let mut errors = Vec::new();

    if reference.version != observed.version {
        errors.push(VerificationError::AbiMismatch {
            field: "version".to_string(),
            expected: reference.version.clone(),
            actual: observed.version.clone(),
        });
    }

    if reference.structs != observed.structs {
        errors.push(VerificationError::AbiMismatch {
            field: "structs".to_string(),
            expected: reference.structs.to_string(),
            actual: observed.structs.to_string(),
        });
    }

    compare_named("actions", &reference.actions, &observed.actions, &mut errors);
    compare_named("tables", &reference.tables, &observed.tables, &mut errors);

    errors
}

/// Pair entries by name and compare their types.
fn compare_named(
    field: &str,
    reference: &[AbiNamedType],
    observed: &[AbiNamedType],
    errors: &mut Vec<VerificationError>,
) {
    for source in reference {
        for test in observed.iter().filter(|entry| entry.name == source.name) {
            if source.type_name != test.type_name {
                errors.push(VerificationError::AbiMismatch {
                    field: format!("{}[{}].type", field, source.name),
                    expected: source.type_name.clone(),
                    actual: test.type_name.clone(),
                });
            }
        }
    }
}

/// Assert that `observed` is compatible with `reference`.
pub fn compare_abi(reference: &AbiDocument, observed: &AbiDocument) -> Result<()> {
    VerificationError::collect(abi_differences(reference, observed))
}

/// Verify that the ABI printed by the CLI matches the contract's ABI file.
pub fn verify_contract_abi(
    output: &CliOutput,
    contract: &str,
    artifacts: &dyn ContractArtifacts,
) -> Result<()> {
    let path = artifacts.abi_path(contract)?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Comparing ABI of {} with {}", contract, path.display());
    }

    let reference = AbiDocument::load(&path)?;
    let observed = AbiDocument::from_output(output)?;
    compare_abi(&reference, &observed)
}
