//! Contract artifacts and the contract hash check.
//!
//! Verifiers never look for contract files themselves: they ask a
//! [`ContractArtifacts`] accessor for the path of a contract's WASM or ABI
//! and open whatever it returns.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::assertions::verify_output_contains;
use crate::error::{Result, VerificationError};
use crate::output::CliOutput;

/// Environment variable holding the default contracts directory.
pub const CONTRACTS_DIR_ENV: &str = "CYBER_CONTRACTS_DIR";

/// Resolves a contract name to its build artifacts.
pub trait ContractArtifacts {
    /// Path of the compiled contract (`.wasm`).
    fn wasm_path(&self, contract: &str) -> Result<PathBuf>;

    /// Path of the contract ABI (`.abi`).
    fn abi_path(&self, contract: &str) -> Result<PathBuf>;
}

/// Contracts laid out as `<root>/<contract>/<contract>.{wasm,abi}`.
///
/// This is the layout of the system contracts build directory, e.g.
/// `cyberway.contracts/cyber.token/cyber.token.wasm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractsDirectory {
    root: PathBuf,
}

impl ContractsDirectory {
    /// Accessor rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Accessor rooted at `$CYBER_CONTRACTS_DIR`, if the variable is set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(CONTRACTS_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(Self::new)
    }

    fn artifact(&self, contract: &str, kind: &'static str) -> Result<PathBuf> {
        let path = self
            .root
            .join(contract)
            .join(format!("{}.{}", contract, kind));

        if !path.is_file() {
            return Err(VerificationError::ArtifactNotFound {
                contract: contract.to_string(),
                kind,
                path,
            });
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Resolved {} of {} to {}", kind, contract, path.display());
        }
        Ok(path)
    }
}

impl ContractArtifacts for ContractsDirectory {
    fn wasm_path(&self, contract: &str) -> Result<PathBuf> {
        self.artifact(contract, "wasm")
    }

    fn abi_path(&self, contract: &str) -> Result<PathBuf> {
        self.artifact(contract, "abi")
    }
}

/// Lowercase hex SHA-256 of the file at `path`.
pub fn contract_hash(path: &Path) -> Result<String> {
    let code = std::fs::read(path).map_err(|source| VerificationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(hex::encode(Sha256::digest(&code)))
}

/// Verify that the CLI output reports the hash of the contract's WASM.
pub fn verify_contract_hash(
    output: &CliOutput,
    contract: &str,
    artifacts: &dyn ContractArtifacts,
) -> Result<()> {
    let path = artifacts.wasm_path(contract)?;
    let hash = contract_hash(&path)?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Code hash of {} ({}) is {}", contract, path.display(), hash);
    }

    verify_output_contains(output, &hash)
}
