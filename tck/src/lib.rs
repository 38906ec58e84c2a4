//! # CYBER-TCK: CLI Output Verification Kit
//!
//! Test-support checks for the output of the CyberWay command-line client.
//! Tests capture what `cleos` prints and hand it to the verifiers here,
//! which extract values by pattern and assert invariants over them.
//!
//! ## Architecture Overview
//!
//! ```text
//!   value extraction ──▶ section scanner ──▶ balances ──▶ endowment invariant
//!
//!   pattern assertions          ABI verifier          contract hash verifier
//! ```
//!
//! - **Balance scanning**: find a labeled amount after a section header
//!   (`CYBER balances:`, `memory:`, ...) and read it as minor units
//! - **Invariants**: a new account's balances equal the sum of its resource
//!   stakes, within one minor unit
//! - **Assertions**: regex checks for balances, authorities and actions
//! - **ABI**: compare a contract's ABI file with the one the node reports
//! - **Artifacts**: resolve contract files and check the reported code hash
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cyber_tck::prelude::*;
//!
//! #[test]
//! fn test_new_account() -> Result<()> {
//!     let output = CliOutput::parse(&run_cleos(&["get", "account", "alice"]));
//!     verify_get_new_account(&output, ALICE_KEY)?;
//!     verify_resources_stake_endowment(&output)?;
//!     Ok(())
//! }
//! ```
//!
//! Every verifier returns [`Result`]; a failed expectation is an
//! [`VerificationError`] describing what was missing or different.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Verification error type
pub mod error;

/// Captured CLI output
pub mod output;

/// CYBER amount formatting and parsing
pub mod amount;

/// Section-anchored value extraction
pub mod scanner;

/// Balance and resource lookups in account printouts
pub mod balances;

/// Account invariant checkers (stake endowment)
pub mod invariants;

/// Regex assertions over output
pub mod assertions;

/// ABI structural comparison
pub mod abi;

/// Contract artifact resolution and hash verification
pub mod artifacts;

/// Convenient re-exports for common usage
pub mod prelude;

pub use error::{Result, VerificationError};
pub use output::CliOutput;

/// Kit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
