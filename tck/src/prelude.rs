//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust,ignore
//! use cyber_tck::prelude::*;
//! ```

pub use crate::error::{Result, VerificationError};
pub use crate::output::CliOutput;

pub use crate::amount::CyberAmount;

pub use crate::balances::{
    balance, effective_balance, received_balance, resource_received, resource_staked,
    BalanceKind, ResourceCategory,
};

pub use crate::invariants::{verify_resources_stake_endowment, ResourceEndowment};

pub use crate::assertions::{
    verify_account_amount, verify_account_balance, verify_authority, verify_get_new_account,
    verify_output_contains, verify_output_contains_regex, verify_stake_created,
};

pub use crate::abi::{compare_abi, verify_contract_abi, AbiDocument};

pub use crate::artifacts::{
    contract_hash, verify_contract_hash, ContractArtifacts, ContractsDirectory,
};

pub use crate::scanner::{balance_value, LineMatcher, SectionScanner};
