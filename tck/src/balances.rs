//! Balance lookups in `cleos get account` output.
//!
//! The account printout has a `CYBER balances:` summary followed by one
//! block per resource:
//!
//! ```text
//! CYBER balances:
//!      liquid:            0.0000 CYBER
//!      staked:           10.0000 CYBER
//!      ...
//! memory:
//!      staked:            2.5000 CYBER
//!      delegated:         0.0000 CYBER
//! ```

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, VerificationError};
use crate::output::CliOutput;
use crate::scanner::SectionScanner;

lazy_static! {
    static ref BALANCES_ANCHOR: Regex =
        Regex::new(r"^CYBER\s+balances:").expect("static pattern");
}

/// Labels of the `CYBER balances:` summary.
///
/// `Received` is printed by the client as `recieved:`; the misspelling is
/// part of the output format and is matched verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceKind {
    /// Spendable tokens
    Liquid,
    /// Tokens staked by the account
    Staked,
    /// Stake the account's resources are backed by; matches the sum of the
    /// per-resource `staked:` values
    Effective,
    /// Tokens being withdrawn
    Unstaking,
    /// Tokens owned in total
    Owned,
    /// Stake delegated to the account by others
    Received,
    /// Stake the account delegated to others
    Provided,
    /// Grand total
    Total,
}

impl BalanceKind {
    /// Every kind, in the order the client prints them.
    pub const ALL: [BalanceKind; 8] = [
        BalanceKind::Liquid,
        BalanceKind::Staked,
        BalanceKind::Effective,
        BalanceKind::Unstaking,
        BalanceKind::Owned,
        BalanceKind::Received,
        BalanceKind::Provided,
        BalanceKind::Total,
    ];

    /// Label as printed by the client, without the colon.
    pub fn label(self) -> &'static str {
        match self {
            BalanceKind::Liquid => "liquid",
            BalanceKind::Staked => "staked",
            BalanceKind::Effective => "effective",
            BalanceKind::Unstaking => "unstaking",
            BalanceKind::Owned => "owned",
            BalanceKind::Received => "recieved",
            BalanceKind::Provided => "provided",
            BalanceKind::Total => "total",
        }
    }
}

impl fmt::Display for BalanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BalanceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // both spellings of "received" are accepted on input
        match s {
            "received" => Ok(BalanceKind::Received),
            other => BalanceKind::ALL
                .into_iter()
                .find(|kind| kind.label() == other)
                .ok_or_else(|| format!("unknown balance kind '{}'", other)),
        }
    }
}

/// Resource blocks of the account printout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// RAM
    Memory,
    /// Persistent storage
    Storage,
    /// Network bandwidth
    NetBandwidth,
    /// CPU bandwidth
    CpuBandwidth,
}

impl ResourceCategory {
    /// Every category, in the order the client prints them.
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Memory,
        ResourceCategory::Storage,
        ResourceCategory::NetBandwidth,
        ResourceCategory::CpuBandwidth,
    ];

    /// Section header text, without the colon.
    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Memory => "memory",
            ResourceCategory::Storage => "storage",
            ResourceCategory::NetBandwidth => "net bandwidth",
            ResourceCategory::CpuBandwidth => "cpu bandwidth",
        }
    }

    /// Header line prefix that opens this category's block.
    pub fn anchor(self) -> String {
        format!("{}:", self.label())
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value of `label` in the `CYBER balances:` summary, if present.
pub fn balance(output: &CliOutput, label: &str) -> Result<Option<u64>> {
    SectionScanner::for_label(&*BALANCES_ANCHOR, label)?.scan(output.lines())
}

/// Summary `effective:` balance.
pub fn effective_balance(output: &CliOutput) -> Result<Option<u64>> {
    balance(output, BalanceKind::Effective.label())
}

/// Summary `recieved:` balance.
pub fn received_balance(output: &CliOutput) -> Result<Option<u64>> {
    balance(output, BalanceKind::Received.label())
}

/// Value of `label` in the block of `resource`, if present.
pub fn resource_cost(
    output: &CliOutput,
    resource: ResourceCategory,
    label: &str,
) -> Result<Option<u64>> {
    SectionScanner::for_label(resource.anchor(), label)?.scan(output.lines())
}

/// Stake the account put into `resource` itself.
pub fn resource_staked(output: &CliOutput, resource: ResourceCategory) -> Result<Option<u64>> {
    resource_cost(output, resource, "staked")
}

/// Stake other accounts delegated to `resource`.
pub fn resource_received(output: &CliOutput, resource: ResourceCategory) -> Result<Option<u64>> {
    resource_cost(output, resource, "delegated")
}

/// Turn an absent lookup into [`VerificationError::FieldNotFound`].
pub(crate) fn require(value: Option<u64>, section: &str, label: &str) -> Result<u64> {
    value.ok_or_else(|| VerificationError::FieldNotFound {
        section: section.to_string(),
        label: label.to_string(),
    })
}
