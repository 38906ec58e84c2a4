//! Account invariant checkers
//!
//! Implements invariants over `cleos get account` output:
//! - Stake endowment: the summary `effective:` balance equals the stake put
//!   into the four resources, and the summary `recieved:` balance equals the
//!   stake delegated to them, up to one minor unit of rounding

use crate::balances::{
    effective_balance, received_balance, require, resource_received, resource_staked,
    BalanceKind, ResourceCategory,
};
use crate::error::{Result, VerificationError};
use crate::output::CliOutput;

/// Rounding slack, in minor units, tolerated between an aggregate and its parts.
pub const ROUNDING_TOLERANCE: u64 = 1;

/// Stake figures of one resource block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceStake {
    /// Resource the figures belong to
    pub category: ResourceCategory,
    /// `staked:` value
    pub staked: u64,
    /// `delegated:` value
    pub delegated: u64,
}

/// Balances read from an account printout for the endowment check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEndowment {
    /// Summary `effective:` balance
    pub effective: u64,
    /// Summary `recieved:` balance
    pub received: u64,
    /// One entry per resource category, in print order
    pub resources: Vec<ResourceStake>,
}

impl ResourceEndowment {
    /// Read every figure the check needs.
    ///
    /// # Errors
    /// [`VerificationError::FieldNotFound`] if any value is missing.
    pub fn scan(output: &CliOutput) -> Result<Self> {
        let effective = require(
            effective_balance(output)?,
            "CYBER balances",
            BalanceKind::Effective.label(),
        )?;
        let received = require(
            received_balance(output)?,
            "CYBER balances",
            BalanceKind::Received.label(),
        )?;

        let mut resources = Vec::with_capacity(ResourceCategory::ALL.len());
        for category in ResourceCategory::ALL {
            let staked = require(
                resource_staked(output, category)?,
                category.label(),
                "staked",
            )?;
            let delegated = require(
                resource_received(output, category)?,
                category.label(),
                "delegated",
            )?;
            resources.push(ResourceStake {
                category,
                staked,
                delegated,
            });
        }

        Ok(Self {
            effective,
            received,
            resources,
        })
    }

    /// Sum of `staked:` over all resources.
    pub fn total_staked(&self) -> u64 {
        self.resources
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.staked))
    }

    /// Sum of `delegated:` over all resources.
    pub fn total_delegated(&self) -> u64 {
        self.resources
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.delegated))
    }

    /// Check both aggregates against their components.
    pub fn check(&self) -> Result<()> {
        check_aggregate("effective", self.effective, self.total_staked())?;
        check_aggregate("recieved", self.received, self.total_delegated())
    }
}

/// Check that `actual` equals `expected` within [`ROUNDING_TOLERANCE`].
///
/// # Errors
/// [`VerificationError::EndowmentMismatch`] when the difference is larger.
pub fn check_aggregate(aggregate: &'static str, actual: u64, expected: u64) -> Result<()> {
    if actual.abs_diff(expected) > ROUNDING_TOLERANCE {
        return Err(VerificationError::EndowmentMismatch {
            aggregate,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Verify that a new account's resource stakes add up to its balances.
pub fn verify_resources_stake_endowment(output: &CliOutput) -> Result<()> {
    let endowment = ResourceEndowment::scan(output)?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "Endowment: effective={} staked={} recieved={} delegated={}",
            endowment.effective,
            endowment.total_staked(),
            endowment.received,
            endowment.total_delegated()
        );
    }

    endowment.check()
}
