//! CYBER amounts as printed by the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VerificationError;

/// Token symbol printed after every amount.
pub const CYBER_SYMBOL: &str = "CYBER";

/// Number of decimal places of the native token.
pub const CYBER_DECIMALS: u8 = 4;

/// One CYBER in minor units.
pub const CYBER_VALUE: u64 = 10u64.pow(CYBER_DECIMALS as u32);

/// An amount of CYBER in minor units (value x 10^4).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CyberAmount(pub u64);

impl CyberAmount {
    /// Zero CYBER.
    pub const ZERO: CyberAmount = CyberAmount(0);
}

impl fmt::Display for CyberAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$} {}",
            self.0 / CYBER_VALUE,
            self.0 % CYBER_VALUE,
            CYBER_SYMBOL,
            width = CYBER_DECIMALS as usize
        )
    }
}

impl FromStr for CyberAmount {
    type Err = VerificationError;

    /// Accepts `"12.5000 CYBER"`, `"12.5"` or `"12"`; at most four decimals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| VerificationError::InvalidAmount {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let numeric = trimmed
            .strip_suffix(CYBER_SYMBOL)
            .map(str::trim_end)
            .unwrap_or(trimmed);

        let (whole, fraction) = match numeric.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (numeric, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits after the decimal point"));
        }
        if fraction.len() > CYBER_DECIMALS as usize {
            return Err(invalid("more than 4 decimal places"));
        }

        let whole: u64 = whole.parse().map_err(|_| invalid("amount too large"))?;
        let fraction_units: u64 = if fraction.is_empty() {
            0
        } else {
            let scale = 10u64.pow(CYBER_DECIMALS as u32 - fraction.len() as u32);
            fraction
                .parse::<u64>()
                .map_err(|_| invalid("invalid fraction"))?
                * scale
        };

        whole
            .checked_mul(CYBER_VALUE)
            .and_then(|units| units.checked_add(fraction_units))
            .map(CyberAmount)
            .ok_or_else(|| invalid("amount too large"))
    }
}
