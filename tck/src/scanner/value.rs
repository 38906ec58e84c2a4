//! Numeric value extraction from a single output line.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, VerificationError};

lazy_static! {
    static ref NUMERIC_RUN: Regex = Regex::new(r"[0-9.]+").expect("static pattern");
}

/// Extract the first numeric token of `line` as a scaled integer.
///
/// The decimal point is dropped, so `"  staked:  123.4567 CYBER"` yields
/// `1234567`. Callers only pass lines already known to hold an amount; a
/// line without one is reported as [`VerificationError::NoNumericValue`].
pub fn balance_value(line: &str) -> Result<u64> {
    let token = NUMERIC_RUN
        .find(line)
        .ok_or_else(|| VerificationError::NoNumericValue {
            line: line.to_string(),
        })?
        .as_str();

    let digits: String = token.chars().filter(|c| *c != '.').collect();
    digits
        .parse::<u64>()
        .map_err(|e| VerificationError::InvalidAmount {
            input: token.to_string(),
            reason: e.to_string(),
        })
}
