//! Pattern assertions over captured CLI output.
//!
//! These helpers make tests more readable and report the unmet pattern on
//! failure.

use regex::Regex;

use crate::amount::CyberAmount;
use crate::balances::BalanceKind;
use crate::error::{Result, VerificationError};
use crate::output::CliOutput;
use crate::scanner::compile;

/// Permissions every freshly created account carries.
pub const DEFAULT_PERMISSIONS: [&str; 2] = ["owner", "active"];

/// Assert that the output contains `needle` as a literal substring.
///
/// Lines are joined with `\n` before searching, so a needle only spans
/// lines when it contains the line break itself.
///
/// # Example
///
/// ```rust,ignore
/// verify_output_contains(&output, "executed transaction")?;
/// ```
pub fn verify_output_contains(output: &CliOutput, needle: &str) -> Result<()> {
    if output.joined().contains(needle) {
        return Ok(());
    }
    Err(VerificationError::PatternNotFound {
        pattern: needle.to_string(),
    })
}

/// Assert that some line of the output contains a match of `pattern`.
pub fn verify_output_contains_regex(output: &CliOutput, pattern: &str) -> Result<()> {
    verify_output_matches(output, &compile(pattern)?)
}

/// Same as [`verify_output_contains_regex`] with a compiled pattern.
pub fn verify_output_matches(output: &CliOutput, regex: &Regex) -> Result<()> {
    if output.lines().iter().any(|line| regex.is_match(line)) {
        return Ok(());
    }
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "Pattern `{}` not found in {} lines of output",
            regex.as_str(),
            output.lines().len()
        );
    }
    Err(VerificationError::PatternNotFound {
        pattern: regex.as_str().to_string(),
    })
}

/// Assert a `CYBER balances:` summary line, e.g. `liquid:  0.0000 CYBER`.
///
/// `amount` is the literal text the client prints after the label.
pub fn verify_account_balance(
    output: &CliOutput,
    kind: BalanceKind,
    amount: &str,
) -> Result<()> {
    verify_output_contains_regex(
        output,
        &format!("[ ]+{}:[ ]+{}", kind.label(), regex::escape(amount)),
    )
}

/// [`verify_account_balance`] with a typed amount.
pub fn verify_account_amount(
    output: &CliOutput,
    kind: BalanceKind,
    amount: CyberAmount,
) -> Result<()> {
    verify_account_balance(output, kind, &amount.to_string())
}

/// Assert that `permission` is held by `key` with weight 1 and threshold 1.
///
/// Matches the permission tree lines of `cleos get account`:
///
/// ```text
///      owner     1:    1 GLS6Tvw3...
/// ```
pub fn verify_authority(output: &CliOutput, permission: &str, key: &str) -> Result<()> {
    verify_output_contains_regex(
        output,
        &format!(
            "[ ]+{}[ ]+1:[ ]+1 {}",
            regex::escape(permission),
            regex::escape(key)
        ),
    )
}

/// Assert that a `cyber.stake::create` action for `symbol` was pushed.
pub fn verify_stake_created(output: &CliOutput, symbol: &str) -> Result<()> {
    verify_output_contains_regex(
        output,
        &format!(
            r#"#[ ]+cyber\.stake <= cyber\.stake::create[ ]+\{{"token_symbol":"{}"#,
            regex::escape(symbol)
        ),
    )
}

/// Verify the printout of a freshly created account.
///
/// Both default permissions must be held by `key` and every summary
/// balance must be zero. All unmet expectations are reported together.
pub fn verify_get_new_account(output: &CliOutput, key: &str) -> Result<()> {
    let mut errors = Vec::new();

    for permission in DEFAULT_PERMISSIONS {
        if let Err(e) = verify_authority(output, permission, key) {
            errors.push(e);
        }
    }

    for kind in BalanceKind::ALL {
        if let Err(e) = verify_account_amount(output, kind, CyberAmount::ZERO) {
            errors.push(e);
        }
    }

    VerificationError::collect(errors)
}
