#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//! Account printout checks against captured `cleos get account` output

mod common;

use common::{output, patched, ENDOWED_ACCOUNT, NEW_ACCOUNT, TEST_KEY};
use cyber_tck::prelude::*;

#[test]
fn test_new_account_passes_composite_check() {
    let _ = env_logger::builder().is_test(true).try_init();

    verify_get_new_account(&output(NEW_ACCOUNT), TEST_KEY).unwrap();
}

#[test]
fn test_new_account_with_wrong_key_reports_both_permissions() {
    let err = verify_get_new_account(&output(NEW_ACCOUNT), "GLS7otherkey").unwrap_err();

    match err {
        VerificationError::Multiple(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].to_string().contains("owner"));
            assert!(errors[1].to_string().contains("active"));
        }
        other => panic!("expected both permissions to fail, got: {other}"),
    }
}

#[test]
fn test_new_account_with_nonzero_balance_fails() {
    let funded = patched(
        NEW_ACCOUNT,
        "liquid:            0.0000 CYBER",
        "liquid:            1.0000 CYBER",
    );
    let err = verify_get_new_account(&funded, TEST_KEY).unwrap_err();
    assert!(err.to_string().contains("liquid"));
}

#[test]
fn test_endowed_account_balances() {
    let account = output(ENDOWED_ACCOUNT);

    assert_eq!(effective_balance(&account).unwrap(), Some(400_000));
    assert_eq!(received_balance(&account).unwrap(), Some(40_000));
    for category in ResourceCategory::ALL {
        assert_eq!(resource_staked(&account, category).unwrap(), Some(100_000));
        assert_eq!(resource_received(&account, category).unwrap(), Some(10_000));
    }

    verify_account_amount(&account, BalanceKind::Total, "49.0000 CYBER".parse().unwrap())
        .unwrap();
    verify_account_balance(&account, BalanceKind::Owned, "45.0000 CYBER").unwrap();
}

#[test]
fn test_endowment_holds() {
    let _ = env_logger::builder().is_test(true).try_init();

    verify_resources_stake_endowment(&output(ENDOWED_ACCOUNT)).unwrap();
    verify_resources_stake_endowment(&output(NEW_ACCOUNT)).unwrap();
}

#[test]
fn test_endowment_scan_collects_every_resource() {
    let endowment = ResourceEndowment::scan(&output(ENDOWED_ACCOUNT)).unwrap();

    assert_eq!(endowment.effective, 400_000);
    assert_eq!(endowment.received, 40_000);
    assert_eq!(endowment.total_staked(), 400_000);
    assert_eq!(endowment.total_delegated(), 40_000);
    let categories: Vec<_> = endowment.resources.iter().map(|r| r.category).collect();
    assert_eq!(categories, ResourceCategory::ALL);
}

#[test]
fn test_endowment_tolerates_one_unit() {
    let rounded = patched(
        ENDOWED_ACCOUNT,
        "effective:        40.0000 CYBER",
        "effective:        40.0001 CYBER",
    );
    verify_resources_stake_endowment(&rounded).unwrap();
}

#[test]
fn test_endowment_detects_missing_stake() {
    let short = patched(
        ENDOWED_ACCOUNT,
        "effective:        40.0000 CYBER",
        "effective:        40.0002 CYBER",
    );
    let err = verify_resources_stake_endowment(&short).unwrap_err();
    assert!(matches!(
        err,
        VerificationError::EndowmentMismatch {
            aggregate: "effective",
            expected: 400_000,
            actual: 400_002,
        }
    ));
}

#[test]
fn test_endowment_detects_received_mismatch() {
    let skewed = patched(
        ENDOWED_ACCOUNT,
        "recieved:          4.0000 CYBER",
        "recieved:          5.0000 CYBER",
    );
    let err = verify_resources_stake_endowment(&skewed).unwrap_err();
    assert_eq!(
        err.to_string(),
        "recieved balance mismatch: expected 40000 (sum of components), got 50000"
    );
}

#[test]
fn test_endowment_requires_every_resource_block() {
    let without_cpu = patched(ENDOWED_ACCOUNT, "cpu bandwidth:", "cpu:");
    let err = verify_resources_stake_endowment(&without_cpu).unwrap_err();
    match err {
        VerificationError::FieldNotFound { section, label } => {
            assert_eq!(section, "cpu bandwidth");
            assert_eq!(label, "staked");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_stake_created_event() {
    let push = output(
        r#"executed transaction: 3a5d1d4f8b0e6e7c4b7c2b0d  128 bytes  412 us
#   cyber.stake <= cyber.stake::create          {"token_symbol":"4,CYBER","max_proxies":[30,10,3,1],"depriving_window":2592000}
warning: transaction executed locally, but may not be confirmed by the network yet"#,
    );
    verify_stake_created(&push, "4,CYBER").unwrap();
    assert!(verify_stake_created(&push, "3,GOLOS").is_err());
    verify_output_contains(&push, "executed transaction").unwrap();
}
