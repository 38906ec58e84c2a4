// Common fixtures for CLI output verification tests
//
// Captured `cleos get account` printouts and a throwaway contracts
// directory laid out like the system contracts build.

#![allow(dead_code)]

use std::path::Path;

use cyber_tck::CliOutput;
use tempfile::TempDir;

/// Key both permissions of the test accounts are bound to.
pub const TEST_KEY: &str = "GLS5a2eDuRETEg7uy8eHbiCqGZM3wnh2pLjiXrFduLWBKVZKCkB62";

/// `cleos get account` of an account created without any stake.
pub const NEW_ACCOUNT: &str = "\
created: 2019-06-03T09:35:51.000
permissions:
     owner     1:    1 GLS5a2eDuRETEg7uy8eHbiCqGZM3wnh2pLjiXrFduLWBKVZKCkB62
        active     1:    1 GLS5a2eDuRETEg7uy8eHbiCqGZM3wnh2pLjiXrFduLWBKVZKCkB62
memory:
     staked:            0.0000 CYBER
     delegated:         0.0000 CYBER
     used:                2.66 KiB
storage:
     staked:            0.0000 CYBER
     delegated:         0.0000 CYBER
     used:                   0 bytes
net bandwidth:
     staked:            0.0000 CYBER
     delegated:         0.0000 CYBER
     used:                   0 bytes
cpu bandwidth:
     staked:            0.0000 CYBER
     delegated:         0.0000 CYBER
     used:                   0 us

CYBER balances:
     liquid:            0.0000 CYBER
     staked:            0.0000 CYBER
     effective:         0.0000 CYBER
     unstaking:         0.0000 CYBER
     owned:             0.0000 CYBER
     recieved:          0.0000 CYBER
     provided:          0.0000 CYBER
     total:             0.0000 CYBER
";

/// `cleos get account` of an account created with an endowment: 10 CYBER
/// staked and 1 CYBER delegated per resource.
pub const ENDOWED_ACCOUNT: &str = "\
created: 2019-06-03T09:41:12.500
permissions:
     owner     1:    1 GLS5a2eDuRETEg7uy8eHbiCqGZM3wnh2pLjiXrFduLWBKVZKCkB62
        active     1:    1 GLS5a2eDuRETEg7uy8eHbiCqGZM3wnh2pLjiXrFduLWBKVZKCkB62
memory:
     staked:           10.0000 CYBER
     delegated:         1.0000 CYBER
     used:                2.66 KiB
storage:
     staked:           10.0000 CYBER
     delegated:         1.0000 CYBER
     used:                   0 bytes
net bandwidth:
     staked:           10.0000 CYBER
     delegated:         1.0000 CYBER
     used:                 148 bytes
cpu bandwidth:
     staked:           10.0000 CYBER
     delegated:         1.0000 CYBER
     used:                 311 us

CYBER balances:
     liquid:            5.0000 CYBER
     staked:           40.0000 CYBER
     effective:        40.0000 CYBER
     unstaking:         0.0000 CYBER
     owned:            45.0000 CYBER
     recieved:          4.0000 CYBER
     provided:          0.0000 CYBER
     total:            49.0000 CYBER
";

/// Parse one of the printouts above.
pub fn output(text: &str) -> CliOutput {
    CliOutput::parse(text)
}

/// Replace the first occurrence of `from` in a printout.
pub fn patched(text: &str, from: &str, to: &str) -> CliOutput {
    assert!(text.contains(from), "fixture does not contain {from:?}");
    CliOutput::parse(&text.replacen(from, to, 1))
}

/// ABI of the token contract as packaged with the build.
pub const TOKEN_ABI: &str = r#"{
    "version": "cyberway::abi/1.1",
    "types": [],
    "structs": [
        {"name": "account", "base": "", "fields": [{"name": "balance", "type": "asset"}]},
        {"name": "transfer", "base": "", "fields": [
            {"name": "from", "type": "name"},
            {"name": "to", "type": "name"},
            {"name": "quantity", "type": "asset"},
            {"name": "memo", "type": "string"}
        ]}
    ],
    "actions": [
        {"name": "transfer", "type": "transfer", "ricardian_contract": ""}
    ],
    "tables": [
        {"name": "accounts", "type": "account", "indexes": [
            {"name": "primary", "unique": true, "orders": [{"field": "balance._sym", "order": "asc"}]}
        ]}
    ]
}"#;

/// A contracts build directory that disappears with the value.
pub struct TempContracts {
    dir: TempDir,
}

impl TempContracts {
    /// Empty directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp contracts dir"),
        }
    }

    /// Root to hand to `ContractsDirectory`.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<contract>/<contract>.<ext>`.
    pub fn write(&self, contract: &str, ext: &str, content: &[u8]) {
        let dir = self.dir.path().join(contract);
        std::fs::create_dir_all(&dir).expect("create contract dir");
        std::fs::write(dir.join(format!("{contract}.{ext}")), content).expect("write artifact");
    }
}
