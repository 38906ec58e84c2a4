//! cyber-verify - check captured cleos output from the shell
//!
//! Runs one verifier of the kit over output saved to a file (or piped on
//! stdin) and exits non-zero with the failure message if it does not hold.
//!
//! # Usage
//!
//! ```bash
//! # Freshly created account
//! cleos get account alice > alice.txt
//! cyber-verify --input alice.txt new-account --key GLS6Tvw3...
//!
//! # Resource stakes add up
//! cleos get account alice | cyber-verify endowment
//!
//! # Deployed code and ABI match the build
//! cleos get code cyber.token | cyber-verify contract-hash --contract cyber.token \
//!     --contracts-dir ./build/contracts
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cyber_tck::artifacts::CONTRACTS_DIR_ENV;
use cyber_tck::prelude::*;

/// cyber-verify - CLI output verification
#[derive(Parser)]
#[command(name = "cyber-verify")]
#[command(about = "Verify captured cleos output")]
#[command(version)]
struct Cli {
    /// File with the captured output (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Owner/active authority and zero balances of a new account
    NewAccount {
        /// Public key expected on both permissions
        #[arg(short, long)]
        key: String,
    },
    /// Resource stakes add up to the effective and received balances
    Endowment,
    /// One line of the balance summary
    Balance {
        /// Balance label (liquid, staked, effective, unstaking, owned, received, provided, total)
        #[arg(short, long)]
        kind: BalanceKind,
        /// Amount as printed, e.g. "10.0000 CYBER"
        #[arg(short, long)]
        amount: CyberAmount,
    },
    /// A cyber.stake::create action for a token symbol
    StakeCreated {
        /// Token symbol, e.g. "4,CYBER"
        #[arg(short, long)]
        symbol: String,
    },
    /// Output contains the SHA-256 of the contract WASM
    ContractHash {
        /// Contract account name
        #[arg(short, long)]
        contract: String,
        /// Contracts build directory (defaults to $CYBER_CONTRACTS_DIR)
        #[arg(long)]
        contracts_dir: Option<PathBuf>,
    },
    /// Output is an ABI matching the contract ABI file
    ContractAbi {
        /// Contract account name
        #[arg(short, long)]
        contract: String,
        /// Contracts build directory (defaults to $CYBER_CONTRACTS_DIR)
        #[arg(long)]
        contracts_dir: Option<PathBuf>,
    },
}

fn read_output(input: Option<&Path>, mut stdin: impl Read) -> Result<CliOutput> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read output file: {}", path.display()))?,
        None => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read output from stdin")?;
            text
        }
    };
    Ok(CliOutput::parse(&text))
}

/// `--contracts-dir` when given, `$CYBER_CONTRACTS_DIR` otherwise.
fn contracts(dir: Option<PathBuf>) -> Result<ContractsDirectory> {
    dir.map(ContractsDirectory::new)
        .or_else(ContractsDirectory::from_env)
        .with_context(|| {
            format!(
                "No contracts directory: pass --contracts-dir or set {}",
                CONTRACTS_DIR_ENV
            )
        })
}

fn run(command: Commands, output: &CliOutput) -> Result<()> {
    log::debug!("Checking {} lines of output", output.lines().len());

    match command {
        Commands::NewAccount { key } => verify_get_new_account(output, &key)?,
        Commands::Endowment => verify_resources_stake_endowment(output)?,
        Commands::Balance { kind, amount } => verify_account_amount(output, kind, amount)?,
        Commands::StakeCreated { symbol } => verify_stake_created(output, &symbol)?,
        Commands::ContractHash {
            contract,
            contracts_dir,
        } => verify_contract_hash(output, &contract, &contracts(contracts_dir)?)?,
        Commands::ContractAbi {
            contract,
            contracts_dir,
        } => verify_contract_abi(output, &contract, &contracts(contracts_dir)?)?,
    }

    Ok(())
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => {
            println!("OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = read_output(cli.input.as_deref(), std::io::stdin().lock())
        .and_then(|output| run(cli.command, &output));
    exit_code(result)
}
