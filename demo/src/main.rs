//! FIDES Consent Ledger — Demo CLI
//!
//! Runs one or both ledger walk-throughs against real components: the
//! standard access policy, the SHA-256 hash-chained audit log, and either
//! the system clock or a hand-advanced one.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- sharing-flow
//!   cargo run -p demo -- expiry
//!   cargo run -p demo -- --config fides.toml run-all

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fides_core::config::LedgerConfig;

mod scenarios;

use scenarios::{expiry, sharing_flow};

// ── CLI definition ────────────────────────────────────────────────────────────

/// FIDES — consent- and access-control ledger demo.
///
/// Each subcommand walks a slice of the ledger's behavior: registration,
/// consent lifecycle, the authorization predicate, audit logging, and
/// reward accrual.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "FIDES consent ledger demo",
    long_about = "Runs FIDES consent ledger scenarios showing consent lifecycle,\n\
                  lazy expiration, audit chain integrity, and reward accounting."
)]
struct Cli {
    /// Optional TOML config overriding the reward unit and duration cap.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run both scenarios in sequence.
    RunAll,
    /// Scenario 1: the full sharing flow (grant, access, revoke, claim).
    SharingFlow,
    /// Scenario 2: lazy expiration on a hand-advanced clock.
    Expiry,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match fides_policy::config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Demo error: {}", e);
                std::process::exit(1);
            }
        },
        None => LedgerConfig::default(),
    };

    print_banner();

    let result = match cli.command {
        Command::RunAll => sharing_flow::run_scenario(config.clone())
            .and_then(|()| expiry::run_scenario(config)),
        Command::SharingFlow => sharing_flow::run_scenario(config),
        Command::Expiry => expiry::run_scenario(config),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("FIDES — Consent & Access-Control Ledger");
    println!("Healthcare Data Sharing Demo");
    println!("=======================================");
    println!();
    println!("Authorization predicate per access request:");
    println!("  [1] A consent record must exist for (patient, provider)");
    println!("  [2] Consent must currently be granted (not revoked)");
    println!("  [3] The grant must be unexpired at request time (lazy check)");
    println!("  [4] The data type must be permitted under the grant's access type");
    println!("  [5] On success: audit append + reward credit + key return, atomically");
    println!();
}
