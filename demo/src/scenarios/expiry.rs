//! Scenario 2: lazy expiration.
//!
//! Runs the ledger on a hand-advanced clock to show that expiration is a
//! read-time decision: the stored grant is never pruned, stays valid through
//! its final instant, and is rejected one second later — while a repeat
//! grant reuses the same slot.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use fides_audit::InMemoryAuditLog;
use fides_contracts::{
    access::DataType,
    consent::AccessType,
    error::{LedgerError, LedgerResult},
    identity::{LedgerId, PatientId, ProviderId},
};
use fides_core::{clock::ManualClock, config::LedgerConfig, Ledger};
use fides_policy::StandardAccessPolicy;

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Run the expiration walk-through on a deterministic clock.
pub fn run_scenario(config: LedgerConfig) -> LedgerResult<()> {
    println!("Scenario 2: Lazy Expiration");
    println!("---------------------------");

    let clock = Arc::new(ManualClock::new(start()));
    let ledger = Ledger::new(
        Box::new(StandardAccessPolicy),
        Box::new(InMemoryAuditLog::new(LedgerId::new())),
        Box::new(clock.clone()),
        config,
    );

    let patient = PatientId::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    let provider = ProviderId::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");

    ledger.register_patient(patient.clone(), b"0123456789abcdef0123456789abcdef".to_vec())?;
    ledger.register_provider(provider.clone(), "Test Hospital")?;

    let grant = ledger.grant_consent(&patient, &provider, AccessType::Read, 30)?;
    println!(
        "  Read consent granted on {} until {}",
        grant.granted_at.to_rfc3339(),
        grant.expires_at.to_rfc3339()
    );

    // Day 30, the final instant: still valid.
    clock.advance(Duration::days(30));
    ledger.request_data_access(&patient, &provider, DataType::VitalSigns)?;
    println!("  Day 30 (final instant): access to vital_signs authorized.");

    // One second later: rejected lazily, at read time.
    clock.advance(Duration::seconds(1));
    match ledger.request_data_access(&patient, &provider, DataType::VitalSigns) {
        Err(LedgerError::Unauthorized { reason }) => {
            println!("  One second later: {}", reason);
        }
        other => println!("  UNEXPECTED: {:?}", other),
    }

    // The store still holds the lapsed grant verbatim.
    let status = ledger.check_consent_status(&patient, &provider);
    println!(
        "  Stored grant unchanged: granted = {}, expires_at = {}",
        status.granted,
        status.expires_at.to_rfc3339()
    );

    // A fresh grant reuses the pair's slot.
    let renewed = ledger.grant_consent(&patient, &provider, AccessType::Read, 7)?;
    println!(
        "  Consent re-granted until {}",
        renewed.expires_at.to_rfc3339()
    );
    ledger.request_data_access(&patient, &provider, DataType::VitalSigns)?;
    println!("  Access authorized again under the renewed grant.");

    println!();
    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
