//! Scenario 1: the full sharing flow.
//!
//! One patient, one provider, one grant:
//!
//!   register → grant full consent → authorized access (audited, rewarded)
//!   → revoke → denied access (nothing mutated) → claim reward → claim again
//!
//! Every authorized access lands in the hash-chained audit log; the scenario
//! finishes by verifying the chain and printing its terminal hash.

use fides_audit::InMemoryAuditLog;
use fides_contracts::{
    access::DataType,
    consent::AccessType,
    error::{LedgerError, LedgerResult},
    identity::{LedgerId, PatientId, ProviderId},
};
use fides_core::{clock::SystemClock, config::LedgerConfig, Ledger};
use fides_policy::StandardAccessPolicy;

/// Run the full sharing flow against a fresh ledger.
pub fn run_scenario(config: LedgerConfig) -> LedgerResult<()> {
    println!("Scenario 1: Full Sharing Flow");
    println!("-----------------------------");

    let ledger = Ledger::new(
        Box::new(StandardAccessPolicy),
        Box::new(InMemoryAuditLog::new(LedgerId::new())),
        Box::new(SystemClock),
        config,
    );

    let patient = PatientId::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    let provider = ProviderId::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");

    // ── Registration ─────────────────────────────────────────────────────────
    let snapshot = ledger.register_patient(patient.clone(), b"0123456789abcdef0123456789abcdef".to_vec())?;
    println!("  Patient registered at {}", snapshot.registered_at.to_rfc3339());

    let snapshot = ledger.register_provider(provider.clone(), "Test Hospital")?;
    println!("  Provider '{}' registered (verified: {}, rating: {})",
        snapshot.name, snapshot.verified, snapshot.rating);

    // A duplicate registration bounces off the one-time guard.
    match ledger.register_patient(patient.clone(), b"another-key".to_vec()) {
        Err(LedgerError::AlreadyRegistered { id }) => {
            println!("  Duplicate registration rejected for '{}'", id);
        }
        other => println!("  UNEXPECTED: {:?}", other),
    }

    // ── Consent and access ───────────────────────────────────────────────────
    let grant = ledger.grant_consent(&patient, &provider, AccessType::Full, 30)?;
    println!(
        "  Consent granted ({:?}) until {}",
        grant.access_type,
        grant.expires_at.to_rfc3339()
    );

    let approval = ledger.request_data_access(&patient, &provider, DataType::MedicalHistory)?;
    println!(
        "  Access authorized: key of {} bytes, audit index {}",
        approval.encryption_key.len(),
        approval.log_index
    );
    println!(
        "  Provider reward balance: {}",
        ledger.reward_balance(&provider)
    );

    // ── Revocation ───────────────────────────────────────────────────────────
    ledger.revoke_consent(&patient, &provider)?;
    println!("  Consent revoked.");

    match ledger.request_data_access(&patient, &provider, DataType::MedicalHistory) {
        Err(LedgerError::Unauthorized { reason }) => {
            println!("  Repeat access denied: {}", reason);
        }
        other => println!("  UNEXPECTED: {:?}", other),
    }
    println!(
        "  Audit log length unchanged at {}",
        ledger.access_log_len()
    );

    // ── Reward claim ─────────────────────────────────────────────────────────
    let receipt = ledger.claim_sharing_reward(&provider)?;
    println!("  Reward claimed: {} units", receipt.amount);

    match ledger.claim_sharing_reward(&provider) {
        Err(LedgerError::NothingToClaim { .. }) => {
            println!("  Repeat claim rejected: nothing accrued.");
        }
        other => println!("  UNEXPECTED: {:?}", other),
    }

    // ── Audit chain ──────────────────────────────────────────────────────────
    let entry = ledger.get_access_logs(0)?;
    println!(
        "  Audit[0]: {} accessed '{}' of {}",
        entry.record.provider, entry.record.data_type, entry.record.patient
    );
    println!(
        "  Audit chain intact: {}",
        ledger.verify_audit_integrity()
    );

    println!();
    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// The scenario exercises only expected paths; it must finish clean.
    #[test]
    fn test_sharing_flow_runs_clean() {
        run_scenario(LedgerConfig::default()).unwrap();
    }
}
