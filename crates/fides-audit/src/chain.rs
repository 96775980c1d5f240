//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! The byte layout fed to SHA-256 is spelled out below so every hashed
//! field is visible at a glance.
//!
//! Hash input layout (bytes, in order):
//!   1. ledger_id as UTF-8 bytes
//!   2. sequence as 8-byte little-endian
//!   3. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   4. canonical JSON of record (serde_json with no pretty-printing)

use sha2::{Digest, Sha256};

use fides_contracts::{access::AccessRecord, audit::AuditEvent};

/// Compute the SHA-256 hash for a single audit event.
///
/// The digest covers everything that pins the event down: which ledger
/// produced it, where it sits in the chain, the hash it links back to, and
/// the access record itself.
///
/// The result is 64 lowercase hex characters.
///
/// # Panics
///
/// Panics if `record` fails JSON serialization, which a well-formed
/// `AccessRecord` never does.
pub fn hash_event(ledger_id: &str, sequence: u64, record: &AccessRecord, prev_hash: &str) -> String {
    let record_json =
        serde_json::to_vec(record).expect("AccessRecord must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(ledger_id.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&record_json);

    hex::encode(hasher.finalize())
}

/// Check that a slice of events forms an unbroken hash chain.
///
/// Two conditions must hold for every event: its `prev_hash` must equal the
/// `this_hash` of the event before it (`GENESIS_HASH` for event 0), and its
/// `this_hash` must survive a fresh recomputation over its own fields. A
/// single mismatch anywhere fails the whole chain; a log with no events
/// passes trivially.
pub fn verify_chain(events: &[AuditEvent]) -> bool {
    let mut expected_prev: &str = AuditEvent::GENESIS_HASH;

    for event in events {
        if event.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_event(
            &event.ledger_id,
            event.sequence,
            &event.record,
            &event.prev_hash,
        );
        if event.this_hash != recomputed {
            return false;
        }

        expected_prev = &event.this_hash;
    }

    true
}
