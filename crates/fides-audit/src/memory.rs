//! In-memory implementation of `AuditSink`.
//!
//! `InMemoryAuditLog` is the reference implementation of the `AuditSink`
//! trait. The ledger owns it inside its single-writer state, so the log
//! needs no internal synchronization: appends arrive strictly one at a time,
//! already in the global operation order.
//!
//! Use `export_log()` at any point to obtain a sealed `AuditLogExport`, and
//! `verify_integrity()` to confirm the chain has not been tampered with in
//! memory.

use chrono::Utc;
use tracing::info;

use fides_contracts::{
    access::AccessRecord,
    audit::AuditEvent,
    error::{LedgerError, LedgerResult},
    identity::LedgerId,
};
use fides_core::traits::AuditSink;

use crate::{
    chain::{hash_event, verify_chain},
    export::AuditLogExport,
};

/// An in-memory, append-only access log backed by a SHA-256 hash chain.
pub struct InMemoryAuditLog {
    ledger_id: String,

    /// All events appended so far, in sequence order.
    events: Vec<AuditEvent>,

    /// The `this_hash` of the last appended event, or `GENESIS_HASH` before
    /// any event has been appended.
    last_hash: String,
}

impl InMemoryAuditLog {
    /// Create an empty log for the given ledger.
    ///
    /// `last_hash` starts at `AuditEvent::GENESIS_HASH` so the first event's
    /// `prev_hash` is automatically correct.
    pub fn new(ledger_id: LedgerId) -> Self {
        Self {
            ledger_id: ledger_id.to_string(),
            events: Vec::new(),
            last_hash: AuditEvent::GENESIS_HASH.to_string(),
        }
    }

    /// Export a sealed snapshot of all events appended so far.
    ///
    /// The `terminal_hash` is the `this_hash` of the last event, or an empty
    /// string when no events have been appended.
    pub fn export_log(&self) -> AuditLogExport {
        let terminal_hash = self
            .events
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        info!(
            ledger_id = %self.ledger_id,
            event_count = self.events.len(),
            terminal_hash = %terminal_hash,
            "access log exported"
        );

        AuditLogExport {
            ledger_id: self.ledger_id.clone(),
            events: self.events.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    #[cfg(test)]
    pub(crate) fn events_mut(&mut self) -> &mut Vec<AuditEvent> {
        &mut self.events
    }
}

impl AuditSink for InMemoryAuditLog {
    /// Append one access record to the hash chain and return its sequence.
    ///
    /// Computes `this_hash` from (ledger_id, sequence, prev_hash, record),
    /// wraps the record in an `AuditEvent`, appends it, then advances
    /// `last_hash`.
    fn append(&mut self, record: &AccessRecord) -> LedgerResult<u64> {
        let sequence = self.events.len() as u64;
        let prev_hash = self.last_hash.clone();
        let this_hash = hash_event(&self.ledger_id, sequence, record, &prev_hash);

        self.events.push(AuditEvent {
            sequence,
            ledger_id: self.ledger_id.clone(),
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        self.last_hash = this_hash;

        Ok(sequence)
    }

    fn len(&self) -> u64 {
        self.events.len() as u64
    }

    /// The event at `index`, cloned out of the chain.
    fn entry(&self, index: u64) -> LedgerResult<AuditEvent> {
        self.events
            .get(index as usize)
            .cloned()
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                len: self.events.len() as u64,
            })
    }

    /// Delegates to `verify_chain`, which checks both prev-hash linkage and
    /// hash correctness for every event.
    fn verify_integrity(&self) -> bool {
        verify_chain(&self.events)
    }
}
