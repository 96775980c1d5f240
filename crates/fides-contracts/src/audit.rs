//! Audit event types shared between the ledger core and audit sinks.
//!
//! `AuditEvent` is the hash-chained wrapper around an `AccessRecord`. The
//! type lives here — not in the audit crate — because the ledger core reads
//! events back out of the sink (`get_access_logs`); the hashing and chain
//! verification logic stays with the sink implementation.

use serde::{Deserialize, Serialize};

use crate::access::AccessRecord;

/// A single entry in the append-only access log.
///
/// Each event commits to the previous event via `prev_hash`, forming an
/// append-only SHA-256 chain. Modifying any field — including those of the
/// embedded `record` — invalidates `this_hash` and every subsequent
/// `prev_hash`, which chain verification detects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Monotonically increasing global position in the log, starting at 0.
    pub sequence: u64,

    /// String form of the `LedgerId` that produced this event.
    pub ledger_id: String,

    /// The immutable access record.
    pub record: AccessRecord,

    /// SHA-256 hash (hex) of the previous event, or `GENESIS_HASH` for the
    /// first event.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this event's canonical content.
    pub this_hash: String,
}

impl AuditEvent {
    /// The sentinel `prev_hash` used for the first event in every chain.
    ///
    /// 64 hex zeros — a value that can never be the SHA-256 of real data,
    /// making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}
