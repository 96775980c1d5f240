//! The sealed, exportable form of an access log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fides_contracts::audit::AuditEvent;

/// A sealed snapshot of one ledger's access log.
///
/// Produced by `InMemoryAuditLog::export_log()`. The `terminal_hash` is the
/// `this_hash` of the last event and serves as a compact commitment to the
/// entire log: any regulator holding it can later detect a rewritten export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogExport {
    /// The ledger whose accesses are recorded here.
    pub ledger_id: String,

    /// All audit events in chain order (sequence 0 first).
    pub events: Vec<AuditEvent>,

    /// Wall-clock time (UTC) the log was exported.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last event.  Empty string if the log is empty.
    pub terminal_hash: String,
}
