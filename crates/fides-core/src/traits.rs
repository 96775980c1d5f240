//! Core trait definitions for the FIDES ledger.
//!
//! These three traits are the ledger's seams:
//!
//! - `Clock`        — the external time source (one reading per operation)
//! - `AccessPolicy` — the data-type permission matrix (pure, deterministic)
//! - `AuditSink`    — the append-only access log (records every authorized access)
//!
//! The `Ledger` wires them together and serializes every operation behind a
//! single lock, so sink implementations never see concurrent calls.

use chrono::{DateTime, Utc};

use fides_contracts::{
    access::{AccessRecord, DataType},
    audit::AuditEvent,
    consent::AccessType,
    error::LedgerResult,
};

/// The external time source.
///
/// The ledger reads the clock exactly once per operation, so a single
/// transaction is internally time-consistent. Implementations must be
/// monotonically non-decreasing.
pub trait Clock: Send + Sync {
    /// The current time (UTC).
    fn now(&self) -> DateTime<Utc>;
}

/// A shared clock handle reads through to the inner clock. Lets tests and
/// demos keep an `Arc<ManualClock>` to advance while the ledger owns a boxed
/// clone of the same handle.
impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The data-type permission matrix.
///
/// Implementations are **trusted** and must be pure and deterministic:
/// the same (access_type, data_type) pair always yields the same answer.
/// The standard implementation is a compile-time exhaustive match, so adding
/// a `DataType` variant forces a policy decision.
pub trait AccessPolicy: Send + Sync {
    /// True when `data_type` may be shared under a grant of `access_type`.
    fn permits(&self, access_type: AccessType, data_type: DataType) -> bool;
}

/// The append-only access log.
///
/// Every authorized access produces exactly one record; denied requests
/// produce none. Records are never modified or deleted. The sink is owned by
/// the ledger's single-writer state, so methods take `&mut self` and need no
/// internal synchronization.
pub trait AuditSink: Send {
    /// Append one access record and return the global sequence index it was
    /// assigned. Indices start at 0 and never repeat or skip.
    fn append(&mut self, record: &AccessRecord) -> LedgerResult<u64>;

    /// The number of events appended so far.
    fn len(&self) -> u64;

    /// True when no events have been appended.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The event at `index`, or `IndexOutOfRange` when `index >= len()`.
    fn entry(&self, index: u64) -> LedgerResult<AuditEvent>;

    /// True when the stored log passes integrity verification.
    fn verify_integrity(&self) -> bool;
}
