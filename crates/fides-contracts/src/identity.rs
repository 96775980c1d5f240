//! Identity records for the two registered roles: patients and providers.
//!
//! Identifiers are opaque principals supplied by the caller (an address, a
//! DID, an account principal — the ledger does not interpret them). Records
//! are created once at registration and never deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque principal identifying a patient.
///
/// Example: PatientId("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub String);

impl PatientId {
    /// Construct a patient id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque principal identifying a healthcare provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderId(pub String);

impl ProviderId {
    /// Construct a provider id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a single ledger instance.
///
/// Stamped into every audit event so exported logs can be attributed to the
/// ledger that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerId(pub uuid::Uuid);

impl LedgerId {
    /// Create a new, unique ledger ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for LedgerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered patient.
///
/// `data_hash` stays `None` until the patient publishes a reference to their
/// externally stored encrypted data. The ledger never holds medical data
/// itself — only this opaque reference and the key material needed to share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// The patient's principal.
    pub id: PatientId,
    /// Always true once the record exists; kept for snapshot fidelity.
    pub registered: bool,
    /// Opaque reference to off-ledger encrypted data, if published.
    pub data_hash: Option<String>,
    /// Opaque key material returned to authorized providers.
    pub encryption_key: Vec<u8>,
    /// Wall-clock time (UTC) the patient registered.
    pub registered_at: DateTime<Utc>,
}

/// A registered healthcare provider.
///
/// `verified` and `rating` are mutated only by a privileged external
/// authority, which is outside the ledger core; the fields are carried so
/// snapshots are complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// The provider's principal.
    pub id: ProviderId,
    /// Display name, e.g. "Test Hospital".
    pub name: String,
    /// Whether an external authority has verified this provider. Default false.
    pub verified: bool,
    /// Non-negative reputation rating. Default 0.
    pub rating: u32,
    /// Wall-clock time (UTC) the provider registered.
    pub registered_at: DateTime<Utc>,
}
