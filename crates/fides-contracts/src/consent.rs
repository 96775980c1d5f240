//! Consent grant types: the authorization record a patient issues to a provider.
//!
//! Exactly one `ConsentGrant` slot exists per (patient, provider) pair.
//! A new grant overwrites the slot in place; revocation overwrites it with
//! the revoked state but never removes it. Grant history lives only in the
//! audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The access level a consent grant confers.
///
/// `Full` permits every data type; `Read` permits only the fixed
/// non-sensitive subset defined by the access policy; `None` permits nothing
/// and is the access type of unset and revoked grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    None,
    Read,
    Full,
}

/// A single consent record for one (patient, provider) pair.
///
/// Invariant: when `granted` is true, `expires_at > granted_at`.
///
/// Expiration is a derived, read-time fact — a grant with
/// `granted = true` and `expires_at` in the past is stored unchanged and
/// rejected lazily by the authorization predicate. It behaves like a revoked
/// grant for authorization purposes but remains distinguishable via the
/// stored fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentGrant {
    /// Whether consent is currently granted (ignoring expiration).
    pub granted: bool,
    /// The access level conferred. `None` when unset or revoked.
    pub access_type: AccessType,
    /// When the grant was issued. Kept across revocation as a record of the
    /// original grant time.
    pub granted_at: DateTime<Utc>,
    /// When the grant lapses. The Unix epoch is the "no expiry recorded"
    /// sentinel used by unset and revoked grants.
    pub expires_at: DateTime<Utc>,
}

impl ConsentGrant {
    /// The unset state: what `check_consent_status` reports for a pair that
    /// has never had a grant.
    pub fn unset() -> Self {
        Self {
            granted: false,
            access_type: AccessType::None,
            granted_at: DateTime::UNIX_EPOCH,
            expires_at: DateTime::UNIX_EPOCH,
        }
    }

    /// True when the grant's expiry lies strictly in the past.
    ///
    /// `now == expires_at` is NOT expired — the grant is valid through its
    /// final instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

impl Default for ConsentGrant {
    fn default() -> Self {
        Self::unset()
    }
}
