//! The error taxonomy for the FIDES consent ledger.
//!
//! All fallible operations return `LedgerResult<T>`. Every variant is a
//! local, expected, fully-typed outcome — a failed precondition leaves the
//! ledger byte-for-byte unchanged, so an `Err` is itself an atomic no-op
//! commit.

use thiserror::Error;

/// The unified error type for the FIDES ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The identifier already has a record in the identity registry.
    #[error("identity '{id}' is already registered")]
    AlreadyRegistered { id: String },

    /// The identifier has no record in the identity registry.
    #[error("identity '{id}' is not registered")]
    NotRegistered { id: String },

    /// A consent duration was zero, negative, or above the configured cap.
    #[error("invalid consent duration of {days} days")]
    InvalidDuration { days: i64 },

    /// No consent record exists for the (patient, provider) pair.
    #[error("no consent record exists for patient '{patient}' and provider '{provider}'")]
    NoActiveGrant { patient: String, provider: String },

    /// The authorization predicate rejected a data access request.
    #[error("access denied: {reason}")]
    Unauthorized { reason: String },

    /// The provider's accrued reward balance is zero.
    #[error("provider '{provider}' has no accrued reward to claim")]
    NothingToClaim { provider: String },

    /// An access-log read addressed a position past the end of the log.
    #[error("access log index {index} is out of range (length {len})")]
    IndexOutOfRange { index: u64, len: u64 },

    /// The audit sink could not persist an access record.
    ///
    /// This is treated as fatal for the requesting operation — an access
    /// that cannot be audited is not authorized.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the FIDES crates.
pub type LedgerResult<T> = Result<T, LedgerError>;
