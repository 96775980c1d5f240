//! The authorization predicate: the ledger's central decision function.
//!
//! Evaluated fresh on every `request_data_access` call, in a fixed order:
//!
//!   1. a consent record must exist for the (patient, provider) pair
//!   2. the record must have `granted = true`
//!   3. the record must not be expired (`now > expires_at` — lazy check,
//!      no background sweep; `now == expires_at` still passes)
//!   4. the requested data type must be permitted under the grant's access
//!      type, per the `AccessPolicy`
//!
//! The predicate is pure: it reads the grant, the clock value, and the
//! policy, and produces a decision. All state mutation happens in the ledger
//! after — and only after — the predicate allows.

use std::fmt;

use chrono::{DateTime, Utc};

use fides_contracts::{
    access::DataType,
    consent::{AccessType, ConsentGrant},
};

use crate::traits::AccessPolicy;

/// Why an access request was denied.
///
/// Every variant maps to `LedgerError::Unauthorized`; the distinction exists
/// so denials carry a precise, auditable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// No consent record exists for the pair.
    NoGrant,
    /// A record exists but consent is not currently granted (unset or revoked).
    NotGranted,
    /// The grant lapsed before the request arrived.
    Expired { expired_at: DateTime<Utc> },
    /// The grant is live but does not cover the requested data type.
    TypeNotPermitted {
        access_type: AccessType,
        data_type: DataType,
    },
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::NoGrant => write!(f, "no consent grant exists"),
            Denial::NotGranted => write!(f, "consent is not granted"),
            Denial::Expired { expired_at } => {
                write!(f, "consent expired at {}", expired_at.to_rfc3339())
            }
            Denial::TypeNotPermitted {
                access_type,
                data_type,
            } => write!(
                f,
                "data type '{}' is not permitted under {:?} access",
                data_type, access_type
            ),
        }
    }
}

/// Evaluate the authorization predicate.
///
/// Returns `Ok(())` exactly when a grant exists, is granted, is unexpired at
/// `now`, and permits `data_type`. Returns the first failing check otherwise.
pub fn evaluate(
    grant: Option<&ConsentGrant>,
    now: DateTime<Utc>,
    data_type: DataType,
    policy: &dyn AccessPolicy,
) -> Result<(), Denial> {
    let grant = match grant {
        Some(grant) => grant,
        None => return Err(Denial::NoGrant),
    };

    if !grant.granted {
        return Err(Denial::NotGranted);
    }

    if grant.is_expired(now) {
        return Err(Denial::Expired {
            expired_at: grant.expires_at,
        });
    }

    if !policy.permits(grant.access_type, data_type) {
        return Err(Denial::TypeNotPermitted {
            access_type: grant.access_type,
            data_type,
        });
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    /// A policy mirroring the standard matrix shape: Full permits everything,
    /// None nothing, Read a fixed subset.
    struct MatrixPolicy;

    impl AccessPolicy for MatrixPolicy {
        fn permits(&self, access_type: AccessType, data_type: DataType) -> bool {
            match access_type {
                AccessType::None => false,
                AccessType::Full => true,
                AccessType::Read => matches!(
                    data_type,
                    DataType::Demographics | DataType::VitalSigns | DataType::LabResults
                ),
            }
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn live_grant(access_type: AccessType) -> ConsentGrant {
        ConsentGrant {
            granted: true,
            access_type,
            granted_at: now() - Duration::days(1),
            expires_at: now() + Duration::days(29),
        }
    }

    #[test]
    fn missing_grant_is_denied() {
        let result = evaluate(None, now(), DataType::MedicalHistory, &MatrixPolicy);
        assert_eq!(result, Err(Denial::NoGrant));
    }

    #[test]
    fn revoked_grant_is_denied() {
        let grant = ConsentGrant::unset();
        let result = evaluate(Some(&grant), now(), DataType::Demographics, &MatrixPolicy);
        assert_eq!(result, Err(Denial::NotGranted));
    }

    #[test]
    fn expired_grant_is_denied_lazily() {
        let mut grant = live_grant(AccessType::Full);
        grant.expires_at = now() - Duration::seconds(1);

        let result = evaluate(Some(&grant), now(), DataType::MedicalHistory, &MatrixPolicy);
        assert_eq!(
            result,
            Err(Denial::Expired {
                expired_at: grant.expires_at
            })
        );
    }

    #[test]
    fn grant_is_valid_through_its_final_instant() {
        let mut grant = live_grant(AccessType::Full);
        grant.expires_at = now();

        // now == expires_at must pass; expiry is strict.
        let result = evaluate(Some(&grant), now(), DataType::MedicalHistory, &MatrixPolicy);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn full_access_permits_every_data_type() {
        let grant = live_grant(AccessType::Full);
        for data_type in DataType::ALL {
            assert_eq!(
                evaluate(Some(&grant), now(), data_type, &MatrixPolicy),
                Ok(()),
                "full access must permit {}",
                data_type
            );
        }
    }

    #[test]
    fn read_access_rejects_sensitive_types() {
        let grant = live_grant(AccessType::Read);

        assert_eq!(
            evaluate(Some(&grant), now(), DataType::Demographics, &MatrixPolicy),
            Ok(())
        );
        assert_eq!(
            evaluate(Some(&grant), now(), DataType::MedicalHistory, &MatrixPolicy),
            Err(Denial::TypeNotPermitted {
                access_type: AccessType::Read,
                data_type: DataType::MedicalHistory,
            })
        );
    }

    #[test]
    fn checks_run_in_declared_order() {
        // A grant that is both revoked and expired reports NotGranted —
        // the granted check runs before the expiration check.
        let mut grant = ConsentGrant::unset();
        grant.expires_at = now() - Duration::days(1);

        let result = evaluate(Some(&grant), now(), DataType::Demographics, &MatrixPolicy);
        assert_eq!(result, Err(Denial::NotGranted));
    }

    #[test]
    fn denial_display_names_the_data_type() {
        let denial = Denial::TypeNotPermitted {
            access_type: AccessType::Read,
            data_type: DataType::GeneticData,
        };
        let msg = denial.to_string();
        assert!(msg.contains("genetic_data"));
        assert!(msg.contains("Read"));
    }
}
