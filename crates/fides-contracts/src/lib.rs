//! # fides-contracts
//!
//! Shared types, records, and the error taxonomy for the FIDES consent
//! ledger.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod access;
pub mod audit;
pub mod consent;
pub mod error;
pub mod identity;
pub mod reward;

#[cfg(test)]
mod tests {
    use super::*;
    use access::DataType;
    use chrono::DateTime;
    use consent::{AccessType, ConsentGrant};
    use error::LedgerError;
    use identity::LedgerId;

    // ── AccessType / DataType serde ──────────────────────────────────────────

    #[test]
    fn access_type_uses_snake_case_wire_names() {
        assert_eq!(serde_json::to_string(&AccessType::None).unwrap(), r#""none""#);
        assert_eq!(serde_json::to_string(&AccessType::Read).unwrap(), r#""read""#);
        assert_eq!(serde_json::to_string(&AccessType::Full).unwrap(), r#""full""#);
    }

    #[test]
    fn data_type_round_trips_through_serde() {
        for data_type in DataType::ALL {
            let json = serde_json::to_string(&data_type).unwrap();
            let decoded: DataType = serde_json::from_str(&json).unwrap();
            assert_eq!(data_type, decoded);
        }
    }

    #[test]
    fn data_type_display_matches_serde_name() {
        // Display, FromStr, and serde must agree on the wire name.
        for data_type in DataType::ALL {
            let json = serde_json::to_string(&data_type).unwrap();
            assert_eq!(json, format!("\"{}\"", data_type));

            let parsed: DataType = data_type.as_str().parse().unwrap();
            assert_eq!(parsed, data_type);
        }
    }

    #[test]
    fn data_type_from_str_rejects_unknown_names() {
        let err = "blood_type".parse::<DataType>().unwrap_err();
        assert!(err.contains("blood_type"));
    }

    // ── ConsentGrant ─────────────────────────────────────────────────────────

    #[test]
    fn unset_grant_is_the_default() {
        let grant = ConsentGrant::default();
        assert!(!grant.granted);
        assert_eq!(grant.access_type, AccessType::None);
        assert_eq!(grant.granted_at, DateTime::UNIX_EPOCH);
        assert_eq!(grant.expires_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn expiration_boundary_is_inclusive() {
        let granted_at = DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let expires_at = granted_at + chrono::Duration::days(30);
        let grant = ConsentGrant {
            granted: true,
            access_type: AccessType::Full,
            granted_at,
            expires_at,
        };

        // Valid through the final instant; expired one second later.
        assert!(!grant.is_expired(expires_at));
        assert!(grant.is_expired(expires_at + chrono::Duration::seconds(1)));
    }

    // ── LedgerId ─────────────────────────────────────────────────────────────

    #[test]
    fn ledger_id_new_produces_unique_values() {
        let ids: Vec<LedgerId> = (0..100).map(|_| LedgerId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── LedgerError display messages ─────────────────────────────────────────

    #[test]
    fn error_already_registered_display() {
        let err = LedgerError::AlreadyRegistered {
            id: "ST1PATIENT".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("already registered"));
        assert!(msg.contains("ST1PATIENT"));
    }

    #[test]
    fn error_invalid_duration_display() {
        let err = LedgerError::InvalidDuration { days: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn error_no_active_grant_display() {
        let err = LedgerError::NoActiveGrant {
            patient: "ST1PATIENT".to_string(),
            provider: "ST2PROVIDER".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ST1PATIENT"));
        assert!(msg.contains("ST2PROVIDER"));
    }

    #[test]
    fn error_unauthorized_display() {
        let err = LedgerError::Unauthorized {
            reason: "consent expired".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("access denied"));
        assert!(msg.contains("consent expired"));
    }

    #[test]
    fn error_index_out_of_range_display() {
        let err = LedgerError::IndexOutOfRange { index: 5, len: 2 };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn error_nothing_to_claim_display() {
        let err = LedgerError::NothingToClaim {
            provider: "ST2PROVIDER".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("no accrued reward"));
        assert!(msg.contains("ST2PROVIDER"));
    }
}
