//! # fides-policy
//!
//! The data-type permission matrix and TOML configuration loading for the
//! FIDES consent ledger.
//!
//! ## Overview
//!
//! [`StandardAccessPolicy`] implements the
//! [`AccessPolicy`](fides_core::traits::AccessPolicy) trait with a
//! compile-time exhaustive matrix: `full` grants cover every data type,
//! `read` grants cover only the fixed non-sensitive subset, `none` covers
//! nothing. [`config`] loads the ledger's operational knobs from TOML.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use fides_policy::{StandardAccessPolicy, config};
//!
//! let policy = StandardAccessPolicy;
//! let cfg = config::from_file(Path::new("fides.toml"))?;
//! // Pass both to `fides_core::Ledger::new(...)`.
//! ```

pub mod config;
pub mod matrix;

pub use matrix::StandardAccessPolicy;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use fides_contracts::{access::DataType, consent::AccessType};
    use fides_core::config::LedgerConfig;
    use fides_core::traits::AccessPolicy;

    use crate::{config, StandardAccessPolicy};

    // ── Permission matrix ─────────────────────────────────────────────────────

    /// The exact non-sensitive subset covered by `read` access.
    const READ_SUBSET: [DataType; 5] = [
        DataType::Demographics,
        DataType::VitalSigns,
        DataType::Immunizations,
        DataType::Allergies,
        DataType::LabResults,
    ];

    #[test]
    fn none_permits_nothing() {
        let policy = StandardAccessPolicy;
        for data_type in DataType::ALL {
            assert!(
                !policy.permits(AccessType::None, data_type),
                "none access must not permit {}",
                data_type
            );
        }
    }

    #[test]
    fn full_permits_everything() {
        let policy = StandardAccessPolicy;
        for data_type in DataType::ALL {
            assert!(
                policy.permits(AccessType::Full, data_type),
                "full access must permit {}",
                data_type
            );
        }
    }

    #[test]
    fn read_permits_exactly_the_non_sensitive_subset() {
        let policy = StandardAccessPolicy;
        for data_type in DataType::ALL {
            let expected = READ_SUBSET.contains(&data_type);
            assert_eq!(
                policy.permits(AccessType::Read, data_type),
                expected,
                "read access decision for {} must be {}",
                data_type,
                expected
            );
        }
    }

    // ── Config loading ────────────────────────────────────────────────────────

    #[test]
    fn empty_config_yields_defaults() {
        let cfg = config::from_toml_str("").unwrap();
        assert_eq!(cfg, LedgerConfig::default());
        assert_eq!(cfg.reward_unit, 100);
        assert_eq!(cfg.max_duration_days, None);
    }

    #[test]
    fn config_fields_override_defaults() {
        let cfg = config::from_toml_str(
            r#"
            reward_unit = 250
            max_duration_days = 365
        "#,
        )
        .unwrap();

        assert_eq!(cfg.reward_unit, 250);
        assert_eq!(cfg.max_duration_days, Some(365));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let result = config::from_toml_str("this is not valid toml ][[[");

        match result {
            Err(fides_contracts::error::LedgerError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse ledger config TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn wrong_field_type_is_a_config_error() {
        let result = config::from_toml_str(r#"reward_unit = "lots""#);
        assert!(matches!(
            result,
            Err(fides_contracts::error::LedgerError::ConfigError { .. })
        ));
    }
}
