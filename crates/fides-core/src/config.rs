//! Operational configuration for the ledger.
//!
//! `LedgerConfig` holds the policy constants that are operational knobs
//! rather than compile-time facts. The TOML loader lives in `fides-policy`;
//! this crate only defines the shape and its defaults.

use serde::{Deserialize, Serialize};

/// The fixed reward credited per authorized access when no config overrides it.
pub const DEFAULT_REWARD_UNIT: u64 = 100;

/// Operational knobs for a `Ledger` instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Units credited to a provider's reward account per authorized access.
    pub reward_unit: u64,

    /// Optional upper bound on `grant_consent` durations, in days.
    /// `None` accepts any positive duration.
    pub max_duration_days: Option<i64>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            reward_unit: DEFAULT_REWARD_UNIT,
            max_duration_days: None,
        }
    }
}
