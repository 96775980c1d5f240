//! Reward ledger types.
//!
//! Providers accrue a fixed reward unit per authorized access and claim the
//! full balance in one operation. Partial claims do not exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-provider accrued reward state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardAccount {
    /// Units accrued since the last claim.
    pub balance: u64,
    /// When the provider last claimed, if ever.
    pub last_claim: Option<DateTime<Utc>>,
}

/// The success payload of `claim_sharing_reward`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    /// The full balance that was claimed. Never 0.
    pub amount: u64,
    /// Wall-clock time (UTC) of the claim; also stamped into the account's
    /// `last_claim`.
    pub claimed_at: DateTime<Utc>,
}
