//! The FIDES ledger: a serially-ordered transactional state machine.
//!
//! All entities — patients, providers, consent grants, reward accounts, and
//! the audit sink — live behind one `Mutex`. Every operation locks once,
//! observes a consistent snapshot, validates ALL preconditions before
//! performing any write, and commits all of its writes or none of them.
//! There is no internal parallelism: the lock imposes a single global total
//! order, so two operations can never race on the same grant slot, reward
//! account, or log tail.
//!
//! The clock is read exactly once per operation, making each transaction
//! internally time-consistent. An error return is an atomic no-op commit —
//! the state is byte-for-byte unchanged.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Duration;
use tracing::{debug, info, warn};

use fides_contracts::{
    access::{AccessApproval, AccessRecord, DataType},
    audit::AuditEvent,
    consent::{AccessType, ConsentGrant},
    error::{LedgerError, LedgerResult},
    identity::{Patient, PatientId, Provider, ProviderId},
    reward::{ClaimReceipt, RewardAccount},
};

use crate::authorize;
use crate::config::LedgerConfig;
use crate::traits::{AccessPolicy, AuditSink, Clock};

// ── Store ────────────────────────────────────────────────────────────────────

/// One registry table per entity type.
///
/// Consent grants are keyed by the explicit composite `(patient, provider)`
/// pair in a flat map — one record per pair, overwritten in place, never
/// removed. History lives only in the audit log.
#[derive(Default)]
struct Store {
    patients: HashMap<PatientId, Patient>,
    providers: HashMap<ProviderId, Provider>,
    grants: HashMap<(PatientId, ProviderId), ConsentGrant>,
    rewards: HashMap<ProviderId, RewardAccount>,
}

/// Everything a single operation may touch, guarded together so the audit
/// append and the store writes commit under one lock acquisition.
struct LedgerState {
    store: Store,
    audit: Box<dyn AuditSink>,
}

// ── Ledger ───────────────────────────────────────────────────────────────────

/// The consent- and access-control ledger.
///
/// Construct one ledger per deployment with the trusted components — access
/// policy, audit sink, clock — and the operational config:
///
/// ```rust,ignore
/// let ledger = Ledger::new(
///     Box::new(StandardAccessPolicy),
///     Box::new(InMemoryAuditLog::new(LedgerId::new())),
///     Box::new(SystemClock),
///     LedgerConfig::default(),
/// );
/// ```
pub struct Ledger {
    state: Mutex<LedgerState>,
    policy: Box<dyn AccessPolicy>,
    clock: Box<dyn Clock>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger with the given trusted components and config.
    pub fn new(
        policy: Box<dyn AccessPolicy>,
        audit: Box<dyn AuditSink>,
        clock: Box<dyn Clock>,
        config: LedgerConfig,
    ) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                store: Store::default(),
                audit,
            }),
            policy,
            clock,
            config,
        }
    }

    /// Acquire the single-writer lock.
    ///
    /// Poisoning means a prior operation panicked mid-transaction, which the
    /// operations below never do once their preconditions pass; treat it as
    /// a bug rather than a recoverable error.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().expect("ledger state lock poisoned")
    }

    // ── Identity Registry ────────────────────────────────────────────────────

    /// Register a patient with their encryption-key material.
    ///
    /// One-time: fails `AlreadyRegistered` if the identifier already has a
    /// record, leaving the stored record untouched. The data reference
    /// starts out unpublished (`data_hash = None`).
    pub fn register_patient(
        &self,
        id: PatientId,
        encryption_key: Vec<u8>,
    ) -> LedgerResult<Patient> {
        let now = self.clock.now();
        let mut state = self.lock();

        if state.store.patients.contains_key(&id) {
            warn!(patient = %id, "patient registration rejected: already registered");
            return Err(LedgerError::AlreadyRegistered { id: id.0 });
        }

        let patient = Patient {
            id: id.clone(),
            registered: true,
            data_hash: None,
            encryption_key,
            registered_at: now,
        };
        state.store.patients.insert(id.clone(), patient.clone());

        info!(patient = %id, "patient registered");
        Ok(patient)
    }

    /// Register a provider under a display name.
    ///
    /// One-time, same rule as `register_patient`. Providers start
    /// unverified with a rating of 0; both fields are mutated only by an
    /// external authority outside the ledger core.
    pub fn register_provider(
        &self,
        id: ProviderId,
        name: impl Into<String>,
    ) -> LedgerResult<Provider> {
        let now = self.clock.now();
        let mut state = self.lock();

        if state.store.providers.contains_key(&id) {
            warn!(provider = %id, "provider registration rejected: already registered");
            return Err(LedgerError::AlreadyRegistered { id: id.0 });
        }

        let provider = Provider {
            id: id.clone(),
            name: name.into(),
            verified: false,
            rating: 0,
            registered_at: now,
        };
        state.store.providers.insert(id.clone(), provider.clone());

        info!(provider = %id, name = %provider.name, "provider registered");
        Ok(provider)
    }

    /// Publish the opaque reference to the patient's off-ledger encrypted
    /// data, replacing any previously published reference.
    pub fn publish_data_reference(
        &self,
        id: &PatientId,
        data_hash: impl Into<String>,
    ) -> LedgerResult<Patient> {
        let mut state = self.lock();

        let patient = state
            .store
            .patients
            .get_mut(id)
            .ok_or_else(|| LedgerError::NotRegistered { id: id.0.clone() })?;
        patient.data_hash = Some(data_hash.into());

        info!(patient = %id, "data reference published");
        Ok(patient.clone())
    }

    /// Read-only snapshot of a patient record.
    pub fn get_patient_data(&self, id: &PatientId) -> LedgerResult<Patient> {
        let state = self.lock();
        state
            .store
            .patients
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotRegistered { id: id.0.clone() })
    }

    /// Read-only snapshot of a provider record.
    pub fn get_provider_info(&self, id: &ProviderId) -> LedgerResult<Provider> {
        let state = self.lock();
        state
            .store
            .providers
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotRegistered { id: id.0.clone() })
    }

    // ── Consent Store ────────────────────────────────────────────────────────

    /// Issue (or reissue) consent from `patient` to `provider`.
    ///
    /// Overwrites the pair's single grant slot: `granted_at = now`,
    /// `expires_at = now + duration_days`. Fails `NotRegistered` when the
    /// patient is unknown and `InvalidDuration` when `duration_days <= 0`,
    /// exceeds the configured cap, or is too large to represent as an expiry
    /// timestamp.
    pub fn grant_consent(
        &self,
        patient: &PatientId,
        provider: &ProviderId,
        access_type: AccessType,
        duration_days: i64,
    ) -> LedgerResult<ConsentGrant> {
        let now = self.clock.now();
        let mut state = self.lock();

        if !state.store.patients.contains_key(patient) {
            return Err(LedgerError::NotRegistered {
                id: patient.0.clone(),
            });
        }
        if duration_days <= 0 {
            return Err(LedgerError::InvalidDuration {
                days: duration_days,
            });
        }
        if let Some(max) = self.config.max_duration_days {
            if duration_days > max {
                warn!(
                    patient = %patient,
                    provider = %provider,
                    days = duration_days,
                    max_days = max,
                    "consent duration above configured cap"
                );
                return Err(LedgerError::InvalidDuration {
                    days: duration_days,
                });
            }
        }

        // Durations large enough to overflow the timestamp are invalid, same
        // as non-positive ones; they must never panic inside the state lock.
        let expires_at = Duration::try_days(duration_days)
            .and_then(|d| now.checked_add_signed(d))
            .ok_or(LedgerError::InvalidDuration {
                days: duration_days,
            })?;

        let grant = ConsentGrant {
            granted: true,
            access_type,
            granted_at: now,
            expires_at,
        };
        state
            .store
            .grants
            .insert((patient.clone(), provider.clone()), grant.clone());

        info!(
            patient = %patient,
            provider = %provider,
            access_type = ?access_type,
            days = duration_days,
            "consent granted"
        );
        Ok(grant)
    }

    /// Revoke the pair's consent record.
    ///
    /// The record is overwritten with the revoked state — `granted = false`,
    /// `access_type = None`, `expires_at` cleared to the epoch sentinel —
    /// but never removed; a later grant reuses the slot. `granted_at` keeps
    /// the original grant time. Fails `NoActiveGrant` only when no record
    /// exists at all: revoking an already-revoked record succeeds.
    pub fn revoke_consent(
        &self,
        patient: &PatientId,
        provider: &ProviderId,
    ) -> LedgerResult<ConsentGrant> {
        let mut state = self.lock();

        let grant = state
            .store
            .grants
            .get_mut(&(patient.clone(), provider.clone()))
            .ok_or_else(|| LedgerError::NoActiveGrant {
                patient: patient.0.clone(),
                provider: provider.0.clone(),
            })?;

        grant.granted = false;
        grant.access_type = AccessType::None;
        grant.expires_at = chrono::DateTime::UNIX_EPOCH;
        let revoked = grant.clone();

        info!(patient = %patient, provider = %provider, "consent revoked");
        Ok(revoked)
    }

    /// The pair's consent record, verbatim.
    ///
    /// Returns the stored record even when it has lapsed — expiration is
    /// evaluated by the authorization predicate, never pruned eagerly — and
    /// the unset default when no record exists. Never fails.
    pub fn check_consent_status(
        &self,
        patient: &PatientId,
        provider: &ProviderId,
    ) -> ConsentGrant {
        let state = self.lock();
        state
            .store
            .grants
            .get(&(patient.clone(), provider.clone()))
            .cloned()
            .unwrap_or_else(ConsentGrant::unset)
    }

    // ── Access Authorizer ────────────────────────────────────────────────────

    /// Request access to one of the patient's data categories on behalf of
    /// `provider`.
    ///
    /// The authorization predicate is evaluated fresh against the stored
    /// grant and the current clock reading. On success, three effects commit
    /// together under the single lock: the access is appended to the audit
    /// log, the provider's reward account is credited by the configured
    /// reward unit, and the patient's encryption key is returned. On any
    /// denial nothing is mutated.
    pub fn request_data_access(
        &self,
        patient: &PatientId,
        provider: &ProviderId,
        data_type: DataType,
    ) -> LedgerResult<AccessApproval> {
        let now = self.clock.now();
        let mut state = self.lock();

        let grant = state
            .store
            .grants
            .get(&(patient.clone(), provider.clone()));

        debug!(
            patient = %patient,
            provider = %provider,
            data_type = %data_type,
            grant_exists = grant.is_some(),
            "evaluating access request"
        );

        if let Err(denial) = authorize::evaluate(grant, now, data_type, self.policy.as_ref()) {
            warn!(
                patient = %patient,
                provider = %provider,
                data_type = %data_type,
                reason = %denial,
                "access request denied"
            );
            return Err(LedgerError::Unauthorized {
                reason: denial.to_string(),
            });
        }

        // A grant cannot exist without a registered patient (grant_consent
        // checks registration and patients are never deleted), so this read
        // cannot miss once the predicate has passed.
        let encryption_key = state
            .store
            .patients
            .get(patient)
            .map(|p| p.encryption_key.clone())
            .ok_or_else(|| LedgerError::Unauthorized {
                reason: authorize::Denial::NoGrant.to_string(),
            })?;

        // The audit append is the only fallible write; it runs before the
        // reward credit so a failed append leaves the store untouched.
        let record = AccessRecord {
            patient: patient.clone(),
            provider: provider.clone(),
            data_type,
            timestamp: now,
        };
        let log_index = state.audit.append(&record)?;

        state
            .store
            .rewards
            .entry(provider.clone())
            .or_default()
            .balance += self.config.reward_unit;

        info!(
            patient = %patient,
            provider = %provider,
            data_type = %data_type,
            log_index,
            reward_unit = self.config.reward_unit,
            "access authorized"
        );

        Ok(AccessApproval {
            encryption_key,
            log_index,
        })
    }

    // ── Reward Ledger ────────────────────────────────────────────────────────

    /// Claim the provider's full accrued reward balance.
    ///
    /// Fails `NothingToClaim` when the balance is zero (or the provider has
    /// never been credited). Otherwise returns the full amount and resets
    /// the balance to zero atomically — there are no partial claims.
    pub fn claim_sharing_reward(&self, provider: &ProviderId) -> LedgerResult<ClaimReceipt> {
        let now = self.clock.now();
        let mut state = self.lock();

        let account = state
            .store
            .rewards
            .get_mut(provider)
            .filter(|account| account.balance > 0)
            .ok_or_else(|| LedgerError::NothingToClaim {
                provider: provider.0.clone(),
            })?;

        let amount = account.balance;
        account.balance = 0;
        account.last_claim = Some(now);

        info!(provider = %provider, amount, "sharing reward claimed");
        Ok(ClaimReceipt {
            amount,
            claimed_at: now,
        })
    }

    /// The provider's current accrued balance; 0 when never credited.
    pub fn reward_balance(&self, provider: &ProviderId) -> u64 {
        self.reward_account(provider).balance
    }

    /// Snapshot of the provider's reward account (balance and last claim
    /// time); the default zeroed account when never credited.
    pub fn reward_account(&self, provider: &ProviderId) -> RewardAccount {
        let state = self.lock();
        state
            .store
            .rewards
            .get(provider)
            .cloned()
            .unwrap_or_default()
    }

    // ── Audit Log ────────────────────────────────────────────────────────────

    /// The audit event at `index`, or `IndexOutOfRange` when the index lies
    /// past the end of the log.
    pub fn get_access_logs(&self, index: u64) -> LedgerResult<AuditEvent> {
        let state = self.lock();
        state.audit.entry(index)
    }

    /// The number of authorized accesses recorded so far.
    pub fn access_log_len(&self) -> u64 {
        let state = self.lock();
        state.audit.len()
    }

    /// True when the audit sink's stored log passes integrity verification.
    pub fn verify_audit_integrity(&self) -> bool {
        let state = self.lock();
        state.audit.verify_integrity()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
