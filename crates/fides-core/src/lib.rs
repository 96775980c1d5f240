//! # fides-core
//!
//! The serially-ordered, transactional state machine at the heart of the
//! FIDES consent ledger.
//!
//! This crate provides:
//! - The three seam traits (`Clock`, `AccessPolicy`, `AuditSink`)
//! - The authorization predicate (`authorize::evaluate`)
//! - The `Ledger` that owns all state and serializes every operation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fides_core::{Ledger, clock::SystemClock, config::LedgerConfig};
//! ```

pub mod authorize;
pub mod clock;
pub mod config;
pub mod ledger;
pub mod traits;

pub use ledger::Ledger;
