//! Demo scenarios for the FIDES consent ledger.
//!
//! Each scenario wires the real components together — standard access
//! policy, hash-chained audit log, a clock — and walks one slice of the
//! ledger's behavior, printing every decision it makes.

pub mod expiry;
pub mod sharing_flow;
