//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for the profile store.
//! - Isolate SQLite query details from service/report orchestration.
//!
//! # Invariants
//! - Repository writes must enforce model validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`,
//!   `HistoryNotTracked`) in addition to DB transport errors.

pub mod profile_repo;
