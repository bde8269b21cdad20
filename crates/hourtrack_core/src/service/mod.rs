//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage and pure-calculation details.

pub mod leaderboard_service;
pub mod password_policy;
pub mod report_service;
