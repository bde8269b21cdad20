//! Weekly-report building blocks.
//!
//! # Responsibility
//! - Compute reporting week windows in the reference offset.
//! - Resolve the committed-hours value in effect for a given week.

pub mod promised_hours;
pub mod week;
