//! # IO Module
//!
//! The boundary between the presentation layer and the domain.
//!
//! Requests arrive as `shared` DTOs carrying raw form text. This layer runs
//! them through form validation, calls the debt store and formats the results
//! back into `shared` responses for display.
//!
//! ## Error Translation
//!
//! - Invalid form input is returned as [`FormRejected`], carrying the full
//!   `FormValidation` so every field error can be shown
//! - Domain failures (`DebtError`) and storage failures pass through as
//!   `anyhow::Error`

pub mod debt_apis;

pub use debt_apis::{DebtApi, FormRejected};
