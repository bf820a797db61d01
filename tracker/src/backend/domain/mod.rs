//! # Domain Module
//!
//! Contains all business logic for the debt tracker.
//!
//! This module models debts owed to the user, the payments recorded against
//! them and the notes kept while collecting. It operates independently of any
//! UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **models**: Debt, Payment, PaymentMethod and the `Money` fixed-point type
//! - **commands**: Inputs for the debt operations
//! - **debt_service**: Pure state transitions over the debt collection
//! - **debt_list**: Sort order and search filtering for the debt list
//! - **dashboard_stats**: Outstanding, collected and overdue figures
//! - **debt_table**: Display formatting of debts and payments
//! - **debt_form**: Parsing and validation of raw form input
//! - **debt_store**: The state container that persists every change
//!
//! ## Business Rules
//!
//! - Debtor names must be non-empty after trimming
//! - Debt and payment amounts cannot be negative
//! - Recording a payment marks the debt paid once payments cover its amount
//! - Manually toggling the paid flag is an override and keeps payment history
//! - Unpaid debts list before paid ones, newest first within each group
//! - A debt is overdue once a full day has passed since its due date

pub mod commands;
pub mod dashboard_stats;
pub mod debt_form;
pub mod debt_list;
pub mod debt_service;
pub mod debt_store;
pub mod debt_table;
pub mod errors;
pub mod models;

pub use dashboard_stats::{calculate_dashboard_stats, calculate_statistics, DebtStatistics};
pub use debt_form::{DebtFormConfig, DebtFormService};
pub use debt_store::DebtStore;
pub use debt_table::{DateFormat, DebtTableConfig, DebtTableService};
pub use errors::DebtError;
