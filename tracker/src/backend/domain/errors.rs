//! Errors raised by the debt domain operations.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebtError {
    /// No debt in the collection carries this id
    #[error("Debt not found: {0}")]
    NotFound(String),
    #[error("Debtor name cannot be empty")]
    EmptyDebtorName,
    #[error("Debt amount cannot be negative")]
    NegativeAmount,
    #[error("Payment amount cannot be negative")]
    NegativePayment,
    /// Recorded payments would add up past the largest representable amount
    #[error("Total payments exceed the largest supported amount")]
    AmountOverflow,
}
