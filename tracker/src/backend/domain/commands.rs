//! Domain-level command and query types.
//! These are produced by the form layer (or by callers directly) and consumed
//! by the debt operations; the public DTOs live in the `shared` crate.

pub mod debts {
    use crate::backend::domain::models::{Money, PaymentMethod};
    use chrono::NaiveDate;

    /// Input for creating a new debt.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CreateDebtCommand {
        pub debtor_name: String,
        pub amount: Money,
        pub description: String,
        pub due_date: Option<NaiveDate>,
    }

    /// Input for recording a payment against an existing debt.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordPaymentCommand {
        pub amount: Money,
        pub date: NaiveDate,
        pub method: PaymentMethod,
        pub notes: Option<String>,
    }

    /// Query parameters for listing debts.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DebtListQuery {
        pub search: Option<String>,
    }
}
