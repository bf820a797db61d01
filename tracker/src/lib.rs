//! Personal debt tracker: debts owed to the user, the payments recorded
//! against them and collection notes, persisted to a local key-value store.

pub mod backend;

pub use backend::config::TrackerConfig;
pub use backend::domain::errors::DebtError;
pub use backend::domain::models::{format_currency, Debt, Money, Payment, PaymentMethod};
pub use backend::domain::DebtStore;
pub use backend::io::{DebtApi, FormRejected};
pub use backend::Backend;
