pub mod debt;
pub mod money;
pub mod payment;
mod serde_helpers;

pub use debt::Debt;
pub use money::{format_currency, Money, MoneyParseError};
pub use payment::{Payment, PaymentMethod};
