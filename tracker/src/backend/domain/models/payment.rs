//! Domain model for a payment recorded against a debt.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::serde_helpers::{deserialize_flexible_date, deserialize_optional_text};

/// How a payment was made.
///
/// Stored as snake_case strings. Any other stored string is read back as
/// `Other` so an unexpected method never blocks loading the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    BankTransfer,
    Check,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::Check,
        PaymentMethod::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Check => "check",
            PaymentMethod::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Check => "Check",
            PaymentMethod::Other => "Other",
        }
    }

    /// Strict parse of form input; unlike deserialization, unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub amount: Money,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    pub method: PaymentMethod,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_text"
    )]
    pub notes: Option<String>,
}

impl Payment {
    /// Generate a unique payment ID
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
