//! Domain model for a debt owed to the user.
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::payment::Payment;
use super::serde_helpers::deserialize_optional_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub debtor_name: String,
    /// Original amount owed
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    /// Creation timestamp
    pub date: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_date"
    )]
    pub due_date: Option<NaiveDate>,
    pub is_paid: bool,
    #[serde(default)]
    pub collection_notes: Vec<String>,
    #[serde(default)]
    pub payment_history: Vec<Payment>,
}

impl Debt {
    /// Generate a unique debt ID
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Sum of every recorded payment, clamped at `Money::MAX`
    pub fn paid_total(&self) -> Money {
        Money::saturating_sum(self.payment_history.iter().map(|p| p.amount))
    }

    /// Exact sum of every recorded payment, None if it does not fit
    pub fn checked_paid_total(&self) -> Option<Money> {
        Money::checked_sum(self.payment_history.iter().map(|p| p.amount))
    }

    /// What is still owed according to the payment history, never below zero
    pub fn remaining(&self) -> Money {
        let remaining = self.amount.saturating_sub(self.paid_total());
        if remaining.is_negative() {
            Money::ZERO
        } else {
            remaining
        }
    }

    /// True once recorded payments cover the original amount
    pub fn is_covered_by_payments(&self) -> bool {
        self.paid_total() >= self.amount
    }

    /// Whole days the due date lies in the past, 0 if not yet due or no due date.
    pub fn overdue_days(&self, now: DateTime<Utc>) -> i64 {
        self.due_date.map_or(0, |due| days_past(due, now))
    }

    /// Unpaid, has a due date, and at least one full day past it
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_paid && self.overdue_days(now) > 0
    }
}

/// Whole days elapsed since midnight UTC of `date`, floored and clamped at 0.
pub fn days_past(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    now.signed_duration_since(start).num_days().max(0)
}
