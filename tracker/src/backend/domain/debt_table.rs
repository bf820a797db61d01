//! Debt table domain logic for the debt tracker.
//!
//! This module turns domain debts into display rows for the debt list:
//! formatted amounts, paid and remaining totals, created/due dates, overdue
//! flags and payment history lines. It is pure formatting; the presentation
//! layer decides how the rows look.
//!
//! ## Key Responsibilities
//!
//! - **Amount Formatting**: Currency symbol and thousands separators
//! - **Date Formatting**: Multiple date format options (ISO, short, long)
//! - **Payment Rows**: Method labels and per-payment amounts
//! - **Overdue Hints**: Days overdue relative to a supplied clock

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{DashboardStats, FormattedDebt, FormattedPayment, PaymentMethodOption};

use crate::backend::domain::dashboard_stats::DebtStatistics;
use crate::backend::domain::models::{Debt, Money, Payment, PaymentMethod};

/// Configuration for debt table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtTableConfig {
    pub currency_symbol: String,
    pub date_format: DateFormat,
}

/// Date formatting options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormat {
    MonthDayYear, // "June 13, 2025"
    ShortDate,    // "06/13/2025"
    ISO,          // "2025-06-13"
}

impl Default for DebtTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: DateFormat::ShortDate,
        }
    }
}

/// Debt table service that handles all display formatting for debts
#[derive(Debug, Clone, Default)]
pub struct DebtTableService {
    config: DebtTableConfig,
}

impl DebtTableService {
    /// Create a new DebtTableService with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new DebtTableService with custom configuration
    pub fn with_config(config: DebtTableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DebtTableConfig {
        &self.config
    }

    /// Format a list of debts for display, keeping their order
    pub fn format_debts(&self, debts: &[Debt], now: DateTime<Utc>) -> Vec<FormattedDebt> {
        debts.iter().map(|debt| self.format_debt(debt, now)).collect()
    }

    /// Format a single debt for display
    pub fn format_debt(&self, debt: &Debt, now: DateTime<Utc>) -> FormattedDebt {
        FormattedDebt {
            id: debt.id.clone(),
            debtor_name: debt.debtor_name.clone(),
            description: debt.description.clone(),
            formatted_amount: self.format_amount(debt.amount),
            formatted_paid_total: self.format_amount(debt.paid_total()),
            formatted_remaining: self.format_amount(debt.remaining()),
            formatted_created_date: self.format_date(debt.date.date_naive()),
            formatted_due_date: debt.due_date.map(|due| self.format_date(due)),
            is_paid: debt.is_paid,
            is_overdue: debt.is_overdue(now),
            overdue_days: if debt.is_paid { 0 } else { debt.overdue_days(now) },
            payments: debt
                .payment_history
                .iter()
                .map(|payment| self.format_payment(payment))
                .collect(),
            collection_notes: debt.collection_notes.clone(),
            raw_amount_cents: debt.amount.cents(),
            raw_date: debt.date.to_rfc3339(),
        }
    }

    pub fn format_payment(&self, payment: &Payment) -> FormattedPayment {
        FormattedPayment {
            id: payment.id.clone(),
            formatted_date: self.format_date(payment.date),
            method: payment.method.as_str().to_string(),
            method_label: payment.method.label().to_string(),
            formatted_amount: self.format_amount(payment.amount),
            notes: payment.notes.clone(),
            raw_amount_cents: payment.amount.cents(),
        }
    }

    pub fn format_statistics(&self, stats: &DebtStatistics) -> DashboardStats {
        DashboardStats {
            formatted_total_outstanding: self.format_amount(stats.total_outstanding),
            formatted_total_collected: self.format_amount(stats.total_collected),
            overdue_count: stats.overdue_count,
            raw_total_outstanding_cents: stats.total_outstanding.cents(),
            raw_total_collected_cents: stats.total_collected.cents(),
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.config.date_format {
            DateFormat::MonthDayYear => {
                format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
            }
            DateFormat::ShortDate => {
                format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
            }
            DateFormat::ISO => date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn format_amount(&self, amount: Money) -> String {
        amount.format_currency(&self.config.currency_symbol)
    }

    /// Options for the payment method picker, in display order
    pub fn payment_method_options(&self) -> Vec<PaymentMethodOption> {
        PaymentMethod::ALL
            .iter()
            .map(|method| PaymentMethodOption {
                value: method.as_str().to_string(),
                label: method.label().to_string(),
            })
            .collect()
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-18T10:00:00Z").unwrap().with_timezone(&Utc)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_debt() -> Debt {
        Debt {
            id: "debt_1".to_string(),
            debtor_name: "John Doe".to_string(),
            amount: Money::from_cents(123456),
            description: "Car repair".to_string(),
            date: DateTime::parse_from_rfc3339("2025-06-13T09:00:00Z").unwrap().with_timezone(&Utc),
            due_date: Some(ymd(2026, 10, 1)),
            is_paid: false,
            collection_notes: vec!["Sent reminder".to_string()],
            payment_history: vec![Payment {
                id: "pay_1".to_string(),
                amount: Money::from_cents(23456),
                date: ymd(2026, 9, 1),
                method: PaymentMethod::BankTransfer,
                notes: Some("First instalment".to_string()),
            }],
        }
    }

    #[test]
    fn test_format_debt() {
        let service = DebtTableService::new();
        let formatted = service.format_debt(&create_test_debt(), now());

        assert_eq!(formatted.id, "debt_1");
        assert_eq!(formatted.formatted_amount, "$1,234.56");
        assert_eq!(formatted.formatted_paid_total, "$234.56");
        assert_eq!(formatted.formatted_remaining, "$1,000.00");
        assert_eq!(formatted.formatted_created_date, "06/13/2025");
        assert_eq!(formatted.formatted_due_date.as_deref(), Some("10/01/2026"));
        assert!(formatted.is_overdue);
        assert_eq!(formatted.overdue_days, 17);
        assert_eq!(formatted.collection_notes, vec!["Sent reminder".to_string()]);
        assert_eq!(formatted.raw_amount_cents, 123456);
    }

    #[test]
    fn test_format_payment_row() {
        let service = DebtTableService::new();
        let formatted = service.format_debt(&create_test_debt(), now());
        let payment = &formatted.payments[0];

        assert_eq!(payment.formatted_date, "09/01/2026");
        assert_eq!(payment.method, "bank_transfer");
        assert_eq!(payment.method_label, "Bank Transfer");
        assert_eq!(payment.formatted_amount, "$234.56");
        assert_eq!(payment.notes.as_deref(), Some("First instalment"));
    }

    #[test]
    fn test_paid_debt_has_no_overdue_days() {
        let service = DebtTableService::new();
        let mut debt = create_test_debt();
        debt.is_paid = true;

        let formatted = service.format_debt(&debt, now());
        assert!(!formatted.is_overdue);
        assert_eq!(formatted.overdue_days, 0);
    }

    #[test]
    fn test_different_date_formats() {
        let mut config = DebtTableConfig::default();

        config.date_format = DateFormat::MonthDayYear;
        let service = DebtTableService::with_config(config.clone());
        assert_eq!(service.format_date(ymd(2025, 6, 13)), "June 13, 2025");

        config.date_format = DateFormat::ISO;
        let service = DebtTableService::with_config(config);
        assert_eq!(service.format_date(ymd(2025, 6, 13)), "2025-06-13");
    }

    #[test]
    fn test_custom_currency_symbol() {
        let service = DebtTableService::with_config(DebtTableConfig {
            currency_symbol: "€".to_string(),
            date_format: DateFormat::ISO,
        });
        assert_eq!(service.format_amount(Money::from_cents(-500)), "-€5.00");
    }

    #[test]
    fn test_payment_method_options() {
        let options = DebtTableService::new().payment_method_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["cash", "bank_transfer", "check", "other"]);
        assert_eq!(options[1].label, "Bank Transfer");
    }

    #[test]
    fn test_format_statistics() {
        let service = DebtTableService::new();
        let stats = DebtStatistics {
            total_outstanding: Money::from_cents(10000),
            total_collected: Money::from_cents(5050),
            overdue_count: 2,
        };
        let dto = service.format_statistics(&stats);
        assert_eq!(dto.formatted_total_outstanding, "$100.00");
        assert_eq!(dto.formatted_total_collected, "$50.50");
        assert_eq!(dto.overdue_count, 2);
        assert_eq!(dto.raw_total_collected_cents, 5050);
    }
}
