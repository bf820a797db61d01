//! Aggregate statistics over the debt collection.
//!
//! Everything here is derived on read; nothing is cached. Totals use each
//! debt's original amount, so a paid debt counts at face value no matter how
//! its payments add up, and a partially paid debt still counts in full as
//! outstanding until it flips to paid.

use chrono::{DateTime, Utc};

use shared::DashboardStats;

use crate::backend::domain::debt_table::DebtTableService;
use crate::backend::domain::models::{Debt, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtStatistics {
    pub total_outstanding: Money,
    pub total_collected: Money,
    pub overdue_count: usize,
}

/// Sum of amounts over unpaid debts.
pub fn total_outstanding(debts: &[Debt]) -> Money {
    Money::saturating_sum(debts.iter().filter(|d| !d.is_paid).map(|d| d.amount))
}

/// Same as [`total_outstanding`]; the name the debt list header uses.
pub fn calculate_total_owed(debts: &[Debt]) -> Money {
    total_outstanding(debts)
}

/// Sum of amounts over paid debts.
pub fn total_collected(debts: &[Debt]) -> Money {
    Money::saturating_sum(debts.iter().filter(|d| d.is_paid).map(|d| d.amount))
}

pub fn overdue_count(debts: &[Debt], now: DateTime<Utc>) -> usize {
    debts.iter().filter(|d| d.is_overdue(now)).count()
}

pub fn calculate_statistics(debts: &[Debt], now: DateTime<Utc>) -> DebtStatistics {
    DebtStatistics {
        total_outstanding: total_outstanding(debts),
        total_collected: total_collected(debts),
        overdue_count: overdue_count(debts, now),
    }
}

/// Dashboard figures formatted with the default currency settings.
pub fn calculate_dashboard_stats(debts: &[Debt], now: DateTime<Utc>) -> DashboardStats {
    DebtTableService::new().format_statistics(&calculate_statistics(debts, now))
}
