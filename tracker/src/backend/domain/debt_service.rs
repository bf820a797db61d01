//! Debt state transitions.
//!
//! Every operation here is pure: it takes the current collection by slice and
//! returns a brand new collection, leaving the input untouched. The store
//! persists the returned collection and swaps it in as the new snapshot.
//!
//! ## Business Rules
//!
//! - New debts start unpaid with no notes or payments and go to the front
//! - Toggling flips `is_paid` as a manual override; payment history is kept
//! - Recording a payment always recomputes `is_paid` from the payment sum,
//!   replacing whatever a manual toggle set before
//! - Payments and collection notes are append-only
//! - A payment that would push the payment total past `Money::MAX` is rejected
//! - An unknown debt id is reported as `DebtError::NotFound`

use chrono::{DateTime, Utc};
use log::debug;

use crate::backend::domain::commands::debts::{CreateDebtCommand, RecordPaymentCommand};
use crate::backend::domain::errors::DebtError;
use crate::backend::domain::models::{Debt, Payment};

/// Build a new unpaid debt stamped with `now`.
pub fn create_debt(command: CreateDebtCommand, now: DateTime<Utc>) -> Result<Debt, DebtError> {
    let debtor_name = command.debtor_name.trim();
    if debtor_name.is_empty() {
        return Err(DebtError::EmptyDebtorName);
    }
    if command.amount.is_negative() {
        return Err(DebtError::NegativeAmount);
    }

    Ok(Debt {
        id: Debt::generate_id(),
        debtor_name: debtor_name.to_string(),
        amount: command.amount,
        description: command.description,
        date: now,
        due_date: command.due_date,
        is_paid: false,
        collection_notes: Vec::new(),
        payment_history: Vec::new(),
    })
}

/// Prepend a debt, keeping the most recent first in storage order.
pub fn add_debt(debts: &[Debt], debt: Debt) -> Vec<Debt> {
    let mut next = Vec::with_capacity(debts.len() + 1);
    next.push(debt);
    next.extend_from_slice(debts);
    next
}

/// Flip the paid flag of one debt.
pub fn toggle_paid(debts: &[Debt], debt_id: &str) -> Result<Vec<Debt>, DebtError> {
    update_debt(debts, debt_id, |debt| {
        debt.is_paid = !debt.is_paid;
        debug!("Toggled debt {} to is_paid={}", debt.id, debt.is_paid);
        Ok(())
    })
}

/// Append a payment and recompute the paid flag from the cumulative sum.
pub fn record_payment(
    debts: &[Debt],
    debt_id: &str,
    command: RecordPaymentCommand,
) -> Result<Vec<Debt>, DebtError> {
    if command.amount.is_negative() {
        return Err(DebtError::NegativePayment);
    }

    update_debt(debts, debt_id, |debt| {
        let paid_total = debt
            .checked_paid_total()
            .and_then(|total| total.checked_add(command.amount))
            .ok_or(DebtError::AmountOverflow)?;

        debt.payment_history.push(Payment {
            id: Payment::generate_id(),
            amount: command.amount,
            date: command.date,
            method: command.method,
            notes: command.notes.filter(|n| !n.trim().is_empty()),
        });
        debt.is_paid = paid_total >= debt.amount;
        debug!(
            "Recorded payment on debt {}: paid {} of {}, is_paid={}",
            debt.id,
            paid_total,
            debt.amount,
            debt.is_paid
        );
        Ok(())
    })
}

/// Append a collection note verbatim.
pub fn add_collection_note(debts: &[Debt], debt_id: &str, note: String) -> Result<Vec<Debt>, DebtError> {
    update_debt(debts, debt_id, |debt| {
        debt.collection_notes.push(note);
        Ok(())
    })
}

pub fn find_debt<'a>(debts: &'a [Debt], debt_id: &str) -> Option<&'a Debt> {
    debts.iter().find(|d| d.id == debt_id)
}

fn update_debt<F>(debts: &[Debt], debt_id: &str, apply: F) -> Result<Vec<Debt>, DebtError>
where
    F: FnOnce(&mut Debt) -> Result<(), DebtError>,
{
    let index = debts
        .iter()
        .position(|d| d.id == debt_id)
        .ok_or_else(|| DebtError::NotFound(debt_id.to_string()))?;

    let mut updated = debts[index].clone();
    apply(&mut updated)?;

    let mut next = debts.to_vec();
    next[index] = updated;
    Ok(next)
}
