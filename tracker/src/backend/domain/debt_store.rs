//! # Debt Store
//!
//! Owns the debt collection for the lifetime of the application.
//!
//! The collection is an immutable snapshot behind an `Arc`. Every mutation
//! computes a new collection with the pure operations in `debt_service`,
//! saves it through the repository and only then swaps the snapshot. A failed
//! save leaves the snapshot exactly as it was and returns the error.
//!
//! Domain failures come back as `anyhow::Error` wrapping a [`DebtError`], so
//! callers can `downcast_ref::<DebtError>()` to tell a missing debt from an
//! I/O failure.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::debts::{CreateDebtCommand, DebtListQuery, RecordPaymentCommand};
use crate::backend::domain::dashboard_stats::{calculate_statistics, DebtStatistics};
use crate::backend::domain::debt_list;
use crate::backend::domain::debt_service;
use crate::backend::domain::errors::DebtError;
use crate::backend::domain::models::Debt;
use crate::backend::storage::traits::DebtStorage;

pub struct DebtStore<R: DebtStorage> {
    repository: R,
    debts: Arc<Vec<Debt>>,
}

impl<R: DebtStorage> DebtStore<R> {
    /// Load the persisted collection once and take ownership of it
    pub fn open(repository: R) -> Result<Self> {
        let debts = repository.load_debts()?;
        info!("Debt store opened with {} debts", debts.len());
        Ok(Self {
            repository,
            debts: Arc::new(debts),
        })
    }

    /// Current snapshot; holders keep seeing it even after later mutations
    pub fn debts(&self) -> Arc<Vec<Debt>> {
        Arc::clone(&self.debts)
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_debt(&self, debt_id: &str) -> Option<&Debt> {
        debt_service::find_debt(&self.debts, debt_id)
    }

    /// Create a debt stamped with the current time
    pub fn create_debt(&mut self, command: CreateDebtCommand) -> Result<Debt> {
        self.create_debt_at(command, Utc::now())
    }

    pub fn create_debt_at(&mut self, command: CreateDebtCommand, now: DateTime<Utc>) -> Result<Debt> {
        info!("Creating debt for '{}' of {}", command.debtor_name, command.amount);

        let debt = debt_service::create_debt(command, now)?;
        let next = debt_service::add_debt(&self.debts, debt.clone());
        self.commit(next)?;

        info!("Created debt {} for '{}'", debt.id, debt.debtor_name);
        Ok(debt)
    }

    pub fn toggle_paid(&mut self, debt_id: &str) -> Result<Debt> {
        let next = debt_service::toggle_paid(&self.debts, debt_id).map_err(|e| self.reject(e))?;
        self.commit(next)?;
        self.updated(debt_id)
    }

    pub fn record_payment(&mut self, debt_id: &str, command: RecordPaymentCommand) -> Result<Debt> {
        info!("Recording payment of {} on debt {}", command.amount, debt_id);

        let next = debt_service::record_payment(&self.debts, debt_id, command).map_err(|e| self.reject(e))?;
        self.commit(next)?;
        self.updated(debt_id)
    }

    pub fn add_collection_note(&mut self, debt_id: &str, note: String) -> Result<Debt> {
        let next = debt_service::add_collection_note(&self.debts, debt_id, note).map_err(|e| self.reject(e))?;
        self.commit(next)?;
        self.updated(debt_id)
    }

    /// Remove every debt; returns how many were removed
    pub fn clear_all(&mut self) -> Result<usize> {
        let count = self.debts.len();
        self.repository.clear_debts()?;
        self.debts = Arc::new(Vec::new());
        info!("Cleared {} debts", count);
        Ok(count)
    }

    /// Filtered and sorted view of the current snapshot
    pub fn list_debts(&self, query: &DebtListQuery) -> Vec<Debt> {
        debt_list::list_debts(&self.debts, query)
    }

    pub fn statistics(&self, now: DateTime<Utc>) -> DebtStatistics {
        calculate_statistics(&self.debts, now)
    }

    fn commit(&mut self, next: Vec<Debt>) -> Result<()> {
        if let Err(e) = self.repository.save_debts(&next) {
            warn!("Failed to save debts, keeping previous state: {}", e);
            return Err(e);
        }
        self.debts = Arc::new(next);
        Ok(())
    }

    fn updated(&self, debt_id: &str) -> Result<Debt> {
        self.get_debt(debt_id)
            .cloned()
            .ok_or_else(|| DebtError::NotFound(debt_id.to_string()).into())
    }

    fn reject(&self, error: DebtError) -> anyhow::Error {
        warn!("Debt operation rejected: {}", error);
        error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{Money, PaymentMethod};
    use crate::backend::storage::memory_store::MemoryKeyValueStore;
    use crate::backend::storage::test_utils::{init_test_logging, TestEnvironment};
    use crate::backend::storage::DebtRepository;
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Storage double whose saves can be switched to fail
    #[derive(Clone)]
    struct FlakyStorage {
        inner: DebtRepository<MemoryKeyValueStore>,
        fail_saves: Arc<AtomicBool>,
    }

    impl FlakyStorage {
        fn new() -> Self {
            Self {
                inner: DebtRepository::new(MemoryKeyValueStore::new()),
                fail_saves: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    impl DebtStorage for FlakyStorage {
        fn load_debts(&self) -> Result<Vec<Debt>> {
            self.inner.load_debts()
        }

        fn save_debts(&self, debts: &[Debt]) -> Result<()> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(anyhow!("quota exceeded"));
            }
            self.inner.save_debts(debts)
        }

        fn clear_debts(&self) -> Result<()> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(anyhow!("quota exceeded"));
            }
            self.inner.clear_debts()
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-18T10:00:00Z").unwrap().with_timezone(&Utc)
    }

    fn create(name: &str, cents: i64) -> CreateDebtCommand {
        CreateDebtCommand {
            debtor_name: name.to_string(),
            amount: Money::from_cents(cents),
            description: "Test".to_string(),
            due_date: None,
        }
    }

    fn payment(cents: i64) -> RecordPaymentCommand {
        RecordPaymentCommand {
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            method: PaymentMethod::Cash,
            notes: None,
        }
    }

    fn memory_store() -> DebtStore<DebtRepository<MemoryKeyValueStore>> {
        init_test_logging();
        DebtStore::open(DebtRepository::new(MemoryKeyValueStore::new())).unwrap()
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let mut store = memory_store();
        let first = store.create_debt_at(create("John", 10000), now()).unwrap();
        let second = store.create_debt_at(create("Jane", 5000), now()).unwrap();

        let debts = store.debts();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].id, second.id);
        assert_eq!(debts[1].id, first.id);
        assert_eq!(store.repository().load_debts().unwrap(), *debts);
    }

    #[test]
    fn test_old_snapshot_is_not_affected_by_mutation() {
        let mut store = memory_store();
        let debt = store.create_debt_at(create("John", 10000), now()).unwrap();

        let before = store.debts();
        store.toggle_paid(&debt.id).unwrap();

        assert!(!before[0].is_paid);
        assert!(store.debts()[0].is_paid);
    }

    #[test]
    fn test_partial_then_full_payment() {
        let mut store = memory_store();
        let debt = store.create_debt_at(create("John", 10000), now()).unwrap();

        let after_first = store.record_payment(&debt.id, payment(6000)).unwrap();
        assert!(!after_first.is_paid);
        assert_eq!(after_first.remaining(), Money::from_cents(4000));

        let after_second = store.record_payment(&debt.id, payment(4000)).unwrap();
        assert!(after_second.is_paid);
        assert_eq!(after_second.payment_history.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = memory_store();
        store.create_debt_at(create("John", 10000), now()).unwrap();
        let before = store.debts();

        let err = store.toggle_paid("missing").unwrap_err();
        assert_eq!(
            err.downcast_ref::<DebtError>(),
            Some(&DebtError::NotFound("missing".to_string()))
        );

        let err = store.add_collection_note("missing", "Called".to_string()).unwrap_err();
        assert!(matches!(err.downcast_ref::<DebtError>(), Some(DebtError::NotFound(_))));
        assert!(Arc::ptr_eq(&before, &store.debts()));
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        init_test_logging();
        let storage = FlakyStorage::new();
        let mut store = DebtStore::open(storage.clone()).unwrap();
        let debt = store.create_debt_at(create("John", 10000), now()).unwrap();

        storage.fail_saves.store(true, Ordering::SeqCst);
        let before = store.debts();

        assert!(store.record_payment(&debt.id, payment(10000)).is_err());
        assert!(store.create_debt_at(create("Jane", 1), now()).is_err());
        assert!(store.clear_all().is_err());

        assert!(Arc::ptr_eq(&before, &store.debts()));
        assert!(store.debts()[0].payment_history.is_empty());
        assert_eq!(store.len(), 1);

        storage.fail_saves.store(false, Ordering::SeqCst);
        assert!(store.record_payment(&debt.id, payment(10000)).unwrap().is_paid);
    }

    #[test]
    fn test_collection_note_and_stats() {
        let mut store = memory_store();
        let mut overdue = create("John", 10000);
        overdue.due_date = NaiveDate::from_ymd_opt(2026, 10, 1);
        let debt = store.create_debt_at(overdue, now()).unwrap();
        let paid = store.create_debt_at(create("Jane", 2500), now()).unwrap();
        store.toggle_paid(&paid.id).unwrap();

        let noted = store.add_collection_note(&debt.id, "Left voicemail".to_string()).unwrap();
        assert_eq!(noted.collection_notes, vec!["Left voicemail".to_string()]);

        let stats = store.statistics(now());
        assert_eq!(stats.total_outstanding, Money::from_cents(10000));
        assert_eq!(stats.total_collected, Money::from_cents(2500));
        assert_eq!(stats.overdue_count, 1);
    }

    #[test]
    fn test_list_debts_filters_and_sorts() {
        let mut store = memory_store();
        let john = store.create_debt_at(create("John", 100), now()).unwrap();
        store.create_debt_at(create("Jane", 200), now()).unwrap();
        store.create_debt_at(create("Johnny", 300), now()).unwrap();
        store.toggle_paid(&john.id).unwrap();

        let listed = store.list_debts(&DebtListQuery {
            search: Some("JOHN".to_string()),
        });
        let names: Vec<&str> = listed.iter().map(|d| d.debtor_name.as_str()).collect();
        assert_eq!(names, vec!["Johnny", "John"]);
    }

    #[test]
    fn test_clear_all_then_reopen() {
        let env = TestEnvironment::new().unwrap();
        let mut store = env.open_store().unwrap();
        store.create_debt_at(create("John", 100), now()).unwrap();
        store.create_debt_at(create("Jane", 200), now()).unwrap();

        assert_eq!(env.open_store().unwrap().len(), 2);
        assert_eq!(store.clear_all().unwrap(), 2);
        assert!(store.is_empty());
        assert!(env.open_store().unwrap().is_empty());
    }
}
