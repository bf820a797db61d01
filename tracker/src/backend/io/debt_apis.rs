//! # Debt APIs
//!
//! Operations the presentation layer calls for the debt list, the new-debt
//! form, the payment modal and the collection notes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{error, info};
use shared::{
    AddCollectionNoteRequest, AddCollectionNoteResponse, ClearDebtsResponse, CreateDebtRequest,
    CreateDebtResponse, DashboardStats, DebtListRequest, DebtListResponse, FormValidation,
    FormValidationError, PaymentMethodOption, RecordPaymentRequest, RecordPaymentResponse,
    TogglePaidRequest, TogglePaidResponse,
};
use thiserror::Error;

use crate::backend::domain::commands::debts::DebtListQuery;
use crate::backend::domain::dashboard_stats::total_outstanding;
use crate::backend::domain::debt_form::DebtFormService;
use crate::backend::domain::debt_store::DebtStore;
use crate::backend::domain::debt_table::DebtTableService;
use crate::backend::storage::traits::DebtStorage;

/// Form input failed validation; nothing was changed
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FormRejected {
    pub validation: FormValidation,
    /// Message for the first error, ready to show
    pub message: String,
}

pub struct DebtApi<R: DebtStorage> {
    store: DebtStore<R>,
    table_service: DebtTableService,
    form_service: DebtFormService,
}

impl<R: DebtStorage> DebtApi<R> {
    pub fn new(store: DebtStore<R>, table_service: DebtTableService, form_service: DebtFormService) -> Self {
        Self {
            store,
            table_service,
            form_service,
        }
    }

    pub fn store(&self) -> &DebtStore<R> {
        &self.store
    }

    pub fn create_debt(&mut self, request: CreateDebtRequest) -> Result<CreateDebtResponse> {
        info!("create_debt - request: {:?}", request);

        let command = self
            .form_service
            .parse_debt_form(&request)
            .map_err(|validation| self.rejected(validation))?;
        let debt = self.store.create_debt(command)?;

        let success_message = format!(
            "Debt of {} added for {}",
            self.table_service.format_amount(debt.amount),
            debt.debtor_name
        );
        Ok(CreateDebtResponse {
            debt: self.table_service.format_debt(&debt, Utc::now()),
            success_message,
        })
    }

    pub fn toggle_paid(&mut self, request: TogglePaidRequest) -> Result<TogglePaidResponse> {
        info!("toggle_paid - debt {}", request.debt_id);

        let debt = self.store.toggle_paid(&request.debt_id).map_err(|e| {
            error!("Failed to toggle debt {}: {}", request.debt_id, e);
            e
        })?;

        let status = if debt.is_paid { "paid" } else { "unpaid" };
        Ok(TogglePaidResponse {
            success_message: format!("{} marked as {}", debt.debtor_name, status),
            debt: self.table_service.format_debt(&debt, Utc::now()),
        })
    }

    pub fn record_payment(&mut self, request: RecordPaymentRequest) -> Result<RecordPaymentResponse> {
        info!("record_payment - request: {:?}", request);

        let command = self
            .form_service
            .parse_payment_form(&request)
            .map_err(|validation| self.rejected(validation))?;
        let amount = command.amount;
        let debt = self.store.record_payment(&request.debt_id, command).map_err(|e| {
            error!("Failed to record payment on debt {}: {}", request.debt_id, e);
            e
        })?;

        let mut success_message = format!(
            "Payment of {} recorded for {}",
            self.table_service.format_amount(amount),
            debt.debtor_name
        );
        if debt.is_paid {
            success_message.push_str(" - paid in full");
        }
        Ok(RecordPaymentResponse {
            debt: self.table_service.format_debt(&debt, Utc::now()),
            success_message,
        })
    }

    pub fn add_collection_note(&mut self, request: AddCollectionNoteRequest) -> Result<AddCollectionNoteResponse> {
        info!("add_collection_note - debt {}", request.debt_id);

        let note = self
            .form_service
            .validate_collection_note(&request.note)
            .map_err(|e| {
                self.rejected(FormValidation {
                    is_valid: false,
                    errors: vec![e],
                    cleaned_amount_cents: None,
                })
            })?;
        let debt = self.store.add_collection_note(&request.debt_id, note)?;

        Ok(AddCollectionNoteResponse {
            success_message: format!("Note added for {}", debt.debtor_name),
            debt: self.table_service.format_debt(&debt, Utc::now()),
        })
    }

    pub fn list_debts(&self, request: DebtListRequest) -> DebtListResponse {
        self.list_debts_at(request, Utc::now())
    }

    pub fn list_debts_at(&self, request: DebtListRequest, now: DateTime<Utc>) -> DebtListResponse {
        let query = DebtListQuery { search: request.search };
        let debts = self.store.list_debts(&query);

        DebtListResponse {
            formatted_total_outstanding: self.table_service.format_amount(total_outstanding(&self.store.debts())),
            debts: self.table_service.format_debts(&debts, now),
        }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_at(Utc::now())
    }

    pub fn dashboard_stats_at(&self, now: DateTime<Utc>) -> DashboardStats {
        self.table_service.format_statistics(&self.store.statistics(now))
    }

    pub fn clear_all(&mut self) -> Result<ClearDebtsResponse> {
        info!("clear_all");
        let cleared_count = self.store.clear_all()?;
        Ok(ClearDebtsResponse {
            cleared_count,
            success_message: format!("Cleared {} debts", cleared_count),
        })
    }

    /// Check the new-debt form as the user types
    pub fn validate_debt_form(&self, request: &CreateDebtRequest) -> FormValidation {
        self.form_service.validate_debt_form(request)
    }

    pub fn payment_method_options(&self) -> Vec<PaymentMethodOption> {
        self.table_service.payment_method_options()
    }

    /// Message for a single validation error, for inline field hints
    pub fn error_message(&self, error: &FormValidationError) -> String {
        self.form_service.validation_error_message(error)
    }

    fn rejected(&self, validation: FormValidation) -> anyhow::Error {
        let message = validation
            .errors
            .first()
            .map(|e| self.form_service.validation_error_message(e))
            .unwrap_or_else(|| "Invalid input".to_string());
        info!("Form rejected: {}", message);
        FormRejected { validation, message }.into()
    }
}
