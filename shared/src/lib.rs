use serde::{Deserialize, Serialize};

/// Request to record a new debt, as typed into the debt form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDebtRequest {
    pub debtor_name: String,
    /// Raw amount text ("100", "$1,234.56"); empty means zero
    pub amount: String,
    pub description: String,
    /// Optional due date (YYYY-MM-DD); empty string means none
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDebtResponse {
    pub debt: FormattedDebt,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TogglePaidRequest {
    pub debt_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TogglePaidResponse {
    pub debt: FormattedDebt,
    pub success_message: String,
}

/// Request to record a payment against a debt, as typed into the payment modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub debt_id: String,
    /// Raw amount text; empty means zero
    pub amount: String,
    /// Payment date (YYYY-MM-DD)
    pub date: String,
    /// One of "cash", "bank_transfer", "check", "other"
    pub method: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentResponse {
    pub debt: FormattedDebt,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCollectionNoteRequest {
    pub debt_id: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCollectionNoteResponse {
    pub debt: FormattedDebt,
    pub success_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtListRequest {
    /// Search text matched against debtor name and description
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtListResponse {
    pub debts: Vec<FormattedDebt>,
    /// Outstanding total over the whole collection, not just the filtered rows
    pub formatted_total_outstanding: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearDebtsResponse {
    pub cleared_count: usize,
    pub success_message: String,
}

/// Headline numbers shown above the debt list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub formatted_total_outstanding: String,
    pub formatted_total_collected: String,
    pub overdue_count: usize,
    pub raw_total_outstanding_cents: i64,
    pub raw_total_collected_cents: i64,
}

/// A debt prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDebt {
    pub id: String,
    pub debtor_name: String,
    pub description: String,
    pub formatted_amount: String,
    pub formatted_paid_total: String,
    pub formatted_remaining: String,
    pub formatted_created_date: String,
    pub formatted_due_date: Option<String>,
    pub is_paid: bool,
    pub is_overdue: bool,
    pub overdue_days: i64,
    pub payments: Vec<FormattedPayment>,
    pub collection_notes: Vec<String>,
    pub raw_amount_cents: i64,
    /// Creation timestamp (RFC 3339)
    pub raw_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPayment {
    pub id: String,
    pub formatted_date: String,
    pub method: String,
    pub method_label: String,
    pub formatted_amount: String,
    pub notes: Option<String>,
    pub raw_amount_cents: i64,
}

/// Selectable payment method for the payment form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodOption {
    pub value: String,
    pub label: String,
}

/// Result of validating a debt or payment form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<FormValidationError>,
    pub cleaned_amount_cents: Option<i64>,
}

/// Specific form validation errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormValidationError {
    EmptyDebtorName,
    DebtorNameTooLong(usize),
    InvalidAmountFormat(String),
    AmountNegative,
    AmountPrecisionTooHigh,
    AmountTooLarge,
    InvalidDate(String),
    InvalidPaymentMethod(String),
    EmptyNote,
}
