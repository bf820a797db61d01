//! Debt and payment form handling for the debt tracker.
//!
//! The presentation layer hands over raw form text; this module parses and
//! validates it and produces the domain commands. Validation collects every
//! problem instead of stopping at the first one.
//!
//! Amount policy: an empty amount field counts as zero, but text that is not
//! a number is reported as `InvalidAmountFormat` instead of becoming zero.

use chrono::NaiveDate;
use shared::{CreateDebtRequest, FormValidation, FormValidationError, RecordPaymentRequest};

use crate::backend::domain::commands::debts::{CreateDebtCommand, RecordPaymentCommand};
use crate::backend::domain::models::{Money, MoneyParseError, PaymentMethod};

#[derive(Debug, Clone, PartialEq)]
pub struct DebtFormConfig {
    pub currency_symbol: String,
    pub max_debtor_name_length: usize,
    pub max_amount: Money,
}

impl Default for DebtFormConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            max_debtor_name_length: 256,
            max_amount: Money::from_cents(10_000_000_000),
        }
    }
}

/// Service that validates debt and payment forms
#[derive(Debug, Clone, Default)]
pub struct DebtFormService {
    config: DebtFormConfig,
}

impl DebtFormService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DebtFormConfig) -> Self {
        Self { config }
    }

    /// Validate the new-debt form without building a command
    pub fn validate_debt_form(&self, request: &CreateDebtRequest) -> FormValidation {
        match self.parse_debt_form(request) {
            Ok(command) => valid(command.amount),
            Err(validation) => validation,
        }
    }

    /// Parse the new-debt form into a create command
    pub fn parse_debt_form(&self, request: &CreateDebtRequest) -> Result<CreateDebtCommand, FormValidation> {
        let mut errors = Vec::new();

        let debtor_name = request.debtor_name.trim();
        if debtor_name.is_empty() {
            errors.push(FormValidationError::EmptyDebtorName);
        } else if debtor_name.chars().count() > self.config.max_debtor_name_length {
            errors.push(FormValidationError::DebtorNameTooLong(debtor_name.chars().count()));
        }

        let amount = self.collect(self.parse_amount_input(&request.amount), &mut errors);

        let due_date = match request.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => self.collect(parse_date(raw), &mut errors),
        };

        match amount {
            Some(amount) if errors.is_empty() => Ok(CreateDebtCommand {
                debtor_name: debtor_name.to_string(),
                amount,
                description: request.description.clone(),
                due_date,
            }),
            _ => Err(invalid(errors, amount)),
        }
    }

    /// Validate the payment form without building a command
    pub fn validate_payment_form(&self, request: &RecordPaymentRequest) -> FormValidation {
        match self.parse_payment_form(request) {
            Ok(command) => valid(command.amount),
            Err(validation) => validation,
        }
    }

    /// Parse the payment form into a record-payment command
    pub fn parse_payment_form(&self, request: &RecordPaymentRequest) -> Result<RecordPaymentCommand, FormValidation> {
        let mut errors = Vec::new();

        let amount = self.collect(self.parse_amount_input(&request.amount), &mut errors);
        let date = self.collect(parse_date(request.date.trim()), &mut errors);
        let method = self.collect(
            PaymentMethod::parse(&request.method)
                .ok_or_else(|| FormValidationError::InvalidPaymentMethod(request.method.clone())),
            &mut errors,
        );

        match (amount, date, method) {
            (Some(amount), Some(date), Some(method)) if errors.is_empty() => Ok(RecordPaymentCommand {
                amount,
                date,
                method,
                notes: request
                    .notes
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(invalid(errors, amount)),
        }
    }

    /// Reject blank collection notes; returns the trimmed note
    pub fn validate_collection_note(&self, note: &str) -> Result<String, FormValidationError> {
        let trimmed = note.trim();
        if trimmed.is_empty() {
            Err(FormValidationError::EmptyNote)
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Parse an amount field: empty is zero, otherwise a non-negative amount
    /// with at most two decimal places
    pub fn parse_amount_input(&self, input: &str) -> Result<Money, FormValidationError> {
        let cleaned = input.trim().replace(&self.config.currency_symbol, "");
        let amount = match Money::parse(&cleaned) {
            Ok(amount) => amount,
            Err(MoneyParseError::Empty) => Money::ZERO,
            Err(MoneyParseError::TooManyDecimalPlaces) => {
                return Err(FormValidationError::AmountPrecisionTooHigh)
            }
            Err(MoneyParseError::Overflow) => return Err(FormValidationError::AmountTooLarge),
            Err(MoneyParseError::InvalidFormat(raw)) => {
                return Err(FormValidationError::InvalidAmountFormat(raw))
            }
        };

        if amount.is_negative() {
            Err(FormValidationError::AmountNegative)
        } else if amount > self.config.max_amount {
            Err(FormValidationError::AmountTooLarge)
        } else {
            Ok(amount)
        }
    }

    /// Get a user-friendly message for a validation error
    pub fn validation_error_message(&self, error: &FormValidationError) -> String {
        match error {
            FormValidationError::EmptyDebtorName => "Please enter the debtor's name".to_string(),
            FormValidationError::DebtorNameTooLong(len) => format!(
                "Debtor name is too long ({} characters, max {})",
                len, self.config.max_debtor_name_length
            ),
            FormValidationError::InvalidAmountFormat(raw) => {
                format!("'{}' is not a valid amount", raw)
            }
            FormValidationError::AmountNegative => "Amount cannot be negative".to_string(),
            FormValidationError::AmountPrecisionTooHigh => {
                "Use at most 2 decimal places (like 5.25)".to_string()
            }
            FormValidationError::AmountTooLarge => format!(
                "Maximum amount is {}",
                self.config.max_amount.format_currency(&self.config.currency_symbol)
            ),
            FormValidationError::InvalidDate(raw) => {
                format!("'{}' is not a valid date (use YYYY-MM-DD)", raw)
            }
            FormValidationError::InvalidPaymentMethod(raw) => {
                format!("'{}' is not a supported payment method", raw)
            }
            FormValidationError::EmptyNote => "Please enter a note".to_string(),
        }
    }

    fn collect<T>(&self, result: Result<T, FormValidationError>, errors: &mut Vec<FormValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                errors.push(error);
                None
            }
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FormValidationError::InvalidDate(raw.to_string()))
}

fn valid(amount: Money) -> FormValidation {
    FormValidation {
        is_valid: true,
        errors: Vec::new(),
        cleaned_amount_cents: Some(amount.cents()),
    }
}

fn invalid(errors: Vec<FormValidationError>, amount: Option<Money>) -> FormValidation {
    FormValidation {
        is_valid: false,
        errors,
        cleaned_amount_cents: amount.map(Money::cents),
    }
}
