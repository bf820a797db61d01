//! Fixed-point money stored as integer cents.
//!
//! Amounts are parsed into a `rust_decimal::Decimal` first, must have at most
//! two fraction digits and are then kept as `i64` minor units, so `>=`
//! comparisons are exact. Arithmetic is checked or saturating; nothing here
//! wraps or panics on overflow. In the persisted blob an amount is written as
//! a decimal string (`"1234.56"`); plain JSON numbers written by older
//! versions are accepted and rounded to the nearest cent.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Longest digit run a `Decimal` can hold
const MAX_DECIMAL_DIGITS: usize = 28;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),
    #[error("Amount has more than two decimal places")]
    TooManyDecimalPlaces,
    #[error("Amount is too large")]
    Overflow,
}

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(i64::MAX);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Exact conversion; more than two decimal places is an error, not rounded.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyParseError> {
        if amount.scale() > 2 {
            return Err(MoneyParseError::TooManyDecimalPlaces);
        }
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or(MoneyParseError::Overflow)
    }

    /// Convert a floating point currency value, rounding to the nearest cent.
    /// Returns None for NaN, infinities and values outside the i64 cent range.
    pub fn from_f64_rounded(value: f64) -> Option<Self> {
        let amount = Decimal::try_from(value).ok()?;
        Self::from_decimal(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)).ok()
    }

    /// Parse decimal text such as `10`, `10.5`, `-3.25`, `$1,234.56`.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = input
            .chars()
            .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(input.trim().to_string());
        if !cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        {
            return Err(invalid());
        }

        let amount = Decimal::from_str_exact(&cleaned).map_err(|_| {
            if cleaned.chars().filter(char::is_ascii_digit).count() > MAX_DECIMAL_DIGITS {
                MoneyParseError::Overflow
            } else {
                invalid()
            }
        })?;
        Self::from_decimal(amount)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    /// Sum of `amounts`, None if it does not fit
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.checked_add(amount))
    }

    /// Sum of `amounts`, clamped to the representable range
    pub fn saturating_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Money {
        amounts
            .into_iter()
            .fold(Money::ZERO, |total, amount| total.saturating_add(amount))
    }

    /// Format with a currency symbol and thousands separators: `-$1,234.56`
    pub fn format_currency(self, currency_symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            currency_symbol,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

/// Format an amount as US dollars, e.g. `$1,234.56`.
pub fn format_currency(amount: Money) -> String {
    amount.format_currency("$")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Money::from_decimal(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Money::from_decimal(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64_rounded(v).ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }
}
