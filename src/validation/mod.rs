pub mod input;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::config::{TermLimits, ValidationLimits};
use crate::decimal::{Money, Rate};
use crate::types::LoanInput;

pub use input::normalize_numeric_input;
use input::{parse_number, parse_whole_months};

/// form field a verdict belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Amount,
    InterestRate,
    Term,
}

/// reason a field was rejected; the display text is the user-facing message
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("amount is required")]
    AmountRequired,

    #[error("enter a valid amount (numeric)")]
    AmountNotNumeric,

    #[error("amount must be greater than zero")]
    AmountNotPositive,

    #[error("amount is too large")]
    AmountTooLarge { max: Decimal },

    #[error("interest rate is required")]
    RateRequired,

    #[error("enter a valid rate (numeric)")]
    RateNotNumeric,

    #[error("rate cannot be negative")]
    RateNegative,

    #[error("rate cannot exceed {max}%")]
    RateTooHigh { max: Decimal },

    #[error("term is required")]
    TermRequired,

    #[error("enter a valid term (whole months)")]
    TermNotWholeMonths,

    #[error("term must be at least {min} months")]
    TermTooShort { min: u32 },

    #[error("term cannot exceed {max} months")]
    TermTooLong { max: u32 },
}

/// verdict for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub field: Field,
    pub valid: bool,
    /// empty when valid
    pub message: String,
    pub error: Option<FieldError>,
    /// parsed value, present only when valid
    pub value: Option<Decimal>,
}

impl ValidationResult {
    fn pass(field: Field, value: Decimal) -> Self {
        Self {
            field,
            valid: true,
            message: String::new(),
            error: None,
            value: Some(value),
        }
    }

    fn fail(field: Field, error: FieldError) -> Self {
        trace!(?field, %error, "field rejected");
        Self {
            field,
            valid: false,
            message: error.to_string(),
            error: Some(error),
            value: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// verdicts for the amount and rate fields of one form pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub overall_valid: bool,
    pub amount: ValidationResult,
    pub rate: ValidationResult,
}

impl FormValidation {
    pub fn new(amount: ValidationResult, rate: ValidationResult) -> Self {
        Self {
            overall_valid: amount.is_valid() && rate.is_valid(),
            amount,
            rate,
        }
    }

    /// messages of every rejected field, in form order
    pub fn errors(&self) -> Vec<(Field, &str)> {
        [&self.amount, &self.rate]
            .into_iter()
            .filter(|r| !r.is_valid())
            .map(|r| (r.field, r.message.as_str()))
            .collect()
    }

    /// build the calculator input, None unless both fields passed
    pub fn loan_input(&self, term_months: u32) -> Option<LoanInput> {
        if !self.overall_valid {
            return None;
        }
        let principal = self.amount.value?;
        let rate_percent = self.rate.value?;
        Some(LoanInput::new(
            Money::from_decimal(principal),
            Rate::from_percent_decimal(rate_percent),
            term_months,
        ))
    }
}

/// field validator parameterized by configured bounds
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ValidationLimits,
    term: TermLimits,
}

impl Validator {
    pub fn new(limits: ValidationLimits, term: TermLimits) -> Self {
        Self { limits, term }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn term_limits(&self) -> &TermLimits {
        &self.term
    }

    /// required, numeric, > 0, <= max amount; first failure wins
    pub fn validate_amount(&self, raw: &str) -> ValidationResult {
        let field = Field::Amount;
        if raw.trim().is_empty() {
            return ValidationResult::fail(field, FieldError::AmountRequired);
        }
        let Some(value) = parse_number(raw) else {
            return ValidationResult::fail(field, FieldError::AmountNotNumeric);
        };
        if value <= Decimal::ZERO {
            return ValidationResult::fail(field, FieldError::AmountNotPositive);
        }
        if value > self.limits.max_amount {
            return ValidationResult::fail(
                field,
                FieldError::AmountTooLarge {
                    max: self.limits.max_amount.normalize(),
                },
            );
        }
        ValidationResult::pass(field, value)
    }

    /// required, numeric, >= 0, <= max rate (percent)
    pub fn validate_interest_rate(&self, raw: &str) -> ValidationResult {
        let field = Field::InterestRate;
        if raw.trim().is_empty() {
            return ValidationResult::fail(field, FieldError::RateRequired);
        }
        let Some(value) = parse_number(raw) else {
            return ValidationResult::fail(field, FieldError::RateNotNumeric);
        };
        if value < Decimal::ZERO {
            return ValidationResult::fail(field, FieldError::RateNegative);
        }
        if value > self.limits.max_rate_percent {
            return ValidationResult::fail(
                field,
                FieldError::RateTooHigh {
                    max: self.limits.max_rate_percent.normalize(),
                },
            );
        }
        ValidationResult::pass(field, value)
    }

    /// free-form term entry: required, whole months, within term limits
    pub fn validate_term(&self, raw: &str) -> ValidationResult {
        let field = Field::Term;
        if raw.trim().is_empty() {
            return ValidationResult::fail(field, FieldError::TermRequired);
        }
        match parse_whole_months(raw) {
            Some(months) => self.check_term_range(months),
            None => ValidationResult::fail(field, FieldError::TermNotWholeMonths),
        }
    }

    /// term from a bounded selector
    pub fn validate_term_months(&self, months: u32) -> ValidationResult {
        self.check_term_range(i64::from(months))
    }

    fn check_term_range(&self, months: i64) -> ValidationResult {
        let field = Field::Term;
        if months < i64::from(self.term.min_months) {
            return ValidationResult::fail(
                field,
                FieldError::TermTooShort {
                    min: self.term.min_months,
                },
            );
        }
        if months > i64::from(self.term.max_months) {
            return ValidationResult::fail(
                field,
                FieldError::TermTooLong {
                    max: self.term.max_months,
                },
            );
        }
        ValidationResult::pass(field, Decimal::from(months))
    }

    /// validate both fields; no short-circuit so every message is available
    pub fn validate_form(&self, amount: &str, rate: &str) -> FormValidation {
        FormValidation::new(self.validate_amount(amount), self.validate_interest_rate(rate))
    }
}

/// term months from a passing term verdict
pub(crate) fn term_months_of(result: &ValidationResult) -> Option<u32> {
    if !result.is_valid() {
        return None;
    }
    result.value.and_then(|v| v.to_u32())
}

/// validate an amount with the default bounds
pub fn validate_amount(raw: &str) -> ValidationResult {
    Validator::default().validate_amount(raw)
}

/// validate an interest rate with the default bounds
pub fn validate_interest_rate(raw: &str) -> ValidationResult {
    Validator::default().validate_interest_rate(raw)
}

/// validate a free-form term with the default bounds
pub fn validate_term(raw: &str) -> ValidationResult {
    Validator::default().validate_term(raw)
}

/// validate amount and rate with the default bounds
pub fn validate_form(amount: &str, rate: &str) -> FormValidation {
    Validator::default().validate_form(amount, rate)
}
