use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::format::CurrencyFormat;
use crate::types::PaymentMethod;

/// longest term accepted by configuration; keeps (1 + r)^n for a 100% rate
/// on the maximum principal inside decimal range
pub const MAX_TERM_MONTHS: u32 = 600;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    pub payment_method: PaymentMethod,
    pub validation: ValidationLimits,
    pub term: TermLimits,
    pub currency: CurrencyFormat,
}

/// product bounds for the amount and rate fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// largest accepted principal
    pub max_amount: Decimal,
    /// largest accepted annual rate, in percent
    pub max_rate_percent: Decimal,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_amount: dec!(999999999),
            max_rate_percent: dec!(100),
        }
    }
}

/// bounds for the installment count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermLimits {
    pub min_months: u32,
    pub max_months: u32,
    /// term preselected before the user picks one
    pub default_months: u32,
}

impl Default for TermLimits {
    fn default() -> Self {
        Self {
            min_months: 1,
            max_months: 360,
            default_months: 12,
        }
    }
}

impl CalculatorConfig {
    /// consumer credit quoted in chilean pesos, whole-peso display
    pub fn chilean_consumer() -> Self {
        Self {
            payment_method: PaymentMethod::Annuity,
            validation: ValidationLimits::default(),
            term: TermLimits::default(),
            currency: CurrencyFormat::es_cl_clp(),
        }
    }

    /// consumer credit quoted in us dollars with cents
    pub fn us_consumer() -> Self {
        Self {
            payment_method: PaymentMethod::Annuity,
            validation: ValidationLimits {
                max_amount: dec!(10000000),
                max_rate_percent: dec!(36),
            },
            term: TermLimits {
                min_months: 6,
                max_months: 84,
                default_months: 36,
            },
            currency: CurrencyFormat::en_us_usd(),
        }
    }

    /// parse and validate a json configuration; missing sections use defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// check bounds are coherent
    pub fn validate(&self) -> Result<()> {
        let limits = &self.validation;
        if limits.max_amount <= Decimal::ZERO {
            return Err(invalid(format!(
                "max_amount must be positive, got {}",
                limits.max_amount
            )));
        }
        if limits.max_rate_percent <= Decimal::ZERO || limits.max_rate_percent > dec!(100) {
            return Err(invalid(format!(
                "max_rate_percent must be within (0, 100], got {}",
                limits.max_rate_percent
            )));
        }

        let term = &self.term;
        if term.min_months == 0 {
            return Err(invalid("min_months must be at least 1".to_string()));
        }
        if term.min_months > term.max_months {
            return Err(invalid(format!(
                "min_months {} exceeds max_months {}",
                term.min_months, term.max_months
            )));
        }
        if term.max_months > MAX_TERM_MONTHS {
            return Err(invalid(format!(
                "max_months {} exceeds {}",
                term.max_months, MAX_TERM_MONTHS
            )));
        }
        if !(term.min_months..=term.max_months).contains(&term.default_months) {
            return Err(invalid(format!(
                "default_months {} outside {}..={}",
                term.default_months, term.min_months, term.max_months
            )));
        }

        self.currency.validate()
    }
}

fn invalid(message: String) -> LoanError {
    LoanError::InvalidConfiguration { message }
}
