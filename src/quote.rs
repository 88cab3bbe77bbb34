use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::LoanCalculator;
use crate::config::CalculatorConfig;
use crate::errors::Result;
use crate::format::FormattedLoanResult;
use crate::types::{LoanInput, LoanResult, PaymentMethod};
use crate::validation::{term_months_of, FormValidation, ValidationResult, Validator};

/// info text shown while any field is invalid
pub const PLACEHOLDER_MESSAGE: &str = "enter data to calculate";

/// outcome of one validate-then-calculate pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoanQuote {
    Calculated {
        input: LoanInput,
        method: PaymentMethod,
        result: LoanResult,
        info: String,
    },
    /// neutral state; never carries stale or partial figures
    Placeholder {
        validation: FormValidation,
        term: ValidationResult,
        info: String,
    },
}

impl LoanQuote {
    pub fn is_calculated(&self) -> bool {
        matches!(self, LoanQuote::Calculated { .. })
    }

    pub fn result(&self) -> Option<&LoanResult> {
        match self {
            LoanQuote::Calculated { result, .. } => Some(result),
            LoanQuote::Placeholder { .. } => None,
        }
    }

    pub fn info(&self) -> &str {
        match self {
            LoanQuote::Calculated { info, .. } | LoanQuote::Placeholder { info, .. } => info.as_str(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// validates raw form input and calculates with a fixed configuration
#[derive(Debug, Clone)]
pub struct LoanEngine {
    config: CalculatorConfig,
    validator: Validator,
    calculator: LoanCalculator,
}

impl Default for LoanEngine {
    fn default() -> Self {
        Self::build(CalculatorConfig::default())
    }
}

impl LoanEngine {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CalculatorConfig) -> Self {
        Self {
            validator: Validator::new(config.validation, config.term),
            calculator: LoanCalculator::new(config.payment_method),
            config,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn default_term(&self) -> u32 {
        self.config.term.default_months
    }

    /// quote with a term picked from a bounded selector
    pub fn quote(&self, amount: &str, rate: &str, term_months: u32) -> Result<LoanQuote> {
        let validation = self.validator.validate_form(amount, rate);
        let term = self.validator.validate_term_months(term_months);
        self.resolve(validation, term)
    }

    /// quote with a free-form term entry
    pub fn quote_raw(&self, amount: &str, rate: &str, term: &str) -> Result<LoanQuote> {
        let validation = self.validator.validate_form(amount, rate);
        let term = self.validator.validate_term(term);
        self.resolve(validation, term)
    }

    fn resolve(&self, validation: FormValidation, term: ValidationResult) -> Result<LoanQuote> {
        let input = term_months_of(&term).and_then(|months| validation.loan_input(months));

        let Some(input) = input else {
            debug!(
                errors = validation.errors().len() + usize::from(!term.valid),
                "quote reverted to placeholder"
            );
            return Ok(LoanQuote::Placeholder {
                validation,
                term,
                info: PLACEHOLDER_MESSAGE.to_string(),
            });
        };

        let result = self.calculator.calculate(&input)?;
        let method = self.calculator.method();
        Ok(LoanQuote::Calculated {
            input,
            method,
            result,
            info: format!("{} calculation over {} months", method.label(), input.term_months),
        })
    }

    pub fn format_result(&self, result: &LoanResult) -> FormattedLoanResult {
        self.config.currency.format_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::validation::Field;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_form_is_calculated() {
        let engine = LoanEngine::default();
        let quote = engine.quote("1000000", "12", 12).unwrap();

        assert!(quote.is_calculated());
        assert_eq!(quote.info(), "fixed-installment calculation over 12 months");
        let result = quote.result().unwrap();
        assert_eq!(result.monthly_payment, Money::from_decimal(dec!(88848.79)));
    }

    #[test]
    fn test_invalid_field_reverts_to_placeholder() {
        let engine = LoanEngine::default();
        let quote = engine.quote("abc", "12", 12).unwrap();

        assert!(!quote.is_calculated());
        assert_eq!(quote.result(), None);
        assert_eq!(quote.info(), PLACEHOLDER_MESSAGE);
        match quote {
            LoanQuote::Placeholder { validation, term, .. } => {
                assert_eq!(validation.errors(), vec![(Field::Amount, "enter a valid amount (numeric)")]);
                assert!(validation.rate.valid);
                assert!(term.valid);
            }
            LoanQuote::Calculated { .. } => panic!("expected placeholder"),
        }
    }

    #[test]
    fn test_out_of_range_selector_term_reverts_to_placeholder() {
        let engine = LoanEngine::default();
        let quote = engine.quote("1000", "5", 0).unwrap();

        match quote {
            LoanQuote::Placeholder { validation, term, .. } => {
                assert!(validation.overall_valid);
                assert_eq!(term.message, "term must be at least 1 months");
            }
            LoanQuote::Calculated { .. } => panic!("expected placeholder"),
        }
    }

    #[test]
    fn test_free_form_term() {
        let engine = LoanEngine::default();

        let quote = engine.quote_raw("12000", "0", " 24 ").unwrap();
        assert_eq!(quote.info(), "fixed-installment calculation over 24 months");
        assert_eq!(quote.result().unwrap().monthly_payment, Money::from_major(500));

        let quote = engine.quote_raw("12000", "0", "two years").unwrap();
        assert!(!quote.is_calculated());
    }

    #[test]
    fn test_configured_simple_interest() {
        let config = CalculatorConfig {
            payment_method: PaymentMethod::SimpleInterest,
            ..CalculatorConfig::default()
        };
        let engine = LoanEngine::new(config).unwrap();
        let quote = engine.quote("12000", "10", 12).unwrap();

        assert_eq!(quote.info(), "simple-interest calculation over 12 months");
        assert_eq!(quote.result().unwrap().monthly_payment, Money::from_major(1_100));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = CalculatorConfig::default();
        config.term.min_months = 0;
        assert!(LoanEngine::new(config).is_err());
    }

    #[test]
    fn test_validator_follows_configured_limits() {
        let engine = LoanEngine::new(CalculatorConfig::us_consumer()).unwrap();
        let validator = engine.validator();

        assert_eq!(validator.limits().max_rate_percent, dec!(36));
        assert_eq!(validator.limits().max_amount, dec!(10000000));
        assert_eq!(validator.term_limits().min_months, 6);
        assert_eq!(validator.term_limits().max_months, 84);

        let quote = engine.quote("25000", "40", 60).unwrap();
        match quote {
            LoanQuote::Placeholder { validation, .. } => {
                assert_eq!(validation.rate.message, "rate cannot exceed 36%");
            }
            LoanQuote::Calculated { .. } => panic!("expected placeholder"),
        }
    }

    #[test]
    fn test_repeated_quotes_match() {
        let engine = LoanEngine::new(CalculatorConfig::us_consumer()).unwrap();
        let first = engine.quote("25000", "6.9", 60).unwrap();
        let second = engine.quote("25000", "6.9", 60).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_uses_configured_currency() {
        let engine = LoanEngine::default();
        let quote = engine.quote("1000000", "0", 12).unwrap();
        let formatted = engine.format_result(quote.result().unwrap());

        assert_eq!(formatted.monthly_payment, "$83.333");
        assert_eq!(formatted.total_payment, "$1.000.000");
        assert_eq!(formatted.total_interest, "$0");
    }

    #[test]
    fn test_quote_json_is_tagged() {
        let engine = LoanEngine::default();
        let json: serde_json::Value =
            serde_json::from_str(&engine.quote("", "", 12).unwrap().to_json().unwrap()).unwrap();

        assert_eq!(json["status"], "placeholder");
        assert_eq!(json["info"], PLACEHOLDER_MESSAGE);
        assert_eq!(json["validation"]["amount"]["message"], "amount is required");
        assert_eq!(json["validation"]["rate"]["message"], "interest rate is required");
    }
}
