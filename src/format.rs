use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::LoanResult;

/// display settings for currency amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// BCP 47 tag the separators were chosen for
    pub locale: String,
    /// ISO 4217 code
    pub currency_code: String,
    pub symbol: String,
    pub fraction_digits: u32,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::es_cl_clp()
    }
}

impl CurrencyFormat {
    /// chilean pesos: `$1.250.000`
    pub fn es_cl_clp() -> Self {
        Self {
            locale: "es-CL".to_string(),
            currency_code: "CLP".to_string(),
            symbol: "$".to_string(),
            fraction_digits: 0,
            group_separator: '.',
            decimal_separator: ',',
        }
    }

    /// us dollars: `$1,250,000.00`
    pub fn en_us_usd() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency_code: "USD".to_string(),
            symbol: "$".to_string(),
            fraction_digits: 2,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.fraction_digits > 8 {
            return Err(LoanError::InvalidConfiguration {
                message: format!("fraction_digits {} exceeds 8", self.fraction_digits),
            });
        }
        if self.group_separator == self.decimal_separator {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "group and decimal separators are both '{}'",
                    self.group_separator
                ),
            });
        }
        if self.currency_code.len() != 3 || !self.currency_code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(LoanError::InvalidConfiguration {
                message: format!("currency_code '{}' is not an ISO 4217 code", self.currency_code),
            });
        }
        Ok(())
    }

    /// render an amount; rounds half away from zero to `fraction_digits`
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount.round_dp(self.fraction_digits);
        let mut digits = rounded.abs().as_decimal();
        digits.rescale(self.fraction_digits);
        let text = digits.to_string();

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if rounded.is_negative() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(whole, self.group_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    pub fn format_result(&self, result: &LoanResult) -> FormattedLoanResult {
        FormattedLoanResult {
            monthly_payment: self.format(result.monthly_payment),
            total_payment: self.format(result.total_payment),
            total_interest: self.format(result.total_interest),
        }
    }
}

/// loan figures rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLoanResult {
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
