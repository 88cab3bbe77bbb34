use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation overflow: {rate} over {term_months} months exceeds decimal range")]
    CalculationOverflow {
        term_months: u32,
        rate: Rate,
    },
}

impl From<serde_json::Error> for LoanError {
    fn from(err: serde_json::Error) -> Self {
        LoanError::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
