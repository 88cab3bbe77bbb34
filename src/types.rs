use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// how the monthly installment is derived from principal, rate and term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// fixed installments, french amortization
    #[default]
    Annuity,
    /// interest on the original principal only, spread evenly
    SimpleInterest,
}

impl PaymentMethod {
    /// short label used in informational messages
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Annuity => "fixed-installment",
            PaymentMethod::SimpleInterest => "simple-interest",
        }
    }
}

/// validated inputs for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
}

impl LoanInput {
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
        }
    }
}

/// aggregate figures for a loan, each rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}
