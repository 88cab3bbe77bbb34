use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculator::InstallmentFormula;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::LoanInput;

/// interest charged on the original principal for the whole term
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterestFormula;

impl InstallmentFormula for SimpleInterestFormula {
    fn monthly_payment(&self, input: &LoanInput) -> Result<Money> {
        Ok(simple_interest_payment(input.principal, input.annual_rate, input.term_months))
    }

    fn name(&self) -> &'static str {
        "simple_interest"
    }
}

/// P * rate * (months / 12)
pub fn simple_interest_total(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    Money::from_decimal(
        principal.as_decimal() * annual_rate.as_decimal() * Decimal::from(term_months) / dec!(12),
    )
}

/// unrounded installment: (P + total interest) / months
pub fn simple_interest_payment(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    let interest = simple_interest_total(principal, annual_rate, term_months);
    (principal + interest) / Decimal::from(term_months)
}
