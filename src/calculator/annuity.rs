use rust_decimal::Decimal;

use crate::calculator::InstallmentFormula;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::LoanInput;

/// fixed-installment (french) amortization
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnuityFormula;

impl InstallmentFormula for AnnuityFormula {
    fn monthly_payment(&self, input: &LoanInput) -> Result<Money> {
        annuity_payment(input.principal, input.annual_rate, input.term_months)
    }

    fn name(&self) -> &'static str {
        "annuity"
    }
}

/// unrounded installment: P * r * (1 + r)^n / ((1 + r)^n - 1)
pub fn annuity_payment(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Money> {
    let months = Decimal::from(term_months);
    let r = annual_rate.monthly_rate().as_decimal();

    if annual_rate.is_zero() || r.is_zero() {
        return Ok(principal / months);
    }

    let overflow = || LoanError::CalculationOverflow {
        term_months,
        rate: annual_rate,
    };

    let compound = compound_factor(Decimal::ONE + r, term_months).ok_or_else(overflow)?;
    let numerator = principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|v| v.checked_mul(compound))
        .ok_or_else(overflow)?;
    let denominator = compound - Decimal::ONE;

    // r below decimal resolution collapses the factor to one
    if denominator.is_zero() {
        return Ok(principal / months);
    }

    numerator
        .checked_div(denominator)
        .map(Money::from_decimal)
        .ok_or_else(overflow)
}

/// (base)^periods by repeated multiplication, None on overflow
pub(crate) fn compound_factor(base: Decimal, periods: u32) -> Option<Decimal> {
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor.checked_mul(base)?;
    }
    Some(factor)
}
