pub mod annuity;
pub mod simple;

use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::types::{LoanInput, LoanResult, PaymentMethod};

pub use annuity::{annuity_payment, AnnuityFormula};
pub use simple::{simple_interest_payment, simple_interest_total, SimpleInterestFormula};

/// trait for deriving the unrounded monthly installment
pub trait InstallmentFormula {
    fn monthly_payment(&self, input: &LoanInput) -> Result<Money>;

    fn name(&self) -> &'static str;
}

/// computes aggregate loan figures with the selected payment method
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanCalculator {
    method: PaymentMethod,
}

impl LoanCalculator {
    pub fn new(method: PaymentMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    fn formula(&self) -> &'static dyn InstallmentFormula {
        match self.method {
            PaymentMethod::Annuity => &AnnuityFormula,
            PaymentMethod::SimpleInterest => &SimpleInterestFormula,
        }
    }

    /// calculate monthly payment, total payment and total interest.
    ///
    /// Inputs must already be validated: principal > 0, 0 <= rate <= 100%,
    /// term >= 1. The monthly payment is rounded to cents first and the
    /// totals derive from that rounded installment, so a zero-rate loan can
    /// report a few cents of negative interest.
    pub fn calculate(&self, input: &LoanInput) -> Result<LoanResult> {
        debug_assert!(input.term_months >= 1, "term must be at least one month");
        debug_assert!(input.principal.is_positive(), "principal must be positive");
        debug_assert!(
            input.annual_rate >= Rate::ZERO && input.annual_rate <= Rate::ONE,
            "annual rate must be within 0..=100%"
        );

        let formula = self.formula();
        let monthly_payment = formula.monthly_payment(input)?.round_currency();
        let total_payment = (monthly_payment * Decimal::from(input.term_months)).round_currency();
        let total_interest = (total_payment - input.principal).round_currency();

        debug!(
            formula = formula.name(),
            principal = %input.principal,
            rate = %input.annual_rate,
            term_months = input.term_months,
            monthly_payment = %monthly_payment,
            "loan calculated"
        );

        Ok(LoanResult {
            monthly_payment,
            total_payment,
            total_interest,
        })
    }
}

/// calculate with the default fixed-installment method
pub fn calculate_loan(principal: Money, annual_rate: Rate, term_months: u32) -> Result<LoanResult> {
    LoanCalculator::default().calculate(&LoanInput::new(principal, annual_rate, term_months))
}

/// monthly installment under simple interest, rounded to cents
pub fn calculate_simple_interest(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    simple_interest_payment(principal, annual_rate, term_months).round_currency()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: Decimal) -> Money {
        Money::from_decimal(d)
    }

    #[test]
    fn test_zero_rate_rounding_artifact() {
        let result = calculate_loan(Money::from_major(1_000_000), Rate::ZERO, 12).unwrap();

        assert_eq!(result.monthly_payment, money(dec!(83333.33)));
        assert_eq!(result.total_payment, money(dec!(999999.96)));
        assert_eq!(result.total_interest, money(dec!(-0.04)));
    }

    #[test]
    fn test_twelve_percent_over_a_year() {
        let principal = Money::from_major(1_000_000);
        let result = calculate_loan(principal, Rate::from_percentage(12), 12).unwrap();

        let expected = money(dec!(88848.79));
        assert!((result.monthly_payment - expected).abs() <= money(dec!(0.01)));
        assert_eq!(result.total_payment, result.monthly_payment * Decimal::from(12));
        assert_eq!(result.total_interest, result.total_payment - principal);
        assert_eq!(result.total_payment, money(dec!(1066185.48)));
        assert_eq!(result.total_interest, money(dec!(66185.48)));
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let principal = Money::from_decimal(dec!(250000.50));
        let rate = Rate::from_percent_decimal(dec!(7.35));

        let first = calculate_loan(principal, rate, 48).unwrap();
        let second = calculate_loan(principal, rate, 48).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.monthly_payment.to_string(), second.monthly_payment.to_string());
    }

    #[test]
    fn test_totals_cover_principal_for_positive_rates() {
        let principals = [dec!(1000), dec!(10000), dec!(250000), dec!(999999999)];
        let terms = [1, 6, 12, 60, 360];

        for principal in principals {
            for term in terms {
                for pct in 1..=100u32 {
                    let principal = money(principal);
                    let result = calculate_loan(principal, Rate::from_percentage(pct), term).unwrap();
                    assert!(result.monthly_payment.is_positive());
                    assert!(result.total_payment >= principal, "{pct}% over {term}");
                    assert!(!result.total_interest.is_negative(), "{pct}% over {term}");
                }
            }
        }
    }

    #[test]
    fn test_payment_rises_with_rate() {
        let principal = Money::from_major(150_000);
        for term in [1, 12, 36, 240] {
            let mut previous = Money::ZERO;
            for step in 0..=200u32 {
                let rate = Rate::from_bps(step * 50);
                let result = calculate_loan(principal, rate, term).unwrap();
                assert!(result.monthly_payment >= previous, "rate {rate} term {term}");
                previous = result.monthly_payment;
            }
        }
    }

    #[test]
    fn test_simple_interest_method() {
        let calculator = LoanCalculator::new(PaymentMethod::SimpleInterest);
        let input = LoanInput::new(Money::from_major(12_000), Rate::from_percentage(10), 12);

        let result = calculator.calculate(&input).unwrap();
        assert_eq!(result.monthly_payment, Money::from_major(1_100));
        assert_eq!(result.total_payment, Money::from_major(13_200));
        assert_eq!(result.total_interest, Money::from_major(1_200));
    }

    #[test]
    fn test_annuity_costs_less_than_simple_interest_over_long_terms() {
        // simple interest charges the full principal for the whole term
        let input = LoanInput::new(Money::from_major(100_000), Rate::from_percentage(10), 120);
        let annuity = LoanCalculator::new(PaymentMethod::Annuity).calculate(&input).unwrap();
        let simple = LoanCalculator::new(PaymentMethod::SimpleInterest).calculate(&input).unwrap();

        assert!(annuity.total_interest < simple.total_interest);
    }

    #[test]
    fn test_calculate_simple_interest_rounds() {
        let payment = calculate_simple_interest(Money::from_major(1_000), Rate::from_percentage(5), 7);
        // 1000 * 0.05 * 7 / 12 = 29.1666..., (1029.1666...) / 7 = 147.0238...
        assert_eq!(payment, money(dec!(147.02)));
    }

    #[test]
    fn test_default_method_is_annuity() {
        assert_eq!(LoanCalculator::default().method(), PaymentMethod::Annuity);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "term must be at least one month")]
    fn test_zero_term_is_a_programming_error() {
        let _ = calculate_loan(Money::from_major(1_000), Rate::ZERO, 0);
    }
}
