/// payment methods - annuity versus simple interest for the same loan
use loan_calculator_rs::{LoanCalculator, LoanInput, Money, PaymentMethod, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::new(Money::from_major(100_000), Rate::from_percentage(10), 120);

    for method in [PaymentMethod::Annuity, PaymentMethod::SimpleInterest] {
        let result = LoanCalculator::new(method).calculate(&input)?;
        println!(
            "{}: monthly {} / total {} / interest {}",
            method.label(),
            result.monthly_payment,
            result.total_payment,
            result.total_interest,
        );
    }

    Ok(())
}
