/// quick start - minimal example to get started
use loan_calculator_rs::{calculate_loan, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1,000,000 over 12 months at 12% a year
    let result = calculate_loan(Money::from_major(1_000_000), Rate::from_percentage(12), 12)?;

    println!("monthly payment: {}", result.monthly_payment);
    println!("total payment:   {}", result.total_payment);
    println!("total interest:  {}", result.total_interest);

    Ok(())
}
