/// validation - raw form input through the engine, the way a UI would on each keystroke
use loan_calculator_rs::{normalize_numeric_input, LoanEngine, LoanQuote};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = LoanEngine::default();
    let term = engine.default_term();

    let attempts = [
        ("", ""),
        ("abc", "12"),
        ("-5", "12"),
        ("1000000000", "12"),
        ("1000000", "150"),
        ("1000000", "12"),
    ];

    for (amount, rate) in attempts {
        println!("amount={amount:?} rate={rate:?}");
        match engine.quote(amount, rate, term)? {
            LoanQuote::Calculated { result, info, .. } => {
                let formatted = engine.format_result(&result);
                println!("  {info}");
                println!(
                    "  monthly {} / total {} / interest {}",
                    formatted.monthly_payment,
                    formatted.total_payment,
                    formatted.total_interest
                );
            }
            LoanQuote::Placeholder { validation, info, .. } => {
                println!("  {info}");
                for (field, message) in validation.errors() {
                    println!("  {field:?}: {message}");
                }
            }
        }
    }

    // keystroke filter applied before validation
    let typed = "$1.500.000";
    let normalized = normalize_numeric_input(typed);
    let verdict = engine.validator().validate_amount(&normalized);
    println!("{typed:?} normalizes to {normalized:?}, read as {:?}", verdict.value);

    Ok(())
}
