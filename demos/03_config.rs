/// config - load bounds and currency settings from json
use loan_calculator_rs::{CalculatorConfig, LoanEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "payment_method": "annuity",
        "validation": { "max_amount": "5000000", "max_rate_percent": "36" },
        "term": { "min_months": 6, "max_months": 72, "default_months": 24 }
    }"#;

    let config = CalculatorConfig::from_json(json)?;
    let engine = LoanEngine::new(config)?;

    let limits = engine.validator().limits();
    let term = engine.validator().term_limits();
    println!(
        "amount up to {}, rate up to {}%, {}..={} months",
        limits.max_amount, limits.max_rate_percent, term.min_months, term.max_months
    );

    let quote = engine.quote("2500000", "40", engine.default_term())?;
    println!("{}", quote.to_json()?);

    let quote = engine.quote("2500000", "18.5", engine.default_term())?;
    println!("{}", quote.to_json()?);

    println!("{}", engine.config().to_json()?);

    Ok(())
}
