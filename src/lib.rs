pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod quote;
pub mod types;
pub mod validation;

// re-export key types
pub use calculator::{
    calculate_loan, calculate_simple_interest, AnnuityFormula, InstallmentFormula,
    LoanCalculator, SimpleInterestFormula,
};
pub use config::{CalculatorConfig, TermLimits, ValidationLimits};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use format::{CurrencyFormat, FormattedLoanResult};
pub use quote::{LoanEngine, LoanQuote, PLACEHOLDER_MESSAGE};
pub use types::{LoanInput, LoanResult, PaymentMethod};
pub use validation::{
    normalize_numeric_input, validate_amount, validate_form, validate_interest_rate,
    validate_term, Field, FieldError, FormValidation, ValidationResult, Validator,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
