//! Error type shared by all reactor design calculations.
//!
//! Every calculation is a pure function of its inputs, so each variant describes
//! a problem with the input data. Nothing here is transient and nothing is retried:
//! the caller shows the message and asks for corrected input.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReactorDesignError {
    /// input outside the domain where the formula or the table is defined
    #[error("Domain error: {0}")]
    DomainError(String),
    /// zero or negative rate (or rate constant) where a volume or time is requested
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
    #[error(
        "Insufficient data: {found} rate point(s) lie in [{x_int}, {x_final}], at least 2 are needed to integrate"
    )]
    InsufficientData {
        found: usize,
        x_int: f64,
        x_final: f64,
    },
    #[error("Parse error at line {line}, column {column}: cannot read '{token}' as a number")]
    ParseError {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
