use thiserror::Error;

/// Every way a calculation can fail.
///
/// The `Display` output of each variant is the exact diagnostic text printed to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(
        "Usage: cli-calculator operation operand1 operand2 Supported operations: add, subtract, multiply, divide"
    )]
    MalformedArgumentCount,

    // The token is kept for logs and structured output; the message stays fixed.
    #[error("Invalid argument. Must be a numeric value.")]
    InvalidNumericOperand { token: String },

    #[error("Error: Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Error: Division by zero.")]
    DivisionByZero,
}

impl CalcError {
    /// Stable machine-readable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::MalformedArgumentCount => "malformed_argument_count",
            CalcError::InvalidNumericOperand { .. } => "invalid_numeric_operand",
            CalcError::UnknownOperation(_) => "unknown_operation",
            CalcError::DivisionByZero => "division_by_zero",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
