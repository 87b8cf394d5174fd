use crate::error::{CalcError, Result};
use crate::model::{CalculationRequest, Operation};
use tracing::debug;

/// Applies the request's operation to its operands, operand1 first.
///
/// A zero divisor (either sign) is refused rather than producing infinity or NaN.
pub fn run(request: &CalculationRequest) -> Result<f64> {
    let a = request.operand1().value();
    let b = request.operand2().value();

    let result = match request.operation() {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                debug!(dividend = a, "division by zero refused");
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    debug!(operation = %request.operation(), a, b, result, "evaluated");
    Ok(result)
}
