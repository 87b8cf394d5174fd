use crate::error::{CalcError, Result};
use crate::model::Operand;
use tracing::debug;

/// Parses one operand token.
///
/// Accepts whatever `f64::from_str` accepts (optional sign, integer, decimal and
/// exponent forms) as long as the value is finite. `inf`, `NaN`, empty tokens and
/// tokens with surrounding whitespace are rejected.
pub fn run(token: &str) -> Result<Operand> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            debug!(token, value, "operand parsed");
            Ok(Operand::new(value))
        }
        _ => {
            debug!(token, "operand rejected");
            Err(CalcError::InvalidNumericOperand {
                token: token.to_string(),
            })
        }
    }
}
