use crate::error::{CalcError, Result};
use tracing::debug;

/// Number of arguments a calculation takes: operation, operand1, operand2.
pub const ARG_COUNT: usize = 3;

/// The three argument tokens, still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawArgs<'a> {
    pub operation: &'a str,
    pub operand1: &'a str,
    pub operand2: &'a str,
}

/// Checks the argument count only. Token contents are not looked at here.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<RawArgs<'_>> {
    match args {
        [operation, operand1, operand2] => Ok(RawArgs {
            operation: operation.as_ref(),
            operand1: operand1.as_ref(),
            operand2: operand2.as_ref(),
        }),
        _ => {
            debug!(count = args.len(), expected = ARG_COUNT, "argument count rejected");
            Err(CalcError::MalformedArgumentCount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_three() {
        let raw = run(&["add", "3", "6"]).unwrap();
        assert_eq!(raw.operation, "add");
        assert_eq!(raw.operand1, "3");
        assert_eq!(raw.operand2, "6");
    }

    #[test]
    fn rejects_empty() {
        let args: [&str; 0] = [];
        assert_eq!(run(&args), Err(CalcError::MalformedArgumentCount));
    }

    #[test]
    fn rejects_too_few() {
        assert_eq!(run(&["add"]), Err(CalcError::MalformedArgumentCount));
        assert_eq!(run(&["add", "3"]), Err(CalcError::MalformedArgumentCount));
    }

    #[test]
    fn rejects_too_many() {
        assert_eq!(
            run(&["add", "3", "6", "7"]),
            Err(CalcError::MalformedArgumentCount)
        );
    }

    #[test]
    fn does_not_inspect_tokens() {
        // Bad operation and bad operands still only fail on count.
        assert_eq!(
            run(&["nope", "x", "y", "z"]),
            Err(CalcError::MalformedArgumentCount)
        );
        assert!(run(&["nope", "x", "y"]).is_ok());
    }

    #[test]
    fn accepts_owned_strings() {
        let args = vec!["divide".to_string(), "10".to_string(), "2".to_string()];
        let raw = run(&args).unwrap();
        assert_eq!(raw.operation, "divide");
    }
}
