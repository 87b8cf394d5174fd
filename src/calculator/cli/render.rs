//! Turns an [`Outcome`] into the line printed on stdout and the process exit status.

use super::setup::OutputFormat;
use cli_calculator::api::Outcome;
use cli_calculator::error::CalcError;
use serde::Serialize;
use serde_json::{Number, Value};

/// JSON shape of an outcome: `{"status":"ok",...}` or `{"status":"error",...}`.
#[derive(Serialize, Debug)]
#[serde(tag = "status")]
enum JsonOutcome<'a> {
    #[serde(rename = "ok")]
    Success { result: Value },
    #[serde(rename = "error")]
    Failure {
        kind: &'static str,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        token: Option<&'a str>,
    },
}

pub fn render(outcome: &Outcome, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => render_json(outcome),
    }
}

pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Value(value) => format_number(*value),
        Outcome::Diagnostic(err) => err.to_string(),
    }
}

pub fn render_json(outcome: &Outcome) -> serde_json::Result<String> {
    let json = match outcome {
        Outcome::Value(value) => JsonOutcome::Success {
            result: json_number(*value),
        },
        Outcome::Diagnostic(err) => JsonOutcome::Failure {
            kind: err.kind(),
            message: err.to_string(),
            token: offending_token(err),
        },
    };
    serde_json::to_string(&json)
}

/// Default textual form: `9` for integral values, shortest round-trip form otherwise.
pub fn format_number(value: f64) -> String {
    // -0 prints as 0
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

/// Exit status for an outcome. Each diagnostic kind gets its own code.
pub fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Value(_) => 0,
        Outcome::Diagnostic(CalcError::MalformedArgumentCount) => 2,
        Outcome::Diagnostic(CalcError::InvalidNumericOperand { .. }) => 3,
        Outcome::Diagnostic(CalcError::UnknownOperation(_)) => 4,
        Outcome::Diagnostic(CalcError::DivisionByZero) => 5,
    }
}

fn offending_token(err: &CalcError) -> Option<&str> {
    match err {
        CalcError::InvalidNumericOperand { token } | CalcError::UnknownOperation(token) => {
            Some(token.as_str())
        }
        _ => None,
    }
}

// Integral values inside the exactly-representable range are emitted as JSON integers
// so that `9` and `{"result":9}` agree. Non-finite values become null.
fn json_number(value: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}
