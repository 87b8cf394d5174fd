//! # API Facade
//!
//! The single entry point for UI clients. [`calculate`] takes the argument list
//! (program name excluded) and returns an [`Outcome`]: either the numeric result or the
//! diagnostic that stopped the pipeline. Rendering that outcome as text, JSON or an exit
//! code is the client's job.
//!
//! The stages run in a fixed order and the first failure wins:
//! argument count, operand1, operand2, operation name, evaluation.

use crate::commands::{evaluate, parse, resolve, validate};
use crate::error::{CalcError, Result};
use crate::model::CalculationRequest;

/// The result of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    Diagnostic(CalcError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl From<Result<f64>> for Outcome {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(err) => Outcome::Diagnostic(err),
        }
    }
}

/// Runs one calculation over the raw argument list.
pub fn calculate<S: AsRef<str>>(args: &[S]) -> Outcome {
    let outcome: Outcome = run(args).into();
    tracing::info!(?outcome, "calculation finished");
    outcome
}

/// Same pipeline as [`calculate`], as a `Result` for callers that want `?`.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<f64> {
    let raw = validate::run(args)?;
    let operand1 = parse::run(raw.operand1)?;
    let operand2 = parse::run(raw.operand2)?;
    let operation = resolve::run(raw.operation)?;
    evaluate::run(&CalculationRequest::new(operation, operand1, operand2))
}
