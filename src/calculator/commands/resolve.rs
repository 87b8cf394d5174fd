use crate::error::{CalcError, Result};
use crate::model::Operation;
use tracing::debug;

/// Maps an operation name to an [`Operation`]. Matching is exact and case-sensitive.
pub fn run(token: &str) -> Result<Operation> {
    let operation = Operation::ALL
        .into_iter()
        .find(|op| op.name() == token)
        .ok_or_else(|| {
            debug!(token, "unknown operation");
            CalcError::UnknownOperation(token.to_string())
        })?;
    debug!(%operation, "operation resolved");
    Ok(operation)
}
