//! # Command Layer
//!
//! One module per pipeline stage. Every stage exposes a `run` function that either
//! hands its product to the next stage or fails with the single [`CalcError`] variant
//! it is responsible for:
//!
//! | stage      | input                 | output               | failure                  |
//! |------------|-----------------------|----------------------|--------------------------|
//! | `validate` | raw argument list     | [`validate::RawArgs`] | `MalformedArgumentCount` |
//! | `parse`    | operand token         | `Operand`            | `InvalidNumericOperand`  |
//! | `resolve`  | operation token       | `Operation`          | `UnknownOperation`       |
//! | `evaluate` | `CalculationRequest`  | `f64`                | `DivisionByZero`         |
//!
//! The stages hold no state between calls; identical input always yields identical output.
//!
//! [`CalcError`]: crate::error::CalcError

pub mod evaluate;
pub mod parse;
pub mod resolve;
pub mod validate;
