//! # Calculator Architecture
//!
//! The calculator is a **UI-agnostic evaluation library** with a thin CLI client on top.
//! One invocation is one calculation: the library takes the raw argument list and returns
//! a tagged [`api::Outcome`]; the binary turns that outcome into a line of output and an
//! exit code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads env settings, renders outcomes, installs logging   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - `calculate(args) -> Outcome`                             │
//! │  - Chains the pipeline stages, first failure wins           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → parse → resolve → evaluate                    │
//! │  - Each stage owns exactly one error kind                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! Evaluation is a single forward pass with four gates:
//!
//! 1. argument count is exactly three (`validate`)
//! 2. operand1 is numeric, then operand2 is numeric (`parse`)
//! 3. the operation name is known (`resolve`)
//! 4. the operation is applied (`evaluate`), which can still refuse a zero divisor
//!
//! A [`model::CalculationRequest`] only exists once the first three gates pass, so
//! `evaluate` never sees partial input.
//!
//! ## No I/O in Core
//!
//! From `api.rs` inward, code:
//! - Takes the arguments explicitly (never reads `std::env::args`)
//! - Returns regular Rust types (`Result<f64>` / `Outcome`)
//! - **Never** writes to stdout/stderr (it only emits `tracing` events)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The `calculate` facade and the [`api::Outcome`] sum type
//! - [`commands`]: One module per pipeline stage
//! - [`model`]: Core data types (`Operation`, `Operand`, `CalculationRequest`)
//! - [`error`]: The diagnostic taxonomy, whose `Display` is the user-facing text
//! - `cli`: Option parsing, rendering, and logging setup for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
