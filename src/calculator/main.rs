//! # cli-calculator
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and hands its exit status back to the process.
//!
//! Everything evaluated here goes through the library's `api::calculate`; the CLI adds
//! env-driven settings, rendering, logging setup and exit codes on top.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run()
}
