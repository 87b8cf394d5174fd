//! # CLI Behavior
//!
//! This is the only place that knows about stdout, stderr and exit codes.
//!
//! ```text
//! cli-calculator <operation> <operand1> <operand2>
//! ```
//!
//! - Every argument after the program name goes to [`cli_calculator::api::calculate`]
//!   untouched. There are no flags: `--help`, `-v` or `--` are ordinary tokens, counted
//!   and validated like any other.
//! - Settings come from the environment (`CLI_CALCULATOR_FORMAT`,
//!   `CLI_CALCULATOR_VERBOSE`, `RUST_LOG`), so they never change what argv means.
//! - Exactly one line goes to stdout: the result, or the diagnostic text. Diagnostics are
//!   written to stdout too, so callers capturing stdout see the exact message.
//! - Logs go to stderr and are off by default (see `logging`).
//! - The exit status is 0 on success and distinct per diagnostic kind (see `render`).
//!   A bad setting in the environment exits with 1 before any calculation.
//!
//! ## Module Structure
//!
//! - `setup`: Argument collection and the env-driven run configuration
//! - `render`: Text and JSON rendering, exit status mapping
//! - `logging`: tracing subscriber setup

mod logging;
mod render;
pub mod setup;

use cli_calculator::api::calculate;
use setup::RunConfig;
use std::process::ExitCode;

pub fn run() -> ExitCode {
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid environment setting: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.verbosity);

    let args = setup::calculation_args(std::env::args_os());
    tracing::debug!(?config, ?args, "starting");

    let outcome = calculate(&args);
    match render::render(&outcome, config.format) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::from(render::exit_status(&outcome))
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
