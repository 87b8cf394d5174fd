use clap::{Parser, ValueEnum};
use std::ffi::OsString;

pub const FORMAT_ENV: &str = "CLI_CALCULATOR_FORMAT";
pub const VERBOSE_ENV: &str = "CLI_CALCULATOR_VERBOSE";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare result or diagnostic text
    #[default]
    Text,
    /// One JSON object per invocation
    Json,
}

/// Per-run settings.
///
/// These come from the environment only. Every command-line token belongs to the
/// calculation, so clap never sees argv here: it is handed just the binary name and
/// fills the fields from their `env` fallbacks.
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq)]
#[command(
    name = "cli-calculator",
    bin_name = "cli-calculator",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct RunConfig {
    /// Output format
    #[arg(long, env = FORMAT_ENV, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log verbosity (1 info, 2 debug, 3 trace); RUST_LOG takes precedence
    #[arg(long, env = VERBOSE_ENV, default_value_t = 0)]
    pub verbosity: u8,
}

impl RunConfig {
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(["cli-calculator"])
    }
}

/// The calculation arguments, program name excluded, in their original order.
///
/// Non UTF-8 tokens are converted lossily; they can never be a valid operand or
/// operation name, so they still fail at the matching gate.
pub fn calculation_args<I>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(argv: &[&str]) -> Vec<String> {
        calculation_args(
            std::iter::once("cli-calculator")
                .chain(argv.iter().copied())
                .map(OsString::from),
        )
    }

    #[test]
    fn definition_is_valid() {
        RunConfig::command().debug_assert();
    }

    #[test]
    fn drops_only_the_program_name() {
        assert_eq!(args(&["add", "3", "6"]), vec!["add", "3", "6"]);
        assert!(args(&[]).is_empty());
    }

    #[test]
    fn option_looking_tokens_are_kept() {
        assert_eq!(args(&["--help"]), vec!["--help"]);
        assert_eq!(args(&["-V"]), vec!["-V"]);
        assert_eq!(args(&["--", "add", "3", "6"]), vec!["--", "add", "3", "6"]);
        assert_eq!(args(&["-v", "3", "6"]), vec!["-v", "3", "6"]);
        assert_eq!(args(&["-f", "json", "add"]), vec!["-f", "json", "add"]);
    }

    #[test]
    fn negative_operands_are_kept() {
        assert_eq!(
            args(&["subtract", "-3", "-4.5"]),
            vec!["subtract", "-3", "-4.5"]
        );
    }

    #[test]
    fn settings_ignore_argv_shaped_input() {
        // Only the binary name is ever parsed, so no argv token can become a setting.
        let config = RunConfig::try_parse_from(["cli-calculator"]);
        assert!(config.is_ok());
        let result = RunConfig::try_parse_from(["cli-calculator", "add", "3", "6"]);
        assert!(result.is_err());
    }

    #[test]
    fn settings_parse_values() {
        let config =
            RunConfig::try_parse_from(["cli-calculator", "--format", "json", "--verbosity", "2"])
                .unwrap();
        assert_eq!(
            config,
            RunConfig {
                format: OutputFormat::Json,
                verbosity: 2,
            }
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let result = RunConfig::try_parse_from(["cli-calculator", "--format", "xml"]);
        assert!(result.is_err());
    }
}
