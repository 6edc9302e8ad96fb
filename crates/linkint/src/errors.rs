//! Error handling and exit codes.

use linkint_core::constants::exit_codes;
use linkint_core::ParseBigIntError;

/// Failures raised by the command-line front end itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    /// The operator argument is not one of the supported spellings.
    #[error("unknown operator {0:?} (expected +, -, *, or cmp)")]
    UnknownOperator(String),

    /// `--checked` subtraction whose subtrahend exceeds the minuend.
    #[error("subtraction underflow: {lhs} - {rhs} is negative")]
    Underflow {
        /// Minuend as given.
        lhs: String,
        /// Subtrahend as given.
        rhs: String,
    },
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ParseBigIntError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    match err.downcast_ref::<CliError>() {
        Some(CliError::UnknownOperator(_)) => exit_codes::ERROR_CONFIG,
        Some(CliError::Underflow { .. }) | None => exit_codes::ERROR_GENERIC,
    }
}
