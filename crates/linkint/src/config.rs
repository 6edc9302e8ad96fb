//! Application configuration from CLI flags and environment.

use clap::Parser;

/// linkint: arithmetic on arbitrarily large non-negative decimal integers.
#[derive(Parser, Debug)]
#[command(name = "linkint", version, about)]
pub struct AppConfig {
    /// Left operand (decimal digits).
    pub lhs: String,

    /// Operator: `+`, `-`, `*` or `cmp` (also `add`, `sub`, `mul`).
    #[arg(allow_hyphen_values = true)]
    pub op: String,

    /// Right operand (decimal digits).
    pub rhs: String,

    /// Fail on subtraction underflow instead of saturating at zero.
    #[arg(long, env = "LINKINT_CHECKED")]
    pub checked: bool,

    /// Print digit pool statistics to stderr.
    #[arg(long)]
    pub stats: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
