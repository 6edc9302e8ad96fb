//! Application entry point and dispatch.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

use linkint_core::BigInt;
use linkint_memory::{local_pool, PoolStats};

use crate::config::AppConfig;
use crate::errors::CliError;

/// Binary operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// Three-way comparison.
    Cmp,
}

impl FromStr for Operator {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Self::Add),
            "-" | "sub" => Ok(Self::Sub),
            "*" | "x" | "mul" => Ok(Self::Mul),
            "cmp" => Ok(Self::Cmp),
            _ => Err(CliError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Cmp => "cmp",
        })
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(config, &mut stdout.lock(), &mut stderr.lock())
}

/// Run against explicit output streams.
pub fn run_with(config: &AppConfig, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let op: Operator = config.op.parse()?;
    let lhs: BigInt = config
        .lhs
        .parse()
        .with_context(|| format!("invalid left operand {:?}", config.lhs))?;
    let rhs: BigInt = config
        .rhs
        .parse()
        .with_context(|| format!("invalid right operand {:?}", config.rhs))?;
    debug!(%op, lhs_digits = lhs.digit_count(), rhs_digits = rhs.digit_count(), "evaluating");

    let answer = evaluate(&lhs, op, &rhs, config.checked)?;
    writeln!(out, "{answer}")?;

    if config.stats {
        write_stats(err, &local_pool::<u8>().borrow().stats())?;
    }
    Ok(())
}

/// Compute `lhs op rhs` and render the answer.
///
/// Comparison renders as `-1`, `0` or `1`.
pub fn evaluate(lhs: &BigInt, op: Operator, rhs: &BigInt, checked: bool) -> Result<String> {
    let answer = match op {
        Operator::Add => (lhs + rhs).to_string(),
        Operator::Mul => (lhs * rhs).to_string(),
        Operator::Sub if checked => lhs
            .checked_sub(rhs)
            .ok_or_else(|| CliError::Underflow {
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
            })?
            .to_string(),
        Operator::Sub => (lhs - rhs).to_string(),
        Operator::Cmp => match lhs.compare(rhs) {
            Ordering::Less => "-1",
            Ordering::Equal => "0",
            Ordering::Greater => "1",
        }
        .to_string(),
    };
    Ok(answer)
}

fn write_stats(err: &mut impl Write, stats: &PoolStats) -> io::Result<()> {
    writeln!(
        err,
        "pool: hits={} misses={} releases={} live={} free={} hit_rate={:.1}%",
        stats.hits,
        stats.misses,
        stats.releases,
        stats.live,
        stats.free,
        stats.hit_rate() * 100.0
    )
}
