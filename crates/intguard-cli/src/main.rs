//! intguard binary.
//!
//! # Usage
//!
//! ```bash
//! # Native width, report overflow as an error
//! intguard add 2 3
//!
//! # 8-bit operands, abort on overflow
//! intguard --width 8 --policy abort mul -- -128 2
//! ```

use std::{io::Write, process::ExitCode};

use clap::{Parser, Subcommand};
use intguard_cli::{CliError, EvalConfig, Width, evaluate};
use intguard_core::{ArithOp, OverflowPolicy};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Overflow-checked integer arithmetic
#[derive(Parser, Debug)]
#[command(name = "intguard")]
#[command(about = "Evaluate overflow-checked integer addition and multiplication")]
#[command(version)]
struct Args {
    /// Operand width in bits, or `size` for the native width
    #[arg(short, long, value_enum, default_value_t = Width::Size)]
    width: Width,

    /// What to do on overflow (report, abort)
    #[arg(short, long, default_value_t = OverflowPolicy::Report)]
    policy: OverflowPolicy,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Checked addition
    Add {
        /// Left operand
        #[arg(allow_negative_numbers = true)]
        lhs: i128,
        /// Right operand
        #[arg(allow_negative_numbers = true)]
        rhs: i128,
    },
    /// Checked multiplication
    Mul {
        /// Left operand
        #[arg(allow_negative_numbers = true)]
        lhs: i128,
        /// Right operand
        #[arg(allow_negative_numbers = true)]
        rhs: i128,
    },
}

impl Command {
    fn into_parts(self) -> (ArithOp, i128, i128) {
        match self {
            Self::Add { lhs, rhs } => (ArithOp::Add, lhs, rhs),
            Self::Mul { lhs, rhs } => (ArithOp::Mul, lhs, rhs),
        }
    }
}

impl Args {
    fn into_config(self) -> (EvalConfig, Command) {
        let config =
            EvalConfig { width: self.width, policy: self.policy, log_level: self.log_level };
        (config, self.command)
    }
}

fn main() -> ExitCode {
    let (config, command) = Args::parse().into_config();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let (op, lhs, rhs) = command.into_parts();
    let result = run(&config, op, lhs, rhs, &mut std::io::stdout().lock());
    if let Err(e) = &result {
        tracing::error!("{}", e);
    }

    ExitCode::from(exit_status(&result))
}

fn run<W: Write>(
    config: &EvalConfig,
    op: ArithOp,
    lhs: i128,
    rhs: i128,
    out: &mut W,
) -> Result<(), CliError> {
    let value = evaluate(config, op, lhs, rhs)?;
    writeln!(out, "{value}")?;

    Ok(())
}

fn exit_status(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => e.exit_code(),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["intguard", "add", "2", "3"]).unwrap();
        assert_eq!(args.width, Width::Size);
        assert_eq!(args.policy, OverflowPolicy::Report);
        assert_eq!(args.command.into_parts(), (ArithOp::Add, 2, 3));
    }

    #[test]
    fn parses_width_policy_and_negative_operands() {
        let args =
            Args::try_parse_from(["intguard", "--width", "8", "--policy", "abort", "mul", "-128", "2"])
                .unwrap();
        assert_eq!(args.width, Width::W8);
        assert_eq!(args.policy, OverflowPolicy::Abort);
        assert_eq!(args.command.into_parts(), (ArithOp::Mul, -128, 2));
    }

    #[test]
    fn log_level_flows_into_config() {
        let args =
            Args::try_parse_from(["intguard", "--log-level", "debug", "add", "1", "2"]).unwrap();
        let (config, command) = args.into_config();
        assert_eq!(config.log_level, "debug");
        assert_eq!(command.into_parts(), (ArithOp::Add, 1, 2));
    }

    fn run_args(argv: &[&str]) -> (u8, String) {
        let (config, command) = Args::try_parse_from(argv).unwrap().into_config();
        let (op, lhs, rhs) = command.into_parts();

        let mut out = Vec::new();
        let result = run(&config, op, lhs, rhs, &mut out);
        (exit_status(&result), String::from_utf8(out).unwrap())
    }

    #[test]
    fn success_prints_result_and_exits_zero() {
        assert_eq!(run_args(&["intguard", "add", "2", "3"]), (0, "5\n".to_string()));
        assert_eq!(run_args(&["intguard", "mul", "-3", "4"]), (0, "-12\n".to_string()));
    }

    #[test]
    fn overflow_exits_one_without_output() {
        assert_eq!(run_args(&["intguard", "--width", "8", "add", "127", "1"]), (1, String::new()));
        assert_eq!(run_args(&["intguard", "--width", "64", "mul", "-9223372036854775808", "2"]), (1, String::new()));
    }

    #[test]
    fn out_of_range_operand_exits_two() {
        assert_eq!(run_args(&["intguard", "--width", "8", "add", "300", "1"]), (2, String::new()));
    }

    #[test]
    #[should_panic(expected = "addition overflow")]
    fn abort_policy_panics_through_run() {
        let _ = run_args(&["intguard", "--width", "8", "--policy", "abort", "add", "127", "1"]);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Args::try_parse_from(["intguard", "--policy", "wrap", "add", "1", "2"]).is_err());
    }

    #[test]
    fn rejects_non_integer_operand() {
        assert!(Args::try_parse_from(["intguard", "add", "1.5", "2"]).is_err());
    }
}
