//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same definition can be reused with different visibility.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON config file (positional).
pub fn config_path_arg() -> Arg {
    Arg::new("config_path")
        .value_name("CONFIG")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON config file (use \"-\" for stdin)")
}

/// Inline sequence (-s/--sequence).
pub fn sequence_arg() -> Arg {
    Arg::new("sequence")
        .short('s')
        .long("sequence")
        .value_name("SEQ")
        .help("Sequence to use instead of the config's")
}

/// Strict error policy (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Refuse out-of-policy input instead of warning")
}

/// Drop warnings (--ignore-warnings).
pub fn ignore_warnings_arg() -> Arg {
    Arg::new("ignore_warnings")
        .long("ignore-warnings")
        .action(ArgAction::SetTrue)
        .help("Do not report warnings in lenient mode")
}

/// Maximum sequence length (--max-length).
pub fn max_length_arg() -> Arg {
    Arg::new("max_length")
        .long("max-length")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Maximum sequence length in UTF-16 code units")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v for argument codes and dropped codes).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Show argument codes next to values and dropped leading codes")
}

/// Structured logging to stderr (--log).
pub fn log_arg() -> Arg {
    Arg::new("log")
        .long("log")
        .global(true)
        .action(ArgAction::SetTrue)
        .help("Log policy reports to stderr (filter with RUST_LOG)")
}
