//! Command builders for the CLI.
//!
//! All commands accept the same flags so switching between them only means
//! changing the subcommand. Flags a command does not use are hidden from
//! its `--help`.

use clap::Command;

use super::args::*;

/// Arguments every command uses.
fn with_session_args(cmd: Command) -> Command {
    cmd.arg(config_path_arg())
        .arg(sequence_arg())
        .arg(strict_arg())
        .arg(ignore_warnings_arg())
        .arg(max_length_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("charseq")
        .about("Decode, execute and trace character-encoded operation sequences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_arg())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Decode a sequence and list its records.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Decode a sequence and list its operation records")
        .override_usage(
            "\
  charseq dump <CONFIG>
  charseq dump <CONFIG> -s <SEQ>",
        )
        .after_help(
            r#"EXAMPLES:
  charseq dump shapes.json             # the config's sequence
  charseq dump shapes.json -s AaabB    # another sequence"#,
        );

    with_session_args(cmd).arg(verbose_arg().hide(true))
}

/// Execute a sequence, printing each invoked operation.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Execute a sequence, printing each invoked operation")
        .override_usage(
            "\
  charseq exec <CONFIG>
  charseq exec <CONFIG> -s <SEQ>",
        )
        .after_help(
            r#"EXAMPLES:
  charseq exec shapes.json                     # run the config's sequence
  charseq exec shapes.json -s AaabBabcc        # run a raw sequence
  charseq exec shapes.json --max-length 8 --strict"#,
        );

    with_session_args(cmd).arg(verbose_arg().hide(true))
}

/// Execute a sequence with a step-by-step trace.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace execution step by step")
        .override_usage(
            "\
  charseq trace <CONFIG>
  charseq trace <CONFIG> -s <SEQ>",
        )
        .after_help(
            r#"EXAMPLES:
  charseq trace shapes.json
  charseq trace shapes.json -s 'xAa?B' -v    # show codes and dropped prefix"#,
        );

    with_session_args(cmd).arg(verbose_arg())
}
