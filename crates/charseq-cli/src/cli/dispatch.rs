//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors that pull the fields a command uses
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use charseq_lib::Verbosity;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::session::SessionArgs;
use crate::commands::trace::TraceArgs;

/// Flags shared by every command.
pub struct SessionParams {
    pub config_path: PathBuf,
    pub sequence: Option<String>,
    pub strict: bool,
    pub ignore_warnings: bool,
    pub max_length: Option<usize>,
    pub color: ColorChoice,
}

impl SessionParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: m
                .get_one::<PathBuf>("config_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            sequence: m.get_one::<String>("sequence").cloned(),
            strict: m.get_flag("strict"),
            ignore_warnings: m.get_flag("ignore_warnings"),
            max_length: m.get_one::<usize>("max_length").copied(),
            color: parse_color(m),
        }
    }
}

impl From<SessionParams> for SessionArgs {
    fn from(p: SessionParams) -> Self {
        Self {
            config_path: p.config_path,
            sequence: p.sequence,
            strict: p.strict,
            ignore_warnings: p.ignore_warnings,
            max_length: p.max_length,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub session: SessionParams,
    // Note: verbose is parsed but not extracted (unified flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            session: SessionParams::from_matches(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            session: p.session.into(),
        }
    }
}

pub struct ExecParams {
    pub session: SessionParams,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            session: SessionParams::from_matches(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            session: p.session.into(),
        }
    }
}

pub struct TraceParams {
    pub session: SessionParams,
    pub verbose: u8,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            session: SessionParams::from_matches(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            session: p.session.into(),
            verbosity,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
