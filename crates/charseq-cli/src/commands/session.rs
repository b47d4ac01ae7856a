//! Shared setup for dump/exec/trace: load the config, apply flag overrides,
//! build the sequencer, and render its diagnostics.

use std::path::PathBuf;

use charseq_lib::{Colors, Config, Diagnostics, Sequence, Sequencer};
use tracing::debug;

use super::config_loader::{CallbackMode, load_config};

pub struct SessionArgs {
    pub config_path: PathBuf,
    pub sequence: Option<String>,
    pub strict: bool,
    pub ignore_warnings: bool,
    pub max_length: Option<usize>,
    pub color: bool,
}

pub struct Session {
    pub sequencer: Sequencer,
    /// Sequence from `-s`, used instead of the config's.
    pub sequence: Option<Sequence>,
    /// Text that diagnostic spans point into.
    pub source: String,
    /// The config's own sequence, which construction-time spans point into.
    pub config_source: String,
    /// Name shown for construction-time diagnostics.
    pub config_path: String,
    /// Diagnostics reported while the sequencer was built, not yet rendered.
    setup_count: usize,
    pub colors: Colors,
}

/// Load and build, exiting on unreadable config.
pub fn open(args: &SessionArgs, mode: CallbackMode) -> Session {
    let colors = Colors::new(args.color);
    let config = match load_config(&args.config_path, mode, colors) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };
    debug!(
        target: "charseq::cli",
        path = %args.config_path.display(),
        operations = config.operations.len(),
        values = config.values.len(),
        issues = config.issues().len(),
        "config loaded"
    );
    build(config, args)
}

/// Flags override the config: `--strict` and `--ignore-warnings` can only
/// switch on, `--max-length` replaces the configured limit.
pub fn build(mut config: Config, args: &SessionArgs) -> Session {
    config.strict_mode |= args.strict;
    config.ignore_warnings |= args.ignore_warnings;
    if args.max_length.is_some() {
        config.max_sequence_length = args.max_length;
    }

    let sequence = args.sequence.as_deref().map(Sequence::from);
    let config_source = config
        .sequence
        .as_ref()
        .map(Sequence::to_string_lossy)
        .unwrap_or_default();
    let source = match &sequence {
        Some(s) => s.to_string_lossy(),
        None => config_source.clone(),
    };

    let sequencer = Sequencer::with_config(config);
    let setup_count = sequencer.diagnostics().len();

    Session {
        sequencer,
        sequence,
        source,
        config_source,
        config_path: args.config_path.display().to_string(),
        setup_count,
        colors: Colors::new(args.color),
    }
}

impl Session {
    /// Render and clear the collected diagnostics.
    ///
    /// Diagnostics from building the sequencer point into the config's
    /// sequence; everything after points into `source`.
    pub fn render_diagnostics(&mut self) -> (String, Diagnostics) {
        let mut later = self.sequencer.take_diagnostics().into_iter();
        let setup: Diagnostics = later.by_ref().take(self.setup_count).collect();
        let later: Diagnostics = later.collect();
        self.setup_count = 0;

        let colored = self.colors.is_enabled();
        let rendered: Vec<String> = [
            (&setup, self.config_source.as_str(), self.config_path.as_str()),
            (&later, self.source.as_str(), "<sequence>"),
        ]
        .into_iter()
        .filter(|(diagnostics, _, _)| !diagnostics.is_empty())
        .map(|(diagnostics, source, path)| {
            diagnostics
                .printer()
                .source(source)
                .path(path)
                .colored(colored)
                .render()
        })
        .collect();

        let mut diagnostics = setup;
        diagnostics.extend(later);
        (rendered.join("\n"), diagnostics)
    }

    /// Print diagnostics to stderr. Returns whether any was an error.
    pub fn report(&mut self) -> bool {
        let (rendered, diagnostics) = self.render_diagnostics();
        if !rendered.is_empty() {
            eprintln!("{}", rendered);
        }
        diagnostics.has_errors()
    }
}
