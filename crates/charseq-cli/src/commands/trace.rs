//! Trace execution for debugging.

use charseq_lib::{PrintTracer, Verbosity};

use super::config_loader::CallbackMode;
use super::session::{self, SessionArgs};

pub struct TraceArgs {
    pub session: SessionArgs,
    pub verbosity: Verbosity,
}

pub fn run(args: TraceArgs) {
    let mut session = session::open(&args.session, CallbackMode::Silent);
    let colors = session.colors;
    let mut tracer = PrintTracer::new(colors, args.verbosity);

    let stats = session
        .sequencer
        .execute_with(session.sequence.as_ref(), &mut tracer);
    print!("{}", tracer.render());

    let failed = session.report();
    let Some(stats) = stats else {
        std::process::exit(1);
    };

    println!(
        "{}--- invoked {}, skipped {}{}",
        colors.dim, stats.invoked, stats.skipped, colors.reset
    );
    if failed {
        std::process::exit(1);
    }
}
