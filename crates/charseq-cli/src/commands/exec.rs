//! Execute a sequence; every invoked operation prints its call.

use super::config_loader::CallbackMode;
use super::session::{self, SessionArgs};

pub struct ExecArgs {
    pub session: SessionArgs,
}

pub fn run(args: ExecArgs) {
    let mut session = session::open(&args.session, CallbackMode::Print);

    let invoked = session.sequencer.execute(session.sequence.as_ref());
    let failed = session.report();

    if failed || invoked.is_none() {
        std::process::exit(1);
    }
}
