use super::config_loader::CallbackMode;
use super::session::{self, SessionArgs};

pub struct DumpArgs {
    pub session: SessionArgs,
}

pub fn run(args: DumpArgs) {
    let mut session = session::open(&args.session, CallbackMode::Silent);

    if let Some(sequence) = session.sequence.take() {
        session.sequencer.set_sequence(sequence);
    }

    let failed = session.report();
    print!("{}", session.sequencer.dump(session.colors));

    if failed {
        std::process::exit(1);
    }
}
