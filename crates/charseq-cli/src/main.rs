mod cli;
mod commands;

use cli::{DumpParams, ExecParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("log") {
        commands::logging::init();
    }

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
