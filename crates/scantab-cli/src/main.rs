mod cli;
mod commands;

use cli::{EmitParams, StatsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    init_logger(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("emit", m)) => {
            let params = EmitParams::from_matches(m);
            commands::emit::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `RUST_LOG` applies unless `-v` is given; each `-v` raises the level by one.
fn init_logger(verbosity: u8) {
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default());
    let level = match verbosity {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };
    if let Some(level) = level {
        logger.filter(None, level);
    }
    logger.init();
}
