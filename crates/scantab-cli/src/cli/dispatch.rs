//! Dispatch logic: extract params from `ArgMatches` and convert them to
//! command args.

use std::path::PathBuf;

use clap::ArgMatches;
use scantab_compiler::Visibility;

use crate::commands::emit::EmitArgs;
use crate::commands::stats::StatsArgs;

pub struct EmitParams {
    pub automaton_path: PathBuf,
    pub lang: String,
    pub switch: bool,
    pub unpacked: bool,
    pub visibility: Visibility,
    pub max_chunk_size: Option<usize>,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let visibility = if m.get_flag("public") {
            Visibility::Public
        } else {
            Visibility::Private
        };
        Self {
            automaton_path: automaton_path(m),
            lang: m
                .get_one::<String>("lang")
                .cloned()
                .unwrap_or_else(|| "java".to_string()),
            switch: m.get_flag("switch"),
            unpacked: m.get_flag("unpacked"),
            visibility,
            max_chunk_size: m.get_one::<usize>("max_chunk_size").copied(),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            lang: p.lang,
            switch: p.switch,
            unpacked: p.unpacked,
            visibility: p.visibility,
            max_chunk_size: p.max_chunk_size,
        }
    }
}

pub struct StatsParams {
    pub automaton_path: PathBuf,
    pub max_chunk_size: Option<usize>,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: automaton_path(m),
            max_chunk_size: m.get_one::<usize>("max_chunk_size").copied(),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            max_chunk_size: p.max_chunk_size,
        }
    }
}

/// The positional is required, so clap has already rejected its absence.
fn automaton_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("automaton_path")
        .cloned()
        .unwrap_or_default()
}
