//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `emit` and `stats` can share
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Automaton JSON file (positional, "-" for stdin).
pub fn automaton_path_arg() -> Arg {
    Arg::new("automaton_path")
        .value_name("AUTOMATON")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Automaton JSON file (use \"-\" for stdin)")
}

/// Target language (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .default_value("java")
        .help("Target language (java, scala)")
}

/// Emit nested switches instead of a transition table (--switch).
pub fn switch_arg() -> Arg {
    Arg::new("switch")
        .long("switch")
        .action(ArgAction::SetTrue)
        .help("Encode transitions as nested switch statements")
}

/// Plain array literal for the transition table (--unpacked).
pub fn unpacked_arg() -> Arg {
    Arg::new("unpacked")
        .long("unpacked")
        .action(ArgAction::SetTrue)
        .help("Emit the transition table as a plain array literal")
}

/// Private table constants (--private), the default.
pub fn private_arg() -> Arg {
    Arg::new("private")
        .long("private")
        .action(ArgAction::SetTrue)
        .conflicts_with("public")
        .help("Declare table constants private (default)")
}

/// Public table constants (--public).
pub fn public_arg() -> Arg {
    Arg::new("public")
        .long("public")
        .action(ArgAction::SetTrue)
        .help("Declare table constants public")
}

/// Chunk size limit in modified UTF-8 bytes (--max-chunk-size).
pub fn max_chunk_size_arg() -> Arg {
    Arg::new("max_chunk_size")
        .long("max-chunk-size")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Maximum encoded size of one packed string literal")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log progress to stderr (repeat for more detail)")
}
