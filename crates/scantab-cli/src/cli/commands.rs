//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("scantab")
        .about("Compress DFA transition tables into packed lexer source")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(emit_command())
        .subcommand(stats_command())
}

/// Print the generated table declarations.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Generate table declarations for an automaton")
        .override_usage(
            "\
  scantab emit <AUTOMATON>
  scantab emit <AUTOMATON> -l scala
  scantab emit <AUTOMATON> --switch",
        )
        .after_help(
            r#"EXAMPLES:
  scantab emit dfa.json                    # packed Java tables
  scantab emit dfa.json -l scala           # Scala syntax
  scantab emit dfa.json --switch           # nested switch instead of ZZ_TRANS
  scantab emit dfa.json --unpacked         # ZZ_TRANS as an array literal
  scantab emit - --public < dfa.json       # read stdin, public constants"#,
        )
        .arg(automaton_path_arg())
        .arg(lang_arg())
        .arg(switch_arg())
        .arg(unpacked_arg())
        .arg(private_arg())
        .arg(public_arg())
        .arg(max_chunk_size_arg())
}

/// Print reduction and packing statistics.
pub fn stats_command() -> Command {
    Command::new("stats")
        .about("Show table sizes before and after reduction")
        .after_help(
            r#"EXAMPLES:
  scantab stats dfa.json
  scantab stats dfa.json --max-chunk-size 4096"#,
        )
        .arg(automaton_path_arg())
        .arg(max_chunk_size_arg())
}
