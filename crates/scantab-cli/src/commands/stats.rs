use std::fmt;
use std::path::PathBuf;

use scantab_compiler::reduce::reduce_rows;
use scantab_compiler::syntax::Java;
use scantab_compiler::{Config, Emitter, PackConfig};

use super::emit::pack_config;
use super::error::{Error, fail};
use super::input::{Input, load_input};

pub struct StatsArgs {
    pub automaton_path: PathBuf,
    pub max_chunk_size: Option<usize>,
}

pub fn run(args: StatsArgs) {
    let result = load_input(&args.automaton_path)
        .and_then(|input| collect(&input, pack_config(args.max_chunk_size)));
    match result {
        Ok(stats) => print!("{stats}"),
        Err(e) => fail(e),
    }
}

/// Table dimensions and chunk counts of the default (row map) emission.
#[derive(Debug, PartialEq, Eq)]
pub struct Stats {
    pub states: usize,
    pub rows: usize,
    pub classes: usize,
    pub columns: usize,
    /// Constant name and chunk count; `None` for plain arrays.
    pub arrays: Vec<(String, Option<usize>)>,
}

pub fn collect(input: &Input, pack: PackConfig) -> Result<Stats, Error> {
    let matrix = input.automaton.matrix();
    let emitter = Emitter::new(
        &input.automaton,
        &input.classes,
        &Java,
        Config::new().pack(pack),
    );
    let rows = reduce_rows(matrix, emitter.columns());

    let arrays = emitter
        .emit()?
        .into_iter()
        .map(|fragment| {
            let chunks = fragment.packed.is_some().then(|| fragment.chunk_count());
            (fragment.name, chunks)
        })
        .collect();

    Ok(Stats {
        states: matrix.num_states(),
        rows: rows.len,
        classes: matrix.num_classes(),
        columns: emitter.columns().len,
        arrays,
    })
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "states:  {} -> {}", self.states, self.rows)?;
        writeln!(f, "classes: {} -> {}", self.classes, self.columns)?;
        for (name, chunks) in &self.arrays {
            match chunks {
                Some(1) => writeln!(f, "{name}: 1 chunk")?,
                Some(n) => writeln!(f, "{name}: {n} chunks")?,
                None => writeln!(f, "{name}: plain")?,
            }
        }
        Ok(())
    }
}
