use std::path::PathBuf;

use scantab_compiler::syntax::by_name;
use scantab_compiler::{Config, Mode, PackConfig, Visibility, emit};

use super::error::{Error, fail};
use super::input::{Input, load_input};

pub struct EmitArgs {
    pub automaton_path: PathBuf,
    pub lang: String,
    pub switch: bool,
    pub unpacked: bool,
    pub visibility: Visibility,
    pub max_chunk_size: Option<usize>,
}

impl EmitArgs {
    pub fn config(&self) -> Config {
        let mode = if self.switch {
            Mode::Switch
        } else {
            Mode::RowMap
        };
        Config::new()
            .mode(mode)
            .packed(!self.unpacked)
            .visibility(self.visibility)
            .pack(pack_config(self.max_chunk_size))
    }
}

pub fn pack_config(max_chunk_size: Option<usize>) -> PackConfig {
    match max_chunk_size {
        Some(size) => PackConfig::new().max_chunk_size(size),
        None => PackConfig::new(),
    }
}

pub fn run(args: EmitArgs) {
    let result = load_input(&args.automaton_path).and_then(|input| render(&input, &args));
    match result {
        Ok(text) => print!("{text}"),
        Err(e) => fail(e),
    }
}

/// Generated declarations for `input`, or the first error.
pub fn render(input: &Input, args: &EmitArgs) -> Result<String, Error> {
    let syntax = by_name(&args.lang)?;
    let text = emit(&input.automaton, &input.classes, syntax, &args.config())?;
    Ok(text)
}
