//! Automaton input files.
//!
//! ```json
//! {
//!   "max_char": 127,
//!   "classes": [[[97, 122]], [[48, 57]]],
//!   "matrix": [[null, 1, 2], [null, 1, null], [null, null, 2]],
//!   "finals": [false, true, true],
//!   "actions": [null, 0, 1]
//! }
//! ```
//!
//! `classes` are fed to `CharClasses::make_class` in order; the matrix
//! columns are indexed by the resulting class numbers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use scantab_core::{Automaton, CharClasses, CharCode, Interval, IntervalSet};
use serde::Deserialize;

use super::error::Error;

#[derive(Deserialize)]
struct InputFile {
    max_char: CharCode,
    #[serde(default)]
    classes: Vec<Vec<Interval>>,
    #[serde(flatten)]
    automaton: Automaton,
}

/// A validated automaton with its character classes.
pub struct Input {
    pub automaton: Automaton,
    pub classes: CharClasses,
}

pub fn parse_input(text: &str) -> Result<Input, Error> {
    let file: InputFile = serde_json::from_str(text)?;

    let mut classes = CharClasses::new(file.max_char);
    for set in file.classes {
        classes.make_class(&set.into_iter().collect::<IntervalSet>());
    }
    log::info!(
        "{} states, {} classes",
        file.automaton.num_states(),
        classes.num_classes()
    );

    Ok(Input {
        automaton: file.automaton,
        classes,
    })
}

/// Load from a file, or from stdin when `path` is "-".
pub fn load_input(path: &Path) -> Result<Input, Error> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        buf
    } else {
        fs::read_to_string(path).map_err(read_error)?
    };
    parse_input(&text)
}
