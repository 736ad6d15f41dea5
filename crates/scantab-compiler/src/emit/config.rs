//! Configuration types for table emission.

use crate::pack::PackConfig;
use crate::syntax::Visibility;

/// How transitions reach the generated scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Row map plus flattened transition table.
    #[default]
    RowMap,
    /// Nested switch statements, no transition table.
    Switch,
}

/// Configuration for table emission.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Pack the transition table into string literals
    pub(crate) packed: bool,
    pub(crate) mode: Mode,
    /// Visibility of the materialized table constants
    pub(crate) visibility: Visibility,
    pub(crate) pack: PackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packed: true,
            mode: Mode::default(),
            visibility: Visibility::Private,
            pack: PackConfig::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the transition table is packed. A plain array literal is
    /// emitted otherwise.
    pub fn packed(mut self, value: bool) -> Self {
        self.packed = value;
        self
    }

    pub fn mode(mut self, value: Mode) -> Self {
        self.mode = value;
        self
    }

    /// Set the visibility of table constants.
    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = value;
        self
    }

    /// Set the chunking limits of packed arrays.
    pub fn pack(mut self, value: PackConfig) -> Self {
        self.pack = value;
        self
    }
}
