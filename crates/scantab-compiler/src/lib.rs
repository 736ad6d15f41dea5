//! scantab compiler: table compression and packed-array emission.
//!
//! This crate turns a DFA into generated-source fragments:
//! - `reduce` - duplicate row/column elimination
//! - `group` - per-state transition groups and default selection for switch emission
//! - `pack` - chunked string-literal packing with run-length and hi/low codecs
//! - `syntax` - target-language syntax (Java, Scala)
//! - `emit` - the pipeline tying it together

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod group;
pub mod pack;
pub mod reduce;
pub mod syntax;

pub use emit::{Config, EmitError, Emitter, Fragment, Mode, emit};
pub use pack::{PackConfig, PackError};
pub use syntax::{TargetSyntax, Visibility};

/// Errors surfaced by the compiler crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown target syntax `{0}`")]
    UnknownSyntax(String),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
