//! Table emission.
//!
//! Turns an automaton and its character classes into generated-source
//! fragments. In row-map mode the transition table is emitted as packed
//! arrays (`ZZ_CMAP`, `ZZ_ACTION`, `ZZ_ROWMAP`, `ZZ_TRANS`, `ZZ_ATTRIBUTE`);
//! in switch mode the transitions become nested switch statements instead.

mod config;
mod emitter;
mod error;


pub use config::{Config, Mode};
pub use emitter::{Emitter, FINAL, Fragment, NO_LOOKAHEAD, emit};
pub use error::EmitError;
