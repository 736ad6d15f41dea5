//! Core data structures for scantab.
//!
//! Two layers:
//! - **Character sets**: `Interval`, `IntervalSet` and the `CharClasses`
//!   partition builder that narrows raw character codes to input classes
//! - **Automaton input**: the `TransitionMatrix` and per-state attributes handed
//!   over by automaton construction, deserializable from JSON

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod automaton;
mod char_classes;
mod interval;
mod interval_set;
mod invariants;

#[cfg(test)]
mod automaton_tests;
#[cfg(test)]
mod interval_set_tests;

pub use automaton::{ActionId, Automaton, StateId, TransitionMatrix};
pub use char_classes::{CharClasses, ClassInterval};
pub use interval::{CharCode, Interval};
pub use interval_set::IntervalSet;

/// Flattened form of "no transition", used wherever targets are packed as integers.
pub const NO_TARGET: i32 = -1;

/// Errors raised by the character-set algebra.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalSetError {
    /// `subtract` requires the subtrahend to be contained in the set.
    #[error("cannot subtract {other} from {this}: not a subset")]
    NotSubset { this: String, other: String },

    #[error("inverted interval [{start}-{end}]")]
    InvertedInterval { start: CharCode, end: CharCode },
}

/// Errors raised while assembling automaton input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("transition from state {state} on class {class} targets unknown state {target}")]
    TargetOutOfRange {
        state: usize,
        class: usize,
        target: StateId,
    },

    #[error("{what} has {found} entries, expected one per state ({expected})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}
