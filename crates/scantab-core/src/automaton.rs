//! Automaton input handed over by DFA construction.
//!
//! Both types validate their shape on construction, so downstream passes can
//! index freely. JSON input goes through the same checks via `try_from`.

use serde::Deserialize;

use crate::{AutomatonError, NO_TARGET};

/// DFA state index.
pub type StateId = u32;

/// Identifier of a lexical action. Equal ids share one action switch label.
pub type ActionId = u32;

/// Immutable `num_states × num_classes` matrix of next states.
///
/// `None` marks the absence of a transition (`NO_TARGET`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<StateId>>>")]
pub struct TransitionMatrix {
    num_states: usize,
    num_classes: usize,
    cells: Vec<Option<StateId>>,
}

impl TransitionMatrix {
    /// Build from rows; every row must have the same length.
    ///
    /// Targets are not range checked here; `Automaton::new` does that.
    pub fn from_rows(rows: Vec<Vec<Option<StateId>>>) -> Result<Self, AutomatonError> {
        let num_states = rows.len();
        let num_classes = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(num_states * num_classes);

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != num_classes {
                return Err(AutomatonError::RaggedRow {
                    row,
                    expected: num_classes,
                    found: entries.len(),
                });
            }
            cells.extend(entries);
        }

        Ok(Self {
            num_states,
            num_classes,
            cells,
        })
    }

    /// Build by evaluating `f(state, class)` for every cell.
    pub fn from_fn(
        num_states: usize,
        num_classes: usize,
        mut f: impl FnMut(usize, usize) -> Option<StateId>,
    ) -> Self {
        let mut cells = Vec::with_capacity(num_states * num_classes);
        for state in 0..num_states {
            for class in 0..num_classes {
                cells.push(f(state, class));
            }
        }
        Self {
            num_states,
            num_classes,
            cells,
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, state: usize, class: usize) -> Option<StateId> {
        self.cells[state * self.num_classes + class]
    }

    /// Cell as a packable integer: the target, or `NO_TARGET`.
    pub fn get_flat(&self, state: usize, class: usize) -> i32 {
        self.get(state, class).map_or(NO_TARGET, |s| s as i32)
    }

    pub fn row(&self, state: usize) -> &[Option<StateId>] {
        let start = state * self.num_classes;
        &self.cells[start..start + self.num_classes]
    }

    /// Whether the state has at least one transition.
    pub fn has_outgoing(&self, state: usize) -> bool {
        self.row(state).iter().any(Option::is_some)
    }
}

impl TryFrom<Vec<Vec<Option<StateId>>>> for TransitionMatrix {
    type Error = AutomatonError;

    fn try_from(rows: Vec<Vec<Option<StateId>>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

#[derive(Deserialize)]
struct RawAutomaton {
    matrix: TransitionMatrix,
    finals: Vec<bool>,
    #[serde(default)]
    actions: Option<Vec<Option<ActionId>>>,
}

/// Transition matrix plus per-state final flags and actions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawAutomaton")]
pub struct Automaton {
    matrix: TransitionMatrix,
    finals: Vec<bool>,
    actions: Vec<Option<ActionId>>,
}

impl Automaton {
    pub fn new(
        matrix: TransitionMatrix,
        finals: Vec<bool>,
        actions: Vec<Option<ActionId>>,
    ) -> Result<Self, AutomatonError> {
        let num_states = matrix.num_states();

        if finals.len() != num_states {
            return Err(AutomatonError::LengthMismatch {
                what: "finals",
                expected: num_states,
                found: finals.len(),
            });
        }
        if actions.len() != num_states {
            return Err(AutomatonError::LengthMismatch {
                what: "actions",
                expected: num_states,
                found: actions.len(),
            });
        }

        for state in 0..num_states {
            for (class, target) in matrix.row(state).iter().enumerate() {
                if let Some(target) = *target
                    && target as usize >= num_states
                {
                    return Err(AutomatonError::TargetOutOfRange {
                        state,
                        class,
                        target,
                    });
                }
            }
        }

        Ok(Self {
            matrix,
            finals,
            actions,
        })
    }

    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    pub fn num_states(&self) -> usize {
        self.matrix.num_states()
    }

    pub fn is_final(&self, state: usize) -> bool {
        self.finals[state]
    }

    /// Action of a state, if it has an emittable one.
    pub fn action(&self, state: usize) -> Option<ActionId> {
        self.actions[state]
    }
}

impl TryFrom<RawAutomaton> for Automaton {
    type Error = AutomatonError;

    fn try_from(raw: RawAutomaton) -> Result<Self, Self::Error> {
        let actions = raw
            .actions
            .unwrap_or_else(|| vec![None; raw.matrix.num_states()]);
        Automaton::new(raw.matrix, raw.finals, actions)
    }
}
