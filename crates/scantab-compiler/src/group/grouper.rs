use indexmap::IndexMap;
use scantab_core::{CharCode, IntervalSet, StateId, TransitionMatrix};

use crate::reduce::Reduction;

/// Transitions of one state, grouped by target.
///
/// Targets are kept in emission order: real states ascending, then `None`
/// (no transition).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionGroup {
    state: usize,
    groups: IndexMap<Option<StateId>, IntervalSet>,
    default: Option<StateId>,
}

impl TransitionGroup {
    fn new(state: usize, row: &[Option<StateId>], columns: &Reduction) -> Self {
        let mut groups: IndexMap<Option<StateId>, IntervalSet> = IndexMap::new();
        for (class, &target) in row.iter().enumerate() {
            groups
                .entry(target)
                .or_default()
                .add_char(columns.map[class] as CharCode);
        }
        groups.sort_by(|a, _, b, _| a.is_none().cmp(&b.is_none()).then(a.cmp(b)));

        let default = choose_default(&groups);
        log::debug!("state {state}: default {default:?} of {} targets", groups.len());
        Self {
            state,
            groups,
            default,
        }
    }

    pub fn state(&self) -> usize {
        self.state
    }

    /// Target taken by the `default` branch; `None` means no transition.
    pub fn default_target(&self) -> Option<StateId> {
        self.default
    }

    /// Reduced classes leading to `target`.
    pub fn classes(&self, target: Option<StateId>) -> Option<&IntervalSet> {
        self.groups.get(&target)
    }

    /// All groups in emission order, default included.
    pub fn iter(&self) -> impl Iterator<Item = (Option<StateId>, &IntervalSet)> {
        self.groups.iter().map(|(&target, set)| (target, set))
    }

    /// Groups that need explicit case labels.
    pub fn explicit(&self) -> impl Iterator<Item = (Option<StateId>, &IntervalSet)> {
        self.iter().filter(|&(target, _)| target != self.default)
    }
}

/// Largest group wins; ties go to the lowest real target, and "no
/// transition" wins only when strictly larger than every real group.
fn choose_default(groups: &IndexMap<Option<StateId>, IntervalSet>) -> Option<StateId> {
    let mut best: Option<(StateId, u64)> = None;
    for (target, set) in groups {
        if let Some(target) = *target
            && best.is_none_or(|(_, size)| set.size() > size)
        {
            best = Some((target, set.size()));
        }
    }

    let no_target = groups.get(&None).map_or(0, IntervalSet::size);
    match best {
        Some((target, size)) if size >= no_target => Some(target),
        _ => None,
    }
}

/// Groups for every state with at least one transition, in state order.
pub fn group_transitions(
    matrix: &TransitionMatrix,
    columns: &Reduction,
) -> Vec<TransitionGroup> {
    (0..matrix.num_states())
        .filter(|&state| matrix.has_outgoing(state))
        .map(|state| TransitionGroup::new(state, matrix.row(state), columns))
        .collect()
}
