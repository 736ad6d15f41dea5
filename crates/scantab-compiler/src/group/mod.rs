//! Per-state transition groups for switch emission.
//!
//! Each state's transitions are grouped by target. The largest group becomes
//! the `default` branch of the generated switch, so only the remaining groups
//! need explicit case labels.

mod grouper;


pub use grouper::{TransitionGroup, group_transitions};
