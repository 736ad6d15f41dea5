//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{IntervalSet, IntervalSetError};

impl IntervalSet {
    /// Panics unless intervals are sorted, disjoint and non-adjacent.
    pub(crate) fn ensure_canonical(&self) {
        for pair in self.intervals().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.end().saturating_add(1) >= b.start() {
                panic!(
                    "IntervalSet: {a} and {b} are unsorted, overlapping or adjacent in {self} \
                     (every mutation must keep the set maximally merged)"
                );
            }
        }
    }
}

/// Unwraps a subtraction the caller has already proven to be a subset.
pub(crate) fn ensure_subtracted(result: Result<(), IntervalSetError>) {
    if let Err(e) = result {
        panic!("CharClasses: partition refinement lost track of a class: {e}");
    }
}
