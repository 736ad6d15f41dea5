//! Partition of the alphabet into input classes.
//!
//! Starts from a single class covering `0..=max_char` and refines it with every
//! character set the rules mention, so that each set becomes a union of
//! classes. Codes in the same class behave identically in every transition,
//! which lets the transition matrix be indexed by class instead of by code.

use serde::{Deserialize, Serialize};

use crate::invariants::ensure_subtracted;
use crate::{CharCode, Interval, IntervalSet};

/// Contiguous code range mapped to one input class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInterval {
    pub start: CharCode,
    pub end: CharCode,
    pub class: u32,
}

impl ClassInterval {
    /// Number of codes in the range.
    pub fn size(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }
}

#[derive(Clone, Debug)]
pub struct CharClasses {
    max_char: CharCode,
    classes: Vec<IntervalSet>,
}

impl CharClasses {
    pub fn new(max_char: CharCode) -> Self {
        Self {
            max_char,
            classes: vec![Interval::new(0, max_char).into()],
        }
    }

    pub fn max_char(&self) -> CharCode {
        self.max_char
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[IntervalSet] {
        &self.classes
    }

    /// Refine the partition so that `set` is a union of classes.
    ///
    /// Codes above `max_char` are ignored.
    pub fn make_class(&mut self, set: &IntervalSet) {
        let universe: IntervalSet = Interval::new(0, self.max_char).into();
        let mut rest = set & &universe;

        let old_len = self.classes.len();
        for i in 0..old_len {
            if rest.is_empty() {
                break;
            }

            let x = &mut self.classes[i];
            if *x == rest {
                return;
            }

            let common = &*x & &rest;
            if common.is_empty() {
                continue;
            }

            if *x == common {
                ensure_subtracted(rest.subtract(&common));
                continue;
            }

            ensure_subtracted(x.subtract(&common));
            if rest == common {
                log::trace!("class {i} split, new class {}", self.classes.len());
                self.classes.push(common);
                return;
            }

            ensure_subtracted(rest.subtract(&common));
            log::trace!("class {i} split, new class {}", self.classes.len());
            self.classes.push(common);
        }
    }

    /// Input class of `c`, or `None` above `max_char`.
    pub fn class_of(&self, c: CharCode) -> Option<u32> {
        self.classes
            .iter()
            .position(|class| class.contains_char(c))
            .map(|i| i as u32)
    }

    /// Every class interval, sorted by start; together they cover `0..=max_char`.
    pub fn intervals(&self) -> Vec<ClassInterval> {
        let mut result: Vec<ClassInterval> = self
            .classes
            .iter()
            .enumerate()
            .flat_map(|(class, set)| {
                set.iter().map(move |i| ClassInterval {
                    start: i.start(),
                    end: i.end(),
                    class: class as u32,
                })
            })
            .collect();
        result.sort_by_key(|ci| ci.start);
        result
    }
}
