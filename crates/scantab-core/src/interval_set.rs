//! Sets of character codes as sorted, disjoint, maximally merged intervals.
//!
//! Invariant: intervals are strictly increasing, pairwise disjoint, and no two
//! are adjacent (`a.end + 1 < b.start` for consecutive `a`, `b`). Every
//! mutating operation re-establishes it; debug builds verify it afterwards.

use std::fmt;
use std::ops::BitAnd;

use crate::{CharCode, Interval, IntervalSetError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing a single code.
    pub fn from_char(c: CharCode) -> Self {
        Interval::single(c).into()
    }

    pub fn add_char(&mut self, c: CharCode) {
        self.add(Interval::single(c));
    }

    /// Insert an interval, merging with every interval it overlaps or touches.
    pub fn add(&mut self, interval: Interval) {
        let mut i = 0;
        while i < self.intervals.len() {
            let elem = self.intervals[i];

            if elem.end.saturating_add(1) < interval.start {
                i += 1;
                continue;
            }

            if elem.contains_interval(&interval) {
                return;
            }

            if elem.start > interval.end.saturating_add(1) {
                self.intervals.insert(i, interval);
                self.debug_check();
                return;
            }

            debug_assert!(elem.touches(&interval));
            let merged = &mut self.intervals[i];
            merged.start = merged.start.min(interval.start);
            if interval.end <= merged.end {
                self.debug_check();
                return;
            }
            merged.end = interval.end;

            // Absorb followers now reachable from the grown interval.
            let end = merged.end;
            let mut last = i + 1;
            while last < self.intervals.len() && self.intervals[last].start <= end.saturating_add(1)
            {
                last += 1;
            }
            if last > i + 1 {
                let swallowed_end = self.intervals[last - 1].end;
                self.intervals[i].end = end.max(swallowed_end);
                self.intervals.drain(i + 1..last);
            }
            self.debug_check();
            return;
        }

        self.intervals.push(interval);
        self.debug_check();
    }

    /// Insert every interval of `other`.
    pub fn add_set(&mut self, other: &IntervalSet) {
        for &interval in &other.intervals {
            self.add(interval);
        }
    }

    pub fn contains_char(&self, c: CharCode) -> bool {
        self.index_of(c).is_some()
    }

    pub fn contains(&self, interval: &Interval) -> bool {
        self.index_of(interval.start)
            .is_some_and(|i| self.intervals[i].contains_interval(interval))
    }

    /// Whether every code of `other` is in this set.
    pub fn contains_set(&self, other: &IntervalSet) -> bool {
        let mut i = 0;
        for y in &other.intervals {
            while i < self.intervals.len() && self.intervals[i].end < y.start {
                i += 1;
            }
            match self.intervals.get(i) {
                Some(x) if x.contains_interval(y) => {}
                _ => return false,
            }
        }
        true
    }

    /// Intersection. Commutative.
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        let mut result = IntervalSet::new();
        let (mut i, mut j) = (0, 0);

        while i < self.intervals.len() && j < other.intervals.len() {
            let x = self.intervals[i];
            let y = other.intervals[j];

            if x.end < y.start {
                i += 1;
                continue;
            }
            if y.end < x.start {
                j += 1;
                continue;
            }

            result.intervals.push(Interval {
                start: x.start.max(y.start),
                end: x.end.min(y.end),
            });

            if x.end >= y.end {
                j += 1;
            }
            if y.end >= x.end {
                i += 1;
            }
        }

        result.debug_check();
        result
    }

    /// Remove every code of `other` from this set.
    ///
    /// Requires `self ⊇ other`; otherwise returns `NotSubset` and leaves the
    /// set untouched.
    pub fn subtract(&mut self, other: &IntervalSet) -> Result<(), IntervalSetError> {
        if !self.contains_set(other) {
            return Err(IntervalSetError::NotSubset {
                this: self.to_string(),
                other: other.to_string(),
            });
        }

        let (mut i, mut j) = (0, 0);
        while i < self.intervals.len() && j < other.intervals.len() {
            let x = self.intervals[i];
            let y = other.intervals[j];

            if x.end < y.start {
                i += 1;
                continue;
            }
            if y.end < x.start {
                j += 1;
                continue;
            }

            // Overlap plus containment: x.start <= y.start && y.end <= x.end.
            if x == y {
                self.intervals.remove(i);
                j += 1;
                continue;
            }

            if x.start == y.start {
                self.intervals[i].start = y.end + 1;
                j += 1;
                continue;
            }

            if x.end == y.end {
                self.intervals[i].end = y.start - 1;
                i += 1;
                j += 1;
                continue;
            }

            self.intervals.insert(
                i,
                Interval {
                    start: x.start,
                    end: y.start - 1,
                },
            );
            self.intervals[i + 1].start = y.end + 1;
            i += 1;
            j += 1;
        }

        self.debug_check();
        Ok(())
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of codes in the set.
    pub fn size(&self) -> u64 {
        self.intervals.iter().map(Interval::size).sum()
    }

    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    /// Intervals in ascending order. Each call starts from the beginning.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// All codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = CharCode> + '_ {
        self.intervals.iter().flat_map(|i| i.start..=i.end)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Index of the interval containing `c`.
    fn index_of(&self, c: CharCode) -> Option<usize> {
        self.intervals
            .binary_search_by(|probe| {
                if probe.end < c {
                    std::cmp::Ordering::Less
                } else if probe.start > c {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()
    }

    #[inline]
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            self.ensure_canonical();
        }
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut set = IntervalSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for interval in iter {
            self.add(interval);
        }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitAnd for &IntervalSet {
    type Output = IntervalSet;

    fn bitand(self, rhs: Self) -> IntervalSet {
        self.intersect(rhs)
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for interval in &self.intervals {
            write!(f, "{interval}")?;
        }
        f.write_str(" }")
    }
}
