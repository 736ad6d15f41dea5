use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{Interval, IntervalSet, IntervalSetError};

fn set(intervals: &[(u32, u32)]) -> IntervalSet {
    intervals
        .iter()
        .map(|&(start, end)| Interval::new(start, end))
        .collect()
}

fn pairs(s: &IntervalSet) -> Vec<(u32, u32)> {
    s.iter().map(|i| (i.start(), i.end())).collect()
}

fn code(c: char) -> u32 {
    u32::from(c)
}

#[test]
fn adjacent_ranges_collapse_into_one() {
    let mut s = IntervalSet::new();
    s.add(Interval::new(code('a'), code('c')));
    s.add(Interval::new(code('e'), code('g')));
    s.add_char(code('d'));

    assert_eq!(pairs(&s), vec![(code('a'), code('g'))]);
    insta::assert_snapshot!(s.to_string(), @"{ ['a'-'g'] }");
}

#[test]
fn add_inserts_in_sorted_position() {
    let mut s = set(&[(10, 12), (30, 32)]);
    s.add(Interval::new(20, 22));
    s.add(Interval::new(0, 1));

    assert_eq!(pairs(&s), vec![(0, 1), (10, 12), (20, 22), (30, 32)]);
}

#[test]
fn add_swallows_several_followers() {
    let mut s = set(&[(1, 2), (5, 6), (9, 10), (20, 21)]);
    s.add(Interval::new(0, 12));

    assert_eq!(pairs(&s), vec![(0, 12), (20, 21)]);
}

#[test]
fn add_extends_to_end_of_last_swallowed() {
    let mut s = set(&[(0, 2), (5, 9)]);
    s.add(Interval::new(1, 6));

    assert_eq!(pairs(&s), vec![(0, 9)]);
}

#[test]
fn add_contained_interval_is_noop() {
    let mut s = set(&[(0, 10)]);
    s.add(Interval::new(3, 4));

    assert_eq!(pairs(&s), vec![(0, 10)]);
}

#[test]
fn add_set_merges_every_interval() {
    let mut s = set(&[(0, 3)]);
    s.add_set(&set(&[(4, 5), (10, 11)]));

    assert_eq!(pairs(&s), vec![(0, 5), (10, 11)]);
}

#[test]
fn contains_uses_located_interval() {
    let s = set(&[(0, 5), (10, 15), (20, 25)]);

    assert!(s.contains_char(12));
    assert!(!s.contains_char(16));
    assert!(s.contains(&Interval::new(20, 25)));
    assert!(!s.contains(&Interval::new(14, 20)));
    assert!(!IntervalSet::new().contains_char(0));
}

#[test]
fn contains_set_sweeps_both_lists() {
    let s = set(&[(0, 5), (10, 15), (20, 25)]);

    assert!(s.contains_set(&set(&[(1, 2), (21, 25)])));
    assert!(s.contains_set(&IntervalSet::new()));
    assert!(!s.contains_set(&set(&[(1, 2), (16, 16)])));
    assert!(!s.contains_set(&set(&[(24, 26)])));
}

#[test]
fn intersect_clips_overlaps() {
    let a = set(&[(0, 10), (20, 30)]);
    let b = set(&[(5, 25), (28, 40)]);

    assert_eq!(pairs(&a.intersect(&b)), vec![(5, 10), (20, 25), (28, 30)]);
    assert_eq!(&a & &b, b.intersect(&a));
}

#[test]
fn intersect_with_empty_is_empty() {
    let a = set(&[(0, 10)]);

    assert!(a.intersect(&IntervalSet::new()).is_empty());
}

#[test]
fn subtract_exact_match_removes_interval() {
    let mut s = set(&[(0, 5), (10, 15)]);
    s.subtract(&set(&[(0, 5)])).unwrap();

    assert_eq!(pairs(&s), vec![(10, 15)]);
}

#[test]
fn subtract_shared_start_shrinks_start() {
    let mut s = set(&[(0, 10)]);
    s.subtract(&set(&[(0, 3)])).unwrap();

    assert_eq!(pairs(&s), vec![(4, 10)]);
}

#[test]
fn subtract_shared_end_shrinks_end() {
    let mut s = set(&[(0, 10)]);
    s.subtract(&set(&[(7, 10)])).unwrap();

    assert_eq!(pairs(&s), vec![(0, 6)]);
}

#[test]
fn subtract_interior_splits_interval() {
    let mut s = set(&[(0, 10)]);
    s.subtract(&set(&[(3, 4), (7, 8)])).unwrap();

    assert_eq!(pairs(&s), vec![(0, 2), (5, 6), (9, 10)]);
}

#[test]
fn subtract_rejects_non_subset() {
    let mut s = set(&[(0, 10)]);
    let err = s.subtract(&set(&[(8, 12)])).unwrap_err();

    assert!(matches!(err, IntervalSetError::NotSubset { .. }));
    assert_eq!(pairs(&s), vec![(0, 10)]);
}

#[test]
fn size_counts_codes() {
    assert_eq!(set(&[(0, 9), (20, 20)]).size(), 11);
    assert_eq!(IntervalSet::new().size(), 0);
}

#[test]
fn equality_is_structural() {
    let mut a = IntervalSet::new();
    a.add_char(1);
    a.add_char(2);

    assert_eq!(a, set(&[(1, 2)]));
    assert_ne!(a, set(&[(1, 3)]));
}

#[test]
fn iteration_restarts() {
    let s = set(&[(0, 1), (5, 6)]);

    assert_eq!(s.iter().count(), 2);
    assert_eq!(s.iter().next(), Some(&Interval::new(0, 1)));
    assert_eq!(s.codes().collect::<Vec<_>>(), vec![0, 1, 5, 6]);
}

#[test]
fn display_lists_intervals() {
    let s = set(&[(code('a'), code('a')), (200, 300)]);

    insta::assert_snapshot!(s.to_string(), @"{ ['a'][200-300] }");
}

fn codes(s: &IntervalSet) -> BTreeSet<u32> {
    s.codes().collect()
}

fn arb_set() -> impl Strategy<Value = IntervalSet> {
    prop::collection::vec((0u32..200, 0u32..12), 0..12).prop_map(|raw| {
        raw.into_iter()
            .map(|(start, len)| Interval::new(start, start + len))
            .collect()
    })
}

fn is_canonical(s: &IntervalSet) -> bool {
    s.intervals()
        .windows(2)
        .all(|w| w[0].end() + 1 < w[1].start())
}

proptest! {
    #[test]
    fn add_keeps_set_canonical(raw in prop::collection::vec((0u32..300, 0u32..20), 0..30)) {
        let mut s = IntervalSet::new();
        let mut expected = BTreeSet::new();
        for (start, len) in raw {
            s.add(Interval::new(start, start + len));
            expected.extend(start..=start + len);
        }
        prop_assert!(is_canonical(&s));
        prop_assert_eq!(codes(&s), expected);
    }

    #[test]
    fn intersect_is_commutative_and_exact(a in arb_set(), b in arb_set()) {
        let ab = a.intersect(&b);
        prop_assert_eq!(&ab, &b.intersect(&a));
        prop_assert!(is_canonical(&ab));
        let expected: BTreeSet<u32> = codes(&a).intersection(&codes(&b)).copied().collect();
        prop_assert_eq!(codes(&ab), expected);
    }

    #[test]
    fn subtract_partitions_superset(x in arb_set(), y in arb_set()) {
        let y = x.intersect(&y);
        let mut z = x.clone();
        z.subtract(&y).unwrap();

        prop_assert!(is_canonical(&z));
        prop_assert!(z.intersect(&y).is_empty());
        let mut union = z.clone();
        union.add_set(&y);
        prop_assert_eq!(union, x);
    }
}
