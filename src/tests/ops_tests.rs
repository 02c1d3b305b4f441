use crate::{
    Builder, Encoding, RunSet, complement, complement_max, equal, intersection, union,
};

use super::make_range;

fn from_values(values: &[u64]) -> RunSet {
    RunSet::from_values(values.iter().copied()).unwrap()
}

#[test]
fn test_union() {
    let a = from_values(&[10, 11, 12, 13, 14]);
    let b = from_values(&[15, 16, 17, 18, 19]);
    let c = from_values(&[31, 33, 34, 36, 37, 39]);
    let d = from_values(&[35, 36, 37, 38, 39, 40, 41, 42, 43, 44]);

    let result = union([&a, &b, &c, &d]);
    assert_eq!(
        result.expand(),
        vec![
            10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 31, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42,
            43, 44
        ]
    );
}

#[test]
fn test_union_laws() {
    let a = from_values(&[3, 4, 5, 17, 90, 91]);
    let empty = RunSet::new();

    assert!(equal(&union([&a, &a]), &a));
    assert!(equal(&union([&a, &empty]), &a));
    assert!(equal(&union([&empty, &a]), &a));

    let b = from_values(&[1, 5, 6, 92]);
    let c = from_values(&[0, 17, 200]);
    assert!(equal(&union([&a, &b]), &union([&b, &a])));
    assert!(equal(
        &union([&union([&a, &b]), &c]),
        &union([&a, &union([&b, &c])])
    ));
}

#[test]
fn test_union_degenerate_inputs() {
    assert!(union([]).is_empty());

    let a = from_values(&[5, 6, 100]);
    let copy = union([&a]);
    assert!(equal(&copy, &a));
}

#[test]
fn test_union_mixed_encodings() {
    let mut builder = Builder::with_encoding(Encoding::Packed);
    for value in [1u64, 2, 3] {
        assert!(builder.next(value));
    }
    let packed = builder.finish();

    let mut builder = Builder::with_encoding(Encoding::Plain);
    for value in [3u64, 4, 10] {
        assert!(builder.next(value));
    }
    let plain = builder.finish();

    let result = union([&packed, &plain]);
    assert_eq!(result.encoding(), Encoding::Split);
    assert_eq!(result.expand(), vec![1, 2, 3, 4, 10]);
}

#[test]
fn test_union_operator() {
    let a = from_values(&[1, 2]);
    let b = from_values(&[4, 5]);
    assert_eq!((&a | &b).expand(), vec![1, 2, 4, 5]);
}

#[test]
fn test_intersection() {
    let a = from_values(&[10, 11, 12, 13, 14, 16, 19, 20, 21, 41]);
    let b = from_values(&[5, 12, 13, 14, 15, 16, 40, 41]);
    let c = make_range(&[(10, 91), (100, 104)]);
    let d = from_values(&[
        1, 3, 5, 7, 9, 11, 12, 13, 14, 15, 16, 17, 19, 21, 23, 25, 40, 41,
    ]);

    let result = intersection([&a, &b, &c, &d]);
    assert_eq!(result.expand(), vec![12, 13, 14, 16, 41]);
}

#[test]
fn test_intersection_laws() {
    let a = from_values(&[3, 4, 5, 17, 90, 91]);
    let empty = RunSet::new();

    assert!(equal(&intersection([&a, &a]), &a));
    assert!(intersection([&a, &empty]).is_empty());
    assert!(intersection([&empty, &a]).is_empty());

    let b = from_values(&[4, 5, 6, 91, 92]);
    let c = from_values(&[0, 4, 91, 200]);
    assert!(equal(&intersection([&a, &b]), &intersection([&b, &a])));
    assert!(equal(
        &intersection([&intersection([&a, &b]), &c]),
        &intersection([&a, &intersection([&b, &c])])
    ));
}

#[test]
fn test_intersection_degenerate_inputs() {
    assert!(intersection([]).is_empty());

    let a = from_values(&[5, 6, 100]);
    let copy = intersection([&a]);
    assert!(equal(&copy, &a));
}

#[test]
fn test_intersection_operator() {
    let a = from_values(&[1, 2, 3]);
    let b = from_values(&[2, 3, 4]);
    assert_eq!((&a & &b).expand(), vec![2, 3]);
}

#[test]
fn test_complement() {
    let set = from_values(&[2, 3, 8, 9, 10, 11, 17]);
    let result = complement_max(&set, 19);
    assert_eq!(
        result.expand(),
        vec![0, 1, 4, 5, 6, 7, 12, 13, 14, 15, 16, 18, 19]
    );
}

#[test]
fn test_complement_of_empty() {
    let result = complement_max(&RunSet::new(), 9);
    assert_eq!(result.expand(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_complement_of_full_domain() {
    let full = make_range(&[(0, 9)]);
    assert!(complement_max(&full, 9).is_empty());
}

#[test]
fn test_complement_domain_boundaries() {
    // Source value exactly at the domain end.
    let result = complement_max(&from_values(&[9]), 9);
    assert_eq!(result.expand(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

    // Source run ending just below the domain end leaves the end value in
    // the complement.
    let result = complement_max(&from_values(&[2]), 3);
    assert_eq!(result.expand(), vec![0, 1, 3]);

    // Source entirely above the domain.
    let result = complement_max(&from_values(&[25]), 19);
    assert_eq!(result.expand(), (0..=19).collect::<Vec<u64>>());

    // Source starting at zero.
    let result = complement_max(&from_values(&[0, 1, 5]), 7);
    assert_eq!(result.expand(), vec![2, 3, 4, 6, 7]);
}

#[test]
fn test_complement_involution() {
    fastrand::seed(6412384656);
    for _ in 0..20 {
        let mut values: Vec<u64> = (0..64).map(|_| fastrand::u64(..1000)).collect();
        values.sort_unstable();
        values.dedup();
        let set = from_values(&values);

        for max in [999, 1000, 5000] {
            let inverted = complement_max(&set, max);
            assert!(equal(&complement_max(&inverted, max), &set), "max {max}");
        }
    }
}

#[test]
fn test_complement_partitions_domain() {
    fastrand::seed(987321546);
    for _ in 0..20 {
        let mut values: Vec<u64> = (0..48).map(|_| fastrand::u64(..500)).collect();
        values.sort_unstable();
        values.dedup();
        let set = from_values(&values);
        let max = 520;
        let inverted = complement_max(&set, max);

        // A ∪ ¬A = [0, max], A ∩ ¬A = ∅.
        assert!(equal(&union([&set, &inverted]), &make_range(&[(0, max)])));
        assert!(intersection([&set, &inverted]).is_empty());
    }
}

#[test]
fn test_complement_full_range() {
    let set = from_values(&[1_000_000]);
    let inverted = complement(&set);
    assert_eq!(inverted.len(), u64::MAX);
    assert!(equal(&complement(&inverted), &set));

    let mut cursor = inverted.cursor();
    assert_eq!(cursor.next_skip_take(), Some((0, 1_000_000)));
    assert_eq!(cursor.seek(1_000_000), Some((1_000_001, u64::MAX - 1_000_000)));
}

#[test]
fn test_complement_operator() {
    let set = from_values(&[0, 1, 2]);
    let inverted = !&set;
    let mut cursor = inverted.cursor();
    // {3 .. u64::MAX} as one run.
    assert_eq!(cursor.next_skip_take(), Some((3, u64::MAX - 2)));
}

#[test]
fn test_union_of_many_random_sets_matches_reference() {
    fastrand::seed(550128471);
    let mut reference: Vec<u64> = Vec::new();
    let mut sets = Vec::new();
    for _ in 0..8 {
        let mut values: Vec<u64> = (0..40).map(|_| fastrand::u64(..2000)).collect();
        values.sort_unstable();
        values.dedup();
        reference.extend_from_slice(&values);
        sets.push(from_values(&values));
    }
    reference.sort_unstable();
    reference.dedup();

    let result = union(sets.iter());
    assert_eq!(result.expand(), reference);
}

#[test]
fn test_intersection_of_random_sets_matches_reference() {
    fastrand::seed(82371553);
    for _ in 0..10 {
        let a: Vec<u64> = {
            let mut v: Vec<u64> = (0..120).map(|_| fastrand::u64(..300)).collect();
            v.sort_unstable();
            v.dedup();
            v
        };
        let b: Vec<u64> = {
            let mut v: Vec<u64> = (0..120).map(|_| fastrand::u64(..300)).collect();
            v.sort_unstable();
            v.dedup();
            v
        };
        let expected: Vec<u64> = a.iter().copied().filter(|v| b.contains(v)).collect();

        let result = intersection([&from_values(&a), &from_values(&b)]);
        assert_eq!(result.expand(), expected);
    }
}
