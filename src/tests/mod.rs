mod ops_tests;

use crate::{Builder, RunSet};

/// Builds a set from inclusive (first, last) intervals, mixing the builder's
/// value and raw styles the way the set-algebra engine does.
pub(crate) fn make_range(intervals: &[(u64, u64)]) -> RunSet {
    let mut builder = Builder::new();
    for &(first, last) in intervals {
        assert!(builder.next(first));
        builder.take(last - first);
    }
    builder.finish()
}

#[test]
fn test_make_range() {
    let set = make_range(&[(0, 2), (4, 5)]);
    assert_eq!(set.expand(), vec![0, 1, 2, 4, 5]);
}
