//! Streaming set algebra over encoded sets.
//!
//! All operations walk their inputs run-by-run through cursors and emit the
//! result through a [`Builder`]; no expanded value list ever materializes.
//! Outputs are always in the canonical encoding regardless of the inputs'.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    Builder, RunSet,
    cursor::{Cursor, Run},
};

/// A live input cursor with its current run, ordered for a min-heap on
/// (first, last).
struct HeapEntry<'a> {
    run: Run,
    cursor: Cursor<'a>,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.run == other.run
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the earliest-starting run,
        // ties broken by the earlier-ending one.
        other
            .run
            .first
            .cmp(&self.run.first)
            .then(other.run.last.cmp(&self.run.last))
    }
}

/// Union of any number of sets.
///
/// No inputs produce the empty set; a single input comes back as a
/// canonical-encoding copy.
pub fn union<'a>(sets: impl IntoIterator<Item = &'a RunSet>) -> RunSet {
    let mut heap = BinaryHeap::new();
    for set in sets {
        let mut cursor = set.cursor();
        if let Some(run) = cursor.next_interval() {
            heap.push(HeapEntry { run, cursor });
        }
    }

    let mut builder = Builder::new();
    let mut next_start = 0u64;
    while let Some(mut entry) = heap.pop() {
        // Earliest remaining run opens the output interval.
        let first = entry.run.first;
        let mut last = entry.run.last;
        if let Some(run) = entry.cursor.next_interval() {
            entry.run = run;
            heap.push(entry);
        }
        builder.skip(first - next_start);

        // Greedily merge every run that starts inside the interval,
        // extending its end as they do.
        while let Some(top) = heap.peek() {
            if top.run.first > last {
                break;
            }
            let Some(mut entry) = heap.pop() else {
                break;
            };
            last = last.max(entry.run.last);
            if let Some(run) = entry.cursor.next_interval() {
                entry.run = run;
                heap.push(entry);
            }
        }
        builder.take(last - first);
        next_start = last.wrapping_add(1);
    }
    builder.finish()
}

/// Intersection of any number of sets.
///
/// No inputs produce the empty set; a single input comes back as a
/// canonical-encoding copy.
pub fn intersection<'a>(sets: impl IntoIterator<Item = &'a RunSet>) -> RunSet {
    let mut cursors: Vec<Cursor<'a>> = sets.into_iter().map(RunSet::cursor).collect();
    let mut builder = Builder::new();
    if cursors.is_empty() {
        return builder.finish();
    }

    // Lowest value possibly shared by every input.
    let mut candidate = 0u64;
    let mut next_start = 0u64;
    'outer: loop {
        for cursor in cursors.iter_mut() {
            // Drop runs that end before the candidate; the first run that
            // reaches it either contains it or raises it.
            let Some(mut run) = cursor.interval() else {
                return builder.finish();
            };
            loop {
                if run.last >= candidate {
                    if run.first > candidate {
                        candidate = run.first;
                        continue 'outer;
                    }
                    break;
                }
                let Some(next) = cursor.next_interval() else {
                    return builder.finish();
                };
                run = next;
            }
        }

        // Every input contains the candidate; the shared interval runs to
        // the earliest of their run ends.
        let mut end = u64::MAX;
        for cursor in cursors.iter_mut() {
            if let Some(run) = cursor.interval() {
                end = end.min(run.last);
            }
        }
        builder.skip(candidate - next_start);
        builder.take(end - candidate);
        next_start = end.wrapping_add(1);
        candidate = next_start;
        if end == u64::MAX {
            return builder.finish();
        }
    }
}

/// Complement within the full u64 domain; see [`complement_max`].
pub fn complement(set: &RunSet) -> RunSet {
    complement_max(set, u64::MAX)
}

/// Complement of `set` within the inclusive domain `[0, max]`.
///
/// Values of `set` above `max` are ignored. On the value-set level the
/// operation is involutive for any `max` at or above the set's largest
/// value, with one unrepresentable corner: a complement that would contain
/// every one of the 2^64 domain values saturates to `[0, u64::MAX - 1]`.
pub fn complement_max(set: &RunSet, max: u64) -> RunSet {
    let mut builder = Builder::new();
    let mut cursor = set.cursor();
    // Absolute position reached in the source. The loop keeps n <= max, so
    // every bound below is computed as `max - n`, never as `n + skip` or
    // `n + take`, which could wrap.
    let mut n = 0u64;
    loop {
        let (skip, take) = cursor.next_skip_take().unwrap_or((0, 0));
        if skip > 0 {
            if skip > max - n {
                // The source's next run starts past the domain end; the rest
                // of the domain is absent from the source.
                break;
            }
            if n == 0 {
                // The output contains 0; anchor it with an explicit first
                // pair.
                builder.skip(0);
            }
            // The skipped integers join the complement. One of them is
            // already implied by the preceding `Builder::skip`.
            builder.take(skip - 1);
            n += skip;
        }
        if take == 0 {
            // Source exhausted below the domain end.
            break;
        }
        if take > max - n {
            // The source run covers the domain through `max`.
            return builder.finish();
        }
        // The source's run is the complement's gap, and the value right
        // after it is absent from the source by canonicality.
        builder.skip(take);
        n += take;
    }

    // Claim the tail of the domain. Everything through n is settled; the
    // saturation covers the one unrepresentable corner (a complement holding
    // all 2^64 domain values), which drops the final value.
    if n <= max {
        if n == 0 {
            builder.skip(0);
        }
        builder.take(max - n);
    }
    builder.finish()
}

impl std::ops::BitOr for &RunSet {
    type Output = RunSet;

    fn bitor(self, rhs: Self) -> RunSet {
        union([self, rhs])
    }
}

impl std::ops::BitAnd for &RunSet {
    type Output = RunSet;

    fn bitand(self, rhs: Self) -> RunSet {
        intersection([self, rhs])
    }
}

impl std::ops::Not for &RunSet {
    type Output = RunSet;

    fn not(self) -> RunSet {
        complement(self)
    }
}
