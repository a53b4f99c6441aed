//! Reference answers for a workload.
//!
//! The workload is executed against a plain ordered key set, producing the
//! distances a correct tree implementation has to report. The distance
//! between two keys is the difference of their ranks, where the rank of a
//! key is the number of stored keys strictly less than it. Keys do not have
//! to be present, and `q a b` with `a > b` yields a negative answer.

use crate::{Distance, Index, Query, Result, Workload};
use chrono::Duration;
use std::time::Instant;

/// Set of keys drawn from a fixed universe.
///
/// Ranks are kept in a Fenwick tree over the sorted universe, so both
/// `insert` and `less_than` take O(log n) regardless of insertion order.
/// `less_than` and `distance` accept any key, including ones outside the
/// universe.
#[derive(Debug, Default, Clone)]
pub struct KeySet {
    universe: Vec<Index>,
    present: Vec<bool>,
    tree: Vec<usize>,
    len: usize,
}

impl KeySet {
    pub fn new<I>(universe: I) -> KeySet
    where
        I: IntoIterator<Item = Index>,
    {
        let mut universe: Vec<Index> = universe.into_iter().collect();
        universe.sort_unstable();
        universe.dedup();
        let n = universe.len();
        KeySet {
            universe,
            present: vec![false; n],
            tree: vec![0; n + 1],
            len: 0,
        }
    }

    /// Every key inserted by `workload`.
    pub fn for_workload(workload: &Workload) -> KeySet {
        KeySet::new(workload.iter().filter_map(|q| match *q {
            Query::Insert(key) => Some(key),
            Query::Distance(_, _) => None,
        }))
    }

    /// Returns `false` if `key` was already stored.
    ///
    /// # Panics
    ///
    /// If `key` is not part of the universe.
    pub fn insert(&mut self, key: Index) -> bool {
        let pos = match self.universe.binary_search(&key) {
            Ok(pos) => pos,
            Err(_) => panic!("key {} is outside of the key set universe", key),
        };
        if self.present[pos] {
            return false;
        }
        self.present[pos] = true;
        self.len += 1;

        let mut i = pos + 1;
        while i < self.tree.len() {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
        true
    }

    pub fn contains(&self, key: Index) -> bool {
        match self.universe.binary_search(&key) {
            Ok(pos) => self.present[pos],
            Err(_) => false,
        }
    }

    pub fn less_than(&self, key: Index) -> usize {
        // number of stored keys among the first `i` universe slots
        let mut i = self.universe.partition_point(|k| *k < key);
        let mut count = 0;
        while i > 0 {
            count += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        count
    }

    pub fn distance(&self, first: Index, second: Index) -> Distance {
        self.less_than(second) as Distance - self.less_than(first) as Distance
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ReplayStats {
    pub inserts: usize,
    pub duplicate_inserts: usize,
    pub distances: usize,

    // `q a b` with a > b
    pub reversed_pairs: usize,

    // `q a b` where a or b was not inserted beforehand
    pub unknown_keys: usize,
}

#[derive(Debug, Default, Clone)]
pub struct Replay {
    pub results: Vec<Distance>,
    pub stats: ReplayStats,
}

pub fn replay(workload: &Workload) -> Replay {
    let mut set = KeySet::for_workload(workload);
    let mut replay = Replay::default();

    for query in workload {
        replay_query(&mut set, query, &mut replay);
    }

    let stats = &replay.stats;
    if stats.unknown_keys > 0 {
        tracing::warn!(
            count = stats.unknown_keys,
            "distance queries reference keys that were not inserted before them"
        );
    }
    if stats.reversed_pairs > 0 {
        tracing::warn!(
            count = stats.reversed_pairs,
            "distance queries have the greater key first"
        );
    }
    if stats.duplicate_inserts > 0 {
        tracing::warn!(count = stats.duplicate_inserts, "keys inserted twice");
    }

    replay
}

pub fn replay_query(set: &mut KeySet, query: &Query, replay: &mut Replay) {
    match *query {
        Query::Insert(key) => {
            replay.stats.inserts += 1;
            if !set.insert(key) {
                replay.stats.duplicate_inserts += 1;
            }
        }
        Query::Distance(first, second) => {
            replay.stats.distances += 1;
            if first > second {
                replay.stats.reversed_pairs += 1;
            }
            if !set.contains(first) || !set.contains(second) {
                replay.stats.unknown_keys += 1;
            }
            replay.results.push(set.distance(first, second));
        }
    }
}

/// Replays `workload` and measures the time spent on a monotonic clock.
pub fn replay_timed(workload: &Workload) -> Result<(Replay, Duration)> {
    let begin = Instant::now();
    let result = replay(workload);
    let elapsed = Duration::from_std(begin.elapsed())?;
    Ok((result, elapsed))
}

/// Results separated and terminated by a single space.
pub fn format_results(results: &[Distance]) -> String {
    results.iter().map(|r| format!("{} ", r)).collect()
}

/// `Elapsed time: 1 sec 20 ms 3 µs 400 ns`. Leading units that are zero are
/// left out; nanoseconds are always printed.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_nanoseconds().unwrap_or(i64::MAX);

    let secs = total / 1_000_000_000;
    let millis = total / 1_000_000 % 1_000;
    let micros = total / 1_000 % 1_000;
    let nanos = total % 1_000;

    let mut s = String::from("Elapsed time: ");
    if secs != 0 {
        s.push_str(&format!("{} sec ", secs));
    }
    if millis != 0 {
        s.push_str(&format!("{} ms ", millis));
    }
    if micros != 0 {
        s.push_str(&format!("{} µs ", micros));
    }
    s.push_str(&format!("{} ns", nanos));
    s
}
