use crate::{Config, Count, Index, Mode, Query, Workload};

pub fn generate(config: &Config) -> Workload {
    match config.mode() {
        Mode::AllPairs => all_pairs(config.elem_num()),
        Mode::RepeatedPair { rep_num } => repeated_pair(config.elem_num(), rep_num),
    }
}

/// `k 0`, `k 1`, ..., `k (elem_num - 1)`.
pub fn inserts(elem_num: Count) -> impl Iterator<Item = Query> {
    (0..elem_num).map(Query::Insert)
}

pub fn all_pairs(elem_num: Count) -> Workload {
    let mut queries: Vec<Query> = inserts(elem_num).collect();

    // Both (i, j) and (j, i) are visited, so every unordered pair is
    // emitted twice. Downstream test suites depend on this exact sequence.
    for first in 0..elem_num {
        for second in 0..elem_num {
            if first < second {
                queries.push(Query::Distance(first, second));
            } else if first > second {
                queries.push(Query::Distance(second, first));
            }
        }
    }

    Workload::new(queries)
}

pub fn repeated_pair(elem_num: Count, rep_num: Count) -> Workload {
    let mut queries: Vec<Query> = inserts(elem_num).collect();

    // elem_num == 0 yields `q 0 -1`, which is kept as is.
    let last: Index = elem_num - 1;
    queries.extend((0..rep_num).map(|_| Query::Distance(0, last)));

    Workload::new(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pairs_of_three_works() {
        let w = all_pairs(3);
        assert_eq!(
            w.to_string(),
            "k 0 k 1 k 2 q 0 1 q 0 2 q 0 1 q 1 2 q 0 2 q 1 2 "
        );
    }

    #[test]
    fn all_pairs_counts() {
        for n in 0..12 {
            let w = all_pairs(n);
            assert_eq!(w.inserts() as i64, n);
            assert_eq!(w.distances() as i64, n * (n - 1).max(0));
        }
    }

    #[test]
    fn all_pairs_orders_indices_ascending() {
        let w = all_pairs(9);
        for query in &w {
            if let Query::Distance(first, second) = query {
                assert!(first < second, "{:?}", query);
            }
        }
    }

    #[test]
    fn all_pairs_inserts_come_first() {
        let w = all_pairs(5);
        let (inserts, rest) = w.queries.split_at(5);
        assert_eq!(inserts, inserts_of(5).as_slice());
        assert!(rest.iter().all(|q| matches!(q, Query::Distance(_, _))));
    }

    #[test]
    fn all_pairs_of_zero_is_empty() {
        assert!(all_pairs(0).is_empty());
        assert_eq!(all_pairs(1).to_string(), "k 0 ");
    }

    #[test]
    fn repeated_pair_works() {
        assert_eq!(
            repeated_pair(2, 3).to_string(),
            "k 0 k 1 q 0 1 q 0 1 q 0 1 "
        );

        let w = repeated_pair(100, 7);
        assert_eq!(w.inserts(), 100);
        assert_eq!(w.distances(), 7);
        assert!(w.queries[100..]
            .iter()
            .all(|q| *q == Query::Distance(0, 99)));
    }

    #[test]
    fn repeated_pair_without_elements_keeps_negative_index() {
        assert_eq!(repeated_pair(0, 2).to_string(), "q 0 -1 q 0 -1 ");
        assert!(repeated_pair(0, 0).is_empty());
        assert_eq!(repeated_pair(3, 0).to_string(), "k 0 k 1 k 2 ");
    }

    #[test]
    fn generate_dispatches_on_mode() {
        let config = Config::all_pairs(3).unwrap();
        assert_eq!(generate(&config), all_pairs(3));

        let config = Config::repeated_pair(4, 2).unwrap();
        assert_eq!(generate(&config), repeated_pair(4, 2));
    }

    #[test]
    fn generate_is_deterministic() {
        let config = Config::all_pairs(6).unwrap();
        assert_eq!(generate(&config), generate(&config));
    }

    fn inserts_of(n: Count) -> Vec<Query> {
        inserts(n).collect()
    }
}
