extern crate combine;

use std::fmt;

pub mod args;
pub mod error;
pub mod generator;
pub mod logging;
pub mod parse;
pub mod replay;
pub mod writer;

pub use error::{Error, Result};

pub type Index = i64;
pub type Count = i64;
pub type Distance = i64;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Query {
    // k
    Insert(Index),

    // q
    Distance(Index, Index),
}

impl fmt::Display for Query {
    // Every record ends with a single space and no newline;
    // consumers tokenize on whitespace.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Query::Insert(key) => write!(f, "k {} ", key),
            Query::Distance(first, second) => write!(f, "q {} {} ", first, second),
        }
    }
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct Workload {
    pub queries: Vec<Query>,
}

impl Workload {
    pub fn new(queries: Vec<Query>) -> Workload {
        Workload { queries }
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Query> {
        self.queries.iter()
    }

    pub fn inserts(&self) -> usize {
        self.iter()
            .filter(|q| matches!(q, Query::Insert(_)))
            .count()
    }

    pub fn distances(&self) -> usize {
        self.iter()
            .filter(|q| matches!(q, Query::Distance(_, _)))
            .count()
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for query in &self.queries {
            write!(f, "{}", query)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

/// Which shape of distance queries follows the inserts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Every ordered pair of distinct elements, normalized to `min max`.
    /// Each unordered pair therefore shows up twice.
    AllPairs,

    /// `q 0 (elem_num - 1)` repeated `rep_num` times.
    RepeatedPair { rep_num: Count },
}

/// Validated generator parameters. Counts are never negative.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Config {
    elem_num: Count,
    mode: Mode,
}

impl Config {
    pub fn all_pairs(elem_num: Count) -> Result<Config> {
        check_non_negative("elem_num", elem_num)?;
        Ok(Config {
            elem_num,
            mode: Mode::AllPairs,
        })
    }

    pub fn repeated_pair(elem_num: Count, rep_num: Count) -> Result<Config> {
        check_non_negative("elem_num", elem_num)?;
        check_non_negative("rep_num", rep_num)?;
        Ok(Config {
            elem_num,
            mode: Mode::RepeatedPair { rep_num },
        })
    }

    pub fn elem_num(&self) -> Count {
        self.elem_num
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

fn check_non_negative(name: &'static str, value: Count) -> Result<()> {
    if value < 0 {
        return Err(Error::NegativeCount { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_display_works() {
        assert_eq!(Query::Insert(7).to_string(), "k 7 ");
        assert_eq!(Query::Distance(0, 12).to_string(), "q 0 12 ");
        assert_eq!(Query::Distance(0, -1).to_string(), "q 0 -1 ");
    }

    #[test]
    fn workload_display_concatenates() {
        let w = Workload::new(vec![
            Query::Insert(0),
            Query::Insert(1),
            Query::Distance(0, 1),
        ]);
        assert_eq!(w.to_string(), "k 0 k 1 q 0 1 ");
        assert_eq!(w.inserts(), 2);
        assert_eq!(w.distances(), 1);
    }

    #[test]
    fn config_rejects_negative_counts() {
        assert!(Config::all_pairs(0).is_ok());
        assert!(matches!(
            Config::all_pairs(-1),
            Err(Error::NegativeCount {
                name: "elem_num",
                value: -1
            })
        ));
        assert!(matches!(
            Config::repeated_pair(3, -2),
            Err(Error::NegativeCount {
                name: "rep_num",
                value: -2
            })
        ));
        assert!(matches!(
            Config::repeated_pair(-5, -2),
            Err(Error::NegativeCount {
                name: "elem_num",
                value: -5
            })
        ));

        let config = Config::repeated_pair(4, 9).unwrap();
        assert_eq!(config.elem_num(), 4);
        assert_eq!(config.mode(), Mode::RepeatedPair { rep_num: 9 });
    }
}
