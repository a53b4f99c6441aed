use crate::{Config, Count, Result};
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

/// Writes `k` inserts for every element followed by a distance query for
/// every ordered pair of distinct elements.
#[derive(Debug, StructOpt)]
#[structopt(name = "query_gen", setting = AppSettings::AllowNegativeNumbers)]
pub struct AllPairsArgs {
    /// Number of elements, i.e. the max distance between elements in the tree
    pub elem_num: Count,

    /// Name of the output file with queries
    #[structopt(parse(from_os_str))]
    pub filename: PathBuf,
}

impl AllPairsArgs {
    pub fn into_config(self) -> Result<(Config, PathBuf)> {
        Ok((Config::all_pairs(self.elem_num)?, self.filename))
    }
}

/// Writes `k` inserts for every element followed by the same distance
/// query, between the first and the last element, repeated `rep_num` times.
#[derive(Debug, StructOpt)]
#[structopt(name = "query_gen_rep", setting = AppSettings::AllowNegativeNumbers)]
pub struct RepeatedPairArgs {
    /// Number of elements, i.e. the max distance between elements in the tree
    pub elem_num: Count,

    /// Number of repetitions of the distance query
    pub rep_num: Count,

    /// Name of the output file with queries
    #[structopt(parse(from_os_str))]
    pub filename: PathBuf,
}

impl RepeatedPairArgs {
    pub fn into_config(self) -> Result<(Config, PathBuf)> {
        Ok((
            Config::repeated_pair(self.elem_num, self.rep_num)?,
            self.filename,
        ))
    }
}

/// Replays a workload against an ordered key set and prints the expected
/// answers of its distance queries.
#[derive(Debug, StructOpt)]
#[structopt(name = "query_replay")]
pub struct ReplayArgs {
    /// Workload file; standard input when omitted
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Print the elapsed replay time instead of the results
    #[structopt(short = "t", long)]
    pub measure_time: bool,

    /// File for the results. Defaults to standard output, or to `res.txt`
    /// together with --measure-time
    #[structopt(short = "o", long, parse(from_os_str))]
    pub results: Option<PathBuf>,
}

impl ReplayArgs {
    pub fn results_path(&self) -> Option<PathBuf> {
        match (&self.results, self.measure_time) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from("res.txt")),
            (None, false) => None,
        }
    }
}
