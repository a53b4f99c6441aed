use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{name} should be a non-negative number, got {value}")]
    NegativeCount { name: &'static str, value: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("elapsed time out of range: {0}")]
    Elapsed(#[from] chrono::OutOfRangeError),

    /// Workload text that does not follow `( k int | q int int )*`.
    #[error("malformed workload: {0}")]
    Malformed(String),
}
