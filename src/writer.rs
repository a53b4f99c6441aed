use crate::{Result, Workload};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the queries in order, one write per query. No separators are added:
/// each query already ends with a space.
pub fn write_queries<W>(out: &mut W, workload: &Workload) -> std::io::Result<()>
where
    W: Write,
{
    for query in workload {
        write!(out, "{}", query)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the workload into it.
///
/// The file is closed when this returns, on the error path too. A failure
/// in the middle of writing leaves whatever was already written.
pub fn write_workload_file<P>(path: P, workload: &Workload) -> Result<()>
where
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    let mut out = BufWriter::new(file);
    write_queries(&mut out, workload)?;
    out.flush()?;
    tracing::debug!(
        path = %path.as_ref().display(),
        queries = workload.len(),
        "workload written"
    );
    Ok(())
}
