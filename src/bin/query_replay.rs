use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use structopt::StructOpt;
use tree_query_gen::args::ReplayArgs;
use tree_query_gen::{logging, parse, replay};

fn main() -> Result<()> {
    let args = ReplayArgs::from_args();
    logging::init();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            text
        }
    };

    let workload = parse::parse_workload(&text)
        .context("Invalid input. Input format: ( q|k (int)* )*")?;

    let (result, elapsed) = replay::replay_timed(&workload)?;

    tracing::info!(
        inserts = result.stats.inserts,
        distances = result.stats.distances,
        "replayed"
    );

    if args.measure_time {
        println!("{}", replay::format_elapsed(elapsed));
    }

    let results = replay::format_results(&result.results);
    match args.results_path() {
        Some(path) => {
            let file = File::create(&path).with_context(|| {
                format!("Failed to open {} for writing results", path.display())
            })?;
            let mut out = BufWriter::new(file);
            out.write_all(results.as_bytes())?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(results.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
