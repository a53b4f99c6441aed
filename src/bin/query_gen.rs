use anyhow::{Context, Result};
use structopt::StructOpt;
use tree_query_gen::args::AllPairsArgs;
use tree_query_gen::{generator, logging, writer};

fn main() -> Result<()> {
    let args = AllPairsArgs::from_args();
    logging::init();

    let (config, filename) = args.into_config()?;
    tracing::info!(elem_num = config.elem_num(), "generating all-pairs workload");

    let workload = generator::generate(&config);
    writer::write_workload_file(&filename, &workload)
        .with_context(|| format!("Failed to write {}", filename.display()))?;

    tracing::info!(
        inserts = workload.inserts(),
        distances = workload.distances(),
        path = %filename.display(),
        "done"
    );
    Ok(())
}
