use anyhow::{Context, Result};
use structopt::StructOpt;
use tree_query_gen::args::RepeatedPairArgs;
use tree_query_gen::{generator, logging, writer, Mode};

fn main() -> Result<()> {
    let args = RepeatedPairArgs::from_args();
    logging::init();

    let (config, filename) = args.into_config()?;
    if let Mode::RepeatedPair { rep_num } = config.mode() {
        tracing::info!(
            elem_num = config.elem_num(),
            rep_num,
            "generating repeated-pair workload"
        );
    }
    if config.elem_num() == 0 {
        tracing::warn!("no elements: the repeated query will be `q 0 -1`");
    }

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
