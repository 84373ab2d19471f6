use clap::Args;
use jolt_core::{calculate, report, Config, FileStore, HistoryStore};

#[derive(Args)]
pub struct ReportArgs {
    /// Source to feature (defaults to the first catalog entry)
    #[arg(long)]
    source: Option<String>,
    /// Use imperial serving sizes
    #[arg(long)]
    imperial: bool,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let history = HistoryStore::new(FileStore::open()?);

    let Some(latest) = history.all().into_iter().next() else {
        println!("No calculation history yet");
        return Ok(());
    };

    // The snapshot drops the source catalog; recompute from the inputs.
    let result = calculate(&latest.inputs);
    let metric = !args.imperial && config.units.metric_servings;
    println!("{}", report::render(&result, args.source.as_deref(), metric));
    Ok(())
}
