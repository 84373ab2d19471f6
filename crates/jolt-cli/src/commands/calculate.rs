use clap::Args;
use jolt_core::{
    calculate, report, Config, DoseRequest, FileStore, HistoryStore, Tolerance, WeightUnit,
};

use super::{parse_tolerance, parse_unit};

#[derive(Args)]
pub struct CalculateArgs {
    /// Body weight in the chosen unit
    #[arg(long)]
    weight: Option<f64>,
    /// Weight unit (kg or lb)
    #[arg(long, value_parser = parse_unit)]
    unit: Option<WeightUnit>,
    /// Hours already awake
    #[arg(long)]
    hours_awake: Option<f64>,
    /// Hours of required alertness
    #[arg(long)]
    hours_to_survive: Option<f64>,
    /// Caffeine tolerance (low, moderate or high)
    #[arg(long, value_parser = parse_tolerance)]
    tolerance: Option<Tolerance>,
    /// Do not record the calculation in history
    #[arg(long)]
    no_save: bool,
    /// Print the text report instead of JSON
    #[arg(long)]
    text: bool,
    /// Source to feature in the text report
    #[arg(long)]
    source: Option<String>,
}

pub fn run(args: CalculateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // Unset arguments fall back to the configured form defaults.
    let request = DoseRequest {
        weight: args.weight.unwrap_or(config.defaults.weight),
        weight_unit: args.unit.unwrap_or(config.defaults.weight_unit),
        hours_awake: args.hours_awake.unwrap_or(config.defaults.hours_awake),
        hours_to_survive: args
            .hours_to_survive
            .unwrap_or(config.defaults.hours_to_survive),
        tolerance: args.tolerance.unwrap_or(config.defaults.tolerance),
    };
    request.validate()?;

    let result = calculate(&request);

    if !args.no_save {
        let mut history = HistoryStore::new(FileStore::open()?);
        history.append(&request, &result)?;
    }

    if args.text {
        println!(
            "{}",
            report::render(&result, args.source.as_deref(), config.units.metric_servings)
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
