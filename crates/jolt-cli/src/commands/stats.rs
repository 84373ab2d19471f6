use clap::Subcommand;
use jolt_core::{stats, FileStore, HistoryStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Headline numbers across the log
    Summary,
    /// Calculations per tolerance level
    Tolerance,
    /// Dose over time, oldest first
    Timeline,
    /// Full report
    All,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let history = HistoryStore::new(FileStore::open()?);
    let entries = history.all();

    match action {
        StatsAction::Summary => {
            let summary = stats::summarize(&entries);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Tolerance => {
            let report = serde_json::json!({
                "by_tolerance": stats::tolerance_distribution(&entries),
                "avg_by_tolerance": stats::average_by_tolerance(&entries),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Timeline => {
            let timeline = stats::timeline(&entries);
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }
        StatsAction::All => {
            let report = stats::analyze(&entries);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
