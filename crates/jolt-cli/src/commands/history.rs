use clap::Subcommand;
use jolt_core::{FileStore, HistoryStore};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List entries, newest first
    List,
    /// Delete one entry by id
    Delete {
        /// Entry id (epoch milliseconds)
        id: i64,
    },
    /// Clear all history
    Clear,
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = HistoryStore::new(FileStore::open()?);

    match action {
        HistoryAction::List => {
            let entries = history.all();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        HistoryAction::Delete { id } => {
            history.delete(id)?;
            println!("ok");
        }
        HistoryAction::Clear => {
            history.clear()?;
            println!("history cleared");
        }
    }
    Ok(())
}
