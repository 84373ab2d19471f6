//! File-backed history integration tests.

use jolt_core::{
    calculate, DoseRequest, FileStore, HistoryStore, Tolerance, WeightUnit, HISTORY_CAPACITY,
    HISTORY_KEY,
};
use tempfile::TempDir;

fn request(survive: f64) -> DoseRequest {
    DoseRequest {
        weight: 70.0,
        weight_unit: WeightUnit::Kg,
        hours_awake: 16.0,
        hours_to_survive: survive,
        tolerance: Tolerance::Moderate,
    }
}

#[test]
fn history_survives_reopening_the_store() {
    let dir = TempDir::new().unwrap();

    let mut history = HistoryStore::new(FileStore::with_dir(dir.path().to_path_buf()));
    let req = request(8.0);
    let created = history.append(&req, &calculate(&req)).unwrap();
    drop(history);

    let reopened = HistoryStore::new(FileStore::with_dir(dir.path().to_path_buf()));
    let entries = reopened.all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], created);
}

#[test]
fn trim_applies_across_reopens() {
    let dir = TempDir::new().unwrap();

    for i in 1..=15 {
        let mut history = HistoryStore::new(FileStore::with_dir(dir.path().to_path_buf()));
        let req = request(i as f64);
        history.append(&req, &calculate(&req)).unwrap();
    }

    let history = HistoryStore::new(FileStore::with_dir(dir.path().to_path_buf()));
    let entries = history.all();
    assert_eq!(entries.len(), HISTORY_CAPACITY);
    assert_eq!(entries[0].inputs.hours_to_survive, 15.0);
    assert_eq!(entries[HISTORY_CAPACITY - 1].inputs.hours_to_survive, 6.0);
}

#[test]
fn corrupt_file_reads_as_empty_and_is_overwritten_on_append() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{HISTORY_KEY}.json")), "not json at all").unwrap();

    let mut history = HistoryStore::new(FileStore::with_dir(dir.path().to_path_buf()));
    assert!(history.all().is_empty());

    let req = request(8.0);
    history.append(&req, &calculate(&req)).unwrap();
    assert_eq!(history.all().len(), 1);
}

#[test]
fn clear_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let mut history = HistoryStore::new(FileStore::with_dir(dir.path().to_path_buf()));
    let req = request(8.0);
    history.append(&req, &calculate(&req)).unwrap();

    history.clear().unwrap();
    assert!(history.all().is_empty());
    assert!(!dir.path().join(format!("{HISTORY_KEY}.json")).exists());
}
