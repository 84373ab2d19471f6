//! # Jolt Core Library
//!
//! This library provides the core logic for Jolt, a caffeine dose planner.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary; any GUI would be a thin layer over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Dose Calculator**: a pure function mapping a validated input record
//!   to a recommendation (total milligrams, breakdown, servings per
//!   catalog source, optional safety warning)
//! - **History**: bounded, newest-first log of past calculations behind a
//!   key-value storage port
//! - **Storage**: JSON file-per-key backend plus TOML-based configuration
//! - **Stats**: pure analytics over the history log
//!
//! ## Key Components
//!
//! - [`calculate`]: the dose calculator
//! - [`HistoryStore`]: calculation log over a [`KvStore`] port
//! - [`Config`]: application configuration management
//! - [`stats::analyze`]: history analytics report

pub mod dose;
pub mod error;
pub mod history;
pub mod report;
pub mod stats;
pub mod storage;

pub use dose::{
    calculate, DoseComponents, DoseRecommendation, DoseRequest, SafetyLevel, SourceInfo,
    SourceServing, Tolerance, WeightUnit, SOURCE_CATALOG,
};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use history::{HistoryEntry, HistoryStore, ResultSnapshot, HISTORY_CAPACITY, HISTORY_KEY};
pub use stats::{HistoryReport, HistorySummary, TimelinePoint, ToleranceAverage, ToleranceCount};
pub use storage::{data_dir, Config, FileStore, KvStore, MemoryStore};
