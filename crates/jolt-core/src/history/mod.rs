//! Calculation history.
//!
//! Bounded, newest-first log of past calculations, persisted as a JSON
//! array in a single key-value slot. Reads fail soft: an absent key, an
//! unavailable backend, or a malformed document all read as an empty log.
//! The capacity bound is enforced on append only; entries trimmed past the
//! bound are gone permanently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dose::{DoseRecommendation, DoseRequest};
use crate::error::StorageError;
use crate::storage::KvStore;

/// Storage key holding the serialized log.
pub const HISTORY_KEY: &str = "caffeineCalculationHistory";

/// Maximum number of entries retained.
pub const HISTORY_CAPACITY: usize = 10;

/// Reduced result snapshot persisted with each entry.
///
/// The source catalog is not persisted; servings are recomputable from
/// `total_mg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSnapshot {
    pub total_mg: u32,
    pub breakdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_warning: Option<String>,
}

impl From<&DoseRecommendation> for ResultSnapshot {
    fn from(result: &DoseRecommendation) -> Self {
        Self {
            total_mg: result.total_mg,
            breakdown: result.breakdown.clone(),
            safety_warning: result.safety_warning.clone(),
        }
    }
}

/// One persisted calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in epoch milliseconds. Best-effort unique: two
    /// calculations in the same millisecond collide.
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub inputs: DoseRequest,
    pub result: ResultSnapshot,
}

/// Parse a stored log document. Any shape mismatch reads as absent.
fn try_parse(raw: &str) -> Option<Vec<HistoryEntry>> {
    serde_json::from_str(raw).ok()
}

/// Bounded newest-first calculation log over a [`KvStore`].
pub struct HistoryStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the full log, newest first.
    ///
    /// Never fails: backend errors and malformed documents degrade to an
    /// empty log.
    pub fn all(&self) -> Vec<HistoryEntry> {
        match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => try_parse(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Record a calculation at the head of the log, trimming to capacity,
    /// and write the whole log back in a single write.
    ///
    /// Returns the created entry.
    pub fn append(
        &mut self,
        inputs: &DoseRequest,
        result: &DoseRecommendation,
    ) -> Result<HistoryEntry, StorageError> {
        let now = Utc::now();
        let entry = HistoryEntry {
            id: now.timestamp_millis(),
            timestamp: now,
            inputs: inputs.clone(),
            result: ResultSnapshot::from(result),
        };

        let mut entries = self.all();
        entries.insert(0, entry.clone());
        entries.truncate(HISTORY_CAPACITY);
        self.write(&entries)?;
        Ok(entry)
    }

    /// Remove the entry with the given id. A no-op when no entry matches.
    pub fn delete(&mut self, id: i64) -> Result<(), StorageError> {
        let mut entries = self.all();
        entries.retain(|entry| entry.id != id);
        self.write(&entries)
    }

    /// Remove the storage key entirely.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY)
    }

    fn write(&mut self, entries: &[HistoryEntry]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(entries).map_err(|e| StorageError::SerializeFailed {
                key: HISTORY_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.store.set(HISTORY_KEY, &raw)
    }
}
