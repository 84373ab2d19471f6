//! History analytics.
//!
//! Pure aggregations over history entries, shaped for the three history
//! views: distribution of calculations by tolerance level, average dose
//! per tolerance level, and dose over time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dose::Tolerance;
use crate::history::HistoryEntry;

/// Calculations recorded at one tolerance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleranceCount {
    pub tolerance: Tolerance,
    pub count: u32,
}

/// Average recommended dose at one tolerance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleranceAverage {
    pub tolerance: Tolerance,
    pub avg_mg: u32,
}

/// One point of the dose-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub timestamp: DateTime<Utc>,
    pub total_mg: u32,
}

/// Headline numbers across the whole log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub entries: u32,
    pub avg_mg: u32,
    pub min_mg: u32,
    pub max_mg: u32,
    /// Entries carrying a safety warning.
    pub warnings: u32,
}

/// Complete analytics report over a history log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryReport {
    pub summary: HistorySummary,
    pub by_tolerance: Vec<ToleranceCount>,
    pub avg_by_tolerance: Vec<ToleranceAverage>,
    pub timeline: Vec<TimelinePoint>,
}

/// Calculations per tolerance level, zero-count levels omitted.
pub fn tolerance_distribution(entries: &[HistoryEntry]) -> Vec<ToleranceCount> {
    Tolerance::ALL
        .iter()
        .filter_map(|&tolerance| {
            let count = entries
                .iter()
                .filter(|e| e.inputs.tolerance == tolerance)
                .count() as u32;
            (count > 0).then_some(ToleranceCount { tolerance, count })
        })
        .collect()
}

/// Average (rounded) dose per tolerance level present in the log.
pub fn average_by_tolerance(entries: &[HistoryEntry]) -> Vec<ToleranceAverage> {
    Tolerance::ALL
        .iter()
        .filter_map(|&tolerance| {
            let totals: Vec<u32> = entries
                .iter()
                .filter(|e| e.inputs.tolerance == tolerance)
                .map(|e| e.result.total_mg)
                .collect();
            if totals.is_empty() {
                return None;
            }
            let avg = (totals.iter().map(|&t| t as f64).sum::<f64>() / totals.len() as f64)
                .round() as u32;
            Some(ToleranceAverage {
                tolerance,
                avg_mg: avg,
            })
        })
        .collect()
}

/// Dose over time, oldest first. The log itself is newest-first; this is
/// the one place entries are re-ordered, and only in the derived series.
pub fn timeline(entries: &[HistoryEntry]) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = entries
        .iter()
        .map(|e| TimelinePoint {
            timestamp: e.timestamp,
            total_mg: e.result.total_mg,
        })
        .collect();
    points.sort_by_key(|p| p.timestamp);
    points
}

/// Headline numbers across the log. All zeros for an empty log.
pub fn summarize(entries: &[HistoryEntry]) -> HistorySummary {
    if entries.is_empty() {
        return HistorySummary::default();
    }
    let totals: Vec<u32> = entries.iter().map(|e| e.result.total_mg).collect();
    let sum: u64 = totals.iter().map(|&t| t as u64).sum();
    HistorySummary {
        entries: entries.len() as u32,
        avg_mg: (sum as f64 / totals.len() as f64).round() as u32,
        min_mg: *totals.iter().min().unwrap_or(&0),
        max_mg: *totals.iter().max().unwrap_or(&0),
        warnings: entries
            .iter()
            .filter(|e| e.result.safety_warning.is_some())
            .count() as u32,
    }
}

/// Build the full report.
pub fn analyze(entries: &[HistoryEntry]) -> HistoryReport {
    HistoryReport {
        summary: summarize(entries),
        by_tolerance: tolerance_distribution(entries),
        avg_by_tolerance: average_by_tolerance(entries),
        timeline: timeline(entries),
    }
}
