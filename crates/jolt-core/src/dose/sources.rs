//! Fixed catalog of caffeine sources.
//!
//! Translates a target dose into consumable servings. The catalog is
//! static and never persisted with history entries; servings are
//! recomputable from the total.

use serde::{Deserialize, Serialize};

/// Static catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub name: &'static str,
    /// Imperial display string.
    pub serving_size: &'static str,
    /// Metric display string, where one exists.
    pub serving_size_metric: Option<&'static str>,
    pub caffeine_per_serving: u32,
}

/// The five known beverage types, in display order.
pub const SOURCE_CATALOG: [SourceInfo; 5] = [
    SourceInfo {
        name: "Coffee",
        serving_size: "8 oz brewed",
        serving_size_metric: Some("240 ml brewed"),
        caffeine_per_serving: 95,
    },
    SourceInfo {
        name: "Espresso",
        serving_size: "1 oz shot",
        serving_size_metric: Some("30 ml shot"),
        caffeine_per_serving: 63,
    },
    SourceInfo {
        name: "Energy Drink",
        serving_size: "16 oz (Monster)",
        serving_size_metric: Some("475 ml (Monster)"),
        caffeine_per_serving: 160,
    },
    SourceInfo {
        name: "Cola",
        serving_size: "12 oz",
        serving_size_metric: Some("355 ml"),
        caffeine_per_serving: 34,
    },
    SourceInfo {
        name: "Black Tea",
        serving_size: "8 oz",
        serving_size_metric: Some("240 ml"),
        caffeine_per_serving: 47,
    },
];

/// Catalog entry with the servings derived for one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceServing {
    pub name: String,
    pub serving_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size_metric: Option<String>,
    pub caffeine_per_serving: u32,
    pub servings_needed: u32,
}

impl SourceServing {
    /// Derive the servings needed to cover `total_mg`.
    pub fn for_dose(info: &SourceInfo, total_mg: u32) -> Self {
        Self {
            name: info.name.to_string(),
            serving_size: info.serving_size.to_string(),
            serving_size_metric: info.serving_size_metric.map(str::to_string),
            caffeine_per_serving: info.caffeine_per_serving,
            servings_needed: total_mg.div_ceil(info.caffeine_per_serving),
        }
    }

    /// Serving size string for the requested display system.
    ///
    /// Falls back to imperial when no metric string exists.
    pub fn display_serving(&self, metric: bool) -> &str {
        if metric {
            self.serving_size_metric.as_deref().unwrap_or(&self.serving_size)
        } else {
            &self.serving_size
        }
    }

    /// Total caffeine delivered by the derived servings.
    pub fn covered_mg(&self) -> u32 {
        self.servings_needed * self.caffeine_per_serving
    }
}
