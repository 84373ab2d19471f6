//! Dose calculation.
//!
//! The calculator is a pure function from a validated request to a
//! recommendation. It performs no I/O and has no error path: range checks
//! live in [`DoseRequest::validate`] and are the caller's responsibility.
//! An out-of-contract request produces an undefined but non-panicking
//! result.

mod calculator;
mod sources;

pub use calculator::{
    calculate, DoseComponents, DoseRecommendation, SafetyLevel, DANGER_THRESHOLD_MG,
    FDA_DAILY_LIMIT_MG,
};
pub use sources::{SourceInfo, SourceServing, SOURCE_CATALOG};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pounds to kilograms conversion factor.
pub const LB_TO_KG: f64 = 0.453592;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// Coarse caffeine-sensitivity category scaling the base dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tolerance {
    Low,
    Moderate,
    High,
}

impl Tolerance {
    /// All levels, in ascending dose order.
    pub const ALL: [Tolerance; 3] = [Tolerance::Low, Tolerance::Moderate, Tolerance::High];

    /// Multiplier applied to the base dose.
    pub fn modifier(self) -> f64 {
        match self {
            Tolerance::Low => 0.8,
            Tolerance::Moderate => 1.0,
            Tolerance::High => 1.2,
        }
    }
}

/// Input record for one calculation.
///
/// Field names serialize camelCase so persisted history entries keep the
/// `weightUnit` / `hoursAwake` / `hoursToSurvive` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseRequest {
    /// Body weight in the declared unit.
    pub weight: f64,
    pub weight_unit: WeightUnit,
    /// Hours already awake.
    pub hours_awake: f64,
    /// Hours of required alertness.
    pub hours_to_survive: f64,
    pub tolerance: Tolerance,
}

impl DoseRequest {
    /// Weight normalized to kilograms.
    pub fn weight_kg(&self) -> f64 {
        match self.weight_unit {
            WeightUnit::Kg => self.weight,
            WeightUnit::Lb => self.weight * LB_TO_KG,
        }
    }

    /// Check the request against the form-layer ranges.
    ///
    /// Weight 10-500 in the declared unit, hours awake 0-72, hours to
    /// survive positive and at most 72.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("weight", self.weight),
            ("hours_awake", self.hours_awake),
            ("hours_to_survive", self.hours_to_survive),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: field.to_string(),
                });
            }
        }

        if !(10.0..=500.0).contains(&self.weight) {
            return Err(ValidationError::InvalidValue {
                field: "weight".to_string(),
                message: "must be between 10 and 500".to_string(),
            });
        }
        if !(0.0..=72.0).contains(&self.hours_awake) {
            return Err(ValidationError::InvalidValue {
                field: "hours_awake".to_string(),
                message: "must be between 0 and 72".to_string(),
            });
        }
        if self.hours_to_survive <= 0.0 || self.hours_to_survive > 72.0 {
            return Err(ValidationError::InvalidValue {
                field: "hours_to_survive".to_string(),
                message: "must be greater than 0 and at most 72".to_string(),
            });
        }
        Ok(())
    }
}
