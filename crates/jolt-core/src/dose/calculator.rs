//! Dose calculator implementation.
//!
//! Deterministic arithmetic over a request: a tolerance-scaled base dose,
//! a weight-proportional dose, and a sleep-deprivation boost, summed and
//! rounded to whole milligrams.

use serde::{Deserialize, Serialize};

use super::sources::{SourceServing, SOURCE_CATALOG};
use super::DoseRequest;

/// Base dose in mg per hour of required alertness.
const BASE_MG_PER_HOUR: f64 = 50.0;
/// Weight-proportional dose in mg per kg per hour.
const WEIGHT_FACTOR: f64 = 0.5;
/// Fraction of the base dose added at full sleep deprivation (24h awake).
const SLEEP_BOOST_CAP: f64 = 0.2;

/// FDA recommended daily limit for most adults.
pub const FDA_DAILY_LIMIT_MG: u32 = 400;
/// Above this, the dose is flagged as potentially dangerous.
pub const DANGER_THRESHOLD_MG: u32 = 1000;

const WARNING_DANGEROUS: &str =
    "This is potentially dangerous. Consult a healthcare professional.";
const WARNING_FDA_LIMIT: &str =
    "This exceeds the FDA's recommended daily limit of 400 mg for most adults. Proceed with caution.";

/// The three rounded additive parts of a recommendation.
///
/// Kept alongside the display string so history data stays
/// machine-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseComponents {
    pub base_mg: u32,
    pub weight_mg: u32,
    pub sleep_boost_mg: u32,
}

/// Coarse safety meter position, relative to the FDA daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Moderate,
    High,
    Excessive,
}

impl SafetyLevel {
    /// Classify a total dose: >100% of the limit is excessive, >75% high,
    /// >50% moderate.
    pub fn for_dose(total_mg: u32) -> Self {
        let pct = total_mg as f64 / FDA_DAILY_LIMIT_MG as f64 * 100.0;
        if pct > 100.0 {
            SafetyLevel::Excessive
        } else if pct > 75.0 {
            SafetyLevel::High
        } else if pct > 50.0 {
            SafetyLevel::Moderate
        } else {
            SafetyLevel::Safe
        }
    }
}

/// Recommendation derived from one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseRecommendation {
    pub total_mg: u32,
    pub components: DoseComponents,
    /// Human-readable decomposition of the total.
    pub breakdown: String,
    pub sources: Vec<SourceServing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_warning: Option<String>,
}

impl DoseRecommendation {
    pub fn safety_level(&self) -> SafetyLevel {
        SafetyLevel::for_dose(self.total_mg)
    }
}

/// Advisory text for a total dose, if any threshold is crossed.
pub(crate) fn safety_warning_for(total_mg: u32) -> Option<String> {
    if total_mg > DANGER_THRESHOLD_MG {
        Some(WARNING_DANGEROUS.to_string())
    } else if total_mg > FDA_DAILY_LIMIT_MG {
        Some(WARNING_FDA_LIMIT.to_string())
    } else {
        None
    }
}

/// Compute a recommendation from a validated request.
///
/// Pure and infallible. Trusts the caller to have validated ranges; an
/// out-of-contract request yields an undefined but non-panicking result
/// (negative intermediate sums saturate to zero).
pub fn calculate(request: &DoseRequest) -> DoseRecommendation {
    let weight_kg = request.weight_kg();

    let base = BASE_MG_PER_HOUR * request.hours_to_survive * request.tolerance.modifier();
    let weight_part = weight_kg * WEIGHT_FACTOR * request.hours_to_survive;
    let sleep_factor = (request.hours_awake / 24.0).min(1.0) * SLEEP_BOOST_CAP;
    let sleep_boost = base * sleep_factor;

    let total_mg = (base + weight_part + sleep_boost).round() as u32;

    let components = DoseComponents {
        base_mg: base.round() as u32,
        weight_mg: weight_part.round() as u32,
        sleep_boost_mg: sleep_boost.round() as u32,
    };

    let breakdown = format!(
        "Base: {} mg + Weight: {} mg + Sleep Deprivation: {} mg",
        components.base_mg, components.weight_mg, components.sleep_boost_mg
    );

    let sources = SOURCE_CATALOG
        .iter()
        .map(|info| SourceServing::for_dose(info, total_mg))
        .collect();

    DoseRecommendation {
        total_mg,
        components,
        breakdown,
        sources,
        safety_warning: safety_warning_for(total_mg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::{Tolerance, WeightUnit, LB_TO_KG};

    fn request(
        weight: f64,
        unit: WeightUnit,
        awake: f64,
        survive: f64,
        tolerance: Tolerance,
    ) -> DoseRequest {
        DoseRequest {
            weight,
            weight_unit: unit,
            hours_awake: awake,
            hours_to_survive: survive,
            tolerance,
        }
    }

    #[test]
    fn worked_example_70kg_moderate() {
        // base 400, weight 280, boost ~53.33 -> 733 mg with FDA warning
        let result = calculate(&request(70.0, WeightUnit::Kg, 16.0, 8.0, Tolerance::Moderate));
        assert_eq!(result.total_mg, 733);
        assert_eq!(result.components.base_mg, 400);
        assert_eq!(result.components.weight_mg, 280);
        assert_eq!(result.components.sleep_boost_mg, 53);
        assert_eq!(
            result.breakdown,
            "Base: 400 mg + Weight: 280 mg + Sleep Deprivation: 53 mg"
        );
        assert!(result
            .safety_warning
            .as_deref()
            .unwrap()
            .contains("FDA's recommended daily limit"));
    }

    #[test]
    fn components_sum_to_total_within_rounding() {
        let result = calculate(&request(83.0, WeightUnit::Kg, 31.0, 7.0, Tolerance::High));
        let sum =
            result.components.base_mg + result.components.weight_mg + result.components.sleep_boost_mg;
        assert!(sum.abs_diff(result.total_mg) <= 2);
    }

    #[test]
    fn no_sleep_deprivation_means_no_boost() {
        let result = calculate(&request(70.0, WeightUnit::Kg, 0.0, 4.0, Tolerance::Moderate));
        assert_eq!(result.components.sleep_boost_mg, 0);
        assert_eq!(result.total_mg, 340);
    }

    #[test]
    fn sleep_boost_caps_at_24_hours_awake() {
        let at_24 = calculate(&request(70.0, WeightUnit::Kg, 24.0, 8.0, Tolerance::Moderate));
        let at_72 = calculate(&request(70.0, WeightUnit::Kg, 72.0, 8.0, Tolerance::Moderate));
        assert_eq!(at_24.total_mg, at_72.total_mg);
    }

    #[test]
    fn tolerance_strictly_orders_totals() {
        let totals: Vec<u32> = Tolerance::ALL
            .iter()
            .map(|&t| calculate(&request(70.0, WeightUnit::Kg, 16.0, 8.0, t)).total_mg)
            .collect();
        assert!(totals[0] < totals[1] && totals[1] < totals[2]);
    }

    #[test]
    fn pounds_match_converted_kilograms_within_1mg() {
        let in_lb = calculate(&request(154.0, WeightUnit::Lb, 16.0, 8.0, Tolerance::Moderate));
        let in_kg = calculate(&request(
            154.0 * LB_TO_KG,
            WeightUnit::Kg,
            16.0,
            8.0,
            Tolerance::Moderate,
        ));
        assert!(in_lb.total_mg.abs_diff(in_kg.total_mg) <= 1);
    }

    #[test]
    fn servings_cover_total_for_all_sources() {
        let result = calculate(&request(70.0, WeightUnit::Kg, 16.0, 8.0, Tolerance::Moderate));
        assert_eq!(result.sources.len(), 5);
        for source in &result.sources {
            assert_eq!(
                source.servings_needed,
                result.total_mg.div_ceil(source.caffeine_per_serving)
            );
        }
    }

    #[test]
    fn warning_thresholds() {
        assert!(safety_warning_for(400).is_none());
        assert_eq!(safety_warning_for(401).as_deref(), Some(WARNING_FDA_LIMIT));
        assert_eq!(safety_warning_for(1000).as_deref(), Some(WARNING_FDA_LIMIT));
        assert_eq!(safety_warning_for(1001).as_deref(), Some(WARNING_DANGEROUS));
    }

    #[test]
    fn safety_level_bands() {
        assert_eq!(SafetyLevel::for_dose(150), SafetyLevel::Safe);
        assert_eq!(SafetyLevel::for_dose(250), SafetyLevel::Moderate);
        assert_eq!(SafetyLevel::for_dose(350), SafetyLevel::High);
        assert_eq!(SafetyLevel::for_dose(400), SafetyLevel::High);
        assert_eq!(SafetyLevel::for_dose(401), SafetyLevel::Excessive);
    }

    #[test]
    fn result_serializes_camel_case_and_omits_absent_warning() {
        let result = calculate(&request(50.0, WeightUnit::Kg, 0.0, 2.0, Tolerance::Low));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("totalMg").is_some());
        assert!(json.get("safetyWarning").is_none());
        assert!(json["sources"][0].get("servingsNeeded").is_some());
    }
}
