//! Plain-text result export.
//!
//! Renders a recommendation the way the exported calculation file reads:
//! total, breakdown, one featured source with its serving count, and the
//! safety warning when present.

use crate::dose::{DoseRecommendation, SourceServing};

/// Render the export text for a recommendation.
///
/// `source_name` picks the featured source (case-insensitive); it falls
/// back to the first catalog entry. `metric` selects metric serving sizes
/// where available.
pub fn render(result: &DoseRecommendation, source_name: Option<&str>, metric: bool) -> String {
    let source = select_source(&result.sources, source_name);

    let mut out = String::new();
    out.push_str("Caffeine Survival Calculation\n");
    out.push_str("===========================\n");
    out.push_str(&format!("Total Required: {} mg\n", result.total_mg));
    out.push_str(&result.breakdown);
    out.push('\n');

    if let Some(source) = source {
        let covered = source.covered_mg();
        out.push_str("\nRecommended Source:\n");
        out.push_str(&format!(
            "{} servings of {} ({})\n",
            source.servings_needed,
            source.name,
            source.display_serving(metric)
        ));
        out.push_str(&format!("Total: {covered} mg"));
        if covered > result.total_mg {
            out.push_str(&format!(
                " (exceeds recommendation by {} mg)",
                covered - result.total_mg
            ));
        }
        out.push('\n');
    }

    if let Some(warning) = &result.safety_warning {
        out.push_str(&format!("\nWARNING: {warning}\n"));
    }

    out.trim_end().to_string()
}

fn select_source<'a>(
    sources: &'a [SourceServing],
    name: Option<&str>,
) -> Option<&'a SourceServing> {
    name.and_then(|n| sources.iter().find(|s| s.name.eq_ignore_ascii_case(n)))
        .or_else(|| sources.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::{calculate, DoseRequest, Tolerance, WeightUnit};

    fn recommendation() -> DoseRecommendation {
        calculate(&DoseRequest {
            weight: 70.0,
            weight_unit: WeightUnit::Kg,
            hours_awake: 16.0,
            hours_to_survive: 8.0,
            tolerance: Tolerance::Moderate,
        })
    }

    #[test]
    fn renders_header_total_and_breakdown() {
        let text = render(&recommendation(), None, false);
        assert!(text.starts_with("Caffeine Survival Calculation\n===========================\n"));
        assert!(text.contains("Total Required: 733 mg"));
        assert!(text.contains("Base: 400 mg + Weight: 280 mg + Sleep Deprivation: 53 mg"));
    }

    #[test]
    fn defaults_to_first_source() {
        // 733 mg of coffee at 95 mg per 8 oz serving -> 8 servings, 760 mg.
        let text = render(&recommendation(), None, false);
        assert!(text.contains("8 servings of Coffee (8 oz brewed)"));
        assert!(text.contains("Total: 760 mg (exceeds recommendation by 27 mg)"));
    }

    #[test]
    fn selects_source_by_name_case_insensitive() {
        let text = render(&recommendation(), Some("espresso"), true);
        assert!(text.contains("servings of Espresso (30 ml shot)"));
    }

    #[test]
    fn unknown_source_falls_back_to_first() {
        let text = render(&recommendation(), Some("mate"), false);
        assert!(text.contains("servings of Coffee"));
    }

    #[test]
    fn warning_line_only_when_present() {
        let warned = render(&recommendation(), None, false);
        assert!(warned.contains("WARNING: This exceeds the FDA's recommended daily limit"));

        let mild = calculate(&DoseRequest {
            weight: 50.0,
            weight_unit: WeightUnit::Kg,
            hours_awake: 0.0,
            hours_to_survive: 2.0,
            tolerance: Tolerance::Low,
        });
        let text = render(&mild, None, false);
        assert!(!text.contains("WARNING"));
        assert!(!text.ends_with('\n'));
    }
}
