pub mod calculate;
pub mod config;
pub mod history;
pub mod report;
pub mod stats;

use jolt_core::{Tolerance, WeightUnit};

/// Parse a weight unit argument.
pub fn parse_unit(s: &str) -> Result<WeightUnit, String> {
    match s.to_ascii_lowercase().as_str() {
        "kg" => Ok(WeightUnit::Kg),
        "lb" => Ok(WeightUnit::Lb),
        other => Err(format!("unknown unit '{other}' (expected kg or lb)")),
    }
}

/// Parse a tolerance argument.
pub fn parse_tolerance(s: &str) -> Result<Tolerance, String> {
    match s.to_ascii_lowercase().as_str() {
        "low" => Ok(Tolerance::Low),
        "moderate" => Ok(Tolerance::Moderate),
        "high" => Ok(Tolerance::High),
        other => Err(format!(
            "unknown tolerance '{other}' (expected low, moderate or high)"
        )),
    }
}
