//! Formatting for pokemon rows and run results.

use pokepipe_core::{AbilityEntry, RunSummary};

/// The line printed after a successful run.
pub fn format_run_summary(summary: &RunSummary) -> String {
    format!("requested={} loaded={}", summary.requested, summary.loaded)
}

/// BMI with two decimals, or "-" when undefined.
pub fn format_bmi(bmi: Option<f64>) -> String {
    bmi.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Comma-separated ability names, hidden ones marked.
pub fn format_abilities(abilities: &[AbilityEntry]) -> String {
    abilities
        .iter()
        .map(|a| {
            if a.is_hidden {
                format!("{} (hidden)", a.name)
            } else {
                a.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_run_summary() {
        let summary = RunSummary {
            requested: 5,
            loaded: 5,
        };
        assert_eq!(format_run_summary(&summary), "requested=5 loaded=5");
    }

    #[test]
    fn test_format_bmi() {
        assert_eq!(format_bmi(Some(14.081_632)), "14.08");
        assert_eq!(format_bmi(None), "-");
    }

    #[test]
    fn test_format_abilities() {
        let abilities = vec![
            AbilityEntry {
                name: "overgrow".into(),
                is_hidden: false,
            },
            AbilityEntry {
                name: "chlorophyll".into(),
                is_hidden: true,
            },
        ];
        assert_eq!(format_abilities(&abilities), "overgrow, chlorophyll (hidden)");
    }
}
