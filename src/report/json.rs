use super::DashboardReport;

pub fn to_json(report: &DashboardReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn json_report_contains_scenarios_and_stats() {
        let state = AppState::seeded().expect("seed data is valid");
        let report = DashboardReport::from_state(&state, None);

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["stats"]["average_positive_probability"], 70.0);
        assert_eq!(value["positive"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["negative"][0]["type"], "negative");
        assert_eq!(value["todos"][0]["impact"], "high");
        assert!(value.get("submission").is_none());
    }
}
