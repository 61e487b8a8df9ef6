//! District Chart Configuration
//!
//! Chart.js bar chart config for the drill-down panel.

use serde_json::{json, Value};

use crate::region::DistrictCount;

const BAR_FILL: &str = "rgba(255, 153, 51, 0.6)";
const BAR_BORDER: &str = "rgba(255, 153, 51, 1)";
const TICK_COLOR: &str = "#94A3B8";
const GRID_COLOR: &str = "#334155";

/// Bar chart of records per district, in backend order
pub fn district_chart_config(districts: &[DistrictCount]) -> Value {
    let labels: Vec<&str> = districts.iter().map(|d| d.district.as_str()).collect();
    let data: Vec<f64> = districts.iter().map(|d| d.records).collect();

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Records",
                "data": data,
                "backgroundColor": BAR_FILL,
                "borderColor": BAR_BORDER,
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": {
                "y": { "ticks": { "color": TICK_COLOR }, "grid": { "color": GRID_COLOR } },
                "x": { "ticks": { "color": TICK_COLOR }, "grid": { "display": false } }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_data_follow_districts() {
        let districts = vec![
            DistrictCount { district: "Ernakulam".into(), records: 180_000.0 },
            DistrictCount { district: "Wayanad".into(), records: 42_000.0 },
        ];
        let config = district_chart_config(&districts);
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"], json!(["Ernakulam", "Wayanad"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([180_000.0, 42_000.0]));
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn test_empty_distribution() {
        let config = district_chart_config(&[]);
        assert_eq!(config["data"]["labels"], json!([]));
    }
}
