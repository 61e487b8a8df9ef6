//! Region Statistics
//!
//! Summary and drill-down payloads of the dashboard endpoints, plus the
//! lookup that ties boundary features to their statistics.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::format::{format_number, format_percent};

/// Backend-assigned severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    #[default]
    Other,
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other,
        }
    }
}

impl Severity {
    pub fn fill_color(&self) -> &'static str {
        match self {
            Severity::High => "#EF4444",
            Severity::Medium => "#F59E0B",
            Severity::Low | Severity::Other => "#10B981",
        }
    }
}

/// Entry of the "most affected" ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedRegion {
    pub state: String,
    #[serde(default)]
    pub anomaly_count: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_records: Option<f64>,
    #[serde(default)]
    pub total_anomalies: Option<f64>,
    #[serde(default)]
    pub anomaly_rate: Option<f64>,
    #[serde(default)]
    pub verified_fixed: Option<f64>,
    #[serde(default)]
    pub pending_verification: Option<f64>,
    /// Backend order is the ranking
    #[serde(default)]
    pub most_affected_states: Vec<AffectedRegion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub state: String,
    #[serde(default)]
    pub total_records: Option<f64>,
    #[serde(default)]
    pub total_anomalies: Option<f64>,
    #[serde(default)]
    pub anomaly_rate: Option<f64>,
    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyTypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub count: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictCount {
    pub district: String,
    #[serde(default)]
    pub records: f64,
}

/// Drill-down statistics for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDetail {
    pub state: String,
    #[serde(default)]
    pub total_records: Option<f64>,
    #[serde(default)]
    pub total_anomalies: Option<f64>,
    #[serde(default)]
    pub anomaly_rate: Option<f64>,
    /// Fraction, not a percentage
    #[serde(default)]
    pub invalid_pin_rate: Option<f64>,
    /// Fraction, not a percentage
    #[serde(default)]
    pub duplicate_rate: Option<f64>,
    #[serde(default)]
    pub top_anomaly_types: Vec<AnomalyTypeCount>,
    #[serde(default)]
    pub district_distribution: Vec<DistrictCount>,
}

/// Historical or alternate spellings found in boundary files, already normalized
const REGION_ALIASES: &[(&str, &str)] = &[
    ("orissa", "odisha"),
    ("uttaranchal", "uttarakhand"),
    ("nct of delhi", "delhi"),
    ("national capital territory of delhi", "delhi"),
    ("pondicherry", "puducherry"),
    ("jammu kashmir", "jammu and kashmir"),
    ("andaman nicobar islands", "andaman and nicobar islands"),
    ("dadra nagar haveli", "dadra and nagar haveli"),
    ("daman diu", "daman and diu"),
];

/// Canonical key for a region name.
///
/// Lowercase, `&` read as `and`, punctuation dropped, whitespace collapsed,
/// then mapped through the alias table.
pub fn normalize_region_name(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => cleaned.push_str(" and "),
            c if c.is_alphanumeric() => cleaned.extend(c.to_lowercase()),
            _ => cleaned.push(' '),
        }
    }
    let key = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    REGION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(key)
}

/// True when two region names refer to the same region
pub fn same_region(a: &str, b: &str) -> bool {
    normalize_region_name(a) == normalize_region_name(b)
}

/// Region statistics keyed by normalized name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionIndex {
    regions: Vec<RegionSummary>,
    by_key: HashMap<String, usize>,
}

impl RegionIndex {
    pub fn new(regions: Vec<RegionSummary>) -> Self {
        let mut by_key = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            by_key.entry(normalize_region_name(&region.state)).or_insert(i);
        }
        Self { regions, by_key }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<&RegionSummary> {
        self.by_key
            .get(&normalize_region_name(name))
            .map(|&i| &self.regions[i])
    }

    /// Boundary names with no statistics, sorted and deduplicated.
    ///
    /// Empty while no statistics are loaded, so a slow stats call does not
    /// flag every boundary.
    pub fn unmatched<'a, I>(&self, boundary_names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return Vec::new();
        }
        boundary_names
            .into_iter()
            .filter(|name| self.lookup(name).is_none())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Sticky tooltip body for a region shape
pub fn region_tooltip_html(name: Option<&str>, stats: Option<&RegionSummary>) -> String {
    let mut html = format!(
        r#"<div class="state-tooltip"><h4>{}</h4>"#,
        escape_html(name.unwrap_or("Unknown"))
    );
    if let Some(s) = stats {
        html.push_str(&format!(
            "<p>Records: {}</p><p>Anomalies: {}</p><p>Rate: {}</p>",
            format_number(s.total_records),
            format_number(s.total_anomalies),
            format_percent(s.anomaly_rate),
        ));
    }
    html.push_str("</div>");
    html
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn region(state: &str, severity: Severity) -> RegionSummary {
        RegionSummary {
            state: state.to_string(),
            total_records: Some(120_000.0),
            total_anomalies: Some(3_400.0),
            anomaly_rate: Some(2.8),
            severity,
        }
    }

    #[test]
    fn test_severity_from_wire() {
        let parsed: Vec<RegionSummary> = serde_json::from_value(json!([
            { "state": "Kerala", "severity": "high" },
            { "state": "Goa", "severity": "MEDIUM" },
            { "state": "Assam", "severity": "critical" },
            { "state": "Bihar" }
        ])).unwrap();
        let tiers: Vec<_> = parsed.iter().map(|r| r.severity).collect();
        assert_eq!(tiers, vec![Severity::High, Severity::Medium, Severity::Other, Severity::Other]);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::High.fill_color(), "#EF4444");
        assert_eq!(Severity::Medium.fill_color(), "#F59E0B");
        assert_eq!(Severity::Low.fill_color(), "#10B981");
        assert_eq!(Severity::Other.fill_color(), "#10B981");
    }

    #[test]
    fn test_normalize_region_name() {
        assert_eq!(normalize_region_name("  Tamil   Nadu "), "tamil nadu");
        assert_eq!(normalize_region_name("Jammu & Kashmir"), "jammu and kashmir");
        assert_eq!(normalize_region_name("Orissa"), "odisha");
        assert_eq!(normalize_region_name("NCT of Delhi"), "delhi");
        assert!(same_region("KERALA", "Kerala"));
        assert!(!same_region("Goa", "Assam"));
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_alias_aware() {
        let index = RegionIndex::new(vec![
            region("Kerala", Severity::High),
            region("Odisha", Severity::Low),
        ]);
        assert_eq!(index.lookup("kerala").map(|r| r.severity), Some(Severity::High));
        assert_eq!(index.lookup("Orissa").map(|r| r.state.as_str()), Some("Odisha"));
        assert!(index.lookup("Goa").is_none());
    }

    #[test]
    fn test_unmatched_boundaries_are_reported() {
        let index = RegionIndex::new(vec![region("Kerala", Severity::High)]);
        let unmatched = index.unmatched(["Kerala", "Goa", "Assam", "Goa"]);
        assert_eq!(unmatched, vec!["Assam".to_string(), "Goa".to_string()]);

        let empty = RegionIndex::default();
        assert!(empty.unmatched(["Goa"]).is_empty());
    }

    #[test]
    fn test_tooltip_escapes_and_formats() {
        let stats = region("Kerala", Severity::High);
        let html = region_tooltip_html(Some("Kerala"), Some(&stats));
        assert!(html.contains("<h4>Kerala</h4>"));
        assert!(html.contains("Records: 120.0K"));
        assert!(html.contains("Rate: 2.8%"));

        let html = region_tooltip_html(Some("<b>x</b>"), None);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("Records"));
        assert!(region_tooltip_html(None, None).contains("Unknown"));
    }

    #[test]
    fn test_detail_decodes_wire_shape() {
        let detail: RegionDetail = serde_json::from_value(json!({
            "state": "Kerala",
            "total_records": 1200000,
            "total_anomalies": 25000,
            "anomaly_rate": 2.1,
            "invalid_pin_rate": 0.012,
            "duplicate_rate": 0.004,
            "top_anomaly_types": [{ "type": "invalid_pin", "count": 9000 }],
            "district_distribution": [{ "district": "Ernakulam", "records": 180000 }]
        })).unwrap();
        assert_eq!(detail.top_anomaly_types[0].kind, "invalid_pin");
        assert_eq!(detail.district_distribution[0].records, 180000.0);
    }
}
