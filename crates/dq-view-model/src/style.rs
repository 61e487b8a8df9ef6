//! Map Path Styles
//!
//! Serialized into Leaflet path options (camelCase keys).

use serde::Serialize;

use crate::region::{same_region, RegionIndex, Severity};

/// Fill for boundaries that have no statistics
pub const UNMATCHED_FILL: &str = "#3B82F6";

const OUTLINE: &str = "#475569";
const HOVER_OUTLINE: &str = "#FF9933";

/// Subset of Leaflet `PathOptions`; unset fields leave the current value alone.
/// An empty `dash_array` clears a dash set earlier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
}

impl PathStyle {
    /// Resting style of a region shape
    pub fn region(fill_color: &'static str) -> Self {
        Self {
            fill_color: Some(fill_color),
            fill_opacity: Some(0.6),
            color: Some(OUTLINE),
            weight: Some(1.0),
            opacity: Some(0.8),
            dash_array: Some(""),
        }
    }

    pub fn for_severity(severity: Severity) -> Self {
        Self::region(severity.fill_color())
    }

    /// Dashed outline marks a boundary the statistics do not cover
    pub fn unmatched() -> Self {
        Self { dash_array: Some("4"), ..Self::region(UNMATCHED_FILL) }
    }

    pub fn hover() -> Self {
        Self {
            weight: Some(2.0),
            color: Some(HOVER_OUTLINE),
            fill_opacity: Some(0.8),
            ..Default::default()
        }
    }

    pub fn selected() -> Self {
        Self {
            fill_opacity: Some(0.9),
            weight: Some(3.0),
            opacity: Some(1.0),
            ..Default::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            fill_opacity: Some(0.0),
            opacity: Some(0.0),
            ..Default::default()
        }
    }

    /// District overlay drawn on top of an isolated region
    pub fn district() -> Self {
        Self {
            fill_color: Some("transparent"),
            fill_opacity: Some(0.0),
            color: Some("#000000"),
            weight: Some(1.0),
            opacity: Some(1.0),
            dash_array: Some("3"),
        }
    }
}

impl RegionIndex {
    /// Resting style of the boundary called `name`.
    /// Nothing is flagged before statistics have loaded.
    pub fn style_for(&self, name: Option<&str>) -> PathStyle {
        if self.is_empty() {
            return PathStyle::region(UNMATCHED_FILL);
        }
        match name.and_then(|n| self.lookup(n)) {
            Some(region) => PathStyle::for_severity(region.severity),
            None => PathStyle::unmatched(),
        }
    }
}

/// Style per boundary, in order, while `selected` is isolated
pub fn isolation_styles<'a, I>(names: I, selected: &str) -> Vec<PathStyle>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    names
        .into_iter()
        .map(|name| match name {
            Some(n) if same_region(n, selected) => PathStyle::selected(),
            _ => PathStyle::hidden(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionSummary;
    use serde_json::json;

    #[test]
    fn test_style_serializes_leaflet_keys() {
        let value = serde_json::to_value(PathStyle::region("#EF4444")).unwrap();
        assert_eq!(value, json!({
            "fillColor": "#EF4444",
            "fillOpacity": 0.6,
            "color": "#475569",
            "weight": 1.0,
            "opacity": 0.8,
            "dashArray": ""
        }));
        let hidden = serde_json::to_value(PathStyle::hidden()).unwrap();
        assert_eq!(hidden, json!({ "fillOpacity": 0.0, "opacity": 0.0 }));
    }

    #[test]
    fn test_style_for_looks_up_severity() {
        let index = RegionIndex::new(vec![RegionSummary {
            state: "Kerala".into(),
            total_records: None,
            total_anomalies: None,
            anomaly_rate: None,
            severity: Severity::High,
        }]);
        assert_eq!(index.style_for(Some("KERALA")).fill_color, Some("#EF4444"));

        let unmatched = index.style_for(Some("Goa"));
        assert_eq!(unmatched.fill_color, Some(UNMATCHED_FILL));
        assert_eq!(unmatched.dash_array, Some("4"));
        assert_eq!(index.style_for(None).fill_color, Some(UNMATCHED_FILL));
    }

    #[test]
    fn test_selected_and_hidden_opacity() {
        assert_eq!(PathStyle::selected().opacity, Some(1.0));
        assert_eq!(PathStyle::hidden().fill_opacity, Some(0.0));
        assert_eq!(PathStyle::hidden().opacity, Some(0.0));
    }

    fn kerala_index() -> RegionIndex {
        RegionIndex::new(vec![RegionSummary {
            state: "Kerala".into(),
            total_records: None,
            total_anomalies: None,
            anomaly_rate: None,
            severity: Severity::High,
        }])
    }

    /// Shallow merge of path options, the way Leaflet `setStyle` applies them
    fn restyle(current: &mut serde_json::Map<String, serde_json::Value>, style: &PathStyle) {
        let serde_json::Value::Object(keys) = serde_json::to_value(style).unwrap() else {
            panic!("style is not an object");
        };
        current.extend(keys);
    }

    #[test]
    fn test_nothing_flagged_before_stats_load() {
        let empty = RegionIndex::default();
        assert_eq!(empty.style_for(Some("Kerala")).dash_array, Some(""));
        assert_eq!(empty.style_for(None).fill_color, Some(UNMATCHED_FILL));
    }

    #[test]
    fn test_repaint_clears_earlier_dash() {
        let mut shape = serde_json::Map::new();
        restyle(&mut shape, &kerala_index().style_for(Some("Goa")));
        assert_eq!(shape["dashArray"], json!("4"));

        restyle(&mut shape, &kerala_index().style_for(Some("Kerala")));
        assert_eq!(shape["fillColor"], json!("#EF4444"));
        assert_eq!(shape["dashArray"], json!(""));
    }

    #[test]
    fn test_isolating_kerala_hides_every_other_shape() {
        let names = [Some("Kerala"), Some("Goa"), None, Some("Assam")];
        let styles = isolation_styles(names, "kerala");
        assert_eq!(styles[0], PathStyle::selected());
        for style in &styles[1..] {
            assert_eq!(style.opacity, Some(0.0));
            assert_eq!(style.fill_opacity, Some(0.0));
        }
    }

    #[test]
    fn test_isolation_matches_alias() {
        let styles = isolation_styles([Some("Orissa"), Some("Goa")], "Odisha");
        assert_eq!(styles, vec![PathStyle::selected(), PathStyle::hidden()]);
    }

    #[test]
    fn test_reset_restores_resting_style() {
        let index = kerala_index();
        let names = [Some("Kerala"), Some("Goa")];
        let mut shapes: Vec<_> = names
            .iter()
            .map(|&name| {
                let mut shape = serde_json::Map::new();
                restyle(&mut shape, &index.style_for(name));
                shape
            })
            .collect();
        for (shape, style) in shapes.iter_mut().zip(isolation_styles(names, "Kerala")) {
            restyle(shape, &style);
        }
        assert_eq!(shapes[1]["opacity"], json!(0.0));

        for (shape, name) in shapes.iter_mut().zip(names) {
            restyle(shape, &index.style_for(name));
        }
        assert_eq!(shapes[0]["opacity"], json!(0.8));
        assert_eq!(shapes[0]["fillOpacity"], json!(0.6));
        assert_eq!(shapes[0]["dashArray"], json!(""));
        assert_eq!(shapes[1]["opacity"], json!(0.8));
        assert_eq!(shapes[1]["fillColor"], json!(UNMATCHED_FILL));
    }
}
