//! Boundary Feature Properties
//!
//! Only the naming properties of GeoJSON features are read on the Rust side;
//! geometry stays in the browser and is handed to the map library as is.

use serde::Deserialize;

use crate::region::same_region;

/// Naming properties found across the country and district boundary files
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureProperties {
    #[serde(rename = "NAME_1", default)]
    pub name_1: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub st_nm: Option<String>,
    #[serde(rename = "NAME_2", default)]
    pub name_2: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl FeatureProperties {
    /// Region name of a first-level boundary
    pub fn region_name(&self) -> Option<&str> {
        non_empty(&self.name_1).or_else(|| non_empty(&self.name))
    }

    /// District name of a second-level boundary
    pub fn district_name(&self) -> Option<&str> {
        non_empty(&self.name_2).or_else(|| non_empty(&self.district))
    }

    /// True when this district boundary lies in `region`
    pub fn belongs_to(&self, region: &str) -> bool {
        [non_empty(&self.name_1), non_empty(&self.st_nm)]
            .into_iter()
            .flatten()
            .any(|parent| same_region(parent, region))
    }
}

/// Entries of `features` whose properties place them in `region`, in input order.
pub fn districts_of<'a, T>(features: &'a [(FeatureProperties, T)], region: &str) -> Vec<&'a T> {
    features
        .iter()
        .filter(|(props, _)| props.belongs_to(region))
        .map(|(_, feature)| feature)
        .collect()
}
