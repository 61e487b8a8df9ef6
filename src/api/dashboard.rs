//! Dashboard Endpoints

use dq_view_model::{ApiError, DashboardSummary, Endpoints, RegionDetail, RegionSummary};

use super::get;

pub async fn fetch_summary(api: &Endpoints) -> Result<DashboardSummary, ApiError> {
    get(&api.summary()).await
}

pub async fn fetch_regions(api: &Endpoints) -> Result<Vec<RegionSummary>, ApiError> {
    get(&api.regions()).await
}

pub async fn fetch_region_detail(api: &Endpoints, region: &str) -> Result<RegionDetail, ApiError> {
    get(&api.region_detail(region)).await
}
