//! Dashboard Controller
//!
//! Page state of the dashboard, created once when the page mounts and
//! shared with child components through context.

use std::rc::Rc;

use dq_view_model::geo::FeatureProperties;
use dq_view_model::region::region_tooltip_html;
use dq_view_model::{AppConfig, DashboardSummary, RegionDetail, RegionIndex, SelectionGuard};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::api::{self, feature_properties, DistrictCatalog};
use crate::bindings::leaflet::{event_layer, PathLayer};
use crate::bindings::to_js;
use crate::dashboard::region_map::{path_region_name, RegionMap};

#[derive(Clone, Copy)]
pub struct DashboardController {
    config: StoredValue<AppConfig>,
    pub summary: RwSignal<Option<DashboardSummary>>,
    /// Local time of the last successful summary load
    pub last_updated: RwSignal<Option<String>>,
    pub index: RwSignal<RegionIndex>,
    pub detail: RwSignal<Option<RegionDetail>>,
    pub selection: RwSignal<SelectionGuard>,
    map: StoredValue<Option<RegionMap>, LocalStorage>,
    /// Style function handed to Leaflet, reused on every repaint
    region_style: StoredValue<Option<JsValue>, LocalStorage>,
    district_catalog: StoredValue<Option<Rc<DistrictCatalog>>, LocalStorage>,
}

impl DashboardController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            summary: RwSignal::new(None),
            last_updated: RwSignal::new(None),
            index: RwSignal::new(RegionIndex::default()),
            detail: RwSignal::new(None),
            selection: RwSignal::new(SelectionGuard::default()),
            map: StoredValue::new_local(None),
            region_style: StoredValue::new_local(None),
            district_catalog: StoredValue::new_local(None),
        }
    }

    fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    // ========================
    // Statistics
    // ========================

    /// Reload summary and region statistics
    pub fn refresh(self) {
        spawn_local(async move {
            self.load_summary().await;
            self.load_regions().await;
        });
    }

    async fn load_summary(self) {
        let api = self.config().endpoints();
        match api::fetch_summary(&api).await {
            Ok(summary) => {
                self.summary.set(Some(summary));
                let now = js_sys::Date::new_0().to_locale_time_string("default");
                self.last_updated.set(Some(String::from(now)));
            }
            Err(e) => log::error!("Error loading summary: {}", e),
        }
    }

    async fn load_regions(self) {
        let api = self.config().endpoints();
        match api::fetch_regions(&api).await {
            Ok(regions) => {
                log::debug!("loaded {} regions", regions.len());
                self.index.set(RegionIndex::new(regions));
                self.repaint();
            }
            Err(e) => log::error!("Error loading states: {}", e),
        }
    }

    /// Recolour every region from the current statistics, keeping an isolated view intact
    fn repaint(self) {
        let Some(style) = self.region_style.get_value() else { return };
        let isolated = self.selection.with_untracked(|g| g.isolated().map(str::to_string));
        self.map.with_value(|map| {
            let Some(map) = map else { return };
            map.repaint(&style);
            if let Some(name) = isolated {
                map.isolate(&name);
            }
            let names = map.boundary_names();
            let unmatched = self.index.with_untracked(|idx| idx.unmatched(names.iter().map(String::as_str)));
            if !unmatched.is_empty() {
                log::warn!(
                    "{} boundaries have no statistics: {}",
                    unmatched.len(),
                    unmatched.join(", ")
                );
            }
        });
    }

    // ========================
    // Map
    // ========================

    /// Create the map in `container` and start loading the country boundaries
    pub fn mount_map(self, container: &web_sys::HtmlElement) {
        if self.map.with_value(Option::is_some) {
            return;
        }
        let view = self.config().map;
        match RegionMap::new(container, &view) {
            Ok(map) => self.map.set_value(Some(map)),
            Err(e) => {
                log::error!("Error creating map: {}", api::js_error(&e));
                return;
            }
        }
        spawn_local(async move {
            let url = self.config().state_geojson_url;
            match api::fetch_geojson(&url).await {
                Ok(geojson) => self.draw_regions(&geojson),
                Err(e) => log::error!("Error loading GeoJSON: {}", e),
            }
        });
    }

    fn draw_regions(self, geojson: &JsValue) {
        let index = self.index;
        let style = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |feature: JsValue| {
            let props = feature_properties(&feature);
            to_js(&index.with_untracked(|idx| idx.style_for(props.region_name())))
        })
        .into_js_value();

        let tooltip = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |layer: JsValue| {
            let path: PathLayer = wasm_bindgen::JsCast::unchecked_into(layer);
            let name = path_region_name(&path);
            let html = index.with_untracked(|idx| {
                region_tooltip_html(name.as_deref(), name.as_deref().and_then(|n| idx.lookup(n)))
            });
            JsValue::from_str(&html)
        })
        .into_js_value();

        let on_over = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            if self.selection.with_untracked(SelectionGuard::is_isolated) {
                return;
            }
            if let Some(path) = event_layer(&event) {
                self.map.with_value(|m| m.as_ref().map(|m| m.highlight(&path)));
            }
        })
        .into_js_value();

        let on_out = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            if self.selection.with_untracked(SelectionGuard::is_isolated) {
                return;
            }
            if let Some(path) = event_layer(&event) {
                self.map.with_value(|m| m.as_ref().map(|m| m.unhighlight(&path)));
            }
        })
        .into_js_value();

        let on_click = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            if let Some(name) = event_layer(&event).and_then(|p| path_region_name(&p)) {
                self.select_region(name);
            }
        })
        .into_js_value();

        let drawn = self.map.try_update_value(|m| {
            let map = m.as_mut()?;
            match map.draw_regions(geojson, &style, &tooltip) {
                Ok(layer) => {
                    layer.on("mouseover", &on_over);
                    layer.on("mouseout", &on_out);
                    layer.on("click", &on_click);
                    Some(())
                }
                Err(e) => {
                    log::error!("Error drawing regions: {}", api::js_error(&e));
                    None
                }
            }
        });
        if drawn.flatten().is_some() {
            self.region_style.set_value(Some(style));
            self.repaint();
        }
    }

    // ========================
    // Selection
    // ========================

    /// Isolate a region on the map and open its drill-down panel
    pub fn select_region(self, name: String) {
        if !self.selection.with_untracked(|g| g.can_select(&name)) {
            log::debug!("ignoring selection of {} while another region is isolated", name);
            return;
        }

        let view = self.config().map;
        let isolated = self.map.with_value(|m| {
            let map = m.as_ref()?;
            let path = map.isolate(&name)?;
            map.fly_to(&path, &view);
            Some(())
        });
        if isolated.is_some() {
            self.selection.update(|g| {
                g.try_isolate(&name);
            });
            let region = name.clone();
            spawn_local(async move { self.load_districts(region).await });
        } else {
            log::warn!("no boundary named {}; showing details without isolating", name);
        }

        spawn_local(async move {
            let api = self.config().endpoints();
            match api::fetch_region_detail(&api, &name).await {
                Ok(detail) => self.detail.set(Some(detail)),
                Err(e) => log::error!("Error loading state data: {}", e),
            }
        });
    }

    /// District file is fetched on first use and kept for the session
    async fn districts(self) -> Option<Rc<DistrictCatalog>> {
        if let Some(catalog) = self.district_catalog.get_value() {
            return Some(catalog);
        }
        let url = self.config().district_geojson_url;
        let collection = match api::fetch_geojson(&url).await {
            Ok(c) => c,
            Err(e) => {
                log::error!("Error loading District GeoJSON: {}", e);
                return None;
            }
        };
        match DistrictCatalog::from_collection(&collection) {
            Ok(catalog) => {
                log::debug!("cached {} district features", catalog.len());
                let catalog = Rc::new(catalog);
                self.district_catalog.set_value(Some(Rc::clone(&catalog)));
                Some(catalog)
            }
            Err(e) => {
                log::error!("Error reading District GeoJSON: {}", e);
                None
            }
        }
    }

    async fn load_districts(self, region: String) {
        let Some(catalog) = self.districts().await else { return };
        if !self.selection.with_untracked(|g| g.is_current(&region)) {
            log::debug!("discarding districts of {}; selection changed", region);
            return;
        }
        let (collection, count) = catalog.collection_for(&region);
        log::debug!("{} districts in {}", count, region);

        let tooltip = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |layer: JsValue| {
            let path: PathLayer = wasm_bindgen::JsCast::unchecked_into(layer);
            let props: FeatureProperties = feature_properties(&path.feature());
            JsValue::from_str(props.district_name().unwrap_or_default())
        })
        .into_js_value();

        self.map.update_value(|m| {
            if let Some(map) = m {
                if let Err(e) = map.show_districts(&collection, &tooltip) {
                    log::error!("Error drawing districts: {}", api::js_error(&e));
                }
            }
        });
    }

    /// Undo a selection: all regions visible again, overlay gone, panel closed
    pub fn reset_view(self) {
        self.selection.update(SelectionGuard::reset);
        let view = self.config().map;
        self.map.update_value(|m| {
            if let Some(map) = m {
                map.reset(&view);
            }
        });
        self.hide_panel();
    }

    pub fn hide_panel(self) {
        self.detail.set(None);
    }
}
