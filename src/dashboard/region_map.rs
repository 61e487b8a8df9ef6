//! Region Map
//!
//! Owns the Leaflet map and its two GeoJSON layers: one shape per region,
//! and the district overlay of the isolated region.

use dq_view_model::region::same_region;
use dq_view_model::style::{isolation_styles, PathStyle};
use dq_view_model::MapViewConfig;
use wasm_bindgen::JsValue;

use crate::api::feature_properties;
use crate::bindings::leaflet::{self, GeoJsonLayer, LeafletMap, PathLayer};
use crate::bindings::to_js;

pub struct RegionMap {
    map: LeafletMap,
    regions: Option<GeoJsonLayer>,
    districts: Option<GeoJsonLayer>,
}

/// Region name of a rendered boundary shape
pub fn path_region_name(path: &PathLayer) -> Option<String> {
    feature_properties(&path.feature()).region_name().map(str::to_string)
}

fn js_options(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in pairs {
        let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

impl RegionMap {
    pub fn new(container: &web_sys::HtmlElement, view: &MapViewConfig) -> Result<Self, JsValue> {
        let options = js_options(&[
            ("center", leaflet::lat_lng(view.center)),
            ("zoom", view.zoom.into()),
            ("minZoom", view.min_zoom.into()),
            ("maxZoom", view.max_zoom.into()),
            ("zoomControl", true.into()),
            ("attributionControl", false.into()),
        ]);
        let map = leaflet::create_map(container, &options)?;
        Ok(Self { map, regions: None, districts: None })
    }

    /// Draw the country boundaries. `style` is called per feature, now and on every repaint.
    pub fn draw_regions(&mut self, geojson: &JsValue, style: &JsValue, tooltip: &JsValue) -> Result<&GeoJsonLayer, JsValue> {
        let layer = leaflet::geo_json(geojson, &js_options(&[("style", style.clone())]))?;
        layer.add_to(&self.map);
        layer.bind_tooltip(
            tooltip,
            &js_options(&[
                ("sticky", true.into()),
                ("className", "state-tooltip-container".into()),
            ]),
        );
        Ok(&*self.regions.insert(layer))
    }

    /// Re-run the style function over every shape
    pub fn repaint(&self, style: &JsValue) {
        if let Some(regions) = &self.regions {
            regions.set_style(style);
        }
    }

    /// Names of every drawn boundary
    pub fn boundary_names(&self) -> Vec<String> {
        self.regions
            .iter()
            .flat_map(leaflet::paths)
            .filter_map(|path| path_region_name(&path))
            .collect()
    }

    fn find_region(&self, name: &str) -> Option<PathLayer> {
        let regions = self.regions.as_ref()?;
        leaflet::paths(regions).find(|path| {
            path_region_name(path).is_some_and(|n| same_region(&n, name))
        })
    }

    /// Highlight `name` and fade every other shape out; `None` when no shape has that name.
    pub fn isolate(&self, name: &str) -> Option<PathLayer> {
        let target = self.find_region(name)?;
        let paths: Vec<PathLayer> = leaflet::paths(self.regions.as_ref()?).collect();
        let names: Vec<Option<String>> = paths.iter().map(path_region_name).collect();
        let styles = isolation_styles(names.iter().map(Option::as_deref), name);
        for (path, style) in paths.iter().zip(&styles) {
            path.set_style(&to_js(style));
        }
        Some(target)
    }

    pub fn fly_to(&self, path: &PathLayer, view: &MapViewConfig) {
        let padding = js_sys::Array::of2(&view.fit_padding_px.into(), &view.fit_padding_px.into());
        let options = js_options(&[
            ("padding", padding.into()),
            ("duration", view.fly_duration_secs.into()),
            ("easeLinearity", JsValue::from_f64(0.25)),
        ]);
        self.map.fly_to_bounds(&path.get_bounds(), &options);
    }

    pub fn highlight(&self, path: &PathLayer) {
        path.set_style(&to_js(&PathStyle::hover()));
        path.bring_to_front();
    }

    pub fn unhighlight(&self, path: &PathLayer) {
        if let Some(regions) = &self.regions {
            regions.reset_style(path);
        }
    }

    /// Replace the district overlay
    pub fn show_districts(&mut self, collection: &JsValue, tooltip: &JsValue) -> Result<(), JsValue> {
        self.clear_districts();
        let layer = leaflet::geo_json(collection, &js_options(&[("style", to_js(&PathStyle::district()))]))?;
        layer.add_to(&self.map);
        layer.bind_tooltip(
            tooltip,
            &js_options(&[
                ("className", "district-tooltip".into()),
                ("direction", "center".into()),
                ("permanent", false.into()),
            ]),
        );
        self.districts = Some(layer);
        Ok(())
    }

    pub fn clear_districts(&mut self) {
        if let Some(layer) = self.districts.take() {
            self.map.remove_layer(&layer);
        }
    }

    /// Back to the initial view with every region restored
    pub fn reset(&mut self, view: &MapViewConfig) {
        self.clear_districts();
        let options = js_options(&[("duration", view.fly_duration_secs.into())]);
        self.map.fly_to(&leaflet::lat_lng(view.center), view.zoom, &options);
        if let Some(regions) = &self.regions {
            for path in leaflet::paths(regions) {
                regions.reset_style(&path);
            }
        }
    }
}
