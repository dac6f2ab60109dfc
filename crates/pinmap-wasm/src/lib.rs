//! pinmap-wasm — WebAssembly bindings for pinmap-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `pinmap-core`. It embeds the marker fixture in the binary and drives one
//! [`MapSession`] per page; the JS side owns the actual map widget and
//! performs the camera animation with the fly targets returned here.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Search: `set_query("par")` → suggestion array, `clear_query()`
//! - Selection: `select_suggestion(0)` / `activate()` → fly target or null
//! - Trackers: `recent_visits()`, `saved_places()`, `toggle_save(...)`
//! - Markers: `visible_markers()` gated by the current query
//! - Layers: `set_base_layer`, `toggle_overlay`, `set_layer_keys`,
//!   `tile_url`
//! - A scoped keydown subscription (`mount_key_listener`) implementing the
//!   Enter-selects-first-suggestion behavior with guaranteed deregistration
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { set_query, activate, mount_key_listener } from 'pinmap-wasm';
//!
//! async function main() {
//!   await init(); // parses the embedded fixture
//!   const suggestions = set_query('par');
//!   const target = activate(); // { lat, lng, zoom } or null
//!   if (target) map.flyTo([target.lat, target.lng], target.zoom);
//!
//!   const sub = mount_key_listener((t) => map.flyTo([t.lat, t.lng], t.zoom));
//!   // on view teardown:
//!   sub.unmount();
//! }
//! main();
//! ```

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use pinmap_core::layers::{source_by_name, BaseLayer, LayerKeys, OverlayLayer};
use pinmap_core::{
    Atlas, CameraController, MapSession, StandardBackend, Suggestion, INITIAL_CENTER, INITIAL_ZOOM,
};
use serde::Serialize;
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
pub use listener::{mount_key_listener, KeySubscription};

// The fixture shipped to the browser; same file the native loader bundles.
static EMBEDDED_FIXTURE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../pinmap-core/data/markers.json"));

/// A camera move for the JS side to animate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlyTarget {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

/// Camera that parks the requested move until JS picks it up.
#[derive(Default)]
pub(crate) struct QueuedCamera {
    pending: Option<FlyTarget>,
}

impl CameraController for QueuedCamera {
    fn fly_to(&mut self, geocode: [f64; 2], zoom: f64) {
        self.pending = Some(FlyTarget {
            lat: geocode[0],
            lng: geocode[1],
            zoom,
        });
    }
}

thread_local! {
    static SESSION: RefCell<Option<MapSession<QueuedCamera>>> = RefCell::new(None);
    static KEYS: RefCell<LayerKeys> = RefCell::new(LayerKeys::default());
}

pub(crate) fn with_session<R>(f: impl FnOnce(&mut MapSession<QueuedCamera>) -> R) -> R {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot.get_or_insert_with(|| {
            let atlas = Atlas::<StandardBackend>::from_json_str(EMBEDDED_FIXTURE)
                .expect("embedded fixture parses");
            MapSession::new(atlas, QueuedCamera::default())
        });
        f(session)
    })
}

fn take_fly_target(session: &mut MapSession<QueuedCamera>) -> Option<FlyTarget> {
    session.camera_mut().pending.take()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    with_session(|session| {
        let stats = session.atlas().stats();
        web_sys::console::log_1(
            &format!(
                "pinmap: loaded {} pins across {} countries",
                stats.cities, stats.countries
            )
            .into(),
        );
    });
}

/// Initial viewport: `{ center: [lat, lng], zoom }`.
#[wasm_bindgen]
pub fn initial_view() -> JsValue {
    #[derive(Serialize)]
    struct View {
        center: [f64; 2],
        zoom: f64,
    }
    to_value(&View {
        center: INITIAL_CENTER,
        zoom: INITIAL_ZOOM,
    })
    .unwrap_or(JsValue::NULL)
}

/// Fixture statistics: `{ countries, cities }`.
#[wasm_bindgen]
pub fn stats() -> JsValue {
    with_session(|s| to_value(&s.atlas().stats()).unwrap_or(JsValue::NULL))
}

/// Store new search text; returns the recomputed suggestion array.
#[wasm_bindgen]
pub fn set_query(text: &str) -> JsValue {
    with_session(|s| {
        s.set_query(text);
        to_value(s.suggestions()).unwrap_or(JsValue::NULL)
    })
}

/// Current search text.
#[wasm_bindgen]
pub fn query() -> String {
    with_session(|s| s.query().to_string())
}

/// The search box clear affordance.
#[wasm_bindgen]
pub fn clear_query() {
    with_session(|s| s.clear_query());
}

/// Current suggestion array.
#[wasm_bindgen]
pub fn suggestions() -> JsValue {
    with_session(|s| to_value(s.suggestions()).unwrap_or(JsValue::NULL))
}

/// Select the suggestion at `index` (dropdown click). Returns the fly
/// target `{ lat, lng, zoom }` for the widget to animate.
#[wasm_bindgen]
pub fn select_suggestion(index: usize) -> Result<JsValue, JsValue> {
    with_session(|s| {
        s.select_suggestion(index)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let target = take_fly_target(s);
        Ok(to_value(&target).unwrap_or(JsValue::NULL))
    })
}

/// The Enter-key path: select the first suggestion if any. Returns the fly
/// target, or null when the suggestion list was empty (a no-op).
#[wasm_bindgen]
pub fn activate() -> JsValue {
    with_session(|s| {
        if !s.activate() {
            return JsValue::NULL;
        }
        to_value(&take_fly_target(s)).unwrap_or(JsValue::NULL)
    })
}

/// Pins visible for the current search text, as suggestion-shaped objects.
#[wasm_bindgen]
pub fn visible_markers() -> JsValue {
    with_session(|s| {
        let markers: Vec<Suggestion> = s
            .visible_markers()
            .into_iter()
            .map(|(city, country)| Suggestion::project(city, country))
            .collect();
        to_value(&markers).unwrap_or(JsValue::NULL)
    })
}

/// Recent visits, most recent first. Empty array ⇒ hide the panel.
#[wasm_bindgen]
pub fn recent_visits() -> JsValue {
    with_session(|s| to_value(s.recent_visits()).unwrap_or(JsValue::NULL))
}

/// Saved places, newest first. Empty array ⇒ hide the panel.
#[wasm_bindgen]
pub fn saved_places() -> JsValue {
    with_session(|s| to_value(s.saved_places()).unwrap_or(JsValue::NULL))
}

/// Toggle a bookmark by `(name, country)`. Returns whether the place is
/// saved afterwards; errors when the fixture has no such pin.
#[wasm_bindgen]
pub fn toggle_save(name: &str, country: &str) -> Result<bool, JsValue> {
    with_session(|s| {
        let place = s
            .place_for(name, country)
            .ok_or_else(|| JsValue::from_str(&format!("no pin named {name}, {country}")))?;
        Ok(s.toggle_save(place))
    })
}

/// Membership test by `(name, country)`.
#[wasm_bindgen]
pub fn is_saved(name: &str, country: &str) -> bool {
    with_session(|s| s.is_saved(name, country))
}

/// Switch the base layer ("street" or "satellite").
#[wasm_bindgen]
pub fn set_base_layer(name: &str) -> Result<(), JsValue> {
    let base: BaseLayer = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
    with_session(|s| s.layers_mut().set_base(base));
    Ok(())
}

/// Toggle an overlay ("traffic" or "transit"); returns its new state.
#[wasm_bindgen]
pub fn toggle_overlay(name: &str) -> Result<bool, JsValue> {
    let overlay: OverlayLayer = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
    Ok(with_session(|s| s.layers_mut().toggle(overlay)))
}

/// Configure the API keys for the hosted tile services.
#[wasm_bindgen]
pub fn set_layer_keys(maptiler: Option<String>, thunderforest: Option<String>) {
    KEYS.with(|cell| {
        *cell.borrow_mut() = LayerKeys {
            maptiler,
            thunderforest,
        };
    });
}

/// Resolve a concrete tile URL for a layer by name.
#[wasm_bindgen]
pub fn tile_url(layer: &str, z: u8, x: u32, y: u32) -> Result<String, JsValue> {
    let source =
        source_by_name(layer).ok_or_else(|| JsValue::from_str(&format!("unknown layer: {layer}")))?;
    KEYS.with(|cell| {
        source
            .tile_url(&cell.borrow(), z, x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
