// crates/pinmap-core/src/layers.rs

//! Tile-layer registry and selection state.
//!
//! The map widget renders whatever sources this module resolves; the crate
//! only owns the catalogue, the exclusive-base/overlay selection rules, and
//! the API-key configuration for the hosted services.

use crate::error::{AtlasError, Result};
use std::str::FromStr;

/// Mutually exclusive base layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseLayer {
    #[default]
    Street,
    Satellite,
}

/// Independently toggled overlay layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    Traffic,
    Transit,
}

/// Which configured API key a source needs, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeySlot {
    None,
    MapTiler,
    Thunderforest,
}

/// A tile service the widget can be pointed at.
#[derive(Debug, Clone, Copy)]
pub struct TileSource {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub subdomains: &'static [&'static str],
    key: KeySlot,
}

/// API keys for the hosted tile services. Configuration values, not logic:
/// the CLI reads them from flags/environment, the wasm bindings from JS.
#[derive(Debug, Clone, Default)]
pub struct LayerKeys {
    pub maptiler: Option<String>,
    pub thunderforest: Option<String>,
}

pub const STREET: TileSource = TileSource {
    name: "street",
    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
    subdomains: &["a", "b", "c"],
    key: KeySlot::None,
};

pub const SATELLITE: TileSource = TileSource {
    name: "satellite",
    url_template: "https://api.maptiler.com/maps/satellite/{z}/{x}/{y}.jpg?key={key}",
    attribution: "&copy; MapTiler &copy; OpenStreetMap contributors",
    subdomains: &[],
    key: KeySlot::MapTiler,
};

pub const TRAFFIC: TileSource = TileSource {
    name: "traffic",
    url_template: "https://{s}.tile.opentraffic.org/{z}/{x}/{y}.png",
    attribution: "&copy; OpenTraffic contributors",
    subdomains: &["a", "b"],
    key: KeySlot::None,
};

pub const TRANSIT: TileSource = TileSource {
    name: "transit",
    url_template: "https://{s}.tile.thunderforest.com/transport/{z}/{x}/{y}.png?apikey={key}",
    attribution: "Maps &copy; Thunderforest, Data &copy; OpenStreetMap contributors",
    subdomains: &["a", "b", "c"],
    key: KeySlot::Thunderforest,
};

impl TileSource {
    /// Whether this source needs one of the configured API keys.
    pub fn requires_key(&self) -> bool {
        self.key != KeySlot::None
    }

    /// Resolve a concrete tile URL for the given coordinates.
    ///
    /// Substitutes `{z}`/`{x}`/`{y}`, picks a subdomain for `{s}` the way
    /// the widget does (`(x + y) % subdomains.len()`), and fills `{key}`
    /// from `keys`. A keyed source without its key is an error.
    pub fn tile_url(&self, keys: &LayerKeys, z: u8, x: u32, y: u32) -> Result<String> {
        let mut url = self
            .url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string());

        if !self.subdomains.is_empty() {
            let s = self.subdomains[((x + y) as usize) % self.subdomains.len()];
            url = url.replace("{s}", s);
        }

        if self.requires_key() {
            let key = match self.key {
                KeySlot::MapTiler => keys.maptiler.as_deref(),
                KeySlot::Thunderforest => keys.thunderforest.as_deref(),
                KeySlot::None => unreachable!(),
            }
            .ok_or_else(|| AtlasError::MissingApiKey(self.name.to_string()))?;
            url = url.replace("{key}", key);
        }

        Ok(url)
    }
}

impl BaseLayer {
    pub fn source(self) -> &'static TileSource {
        match self {
            BaseLayer::Street => &STREET,
            BaseLayer::Satellite => &SATELLITE,
        }
    }
}

impl OverlayLayer {
    pub fn source(self) -> &'static TileSource {
        match self {
            OverlayLayer::Traffic => &TRAFFIC,
            OverlayLayer::Transit => &TRANSIT,
        }
    }
}

impl FromStr for BaseLayer {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "street" => Ok(BaseLayer::Street),
            "satellite" => Ok(BaseLayer::Satellite),
            other => Err(format!("unknown base layer: {other}")),
        }
    }
}

impl FromStr for OverlayLayer {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "traffic" => Ok(OverlayLayer::Traffic),
            "transit" => Ok(OverlayLayer::Transit),
            other => Err(format!("unknown overlay layer: {other}")),
        }
    }
}

/// Look up any layer's source by its display name.
pub fn source_by_name(name: &str) -> Option<&'static TileSource> {
    [&STREET, &SATELLITE, &TRAFFIC, &TRANSIT]
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Current layer choice: exactly one base, any subset of overlays.
#[derive(Debug, Clone, Default)]
pub struct LayerSelection {
    base: BaseLayer,
    traffic: bool,
    transit: bool,
}

impl LayerSelection {
    /// Switch the base layer; the previous base is implicitly deselected.
    pub fn set_base(&mut self, base: BaseLayer) {
        self.base = base;
    }

    pub fn base(&self) -> BaseLayer {
        self.base
    }

    /// Toggle an overlay; returns whether it is enabled after the call.
    pub fn toggle(&mut self, overlay: OverlayLayer) -> bool {
        let slot = match overlay {
            OverlayLayer::Traffic => &mut self.traffic,
            OverlayLayer::Transit => &mut self.transit,
        };
        *slot = !*slot;
        *slot
    }

    pub fn is_enabled(&self, overlay: OverlayLayer) -> bool {
        match overlay {
            OverlayLayer::Traffic => self.traffic,
            OverlayLayer::Transit => self.transit,
        }
    }

    /// Enabled overlays in catalogue order.
    pub fn overlays(&self) -> Vec<OverlayLayer> {
        let mut out = Vec::new();
        if self.traffic {
            out.push(OverlayLayer::Traffic);
        }
        if self.transit {
            out.push(OverlayLayer::Transit);
        }
        out
    }

    /// Every active source, base first.
    pub fn active_sources(&self) -> Vec<&'static TileSource> {
        let mut out = vec![self.base.source()];
        out.extend(self.overlays().into_iter().map(OverlayLayer::source));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_tile_url_needs_no_key() {
        let url = STREET.tile_url(&LayerKeys::default(), 3, 4, 2).unwrap();
        assert_eq!(url, "https://a.tile.openstreetmap.org/3/4/2.png");
    }

    #[test]
    fn keyed_source_without_key_errors() {
        let err = SATELLITE
            .tile_url(&LayerKeys::default(), 1, 0, 0)
            .unwrap_err();
        assert!(matches!(err, AtlasError::MissingApiKey(name) if name == "satellite"));
    }

    #[test]
    fn key_is_substituted() {
        let keys = LayerKeys {
            maptiler: Some("abc123".to_string()),
            thunderforest: None,
        };
        let url = SATELLITE.tile_url(&keys, 1, 0, 0).unwrap();
        assert!(url.ends_with("?key=abc123"));
    }

    #[test]
    fn base_layers_are_exclusive() {
        let mut sel = LayerSelection::default();
        assert_eq!(sel.base(), BaseLayer::Street);
        sel.set_base(BaseLayer::Satellite);
        assert_eq!(sel.base(), BaseLayer::Satellite);
        assert_eq!(sel.active_sources()[0].name, "satellite");
    }

    #[test]
    fn overlays_toggle_independently() {
        let mut sel = LayerSelection::default();
        assert!(sel.toggle(OverlayLayer::Transit));
        assert!(sel.toggle(OverlayLayer::Traffic));
        assert_eq!(sel.overlays(), [OverlayLayer::Traffic, OverlayLayer::Transit]);
        assert!(!sel.toggle(OverlayLayer::Transit));
        assert_eq!(sel.overlays(), [OverlayLayer::Traffic]);
    }
}
