//! pinmap prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::common::FixtureStats;
pub use crate::error::{AtlasError, Result};
pub use crate::layers::{BaseLayer, LayerKeys, LayerSelection, OverlayLayer, TileSource};
pub use crate::model::{Atlas, City, Country, DefaultAtlas, DefaultBackend, StandardBackend};
pub use crate::places::{PlaceRecord, RecentVisits, SavedPlaces, RECENTS_CAPACITY};
pub use crate::search::{matches_query, Suggestion};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{MapBackend, NameMatch};
pub use crate::view::{CameraController, MapSession, FLY_ZOOM, INITIAL_CENTER, INITIAL_ZOOM};
