// crates/pinmap-core/src/lib.rs

//! # pinmap-core
//!
//! Data model and session logic for an interactive pin map: a static fixture
//! of country → city pins submitted by users, type-ahead search across city,
//! country, and submitter names, a camera-selection protocol, bounded
//! recents, saved places, and the tile-layer catalogue the map widget is
//! pointed at.
//!
//! Rendering (tiles, marker clustering, animation) is delegated to an
//! external map widget behind the [`view::CameraController`] seam; this
//! crate owns everything that decides *what* the widget shows.

pub mod common;
pub mod error;
pub mod layers;
pub mod loader;
pub mod model;
pub mod places;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
pub mod view;
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::FixtureStats;
pub use crate::error::{AtlasError, Result};
pub use crate::model::{Atlas, City, Country, DefaultAtlas, DefaultBackend, StandardBackend};
pub use crate::places::{PlaceRecord, RecentVisits, SavedPlaces, RECENTS_CAPACITY};
pub use crate::search::Suggestion;
pub use crate::view::{CameraController, MapSession, FLY_ZOOM, INITIAL_CENTER, INITIAL_ZOOM};
