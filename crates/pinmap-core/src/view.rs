// crates/pinmap-core/src/view.rs

//! The map-view session: search text, suggestions, trackers, and the
//! selection protocol that wires them to the camera.
//!
//! Everything here is synchronous and owned by a single view instance; the
//! only state machine is idle → typing (suggestions populated) → selected
//! (suggestions cleared, camera moving) → idle.

use crate::error::{AtlasError, Result};
use crate::layers::LayerSelection;
use crate::model::{City, Country, DefaultAtlas, DefaultBackend};
use crate::places::{PlaceRecord, RecentVisits, SavedPlaces};
use crate::search::Suggestion;
use crate::traits::NameMatch;

/// Initial map center, `[latitude, longitude]`.
pub const INITIAL_CENTER: [f64; 2] = [48.8566, 2.3522];
/// Initial map zoom.
pub const INITIAL_ZOOM: f64 = 3.0;
/// Zoom level used when flying to a selected suggestion.
pub const FLY_ZOOM: f64 = 10.0;

/// The opaque collaborator that animates the viewport.
///
/// Frontends bind this to the actual map widget; tests use a recorder.
pub trait CameraController {
    /// Animate the view to `geocode` (`[latitude, longitude]`) at `zoom`.
    fn fly_to(&mut self, geocode: [f64; 2], zoom: f64);
}

/// One interactive map view: fixture, camera, search state, and trackers.
pub struct MapSession<C: CameraController> {
    atlas: DefaultAtlas,
    camera: C,
    query: String,
    suggestions: Vec<Suggestion>,
    recents: RecentVisits,
    saved: SavedPlaces,
    layers: LayerSelection,
}

impl<C: CameraController> MapSession<C> {
    pub fn new(atlas: DefaultAtlas, camera: C) -> Self {
        MapSession {
            atlas,
            camera,
            query: String::new(),
            suggestions: Vec::new(),
            recents: RecentVisits::new(),
            saved: SavedPlaces::new(),
            layers: LayerSelection::default(),
        }
    }

    pub fn atlas(&self) -> &DefaultAtlas {
        &self.atlas
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Store new search text and recompute the suggestion list from scratch.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.suggestions = self.atlas.suggest(text);
    }

    /// The search box clear affordance: reset text and suggestions.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.suggestions.clear();
    }

    /// Current suggestion list, in fixture source order.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Select the suggestion at `index` (a pointer click on the dropdown).
    ///
    /// In order: set the query text to the entry's name, fly the camera to
    /// its geocode at [`FLY_ZOOM`], record the visit, clear the suggestion
    /// list. Clearing happens last: the selected entry must stay resolvable
    /// until the camera and recents side effects have run.
    pub fn select_suggestion(&mut self, index: usize) -> Result<()> {
        let entry = self
            .suggestions
            .get(index)
            .cloned()
            .ok_or(AtlasError::OutOfRange(index))?;

        self.query = entry.name.clone();
        self.camera.fly_to(entry.geocode, FLY_ZOOM);
        self.recents.record(PlaceRecord::from(entry));
        self.suggestions.clear();
        Ok(())
    }

    /// The Enter-key path: select the *first* suggestion if the list is
    /// non-empty. With an empty list this is a complete no-op — no camera
    /// move, no recorded visit. Returns whether a selection happened.
    pub fn activate(&mut self) -> bool {
        if self.suggestions.is_empty() {
            return false;
        }
        self.select_suggestion(0).is_ok()
    }

    /// Pins visible for the current search text (empty text shows all).
    pub fn visible_markers(&self) -> Vec<(&City<DefaultBackend>, &Country<DefaultBackend>)> {
        self.atlas.visible_markers(&self.query)
    }

    /// Recent visits, most recent first. Empty ⇒ the panel is not rendered.
    pub fn recent_visits(&self) -> &[PlaceRecord] {
        self.recents.as_slice()
    }

    /// Saved places, newest first. Empty ⇒ the panel is not rendered.
    pub fn saved_places(&self) -> &[PlaceRecord] {
        self.saved.as_slice()
    }

    /// Build a [`PlaceRecord`] for a pin by `(name, country)`, if the
    /// fixture has it.
    pub fn place_for(&self, name: &str, country: &str) -> Option<PlaceRecord> {
        self.atlas
            .iter_cities()
            .find(|(city, c)| city.is_named(name) && c.is_named(country))
            .map(|(city, c)| PlaceRecord::from(Suggestion::project(city, c)))
    }

    /// Toggle a place's bookmark; returns whether it is saved afterwards.
    pub fn toggle_save(&mut self, place: PlaceRecord) -> bool {
        self.saved.toggle(place)
    }

    pub fn is_saved(&self, name: &str, country: &str) -> bool {
        self.saved.is_saved(name, country)
    }

    pub fn layers(&self) -> &LayerSelection {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerSelection {
        &mut self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Atlas;

    /// Camera stub that records every move.
    #[derive(Default)]
    struct RecordingCamera {
        moves: Vec<([f64; 2], f64)>,
    }

    impl CameraController for RecordingCamera {
        fn fly_to(&mut self, geocode: [f64; 2], zoom: f64) {
            self.moves.push((geocode, zoom));
        }
    }

    fn session() -> MapSession<RecordingCamera> {
        let atlas = Atlas::from_json_str(
            r#"[
              {"country":"France","cities":[
                {"name":"Paris","User":"alice","geocode":[48.8566,2.3522],
                 "avtar":"https://example.com/alice.png"},
                {"name":"Lyon","User":"marta","geocode":[45.7640,4.8357],
                 "avtar":"https://example.com/marta.png"}]},
              {"country":"Japan","cities":[
                {"name":"Tokyo","User":"kenji","geocode":[35.6762,139.6503],
                 "avtar":"https://example.com/kenji.png"}]}
            ]"#,
        )
        .expect("valid fixture");
        MapSession::new(atlas, RecordingCamera::default())
    }

    #[test]
    fn typing_populates_suggestions() {
        let mut s = session();
        s.set_query("par");
        assert_eq!(s.suggestions().len(), 1);
        assert_eq!(s.suggestions()[0].name, "Paris");
    }

    #[test]
    fn enter_selects_the_first_suggestion() {
        let mut s = session();
        s.set_query("par");
        assert!(s.activate());

        assert_eq!(s.query(), "Paris");
        assert_eq!(s.camera().moves, [([48.8566, 2.3522], FLY_ZOOM)]);
        assert_eq!(s.recent_visits().len(), 1);
        assert!(s.recent_visits()[0].same_place("Paris", "France"));
        assert!(s.suggestions().is_empty());
    }

    #[test]
    fn enter_with_no_suggestions_is_a_no_op() {
        let mut s = session();
        s.set_query("zzz");
        assert!(!s.activate());
        assert!(s.camera().moves.is_empty());
        assert!(s.recent_visits().is_empty());
    }

    #[test]
    fn click_selects_by_index() {
        let mut s = session();
        s.set_query("a"); // Paris, Lyon (marta), Tokyo (Japan)
        assert_eq!(s.suggestions().len(), 3);
        s.select_suggestion(2).unwrap();
        assert_eq!(s.query(), "Tokyo");
        assert!(s.recent_visits()[0].same_place("Tokyo", "Japan"));
    }

    #[test]
    fn select_out_of_range_is_an_error() {
        let mut s = session();
        s.set_query("par");
        assert!(matches!(
            s.select_suggestion(7),
            Err(AtlasError::OutOfRange(7))
        ));
        // The failed selection must not disturb the view state.
        assert_eq!(s.suggestions().len(), 1);
        assert!(s.camera().moves.is_empty());
    }

    #[test]
    fn clear_query_resets_text_and_suggestions() {
        let mut s = session();
        s.set_query("par");
        s.clear_query();
        assert_eq!(s.query(), "");
        assert!(s.suggestions().is_empty());
        // An empty query shows every marker again.
        assert_eq!(s.visible_markers().len(), 3);
    }

    #[test]
    fn saving_gates_the_panel() {
        let mut s = session();
        assert!(s.saved_places().is_empty());

        let paris = s.place_for("Paris", "France").unwrap();
        assert!(s.toggle_save(paris.clone()));
        assert!(!s.saved_places().is_empty());
        assert!(s.is_saved("Paris", "France"));

        assert!(!s.toggle_save(paris));
        assert!(s.saved_places().is_empty());
    }

    #[test]
    fn visits_dedupe_and_stay_bounded() {
        let mut s = session();
        for query in ["par", "lyo", "par", "tok"] {
            s.set_query(query);
            s.activate();
        }
        let names: Vec<&str> = s.recent_visits().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Tokyo", "Paris", "Lyon"]);
    }
}
