//! End-to-end exercise of the search → select → recents/saved flow against
//! the bundled fixture.

use pinmap_core::prelude::*;

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

fn bundled_session() -> MapSession<RecordingCamera> {
    let atlas = Atlas::<StandardBackend>::load().expect("bundled fixture loads");
    MapSession::new(atlas, RecordingCamera::default())
}

#[test]
fn bundled_fixture_has_pins() {
    let session = bundled_session();
    let stats = session.atlas().stats();
    assert!(stats.countries >= 5);
    assert!(stats.cities >= stats.countries);
    assert_eq!(session.visible_markers().len(), stats.cities);
}

#[test]
fn search_select_and_revisit() {
    let mut session = bundled_session();

    // Type-ahead on a partial, differently-cased query.
    session.set_query("PAR");
    assert!(session
        .suggestions()
        .iter()
        .any(|s| s.name == "Paris" && s.country == "France"));

    // Enter selects the first match and runs the full protocol.
    let first = session.suggestions()[0].clone();
    assert!(session.activate());
    assert_eq!(session.query(), first.name);
    assert_eq!(session.camera().moves.last(), Some(&(first.geocode, FLY_ZOOM)));
    assert!(session.recent_visits()[0].same_place(&first.name, &first.country));
    assert!(session.suggestions().is_empty());

    // Visiting other places keeps the list deduplicated and bounded.
    for query in ["tokyo", "rio", "zuri", "new york", "marrakesh", "tokyo"] {
        session.set_query(query);
        session.activate();
    }
    assert_eq!(session.recent_visits().len(), RECENTS_CAPACITY);
    assert!(session.recent_visits()[0].same_place("Tokyo", "Japan"));
    assert_eq!(
        session
            .recent_visits()
            .iter()
            .filter(|p| p.same_place("Tokyo", "Japan"))
            .count(),
        1
    );
}

#[test]
fn folded_search_reaches_accented_pins() {
    let session = bundled_session();
    let hits = session.atlas().suggest("sao pa");
    assert!(hits.iter().any(|s| s.name == "São Paulo"));
    let hits = session.atlas().suggest("zurich");
    assert!(hits.iter().any(|s| s.name == "Zürich"));
}

#[test]
fn saved_places_survive_searches() {
    let mut session = bundled_session();

    let geneva = session.place_for("Geneva", "Switzerland").expect("in fixture");
    assert!(session.toggle_save(geneva));

    session.set_query("tokyo");
    session.activate();

    assert!(session.is_saved("Geneva", "Switzerland"));
    assert_eq!(session.saved_places().len(), 1);
}

#[test]
fn markers_are_gated_by_query() {
    let mut session = bundled_session();
    session.set_query("france");
    let markers = session.visible_markers();
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|(_, country)| country.name() == "France"));

    session.clear_query();
    let stats = session.atlas().stats();
    assert_eq!(session.visible_markers().len(), stats.cities);
}
