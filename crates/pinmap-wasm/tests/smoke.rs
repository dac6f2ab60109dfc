#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use pinmap_wasm::{activate, clear_query, recent_visits, set_query, stats, toggle_save};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn embedded_fixture_is_loaded() {
    let value = stats();
    assert!(!value.is_null(), "expected fixture stats");
}

#[wasm_bindgen_test]
fn search_and_activate_flow() {
    let suggestions = set_query("par");
    assert!(!suggestions.is_null());

    let target = activate();
    assert!(!target.is_null(), "expected a fly target for 'par'");

    let visits = recent_visits();
    assert!(!visits.is_null());
    clear_query();
}

#[wasm_bindgen_test]
fn activate_without_suggestions_is_null() {
    set_query("no such place anywhere");
    assert!(activate().is_null());
}

#[wasm_bindgen_test]
fn toggling_save_roundtrips() {
    assert!(toggle_save("Paris", "France").unwrap());
    assert!(!toggle_save("Paris", "France").unwrap());
    assert!(toggle_save("Nowhere", "Atlantis").is_err());
}
