//! Interactive-flow example for pinmap-rs
//!
//! Demonstrates the full view session: type-ahead search, Enter selection,
//! the camera seam, recents, and saved places.

use pinmap_rs::prelude::*;

/// Camera that narrates its moves instead of animating a widget.
struct ConsoleCamera;

impl CameraController for ConsoleCamera {
    fn fly_to(&mut self, geocode: [f64; 2], zoom: f64) {
        println!(
            "  [camera] flying to ({:.4}, {:.4}) at zoom {zoom}",
            geocode[0], geocode[1]
        );
    }
}

fn main() -> Result<()> {
    println!("=== PinMap Search & Fly Example ===\n");

    let atlas = Atlas::<StandardBackend>::load()?;
    let mut session = MapSession::new(atlas, ConsoleCamera);

    println!(
        "Initial view: ({:.4}, {:.4}) at zoom {INITIAL_ZOOM}\n",
        INITIAL_CENTER[0], INITIAL_CENTER[1]
    );

    // Example 1: Type-ahead search
    println!("--- Example 1: Typing 'par' ---");
    session.set_query("par");
    for s in session.suggestions() {
        println!("  suggestion: {} — {}, by {}", s.name, s.country, s.submitter);
    }
    println!();

    // Example 2: Enter selects the first suggestion
    println!("--- Example 2: Pressing Enter ---");
    session.activate();
    println!("  query is now '{}'", session.query());
    println!();

    // Example 3: Visit a few more places
    println!("--- Example 3: More visits ---");
    for query in ["tokyo", "rio", "zuri"] {
        session.set_query(query);
        session.activate();
    }
    println!("  Recent visits (most recent first):");
    for place in session.recent_visits() {
        println!("    {} — {}", place.name, place.country);
    }
    println!();

    // Example 4: Saving places
    println!("--- Example 4: Saved places ---");
    if let Some(geneva) = session.place_for("Geneva", "Switzerland") {
        session.toggle_save(geneva);
    }
    println!(
        "  Geneva saved? {}",
        session.is_saved("Geneva", "Switzerland")
    );
    for place in session.saved_places() {
        println!("    saved: {} — {}", place.name, place.country);
    }
    println!();

    // Example 5: Enter with no suggestions is a no-op
    println!("--- Example 5: Enter on an empty list ---");
    session.set_query("nowhere at all");
    let selected = session.activate();
    println!("  selection happened? {selected}");

    Ok(())
}
