//! Basic usage example for pinmap-rs
//!
//! This example demonstrates how to:
//! - Load the bundled marker fixture
//! - Inspect countries and pins
//! - Filter pins by city, country, or submitter
//! - Resolve tile URLs from the layer registry

use pinmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== PinMap Basic Usage Example ===\n");

    // Load the fixture
    println!("Loading marker fixture...");
    let atlas = Atlas::<StandardBackend>::load()?;
    println!("✓ Fixture loaded successfully\n");

    // Example 1: Fixture statistics
    println!("--- Example 1: Fixture statistics ---");
    let stats = atlas.stats();
    println!("Total countries: {}", stats.countries);
    println!("Total pins: {}", stats.cities);
    println!();

    // Example 2: List countries with their pins
    println!("--- Example 2: Countries and pins ---");
    for country in atlas.countries() {
        println!("{}:", country.name());
        for city in country.cities() {
            let [lat, lng] = city.geocode();
            println!(
                "  {} — by {} ({lat:.4}, {lng:.4})",
                city.name(),
                city.submitter()
            );
        }
    }
    println!();

    // Example 3: Substring search across the three fields
    println!("--- Example 3: Search by substring ---");
    for query in ["par", "kenji", "switz"] {
        let hits = atlas.filter_cities(query);
        println!("'{query}' → {} hit(s)", hits.len());
        for (city, country) in hits {
            println!("  {} — {}", city.name(), country.name());
        }
    }
    println!();

    // Example 4: Accent-insensitive matching
    println!("--- Example 4: Folded matching ---");
    let hits = atlas.filter_cities("sao paulo");
    for (city, country) in &hits {
        println!("'sao paulo' matched {} in {}", city.name(), country.name());
    }
    println!();

    // Example 5: Marker visibility gating
    println!("--- Example 5: Marker visibility ---");
    println!("Empty query shows {} markers", atlas.visible_markers("").len());
    println!(
        "Query 'france' shows {} markers",
        atlas.visible_markers("france").len()
    );
    println!();

    // Example 6: Tile URLs from the layer registry
    println!("--- Example 6: Tile URLs ---");
    let keys = LayerKeys::default();
    let street = BaseLayer::Street.source();
    println!("street tile: {}", street.tile_url(&keys, 3, 4, 2)?);
    match BaseLayer::Satellite.source().tile_url(&keys, 3, 4, 2) {
        Ok(url) => println!("satellite tile: {url}"),
        Err(e) => println!("satellite tile needs configuration: {e}"),
    }

    Ok(())
}
