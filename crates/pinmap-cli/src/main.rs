//! pinmap-cli — Command-line interface for pinmap-core
//!
//! This binary provides a simple way to inspect the bundled pin fixture from
//! your terminal. It supports printing basic statistics, listing countries,
//! searching pins by substring, running the full suggestion-selection flow
//! with a console camera, and resolving tile URLs from the layer registry.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ pinmap stats
//!
//! - List all countries
//!   $ pinmap countries
//!
//! - Search pins by city, country, or submitter substring
//!   $ pinmap search paris
//!   $ pinmap search alice
//!
//! - Select the first match and fly the camera to it
//!   $ pinmap goto zuri
//!
//! - Resolve a tile URL (keyed layers read PINMAP_MAPTILER_KEY /
//!   PINMAP_THUNDERFOREST_KEY or the matching flags)
//!   $ pinmap tile-url street 3 4 2
//!   $ pinmap tile-url satellite 3 4 2 --maptiler-key=...
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the fixture bundled with the `pinmap-core`
//! crate. Use `--input <path>` to point to a custom `markers.json` (or
//! `.json.gz` when built with the `compact` feature).

mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use pinmap_core::layers::{source_by_name, LayerKeys};
use pinmap_core::{Atlas, CameraController, MapSession, StandardBackend};

/// Camera that narrates its moves to stdout.
struct ConsoleCamera;

impl CameraController for ConsoleCamera {
    fn fly_to(&mut self, geocode: [f64; 2], zoom: f64) {
        println!(
            "→ camera: fly to ({:.4}, {:.4}) at zoom {zoom}",
            geocode[0], geocode[1]
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let atlas = match &args.input {
        Some(path) => Atlas::<StandardBackend>::load_from_path(path)?,
        None => Atlas::<StandardBackend>::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = atlas.stats();
            println!("Fixture statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Pins: {}", stats.cities);
        }

        Commands::Countries => {
            for c in atlas.countries() {
                println!("{} ({} pins)", c.name(), c.cities().len());
            }
        }

        Commands::Search { query } => {
            let matches = atlas.filter_cities(&query);
            if matches.is_empty() {
                println!("No pins found matching: {query}");
            } else {
                for (city, country) in matches {
                    let [lat, lng] = city.geocode();
                    println!(
                        "{} — {}, by {} ({lat:.4}, {lng:.4})",
                        city.name(),
                        country.name(),
                        city.submitter()
                    );
                }
            }
        }

        Commands::Goto { query } => {
            let mut session = MapSession::new(atlas, ConsoleCamera);
            session.set_query(&query);
            if !session.activate() {
                eprintln!("No pins found matching: {query}");
                return Ok(());
            }
            println!("Selected: {}", session.query());
            println!("Recent visits:");
            for place in session.recent_visits() {
                println!("  {} — {} (by {})", place.name, place.country, place.submitter);
            }
        }

        Commands::TileUrl { layer, z, x, y } => {
            let source = source_by_name(&layer)
                .ok_or_else(|| anyhow::anyhow!("unknown layer: {layer}"))?;
            let keys = LayerKeys {
                maptiler: args.maptiler_key,
                thunderforest: args.thunderforest_key,
            };
            println!("{}", source.tile_url(&keys, z, x, y)?);
        }
    }

    Ok(())
}
