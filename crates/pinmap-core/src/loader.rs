// crates/pinmap-core/src/loader.rs

//! # Fixture Loader
//!
//! Handles the physical layer (I/O, optional decompression) and delegates
//! payload parsing to serde. The bundled fixture is loaded once per process
//! and cached.

use crate::error::{AtlasError, Result};
use crate::model::{build_atlas, DefaultBackend};
use crate::raw::CountriesRaw;
use crate::Atlas;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

static ATLAS_CACHE: OnceCell<Atlas<DefaultBackend>> = OnceCell::new();

impl Atlas<DefaultBackend> {
    /// Directory holding the bundled fixture.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// File name of the bundled fixture.
    pub fn default_fixture_filename() -> &'static str {
        "markers.json"
    }

    /// Load the bundled fixture, caching the parsed atlas for the process
    /// lifetime. Subsequent calls return a clone of the cached value.
    pub fn load() -> Result<Self> {
        ATLAS_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_fixture_filename();
                Self::load_from_path(dir.join(file))
            })
            .cloned()
    }

    /// Load a fixture from an explicit path.
    ///
    /// With the `compact` feature enabled, a path ending in `.gz` is
    /// transparently gunzipped before parsing.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = open_stream(path.as_ref())?;
        let raw: CountriesRaw = serde_json::from_reader(&mut reader)?;
        Ok(build_atlas(raw))
    }

    /// Parse a fixture from an in-memory JSON string.
    ///
    /// Used by tests and by the wasm bindings, which embed the fixture in
    /// the binary.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(s)?;
        Ok(build_atlas(raw))
    }
}

/// Opens a fixture file, buffers it, and wraps it in a gzip decoder when the
/// extension asks for one. Returns a generic reader so callers don't care
/// about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AtlasError::NotFound(format!("fixture not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(AtlasError::Compressed(path.display().to_string()));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fixture_loads_and_caches() {
        let a = Atlas::<DefaultBackend>::load().expect("bundled fixture");
        let b = Atlas::<DefaultBackend>::load().expect("cached fixture");
        assert!(a.country_count() > 0);
        assert_eq!(a.country_count(), b.country_count());
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = Atlas::<DefaultBackend>::load_from_path("/no/such/markers.json").unwrap_err();
        assert!(matches!(err, AtlasError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Atlas::<DefaultBackend>::from_json_str("[{\"country\": 42}]").unwrap_err();
        assert!(matches!(err, AtlasError::Json(_)));
    }
}
