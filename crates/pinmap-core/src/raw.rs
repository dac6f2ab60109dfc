// crates/pinmap-core/src/raw.rs

use serde::Deserialize;

/// Raw pin structure as it comes from the fixture JSON.
///
/// Field names and casing (`User`, `avtar`, `img`, `geocode`) are part of the
/// external fixture contract and must not be changed here.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub name: String,
    #[serde(rename = "User")]
    pub user: String,
    /// `[latitude, longitude]`
    pub geocode: [f64; 2],
    #[serde(rename = "avtar")]
    pub avatar: String,
    #[serde(rename = "img", default)]
    pub photo: Option<String>,
}

/// Raw country structure from the fixture JSON.
///
/// NOTE: This type mirrors the external fixture file. We do *not* expose this
/// type from the public API; it exists only for the loader.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub country: String,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;
