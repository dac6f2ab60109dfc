// crates/pinmap-core/src/model.rs

use crate::common::FixtureStats;
use crate::raw::CountriesRaw;
use crate::traits::{MapBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` + `f64`.
///
/// This backend is used by the convenient aliases [`StandardBackend`] and
/// [`DefaultAtlas`]. It provides the best ergonomics and is suitable for
/// most applications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl MapBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// A user-submitted pin inside a [`Country`].
///
/// This is an owned data node. Access string data via the accessor methods,
/// which return plain `&str` views regardless of backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City<B: MapBackend> {
    pub name: B::Str,
    pub submitter: B::Str,
    pub lat: B::Float,
    pub lng: B::Float,
    pub avatar: B::Str,
    pub photo: Option<B::Str>,
}

/// A country entry grouping the pins submitted for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: MapBackend> {
    pub name: B::Str,
    pub cities: Vec<City<B>>,
}

/// Top-level fixture structure.
///
/// Holds the list of countries and provides the search helpers. Constructed
/// by the loader module from the bundled JSON fixture; immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atlas<B: MapBackend> {
    pub countries: Vec<Country<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultAtlas = Atlas<DefaultBackend>;
/// Convenient alias used in examples.
pub type StandardBackend = DefaultBackend;

/// Convert raw fixture data into an [`Atlas`] using the given backend.
pub fn build_atlas<B: MapBackend>(raw: CountriesRaw) -> Atlas<B> {
    let countries = raw
        .into_iter()
        .map(|c| {
            let cities = c
                .cities
                .into_iter()
                .map(|city| City::<B> {
                    name: B::str_from(&city.name),
                    submitter: B::str_from(&city.user),
                    lat: B::float_from(city.geocode[0]),
                    lng: B::float_from(city.geocode[1]),
                    avatar: B::str_from(&city.avatar),
                    photo: city.photo.as_deref().map(B::str_from),
                })
                .collect();

            Country::<B> {
                name: B::str_from(&c.country),
                cities,
            }
        })
        .collect();

    Atlas { countries }
}

impl<B: MapBackend> Atlas<B> {
    /// All countries in the fixture.
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// Total number of countries in the fixture.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Aggregate statistics for the fixture.
    pub fn stats(&self) -> FixtureStats {
        FixtureStats {
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
        }
    }

    /// Iterate over all pins together with their country, in source order.
    pub fn iter_cities(&self) -> impl Iterator<Item = (&City<B>, &Country<B>)> {
        self.countries
            .iter()
            .flat_map(|country| country.cities.iter().map(move |city| (city, country)))
    }

    /// Find a country by name, accent- and case-insensitive.
    pub fn find_country(&self, name: &str) -> Option<&Country<B>> {
        self.countries.iter().find(|c| c.is_named(name))
    }
}

impl<B: MapBackend> Country<B> {
    /// Country display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Read-only slice of pins belonging to this country.
    pub fn cities(&self) -> &[City<B>] {
        &self.cities
    }
}

impl<B: MapBackend> City<B> {
    /// Pin display name (the city the pin was dropped on).
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Name of the user who submitted the pin.
    pub fn submitter(&self) -> &str {
        self.submitter.as_ref()
    }

    /// `[latitude, longitude]` of the pin.
    pub fn geocode(&self) -> [f64; 2] {
        [B::float_to_f64(self.lat), B::float_to_f64(self.lng)]
    }

    /// Avatar image reference for the submitter.
    pub fn avatar(&self) -> &str {
        self.avatar.as_ref()
    }

    /// Optional photo reference shown in the pin popup.
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_ref().map(|s| s.as_ref())
    }
}

impl<B: MapBackend> NameMatch for Country<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: MapBackend> NameMatch for City<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
