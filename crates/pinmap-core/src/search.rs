// crates/pinmap-core/src/search.rs

//! Type-ahead filtering over the fixture.
//!
//! The suggestion list is a pure projection of `(query, atlas)` — recomputed
//! on every query change, never patched incrementally.

use crate::model::{Atlas, City, Country};
use crate::text::fold_key;
use crate::traits::MapBackend;
use serde::Serialize;

/// Returns true when `city` (or its parent `country`) matches the query.
///
/// The match is a substring test on the folded city name, submitter name, or
/// country name. An empty (or whitespace-only) query matches everything;
/// this is the predicate that gates marker visibility, where an empty search
/// box means "show all pins".
pub fn matches_query<B: MapBackend>(city: &City<B>, country: &Country<B>, query: &str) -> bool {
    let q = fold_key(query.trim());
    if q.is_empty() {
        return true;
    }
    fold_key(city.name()).contains(&q)
        || fold_key(city.submitter()).contains(&q)
        || fold_key(country.name()).contains(&q)
}

/// A flattened, owned projection of a matching pin for the dropdown.
///
/// Recomputed per keystroke and discarded after selection; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub country: String,
    pub submitter: String,
    pub avatar: String,
    pub photo: Option<String>,
    /// `[latitude, longitude]`
    pub geocode: [f64; 2],
}

impl Suggestion {
    /// Flatten a `(city, country)` pair into an owned suggestion.
    pub fn project<B: MapBackend>(city: &City<B>, country: &Country<B>) -> Self {
        Suggestion {
            name: city.name().to_string(),
            country: country.name().to_string(),
            submitter: city.submitter().to_string(),
            avatar: city.avatar().to_string(),
            photo: city.photo().map(str::to_string),
            geocode: city.geocode(),
        }
    }
}

impl<B: MapBackend> Atlas<B> {
    /// Find all pins whose city name, submitter name, or country name
    /// *loosely matches* the given substring.
    ///
    /// This search is:
    /// - **case-insensitive**
    /// - **accent/diacritic-insensitive** (via [`fold_key`])
    /// - based on substring matching (not prefix)
    /// - returned in source order (country index, then city index) — it is
    ///   *not* relevance-ranked
    ///
    /// An empty or whitespace-only query returns no matches: the dropdown
    /// shows nothing until the user types. Marker visibility uses
    /// [`matches_query`] instead, where an empty query means "show all".
    ///
    /// # Examples
    ///
    /// ```
    /// use pinmap_core::{Atlas, model::DefaultBackend};
    ///
    /// let atlas = Atlas::<DefaultBackend>::from_json_str(r#"[
    ///   {"country":"France","cities":[
    ///     {"name":"Paris","User":"alice","geocode":[48.8566,2.3522],
    ///      "avtar":"https://example.com/alice.png"}]},
    ///   {"country":"Switzerland","cities":[
    ///     {"name":"Zürich","User":"bruno","geocode":[47.3769,8.5417],
    ///      "avtar":"https://example.com/bruno.png"}]}
    /// ]"#)?;
    ///
    /// // City-name match, accent-insensitive.
    /// let hits = atlas.filter_cities("zuri");
    /// assert!(hits.iter().any(|(city, _)| city.name() == "Zürich"));
    ///
    /// // Submitter match.
    /// let hits = atlas.filter_cities("alice");
    /// assert_eq!(hits.len(), 1);
    ///
    /// // Country match pulls in every pin of that country.
    /// let hits = atlas.filter_cities("switz");
    /// assert_eq!(hits.len(), 1);
    /// # Ok::<(), pinmap_core::AtlasError>(())
    /// ```
    pub fn filter_cities(&self, query: &str) -> Vec<(&City<B>, &Country<B>)> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for country in &self.countries {
            let country_hit = fold_key(country.name()).contains(&q);
            for city in &country.cities {
                if country_hit
                    || fold_key(city.name()).contains(&q)
                    || fold_key(city.submitter()).contains(&q)
                {
                    out.push((city, country));
                }
            }
        }
        out
    }

    /// [`filter_cities`](Atlas::filter_cities) projected into owned
    /// [`Suggestion`] values, ready for the dropdown.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.filter_cities(query)
            .into_iter()
            .map(|(city, country)| Suggestion::project(city, country))
            .collect()
    }

    /// All pins visible for the current search text.
    ///
    /// Same predicate as the suggestion list, except that an empty query
    /// matches every pin — an empty search box shows the whole map.
    pub fn visible_markers(&self, query: &str) -> Vec<(&City<B>, &Country<B>)> {
        self.iter_cities()
            .filter(|(city, country)| matches_query(city, country, query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultAtlas, DefaultBackend};

    fn fixture() -> DefaultAtlas {
        Atlas::<DefaultBackend>::from_json_str(
            r#"[
              {"country":"France","cities":[
                {"name":"Paris","User":"alice","geocode":[48.8566,2.3522],
                 "avtar":"https://example.com/alice.png",
                 "img":"https://example.com/paris.jpg"},
                {"name":"Lyon","User":"marta","geocode":[45.7640,4.8357],
                 "avtar":"https://example.com/marta.png"}]},
              {"country":"Japan","cities":[
                {"name":"Tokyo","User":"kenji","geocode":[35.6762,139.6503],
                 "avtar":"https://example.com/kenji.png"}]}
            ]"#,
        )
        .expect("valid fixture")
    }

    #[test]
    fn matches_city_submitter_and_country() {
        let atlas = fixture();
        assert_eq!(atlas.filter_cities("par").len(), 1);
        assert_eq!(atlas.filter_cities("kenji").len(), 1);
        // Country match pulls in every city of the country.
        assert_eq!(atlas.filter_cities("france").len(), 2);
    }

    #[test]
    fn match_is_case_insensitive() {
        let atlas = fixture();
        assert_eq!(atlas.filter_cities("PARIS").len(), 1);
        assert_eq!(atlas.filter_cities("pArIs").len(), 1);
    }

    #[test]
    fn results_keep_source_order() {
        let atlas = fixture();
        // "a" hits Paris (alice), Lyon (marta), Tokyo (Japan) in source order.
        let names: Vec<&str> = atlas
            .filter_cities("a")
            .into_iter()
            .map(|(city, _)| city.name())
            .collect();
        assert_eq!(names, ["Paris", "Lyon", "Tokyo"]);
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        let atlas = fixture();
        assert!(atlas.filter_cities("").is_empty());
        assert!(atlas.filter_cities("   ").is_empty());
        assert!(atlas.suggest("").is_empty());
    }

    #[test]
    fn empty_query_shows_all_markers() {
        let atlas = fixture();
        assert_eq!(atlas.visible_markers("").len(), 3);
        assert_eq!(atlas.visible_markers("tok").len(), 1);
        assert!(atlas.visible_markers("nowhere").is_empty());
    }

    #[test]
    fn suggestion_projection_carries_all_fields() {
        let atlas = fixture();
        let s = &atlas.suggest("par")[0];
        assert_eq!(s.name, "Paris");
        assert_eq!(s.country, "France");
        assert_eq!(s.submitter, "alice");
        assert_eq!(s.geocode, [48.8566, 2.3522]);
        assert_eq!(s.photo.as_deref(), Some("https://example.com/paris.jpg"));
    }
}
