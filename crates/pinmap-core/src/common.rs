use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the fixture.
///
/// Returned by [`Atlas::stats`](crate::Atlas::stats); the counts reflect the
/// materialized in-memory fixture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixtureStats {
    pub countries: usize,
    pub cities: usize,
}
