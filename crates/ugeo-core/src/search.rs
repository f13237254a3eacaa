// crates/ugeo-core/src/search.rs

//! Free-text search over every village record.

use crate::model::{Location, LocationIndex};
use crate::text::normalize_query;
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Number of results returned when the caller does not choose a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// The scan stops once `SCAN_FACTOR × limit` matches have been collected.
pub const SCAN_FACTOR: usize = 3;

const EXACT_VILLAGE: u32 = 10;
const EXACT_DISTRICT: u32 = 8;
const EXACT_SUBCOUNTY: u32 = 6;
const VILLAGE_PREFIX: u32 = 4;

/// Tunables for [`LocationIndex::search_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of results to return
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn scan_cap(&self) -> usize {
        self.limit.saturating_mul(SCAN_FACTOR)
    }
}

/// A matching village and its relevance score.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct SearchHit<'a, B: GeoBackend> {
    pub score: u32,
    pub location: &'a Location<B>,
}

impl<B: GeoBackend> LocationIndex<B> {
    /// Search with the default limit of [`DEFAULT_SEARCH_LIMIT`] results.
    pub fn search(&self, query: &str) -> Vec<&Location<B>> {
        self.search_with(query, &SearchOptions::default())
    }

    /// Search all villages; see [`LocationIndex::search_hits`] for the rules.
    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<&Location<B>> {
        self.search_hits(query, options)
            .into_iter()
            .map(|hit| hit.location)
            .collect()
    }

    /// Scored search over all villages.
    ///
    /// The query is trimmed and upper-cased. A village matches when the
    /// query occurs in its village, district, subcounty or parish name (an
    /// empty query therefore matches everything).
    ///
    /// Villages are visited in dataset order and the scan stops as soon as
    /// `SCAN_FACTOR × limit` matches are collected, so a better match further
    /// down the dataset is never seen once the window is full.
    ///
    /// # Scoring (additive)
    ///
    /// - village name equals the query: **10**
    /// - district equals the query: **8**
    /// - subcounty equals the query: **6**
    /// - village name starts with the query: **4**
    ///
    /// Hits are sorted by descending score with ties kept in scan order,
    /// then cut to `limit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ugeo_core::{DefaultIndex, SearchOptions};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let index = DefaultIndex::from_json_str(r#"{
    ///     "districts": ["WAKISO"],
    ///     "byVillage": {
    ///         "KATOOKE":  {"village": "KATOOKE", "parish": "WAMPEEWO", "subcounty": "NANGABO", "district": "WAKISO"},
    ///         "WAMPEEWO": {"village": "WAMPEEWO", "parish": "WAMPEEWO", "subcounty": "NANGABO", "district": "WAKISO"}
    ///     },
    ///     "byParish": {"WAKISO||NANGABO||WAMPEEWO": ["KATOOKE", "WAMPEEWO"]},
    ///     "bySubcounty": {"WAKISO||NANGABO": [{"parish": "WAMPEEWO"}]}
    /// }"#)?;
    ///
    /// let hits = index.search_hits("wampeewo", &SearchOptions::new().limit(10));
    /// assert_eq!(hits[0].location.village(), "WAMPEEWO");
    /// assert_eq!(hits[0].score, 14);
    /// assert_eq!(hits[1].location.village(), "KATOOKE");
    /// assert_eq!(hits[1].score, 0);
    /// # Ok(()) }
    /// ```
    pub fn search_hits(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_, B>> {
        let q = normalize_query(query);
        let cap = options.scan_cap();

        let mut hits: Vec<SearchHit<'_, B>> = Vec::new();
        for location in &self.locations {
            if !matches(location, &q) {
                continue;
            }
            hits.push(SearchHit {
                score: relevance(location, &q),
                location,
            });
            if hits.len() >= cap {
                break;
            }
        }

        // Stable: equal scores keep scan order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(options.limit);
        hits
    }
}

fn matches<B: GeoBackend>(location: &Location<B>, q: &str) -> bool {
    let village = location.village();
    village.contains(q)
        || location.district().contains(q)
        || location.subcounty().contains(q)
        || location.parish().contains(q)
        || village.starts_with(q)
        || location.district() == q
}

fn relevance<B: GeoBackend>(location: &Location<B>, q: &str) -> u32 {
    let mut score = 0;
    if location.village() == q {
        score += EXACT_VILLAGE;
    }
    if location.district() == q {
        score += EXACT_DISTRICT;
    }
    if location.subcounty() == q {
        score += EXACT_SUBCOUNTY;
    }
    if location.village().starts_with(q) {
        score += VILLAGE_PREFIX;
    }
    score
}
