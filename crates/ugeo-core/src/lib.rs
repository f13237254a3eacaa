// crates/ugeo-core/src/lib.rs

//! # ugeo-core
//!
//! In-memory lookup over Uganda's administrative geography:
//! districts → subcounties → parishes → villages.
//!
//! The dataset is produced elsewhere and handed over as four tables
//! (`districts`, `byVillage`, `byParish`, `bySubcounty`). This crate turns
//! them into an immutable [`LocationIndex`] and answers:
//!
//! - hierarchy queries: [`LocationIndex::subcounties_in_district`],
//!   [`LocationIndex::parishes_in_subcounty`],
//!   [`LocationIndex::villages_in_parish`], [`LocationIndex::parent`],
//!   [`LocationIndex::path`]
//! - village lookup: [`LocationIndex::location_by_village`]
//! - scored free-text search: [`LocationIndex::search`]
//!
//! All name arguments are case-insensitive. A missing unit is never an
//! error: lookups return `None` and listings return an empty slice.
//!
//! ```rust
//! use ugeo_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let index = DefaultIndex::from_json_str(r#"{
//!     "districts": ["KAMPALA"],
//!     "byVillage": {
//!         "KAMPALA HILL": {"village": "KAMPALA HILL", "parish": "OLD KAMPALA",
//!                          "subcounty": "CENTRAL DIVISION", "district": "KAMPALA"}
//!     },
//!     "byParish": {"KAMPALA||CENTRAL DIVISION||OLD KAMPALA": ["KAMPALA HILL"]},
//!     "bySubcounty": {"KAMPALA||CENTRAL DIVISION": [{"parish": "OLD KAMPALA"}]}
//! }"#)?;
//!
//! assert_eq!(index.subcounties_in_district("kampala"), ["CENTRAL DIVISION"]);
//! assert_eq!(
//!     index.path("Kampala Hill").as_deref(),
//!     Some("KAMPALA → CENTRAL DIVISION → OLD KAMPALA → KAMPALA HILL")
//! );
//! assert_eq!(index.search("hill")[0].village(), "KAMPALA HILL");
//! # Ok(()) }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
// Shared Raw Input (what the dataset build step produces)
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{GeoError, Result};
pub use crate::model::verify::Inconsistency;
pub use crate::model::{
    DefaultBackend, DefaultIndex, Location, LocationIndex, ParishEntry, Parent, StandardBackend,
};
pub use crate::search::{SearchHit, SearchOptions, DEFAULT_SEARCH_LIMIT};
pub use crate::traits::GeoBackend;
