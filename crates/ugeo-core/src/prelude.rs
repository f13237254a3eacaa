//! ugeo-rs prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use super::common::DbStats;
pub use super::error::{GeoError, Result};
pub use super::model::verify::Inconsistency;
pub use super::model::{
    DefaultBackend, DefaultIndex, Location, LocationIndex, Parent, StandardBackend,
};
pub use super::search::{SearchHit, SearchOptions};
pub use super::text::{composite_key, normalize, KEY_SEPARATOR};
pub use super::traits::GeoBackend;
