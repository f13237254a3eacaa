// crates/ugeo-core/src/loader/cache.rs
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::model::LocationIndex;
use crate::traits::GeoBackend;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "idx.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "idx.bin.gz";

impl<B: GeoBackend> LocationIndex<B> {
    /// Checks for a fresh snapshot next to `path`, otherwise parses the JSON
    /// and writes the snapshot for next time.
    pub(super) fn load_via_cache(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1. Check Cache
        if is_cache_fresh(path, &cache_path) {
            match Self::load_binary(&cache_path) {
                Ok(index) => {
                    debug!(cache = %cache_path.display(), "using cached snapshot");
                    return Ok(index);
                }
                Err(e) => warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable snapshot"),
            }
        }

        // 2. Build
        let index = Self::load_json(path)?;

        // 3. Cache (best-effort)
        match index.save_as(&cache_path) {
            Ok(()) => info!(cache = %cache_path.display(), "wrote snapshot"),
            Err(e) => warn!(cache = %cache_path.display(), error = %e, "could not write snapshot"),
        }

        Ok(index)
    }
}

/// A snapshot is fresh when it exists and is not older than its source.
fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    if let Ok(source_time) = fs::metadata(source_path).and_then(|m| m.modified()) {
        if source_time > cache_time {
            return false;
        }
    }
    true
}
