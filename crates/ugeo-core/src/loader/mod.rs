// crates/ugeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary snapshot vs dataset JSON).
//!
//! | File name            | Read as                                   |
//! |----------------------|-------------------------------------------|
//! | `*.bin`, `*.bin.gz`  | snapshot written by `save_as`             |
//! | anything else        | dataset JSON, gzip if it ends in `.gz`    |

use crate::error::Result;
#[cfg(not(feature = "json"))]
use crate::error::GeoError;
use crate::model::{DefaultBackend, LocationIndex};
use crate::traits::GeoBackend;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

mod binary;
mod cache;
pub mod common_io;
mod json;

#[cfg(feature = "json")]
pub use cache::CACHE_SUFFIX;

/// Environment variable naming the dataset used by [`LocationIndex::load`].
pub const DATA_ENV_VAR: &str = "UGEO_DATA";

// Single in-process instance so the dataset is only parsed once per process.
static INDEX_CACHE: OnceCell<LocationIndex<DefaultBackend>> = OnceCell::new();

impl<B: GeoBackend> LocationIndex<B> {
    /// **Smart Load:** binary snapshots are decoded directly; a JSON dataset
    /// is served from a fresh snapshot next to it when one exists, otherwise
    /// parsed and snapshotted for the next run.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_snapshot(path) {
            return Self::load_binary(path);
        }

        #[cfg(feature = "json")]
        {
            Self::load_via_cache(path)
        }

        #[cfg(not(feature = "json"))]
        {
            Err(GeoError::InvalidData(format!(
                "{} is a JSON dataset but the 'json' feature is disabled",
                path.display()
            )))
        }
    }
}

impl LocationIndex<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "locations.json.gz"
    }

    /// `$UGEO_DATA` if set, otherwise the bundled dataset location.
    pub fn default_dataset_path() -> PathBuf {
        std::env::var_os(DATA_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// The process-wide shared index.
    ///
    /// Loaded from [`default_dataset_path`](Self::default_dataset_path) on
    /// first use; later calls return the same instance. A failed load is not
    /// cached, so a later call retries.
    ///
    /// ```no_run
    /// use ugeo_core::DefaultIndex;
    ///
    /// let index = DefaultIndex::load().unwrap();
    /// println!("{} villages", index.stats().villages);
    /// ```
    pub fn load() -> Result<&'static Self> {
        INDEX_CACHE.get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()))
    }
}
