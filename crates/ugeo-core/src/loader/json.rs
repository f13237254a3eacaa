// crates/ugeo-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::model::LocationIndex;
use crate::raw::DatasetRaw;
use crate::traits::GeoBackend;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

impl<B: GeoBackend> LocationIndex<B> {
    /// Build the index from the dataset JSON held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Build the index from a reader yielding the dataset JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_reader(BufReader::new(reader))?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a `.json` (or, with `compact`, `.json.gz`) dataset file.
    ///
    /// No snapshot is read or written; see
    /// [`LocationIndex::load_from_path`] for the cached variant.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "parsing dataset JSON");
        let reader = common_io::open_stream(path)?;
        Self::from_json_reader(reader)
    }
}
