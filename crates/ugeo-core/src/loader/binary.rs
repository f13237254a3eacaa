// crates/ugeo-core/src/loader/binary.rs

//! Bincode snapshots of a built index.

use super::common_io;
use crate::error::{GeoError, Result};
use crate::model::LocationIndex;
use crate::traits::GeoBackend;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound on a decoded snapshot, to refuse corrupt or hostile input.
const MAX_SNAPSHOT_BYTES: u64 = 256 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_SNAPSHOT_BYTES)
        .allow_trailing_bytes()
}

impl<B: GeoBackend> LocationIndex<B> {
    /// Reconstructs the index from the bytes of a snapshot written by
    /// [`LocationIndex::save_as`] (after any gzip layer has been removed).
    ///
    /// A snapshot that decodes but whose village table points outside the
    /// location list is rejected with [`GeoError::InvalidData`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let index: Self = snapshot_options().deserialize(data)?;
        index.check_slots()?;
        Ok(index)
    }

    fn check_slots(&self) -> Result<()> {
        let len = self.locations.len();
        match self.by_village.iter().find(|&(_, &slot)| slot >= len) {
            Some((name, slot)) => Err(GeoError::InvalidData(format!(
                "snapshot maps village {name} to slot {slot} but holds {len} locations"
            ))),
            None => Ok(()),
        }
    }

    /// Load a `.bin` (or, with `compact`, `.bin.gz`) snapshot.
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut stream = common_io::open_stream(path)?;

        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        debug!(path = %path.display(), bytes = data.len(), "decoding snapshot");

        Self::from_bytes(&data)
    }

    /// Write a snapshot; gzip-compressed when `path` ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self)
    }
}

fn write_snapshot<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = if common_io::is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            Box::new(GzEncoder::new(writer, Compression::default()))
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} requests gzip but the 'compact' feature is disabled",
                path.display()
            )));
        }
    } else {
        Box::new(writer)
    };

    snapshot_options()
        .serialize_into(&mut encoder, value)
        .map_err(GeoError::Bincode)?;
    encoder.flush()?;
    Ok(())
}
