// crates/ugeo-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`. Returns a generic reader so the caller doesn't care about
/// the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => GeoError::Io(e),
    })?;

    let reader = BufReader::new(file);
    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `data/locations.json.gz` → `data/locations.json.gz.<suffix>`
pub fn get_cache_path(source_path: &Path, suffix: &str) -> PathBuf {
    let filename = source_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source_path.with_file_name(format!("{filename}.{suffix}"))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// True for binary snapshots: `*.bin` or `*.bin.gz`.
pub fn is_snapshot(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy())
        .unwrap_or_default();
    name.ends_with(".bin") || name.ends_with(".bin.gz")
}
