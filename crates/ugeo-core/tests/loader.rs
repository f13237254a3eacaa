//! Loading the same dataset through every supported file format.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;
use ugeo_core::loader::{common_io::get_cache_path, CACHE_SUFFIX};
use ugeo_core::prelude::*;

fn fixture_json() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/uganda_sample.json");
    fs::read_to_string(path).expect("fixture should exist")
}

fn write_gzip(path: &Path, bytes: &[u8]) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap();
}

fn set_mtime(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

/// A few queries whose answers must not depend on how the index was loaded.
fn fingerprint(index: &DefaultIndex) -> (DbStats, Vec<String>, Option<String>, Vec<String>) {
    (
        index.stats(),
        index
            .subcounties_in_district("KAMPALA")
            .iter()
            .map(|s| s.to_string())
            .collect(),
        index.path("KATOOKE"),
        index
            .search("KAMPALA")
            .iter()
            .map(|l| l.village().to_owned())
            .collect(),
    )
}

#[test]
fn json_gzip_and_snapshot_agree() {
    let dir = TempDir::new().unwrap();
    let json = fixture_json();

    let plain = dir.path().join("locations.json");
    fs::write(&plain, &json).unwrap();
    let gz = dir.path().join("locations.json.gz");
    write_gzip(&gz, json.as_bytes());

    let from_str = DefaultIndex::from_json_str(&json).unwrap();
    let from_plain = DefaultIndex::load_json(&plain).unwrap();
    let from_gz = DefaultIndex::load_json(&gz).unwrap();

    let bin = dir.path().join("locations.bin");
    from_plain.save_as(&bin).unwrap();
    let from_bin = DefaultIndex::load_binary(&bin).unwrap();

    let bin_gz = dir.path().join("locations.bin.gz");
    from_plain.save_as(&bin_gz).unwrap();
    let from_bin_gz = DefaultIndex::load_from_path(&bin_gz).unwrap();

    let expected = fingerprint(&from_str);
    assert_eq!(expected.0.villages, 10);
    for index in [&from_plain, &from_gz, &from_bin, &from_bin_gz] {
        assert_eq!(fingerprint(index), expected);
    }
}

#[test]
fn snapshot_preserves_search_scan_order() {
    let dir = TempDir::new().unwrap();
    let index = DefaultIndex::from_json_str(&fixture_json()).unwrap();
    let bin = dir.path().join("locations.bin");
    index.save_as(&bin).unwrap();

    let reloaded = DefaultIndex::load_binary(&bin).unwrap();
    let before: Vec<_> = index.locations().map(|l| l.village()).collect();
    let after: Vec<_> = reloaded.locations().map(|l| l.village()).collect();
    assert_eq!(before, after);
}

#[test]
fn fresh_cache_is_reused_and_stale_cache_rebuilt() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("locations.json");
    fs::write(&source, fixture_json()).unwrap();
    let cache = get_cache_path(&source, CACHE_SUFFIX);

    // First load parses the JSON and writes the snapshot.
    let first = DefaultIndex::load_from_path(&source).unwrap();
    assert!(cache.exists());

    // Break the source but make it older than the snapshot: the snapshot wins.
    fs::write(&source, "{ not json").unwrap();
    set_mtime(&source, SystemTime::now() - Duration::from_secs(3600));
    let cached = DefaultIndex::load_from_path(&source).unwrap();
    assert_eq!(fingerprint(&cached), fingerprint(&first));

    // Newer source: the snapshot is stale and the broken JSON is parsed.
    set_mtime(&source, SystemTime::now() + Duration::from_secs(3600));
    let err = DefaultIndex::load_from_path(&source).unwrap_err();
    assert!(matches!(err, GeoError::Json(_)), "{err}");
}

#[test]
fn unreadable_cache_falls_back_to_source() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("locations.json");
    fs::write(&source, fixture_json()).unwrap();
    set_mtime(&source, SystemTime::now() - Duration::from_secs(3600));

    let cache = get_cache_path(&source, CACHE_SUFFIX);
    fs::write(&cache, b"garbage").unwrap();

    let index = DefaultIndex::load_from_path(&source).unwrap();
    assert_eq!(index.stats().villages, 10);
}

#[test]
fn missing_dataset_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = DefaultIndex::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, GeoError::NotFound(_)), "{err}");

    let err = DefaultIndex::load_binary(dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, GeoError::NotFound(_)), "{err}");
}

#[test]
fn truncated_snapshot_is_a_bincode_error() {
    let dir = TempDir::new().unwrap();
    let index = DefaultIndex::from_json_str(&fixture_json()).unwrap();
    let bin = dir.path().join("locations.bin");
    index.save_as(&bin).unwrap();

    let bytes = fs::read(&bin).unwrap();
    fs::write(&bin, &bytes[..bytes.len() / 2]).unwrap();
    let err = DefaultIndex::load_binary(&bin).unwrap_err();
    assert!(matches!(err, GeoError::Bincode(_)), "{err}");
}
