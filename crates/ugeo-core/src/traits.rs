// crates/ugeo-core/src/traits.rs
use serde::Deserialize;

/// Storage backend for the strings held by the index.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example to use a more compact string type) without
/// changing the public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated string type can be serialized/deserialized so the index can be
/// snapshotted via bincode.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + PartialEq
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
}
