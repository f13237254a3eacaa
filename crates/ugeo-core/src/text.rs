// crates/ugeo-core/src/text.rs

//! Name normalization and composite keys.
//!
//! Every name is compared in upper case. Sibling tables are keyed by joining
//! the hierarchy levels with [`KEY_SEPARATOR`]:
//!
//! ```rust
//! use ugeo_core::text::composite_key;
//!
//! assert_eq!(composite_key(&["Wakiso", "Nangabo"]), "WAKISO||NANGABO");
//! ```
//!
//! The separator is not escaped. A district, subcounty or parish whose name
//! contains `||` produces a key that cannot be split back into its parts;
//! [`LocationIndex::verify`](crate::LocationIndex::verify) reports such names.

/// Literal separator between hierarchy levels in composite keys.
pub const KEY_SEPARATOR: &str = "||";

/// Canonical (upper-case) form of a name.
#[inline]
pub fn normalize(s: &str) -> String {
    s.to_uppercase()
}

/// Canonical form of a free-text query: trimmed, then upper-cased.
#[inline]
pub fn normalize_query(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Joins the normalized `parts` with [`KEY_SEPARATOR`].
pub fn composite_key(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| normalize(p))
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// Splits a composite key into its hierarchy segments.
pub fn split_key(key: &str) -> std::str::Split<'_, &'static str> {
    key.split(KEY_SEPARATOR)
}

/// True if `name` contains the key separator and would make keys ambiguous.
#[inline]
pub fn is_ambiguous(name: &str) -> bool {
    name.contains(KEY_SEPARATOR)
}
