//! ugeo-cli
//! ========
//!
//! Command-line interface for the `ugeo-core` village lookup index.
//!
//! This crate primarily provides a binary (`ugeo`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install ugeo-cli
//! ugeo --input locations.json.gz stats
//! ugeo subcounties wakiso
//! ugeo path katooke
//! ugeo search kampala --limit 10 --scores
//! ```
//!
//! For programmatic access to the index, use the [`ugeo-core`] crate
//! directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
