//! Workspace facade over [`ugeo_core`], used by the demos.
pub use ugeo_core::*;
