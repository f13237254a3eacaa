// crates/ugeo-core/src/common.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple aggregate statistics for the index.
///
/// Returned by [`LocationIndex::stats`](crate::LocationIndex::stats). The
/// counts are the sizes of the loaded tables, so `subcounties` and `parishes`
/// count composite keys rather than distinct names.
///
/// ```rust
/// use ugeo_core::DbStats;
///
/// let stats = DbStats { districts: 1, subcounties: 2, parishes: 3, villages: 4 };
/// assert!(stats.to_string().ends_with("Villages: 4"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub districts: usize,
    pub subcounties: usize,
    pub parishes: usize,
    pub villages: usize,
}

impl fmt::Display for DbStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Districts: {}", self.districts)?;
        writeln!(f, "  Subcounties: {}", self.subcounties)?;
        writeln!(f, "  Parishes: {}", self.parishes)?;
        write!(f, "  Villages: {}", self.villages)
    }
}
