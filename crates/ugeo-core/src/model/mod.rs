// crates/ugeo-core/src/model/mod.rs
pub mod convert;
pub mod hierarchy;
pub mod verify;

use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default backend: plain `String`.
///
/// This backend is used by the convenient aliases [`StandardBackend`] and
/// [`DefaultIndex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }
}

/// A village together with the administrative units it belongs to.
///
/// All names are stored in their canonical upper-case form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location<B: GeoBackend> {
    pub village: B::Str,
    pub parish: B::Str,
    pub subcounty: B::Str,
    pub constituency: Option<B::Str>,
    pub district: B::Str,
}

/// A parish listed under a subcounty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParishEntry<B: GeoBackend> {
    pub parish: B::Str,
}

/// The enclosing units of a village, with the village itself left out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Parent<'a> {
    pub parish: &'a str,
    pub subcounty: &'a str,
    pub district: &'a str,
}

/// Read-only lookup structure over one country's districts, subcounties,
/// parishes and villages.
///
/// Built once (see [`convert::from_raw`] and the loaders) and never mutated.
/// Every query is a pure function of the tables and its arguments, so a
/// shared `&LocationIndex` can be read from any number of threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LocationIndex<B: GeoBackend> {
    /// District names in dataset order.
    pub(crate) districts: Vec<B::Str>,
    /// One record per distinct village, in scan order.
    pub(crate) locations: Vec<Location<B>>,
    /// Normalized village name → position in `locations`.
    pub(crate) by_village: HashMap<String, usize>,
    /// `DISTRICT||SUBCOUNTY||PARISH` → village names.
    pub(crate) by_parish: HashMap<String, Vec<B::Str>>,
    /// `DISTRICT||SUBCOUNTY` → parish entries in dataset order.
    pub(crate) by_subcounty: HashMap<String, Vec<ParishEntry<B>>>,
    /// District → sorted, deduplicated subcounty names.
    /// Derived from the `by_subcounty` keys at load time.
    pub(crate) subcounties_by_district: HashMap<String, Vec<B::Str>>,
}

impl<B: GeoBackend> Location<B> {
    pub fn village(&self) -> &str {
        self.village.as_ref()
    }

    pub fn parish(&self) -> &str {
        self.parish.as_ref()
    }

    pub fn subcounty(&self) -> &str {
        self.subcounty.as_ref()
    }

    /// Parliamentary constituency, when the dataset provides one.
    pub fn constituency(&self) -> Option<&str> {
        self.constituency.as_ref().map(|s| s.as_ref())
    }

    pub fn district(&self) -> &str {
        self.district.as_ref()
    }

    pub fn parent(&self) -> Parent<'_> {
        Parent {
            parish: self.parish(),
            subcounty: self.subcounty(),
            district: self.district(),
        }
    }

    /// `"{district} → {subcounty} → {parish} → {village}"`.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl<B: GeoBackend> fmt::Display for Location<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} → {} → {}",
            self.district(),
            self.subcounty(),
            self.parish(),
            self.village()
        )
    }
}

impl<B: GeoBackend> ParishEntry<B> {
    pub fn parish(&self) -> &str {
        self.parish.as_ref()
    }
}

/// Convenient alias for the default backend.
pub type DefaultIndex = LocationIndex<DefaultBackend>;
/// Alias for the backend storing names as plain `String`s.
pub type StandardBackend = DefaultBackend;
