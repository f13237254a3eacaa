// crates/ugeo-core/src/model/verify.rs

//! Opt-in consistency report over the loaded tables.
//!
//! Queries never check that the tables agree with each other; the dataset
//! build step owns that. `verify` exists for tooling (the CLI's `verify`
//! command, tests against a freshly built dataset).

use super::LocationIndex;
use crate::text::{composite_key, is_ambiguous, split_key};
use crate::traits::GeoBackend;
use serde::Serialize;
use std::fmt;

/// A disagreement between the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inconsistency {
    /// A parish lists a village that has no record.
    MissingVillage { parish_key: String, village: String },
    /// A parish lists a village whose record points at another parish.
    MisplacedVillage {
        parish_key: String,
        village: String,
        recorded_key: String,
    },
    /// A subcounty lists a parish that has no village list.
    MissingParish { subcounty_key: String, parish: String },
    /// A subcounty key names a district missing from the district list.
    UnknownDistrict { subcounty_key: String, district: String },
    /// A name contains the key separator, so its keys are ambiguous.
    AmbiguousName { name: String },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::MissingVillage { parish_key, village } => {
                write!(f, "{parish_key}: village {village} has no record")
            }
            Inconsistency::MisplacedVillage {
                parish_key,
                village,
                recorded_key,
            } => write!(f, "{parish_key}: village {village} is recorded under {recorded_key}"),
            Inconsistency::MissingParish {
                subcounty_key,
                parish,
            } => write!(f, "{subcounty_key}: parish {parish} has no villages"),
            Inconsistency::UnknownDistrict {
                subcounty_key,
                district,
            } => write!(f, "{subcounty_key}: district {district} is not listed"),
            Inconsistency::AmbiguousName { name } => {
                write!(f, "name {name:?} contains the key separator")
            }
        }
    }
}

impl<B: GeoBackend> LocationIndex<B> {
    /// Cross-check the tables and list every inconsistency found.
    ///
    /// The report is ordered by table (parishes, subcounties, names) and by
    /// key within a table. An empty report means the tables agree.
    pub fn verify(&self) -> Vec<Inconsistency> {
        let mut out = Vec::new();

        // 1. Every village listed in a parish exists and points back to it.
        let mut parish_keys: Vec<&String> = self.by_parish.keys().collect();
        parish_keys.sort();
        for key in parish_keys {
            for village in &self.by_parish[key] {
                let village = village.as_ref();
                match self.location_by_village(village) {
                    None => out.push(Inconsistency::MissingVillage {
                        parish_key: key.clone(),
                        village: village.to_owned(),
                    }),
                    Some(loc) => {
                        let recorded = composite_key(&[loc.district(), loc.subcounty(), loc.parish()]);
                        if &recorded != key {
                            out.push(Inconsistency::MisplacedVillage {
                                parish_key: key.clone(),
                                village: village.to_owned(),
                                recorded_key: recorded,
                            });
                        }
                    }
                }
            }
        }

        // 2. Subcounty keys name listed districts and known parishes.
        let mut subcounty_keys: Vec<&String> = self.by_subcounty.keys().collect();
        subcounty_keys.sort();
        for key in subcounty_keys {
            if let Some(district) = split_key(key).next() {
                if !self.districts.iter().any(|d| d.as_ref() == district) {
                    out.push(Inconsistency::UnknownDistrict {
                        subcounty_key: key.clone(),
                        district: district.to_owned(),
                    });
                }
            }
            for entry in &self.by_subcounty[key] {
                let parish_key = format!("{key}{}{}", crate::text::KEY_SEPARATOR, entry.parish());
                if !self.by_parish.contains_key(&parish_key) {
                    out.push(Inconsistency::MissingParish {
                        subcounty_key: key.clone(),
                        parish: entry.parish().to_owned(),
                    });
                }
            }
        }

        // 3. Names that break key construction.
        let mut ambiguous: Vec<&str> = self
            .districts
            .iter()
            .map(|d| d.as_ref())
            .chain(
                self.locations
                    .iter()
                    .flat_map(|l| [l.district(), l.subcounty(), l.parish()]),
            )
            .filter(|name| is_ambiguous(name))
            .collect();
        ambiguous.sort_unstable();
        ambiguous.dedup();
        out.extend(ambiguous.into_iter().map(|name| Inconsistency::AmbiguousName {
            name: name.to_owned(),
        }));

        out
    }
}
