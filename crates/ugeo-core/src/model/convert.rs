// crates/ugeo-core/src/model/convert.rs

use super::{Location, LocationIndex, ParishEntry};
use crate::raw::{DatasetRaw, LocationRaw};
use crate::text::{normalize, split_key};
use crate::traits::GeoBackend;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// Convert the raw dataset into a [`LocationIndex`] using the given backend.
///
/// Keys and names are normalized to upper case. The tables are otherwise
/// taken as they are; nothing is cross-checked (see
/// [`LocationIndex::verify`] for an explicit report).
///
/// Village names are assumed unique across the whole country. When the
/// dataset repeats one, the last record wins but keeps the scan position of
/// the first.
pub fn from_raw<B: GeoBackend>(raw: DatasetRaw) -> LocationIndex<B> {
    let districts = raw
        .districts
        .iter()
        .map(|d| B::str_from(&normalize(d)))
        .collect();

    // 1. Villages (scan order = dataset order)
    let mut locations: Vec<Location<B>> = Vec::with_capacity(raw.by_village.len());
    let mut by_village: HashMap<String, usize> = HashMap::with_capacity(raw.by_village.len());
    for (name, record) in raw.by_village {
        let location = to_location::<B>(record);
        match by_village.entry(normalize(&name)) {
            Entry::Occupied(slot) => locations[*slot.get()] = location,
            Entry::Vacant(slot) => {
                slot.insert(locations.len());
                locations.push(location);
            }
        }
    }

    // 2. Parishes
    let by_parish = raw
        .by_parish
        .into_iter()
        .map(|(key, villages)| {
            let villages = villages.iter().map(|v| B::str_from(&normalize(v))).collect();
            (normalize(&key), villages)
        })
        .collect();

    // 3. Subcounties + the district → subcounties index
    let mut by_subcounty = HashMap::with_capacity(raw.by_subcounty.len());
    let mut grouped: HashMap<String, BTreeSet<String>> = HashMap::new();
    for (key, entries) in raw.by_subcounty {
        let key = normalize(&key);
        let mut parts = split_key(&key);
        if let (Some(district), Some(subcounty)) = (parts.next(), parts.next()) {
            grouped
                .entry(district.to_owned())
                .or_default()
                .insert(subcounty.to_owned());
        }

        let entries = entries
            .iter()
            .map(|e| ParishEntry::<B> {
                parish: B::str_from(&normalize(e.parish())),
            })
            .collect::<Vec<_>>();
        by_subcounty.insert(key, entries);
    }

    let subcounties_by_district = grouped
        .into_iter()
        .map(|(district, names)| {
            let names = names.iter().map(|s| B::str_from(s)).collect();
            (district, names)
        })
        .collect();

    LocationIndex {
        districts,
        locations,
        by_village,
        by_parish,
        by_subcounty,
        subcounties_by_district,
    }
}

fn to_location<B: GeoBackend>(record: LocationRaw) -> Location<B> {
    Location {
        village: B::str_from(&normalize(&record.village)),
        parish: B::str_from(&normalize(&record.parish)),
        subcounty: B::str_from(&normalize(&record.subcounty)),
        constituency: record.constituency.as_deref().map(|c| B::str_from(&normalize(c))),
        district: B::str_from(&normalize(&record.district)),
    }
}

impl<B: GeoBackend> LocationIndex<B> {
    /// Builds the index from an already-deserialized dataset.
    pub fn from_raw(raw: DatasetRaw) -> Self {
        from_raw(raw)
    }
}
