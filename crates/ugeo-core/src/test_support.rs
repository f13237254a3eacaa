//! Builders for small in-memory datasets used by the unit tests.

use crate::model::DefaultIndex;
use crate::raw::{DatasetRaw, LocationRaw, ParishEntryRaw};
use crate::text::composite_key;

pub(crate) fn location_raw(
    village: &str,
    parish: &str,
    subcounty: &str,
    district: &str,
) -> LocationRaw {
    LocationRaw {
        village: village.into(),
        parish: parish.into(),
        subcounty: subcounty.into(),
        constituency: None,
        district: district.into(),
    }
}

/// Builds consistent tables from `(village, parish, subcounty, district)` rows.
/// Districts, parishes and villages are listed in first-seen order.
pub(crate) fn raw_dataset(rows: &[(&str, &str, &str, &str)]) -> DatasetRaw {
    let mut raw = DatasetRaw::default();
    for &(village, parish, subcounty, district) in rows {
        if !raw.districts.iter().any(|d| d == district) {
            raw.districts.push(district.into());
        }
        raw.by_village
            .push((village.into(), location_raw(village, parish, subcounty, district)));

        raw.by_parish
            .entry(composite_key(&[district, subcounty, parish]))
            .or_default()
            .push(village.into());

        let parishes = raw
            .by_subcounty
            .entry(composite_key(&[district, subcounty]))
            .or_default();
        if !parishes.iter().any(|p| p.parish() == parish) {
            parishes.push(ParishEntryRaw::Entry {
                parish: parish.into(),
            });
        }
    }
    raw
}

pub(crate) fn index_of(rows: &[(&str, &str, &str, &str)]) -> DefaultIndex {
    DefaultIndex::from_raw(raw_dataset(rows))
}
