// crates/ugeo-core/src/model/hierarchy.rs

//! Hierarchy queries: children of a unit, parent and path of a village.
//!
//! All inputs are case-insensitive. A unit that is not in the dataset yields
//! `None` or an empty slice, never an error.

use super::{Location, LocationIndex, Parent};
use crate::common::DbStats;
use crate::text::{composite_key, normalize};
use crate::traits::GeoBackend;

impl<B: GeoBackend> LocationIndex<B> {
    /// All district names, in dataset order.
    pub fn districts(&self) -> &[B::Str] {
        &self.districts
    }

    /// Look up a village by name (case-insensitive). O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ugeo_core::DefaultIndex;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let index = DefaultIndex::from_json_str(r#"{
    ///     "districts": ["WAKISO"],
    ///     "byVillage": {"KATOOKE": {"village": "KATOOKE", "parish": "WAMPEEWO",
    ///                               "subcounty": "NANGABO", "district": "WAKISO"}},
    ///     "byParish": {"WAKISO||NANGABO||WAMPEEWO": ["KATOOKE"]},
    ///     "bySubcounty": {"WAKISO||NANGABO": [{"parish": "WAMPEEWO"}]}
    /// }"#)?;
    ///
    /// let loc = index.location_by_village("katooke").unwrap();
    /// assert_eq!(loc.district(), "WAKISO");
    /// assert!(index.location_by_village("nowhere").is_none());
    /// # Ok(()) }
    /// ```
    pub fn location_by_village(&self, village: &str) -> Option<&Location<B>> {
        self.by_village
            .get(&normalize(village))
            .and_then(|&slot| self.locations.get(slot))
    }

    /// Village names of one parish, in dataset order.
    pub fn villages_in_parish(&self, district: &str, subcounty: &str, parish: &str) -> &[B::Str] {
        self.by_parish
            .get(&composite_key(&[district, subcounty, parish]))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Parish names of one subcounty, in dataset order.
    pub fn parishes_in_subcounty(&self, district: &str, subcounty: &str) -> Vec<&str> {
        self.by_subcounty
            .get(&composite_key(&[district, subcounty]))
            .map(|entries| entries.iter().map(|e| e.parish()).collect())
            .unwrap_or_default()
    }

    /// Subcounty names of one district, sorted and deduplicated.
    ///
    /// Only districts listed in [`LocationIndex::districts`] have subcounties;
    /// any other name yields an empty slice even if subcounty keys mention it.
    pub fn subcounties_in_district(&self, district: &str) -> &[B::Str] {
        let district = normalize(district);
        if !self.districts.iter().any(|d| d.as_ref() == district.as_str()) {
            return &[];
        }
        self.subcounties_by_district
            .get(&district)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `"{district} → {subcounty} → {parish} → {village}"` for a known village.
    pub fn path(&self, village: &str) -> Option<String> {
        self.location_by_village(village).map(Location::path)
    }

    /// Parish, subcounty and district of a known village.
    pub fn parent(&self, village: &str) -> Option<Parent<'_>> {
        self.location_by_village(village).map(Location::parent)
    }

    /// Iterate over every village record in scan order.
    pub fn locations(&self) -> impl Iterator<Item = &Location<B>> {
        self.locations.iter()
    }

    /// Aggregate statistics for the index.
    pub fn stats(&self) -> DbStats {
        DbStats {
            districts: self.districts.len(),
            subcounties: self.by_subcounty.len(),
            parishes: self.by_parish.len(),
            villages: self.locations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{DefaultIndex, Parent};
    use crate::test_support::index_of;

    fn sample() -> DefaultIndex {
        index_of(&[
            ("KATOOKE", "WAMPEEWO", "NANGABO", "WAKISO"),
            ("WAMPEEWO", "WAMPEEWO", "NANGABO", "WAKISO"),
            ("KIRA", "KIRA", "KIRA", "WAKISO"),
            ("KAMPALA HILL", "OLD KAMPALA", "CENTRAL DIVISION", "KAMPALA"),
            ("KISENYI I", "KISENYI", "CENTRAL DIVISION", "KAMPALA"),
        ])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = sample();
        assert_eq!(
            index.location_by_village("katooke"),
            index.location_by_village("KATOOKE")
        );
        assert!(index.location_by_village("KaToOkE").is_some());
        // Only case is normalized, not surrounding whitespace.
        assert!(index.location_by_village(" KATOOKE").is_none());
    }

    #[test]
    fn children_of_each_level() {
        let index = sample();
        assert_eq!(index.districts(), ["WAKISO", "KAMPALA"]);
        assert_eq!(index.subcounties_in_district("Wakiso"), ["KIRA", "NANGABO"]);
        assert_eq!(
            index.parishes_in_subcounty("kampala", "central division"),
            ["OLD KAMPALA", "KISENYI"]
        );
        assert_eq!(
            index.villages_in_parish("wakiso", "nangabo", "wampeewo"),
            ["KATOOKE", "WAMPEEWO"]
        );
    }

    #[test]
    fn unknown_units_yield_empty_results() {
        let index = sample();
        assert!(index.subcounties_in_district("GULU").is_empty());
        assert!(index.parishes_in_subcounty("WAKISO", "BUSUKUMA").is_empty());
        assert!(index.villages_in_parish("WAKISO", "NANGABO", "KIRA").is_empty());
        assert!(index.path("NOWHERE").is_none());
        assert!(index.parent("NOWHERE").is_none());
    }

    #[test]
    fn path_and_parent_of_a_village() {
        let index = sample();
        assert_eq!(
            index.path("kampala hill").as_deref(),
            Some("KAMPALA → CENTRAL DIVISION → OLD KAMPALA → KAMPALA HILL")
        );
        assert_eq!(
            index.parent("katooke"),
            Some(Parent {
                parish: "WAMPEEWO",
                subcounty: "NANGABO",
                district: "WAKISO",
            })
        );
    }

    #[test]
    fn dangling_slot_reads_as_missing() {
        let mut index = sample();
        index.locations.truncate(1);
        assert!(index.location_by_village("KIRA").is_none());
        assert!(index.path("KIRA").is_none());
        assert!(index.location_by_village("KATOOKE").is_some());
    }

    #[test]
    fn stats_count_table_sizes() {
        let stats = sample().stats();
        assert_eq!(stats.districts, 2);
        assert_eq!(stats.subcounties, 3);
        assert_eq!(stats.parishes, 4);
        assert_eq!(stats.villages, 5);
    }
}
