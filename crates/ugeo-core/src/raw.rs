use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw location record as it comes from the dataset JSON:
/// {
///   "village": "KATOOKE",
///   "parish": "WAMPEEWO",
///   "subcounty": "NANGABO",
///   "constituency": "KYADONDO EAST",
///   "district": "WAKISO"
/// }
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationRaw {
    pub village: String,
    pub parish: String,
    pub subcounty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituency: Option<String>,
    pub district: String,
}

/// One parish listed under a subcounty.
///
/// The dataset either stores an object carrying at least a `parish` field
/// (other fields are ignored) or just the parish name.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ParishEntryRaw {
    Name(String),
    Entry { parish: String },
}

impl ParishEntryRaw {
    pub fn parish(&self) -> &str {
        match self {
            ParishEntryRaw::Name(name) => name,
            ParishEntryRaw::Entry { parish } => parish,
        }
    }
}

/// The pre-serialized dataset: the district list plus the three lookup
/// tables. Produced by an external build step; consistency between the tables
/// is that step's responsibility.
///
/// `by_village` keeps the order of the JSON object, which is the order the
/// search scan visits villages in.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRaw {
    pub districts: Vec<String>,
    #[serde(with = "ordered_map")]
    pub by_village: Vec<(String, LocationRaw)>,
    pub by_parish: HashMap<String, Vec<String>>,
    pub by_subcounty: HashMap<String, Vec<ParishEntryRaw>>,
}

/// (De)serializes a JSON object as a list of entries in document order.
/// Duplicate keys are kept; the converter decides which one wins.
mod ordered_map {
    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by village name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0).min(4096));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    out.push(entry);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn by_village_keeps_document_order() {
        let raw: DatasetRaw = serde_json::from_str(
            r#"{
                "districts": ["WAKISO"],
                "byVillage": {
                    "ZZZ": {"village": "ZZZ", "parish": "P", "subcounty": "S", "district": "WAKISO"},
                    "AAA": {"village": "AAA", "parish": "P", "subcounty": "S", "district": "WAKISO", "constituency": null},
                    "MMM": {"village": "MMM", "parish": "P", "subcounty": "S", "district": "WAKISO", "constituency": "KYADONDO EAST"}
                },
                "byParish": {},
                "bySubcounty": {}
            }"#,
        )
        .unwrap();

        let names: Vec<_> = raw.by_village.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["ZZZ", "AAA", "MMM"]);
        assert_eq!(raw.by_village[1].1.constituency, None);
        assert_eq!(
            raw.by_village[2].1.constituency.as_deref(),
            Some("KYADONDO EAST")
        );
    }

    #[test]
    fn parish_entries_accept_objects_and_bare_names() {
        let entries: Vec<ParishEntryRaw> =
            serde_json::from_str(r#"["SEETA", {"parish": "NAMILYANGO", "villages": ["X"]}]"#)
                .unwrap();
        let names: Vec<_> = entries.iter().map(ParishEntryRaw::parish).collect();
        assert_eq!(names, ["SEETA", "NAMILYANGO"]);
    }

    #[test]
    fn missing_table_is_rejected() {
        let err = serde_json::from_str::<DatasetRaw>(
            r#"{"districts": [], "byVillage": {}, "byParish": {}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bySubcounty"));
    }
}
