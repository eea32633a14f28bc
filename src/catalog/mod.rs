//! Technology catalogs
//!
//! A catalog maps a record's name to the record. Records do not repeat their
//! name when persisted: the mapping key is the name, and it is written back
//! into the record on load.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod record;

pub use record::{AdoptionLevel, Maturity, PotentialImpact, Technology, TechnologyTrend};

/// A record that can be stored in a [`Catalog`]
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// Name-keyed collection of records
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, returning the record it replaced
    pub fn insert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.name().to_string(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: CatalogEntry> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Catalog<T>
where
    T: CatalogEntry + DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, T>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .map(|(name, mut entry)| {
                entry.set_name(name.clone());
                (name, entry)
            })
            .collect();
        Ok(Self { entries })
    }
}

/// A record as written in an input file, carrying its own name
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRecord<T> {
    pub name: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T: CatalogEntry> NamedRecord<T> {
    pub fn into_entry(self) -> T {
        let mut entry = self.record;
        entry.set_name(self.name);
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docker() -> Technology {
        Technology::new(
            "Docker",
            "Containerization",
            Maturity::Mature,
            AdoptionLevel::Production,
            "Containers",
        )
        .with_use_cases(["Microservices"])
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(docker()).is_none());

        let mut updated = docker();
        updated.category = "Runtime".to_string();
        let previous = catalog.insert(updated).unwrap();

        assert_eq!(previous.category, "Containerization");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Docker").unwrap().category, "Runtime");
    }

    #[test]
    fn test_serialized_values_omit_name() {
        let catalog: Catalog<Technology> = [docker()].into_iter().collect();
        let value = serde_json::to_value(&catalog).unwrap();

        let entry = value.get("Docker").unwrap();
        assert!(entry.get("name").is_none());
        assert_eq!(entry["maturity"], "mature");
    }

    #[test]
    fn test_deserialize_restores_names_from_keys() {
        let json = r#"{
            "Rust": {
                "category": "Programming Language",
                "maturity": "Growth",
                "adoption_level": "pilot",
                "description": "Systems language",
                "pros": ["Performance"],
                "cons": [],
                "use_cases": ["System programming"],
                "last_evaluated": "2024-05-01T08:00:00.000000"
            }
        }"#;

        let catalog: Catalog<Technology> = serde_json::from_str(json).unwrap();
        let rust = catalog.get("Rust").unwrap();
        assert_eq!(rust.name, "Rust");
        assert_eq!(rust.maturity, Maturity::Growth);
        assert_eq!(rust.pros, vec!["Performance"]);
    }

    #[test]
    fn test_named_record_into_entry() {
        let yaml = r#"
name: Blockchain
category: Distributed Ledger
maturity: growth
potential_impact: High
description: Ledgers
relevant_use_cases: [smart contracts]
"#;
        let named: NamedRecord<TechnologyTrend> = serde_yaml::from_str(yaml).unwrap();
        let trend = named.into_entry();
        assert_eq!(trend.name, "Blockchain");
        assert_eq!(trend.potential_impact, PotentialImpact::High);
    }
}
