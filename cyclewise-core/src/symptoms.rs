//! Symptom ratings.
//!
//! An insertion-ordered mapping from symptom name to a 0-5 rating. Updates
//! return a new mapping and leave the original untouched.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CycleWiseError, CycleWiseResult};
use crate::store::{KeyValueStore, SYMPTOMS_KEY};

pub const MAX_RATING: u8 = 5;

const DEFAULT_SYMPTOMS: [(&str, u8); 5] = [
    ("headache", 2),
    ("nausea", 1),
    ("fatigue", 3),
    ("cramps", 4),
    ("mood", 3),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomRatings {
    entries: Vec<(String, u8)>,
}

impl Default for SymptomRatings {
    fn default() -> Self {
        SymptomRatings {
            entries: DEFAULT_SYMPTOMS
                .iter()
                .map(|(name, rating)| (name.to_string(), *rating))
                .collect(),
        }
    }
}

impl SymptomRatings {
    pub fn empty() -> Self {
        SymptomRatings { entries: Vec::new() }
    }

    pub fn load(store: &impl KeyValueStore) -> CycleWiseResult<Self> {
        match store.get(SYMPTOMS_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| CycleWiseError::Store(format!("Could not parse saved symptoms: {e}"))),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> CycleWiseResult<()> {
        let json = serde_json::to_string(self)
            .map_err(|e| CycleWiseError::Serialization(e.to_string()))?;
        store.set(SYMPTOMS_KEY, &json)
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rating)| *rating)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a symptom rated 0. Names are trimmed and lower-cased; empty or
    /// already-tracked names leave the mapping unchanged.
    pub fn with_symptom(&self, name: &str) -> Self {
        let name = normalize_name(name);
        if name.is_empty() || self.contains(&name) {
            return self.clone();
        }

        let mut entries = self.entries.clone();
        entries.push((name, 0));
        SymptomRatings { entries }
    }

    pub fn without_symptom(&self, name: &str) -> Self {
        let name = normalize_name(name);
        SymptomRatings {
            entries: self
                .entries
                .iter()
                .filter(|(n, _)| *n != name)
                .cloned()
                .collect(),
        }
    }

    /// Set a rating, clamped to [`MAX_RATING`]. Unknown symptoms are ignored.
    pub fn with_rating(&self, name: &str, rating: u8) -> Self {
        let name = normalize_name(name);
        let rating = rating.min(MAX_RATING);
        SymptomRatings {
            entries: self
                .entries
                .iter()
                .map(|(n, r)| {
                    if *n == name {
                        (n.clone(), rating)
                    } else {
                        (n.clone(), *r)
                    }
                })
                .collect(),
        }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Display labels, capitalized
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| capitalize(n)).collect()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Serialize for SymptomRatings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rating) in &self.entries {
            map.serialize_entry(name, rating)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SymptomRatings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RatingsVisitor)
    }
}

struct RatingsVisitor;

impl<'de> Visitor<'de> for RatingsVisitor {
    type Value = SymptomRatings;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of symptom names to ratings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, u8)> = Vec::new();
        while let Some((name, rating)) = access.next_entry::<String, u8>()? {
            let rating = rating.min(MAX_RATING);
            match entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = rating,
                None => entries.push((name, rating)),
            }
        }
        Ok(SymptomRatings { entries })
    }
}
