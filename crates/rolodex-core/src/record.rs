use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Canonical output keys. Declaration order is alphabetical so records
/// serialize with sorted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKey {
    Color,
    Firstname,
    Lastname,
    Phonenumber,
    Zipcode,
}

impl RecordKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKey::Color => "color",
            RecordKey::Firstname => "firstname",
            RecordKey::Lastname => "lastname",
            RecordKey::Phonenumber => "phonenumber",
            RecordKey::Zipcode => "zipcode",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedRecord(BTreeMap<RecordKey, String>);

impl NormalizedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: RecordKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Replaces any earlier value for `key`.
    pub fn insert(&mut self, key: RecordKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn merge(&mut self, fragment: NormalizedRecord) {
        self.0.extend(fragment.0);
    }

    pub fn firstname(&self) -> &str {
        self.get(RecordKey::Firstname).unwrap_or_default()
    }

    pub fn lastname(&self) -> &str {
        self.get(RecordKey::Lastname).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, RecordKey, String> {
        self.0.iter()
    }
}

impl<V: Into<String>> FromIterator<(RecordKey, V)> for NormalizedRecord {
    fn from_iter<I: IntoIterator<Item = (RecordKey, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a NormalizedRecord {
    type Item = (&'a RecordKey, &'a String);
    type IntoIter = btree_map::Iter<'a, RecordKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
