//! The decoded record: an insertion-ordered map of string fields.
//!
//! Downstream ingestion depends on two properties that rule out a plain
//! `HashMap`/`BTreeMap`:
//!
//! - Keys serialise in first-encounter order, so the command envelope's
//!   fields lead the record.
//! - Duplicate keys are first-write-wins: a later `FF` in the payload must
//!   not overwrite the station login captured from the envelope.
//!
//! All values are strings and are emitted as JSON strings; nothing is ever
//! coerced to a number or `null`.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` → `value` unless `key` is already present.
    ///
    /// Returns `true` when the field was written.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.fields.push((key, value.into()));
        true
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
