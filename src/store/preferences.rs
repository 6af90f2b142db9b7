use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A snapshot of every key/value pair in one preference group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    entries: BTreeMap<String, String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `""` when unset.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Preferences {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_empty() {
        let prefs = Preferences::new();
        assert_eq!(prefs.get("nombre"), None);
        assert_eq!(prefs.get_or_empty("nombre"), "");
    }

    #[test]
    fn set_overwrites_and_remove_deletes() {
        let mut prefs = Preferences::new();
        prefs.set("id", "1");
        prefs.set("id", "2");
        assert_eq!(prefs.get("id"), Some("2"));
        assert_eq!(prefs.len(), 1);

        assert_eq!(prefs.remove("id").as_deref(), Some("2"));
        assert!(prefs.is_empty());
        assert_eq!(prefs.remove("id"), None);
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let prefs: Preferences = [("id", "42"), ("nombre", "Ada")].into_iter().collect();
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"id":"42","nombre":"Ada"}"#);

        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
