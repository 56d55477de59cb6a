//! Listing payloads keyed by `<prefix>_collection`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entity that Sakai lists under a `<prefix>_collection` key.
pub trait CollectionItem {
    /// Key holding the array, e.g. `announcement_collection`.
    const COLLECTION_KEY: &'static str;
}

/// A listing response.
///
/// Only an array under [`CollectionItem::COLLECTION_KEY`] is decoded into
/// items. Every other field, including `entityPrefix`, a `null` collection or
/// one whose elements are not objects, stays in the raw map, so serializing
/// yields the keys and values the server sent and nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Option<Vec<T>>,
    fields: Map<String, Value>,
}

impl<T> Collection<T> {
    /// Decoded items, empty when the collection key was absent or not an array.
    pub fn items(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Consume and return the decoded items.
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }

    /// The `entityPrefix`, `None` if absent or not a string.
    pub fn entity_prefix(&self) -> Option<&str> {
        self.fields.get("entityPrefix").and_then(Value::as_str)
    }

    /// Get any field other than the decoded collection.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize + CollectionItem> Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.fields.len() + usize::from(self.items.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        if let Some(items) = &self.items {
            map.serialize_entry(T::COLLECTION_KEY, items)?;
        }
        map.end()
    }
}

impl<'de, T: DeserializeOwned + CollectionItem> Deserialize<'de> for Collection<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields: Map<String, Value> = Map::deserialize(deserializer)?;

        let items = match fields.remove(T::COLLECTION_KEY) {
            Some(Value::Array(values)) => {
                match serde_json::from_value::<Vec<T>>(Value::Array(values.clone())) {
                    Ok(items) => Some(items),
                    Err(_) => {
                        fields.insert(T::COLLECTION_KEY.to_string(), Value::Array(values));
                        None
                    }
                }
            }
            Some(other) => {
                fields.insert(T::COLLECTION_KEY.to_string(), other);
                None
            }
            None => None,
        };

        Ok(Self { items, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Site;
    use serde_json::json;

    fn round_trip(raw: Value) -> (Collection<Site>, Value) {
        let parsed: Collection<Site> = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&parsed).unwrap();
        (parsed, back)
    }

    #[test]
    fn null_entity_prefix_is_kept() {
        let raw = json!({"entityPrefix": null, "site_collection": [{"id": "S"}]});
        let (parsed, back) = round_trip(raw.clone());
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.entity_prefix(), None);
        assert_eq!(back, raw);
    }

    #[test]
    fn absent_collection_is_not_invented() {
        let raw = json!({"entityPrefix": "site"});
        let (parsed, back) = round_trip(raw.clone());
        assert!(parsed.is_empty());
        assert_eq!(parsed.entity_prefix(), Some("site"));
        assert_eq!(back, raw);
    }

    #[test]
    fn null_collection_decodes_and_is_kept() {
        let raw = json!({"entityPrefix": "site", "site_collection": null});
        let (parsed, back) = round_trip(raw.clone());
        assert!(parsed.is_empty());
        assert_eq!(parsed.get("site_collection"), Some(&Value::Null));
        assert_eq!(back, raw);
    }

    #[test]
    fn non_object_elements_stay_raw() {
        let raw = json!({"site_collection": ["S1", 2]});
        let (parsed, back) = round_trip(raw.clone());
        assert!(parsed.is_empty());
        assert_eq!(back, raw);
    }

    #[test]
    fn iterates_items() {
        let parsed: Collection<Site> =
            serde_json::from_value(json!({"site_collection": [{"id": "A"}, {"id": "B"}]}))
                .unwrap();
        let ids: Vec<_> = parsed.iter().filter_map(Site::id).collect();
        assert_eq!(ids, ["A", "B"]);
    }
}
