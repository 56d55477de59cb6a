//! Shared behaviour for Sakai entity payloads.

use serde_json::{Map, Value};

/// A JSON object returned by the direct API.
///
/// Entity types keep every field the server sent; the accessors here and on
/// each type read well-known fields without validating or copying them.
pub trait Entity {
    /// All fields of the payload, verbatim.
    fn fields(&self) -> &Map<String, Value>;

    /// Get a field from the payload.
    fn get(&self, key: &str) -> Option<&Value> {
        self.fields().get(key)
    }

    /// Get a string field, `None` if absent or not a string.
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// The `entityId` every direct entity carries.
    fn entity_id(&self) -> Option<&str> {
        self.str_field("entityId")
    }

    /// The `entityReference`, e.g. `/announcement/msg/...`.
    fn entity_reference(&self) -> Option<&str> {
        self.str_field("entityReference")
    }

    /// The absolute `entityURL` of this entity.
    fn entity_url(&self) -> Option<&str> {
        self.str_field("entityURL")
    }

    /// The `entityTitle`, usually the same as the display title.
    fn entity_title(&self) -> Option<&str> {
        self.str_field("entityTitle")
    }
}
