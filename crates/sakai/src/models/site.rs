//! Site payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::collection::{Collection, CollectionItem};
use super::entity::Entity;
use super::time;

/// A course or project site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Site(Map<String, Value>);

impl Site {
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    pub fn short_description(&self) -> Option<&str> {
        self.str_field("shortDescription")
    }

    /// Site type, e.g. `course` or `project`.
    pub fn site_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn published(&self) -> Option<bool> {
        self.get("published").and_then(Value::as_bool)
    }

    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        time::instant(self.get("createdDate")?)
    }

    /// Display name of the site owner.
    pub fn owner_name(&self) -> Option<&str> {
        self.get("siteOwner")?
            .get("userDisplayName")
            .and_then(Value::as_str)
    }

    /// Consume and return the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Entity for Site {
    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl CollectionItem for Site {
    const COLLECTION_KEY: &'static str = "site_collection";
}

/// Sites listing.
pub type SiteCollection = Collection<Site>;

/// Response of `direct/site.json`.
pub type SiteResponse = SiteCollection;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_owner_and_type() {
        let site: Site = serde_json::from_value(json!({
            "id": "SITE123",
            "title": "DCIT 101",
            "type": "course",
            "published": true,
            "createdDate": 1_600_000_000_000i64,
            "siteOwner": {"userId": "u1", "userDisplayName": "Dr. Mensah"}
        }))
        .unwrap();

        assert_eq!(site.site_type(), Some("course"));
        assert_eq!(site.published(), Some(true));
        assert_eq!(site.owner_name(), Some("Dr. Mensah"));
        assert!(site.created_date().is_some());
    }
}
