//! Announcement payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::collection::{Collection, CollectionItem};
use super::entity::Entity;
use super::time;

/// A single announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Announcement(Map<String, Value>);

impl Announcement {
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// HTML body of the announcement.
    pub fn body(&self) -> Option<&str> {
        self.str_field("body")
    }

    pub fn site_id(&self) -> Option<&str> {
        self.str_field("siteId")
    }

    pub fn site_title(&self) -> Option<&str> {
        self.str_field("siteTitle")
    }

    pub fn created_by(&self) -> Option<&str> {
        self.str_field("createdByDisplayName")
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        time::instant(self.get("createdOn")?)
    }

    /// Attachment descriptors, empty when there are none.
    pub fn attachments(&self) -> &[Value] {
        self.get("attachments")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Consume and return the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Entity for Announcement {
    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl CollectionItem for Announcement {
    const COLLECTION_KEY: &'static str = "announcement_collection";
}

/// Response of the site and user announcement endpoints.
pub type AnnouncementCollection = Collection<Announcement>;

/// Response of `direct/announcement/site/{siteId}.json`.
pub type SiteAnnouncementResponse = AnnouncementCollection;

/// Response of `direct/announcement/user.json`.
pub type UserAnnouncementResponse = AnnouncementCollection;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_well_known_fields() {
        let response: AnnouncementCollection = serde_json::from_value(json!({
            "entityPrefix": "announcement",
            "announcement_collection": [{
                "id": "msg-1",
                "title": "Midterm moved",
                "body": "<p>Now on Friday</p>",
                "siteId": "SITE123",
                "siteTitle": "DCIT 101",
                "createdByDisplayName": "Dr. Mensah",
                "createdOn": 1_600_000_000_000i64,
                "attachments": [{"name": "schedule.pdf"}],
                "entityId": "msg-1"
            }]
        }))
        .unwrap();

        assert_eq!(response.entity_prefix(), Some("announcement"));
        let first = &response.items()[0];
        assert_eq!(first.title(), Some("Midterm moved"));
        assert_eq!(first.site_title(), Some("DCIT 101"));
        assert_eq!(first.created_by(), Some("Dr. Mensah"));
        assert_eq!(first.created_on().unwrap().timestamp(), 1_600_000_000);
        assert_eq!(first.attachments().len(), 1);
        assert_eq!(first.entity_id(), Some("msg-1"));
    }

    #[test]
    fn missing_attachments_is_empty() {
        let a: Announcement = serde_json::from_value(json!({"attachments": null})).unwrap();
        assert!(a.attachments().is_empty());
        assert!(a.created_on().is_none());
    }
}
