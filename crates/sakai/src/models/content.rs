//! Content (resources tool) payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::collection::{Collection, CollectionItem};
use super::entity::Entity;
use super::time;

/// A file or folder in a site's resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentItem(Map<String, Value>);

impl ContentItem {
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// Download URL.
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    /// MIME type, or `collection` for folders.
    pub fn content_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    /// Parent folder path.
    pub fn container(&self) -> Option<&str> {
        self.str_field("container")
    }

    pub fn author(&self) -> Option<&str> {
        self.str_field("author")
    }

    pub fn size(&self) -> Option<u64> {
        self.get("size").and_then(Value::as_u64)
    }

    pub fn is_folder(&self) -> bool {
        self.content_type() == Some("collection")
    }

    pub fn modified_date(&self) -> Option<DateTime<Utc>> {
        match self.get("modifiedDate")? {
            Value::String(s) => time::compact(s),
            other => time::instant(other),
        }
    }

    /// Consume and return the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Entity for ContentItem {
    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl CollectionItem for ContentItem {
    const COLLECTION_KEY: &'static str = "content_collection";
}

/// Response of the site and "my" content endpoints.
pub type ContentCollection = Collection<ContentItem>;

/// Response of `direct/content/site/{siteId}.json`.
pub type SiteContentResponse = ContentCollection;

/// Response of `direct/content/my.json`.
pub type MyContentResponse = ContentCollection;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn folder_and_compact_date() {
        let item: ContentItem = serde_json::from_value(json!({
            "title": "Week 1",
            "type": "collection",
            "container": "/content/group/SITE123/",
            "modifiedDate": "20200913120000000",
            "numChildren": 3
        }))
        .unwrap();

        assert!(item.is_folder());
        assert_eq!(item.container(), Some("/content/group/SITE123/"));
        assert_eq!(
            item.modified_date().unwrap().to_rfc3339(),
            "2020-09-13T12:00:00+00:00"
        );
    }

    #[test]
    fn file_size() {
        let item: ContentItem = serde_json::from_value(json!({
            "title": "notes.pdf",
            "type": "application/pdf",
            "size": 20480
        }))
        .unwrap();
        assert!(!item.is_folder());
        assert_eq!(item.size(), Some(20480));
    }
}
