//! Assignment payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::collection::{Collection, CollectionItem};
use super::entity::Entity;
use super::time;

/// A single assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(Map<String, Value>);

impl Assignment {
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// Site id the assignment belongs to.
    pub fn context(&self) -> Option<&str> {
        self.str_field("context")
    }

    /// HTML instructions.
    pub fn instructions(&self) -> Option<&str> {
        self.str_field("instructions")
    }

    /// Status label as rendered by Sakai, e.g. `Open`.
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    pub fn due_time(&self) -> Option<DateTime<Utc>> {
        time::instant(self.get("dueTime")?)
    }

    pub fn open_time(&self) -> Option<DateTime<Utc>> {
        time::instant(self.get("openTime")?)
    }

    pub fn close_time(&self) -> Option<DateTime<Utc>> {
        time::instant(self.get("closeTime")?)
    }

    /// Human-readable due date as formatted by the server.
    pub fn due_time_string(&self) -> Option<&str> {
        self.str_field("dueTimeString")
    }

    /// Consume and return the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Entity for Assignment {
    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl CollectionItem for Assignment {
    const COLLECTION_KEY: &'static str = "assignment_collection";
}

/// Response of the site and "my" assignment endpoints.
pub type AssignmentCollection = Collection<Assignment>;

/// Response of `direct/assignment/site/{siteId}.json`.
pub type SiteAssignmentResponse = AssignmentCollection;

/// Response of `direct/assignment/my.json`.
pub type MyAssignmentResponse = AssignmentCollection;

/// Response of `direct/assignment/item/{assignmentId}.json`.
pub type ItemAssignmentResponse = Assignment;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn due_time_accepts_epoch_second_object() {
        let a: Assignment = serde_json::from_value(json!({
            "id": "asg-1",
            "title": "Lab 2",
            "context": "SITE123",
            "status": "Open",
            "dueTime": {"epochSecond": 1_600_000_000i64, "nano": 0},
            "dueTimeString": "2020-09-13T12:26:40Z"
        }))
        .unwrap();

        assert_eq!(a.context(), Some("SITE123"));
        assert_eq!(a.status(), Some("Open"));
        assert_eq!(a.due_time().unwrap().timestamp(), 1_600_000_000);
        assert!(a.open_time().is_none());
    }

    #[test]
    fn unknown_fields_survive_reserialization() {
        let raw = json!({
            "entityPrefix": "assignment",
            "assignment_collection": [{"id": "asg-1", "gradeScaleMaxPoints": "20", "draft": false}],
            "extraListInfo": {"count": 1}
        });
        let parsed: AssignmentCollection = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.get("extraListInfo").unwrap()["count"], 1);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }
}
