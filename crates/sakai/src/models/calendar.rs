//! Calendar payloads.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::collection::{Collection, CollectionItem};
use super::entity::Entity;
use super::time;

/// A single calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarEvent(Map<String, Value>);

impl CalendarEvent {
    pub fn event_id(&self) -> Option<&str> {
        self.str_field("eventId")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// Event type label, e.g. `Exam` or `Class session`.
    pub fn event_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn location(&self) -> Option<&str> {
        self.str_field("location")
    }

    pub fn site_id(&self) -> Option<&str> {
        self.str_field("siteId")
    }

    pub fn site_name(&self) -> Option<&str> {
        self.str_field("siteName")
    }

    /// Start of the first occurrence.
    pub fn first_time(&self) -> Option<DateTime<Utc>> {
        time::instant(self.get("firstTime")?)
    }

    /// Duration in milliseconds.
    pub fn duration(&self) -> Option<TimeDelta> {
        TimeDelta::try_milliseconds(self.get("duration")?.as_i64()?)
    }

    /// Consume and return the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Entity for CalendarEvent {
    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl CollectionItem for CalendarEvent {
    const COLLECTION_KEY: &'static str = "calendar_collection";
}

/// Response of the site and "my" calendar endpoints.
pub type CalendarCollection = Collection<CalendarEvent>;

/// Response of `direct/calendar/site/{siteId}.json`.
pub type SiteCalendarResponse = CalendarCollection;

/// Response of `direct/calendar/my.json`.
pub type MyCalendarResponse = CalendarCollection;

/// Response of `direct/calendar/event/{siteId}/{eventId}.json`.
pub type EventCalendarResponse = CalendarEvent;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_first_time_and_duration() {
        let event: CalendarEvent = serde_json::from_value(json!({
            "eventId": "EVENT9",
            "title": "Final exam",
            "type": "Exam",
            "siteId": "SITE123",
            "firstTime": {"display": "Dec 1, 2020 9:00 am", "time": 1_606_813_200_000i64},
            "duration": 7_200_000
        }))
        .unwrap();

        assert_eq!(event.event_type(), Some("Exam"));
        assert_eq!(event.first_time().unwrap().timestamp(), 1_606_813_200);
        assert_eq!(event.duration(), Some(TimeDelta::hours(2)));
    }
}
