//! Response models for the direct API.
//!
//! Entities wrap the JSON object the server returned and expose read-only
//! accessors for well-known fields. Listings are a [`Collection`] of entities.
//! Serializing a response yields the payload as received.

mod announcement;
mod assignment;
mod calendar;
mod collection;
mod content;
mod entity;
mod site;
mod time;

pub use announcement::{
    Announcement, AnnouncementCollection, SiteAnnouncementResponse, UserAnnouncementResponse,
};
pub use assignment::{
    Assignment, AssignmentCollection, ItemAssignmentResponse, MyAssignmentResponse,
    SiteAssignmentResponse,
};
pub use calendar::{
    CalendarCollection, CalendarEvent, EventCalendarResponse, MyCalendarResponse,
    SiteCalendarResponse,
};
pub use collection::{Collection, CollectionItem};
pub use content::{ContentCollection, ContentItem, MyContentResponse, SiteContentResponse};
pub use entity::Entity;
pub use site::{Site, SiteCollection, SiteResponse};
