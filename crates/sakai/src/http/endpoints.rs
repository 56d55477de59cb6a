//! Endpoint paths and request types for the Sakai direct API.
//!
//! Paths are relative to the configured base URL. Identifiers are
//! interpolated verbatim.

use serde::Serialize;

// ============================================================================
// Session
// ============================================================================

/// Session creation (login).
pub const SESSION: &str = "direct/session";

/// Query parameters for session creation.
#[derive(Serialize)]
pub struct LoginQuery<'a> {
    #[serde(rename = "_username")]
    pub username: &'a str,
    #[serde(rename = "_password")]
    pub password: &'a str,
}

// ============================================================================
// Announcements
// ============================================================================

/// Announcements for every site of the current user.
pub const USER_ANNOUNCEMENTS: &str = "direct/announcement/user.json";

/// Announcements of one site.
pub fn site_announcements(site_id: &str) -> String {
    format!("direct/announcement/site/{site_id}.json")
}

// ============================================================================
// Assignments
// ============================================================================

/// Assignments across all sites of the current user.
pub const MY_ASSIGNMENTS: &str = "direct/assignment/my.json";

/// Assignments of one site.
pub fn site_assignments(site_id: &str) -> String {
    format!("direct/assignment/site/{site_id}.json")
}

/// A single assignment by id.
pub fn assignment_item(assignment_id: &str) -> String {
    format!("direct/assignment/item/{assignment_id}.json")
}

// ============================================================================
// Calendar
// ============================================================================

/// Calendar events across all sites of the current user.
pub const MY_CALENDAR: &str = "direct/calendar/my.json";

/// Calendar of one site.
pub fn site_calendar(site_id: &str) -> String {
    format!("direct/calendar/site/{site_id}.json")
}

/// One event in a site's calendar.
pub fn calendar_event(site_id: &str, event_id: &str) -> String {
    format!("direct/calendar/event/{site_id}/{event_id}.json")
}

// ============================================================================
// Sites and content
// ============================================================================

/// Sites the current user is a member of.
pub const SITES: &str = "direct/site.json";

/// Resources across all sites of the current user.
pub const MY_CONTENT: &str = "direct/content/my.json";

/// Resources of one site.
pub fn site_content(site_id: &str) -> String {
    format!("direct/content/site/{site_id}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_interpolated_verbatim() {
        assert_eq!(
            site_announcements("SITE123"),
            "direct/announcement/site/SITE123.json"
        );
        assert_eq!(
            assignment_item("a1b2-c3"),
            "direct/assignment/item/a1b2-c3.json"
        );
        assert_eq!(
            calendar_event("SITE123", "EVENT9"),
            "direct/calendar/event/SITE123/EVENT9.json"
        );
        assert_eq!(site_content("~10654321"), "direct/content/site/~10654321.json");
    }

    #[test]
    fn login_query_uses_underscored_names() {
        let query = LoginQuery {
            username: "alice",
            password: "pw",
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["_username"], "alice");
        assert_eq!(value["_password"], "pw");
    }
}
