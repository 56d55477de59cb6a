//! Calendar event reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single calendar event within a site.
///
/// Both identifiers are opaque and interpolated verbatim into the request
/// path.
///
/// # Example
///
/// ```
/// use sakai::EventRef;
///
/// let event = EventRef::new("SITE123", "EVENT9");
/// assert_eq!(event.to_string(), "SITE123/EVENT9");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    site_id: String,
    event_id: String,
}

impl EventRef {
    /// Create a reference to `event_id` in `site_id`.
    pub fn new(site_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            event_id: event_id.into(),
        }
    }

    /// Returns the site identifier.
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Returns the event identifier.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }
}

impl fmt::Display for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.site_id, self.event_id)
    }
}
