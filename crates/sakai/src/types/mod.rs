//! Validated value types.

mod base_url;
mod event_ref;

pub use base_url::{BaseUrl, DEFAULT_BASE_URL};
pub use event_ref::EventRef;
