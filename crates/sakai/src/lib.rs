//! sakai - Client bindings for the Sakai LMS direct JSON API
//!
//! A [`SakaiClient`] logs in once with a username and password, keeps the
//! session cookie the server hands back, and replays it on every accessor
//! call. Accessors map one-to-one onto `direct/*.json` endpoints and return the
//! payload as the server sent it.
//!
//! # Example
//!
//! ```no_run
//! use sakai::{BaseUrl, Credentials, EventRef, SakaiClient, SakaiConfig};
//!
//! # async fn example() -> Result<(), sakai::Error> {
//! let config = SakaiConfig::new(BaseUrl::new("https://sakai.ug.edu.gh")?);
//! let client = SakaiClient::with_config(config)?;
//! client.login(Credentials::new("10654321", "password")).await?;
//!
//! let announcements = client.get_user_announcement().await?;
//! for item in &announcements {
//!     println!("{:?}: {:?}", item.site_title(), item.title());
//! }
//!
//! let event = client
//!     .get_event_calendar(&EventRef::new("SITE123", "EVENT9"))
//!     .await?;
//! println!("{:?}", event.first_time());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod types;

mod http;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, SessionCookie};
pub use client::SakaiClient;
pub use config::SakaiConfig;
pub use error::Error;
pub use models::{Collection, Entity};
pub use types::{BaseUrl, EventRef};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
