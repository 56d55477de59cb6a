//! The Sakai API client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::auth::{Credentials, SessionCookie};
use crate::config::SakaiConfig;
use crate::http::{self, HttpClient, LoginQuery};
use crate::models::{
    EventCalendarResponse, ItemAssignmentResponse, MyAssignmentResponse, MyCalendarResponse,
    MyContentResponse, SiteAnnouncementResponse, SiteAssignmentResponse, SiteCalendarResponse,
    SiteContentResponse, SiteResponse, UserAnnouncementResponse,
};
use crate::types::{BaseUrl, EventRef};

/// Client for one Sakai deployment and one user session.
///
/// Call [`login`](Self::login) once, then any accessor. Every request reuses
/// the session cookie captured at login. Accessors called before login are
/// still sent; the server decides whether to reject them.
///
/// # Thread Safety
///
/// Clients are cheap to clone (they use internal `Arc`) and share the same
/// HTTP connection pool and session cookie across clones.
///
/// # Example
///
/// ```no_run
/// use sakai::{Credentials, SakaiClient};
///
/// # async fn example() -> Result<(), sakai::Error> {
/// let client = SakaiClient::new()?;
/// client.login(Credentials::new("10654321", "password")).await?;
///
/// let sites = client.get_site().await?;
/// for site in &sites {
///     println!("{:?}", site.title());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SakaiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: SakaiConfig,
    http: HttpClient,
    cookie: RwLock<Option<SessionCookie>>,
}

impl SakaiClient {
    /// Create a client for the default production host.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_config(SakaiConfig::default())
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_config(config: SakaiConfig) -> Result<Self> {
        let http = HttpClient::new(config.base_url().clone())?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                http,
                cookie: RwLock::new(None),
            }),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &BaseUrl {
        self.inner.config.base_url()
    }

    /// Returns the configuration this client was built from.
    pub fn config(&self) -> &SakaiConfig {
        &self.inner.config
    }

    /// Returns true once a login has stored a session cookie.
    pub async fn has_session(&self) -> bool {
        self.inner.cookie.read().await.is_some()
    }

    /// Returns the stored session cookie, if any.
    ///
    /// # Security
    ///
    /// The cookie grants access to the account. Handle it accordingly.
    pub async fn session_cookie(&self) -> Option<SessionCookie> {
        self.inner.cookie.read().await.clone()
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Log in and keep the returned session cookie for later requests.
    ///
    /// Credentials go in the query string of `POST direct/session`; the request
    /// has no body. A later login replaces the stored cookie.
    ///
    /// # Errors
    ///
    /// - [`Error::Status`](crate::Error::Status) if the server rejects the login
    /// - [`Error::MissingSessionCookie`](crate::Error::MissingSessionCookie) if
    ///   the server accepts it without setting a cookie; any previously stored
    ///   cookie is kept
    #[instrument(skip(self, credentials), fields(base_url = %self.base_url(), username = %credentials.username()))]
    pub async fn login(&self, credentials: Credentials) -> Result<()> {
        info!("Creating new session");

        let query = LoginQuery {
            username: credentials.username(),
            password: credentials.password(),
        };

        let current = self.session_cookie().await;
        let headers = self
            .inner
            .http
            .post_query(http::SESSION, &query, current.as_ref())
            .await?;

        let cookie = SessionCookie::from_headers(&headers)?;
        debug!(cookie = cookie.name(), "Session created successfully");

        *self.inner.cookie.write().await = Some(cookie);
        Ok(())
    }

    /// GET any direct API path relative to the base URL and decode the JSON
    /// body, reusing the session cookie.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: sakai::SakaiClient) -> Result<(), sakai::Error> {
    /// let profile: serde_json::Value = client.get("direct/profile/10654321.json").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let cookie = self.session_cookie().await;
        self.inner.http.get_json(path, cookie.as_ref()).await
    }

    // ========================================================================
    // Announcements
    // ========================================================================

    /// Announcements posted in one site.
    #[instrument(skip(self))]
    pub async fn get_site_announcement(&self, site_id: &str) -> Result<SiteAnnouncementResponse> {
        debug!("Fetching site announcements");
        self.get(&http::site_announcements(site_id)).await
    }

    /// Announcements from every site of the current user.
    #[instrument(skip(self))]
    pub async fn get_user_announcement(&self) -> Result<UserAnnouncementResponse> {
        debug!("Fetching user announcements");
        self.get(http::USER_ANNOUNCEMENTS).await
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Assignments in one site.
    #[instrument(skip(self))]
    pub async fn get_site_assignment(&self, site_id: &str) -> Result<SiteAssignmentResponse> {
        debug!("Fetching site assignments");
        self.get(&http::site_assignments(site_id)).await
    }

    /// A single assignment.
    #[instrument(skip(self))]
    pub async fn get_item_assignment(&self, assignment_id: &str) -> Result<ItemAssignmentResponse> {
        debug!("Fetching assignment");
        self.get(&http::assignment_item(assignment_id)).await
    }

    /// Assignments across every site of the current user.
    #[instrument(skip(self))]
    pub async fn get_my_assignment(&self) -> Result<MyAssignmentResponse> {
        debug!("Fetching my assignments");
        self.get(http::MY_ASSIGNMENTS).await
    }

    // ========================================================================
    // Calendar
    // ========================================================================

    /// Calendar of one site.
    #[instrument(skip(self))]
    pub async fn get_site_calendar(&self, site_id: &str) -> Result<SiteCalendarResponse> {
        debug!("Fetching site calendar");
        self.get(&http::site_calendar(site_id)).await
    }

    /// Calendar events across every site of the current user.
    #[instrument(skip(self))]
    pub async fn get_my_calendar(&self) -> Result<MyCalendarResponse> {
        debug!("Fetching my calendar");
        self.get(http::MY_CALENDAR).await
    }

    /// A single calendar event.
    #[instrument(skip(self), fields(%event))]
    pub async fn get_event_calendar(&self, event: &EventRef) -> Result<EventCalendarResponse> {
        debug!("Fetching calendar event");
        self.get(&http::calendar_event(event.site_id(), event.event_id()))
            .await
    }

    // ========================================================================
    // Sites and content
    // ========================================================================

    /// Sites the current user belongs to.
    #[instrument(skip(self))]
    pub async fn get_site(&self) -> Result<SiteResponse> {
        debug!("Fetching sites");
        self.get(http::SITES).await
    }

    /// Resources of one site.
    #[instrument(skip(self))]
    pub async fn get_site_content(&self, site_id: &str) -> Result<SiteContentResponse> {
        debug!("Fetching site content");
        self.get(&http::site_content(site_id)).await
    }

    /// Resources across every site of the current user.
    #[instrument(skip(self))]
    pub async fn get_my_content(&self) -> Result<MyContentResponse> {
        debug!("Fetching my content");
        self.get(http::MY_CONTENT).await
    }
}

impl std::fmt::Debug for SakaiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SakaiClient")
            .field("base_url", self.base_url())
            .field("cookie", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_client_has_no_session() {
        let client = SakaiClient::new().unwrap();
        assert!(!client.has_session().await);
        assert!(client.session_cookie().await.is_none());
        assert_eq!(client.base_url().as_str(), crate::types::DEFAULT_BASE_URL);
    }

    #[test]
    fn debug_does_not_leak_cookie() {
        let client = SakaiClient::new().unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("sakai.ug.edu.gh"));
        assert!(debug.contains("[REDACTED]"));
    }
}
