//! Session cookie extracted from the login response.

use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// The `name=value` pair Sakai issues on login, replayed as the `Cookie`
/// header of every later request.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Header values built from it are marked sensitive
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Takes the first `set-cookie` header and keeps its `name=value` pair,
    /// dropping attributes such as `Path` or `HttpOnly`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSessionCookie`] when no `set-cookie` header is
    /// present or the first one is blank.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        let raw = headers
            .get(SET_COOKIE)
            .ok_or(Error::MissingSessionCookie)?
            .to_str()
            .map_err(|e| InvalidInputError::Cookie {
                reason: e.to_string(),
            })?;

        let pair = raw.split(';').next().unwrap_or_default().trim();
        if pair.is_empty() {
            return Err(Error::MissingSessionCookie);
        }

        Ok(Self(pair.to_string()))
    }

    /// Returns the cookie as sent in the `Cookie` header.
    ///
    /// # Security
    ///
    /// Grants access to the account. Do not log it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the cookie name (e.g. `JSESSIONID`).
    pub fn name(&self) -> &str {
        self.0.split('=').next().unwrap_or_default()
    }

    /// Builds a sensitive `Cookie` header value.
    pub(crate) fn header_value(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&self.0).map_err(|e| InvalidInputError::Cookie {
            reason: e.to_string(),
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionCookie")
            .field(&format_args!("{}=[REDACTED]", self.name()))
            .finish()
    }
}
