//! Login credentials type.

use std::fmt;

/// Username and password sent to the Sakai session endpoint.
///
/// Neither value is validated; empty strings are passed to the server as-is.
///
/// # Security
///
/// The password is never exposed in Debug output.
///
/// # Example
///
/// ```
/// use sakai::Credentials;
///
/// let creds = Credentials::new("10654321", "hunter2");
/// assert_eq!(creds.username(), "10654321");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password. Only used when building the login request.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_password_in_debug() {
        let creds = Credentials::new("10654321", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("10654321"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn empty_values_are_kept() {
        let creds = Credentials::new("", "");
        assert_eq!(creds.username(), "");
        assert_eq!(creds.password(), "");
    }
}
