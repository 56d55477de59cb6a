//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::types::BaseUrl;

/// Configuration for a [`SakaiClient`](crate::SakaiClient).
///
/// The base URL is the only option. It defaults to the production host and
/// cannot change once a client is built from it.
///
/// # Example
///
/// ```
/// use sakai::{BaseUrl, SakaiConfig};
///
/// let config = SakaiConfig::new(BaseUrl::new("https://sakai.example.edu").unwrap());
/// assert_eq!(config.base_url().as_str(), "https://sakai.example.edu/");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SakaiConfig {
    #[serde(default)]
    base_url: BaseUrl,
}

impl SakaiConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: BaseUrl) -> Self {
        Self { base_url }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_BASE_URL;

    #[test]
    fn default_uses_production_host() {
        assert_eq!(SakaiConfig::default().base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_json_falls_back_to_default() {
        let config: SakaiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SakaiConfig::default());
    }

    #[test]
    fn reads_base_url_from_json() {
        let config: SakaiConfig =
            serde_json::from_str(r#"{"baseUrl":"https://sakai.example.edu"}"#).unwrap();
        assert_eq!(config.base_url().host(), Some("sakai.example.edu"));
    }
}
