use std::fmt::Display;

use yew::AttrValue;

/// Used when `API_URL` was not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the user API lives. Passed into the interface as a property so the
/// page decides which server it talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: AttrValue,
}

impl ApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Self::default_url();
        }
        Self {
            base_url: AttrValue::from(base_url.to_string()),
        }
    }

    /// Reads the `API_URL` variable baked in at compile time.
    pub fn from_env() -> Self {
        match option_env!("API_URL") {
            Some(url) => Self::new(url),
            None => Self::default_url(),
        }
    }

    fn default_url() -> Self {
        Self {
            base_url: AttrValue::Static(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/{flavor}/users`
    pub fn users_url(&self, flavor: &str) -> String {
        format!("{}/api/{}/users", self.base_url, flavor)
    }

    /// `{base}/api/{flavor}/users/{id}`
    pub fn user_url(&self, flavor: &str, id: impl Display) -> String {
        format!("{}/{}", self.users_url(flavor), id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let config = ApiConfig::new("http://api.local:9000");
        assert_eq!(config.users_url("go"), "http://api.local:9000/api/go/users");
        assert_eq!(
            config.user_url("go", 42),
            "http://api.local:9000/api/go/users/42"
        );
    }

    #[test]
    fn strips_trailing_slashes() {
        let config = ApiConfig::new("http://api.local/ ");
        assert_eq!(config.base_url(), "http://api.local");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_URL);
    }
}
