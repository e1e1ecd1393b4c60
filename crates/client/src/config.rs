use std::{env, path::PathBuf, time::Duration};

/// Default sermon listing endpoint.
pub const DEFAULT_SERMONS_URL: &str =
    "https://api.sermonaudio.com/v2/node/sermons?broadcasterID=gracecommunity";
/// Default static organization feed.
pub const DEFAULT_EVENTS_URL: &str = "https://gracecommunity.church/data/organization.json";
/// Default form-service endpoint for the contact form.
pub const DEFAULT_CONTACT_URL: &str = "https://formspree.io/f/gracecommunity";
/// Default location of the playback store file.
pub const DEFAULT_STORE_PATH: &str = ".gracesite/playback.json";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sermon listing endpoint (default: [`DEFAULT_SERMONS_URL`])
    pub sermons_url: String,
    /// Organization feed with upcoming events (default: [`DEFAULT_EVENTS_URL`])
    pub events_url: String,
    /// Contact form endpoint (default: [`DEFAULT_CONTACT_URL`])
    pub contact_url: String,
    /// Playback store file (default: [`DEFAULT_STORE_PATH`])
    pub store_path: PathBuf,
    /// HTTP timeout in seconds (default: 10)
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GRACESITE_SERMONS_URL` - Sermon listing endpoint
    /// - `GRACESITE_EVENTS_URL` - Organization events feed
    /// - `GRACESITE_CONTACT_URL` - Contact form endpoint
    /// - `GRACESITE_STORE_PATH` - Playback store file
    /// - `GRACESITE_HTTP_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            sermons_url: env::var("GRACESITE_SERMONS_URL")
                .unwrap_or_else(|_| DEFAULT_SERMONS_URL.to_string()),
            events_url: env::var("GRACESITE_EVENTS_URL")
                .unwrap_or_else(|_| DEFAULT_EVENTS_URL.to_string()),
            contact_url: env::var("GRACESITE_CONTACT_URL")
                .unwrap_or_else(|_| DEFAULT_CONTACT_URL.to_string()),
            store_path: env::var("GRACESITE_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH)),
            http_timeout_secs: env::var("GRACESITE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Replaces any field for which an override was given.
    pub fn with_overrides(
        mut self,
        sermons_url: Option<String>,
        events_url: Option<String>,
        contact_url: Option<String>,
        store_path: Option<PathBuf>,
        http_timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = sermons_url {
            self.sermons_url = url;
        }
        if let Some(url) = events_url {
            self.events_url = url;
        }
        if let Some(url) = contact_url {
            self.contact_url = url;
        }
        if let Some(path) = store_path {
            self.store_path = path;
        }
        if let Some(secs) = http_timeout_secs {
            self.http_timeout_secs = secs;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            sermons_url: DEFAULT_SERMONS_URL.to_string(),
            events_url: DEFAULT_EVENTS_URL.to_string(),
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            http_timeout_secs: 30,
        }
    }

    #[test]
    fn test_http_timeout_conversion() {
        assert_eq!(test_config().http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let config = test_config().with_overrides(
            None,
            Some("http://localhost:8080/organization.json".to_string()),
            None,
            Some(PathBuf::from("/tmp/playback.json")),
            Some(5),
        );

        assert_eq!(config.sermons_url, DEFAULT_SERMONS_URL);
        assert_eq!(config.events_url, "http://localhost:8080/organization.json");
        assert_eq!(config.contact_url, DEFAULT_CONTACT_URL);
        assert_eq!(config.store_path, PathBuf::from("/tmp/playback.json"));
        assert_eq!(config.http_timeout(), Duration::from_secs(5));
    }
}
