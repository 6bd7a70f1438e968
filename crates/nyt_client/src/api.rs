use nyt_core::{Error, PathType, Period, Result};
use url::Url;

pub const BASE_URL: &str = "https://api.nytimes.com/svc/mostpopular/v2/";

/// Endpoint base and API key for the most-popular service. The key is an
/// injected secret; obtaining it (flag, environment) is the binary's job.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different base, e.g. a local fixture server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn most_popular_url(&self, path_type: PathType, period: Period) -> Result<Url> {
        let raw = format!(
            "{}{}/{}.json?api-key={}",
            self.base_url,
            path_type.wire_value(),
            period.wire_value(),
            self.api_key
        );
        Url::parse(&raw).map_err(|_| Error::InvalidUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_contains_both_wire_values_and_key_once() {
        let config = ApiConfig::new("secret-key");
        for path_type in PathType::ALL {
            for period in Period::ALL {
                let url = config.most_popular_url(path_type, period).unwrap();
                let raw = url.as_str();
                assert!(raw.contains(&format!("/{}/", path_type.wire_value())), "{raw}");
                assert!(raw.contains(&format!("/{}.json", period.wire_value())), "{raw}");
                assert_eq!(raw.matches("api-key=secret-key").count(), 1, "{raw}");
            }
        }
    }

    #[test]
    fn default_base_points_at_most_popular_service() {
        let url = ApiConfig::new("k")
            .most_popular_url(PathType::Viewed, Period::Week)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.nytimes.com/svc/mostpopular/v2/viewed/7.json?api-key=k"
        );
    }

    #[test]
    fn unparseable_base_is_invalid_url() {
        let config = ApiConfig::new("k").with_base_url("not a url ");
        let err = config
            .most_popular_url(PathType::Viewed, Period::Week)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl));
    }
}
