/// Settings for reaching an objects API deployment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is resolved against.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// API version label, forwarded as-is in the `X-Api-Version` header.
    pub api_version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.restful-api.dev".to_owned(),
            timeout_ms: 30_000,
            api_version: "v1".to_owned(),
        }
    }
}

impl ApiConfig {
    /// Creates a config from environment variables.
    ///
    /// Reads:
    /// - `OBJECTS_API_BASE_URL` — base URL of the deployment (required)
    /// - `OBJECTS_API_TIMEOUT_MS` — per-request timeout (optional)
    /// - `OBJECTS_API_VERSION` — version label (optional)
    ///
    /// Returns an error if the base URL is missing or empty, or if the
    /// timeout is set but not a number.
    pub fn from_env() -> std::result::Result<Self, String> {
        let base_url = std::env::var("OBJECTS_API_BASE_URL")
            .map_err(|_| "missing OBJECTS_API_BASE_URL environment variable".to_owned())?;
        if base_url.trim().is_empty() {
            return Err("OBJECTS_API_BASE_URL is set but empty".to_owned());
        }

        let defaults = Self::default();
        let timeout_ms = match std::env::var("OBJECTS_API_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("OBJECTS_API_TIMEOUT_MS is not a number: {raw}"))?,
            Err(_) => defaults.timeout_ms,
        };
        let api_version =
            std::env::var("OBJECTS_API_VERSION").unwrap_or(defaults.api_version);

        Ok(Self {
            base_url,
            timeout_ms,
            api_version,
        })
    }
}
