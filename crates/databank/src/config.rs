use std::time::Duration;

/// Default START Network alerts endpoint.
pub const DEFAULT_START_NETWORK_URL: &str =
    "https://startnetwork.org/api/v1/start-fund-all-alerts";

/// Ingestion configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DatabankConfig {
    /// CSV feed of START Fund alerts.
    pub start_network_url: String,
    /// Timeout applied to every outbound feed request, in seconds.
    pub http_timeout_secs: u64,
}

impl DatabankConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                                                 |
    /// |------------------------------|---------------------------------------------------------|
    /// | `START_NETWORK_URL`          | `https://startnetwork.org/api/v1/start-fund-all-alerts` |
    /// | `DATABANK_HTTP_TIMEOUT_SECS` | `30`                                                    |
    pub fn from_env() -> Self {
        let start_network_url = std::env::var("START_NETWORK_URL")
            .unwrap_or_else(|_| DEFAULT_START_NETWORK_URL.into());

        let http_timeout_secs: u64 = std::env::var("DATABANK_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("DATABANK_HTTP_TIMEOUT_SECS must be a valid u64");

        Self {
            start_network_url,
            http_timeout_secs,
        }
    }

    /// Build the shared HTTP client used by all sources.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .user_agent(concat!("go-databank/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

impl Default for DatabankConfig {
    fn default() -> Self {
        Self {
            start_network_url: DEFAULT_START_NETWORK_URL.into(),
            http_timeout_secs: 30,
        }
    }
}
