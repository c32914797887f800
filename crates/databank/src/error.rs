/// Error type for feed ingestion.
#[derive(Debug, thiserror::Error)]
pub enum DatabankError {
    /// The feed request failed (network, DNS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed body could not be interpreted.
    #[error("Malformed feed: {0}")]
    Feed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatabankError {
    /// Render the error with its full `source()` chain, one cause per line.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            out.push_str("\ncaused by: ");
            out.push_str(&err.to_string());
            cause = err.source();
        }
        out
    }
}
