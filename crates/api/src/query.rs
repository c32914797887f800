//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with `go_db::clamp_limit` / `go_db::clamp_offset`
/// before they reach a repository.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamped `(limit, offset)` pair.
    pub fn clamped(&self) -> (i64, i64) {
        page(self.limit, self.offset)
    }
}

/// Clamp raw `limit` / `offset` values taken from a resource's filter params.
pub fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (go_db::clamp_limit(limit), go_db::clamp_offset(offset))
}
