use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};

/// An uploaded PER document ("NiceDocument"). `document` is the storage
/// path of the blob, `document_url` an external link; either may be empty.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PerDocument {
    pub id: DbId,
    pub created_at: Timestamp,
    pub name: String,
    pub document: Option<String>,
    pub document_url: String,
    pub country_id: Option<DbId>,
    pub visibility: EnumId,
}

/// Insert DTO assembled by the upload handler from multipart fields.
#[derive(Debug, Clone)]
pub struct CreatePerDocument {
    pub name: String,
    pub document: Option<String>,
    pub document_url: String,
    pub country_id: Option<DbId>,
    pub visibility: EnumId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerDocumentListParams {
    pub country: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
