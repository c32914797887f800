//! Repository for the `per_documents` table.

use sqlx::PgPool;
use go_core::enums::Visibility;
use go_core::types::DbId;

use crate::models::per_document::{CreatePerDocument, PerDocument, PerDocumentListParams};

const COLUMNS: &str = "id, created_at, name, document, document_url, country_id, visibility";

pub struct PerDocumentRepo;

impl PerDocumentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePerDocument,
    ) -> Result<PerDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO per_documents (name, document, document_url, country_id, visibility)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerDocument>(&query)
            .bind(&input.name)
            .bind(&input.document)
            .bind(&input.document_url)
            .bind(input.country_id)
            .bind(input.visibility)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PerDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM per_documents WHERE id = $1");
        sqlx::query_as::<_, PerDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List documents, newest first. Hidden documents are left out unless
    /// `include_hidden` is set.
    pub async fn list(
        pool: &PgPool,
        params: &PerDocumentListParams,
        include_hidden: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PerDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM per_documents
             WHERE ($1::BIGINT IS NULL OR country_id = $1)
               AND ($2 OR visibility = $3)
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, PerDocument>(&query)
            .bind(params.country)
            .bind(include_hidden)
            .bind(Visibility::Visible.id())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a document row, returning it so the caller can remove the blob.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<PerDocument>, sqlx::Error> {
        let query = format!("DELETE FROM per_documents WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, PerDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
