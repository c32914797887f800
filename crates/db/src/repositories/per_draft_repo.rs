//! Repository for the `per_drafts` table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::per_draft::{CreateDraft, Draft, DraftListParams};

const COLUMNS: &str = "id, code, user_id, data, country_id, created_at";

pub struct DraftRepo;

impl DraftRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateDraft,
    ) -> Result<Draft, sqlx::Error> {
        let query = format!(
            "INSERT INTO per_drafts (code, user_id, data, country_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Draft>(&query)
            .bind(&input.code)
            .bind(user_id)
            .bind(&input.data)
            .bind(input.country_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &DraftListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Draft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM per_drafts
             WHERE ($1::BIGINT IS NULL OR country_id = $1)
               AND ($2::TEXT IS NULL OR code = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Draft>(&query)
            .bind(params.country)
            .bind(&params.code)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM per_drafts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
