//! Repository for the `appeals` table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::appeal::{Appeal, AppealListParams, CreateAppeal, UpdateAppeal};

const COLUMNS: &str = "id, aid, name, dtype_id, atype, status, code, sector, num_beneficiaries, \
    amount_requested, amount_funded, start_date, end_date, event_id, country_id, \
    created_at, updated_at";

/// Provides CRUD operations for appeals.
pub struct AppealRepo;

impl AppealRepo {
    /// Insert a new appeal. Type defaults to DREF, status to Ongoing.
    pub async fn create(pool: &PgPool, input: &CreateAppeal) -> Result<Appeal, sqlx::Error> {
        let query = format!(
            "INSERT INTO appeals
                (aid, name, dtype_id, atype, status, code, sector, num_beneficiaries,
                 amount_requested, amount_funded, start_date, end_date, event_id, country_id)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), $6, COALESCE($7, ''),
                     COALESCE($8, 0), COALESCE($9, 0), COALESCE($10, 0), $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appeal>(&query)
            .bind(&input.aid)
            .bind(&input.name)
            .bind(input.dtype_id)
            .bind(input.atype)
            .bind(input.status)
            .bind(&input.code)
            .bind(&input.sector)
            .bind(input.num_beneficiaries)
            .bind(input.amount_requested)
            .bind(input.amount_funded)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.event_id)
            .bind(input.country_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appeal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appeals WHERE id = $1");
        sqlx::query_as::<_, Appeal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List appeals, latest start date first.
    pub async fn list(
        pool: &PgPool,
        params: &AppealListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Appeal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM appeals
             WHERE ($1::SMALLINT IS NULL OR status = $1)
               AND ($2::SMALLINT IS NULL OR atype = $2)
               AND ($3::BIGINT IS NULL OR country_id = $3)
               AND ($4::BIGINT IS NULL OR event_id = $4)
             ORDER BY start_date DESC NULLS LAST, id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Appeal>(&query)
            .bind(params.status)
            .bind(params.atype)
            .bind(params.country)
            .bind(params.event)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAppeal,
    ) -> Result<Option<Appeal>, sqlx::Error> {
        let query = format!(
            "UPDATE appeals SET
                name = COALESCE($2, name),
                dtype_id = COALESCE($3, dtype_id),
                atype = COALESCE($4, atype),
                status = COALESCE($5, status),
                code = COALESCE($6, code),
                sector = COALESCE($7, sector),
                num_beneficiaries = COALESCE($8, num_beneficiaries),
                amount_requested = COALESCE($9, amount_requested),
                amount_funded = COALESCE($10, amount_funded),
                start_date = COALESCE($11, start_date),
                end_date = COALESCE($12, end_date),
                event_id = COALESCE($13, event_id),
                country_id = COALESCE($14, country_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appeal>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.dtype_id)
            .bind(input.atype)
            .bind(input.status)
            .bind(&input.code)
            .bind(&input.sector)
            .bind(input.num_beneficiaries)
            .bind(input.amount_requested)
            .bind(input.amount_funded)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.event_id)
            .bind(input.country_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appeals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
