//! Repository for the `districts` table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::district::{CreateDistrict, District, MiniDistrict, UpdateDistrict};

const COLUMNS: &str = "id, name, code, country_id";

pub struct DistrictRepo;

impl DistrictRepo {
    pub async fn create(pool: &PgPool, input: &CreateDistrict) -> Result<District, sqlx::Error> {
        let query = format!(
            "INSERT INTO districts (name, code, country_id)
             VALUES ($1, COALESCE($2, ''), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, District>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.country_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<District>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM districts WHERE id = $1");
        sqlx::query_as::<_, District>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        country_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<District>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM districts
             WHERE ($1::BIGINT IS NULL OR country_id = $1)
             ORDER BY name, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, District>(&query)
            .bind(country_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Compact projections for a set of ids, ordered by id.
    pub async fn find_mini_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<MiniDistrict>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, MiniDistrict>(
            "SELECT id, name, code FROM districts WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDistrict,
    ) -> Result<Option<District>, sqlx::Error> {
        let query = format!(
            "UPDATE districts SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                country_id = COALESCE($4, country_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, District>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.country_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM districts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
