//! Repositories for `eru_owners` and `erus`.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::eru::{
    CreateEru, CreateEruOwner, Eru, EruListParams, EruOwner, UpdateEru, UpdateEruOwner,
};

const OWNER_COLUMNS: &str = "id, national_society_country_id, created_at, updated_at";

const COLUMNS: &str =
    "id, type, units, equipment_units, deployed_to_id, event_id, eru_owner_id, available";

/// CRUD for ERU owners (one per National Society).
pub struct EruOwnerRepo;

impl EruOwnerRepo {
    pub async fn create(pool: &PgPool, input: &CreateEruOwner) -> Result<EruOwner, sqlx::Error> {
        let query = format!(
            "INSERT INTO eru_owners (national_society_country_id) VALUES ($1) RETURNING {OWNER_COLUMNS}"
        );
        sqlx::query_as::<_, EruOwner>(&query)
            .bind(input.national_society_country_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EruOwner>, sqlx::Error> {
        let query = format!("SELECT {OWNER_COLUMNS} FROM eru_owners WHERE id = $1");
        sqlx::query_as::<_, EruOwner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<EruOwner>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {OWNER_COLUMNS} FROM eru_owners WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, EruOwner>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<EruOwner>, sqlx::Error> {
        let query = format!("SELECT {OWNER_COLUMNS} FROM eru_owners ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, EruOwner>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEruOwner,
    ) -> Result<Option<EruOwner>, sqlx::Error> {
        let query = format!(
            "UPDATE eru_owners SET
                national_society_country_id = COALESCE($2, national_society_country_id)
             WHERE id = $1
             RETURNING {OWNER_COLUMNS}"
        );
        sqlx::query_as::<_, EruOwner>(&query)
            .bind(id)
            .bind(input.national_society_country_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owner; its units cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM eru_owners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// CRUD for individual Emergency Response Units.
pub struct EruRepo;

impl EruRepo {
    pub async fn create(pool: &PgPool, input: &CreateEru) -> Result<Eru, sqlx::Error> {
        let query = format!(
            "INSERT INTO erus
                (type, units, equipment_units, deployed_to_id, event_id, eru_owner_id, available)
             VALUES ($1, COALESCE($2, 0), COALESCE($3, 0), $4, $5, $6, COALESCE($7, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Eru>(&query)
            .bind(input.eru_type)
            .bind(input.units)
            .bind(input.equipment_units)
            .bind(input.deployed_to_id)
            .bind(input.event_id)
            .bind(input.eru_owner_id)
            .bind(input.available)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Eru>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM erus WHERE id = $1");
        sqlx::query_as::<_, Eru>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &EruListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Eru>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM erus
             WHERE ($1::BIGINT IS NULL OR eru_owner_id = $1)
               AND ($2::BOOLEAN IS NULL OR available = $2)
               AND ($3::BIGINT IS NULL OR deployed_to_id = $3)
             ORDER BY id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Eru>(&query)
            .bind(params.owner)
            .bind(params.available)
            .bind(params.deployed_to)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All units of the given owners, for building `eru_set`.
    pub async fn list_by_owners(pool: &PgPool, owner_ids: &[DbId]) -> Result<Vec<Eru>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM erus WHERE eru_owner_id = ANY($1) ORDER BY eru_owner_id, id"
        );
        sqlx::query_as::<_, Eru>(&query)
            .bind(owner_ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEru,
    ) -> Result<Option<Eru>, sqlx::Error> {
        let query = format!(
            "UPDATE erus SET
                type = COALESCE($2, type),
                units = COALESCE($3, units),
                equipment_units = COALESCE($4, equipment_units),
                deployed_to_id = COALESCE($5, deployed_to_id),
                event_id = COALESCE($6, event_id),
                eru_owner_id = COALESCE($7, eru_owner_id),
                available = COALESCE($8, available)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Eru>(&query)
            .bind(id)
            .bind(input.eru_type)
            .bind(input.units)
            .bind(input.equipment_units)
            .bind(input.deployed_to_id)
            .bind(input.event_id)
            .bind(input.eru_owner_id)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM erus WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
