//! Repository for the `disaster_types` lookup table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::disaster_type::{CreateDisasterType, DisasterType, UpdateDisasterType};

const COLUMNS: &str = "id, name, summary";

pub struct DisasterTypeRepo;

impl DisasterTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDisasterType,
    ) -> Result<DisasterType, sqlx::Error> {
        let query = format!(
            "INSERT INTO disaster_types (name, summary)
             VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisasterType>(&query)
            .bind(&input.name)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DisasterType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disaster_types WHERE id = $1");
        sqlx::query_as::<_, DisasterType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All disaster types, alphabetically. The table is small and unpaginated.
    pub async fn list(pool: &PgPool) -> Result<Vec<DisasterType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disaster_types ORDER BY name");
        sqlx::query_as::<_, DisasterType>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDisasterType,
    ) -> Result<Option<DisasterType>, sqlx::Error> {
        let query = format!(
            "UPDATE disaster_types SET
                name = COALESCE($2, name),
                summary = COALESCE($3, summary)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisasterType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.summary)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disaster_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
