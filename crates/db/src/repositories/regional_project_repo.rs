//! Repository for the `regional_projects` table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::regional_project::{
    CreateRegionalProject, RegionalProject, UpdateRegionalProject,
};

const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct RegionalProjectRepo;

impl RegionalProjectRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateRegionalProject,
    ) -> Result<RegionalProject, sqlx::Error> {
        let query = format!("INSERT INTO regional_projects (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, RegionalProject>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RegionalProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regional_projects WHERE id = $1");
        sqlx::query_as::<_, RegionalProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<RegionalProject>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM regional_projects WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, RegionalProject>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RegionalProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM regional_projects ORDER BY name, id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, RegionalProject>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegionalProject,
    ) -> Result<Option<RegionalProject>, sqlx::Error> {
        let query = format!(
            "UPDATE regional_projects SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegionalProject>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM regional_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
