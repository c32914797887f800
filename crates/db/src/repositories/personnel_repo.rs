//! Repositories for `personnel_deployments` and `personnel`.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::personnel::{
    CreatePersonnel, CreatePersonnelDeployment, Personnel, PersonnelDeployment,
    PersonnelListParams, UpdatePersonnel, UpdatePersonnelDeployment,
};

const DEPLOYMENT_COLUMNS: &str = "id, country_deployed_to_id, region_deployed_to, \
    event_deployed_to_id, comments, created_at, updated_at";

const COLUMNS: &str =
    "id, start_date, end_date, name, role, type, country_from_id, deployment_id";

pub struct PersonnelDeploymentRepo;

impl PersonnelDeploymentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePersonnelDeployment,
    ) -> Result<PersonnelDeployment, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnel_deployments
                (country_deployed_to_id, region_deployed_to, event_deployed_to_id, comments)
             VALUES ($1, $2, $3, $4)
             RETURNING {DEPLOYMENT_COLUMNS}"
        );
        sqlx::query_as::<_, PersonnelDeployment>(&query)
            .bind(input.country_deployed_to_id)
            .bind(input.region_deployed_to)
            .bind(input.event_deployed_to_id)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PersonnelDeployment>, sqlx::Error> {
        let query = format!("SELECT {DEPLOYMENT_COLUMNS} FROM personnel_deployments WHERE id = $1");
        sqlx::query_as::<_, PersonnelDeployment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<PersonnelDeployment>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {DEPLOYMENT_COLUMNS} FROM personnel_deployments WHERE id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, PersonnelDeployment>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PersonnelDeployment>, sqlx::Error> {
        let query = format!(
            "SELECT {DEPLOYMENT_COLUMNS} FROM personnel_deployments
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, PersonnelDeployment>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersonnelDeployment,
    ) -> Result<Option<PersonnelDeployment>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel_deployments SET
                country_deployed_to_id = COALESCE($2, country_deployed_to_id),
                region_deployed_to = COALESCE($3, region_deployed_to),
                event_deployed_to_id = COALESCE($4, event_deployed_to_id),
                comments = COALESCE($5, comments)
             WHERE id = $1
             RETURNING {DEPLOYMENT_COLUMNS}"
        );
        sqlx::query_as::<_, PersonnelDeployment>(&query)
            .bind(id)
            .bind(input.country_deployed_to_id)
            .bind(input.region_deployed_to)
            .bind(input.event_deployed_to_id)
            .bind(&input.comments)
            .fetch_optional(pool)
            .await
    }

    /// Delete a deployment and, by cascade, its personnel.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personnel_deployments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct PersonnelRepo;

impl PersonnelRepo {
    pub async fn create(pool: &PgPool, input: &CreatePersonnel) -> Result<Personnel, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnel
                (start_date, end_date, name, role, type, country_from_id, deployment_id)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.personnel_type)
            .bind(input.country_from_id)
            .bind(input.deployment_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel WHERE id = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List personnel, latest start first.
    pub async fn list(
        pool: &PgPool,
        params: &PersonnelListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personnel
             WHERE ($1::BIGINT IS NULL OR deployment_id = $1)
               AND ($2::TEXT IS NULL OR type = $2)
               AND ($3::BIGINT IS NULL OR country_from_id = $3)
             ORDER BY start_date DESC NULLS LAST, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(params.deployment)
            .bind(&params.personnel_type)
            .bind(params.country_from)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersonnel,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                name = COALESCE($4, name),
                role = COALESCE($5, role),
                type = COALESCE($6, type),
                country_from_id = COALESCE($7, country_from_id),
                deployment_id = COALESCE($8, deployment_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.personnel_type)
            .bind(input.country_from_id)
            .bind(input.deployment_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
