//! Repository for the `projects` table (3W).

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectListParams, UpdateProject};

const COLUMNS: &str = "p.id, p.user_id, p.reporting_ns_id, p.project_district_id, p.name, \
    p.regional_project_id, p.event_id, p.dtype_id, p.programme_type, p.primary_sector, \
    p.operation_type, p.start_date, p.end_date, p.budget_amount, p.status, p.target_total, \
    p.reached_total, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects AS p
                (user_id, reporting_ns_id, project_district_id, name, regional_project_id,
                 event_id, dtype_id, programme_type, primary_sector, operation_type,
                 start_date, end_date, budget_amount, status, target_total, reached_total)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0), COALESCE($9, 0),
                     COALESCE($10, 0), $11, $12, COALESCE($13, 0), COALESCE($14, 0),
                     COALESCE($15, 0), COALESCE($16, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(input.reporting_ns_id)
            .bind(input.project_district_id)
            .bind(&input.name)
            .bind(input.regional_project_id)
            .bind(input.event_id)
            .bind(input.dtype_id)
            .bind(input.programme_type)
            .bind(input.primary_sector)
            .bind(input.operation_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_amount)
            .bind(input.status)
            .bind(input.target_total)
            .bind(input.reached_total)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects p WHERE p.id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects. `country` matches the country of the project district.
    pub async fn list(
        pool: &PgPool,
        params: &ProjectListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             JOIN districts d ON d.id = p.project_district_id
             WHERE ($1::BIGINT IS NULL OR p.reporting_ns_id = $1)
               AND ($2::BIGINT IS NULL OR d.country_id = $2)
               AND ($3::BIGINT IS NULL OR p.regional_project_id = $3)
               AND ($4::SMALLINT IS NULL OR p.status = $4)
             ORDER BY p.start_date DESC NULLS LAST, p.id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(params.reporting_ns)
            .bind(params.country)
            .bind(params.regional_project)
            .bind(params.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects AS p SET
                reporting_ns_id = COALESCE($2, reporting_ns_id),
                project_district_id = COALESCE($3, project_district_id),
                name = COALESCE($4, name),
                regional_project_id = COALESCE($5, regional_project_id),
                event_id = COALESCE($6, event_id),
                dtype_id = COALESCE($7, dtype_id),
                programme_type = COALESCE($8, programme_type),
                primary_sector = COALESCE($9, primary_sector),
                operation_type = COALESCE($10, operation_type),
                start_date = COALESCE($11, start_date),
                end_date = COALESCE($12, end_date),
                budget_amount = COALESCE($13, budget_amount),
                status = COALESCE($14, status),
                target_total = COALESCE($15, target_total),
                reached_total = COALESCE($16, reached_total)
             WHERE p.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.reporting_ns_id)
            .bind(input.project_district_id)
            .bind(&input.name)
            .bind(input.regional_project_id)
            .bind(input.event_id)
            .bind(input.dtype_id)
            .bind(input.programme_type)
            .bind(input.primary_sector)
            .bind(input.operation_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_amount)
            .bind(input.status)
            .bind(input.target_total)
            .bind(input.reached_total)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
