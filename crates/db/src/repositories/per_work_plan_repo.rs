//! Repository for the `per_work_plans` table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::per_work_plan::{CreateWorkPlan, UpdateWorkPlan, WorkPlan, WorkPlanListParams};

const COLUMNS: &str = "id, prioritization, components, benchmark, actions, comments, timeline, \
    status, support_required, focal_point, country_id, code, question_id, user_id";

pub struct WorkPlanRepo;

impl WorkPlanRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateWorkPlan,
    ) -> Result<WorkPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO per_work_plans
                (prioritization, components, benchmark, actions, comments, timeline, status,
                 support_required, focal_point, country_id, code, question_id, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, FALSE), $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkPlan>(&query)
            .bind(input.prioritization)
            .bind(&input.components)
            .bind(&input.benchmark)
            .bind(&input.actions)
            .bind(&input.comments)
            .bind(input.timeline)
            .bind(input.status)
            .bind(input.support_required)
            .bind(&input.focal_point)
            .bind(input.country_id)
            .bind(&input.code)
            .bind(&input.question_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM per_work_plans WHERE id = $1");
        sqlx::query_as::<_, WorkPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List work plan lines ordered by timeline.
    pub async fn list(
        pool: &PgPool,
        params: &WorkPlanListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WorkPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM per_work_plans
             WHERE ($1::BIGINT IS NULL OR country_id = $1)
             ORDER BY timeline, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, WorkPlan>(&query)
            .bind(params.country)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkPlan,
    ) -> Result<Option<WorkPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE per_work_plans SET
                prioritization = COALESCE($2, prioritization),
                components = COALESCE($3, components),
                benchmark = COALESCE($4, benchmark),
                actions = COALESCE($5, actions),
                comments = COALESCE($6, comments),
                timeline = COALESCE($7, timeline),
                status = COALESCE($8, status),
                support_required = COALESCE($9, support_required),
                focal_point = COALESCE($10, focal_point),
                country_id = COALESCE($11, country_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkPlan>(&query)
            .bind(id)
            .bind(input.prioritization)
            .bind(&input.components)
            .bind(&input.benchmark)
            .bind(&input.actions)
            .bind(&input.comments)
            .bind(input.timeline)
            .bind(input.status)
            .bind(input.support_required)
            .bind(&input.focal_point)
            .bind(input.country_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM per_work_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
