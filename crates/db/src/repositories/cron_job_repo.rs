//! Repository for the `cron_jobs` run log.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::cron_job::{CronJob, NewCronJob};

const COLUMNS: &str = "id, name, status, message, num_result, storing, backtrace, created_at";

pub struct CronJobRepo;

impl CronJobRepo {
    pub async fn create(pool: &PgPool, input: &NewCronJob) -> Result<CronJob, sqlx::Error> {
        let query = format!(
            "INSERT INTO cron_jobs (name, status, message, num_result, storing, backtrace)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CronJob>(&query)
            .bind(&input.name)
            .bind(input.status)
            .bind(&input.message)
            .bind(input.num_result)
            .bind(&input.storing)
            .bind(&input.backtrace)
            .fetch_one(pool)
            .await
    }

    /// List runs, newest first, optionally for one job name.
    pub async fn list(
        pool: &PgPool,
        name: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CronJob>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cron_jobs
             WHERE ($1::TEXT IS NULL OR name = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CronJob>(&query)
            .bind(name)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Highest id in the log, or 0 when empty.
    pub async fn max_id(pool: &PgPool) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as("SELECT COALESCE(MAX(id), 0) FROM cron_jobs")
            .fetch_one(pool)
            .await?;
        Ok(id)
    }

    /// Runs recorded after `id`, oldest first.
    pub async fn list_after(pool: &PgPool, id: DbId) -> Result<Vec<CronJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cron_jobs WHERE id > $1 ORDER BY id");
        sqlx::query_as::<_, CronJob>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }
}
