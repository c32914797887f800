//! Repository for field reports, their country links and actions taken.

use sqlx::{PgConnection, PgPool};
use go_core::types::DbId;

use crate::models::field_report::{
    ActionsTaken, CreateActionsTaken, CreateFieldReport, FieldReport, FieldReportListParams,
    UpdateFieldReport,
};

const COLUMNS: &str = "r.id, r.rid, r.summary, r.description, r.dtype_id, r.event_id, r.status, \
    r.request_assistance, r.num_injured, r.num_dead, r.num_missing, r.num_affected, \
    r.num_displaced, r.num_assisted, r.num_localstaff, r.num_volunteers, \
    r.num_expats_delegates, r.user_id, \
    (SELECT COALESCE(array_agg(fc.country_id ORDER BY fc.country_id), '{}') \
       FROM field_report_countries fc WHERE fc.field_report_id = r.id) AS countries, \
    r.created_at, r.updated_at";

const ACTION_COLUMNS: &str = "id, field_report_id, organization, actions, summary";

/// Provides CRUD operations for field reports.
pub struct FieldReportRepo;

impl FieldReportRepo {
    /// Insert a report with its country links and nested actions in one
    /// transaction. Status defaults to 1 (Event).
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        input: &CreateFieldReport,
    ) -> Result<FieldReport, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let c = &input.counts;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO field_reports
                (rid, summary, description, dtype_id, event_id, status, request_assistance,
                 num_injured, num_dead, num_missing, num_affected, num_displaced,
                 num_assisted, num_localstaff, num_volunteers, num_expats_delegates, user_id)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, 1), COALESCE($7, FALSE),
                     $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING id",
        )
        .bind(&input.rid)
        .bind(&input.summary)
        .bind(&input.description)
        .bind(input.dtype_id)
        .bind(input.event_id)
        .bind(input.status)
        .bind(input.request_assistance)
        .bind(c.num_injured)
        .bind(c.num_dead)
        .bind(c.num_missing)
        .bind(c.num_affected)
        .bind(c.num_displaced)
        .bind(c.num_assisted)
        .bind(c.num_localstaff)
        .bind(c.num_volunteers)
        .bind(c.num_expats_delegates)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        replace_countries(&mut tx, id, &input.countries).await?;
        for action in &input.actions_taken {
            insert_action(&mut tx, id, action).await?;
        }

        let report = fetch_one(&mut tx, id).await?;
        tx.commit().await?;
        Ok(report)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FieldReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM field_reports r WHERE r.id = $1");
        sqlx::query_as::<_, FieldReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reports, newest first.
    pub async fn list(
        pool: &PgPool,
        params: &FieldReportListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FieldReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM field_reports r
             WHERE ($1::BIGINT IS NULL OR r.event_id = $1)
               AND ($2::BIGINT IS NULL OR EXISTS (
                        SELECT 1 FROM field_report_countries f
                        WHERE f.field_report_id = r.id AND f.country_id = $2))
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, FieldReport>(&query)
            .bind(params.event)
            .bind(params.country)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFieldReport,
    ) -> Result<Option<FieldReport>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let c = &input.counts;

        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE field_reports SET
                rid = COALESCE($2, rid),
                summary = COALESCE($3, summary),
                description = COALESCE($4, description),
                dtype_id = COALESCE($5, dtype_id),
                event_id = COALESCE($6, event_id),
                status = COALESCE($7, status),
                request_assistance = COALESCE($8, request_assistance),
                num_injured = COALESCE($9, num_injured),
                num_dead = COALESCE($10, num_dead),
                num_missing = COALESCE($11, num_missing),
                num_affected = COALESCE($12, num_affected),
                num_displaced = COALESCE($13, num_displaced),
                num_assisted = COALESCE($14, num_assisted),
                num_localstaff = COALESCE($15, num_localstaff),
                num_volunteers = COALESCE($16, num_volunteers),
                num_expats_delegates = COALESCE($17, num_expats_delegates)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.rid)
        .bind(&input.summary)
        .bind(&input.description)
        .bind(input.dtype_id)
        .bind(input.event_id)
        .bind(input.status)
        .bind(input.request_assistance)
        .bind(c.num_injured)
        .bind(c.num_dead)
        .bind(c.num_missing)
        .bind(c.num_affected)
        .bind(c.num_displaced)
        .bind(c.num_assisted)
        .bind(c.num_localstaff)
        .bind(c.num_volunteers)
        .bind(c.num_expats_delegates)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }
        if let Some(countries) = &input.countries {
            replace_countries(&mut tx, id, countries).await?;
        }
        let report = fetch_one(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(report))
    }

    /// Delete a report together with its actions.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM field_reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Actions taken --

    pub async fn list_actions(
        pool: &PgPool,
        field_report_id: DbId,
    ) -> Result<Vec<ActionsTaken>, sqlx::Error> {
        let query = format!(
            "SELECT {ACTION_COLUMNS} FROM actions_taken WHERE field_report_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ActionsTaken>(&query)
            .bind(field_report_id)
            .fetch_all(pool)
            .await
    }

    pub async fn add_action(
        pool: &PgPool,
        field_report_id: DbId,
        input: &CreateActionsTaken,
    ) -> Result<ActionsTaken, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        insert_action(&mut conn, field_report_id, input).await
    }

    pub async fn delete_action(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actions_taken WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn fetch_one(conn: &mut PgConnection, id: DbId) -> Result<FieldReport, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM field_reports r WHERE r.id = $1");
    sqlx::query_as::<_, FieldReport>(&query)
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn insert_action(
    conn: &mut PgConnection,
    field_report_id: DbId,
    input: &CreateActionsTaken,
) -> Result<ActionsTaken, sqlx::Error> {
    let query = format!(
        "INSERT INTO actions_taken (field_report_id, organization, actions, summary)
         VALUES ($1, $2, $3, COALESCE($4, ''))
         RETURNING {ACTION_COLUMNS}"
    );
    sqlx::query_as::<_, ActionsTaken>(&query)
        .bind(field_report_id)
        .bind(&input.organization)
        .bind(&input.actions)
        .bind(&input.summary)
        .fetch_one(conn)
        .await
}

async fn replace_countries(
    conn: &mut PgConnection,
    field_report_id: DbId,
    country_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM field_report_countries WHERE field_report_id = $1")
        .bind(field_report_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(
        "INSERT INTO field_report_countries (field_report_id, country_id)
         SELECT $1, c FROM UNNEST($2::BIGINT[]) AS c
         ON CONFLICT DO NOTHING",
    )
    .bind(field_report_id)
    .bind(country_ids)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
