//! Repository for the `events` table and its `event_countries` link table.

use sqlx::{PgConnection, PgPool};
use go_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventListParams, ListEvent, UpdateEvent};

/// Column list; `countries` is aggregated from the link table.
const COLUMNS: &str = "e.id, e.name, e.dtype_id, e.summary, e.disaster_start_date, \
    e.num_affected, e.alert_level, e.glide, e.auto_generated, e.is_featured, \
    (SELECT COALESCE(array_agg(ec.country_id ORDER BY ec.country_id), '{}') \
       FROM event_countries ec WHERE ec.event_id = e.id) AS countries, \
    e.created_at, e.updated_at";

const LIST_COLUMNS: &str = "e.id, e.name, e.dtype_id, e.glide, e.disaster_start_date, \
    (SELECT COALESCE(array_agg(ec.country_id ORDER BY ec.country_id), '{}') \
       FROM event_countries ec WHERE ec.event_id = e.id) AS countries";

/// Provides CRUD operations for emergencies.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event and its country links in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO events
                (name, dtype_id, summary, disaster_start_date, num_affected,
                 alert_level, glide, auto_generated, is_featured)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, 0), COALESCE($7, ''),
                     COALESCE($8, FALSE), COALESCE($9, FALSE))
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.dtype_id)
        .bind(&input.summary)
        .bind(input.disaster_start_date)
        .bind(input.num_affected)
        .bind(input.alert_level)
        .bind(&input.glide)
        .bind(input.auto_generated)
        .bind(input.is_featured)
        .fetch_one(&mut *tx)
        .await?;

        replace_countries(&mut tx, id, &input.countries).await?;
        let event = fetch_one(&mut tx, id).await?;
        tx.commit().await?;
        Ok(event)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events e WHERE e.id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events, most recent disaster first.
    pub async fn list(
        pool: &PgPool,
        params: &EventListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events e
             WHERE ($1::BIGINT IS NULL OR EXISTS (
                        SELECT 1 FROM event_countries f
                        WHERE f.event_id = e.id AND f.country_id = $1))
               AND ($2::BIGINT IS NULL OR e.dtype_id = $2)
               AND ($3::BOOLEAN IS NULL OR e.is_featured = $3)
             ORDER BY e.disaster_start_date DESC NULLS LAST, e.id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(params.country)
            .bind(params.dtype)
            .bind(params.is_featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Compact projections for a set of ids, used for nested expansion.
    pub async fn find_list_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<ListEvent>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {LIST_COLUMNS} FROM events e WHERE e.id = ANY($1) ORDER BY e.id");
        sqlx::query_as::<_, ListEvent>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Update an event. `countries`, when present, replaces the link set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE events SET
                name = COALESCE($2, name),
                dtype_id = COALESCE($3, dtype_id),
                summary = COALESCE($4, summary),
                disaster_start_date = COALESCE($5, disaster_start_date),
                num_affected = COALESCE($6, num_affected),
                alert_level = COALESCE($7, alert_level),
                glide = COALESCE($8, glide),
                auto_generated = COALESCE($9, auto_generated),
                is_featured = COALESCE($10, is_featured)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.dtype_id)
        .bind(&input.summary)
        .bind(input.disaster_start_date)
        .bind(input.num_affected)
        .bind(input.alert_level)
        .bind(&input.glide)
        .bind(input.auto_generated)
        .bind(input.is_featured)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }
        if let Some(countries) = &input.countries {
            replace_countries(&mut tx, id, countries).await?;
        }
        let event = fetch_one(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(event))
    }

    /// Delete an event. Country links cascade; appeals and reports keep a
    /// null `event_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn fetch_one(conn: &mut PgConnection, id: DbId) -> Result<Event, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM events e WHERE e.id = $1");
    sqlx::query_as::<_, Event>(&query)
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn replace_countries(
    conn: &mut PgConnection,
    event_id: DbId,
    country_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM event_countries WHERE event_id = $1")
        .bind(event_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(
        "INSERT INTO event_countries (event_id, country_id)
         SELECT $1, c FROM UNNEST($2::BIGINT[]) AS c
         ON CONFLICT DO NOTHING",
    )
    .bind(event_id)
    .bind(country_ids)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
