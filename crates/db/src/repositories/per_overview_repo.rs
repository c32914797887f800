//! Repository for the `per_overviews` table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::per_overview::{CreateOverview, Overview, OverviewListParams, UpdateOverview};

const COLUMNS: &str = "id, country_id, user_id, date_of_current_capacity_assessment, \
    type_of_capacity_assessment, date_of_last_capacity_assessment, \
    type_of_last_capacity_assessment, branch_involved, focal_point_name, focal_point_email, \
    had_previous_assessment, focus, facilitated_by, facilitator_email, phone_number, \
    skype_address, date_of_mid_term_review, approximate_date_next_capacity_assmt";

pub struct OverviewRepo;

impl OverviewRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateOverview,
    ) -> Result<Overview, sqlx::Error> {
        let query = format!(
            "INSERT INTO per_overviews
                (country_id, user_id, date_of_current_capacity_assessment,
                 type_of_capacity_assessment, date_of_last_capacity_assessment,
                 type_of_last_capacity_assessment, branch_involved, focal_point_name,
                 focal_point_email, had_previous_assessment, focus, facilitated_by,
                 facilitator_email, phone_number, skype_address, date_of_mid_term_review,
                 approximate_date_next_capacity_assmt)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5, COALESCE($6, 0), $7, $8, $9,
                     COALESCE($10, FALSE), $11, $12, $13, $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Overview>(&query)
            .bind(input.country_id)
            .bind(user_id)
            .bind(input.date_of_current_capacity_assessment)
            .bind(input.type_of_capacity_assessment)
            .bind(input.date_of_last_capacity_assessment)
            .bind(input.type_of_last_capacity_assessment)
            .bind(&input.branch_involved)
            .bind(&input.focal_point_name)
            .bind(&input.focal_point_email)
            .bind(input.had_previous_assessment)
            .bind(&input.focus)
            .bind(&input.facilitated_by)
            .bind(&input.facilitator_email)
            .bind(&input.phone_number)
            .bind(&input.skype_address)
            .bind(input.date_of_mid_term_review)
            .bind(input.approximate_date_next_capacity_assmt)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Overview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM per_overviews WHERE id = $1");
        sqlx::query_as::<_, Overview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List overviews, most recent assessment first.
    pub async fn list(
        pool: &PgPool,
        params: &OverviewListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Overview>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM per_overviews
             WHERE ($1::BIGINT IS NULL OR country_id = $1)
             ORDER BY date_of_current_capacity_assessment DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Overview>(&query)
            .bind(params.country)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOverview,
    ) -> Result<Option<Overview>, sqlx::Error> {
        let query = format!(
            "UPDATE per_overviews SET
                country_id = COALESCE($2, country_id),
                date_of_current_capacity_assessment = COALESCE($3, date_of_current_capacity_assessment),
                type_of_capacity_assessment = COALESCE($4, type_of_capacity_assessment),
                date_of_last_capacity_assessment = COALESCE($5, date_of_last_capacity_assessment),
                type_of_last_capacity_assessment = COALESCE($6, type_of_last_capacity_assessment),
                branch_involved = COALESCE($7, branch_involved),
                focal_point_name = COALESCE($8, focal_point_name),
                focal_point_email = COALESCE($9, focal_point_email),
                had_previous_assessment = COALESCE($10, had_previous_assessment),
                focus = COALESCE($11, focus),
                facilitated_by = COALESCE($12, facilitated_by),
                facilitator_email = COALESCE($13, facilitator_email),
                phone_number = COALESCE($14, phone_number),
                skype_address = COALESCE($15, skype_address),
                date_of_mid_term_review = COALESCE($16, date_of_mid_term_review),
                approximate_date_next_capacity_assmt = COALESCE($17, approximate_date_next_capacity_assmt)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Overview>(&query)
            .bind(id)
            .bind(input.country_id)
            .bind(input.date_of_current_capacity_assessment)
            .bind(input.type_of_capacity_assessment)
            .bind(input.date_of_last_capacity_assessment)
            .bind(input.type_of_last_capacity_assessment)
            .bind(&input.branch_involved)
            .bind(&input.focal_point_name)
            .bind(&input.focal_point_email)
            .bind(input.had_previous_assessment)
            .bind(&input.focus)
            .bind(&input.facilitated_by)
            .bind(&input.facilitator_email)
            .bind(&input.phone_number)
            .bind(&input.skype_address)
            .bind(input.date_of_mid_term_review)
            .bind(input.approximate_date_next_capacity_assmt)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM per_overviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
