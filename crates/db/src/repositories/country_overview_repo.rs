//! Repository for the `country_overviews` databank table.

use sqlx::PgPool;
use go_core::types::DbId;

use crate::models::country_overview::CountryOverview;

const COLUMNS: &str = "id, country_id, start_network_data, updated_at";

pub struct CountryOverviewRepo;

impl CountryOverviewRepo {
    pub async fn find_by_country(
        pool: &PgPool,
        country_id: DbId,
    ) -> Result<Option<CountryOverview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM country_overviews WHERE country_id = $1");
        sqlx::query_as::<_, CountryOverview>(&query)
            .bind(country_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the overview for a country, creating an empty one if needed.
    pub async fn get_or_create(
        pool: &PgPool,
        country_id: DbId,
    ) -> Result<CountryOverview, sqlx::Error> {
        let query = format!(
            "INSERT INTO country_overviews (country_id) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_country_overviews_country
             DO UPDATE SET country_id = EXCLUDED.country_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CountryOverview>(&query)
            .bind(country_id)
            .fetch_one(pool)
            .await
    }

    /// Replace the START Network alert list of an overview.
    pub async fn set_start_network_data(
        pool: &PgPool,
        id: DbId,
        data: &serde_json::Value,
    ) -> Result<Option<CountryOverview>, sqlx::Error> {
        let query = format!(
            "UPDATE country_overviews SET start_network_data = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CountryOverview>(&query)
            .bind(id)
            .bind(data)
            .fetch_optional(pool)
            .await
    }
}
