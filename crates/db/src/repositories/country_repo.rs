//! Repository for the `countries` table.

use sqlx::PgPool;
use go_core::types::{DbId, EnumId};

use crate::models::country::{Country, CreateCountry, MiniCountry, UpdateCountry};

const COLUMNS: &str =
    "id, name, iso, iso3, society_name, society_url, region, created_at, updated_at";

const MINI_COLUMNS: &str = "id, name, iso, society_name";

/// Provides CRUD operations and lookups for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a new country. The ISO code is stored upper-cased.
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        let query = format!(
            "INSERT INTO countries (name, iso, iso3, society_name, society_url, region)
             VALUES ($1, UPPER($2), UPPER($3), COALESCE($4, ''), COALESCE($5, ''), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(&input.name)
            .bind(&input.iso)
            .bind(&input.iso3)
            .bind(&input.society_name)
            .bind(&input.society_url)
            .bind(input.region)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE id = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List countries alphabetically, optionally restricted to one region.
    pub async fn list(
        pool: &PgPool,
        region: Option<EnumId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM countries
             WHERE ($1::SMALLINT IS NULL OR region = $1)
             ORDER BY name, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(region)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Every country, unpaginated. Used by the ingestion runner.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries ORDER BY id");
        sqlx::query_as::<_, Country>(&query).fetch_all(pool).await
    }

    /// Compact projections for a set of ids. Missing ids are skipped.
    pub async fn find_mini_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<MiniCountry>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {MINI_COLUMNS} FROM countries WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, MiniCountry>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Update a country. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCountry,
    ) -> Result<Option<Country>, sqlx::Error> {
        let query = format!(
            "UPDATE countries SET
                name = COALESCE($2, name),
                iso = COALESCE(UPPER($3), iso),
                iso3 = COALESCE(UPPER($4), iso3),
                society_name = COALESCE($5, society_name),
                society_url = COALESCE($6, society_url),
                region = COALESCE($7, region)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.iso)
            .bind(&input.iso3)
            .bind(&input.society_name)
            .bind(&input.society_url)
            .bind(input.region)
            .fetch_optional(pool)
            .await
    }
}
