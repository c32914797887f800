//! Repository for the `ns_phases` table.

use sqlx::PgPool;
use go_core::types::{DbId, EnumId};

use crate::models::ns_phase::NsPhase;

const COLUMNS: &str = "id, country_id, phase, updated_at";

pub struct NsPhaseRepo;

impl NsPhaseRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<NsPhase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ns_phases ORDER BY country_id");
        sqlx::query_as::<_, NsPhase>(&query).fetch_all(pool).await
    }

    pub async fn find_by_country(
        pool: &PgPool,
        country_id: DbId,
    ) -> Result<Option<NsPhase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ns_phases WHERE country_id = $1");
        sqlx::query_as::<_, NsPhase>(&query)
            .bind(country_id)
            .fetch_optional(pool)
            .await
    }

    /// Set the phase of a country, creating its row on first use.
    pub async fn upsert(
        pool: &PgPool,
        country_id: DbId,
        phase: EnumId,
    ) -> Result<NsPhase, sqlx::Error> {
        let query = format!(
            "INSERT INTO ns_phases (country_id, phase) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_ns_phases_country
             DO UPDATE SET phase = EXCLUDED.phase
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NsPhase>(&query)
            .bind(country_id)
            .bind(phase)
            .fetch_one(pool)
            .await
    }
}
