//! Repositories for partner society activities and deployments.

use sqlx::{PgConnection, PgPool};
use go_core::types::DbId;

use crate::models::partner_deployment::{
    CreatePartnerSocietyActivity, CreatePartnerSocietyDeployment, PartnerDeploymentListParams,
    PartnerSocietyActivity, PartnerSocietyDeployment, UpdatePartnerSocietyDeployment,
};

const COLUMNS: &str = "d.id, d.start_date, d.end_date, d.name, d.role, d.parent_society_id, \
    d.country_deployed_to_id, d.activity_id, \
    (SELECT COALESCE(array_agg(pd.district_id ORDER BY pd.district_id), '{}') \
       FROM partner_deployment_districts pd WHERE pd.deployment_id = d.id) AS district_deployed_to";

pub struct PartnerActivityRepo;

impl PartnerActivityRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnerSocietyActivity,
    ) -> Result<PartnerSocietyActivity, sqlx::Error> {
        sqlx::query_as::<_, PartnerSocietyActivity>(
            "INSERT INTO partner_society_activities (activity) VALUES ($1) RETURNING id, activity",
        )
        .bind(&input.activity)
        .fetch_one(pool)
        .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PartnerSocietyActivity>, sqlx::Error> {
        sqlx::query_as::<_, PartnerSocietyActivity>(
            "SELECT id, activity FROM partner_society_activities ORDER BY activity, id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<PartnerSocietyActivity>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, PartnerSocietyActivity>(
            "SELECT id, activity FROM partner_society_activities WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}

/// CRUD for partner society deployments and their district links.
pub struct PartnerDeploymentRepo;

impl PartnerDeploymentRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnerSocietyDeployment,
    ) -> Result<PartnerSocietyDeployment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO partner_society_deployments
                (start_date, end_date, name, role, parent_society_id,
                 country_deployed_to_id, activity_id)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, $7)
             RETURNING id",
        )
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.name)
        .bind(&input.role)
        .bind(input.parent_society_id)
        .bind(input.country_deployed_to_id)
        .bind(input.activity_id)
        .fetch_one(&mut *tx)
        .await?;

        replace_districts(&mut tx, id, &input.district_deployed_to).await?;
        let deployment = fetch_one(&mut tx, id).await?;
        tx.commit().await?;
        Ok(deployment)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PartnerSocietyDeployment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partner_society_deployments d WHERE d.id = $1");
        sqlx::query_as::<_, PartnerSocietyDeployment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &PartnerDeploymentListParams,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PartnerSocietyDeployment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM partner_society_deployments d
             WHERE ($1::BIGINT IS NULL OR d.country_deployed_to_id = $1)
               AND ($2::BIGINT IS NULL OR d.parent_society_id = $2)
             ORDER BY d.start_date DESC NULLS LAST, d.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, PartnerSocietyDeployment>(&query)
            .bind(params.country)
            .bind(params.parent)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartnerSocietyDeployment,
    ) -> Result<Option<PartnerSocietyDeployment>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE partner_society_deployments SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                name = COALESCE($4, name),
                role = COALESCE($5, role),
                parent_society_id = COALESCE($6, parent_society_id),
                country_deployed_to_id = COALESCE($7, country_deployed_to_id),
                activity_id = COALESCE($8, activity_id)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.name)
        .bind(&input.role)
        .bind(input.parent_society_id)
        .bind(input.country_deployed_to_id)
        .bind(input.activity_id)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }
        if let Some(districts) = &input.district_deployed_to {
            replace_districts(&mut tx, id, districts).await?;
        }
        let deployment = fetch_one(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(deployment))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partner_society_deployments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn fetch_one(
    conn: &mut PgConnection,
    id: DbId,
) -> Result<PartnerSocietyDeployment, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM partner_society_deployments d WHERE d.id = $1");
    sqlx::query_as::<_, PartnerSocietyDeployment>(&query)
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn replace_districts(
    conn: &mut PgConnection,
    deployment_id: DbId,
    district_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM partner_deployment_districts WHERE deployment_id = $1")
        .bind(deployment_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(
        "INSERT INTO partner_deployment_districts (deployment_id, district_id)
         SELECT $1, d FROM UNNEST($2::BIGINT[]) AS d
         ON CONFLICT DO NOTHING",
    )
    .bind(deployment_id)
    .bind(district_ids)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
