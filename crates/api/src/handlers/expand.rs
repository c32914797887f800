//! Batch lookups that turn foreign-key ids into nested detail objects.
//!
//! Every helper issues one query per related table for a whole page of
//! rows, never one per row.

use std::collections::HashMap;
use std::hash::Hash;

use go_core::types::DbId;
use go_db::models::country::MiniCountry;
use go_db::models::district::MiniDistrict;
use go_db::models::eru::{Eru, EruDetail, EruOwner, EruOwnerDetail, EruSetItem};
use go_db::models::event::ListEvent;
use go_db::models::partner_deployment::{
    PartnerSocietyActivity, PartnerSocietyDeployment, PartnerSocietyDeploymentDetail,
};
use go_db::models::personnel::{
    Personnel, PersonnelDeployment, PersonnelDeploymentDetail, PersonnelDetail,
};
use go_db::models::project::{Project, ProjectDetail};
use go_db::models::regional_project::RegionalProject;
use go_db::repositories::{
    CountryRepo, DistrictRepo, EruOwnerRepo, EruRepo, EventRepo, PartnerActivityRepo,
    PersonnelDeploymentRepo, RegionalProjectRepo,
};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Index rows by a key.
fn index_by<K, T>(items: Vec<T>, key: impl Fn(&T) -> K) -> HashMap<K, T>
where
    K: Eq + Hash,
{
    items.into_iter().map(|item| (key(&item), item)).collect()
}

/// Distinct ids from optional foreign keys.
fn ids(values: impl IntoIterator<Item = Option<DbId>>) -> Vec<DbId> {
    let mut ids: Vec<DbId> = values.into_iter().flatten().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn pick<T: Clone>(map: &HashMap<DbId, T>, id: Option<DbId>) -> Option<T> {
    id.and_then(|id| map.get(&id).cloned())
}

async fn countries(pool: &PgPool, ids: &[DbId]) -> Result<HashMap<DbId, MiniCountry>, sqlx::Error> {
    Ok(index_by(CountryRepo::find_mini_by_ids(pool, ids).await?, |c| c.id))
}

async fn events(pool: &PgPool, ids: &[DbId]) -> Result<HashMap<DbId, ListEvent>, sqlx::Error> {
    Ok(index_by(EventRepo::find_list_by_ids(pool, ids).await?, |e| e.id))
}

async fn districts(
    pool: &PgPool,
    ids: &[DbId],
) -> Result<HashMap<DbId, MiniDistrict>, sqlx::Error> {
    Ok(index_by(DistrictRepo::find_mini_by_ids(pool, ids).await?, |d| d.id))
}

// ---------------------------------------------------------------------------
// ERUs
// ---------------------------------------------------------------------------

pub async fn eru_owner_details(
    pool: &PgPool,
    owners: Vec<EruOwner>,
) -> Result<Vec<EruOwnerDetail>, sqlx::Error> {
    let owner_ids: Vec<DbId> = owners.iter().map(|o| o.id).collect();
    let erus = EruRepo::list_by_owners(pool, &owner_ids).await?;

    let country_ids = ids(owners
        .iter()
        .map(|o| o.national_society_country_id)
        .chain(erus.iter().map(|e| e.deployed_to_id)));
    let countries = countries(pool, &country_ids).await?;
    let events = events(pool, &ids(erus.iter().map(|e| e.event_id))).await?;

    let mut sets: HashMap<DbId, Vec<EruSetItem>> = HashMap::new();
    for eru in erus {
        let item = EruSetItem {
            deployed_to: pick(&countries, eru.deployed_to_id),
            event: pick(&events, eru.event_id),
            eru,
        };
        sets.entry(item.eru.eru_owner_id).or_default().push(item);
    }

    Ok(owners
        .into_iter()
        .map(|owner| EruOwnerDetail {
            national_society_country: pick(&countries, owner.national_society_country_id),
            eru_set: sets.remove(&owner.id).unwrap_or_default(),
            owner,
        })
        .collect())
}

/// Expand a page of ERUs. The embedded owner carries its whole `eru_set`.
pub async fn eru_details(pool: &PgPool, erus: Vec<Eru>) -> Result<Vec<EruDetail>, sqlx::Error> {
    let owner_ids = ids(erus.iter().map(|e| Some(e.eru_owner_id)));
    let owners = EruOwnerRepo::find_by_ids(pool, &owner_ids).await?;
    let owners = index_by(eru_owner_details(pool, owners).await?, |o| o.owner.id);

    let countries = countries(pool, &ids(erus.iter().map(|e| e.deployed_to_id))).await?;
    let events = events(pool, &ids(erus.iter().map(|e| e.event_id))).await?;

    Ok(erus
        .into_iter()
        .map(|eru| EruDetail {
            deployed_to: pick(&countries, eru.deployed_to_id),
            event: pick(&events, eru.event_id),
            eru_owner: owners.get(&eru.eru_owner_id).cloned(),
            eru,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

pub async fn personnel_deployment_details(
    pool: &PgPool,
    deployments: Vec<PersonnelDeployment>,
) -> Result<Vec<PersonnelDeploymentDetail>, sqlx::Error> {
    let countries = countries(pool, &ids(deployments.iter().map(|d| d.country_deployed_to_id))).await?;
    let events = events(pool, &ids(deployments.iter().map(|d| d.event_deployed_to_id))).await?;

    Ok(deployments
        .into_iter()
        .map(|deployment| PersonnelDeploymentDetail {
            country_deployed_to: pick(&countries, deployment.country_deployed_to_id),
            event_deployed_to: pick(&events, deployment.event_deployed_to_id),
            deployment,
        })
        .collect())
}

pub async fn personnel_details(
    pool: &PgPool,
    personnel: Vec<Personnel>,
) -> Result<Vec<PersonnelDetail>, sqlx::Error> {
    let deployment_ids = ids(personnel.iter().map(|p| Some(p.deployment_id)));
    let deployments = PersonnelDeploymentRepo::find_by_ids(pool, &deployment_ids).await?;
    let deployments = index_by(
        personnel_deployment_details(pool, deployments).await?,
        |d| d.deployment.id,
    );
    let countries = countries(pool, &ids(personnel.iter().map(|p| p.country_from_id))).await?;

    Ok(personnel
        .into_iter()
        .map(|person| PersonnelDetail {
            country_from: pick(&countries, person.country_from_id),
            deployment: deployments.get(&person.deployment_id).cloned(),
            personnel: person,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Partner society deployments
// ---------------------------------------------------------------------------

pub async fn partner_deployment_details(
    pool: &PgPool,
    deployments: Vec<PartnerSocietyDeployment>,
) -> Result<Vec<PartnerSocietyDeploymentDetail>, sqlx::Error> {
    let country_ids = ids(deployments
        .iter()
        .flat_map(|d| [d.parent_society_id, d.country_deployed_to_id]));
    let countries = countries(pool, &country_ids).await?;
    let district_ids = ids(deployments
        .iter()
        .flat_map(|d| d.district_deployed_to.iter().copied().map(Some)));
    let districts = districts(pool, &district_ids).await?;
    let activity_ids = ids(deployments.iter().map(|d| d.activity_id));
    let activities: HashMap<DbId, PartnerSocietyActivity> = index_by(
        PartnerActivityRepo::find_by_ids(pool, &activity_ids).await?,
        |a| a.id,
    );

    Ok(deployments
        .into_iter()
        .map(|d| PartnerSocietyDeploymentDetail {
            parent_society: pick(&countries, d.parent_society_id),
            country_deployed_to: pick(&countries, d.country_deployed_to_id),
            district_deployed_to: d
                .district_deployed_to
                .iter()
                .filter_map(|id| districts.get(id).cloned())
                .collect(),
            activity: pick(&activities, d.activity_id),
            deployment: d.into(),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub async fn project_details(
    pool: &PgPool,
    projects: Vec<Project>,
) -> Result<Vec<ProjectDetail>, sqlx::Error> {
    let districts = districts(pool, &ids(projects.iter().map(|p| Some(p.project_district_id)))).await?;
    let countries = countries(pool, &ids(projects.iter().map(|p| Some(p.reporting_ns_id)))).await?;
    let regional_ids = ids(projects.iter().map(|p| p.regional_project_id));
    let regional: HashMap<DbId, RegionalProject> = index_by(
        RegionalProjectRepo::find_by_ids(pool, &regional_ids).await?,
        |r| r.id,
    );

    Ok(projects
        .into_iter()
        .map(|project| ProjectDetail {
            project_district_detail: districts.get(&project.project_district_id).cloned(),
            reporting_ns_detail: countries.get(&project.reporting_ns_id).cloned(),
            regional_project_detail: pick(&regional, project.regional_project_id),
            project,
        })
        .collect())
}

/// Take the only element of a one-row expansion.
pub fn single<T>(details: Vec<T>) -> AppResult<T> {
    details
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError("Expansion returned no rows".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_and_skip_none() {
        assert_eq!(ids([Some(3), None, Some(1), Some(3)]), vec![1, 3]);
        assert!(ids([None, None]).is_empty());
    }

    #[test]
    fn index_and_pick() {
        let map = index_by(vec![(1, "a"), (2, "b")], |(id, _)| *id);
        assert_eq!(pick(&map, Some(2)), Some((2, "b")));
        assert_eq!(pick(&map, Some(9)), None);
        assert_eq!(pick(&map, None), None);
    }
}
