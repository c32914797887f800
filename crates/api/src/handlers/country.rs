//! Handlers for `/countries`.
//!
//! Reads are public; writes require the `admin` role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, Region};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::country::{Country, CountryListParams, CreateCountry, UpdateCountry};
use go_db::models::country_overview::CountryOverview;
use go_db::repositories::{CountryOverviewRepo, CountryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

pub(crate) async fn ensure_country_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Country> {
    CountryRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))
}

/// GET /api/v1/countries
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CountryListParams>,
) -> AppResult<Json<DataResponse<Vec<Country>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let countries = CountryRepo::list(&state.pool, params.region, limit, offset).await?;
    Ok(Json(DataResponse { data: countries }))
}

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCountry>,
) -> AppResult<(StatusCode, Json<DataResponse<Country>>)> {
    validate_input(&input)?;
    ensure_valid_opt::<Region>(input.region)?;

    let country = CountryRepo::create(&state.pool, &input).await?;
    tracing::info!(country_id = country.id, name = %country.name, "Country created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: country })))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Country>>> {
    let country = ensure_country_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: country }))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCountry>,
) -> AppResult<Json<DataResponse<Country>>> {
    validate_input(&input)?;
    ensure_valid_opt::<Region>(input.region)?;

    let country = CountryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(DataResponse { data: country }))
}

/// GET /api/v1/countries/{id}/overview
///
/// Databank overview filled by feed ingestion. A country that no run has
/// reached yet has no overview.
pub async fn overview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CountryOverview>>> {
    ensure_country_exists(&state.pool, id).await?;
    let overview = CountryOverviewRepo::find_by_country(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CountryOverview",
            id,
        }))?;
    Ok(Json(DataResponse { data: overview }))
}
