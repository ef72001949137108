use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, SortOrder},
        site::{Country, CreateSiteDto, SiteDto, UpdateSiteDto},
    },
    server::{
        error::AppError,
        model::site::{CreateSiteParams, Site, SiteListParams, UpdateSiteParams},
        service::site::SiteService,
        state::AppState,
    },
};

/// Tag for grouping site endpoints in OpenAPI documentation
pub static SITE_TAG: &str = "site";

#[derive(Deserialize)]
pub struct SiteListQuery {
    pub country: Option<Country>,
    #[serde(default = "default_site_sort")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

fn default_site_sort() -> Option<String> {
    Some("installation_date".to_string())
}

/// List sites.
///
/// Returns every site with its groups, optionally filtered by country and ordered by a
/// site column (installation date ascending by default).
///
/// # Returns
/// - `200 OK` - List of sites
/// - `400 Bad Request` - `sort_by` does not name a site column
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/sites",
    tag = SITE_TAG,
    params(
        ("country" = Option<Country>, Query, description = "Filter by country"),
        ("sort_by" = Option<String>, Query, description = "Column to sort by (default: installation_date); empty skips sorting"),
        ("order" = Option<SortOrder>, Query, description = "Sort order: desc sorts descending, any other value ascending (default: asc)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved sites", body = Vec<SiteDto>),
        (status = 400, description = "Invalid sort field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sites(
    State(state): State<AppState>,
    Query(query): Query<SiteListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SiteService::new(&state.db);

    let sites = service
        .list(SiteListParams {
            country: query.country,
            sort_by: query.sort_by,
            order: query.order,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(sites.into_iter().map(Site::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a site by ID.
///
/// # Returns
/// - `200 OK` - Site with its groups
/// - `404 Not Found` - Site does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/sites/{site_id}",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved site", body = SiteDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_site(
    State(state): State<AppState>,
    Path(site_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SiteService::new(&state.db);

    let site = service.get_by_id(site_id).await?;

    Ok((StatusCode::OK, Json(site.into_dto())))
}

/// Create a site.
///
/// Applies the installation-date rules (one French site per day, Italian sites on
/// weekends only) and links the requested groups, none of which may be a `group3`.
///
/// # Returns
/// - `201 Created` - Created site with its groups
/// - `400 Bad Request` - A business rule rejected the site
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/sites",
    tag = SITE_TAG,
    request_body = CreateSiteDto,
    responses(
        (status = 201, description = "Successfully created site", body = SiteDto),
        (status = 400, description = "Business rule violation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_site(
    State(state): State<AppState>,
    Json(payload): Json<CreateSiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SiteService::new(&state.db);

    let site = service.create(CreateSiteParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(site.into_dto())))
}

/// Partially update a site.
///
/// Only supplied fields change. Installation-date rules are re-checked against the
/// merged values when `country` or `installation_date` is supplied.
///
/// # Returns
/// - `200 OK` - Updated site
/// - `400 Bad Request` - A business rule rejected the change
/// - `404 Not Found` - Site does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/sites/{site_id}",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    request_body = UpdateSiteDto,
    responses(
        (status = 200, description = "Successfully updated site", body = SiteDto),
        (status = 400, description = "Business rule violation", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_site(
    State(state): State<AppState>,
    Path(site_id): Path<i32>,
    Json(payload): Json<UpdateSiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SiteService::new(&state.db);

    let site = service
        .update(UpdateSiteParams::from_dto(site_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(site.into_dto())))
}

/// Delete a site.
///
/// # Returns
/// - `204 No Content` - Site deleted
/// - `404 Not Found` - Site does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/sites/{site_id}",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted site"),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_site(
    State(state): State<AppState>,
    Path(site_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SiteService::new(&state.db);

    service.delete(site_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
