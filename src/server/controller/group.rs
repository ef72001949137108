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
        group::{CreateGroupDto, GroupDto, GroupType, UpdateGroupDto},
    },
    server::{
        error::AppError,
        model::group::{CreateGroupParams, Group, GroupListParams, UpdateGroupParams},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

#[derive(Deserialize)]
pub struct GroupListQuery {
    pub group_type: Option<GroupType>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

/// List groups.
///
/// Returns every group with its site IDs and direct child/parent group IDs, optionally
/// filtered by type and ordered by a group column.
///
/// # Returns
/// - `200 OK` - List of groups
/// - `400 Bad Request` - `sort_by` does not name a group column
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    params(
        ("group_type" = Option<GroupType>, Query, description = "Filter groups by type"),
        ("sort_by" = Option<String>, Query, description = "Column to sort by: id, name or type; empty skips sorting"),
        ("order" = Option<SortOrder>, Query, description = "Sort order: desc sorts descending, any other value ascending (default: asc)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 400, description = "Invalid sort field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Query(query): Query<GroupListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let groups = service
        .list(GroupListParams {
            group_type: query.group_type,
            sort_by: query.sort_by,
            order: query.order,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(Group::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a group by ID.
#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.get_by_id(group_id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Create a group.
///
/// # Returns
/// - `201 Created` - Created group
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.create(CreateGroupParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Partially update a group.
///
/// # Returns
/// - `200 OK` - Updated group
/// - `400 Bad Request` - Retyping a group with linked sites to `group3`
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Business rule violation", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service
        .update(UpdateGroupParams::from_dto(group_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group.
///
/// # Returns
/// - `204 No Content` - Group deleted
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted group"),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    service.delete(group_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add child groups.
///
/// Body is a JSON array of group IDs. All of them must exist and none may be the group
/// itself or one of its ancestors; otherwise nothing is added. Repeated IDs are collapsed,
/// so `[5, 5]` adds group 5 once.
///
/// # Returns
/// - `200 OK` - Parent group with updated children
/// - `400 Bad Request` - Unknown child ID or cycle
/// - `404 Not Found` - Parent group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/{group_id}/child-groups",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Parent group ID")
    ),
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Successfully added child groups", body = GroupDto),
        (status = 400, description = "Unknown child group or cycle", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_child_groups(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
    Json(child_group_ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.add_child_groups(group_id, child_group_ids).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Remove child groups.
///
/// Body is a JSON array of group IDs; IDs that are not children are ignored.
///
/// # Returns
/// - `200 OK` - Parent group with updated children
/// - `404 Not Found` - Parent group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/groups/{group_id}/child-groups",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Parent group ID")
    ),
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Successfully removed child groups", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_child_groups(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
    Json(child_group_ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service
        .remove_child_groups(group_id, child_group_ids)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}
