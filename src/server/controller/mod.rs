//! HTTP request handlers.
//!
//! Controllers extract path, query and body data, convert DTOs into operation
//! parameters, call the matching service and convert the resulting domain model back
//! into a DTO. Errors propagate as `AppError` and are rendered by its `IntoResponse`.

pub mod group;
pub mod site;

#[cfg(test)]
mod test;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static ROOT_TAG: &str = "root";

/// Welcome message confirming the API is reachable.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API is running", body = MessageDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Welcome to the Site Registry API".to_string(),
        }),
    )
}
