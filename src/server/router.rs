use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, group, site},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Site Registry API",
        description = "Sites, groups and the business rules linking them"
    ),
    tags(
        (name = "root", description = "Service status"),
        (name = "site", description = "Site management"),
        (name = "group", description = "Group and group hierarchy management")
    )
)]
struct ApiDoc;

/// Builds the application router with OpenAPI documentation served at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::root))
        .routes(routes!(site::list_sites, site::create_site))
        .routes(routes!(site::get_site, site::update_site, site::delete_site))
        .routes(routes!(group::list_groups, group::create_group))
        .routes(routes!(group::get_group, group::update_group, group::delete_group))
        .routes(routes!(group::add_child_groups, group::remove_child_groups))
        .with_state(state)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
