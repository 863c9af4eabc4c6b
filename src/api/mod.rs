//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; `/health` and the
//! optional Swagger UI live at the root.

pub mod auth;
pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every exposed endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::swap::list_swaps,
        handlers::swap::create_swap,
        handlers::swap::show_swap,
        handlers::swap::accept_swap,
        handlers::swap::reject_swap,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::CreateSwapRequest,
        dto::SwapDto,
        dto::SwapListResponse,
        dto::UserDto,
        dto::SkillDto,
        dto::PaginationMeta,
        crate::domain::SkillIdParam,
        crate::domain::SwapStatus,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Swaps", description = "Skill-swap negotiation lifecycle"),
        (name = "System", description = "Health and metadata"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
