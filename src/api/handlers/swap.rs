//! Swap negotiation endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::auth::AuthUser;
use crate::api::dto::{
    CreateSwapRequest, ListSwapsParams, PaginationMeta, SwapDto, SwapListResponse,
};
use crate::app_state::AppState;
use crate::domain::{SwapId, UserId};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /swaps` — List swaps, optionally filtered to one user's.
///
/// # Errors
///
/// Returns [`GatewayError`] when the caller identity is missing or the
/// store fails.
#[utoipa::path(
    get,
    path = "/api/v1/swaps",
    tag = "Swaps",
    summary = "List swaps",
    description = "Returns a paginated list of swaps, newest first. With `user_id`, only swaps where that user is requester or responder are included.",
    params(ListSwapsParams),
    responses(
        (status = 200, description = "Paginated swap list", body = SwapListResponse),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
    )
)]
pub async fn list_swaps(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Query(params): Query<ListSwapsParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let filter = params.user_id.map(UserId::new);
    let page = state.swap_service.list(filter, params.page).await?;

    Ok(Json(SwapListResponse {
        data: page.items.into_iter().map(SwapDto::from).collect(),
        pagination: PaginationMeta {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        },
    }))
}

/// `POST /swaps` — Propose a new swap.
///
/// # Errors
///
/// Returns [`GatewayError`] on validation or ownership failures.
#[utoipa::path(
    post,
    path = "/api/v1/swaps",
    tag = "Swaps",
    summary = "Propose a swap",
    description = "Opens a skill-swap proposal from the caller to the responder. The proposal starts pending; only the responder may accept or reject it.",
    request_body = CreateSwapRequest,
    responses(
        (status = 201, description = "Swap created", body = SwapDto),
        (status = 400, description = "Validation or ownership failure", body = ErrorResponse),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
    )
)]
pub async fn create_swap(
    State(state): State<AppState>,
    AuthUser(requester): AuthUser,
    Json(request): Json<CreateSwapRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let proposal = request.into_proposal()?;
    let detail = state.swap_service.create(requester, proposal).await?;
    Ok((StatusCode::CREATED, Json(SwapDto::from(detail))))
}

/// `GET /swaps/:id` — Get one swap with resolved relations.
///
/// # Errors
///
/// Returns [`GatewayError::SwapNotFound`] for an unknown id.
#[utoipa::path(
    get,
    path = "/api/v1/swaps/{id}",
    tag = "Swaps",
    summary = "Get swap details",
    description = "Returns a single swap with requester, responder, and skills resolved.",
    params(
        ("id" = i64, Path, description = "Swap id"),
    ),
    responses(
        (status = 200, description = "Swap details", body = SwapDto),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
        (status = 404, description = "Swap not found", body = ErrorResponse),
    )
)]
pub async fn show_swap(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let detail = state.swap_service.show(SwapId::new(id)).await?;
    Ok(Json(SwapDto::from(detail)))
}

/// `POST /swaps/:id/accept` — Accept a pending swap.
///
/// # Errors
///
/// Returns [`GatewayError::Forbidden`] when the caller is not the
/// responder, or [`GatewayError::InvalidState`] outside `pending`.
#[utoipa::path(
    post,
    path = "/api/v1/swaps/{id}/accept",
    tag = "Swaps",
    summary = "Accept a swap",
    description = "Moves a pending swap to accepted. Only the responder may do this, and only once.",
    params(
        ("id" = i64, Path, description = "Swap id"),
    ),
    responses(
        (status = 200, description = "Swap accepted", body = SwapDto),
        (status = 400, description = "Swap is not pending", body = ErrorResponse),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
        (status = 403, description = "Caller is not the responder", body = ErrorResponse),
        (status = 404, description = "Swap not found", body = ErrorResponse),
    )
)]
pub async fn accept_swap(
    State(state): State<AppState>,
    AuthUser(acting_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let detail = state
        .swap_service
        .accept(SwapId::new(id), acting_user)
        .await?;
    Ok(Json(SwapDto::from(detail)))
}

/// `POST /swaps/:id/reject` — Reject a pending swap.
///
/// # Errors
///
/// Same failure modes as [`accept_swap`].
#[utoipa::path(
    post,
    path = "/api/v1/swaps/{id}/reject",
    tag = "Swaps",
    summary = "Reject a swap",
    description = "Moves a pending swap to rejected. Only the responder may do this, and only once.",
    params(
        ("id" = i64, Path, description = "Swap id"),
    ),
    responses(
        (status = 200, description = "Swap rejected", body = SwapDto),
        (status = 400, description = "Swap is not pending", body = ErrorResponse),
        (status = 401, description = "Missing caller identity", body = ErrorResponse),
        (status = 403, description = "Caller is not the responder", body = ErrorResponse),
        (status = 404, description = "Swap not found", body = ErrorResponse),
    )
)]
pub async fn reject_swap(
    State(state): State<AppState>,
    AuthUser(acting_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let detail = state
        .swap_service
        .reject(SwapId::new(id), acting_user)
        .await?;
    Ok(Json(SwapDto::from(detail)))
}

/// Swap negotiation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/swaps", post(create_swap).get(list_swaps))
        .route("/swaps/{id}", get(show_swap))
        .route("/swaps/{id}/accept", post(accept_swap))
        .route("/swaps/{id}/reject", post(reject_swap))
}
