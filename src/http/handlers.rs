//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the queue
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    DeleteTaskingResponse, HealthResponse, QueuedRequest, SubmitTaskingResponse,
    TaskingListResponse, TaskingRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::TaskId;
use crate::queue::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the queue
/// backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let queue_status = match services::health_check(state.queue.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        queue: queue_status,
    }))
}

/// PUT /v1/tasking-requests
///
/// Submit a tasking request. The request is validated against the platform
/// limits and queued only if it passes; rejections surface as 422
/// (envelope violation) or 409 (unsupported collection type).
pub async fn submit_tasking_request(
    State(state): State<AppState>,
    Json(request): Json<TaskingRequest>,
) -> Result<(StatusCode, Json<SubmitTaskingResponse>), AppError> {
    let entry = services::submit_request(state.queue.as_ref(), &state.platform, request)
        .await
        .map_err(AppError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitTaskingResponse {
            task_id: entry.task_id().value(),
            received_at: entry.received_at,
            message: "Tasking request added to queue".to_string(),
        }),
    ))
}

/// GET /v1/tasking-requests
///
/// List all queued tasking requests in acceptance order.
pub async fn list_tasking_requests(
    State(state): State<AppState>,
) -> HandlerResult<TaskingListResponse> {
    let requests = services::list_requests(state.queue.as_ref()).await?;
    let total = requests.len();

    Ok(Json(TaskingListResponse { requests, total }))
}

/// GET /v1/tasking-requests/{task_id}
///
/// Fetch a single queued tasking request.
pub async fn get_tasking_request(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> HandlerResult<QueuedRequest> {
    let entry = services::get_request(state.queue.as_ref(), TaskId::new(task_id)).await?;
    Ok(Json(entry))
}

/// DELETE /v1/tasking-requests/{task_id}
///
/// Remove a queued tasking request.
pub async fn delete_tasking_request(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> HandlerResult<DeleteTaskingResponse> {
    let removed = services::delete_request(state.queue.as_ref(), TaskId::new(task_id)).await?;
    Ok(Json(DeleteTaskingResponse {
        task_id: removed.task_id().value(),
        message: "Tasking request deleted".to_string(),
    }))
}
