//! Data Transfer Objects for the HTTP API.
//!
//! The queue and model types already derive Serialize/Deserialize and are
//! used directly as payloads; this module adds the wrapper responses the
//! REST surface needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export existing types that serve as request/response bodies as-is.
pub use crate::models::TaskingRequest;
pub use crate::queue::QueuedRequest;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Queue backend status
    pub queue: String,
}

/// Response for an accepted tasking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTaskingResponse {
    /// Caller-assigned task id of the accepted request
    pub task_id: i64,
    /// When the request was accepted into the queue
    pub received_at: DateTime<Utc>,
    /// Message about the operation
    pub message: String,
}

/// Queue listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskingListResponse {
    /// Queued requests in acceptance order
    pub requests: Vec<QueuedRequest>,
    /// Total count
    pub total: usize,
}

/// Response for a deleted tasking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskingResponse {
    /// Task id of the removed request
    pub task_id: i64,
    /// Message about the operation
    pub message: String,
}
