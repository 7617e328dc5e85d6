//! High-level queue service layer.
//!
//! Repository-agnostic operations on the tasking queue. This is where
//! cross-cutting business logic lives: structural well-formedness checks,
//! the platform validation gate, and acceptance logging. The limit
//! checkers themselves stay pure; translation of violations into
//! user-facing rejections happens here.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, scheduler, tests)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - well-formedness gate                                 │
//! │  - ObservatoryLimits validation gate                    │
//! │  - acceptance/rejection logging                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  TaskingQueue trait (repository.rs)                     │
//! │  └── LocalQueue (in-memory)                             │
//! └─────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use log::{info, warn};

use super::repository::{QueuedRequest, RepositoryError, RepositoryResult, TaskingQueue};
use crate::limits::{LimitViolation, ObservatoryLimits};
use crate::models::{TaskId, TaskingRequest};

/// Why a submission did not make it into the queue.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request failed platform validation (envelope or capability).
    #[error("tasking request rejected: {0}")]
    Rejected(#[from] LimitViolation),

    /// The request was structurally inconsistent before validation.
    #[error("malformed tasking request: {0}")]
    Malformed(String),

    /// The queue backend failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Check whether the queue backend is healthy.
pub async fn health_check<Q: TaskingQueue + ?Sized>(queue: &Q) -> RepositoryResult<bool> {
    queue.health_check().await
}

/// Validate a tasking request against the platform and, if accepted,
/// place it in the queue.
///
/// The gate runs in order: structural well-formedness (the parameter block
/// must match the collection type), then the platform-level
/// [`ObservatoryLimits::violated_by`] check. Only requests that pass both
/// are stored; rejected requests surface the typed violation so the caller
/// can explain the refusal.
pub async fn submit_request<Q: TaskingQueue + ?Sized>(
    queue: &Q,
    platform: &ObservatoryLimits,
    request: TaskingRequest,
) -> Result<QueuedRequest, SubmitError> {
    if !request.is_well_formed() {
        return Err(SubmitError::Malformed(format!(
            "parameter block does not match collection type `{}`",
            request.collection_type
        )));
    }

    if let Err(violation) = platform.violated_by(&request) {
        warn!(
            "Rejecting tasking request {}: {}",
            request.task_id, violation
        );
        return Err(SubmitError::Rejected(violation));
    }

    let entry = QueuedRequest {
        received_at: Utc::now(),
        request,
    };
    queue.insert(entry.clone()).await?;
    info!(
        "Tasking request {} ({}) accepted into the queue",
        entry.task_id(),
        entry.request.collection_type
    );
    Ok(entry)
}

/// List all queued requests in acceptance order.
pub async fn list_requests<Q: TaskingQueue + ?Sized>(
    queue: &Q,
) -> RepositoryResult<Vec<QueuedRequest>> {
    queue.list().await
}

/// Fetch a queued request by task id.
pub async fn get_request<Q: TaskingQueue + ?Sized>(
    queue: &Q,
    task_id: TaskId,
) -> RepositoryResult<QueuedRequest> {
    queue.get(task_id).await
}

/// Remove a queued request by task id, returning the removed entry.
pub async fn delete_request<Q: TaskingQueue + ?Sized>(
    queue: &Q,
    task_id: TaskId,
) -> RepositoryResult<QueuedRequest> {
    let removed = queue.remove(task_id).await?;
    info!("Tasking request {task_id} deleted from the queue");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{LimitField, OpticalLimits};
    use crate::models::{CollectionType, OpticalParameters, RfParameters};
    use crate::queue::LocalQueue;

    fn platform() -> ObservatoryLimits {
        ObservatoryLimits::new(
            Some(OpticalLimits {
                limiting_magnitude: 16.5,
                min_gain: 1.0,
                max_gain: 10.0,
                min_exposure: 0.1,
                max_exposure: 5.0,
            }),
            None,
            None,
        )
    }

    fn optical_request(task_id: i64, gain: f64) -> TaskingRequest {
        TaskingRequest {
            task_id: TaskId::new(task_id),
            collection_type: CollectionType::Optical,
            ra: 120.0,
            dec: -15.0,
            az: 180.0,
            el: 45.0,
            optical_parameters: Some(OpticalParameters {
                gain,
                exposure_time: 2.0,
            }),
            rf_parameters: None,
        }
    }

    #[tokio::test]
    async fn test_submit_accepts_valid_request() {
        let queue = LocalQueue::new();
        let entry = submit_request(&queue, &platform(), optical_request(1, 5.0))
            .await
            .unwrap();
        assert_eq!(entry.task_id(), TaskId::new(1));
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_envelope_violation_without_storing() {
        let queue = LocalQueue::new();
        let err = submit_request(&queue, &platform(), optical_request(1, 15.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected(LimitViolation::EnvelopeViolation {
                field: LimitField::OpticalGain,
            })
        ));
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_capability_mismatch() {
        let queue = LocalQueue::new();
        let rf_only = ObservatoryLimits::default();
        let err = submit_request(&queue, &rf_only, optical_request(1, 5.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected(LimitViolation::CapabilityMismatch {
                collection_type: CollectionType::Optical,
            })
        ));
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_malformed_request_before_validation() {
        let queue = LocalQueue::new();
        let mut request = optical_request(1, 5.0);
        request.optical_parameters = None;
        request.rf_parameters = Some(RfParameters {
            center_frequency: 1.5e9,
            bandwidth: 5.0e6,
            gain: 10.0,
        });
        let err = submit_request(&queue, &platform(), request).await.unwrap_err();
        assert!(matches!(err, SubmitError::Malformed(_)));
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_submit_duplicate_id_surfaces_repository_error() {
        let queue = LocalQueue::new();
        submit_request(&queue, &platform(), optical_request(1, 5.0))
            .await
            .unwrap();
        let err = submit_request(&queue, &platform(), optical_request(1, 6.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Repository(RepositoryError::DuplicateTask(_))
        ));
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let queue = LocalQueue::new();
        submit_request(&queue, &platform(), optical_request(1, 5.0))
            .await
            .unwrap();
        delete_request(&queue, TaskId::new(1)).await.unwrap();
        assert!(matches!(
            get_request(&queue, TaskId::new(1)).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
