//! Queue repository trait for abstracting tasking-request storage.
//!
//! The trait defines the storage interface for the tasking queue, allowing
//! different backends (in-memory, database) to be swapped via dependency
//! injection. Only the in-memory backend exists today; the trait is the
//! seam a persistent one would plug into.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{TaskId, TaskingRequest};

/// Result type for queue repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for queue repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// A tasking request held in the queue, stamped at acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedRequest {
    pub request: TaskingRequest,
    /// When the request was accepted into the queue.
    pub received_at: DateTime<Utc>,
}

impl QueuedRequest {
    pub fn task_id(&self) -> TaskId {
        self.request.task_id
    }
}

/// Storage interface for the tasking queue.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` and must serialize concurrent
/// insert/list/fetch/remove operations so ids stay unique and updates are
/// never lost.
///
/// # Error Handling
/// All methods return [`RepositoryResult<T>`] wrapping either the expected
/// value or a [`RepositoryError`] describing what went wrong.
#[async_trait]
pub trait TaskingQueue: Send + Sync {
    /// Check whether the backing store is reachable and healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert an accepted request into the queue.
    ///
    /// Fails with [`RepositoryError::DuplicateTask`] if an entry with the
    /// same task id already exists; the existing entry is left untouched.
    async fn insert(&self, entry: QueuedRequest) -> RepositoryResult<()>;

    /// List all queued requests in acceptance order.
    async fn list(&self) -> RepositoryResult<Vec<QueuedRequest>>;

    /// Fetch a queued request by task id.
    ///
    /// Fails with [`RepositoryError::NotFound`] if no entry has that id.
    async fn get(&self, task_id: TaskId) -> RepositoryResult<QueuedRequest>;

    /// Remove a queued request by task id, returning the removed entry.
    ///
    /// Fails with [`RepositoryError::NotFound`] if no entry has that id.
    async fn remove(&self, task_id: TaskId) -> RepositoryResult<QueuedRequest>;
}
