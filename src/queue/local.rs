//! In-memory tasking queue.
//!
//! Stores all entries in a lock-guarded map keyed by task id, with an
//! insertion-order index so listings are deterministic. Suitable for the
//! running service (the queue is not persisted across restarts) as well as
//! for unit tests that need fast, isolated storage.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::repository::{QueuedRequest, RepositoryError, RepositoryResult, TaskingQueue};
use crate::models::TaskId;

/// In-memory queue backend.
#[derive(Clone)]
pub struct LocalQueue {
    data: Arc<RwLock<QueueData>>,
}

struct QueueData {
    entries: HashMap<TaskId, QueuedRequest>,
    /// Task ids in acceptance order.
    order: Vec<TaskId>,
    is_healthy: bool,
}

impl LocalQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(QueueData {
                entries: HashMap::new(),
                order: Vec::new(),
                is_healthy: true,
            })),
        }
    }

    /// Number of queued requests.
    pub fn len(&self) -> usize {
        self.data.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().entries.is_empty()
    }

    /// Force the health flag, for exercising failure paths in tests.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }
}

impl Default for LocalQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskingQueue for LocalQueue {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert(&self, entry: QueuedRequest) -> RepositoryResult<()> {
        let mut data = self.data.write();
        let task_id = entry.task_id();
        if data.entries.contains_key(&task_id) {
            return Err(RepositoryError::DuplicateTask(task_id));
        }
        data.order.push(task_id);
        data.entries.insert(task_id, entry);
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<QueuedRequest>> {
        let data = self.data.read();
        Ok(data
            .order
            .iter()
            .filter_map(|task_id| data.entries.get(task_id).cloned())
            .collect())
    }

    async fn get(&self, task_id: TaskId) -> RepositoryResult<QueuedRequest> {
        self.data
            .read()
            .entries
            .get(&task_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("tasking request {task_id}")))
    }

    async fn remove(&self, task_id: TaskId) -> RepositoryResult<QueuedRequest> {
        let mut data = self.data.write();
        match data.entries.remove(&task_id) {
            Some(entry) => {
                data.order.retain(|id| *id != task_id);
                Ok(entry)
            }
            None => Err(RepositoryError::NotFound(format!(
                "tasking request {task_id}"
            ))),
        }
    }
}
