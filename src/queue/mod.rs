//! Tasking queue: storage and service layer for accepted requests.
//!
//! The queue is the only stateful part of the crate. It follows the
//! repository pattern: a [`TaskingQueue`] trait abstracts storage, the
//! in-memory [`LocalQueue`] implements it behind a lock, and the
//! [`services`] module layers the business logic (validation gate,
//! well-formedness checks, logging) on top.
//!
//! Application code should go through the service layer:
//!
//! ```no_run
//! use sensor_tasking::limits::ObservatoryLimits;
//! use sensor_tasking::queue::{services, LocalQueue};
//!
//! # async fn example(request: sensor_tasking::models::TaskingRequest)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let queue = LocalQueue::new();
//! let platform = ObservatoryLimits::default();
//! match services::submit_request(&queue, &platform, request).await {
//!     Ok(entry) => println!("accepted {}", entry.task_id()),
//!     Err(rejection) => println!("rejected: {rejection}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod local;
pub mod repository;
pub mod services;

pub use local::LocalQueue;
pub use repository::{QueuedRequest, RepositoryError, RepositoryResult, TaskingQueue};
pub use services::SubmitError;
