//! HTTP server module for the tasking service.
//!
//! Axum-based REST surface over the queue service layer. This is thin
//! plumbing by design: request parsing, JSON serialization, and status-code
//! mapping live here; every acceptance decision is made by the limits core
//! and the queue service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - request parsing, JSON (de)serialization               │
//! │  - CORS, compression, trace, error mapping               │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (queue::services)                         │
//! │  - well-formedness + platform validation gate            │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Queue (TaskingQueue trait / LocalQueue)                 │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
