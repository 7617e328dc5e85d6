//! # Sensor Tasking Validation Service
//!
//! Validates tasking requests (observation asks directed at optical or
//! passive RF sensors) against per-sensor and per-platform operating limits
//! before accepting them into a collection queue. The crate exposes a REST
//! API via axum for submitting and managing queued requests.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Tasking request value objects and parameter blocks
//! - [`limits`]: Envelope checkers and the platform-level acceptance gate
//! - [`sensors`]: Per-sensor-instance compatibility layer
//! - [`config`]: TOML platform configuration loaded at startup
//! - [`queue`]: Repository pattern storage and the queue service layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Validation model
//!
//! Limit evaluation is pure and synchronous: each check is a function of
//! the request and an envelope frozen at startup, safe to run concurrently
//! without locking. Two rejection kinds are kept distinct end to end:
//! an envelope violation ("out of range") and a capability mismatch
//! ("wrong equipment"). The queue is the only shared mutable state and
//! serializes access internally.

pub mod config;
pub mod limits;
pub mod models;
pub mod queue;
pub mod sensors;

#[cfg(feature = "http-server")]
pub mod http;
