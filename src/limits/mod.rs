//! Operating limits and platform-level request validation.
//!
//! This is the decision core of the crate. Each limit type owns a fixed
//! numeric envelope constructed once at startup and immutable thereafter,
//! and exposes a single `violated_by` predicate. [`ObservatoryLimits`]
//! composes them into the platform-level acceptance gate.
//!
//! Every check is a pure function of its inputs and the frozen envelope:
//! no I/O, no logging, no interior state. Checkers are safe to call
//! concurrently from any number of request handlers.

pub mod error;
pub mod observatory;
pub mod optical;
pub mod pointing;
pub mod rf;

pub use error::{LimitField, LimitResult, LimitViolation};
pub use observatory::ObservatoryLimits;
pub use optical::OpticalLimits;
pub use pointing::PointingLimits;
pub use rf::RfLimits;
