//! Tasking request value objects.
//!
//! A tasking request is one observation ask: which modality to collect
//! (optical or passive RF), where to point, and the modality-specific
//! capture parameters. Requests are created by the caller, validated
//! against platform limits, and held in the tasking queue until collection
//! or explicit deletion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tasking request identifier (caller-assigned, unique within the queue).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn new(value: i64) -> Self {
        TaskId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collection modality of a tasking request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionType {
    #[serde(rename = "OPTICAL")]
    Optical,
    #[serde(rename = "PASSIVE_RF")]
    PassiveRf,
}

impl CollectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Optical => "optical",
            CollectionType::PassiveRf => "passive RF",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capture parameters for an optical collection.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalParameters {
    /// Detector gain setting.
    pub gain: f64,
    /// Exposure time in seconds.
    pub exposure_time: f64,
}

/// Capture parameters for a passive RF collection.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfParameters {
    /// Center frequency in Hz.
    pub center_frequency: f64,
    /// Bandwidth in Hz.
    pub bandwidth: f64,
    /// Receiver gain in dB.
    pub gain: f64,
}

/// One observation ask directed at the platform.
///
/// Exactly one parameter block is populated, and its kind must agree with
/// `collection_type`; [`TaskingRequest::is_well_formed`] checks that
/// invariant. The limit checkers trust it, the queue service enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskingRequest {
    pub task_id: TaskId,
    pub collection_type: CollectionType,
    /// Right ascension of the target, degrees.
    pub ra: f64,
    /// Declination of the target, degrees.
    pub dec: f64,
    /// Topocentric azimuth, degrees.
    pub az: f64,
    /// Topocentric elevation, degrees.
    pub el: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optical_parameters: Option<OpticalParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rf_parameters: Option<RfParameters>,
}

impl TaskingRequest {
    /// Whether the populated parameter block agrees with `collection_type`.
    pub fn is_well_formed(&self) -> bool {
        match self.collection_type {
            CollectionType::Optical => {
                self.optical_parameters.is_some() && self.rf_parameters.is_none()
            }
            CollectionType::PassiveRf => {
                self.rf_parameters.is_some() && self.optical_parameters.is_none()
            }
        }
    }
}
