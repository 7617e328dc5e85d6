//! Optical collection envelope.

use serde::{Deserialize, Serialize};

use super::error::{LimitField, LimitResult, LimitViolation};
use crate::models::OpticalParameters;

/// Operating envelope for an optical sensor.
///
/// All fields must be supplied together; partial envelopes are not
/// supported. Immutable after construction.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalLimits {
    /// Limiting magnitude of the sensor. Reserved: stored but not yet
    /// evaluated by any check.
    pub limiting_magnitude: f64,
    /// Minimum detector gain.
    pub min_gain: f64,
    /// Maximum detector gain.
    pub max_gain: f64,
    /// Minimum exposure time, seconds.
    pub min_exposure: f64,
    /// Maximum exposure time, seconds.
    pub max_exposure: f64,
}

impl OpticalLimits {
    /// Check optical capture parameters against this envelope.
    ///
    /// Gain is checked strictly before exposure time; the first field out
    /// of range short-circuits with a
    /// [`LimitViolation::EnvelopeViolation`] naming it, and the remaining
    /// field is not evaluated.
    pub fn violated_by(&self, params: &OpticalParameters) -> LimitResult<()> {
        if params.gain < self.min_gain || params.gain > self.max_gain {
            return Err(LimitViolation::EnvelopeViolation {
                field: LimitField::OpticalGain,
            });
        }
        if params.exposure_time < self.min_exposure || params.exposure_time > self.max_exposure {
            return Err(LimitViolation::EnvelopeViolation {
                field: LimitField::OpticalExposureTime,
            });
        }
        Ok(())
    }
}
