//! Violation types raised by the limit checkers.
//!
//! Two distinct kinds are preserved end to end: an envelope violation means
//! a numeric field is outside the configured range ("out of range"); a
//! capability mismatch means the platform carries no sensor for the
//! requested modality ("wrong equipment"). Both are recoverable business
//! outcomes that the queue service translates into rejections.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::CollectionType;

/// Result type for limit checks.
pub type LimitResult<T> = Result<T, LimitViolation>;

/// The field or category named by an envelope violation.
///
/// Checks run in a fixed order per modality (gain then exposure for
/// optical; frequency, bandwidth, gain for RF) and short-circuit on the
/// first failure, so one check reports exactly one field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitField {
    OpticalGain,
    OpticalExposureTime,
    RfCenterFrequency,
    RfBandwidth,
    RfGain,
}

impl LimitField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitField::OpticalGain => "optical gain",
            LimitField::OpticalExposureTime => "optical exposure time",
            LimitField::RfCenterFrequency => "RF center frequency",
            LimitField::RfBandwidth => "RF bandwidth",
            LimitField::RfGain => "RF gain",
        }
    }
}

impl fmt::Display for LimitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Violation raised when a tasking request cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitViolation {
    /// A numeric parameter fell outside its configured envelope.
    #[error("{field} out of range")]
    EnvelopeViolation { field: LimitField },

    /// The platform has no limits configured for the requested modality,
    /// meaning the capability is not installed at all.
    #[error("{collection_type} collection not supported")]
    CapabilityMismatch { collection_type: CollectionType },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_violation_message_names_field() {
        let violation = LimitViolation::EnvelopeViolation {
            field: LimitField::RfBandwidth,
        };
        assert_eq!(violation.to_string(), "RF bandwidth out of range");
    }

    #[test]
    fn test_capability_mismatch_message() {
        let violation = LimitViolation::CapabilityMismatch {
            collection_type: CollectionType::Optical,
        };
        assert_eq!(violation.to_string(), "optical collection not supported");
    }
}
