//! Platform-level limit aggregate.

use serde::{Deserialize, Serialize};

use super::error::{LimitResult, LimitViolation};
use super::optical::OpticalLimits;
use super::pointing::PointingLimits;
use super::rf::RfLimits;
use crate::models::{CollectionType, TaskingRequest};

/// The complete set of limits installed on a platform.
///
/// `None` for a limit type means the platform does not carry that
/// capability at all, not that the capability is unconstrained.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservatoryLimits {
    pub eo_limits: Option<OpticalLimits>,
    pub rf_limits: Option<RfLimits>,
    pub pointing_limits: Option<PointingLimits>,
}

impl ObservatoryLimits {
    pub fn new(
        eo_limits: Option<OpticalLimits>,
        rf_limits: Option<RfLimits>,
        pointing_limits: Option<PointingLimits>,
    ) -> Self {
        Self {
            eo_limits,
            rf_limits,
            pointing_limits,
        }
    }

    /// Check a tasking request against every limit configured on the
    /// platform.
    ///
    /// Order matters: envelope checks run before the capability gate, so a
    /// request whose modality is installed gets range-checked even when the
    /// other modality is absent. Violations from the per-modality checkers
    /// propagate untouched; a request whose own modality has no configured
    /// limits fails with [`LimitViolation::CapabilityMismatch`].
    ///
    /// Requests are trusted to carry the parameter block matching their
    /// modality (the queue service enforces that before handing them down);
    /// an absent block is skipped, not diagnosed, here.
    pub fn violated_by(&self, request: &TaskingRequest) -> LimitResult<()> {
        if request.collection_type == CollectionType::Optical {
            if let Some(eo) = &self.eo_limits {
                if let Some(params) = &request.optical_parameters {
                    eo.violated_by(params)?;
                }
            }
        }
        if request.collection_type == CollectionType::PassiveRf {
            if let Some(rf) = &self.rf_limits {
                if let Some(params) = &request.rf_parameters {
                    rf.violated_by(params)?;
                }
            }
        }
        if let Some(pointing) = &self.pointing_limits {
            pointing.violated_by(request.az, request.el)?;
        }

        match request.collection_type {
            CollectionType::Optical if self.eo_limits.is_none() => {
                Err(LimitViolation::CapabilityMismatch {
                    collection_type: CollectionType::Optical,
                })
            }
            CollectionType::PassiveRf if self.rf_limits.is_none() => {
                Err(LimitViolation::CapabilityMismatch {
                    collection_type: CollectionType::PassiveRf,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OpticalParameters, RfParameters, TaskId};

    fn optical_limits() -> OpticalLimits {
        OpticalLimits {
            limiting_magnitude: 16.5,
            min_gain: 1.0,
            max_gain: 10.0,
            min_exposure: 0.1,
            max_exposure: 5.0,
        }
    }

    fn rf_limits() -> RfLimits {
        RfLimits {
            min_frequency: 1.0e9,
            max_frequency: 2.0e9,
            min_bandwidth: 1.0e6,
            max_bandwidth: 1.0e7,
            min_gain: 0.0,
            max_gain: 20.0,
        }
    }

    fn pointing_limits() -> PointingLimits {
        PointingLimits {
            min_az: 0.0,
            max_az: 360.0,
            min_el: 10.0,
            max_el: 90.0,
            sun_exclusion_angle: 30.0,
            moon_exclusion_angle: 10.0,
        }
    }

    fn optical_request(gain: f64, exposure_time: f64) -> TaskingRequest {
        TaskingRequest {
            task_id: TaskId::new(1),
            collection_type: CollectionType::Optical,
            ra: 120.0,
            dec: -15.0,
            az: 180.0,
            el: 45.0,
            optical_parameters: Some(OpticalParameters {
                gain,
                exposure_time,
            }),
            rf_parameters: None,
        }
    }

    fn rf_request(center_frequency: f64, bandwidth: f64, gain: f64) -> TaskingRequest {
        TaskingRequest {
            task_id: TaskId::new(2),
            collection_type: CollectionType::PassiveRf,
            ra: 300.0,
            dec: 40.0,
            az: 90.0,
            el: 30.0,
            optical_parameters: None,
            rf_parameters: Some(RfParameters {
                center_frequency,
                bandwidth,
                gain,
            }),
        }
    }

    #[test]
    fn test_full_platform_accepts_valid_optical() {
        let platform = ObservatoryLimits::new(
            Some(optical_limits()),
            Some(rf_limits()),
            Some(pointing_limits()),
        );
        assert!(platform.violated_by(&optical_request(5.0, 2.0)).is_ok());
    }

    #[test]
    fn test_envelope_violation_propagates() {
        let platform = ObservatoryLimits::new(Some(optical_limits()), None, None);
        assert_eq!(
            platform.violated_by(&optical_request(15.0, 2.0)),
            Err(LimitViolation::EnvelopeViolation {
                field: crate::limits::LimitField::OpticalGain,
            })
        );
    }

    #[test]
    fn test_optical_request_on_rf_only_platform() {
        let platform = ObservatoryLimits::new(None, Some(rf_limits()), None);
        assert_eq!(
            platform.violated_by(&optical_request(5.0, 2.0)),
            Err(LimitViolation::CapabilityMismatch {
                collection_type: CollectionType::Optical,
            })
        );
    }

    #[test]
    fn test_rf_request_on_rf_only_platform() {
        let platform = ObservatoryLimits::new(None, Some(rf_limits()), None);
        assert!(platform.violated_by(&rf_request(1.5e9, 5.0e6, 10.0)).is_ok());
    }

    #[test]
    fn test_rf_request_on_optical_only_platform() {
        let platform = ObservatoryLimits::new(Some(optical_limits()), None, None);
        assert_eq!(
            platform.violated_by(&rf_request(1.5e9, 5.0e6, 10.0)),
            Err(LimitViolation::CapabilityMismatch {
                collection_type: CollectionType::PassiveRf,
            })
        );
    }

    #[test]
    fn test_pointing_checked_regardless_of_modality() {
        // Pointing limits are configured but the placeholder never
        // violates, so wild az/el still passes the gate.
        let mut request = rf_request(1.5e9, 5.0e6, 10.0);
        request.az = -500.0;
        request.el = 999.0;
        let platform = ObservatoryLimits::new(None, Some(rf_limits()), Some(pointing_limits()));
        assert!(platform.violated_by(&request).is_ok());
    }

    #[test]
    fn test_envelope_checked_before_capability_gate() {
        // Optical capability installed, RF absent: an out-of-range optical
        // request reports the envelope violation, not any mismatch.
        let platform = ObservatoryLimits::new(Some(optical_limits()), None, None);
        assert_eq!(
            platform.violated_by(&optical_request(5.0, 99.0)),
            Err(LimitViolation::EnvelopeViolation {
                field: crate::limits::LimitField::OpticalExposureTime,
            })
        );
    }

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let platform = ObservatoryLimits::new(Some(optical_limits()), None, None);
        let request = optical_request(15.0, 2.0);
        assert_eq!(platform.violated_by(&request), platform.violated_by(&request));
    }
}
