//! Passive RF collection envelope.

use serde::{Deserialize, Serialize};

use super::error::{LimitField, LimitResult, LimitViolation};
use crate::models::RfParameters;

/// Operating envelope for a passive RF sensor.
///
/// All fields must be supplied together; partial envelopes are not
/// supported. Immutable after construction.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfLimits {
    /// Minimum tunable center frequency, Hz.
    pub min_frequency: f64,
    /// Maximum tunable center frequency, Hz.
    pub max_frequency: f64,
    /// Minimum capture bandwidth, Hz.
    pub min_bandwidth: f64,
    /// Maximum capture bandwidth, Hz.
    pub max_bandwidth: f64,
    /// Minimum receiver gain, dB.
    pub min_gain: f64,
    /// Maximum receiver gain, dB.
    pub max_gain: f64,
}

impl RfLimits {
    /// Check RF capture parameters against this envelope.
    ///
    /// Fields are checked in fixed order: center frequency, then
    /// bandwidth, then gain. The first field out of range short-circuits
    /// with a [`LimitViolation::EnvelopeViolation`] naming it.
    pub fn violated_by(&self, params: &RfParameters) -> LimitResult<()> {
        if params.center_frequency < self.min_frequency
            || params.center_frequency > self.max_frequency
        {
            return Err(LimitViolation::EnvelopeViolation {
                field: LimitField::RfCenterFrequency,
            });
        }
        if params.bandwidth < self.min_bandwidth || params.bandwidth > self.max_bandwidth {
            return Err(LimitViolation::EnvelopeViolation {
                field: LimitField::RfBandwidth,
            });
        }
        if params.gain < self.min_gain || params.gain > self.max_gain {
            return Err(LimitViolation::EnvelopeViolation {
                field: LimitField::RfGain,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn limits() -> RfLimits {
        RfLimits {
            min_frequency: 1.0e9,
            max_frequency: 2.0e9,
            min_bandwidth: 1.0e6,
            max_bandwidth: 1.0e7,
            min_gain: 0.0,
            max_gain: 20.0,
        }
    }

    #[test]
    fn test_in_range_parameters_pass() {
        let params = RfParameters {
            center_frequency: 1.5e9,
            bandwidth: 5.0e6,
            gain: 10.0,
        };
        assert!(limits().violated_by(&params).is_ok());
    }

    #[test]
    fn test_frequency_out_of_range() {
        let params = RfParameters {
            center_frequency: 3.0e9,
            bandwidth: 5.0e6,
            gain: 10.0,
        };
        assert_eq!(
            limits().violated_by(&params),
            Err(LimitViolation::EnvelopeViolation {
                field: LimitField::RfCenterFrequency,
            })
        );
    }

    #[test]
    fn test_bandwidth_out_of_range() {
        let params = RfParameters {
            center_frequency: 1.5e9,
            bandwidth: 5.0e7,
            gain: 10.0,
        };
        assert_eq!(
            limits().violated_by(&params),
            Err(LimitViolation::EnvelopeViolation {
                field: LimitField::RfBandwidth,
            })
        );
    }

    #[test]
    fn test_gain_out_of_range() {
        let params = RfParameters {
            center_frequency: 1.5e9,
            bandwidth: 5.0e6,
            gain: 30.0,
        };
        assert_eq!(
            limits().violated_by(&params),
            Err(LimitViolation::EnvelopeViolation {
                field: LimitField::RfGain,
            })
        );
    }

    proptest! {
        /// When several fields are invalid, only the first in check order
        /// (frequency, bandwidth, gain) is reported.
        #[test]
        fn prop_frequency_reported_before_later_fields(
            bandwidth in -1.0e8f64..1.0e8,
            gain in -100.0f64..100.0,
        ) {
            let params = RfParameters { center_frequency: 5.0e9, bandwidth, gain };
            prop_assert_eq!(
                limits().violated_by(&params),
                Err(LimitViolation::EnvelopeViolation { field: LimitField::RfCenterFrequency })
            );
        }

        /// With a valid frequency, bandwidth is reported before gain.
        #[test]
        fn prop_bandwidth_reported_before_gain(gain in -100.0f64..100.0) {
            let params = RfParameters { center_frequency: 1.5e9, bandwidth: 0.0, gain };
            prop_assert_eq!(
                limits().violated_by(&params),
                Err(LimitViolation::EnvelopeViolation { field: LimitField::RfBandwidth })
            );
        }
    }
}
