//! Per-sensor-instance compatibility layer.
//!
//! A [`Sensor`] is one physical or logical instrument installed on the
//! platform, distinct from the platform-wide [`ObservatoryLimits`]
//! aggregate: it holds exactly one modality's limits plus an optional
//! pointing envelope, and answers "can I personally service this request?"
//! as a plain boolean. Unlike the aggregate, compatibility checking never
//! raises: an out-of-range parameter is a normal "no" for sensor
//! selection, so envelope violations are translated to `false` here.
//!
//! [`ObservatoryLimits`]: crate::limits::ObservatoryLimits

use serde::{Deserialize, Serialize};

use crate::limits::{OpticalLimits, PointingLimits, RfLimits};
use crate::models::{CollectionType, TaskingRequest};

/// An optical sensor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalSensor {
    pub name: String,
    pub optical_limits: OpticalLimits,
    pub pointing_limits: Option<PointingLimits>,
}

impl OpticalSensor {
    /// Whether this sensor can service the given tasking request.
    pub fn check_compatibility(&self, request: &TaskingRequest) -> bool {
        if request.collection_type != CollectionType::Optical {
            return false;
        }
        let Some(params) = &request.optical_parameters else {
            return false;
        };
        if self.optical_limits.violated_by(params).is_err() {
            return false;
        }
        match &self.pointing_limits {
            // No pointing limits: the sensor is assumed free to point anywhere.
            None => true,
            Some(pointing) => pointing.violated_by(request.ra, request.dec).is_ok(),
        }
    }

    /// Begin collecting data for an already-compatible request.
    ///
    /// Trust boundary: performs no validation. The caller is responsible
    /// for gating on [`OpticalSensor::check_compatibility`] first.
    pub fn collect(&self, request: &TaskingRequest) {
        log::info!(
            "Collecting optical data for tasking request {} with sensor {}",
            request.task_id,
            self.name
        );
    }
}

/// A passive RF sensor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfSensor {
    pub name: String,
    pub rf_limits: RfLimits,
    pub pointing_limits: Option<PointingLimits>,
}

impl RfSensor {
    /// Whether this sensor can service the given tasking request.
    pub fn check_compatibility(&self, request: &TaskingRequest) -> bool {
        if request.collection_type != CollectionType::PassiveRf {
            return false;
        }
        let Some(params) = &request.rf_parameters else {
            return false;
        };
        if self.rf_limits.violated_by(params).is_err() {
            return false;
        }
        match &self.pointing_limits {
            None => true,
            Some(pointing) => pointing.violated_by(request.ra, request.dec).is_ok(),
        }
    }

    /// Begin collecting data for an already-compatible request.
    ///
    /// Trust boundary: performs no validation. The caller is responsible
    /// for gating on [`RfSensor::check_compatibility`] first.
    pub fn collect(&self, request: &TaskingRequest) {
        log::info!(
            "Collecting RF data for tasking request {} with sensor {}",
            request.task_id,
            self.name
        );
    }
}

/// A sensor instance of either modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sensor {
    Optical(OpticalSensor),
    Rf(RfSensor),
}

impl Sensor {
    pub fn name(&self) -> &str {
        match self {
            Sensor::Optical(sensor) => &sensor.name,
            Sensor::Rf(sensor) => &sensor.name,
        }
    }

    /// Modality this sensor collects.
    pub fn collection_type(&self) -> CollectionType {
        match self {
            Sensor::Optical(_) => CollectionType::Optical,
            Sensor::Rf(_) => CollectionType::PassiveRf,
        }
    }

    /// Whether this sensor can service the given tasking request.
    pub fn check_compatibility(&self, request: &TaskingRequest) -> bool {
        match self {
            Sensor::Optical(sensor) => sensor.check_compatibility(request),
            Sensor::Rf(sensor) => sensor.check_compatibility(request),
        }
    }

    /// Begin collecting data for an already-compatible request. See the
    /// per-variant `collect` for the trust boundary.
    pub fn collect(&self, request: &TaskingRequest) {
        match self {
            Sensor::Optical(sensor) => sensor.collect(request),
            Sensor::Rf(sensor) => sensor.collect(request),
        }
    }
}
