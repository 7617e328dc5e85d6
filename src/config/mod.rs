//! Startup configuration for the tasking platform.
//!
//! The platform's operating limits and sensor inventory are described in a
//! TOML file, loaded once at startup, and frozen into [`ObservatoryLimits`]
//! and [`Sensor`] values for the lifetime of the process.
//!
//! ```toml
//! [platform.optical]        # section absent = capability not installed
//! limiting_magnitude = 16.5
//! min_gain = 1.0
//! max_gain = 10.0
//! min_exposure = 0.1
//! max_exposure = 5.0
//!
//! [platform.rf]
//! min_frequency = 1.0e9
//! max_frequency = 2.0e9
//! min_bandwidth = 1.0e6
//! max_bandwidth = 1.0e7
//! min_gain = 0.0
//! max_gain = 20.0
//!
//! [[sensors]]
//! type = "optical"
//! name = "eo-01"
//! limiting_magnitude = 16.5
//! min_gain = 1.0
//! max_gain = 10.0
//! min_exposure = 0.1
//! max_exposure = 5.0
//! ```
//!
//! Every field of a modality section is required; a partial envelope is a
//! parse error, not a default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::limits::{ObservatoryLimits, OpticalLimits, PointingLimits, RfLimits};
use crate::sensors::{OpticalSensor, RfSensor, Sensor};

/// Root of the platform configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub platform: PlatformSection,
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

/// Platform-level limit sections. Absent sections mean the capability is
/// not installed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSection {
    pub optical: Option<OpticalLimits>,
    pub rf: Option<RfLimits>,
    pub pointing: Option<PointingLimits>,
}

/// One sensor instance in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SensorConfig {
    Optical {
        name: String,
        #[serde(flatten)]
        limits: OpticalLimits,
        pointing: Option<PointingLimits>,
    },
    Rf {
        name: String,
        #[serde(flatten)]
        limits: RfLimits,
        pointing: Option<PointingLimits>,
    },
}

impl PlatformConfig {
    /// Load platform configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read platform config: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse platform config: {}", path.display()))
    }

    /// Parse platform configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid platform config TOML")
    }

    /// The platform-level limit aggregate described by this configuration.
    pub fn observatory_limits(&self) -> ObservatoryLimits {
        ObservatoryLimits::new(
            self.platform.optical,
            self.platform.rf,
            self.platform.pointing,
        )
    }

    /// The sensor inventory described by this configuration.
    pub fn sensors(&self) -> Vec<Sensor> {
        self.sensors.iter().map(SensorConfig::to_sensor).collect()
    }

    /// Development fallback used when no config file is supplied: one
    /// optical and one RF sensor with permissive envelopes and no pointing
    /// limits.
    pub fn default_dev() -> Self {
        let optical = OpticalLimits {
            limiting_magnitude: 16.5,
            min_gain: 1.0,
            max_gain: 10.0,
            min_exposure: 0.1,
            max_exposure: 5.0,
        };
        let rf = RfLimits {
            min_frequency: 1.0e9,
            max_frequency: 2.0e9,
            min_bandwidth: 1.0e6,
            max_bandwidth: 1.0e7,
            min_gain: 0.0,
            max_gain: 20.0,
        };
        Self {
            platform: PlatformSection {
                optical: Some(optical),
                rf: Some(rf),
                pointing: None,
            },
            sensors: vec![
                SensorConfig::Optical {
                    name: "eo-01".to_string(),
                    limits: optical,
                    pointing: None,
                },
                SensorConfig::Rf {
                    name: "rf-01".to_string(),
                    limits: rf,
                    pointing: None,
                },
            ],
        }
    }
}

impl SensorConfig {
    pub fn to_sensor(&self) -> Sensor {
        match self {
            SensorConfig::Optical {
                name,
                limits,
                pointing,
            } => Sensor::Optical(OpticalSensor {
                name: name.clone(),
                optical_limits: *limits,
                pointing_limits: *pointing,
            }),
            SensorConfig::Rf {
                name,
                limits,
                pointing,
            } => Sensor::Rf(RfSensor {
                name: name.clone(),
                rf_limits: *limits,
                pointing_limits: *pointing,
            }),
        }
    }
}
