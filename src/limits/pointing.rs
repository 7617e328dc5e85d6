//! Mechanical / line-of-sight pointing envelope.

use serde::{Deserialize, Serialize};

use super::error::LimitResult;

/// Pointing envelope for a sensor or platform. All angles in degrees.
///
/// The envelope is stored for configuration completeness, but
/// [`PointingLimits::violated_by`] is an always-pass placeholder: neither
/// the az/el bounds nor the sun/moon exclusion angles are evaluated yet.
/// Replacing that method is the seam where real exclusion geometry goes;
/// until then every pointing passes, and callers rely on that.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointingLimits {
    /// Minimum azimuth, degrees.
    pub min_az: f64,
    /// Maximum azimuth, degrees.
    pub max_az: f64,
    /// Minimum elevation, degrees.
    pub min_el: f64,
    /// Maximum elevation, degrees.
    pub max_el: f64,
    /// Minimum angular separation from the sun, degrees.
    pub sun_exclusion_angle: f64,
    /// Minimum angular separation from the moon, degrees.
    pub moon_exclusion_angle: f64,
}

impl PointingLimits {
    /// Check a topocentric azimuth/elevation pointing against this
    /// envelope.
    ///
    /// Not yet implemented: reports no violation for any input.
    pub fn violated_by(&self, _az: f64, _el: f64) -> LimitResult<()> {
        Ok(())
    }
}
