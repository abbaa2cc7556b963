//! Sun position provider abstraction.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Utc};

use crate::core::Result;

/// Sun position at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunSample {
    pub timestamp: DateTime<Utc>,
    /// Radians clockwise from south, west positive.
    pub azimuth_from_south: f64,
    /// Radians above the horizon (negative below).
    pub altitude: f64,
}

impl SunSample {
    #[inline]
    pub fn altitude_degrees(&self) -> f64 {
        self.altitude.to_degrees()
    }

    /// Angular distance between the sun and `target_azimuth` (same convention),
    /// wrapped into `[0, π]`.
    pub fn facing_difference(&self, target_azimuth: f64) -> f64 {
        let diff = (self.azimuth_from_south - target_azimuth).rem_euclid(TAU);
        if diff > PI { TAU - diff } else { diff }
    }
}

/// Source of sun positions for a place and time.
///
/// Implementations must be side-effect free. Errors (invalid coordinates,
/// dates outside the supported range) are returned, never swallowed.
pub trait SunPositionProvider: Send + Sync {
    fn position(&self, at: DateTime<Utc>, latitude: f64, longitude: f64) -> Result<SunSample>;
}

impl<F> SunPositionProvider for F
where
    F: Fn(DateTime<Utc>, f64, f64) -> Result<SunSample> + Send + Sync,
{
    fn position(&self, at: DateTime<Utc>, latitude: f64, longitude: f64) -> Result<SunSample> {
        self(at, latitude, longitude)
    }
}

/// Provider that reports the same sun position for every query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSun {
    pub azimuth_from_south: f64,
    pub altitude: f64,
}

impl FixedSun {
    pub fn new(azimuth_from_south: f64, altitude: f64) -> Self {
        Self { azimuth_from_south, altitude }
    }

    pub fn from_degrees(azimuth_from_south: f64, altitude: f64) -> Self {
        Self::new(azimuth_from_south.to_radians(), altitude.to_radians())
    }
}

impl SunPositionProvider for FixedSun {
    fn position(&self, at: DateTime<Utc>, _latitude: f64, _longitude: f64) -> Result<SunSample> {
        Ok(SunSample {
            timestamp: at,
            azimuth_from_south: self.azimuth_from_south,
            altitude: self.altitude,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
