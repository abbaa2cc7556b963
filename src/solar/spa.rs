//! Default sun position provider backed by the NREL Solar Position Algorithm.

use chrono::{DateTime, Datelike, Utc};
use solar_positioning::{spa, time::DeltaT};

use crate::core::{Error, Result};
use crate::solar::provider::{SunPositionProvider, SunSample};

/// SPA provider without refraction correction.
///
/// The SPA reports azimuth in degrees clockwise from north; this provider
/// shifts it by 180° into the south-referenced radian convention.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpaSunProvider {
    /// Observer elevation in meters.
    elevation: f64,
}

impl SpaSunProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elevation(elevation: f64) -> Self {
        Self { elevation }
    }

    /// Observer elevation in meters.
    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }
}

impl SunPositionProvider for SpaSunProvider {
    fn position(&self, at: DateTime<Utc>, latitude: f64, longitude: f64) -> Result<SunSample> {
        let delta_t = DeltaT::estimate_from_date(at.year(), at.month())
            .map_err(|e| Error::SunPosition(e.to_string()))?;
        let pos = spa::solar_position(at, latitude, longitude, self.elevation, delta_t, None)
            .map_err(|e| Error::SunPosition(e.to_string()))?;

        Ok(SunSample {
            timestamp: at,
            azimuth_from_south: (pos.azimuth() - 180.0).to_radians(),
            altitude: pos.elevation_angle().to_radians(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const INNSBRUCK: (f64, f64) = (47.3, 11.3);

    #[test]
    fn test_solar_noon_is_south() {
        // Solar noon in Innsbruck is about 11:16 UTC around the June solstice
        let at = Utc.with_ymd_and_hms(2024, 6, 21, 11, 16, 0).unwrap();
        let s = SpaSunProvider::new().position(at, INNSBRUCK.0, INNSBRUCK.1).unwrap();
        assert!(s.azimuth_from_south.to_degrees().abs() < 5.0, "azimuth {}", s.azimuth_from_south.to_degrees());
        // Max altitude = 90 - 47.3 + 23.44
        assert!((s.altitude_degrees() - 66.1).abs() < 1.0, "altitude {}", s.altitude_degrees());
    }

    #[test]
    fn test_morning_sun_is_east() {
        let at = Utc.with_ymd_and_hms(2024, 6, 21, 5, 0, 0).unwrap();
        let s = SpaSunProvider::new().position(at, INNSBRUCK.0, INNSBRUCK.1).unwrap();
        assert!(s.azimuth_from_south < 0.0);
        assert!(s.altitude > 0.0);
    }

    #[test]
    fn test_night_below_horizon() {
        let at = Utc.with_ymd_and_hms(2024, 12, 21, 23, 0, 0).unwrap();
        let s = SpaSunProvider::new().position(at, INNSBRUCK.0, INNSBRUCK.1).unwrap();
        assert!(s.altitude < 0.0);
    }

    #[test]
    fn test_elevation_barely_moves_the_sun() {
        let at = Utc.with_ymd_and_hms(2024, 6, 21, 9, 0, 0).unwrap();
        let valley = SpaSunProvider::new().position(at, INNSBRUCK.0, INNSBRUCK.1).unwrap();
        let summit = SpaSunProvider::with_elevation(2500.0).position(at, INNSBRUCK.0, INNSBRUCK.1).unwrap();
        assert_eq!(SpaSunProvider::with_elevation(2500.0).elevation(), 2500.0);
        // Only parallax changes with elevation, far below 0.01°
        assert!((summit.altitude_degrees() - valley.altitude_degrees()).abs() < 0.01);
        assert!((summit.azimuth_from_south - valley.azimuth_from_south).abs().to_degrees() < 0.01);
    }

    #[test]
    fn test_invalid_latitude_is_error() {
        let at = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let err = SpaSunProvider::new().position(at, 123.0, 11.3).unwrap_err();
        assert!(matches!(err, Error::SunPosition(_)));
    }
}
