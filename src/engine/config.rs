//! Engine configuration: scan windows, thresholds, and climate coefficients.

use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Full engine configuration. Every field has a default, so a JSON file only
/// needs to name the values it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IANA zone for local clock times (default: "Europe/Vienna").
    pub time_zone: String,

    // -- Sub-configs -------------------------------------------------------

    /// Daily exposure scans.
    pub daily: DailyScanConfig,
    /// Seasonal temperature model.
    pub climate: ClimateModelConfig,
    /// Sky sphere placement.
    pub sky: SkyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_zone: "Europe/Vienna".to_string(),
            daily: DailyScanConfig::default(),
            climate: ClimateModelConfig::default(),
            sky: SkyConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load a (possibly partial) configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Parse [`time_zone`](Self::time_zone).
    pub fn parse_time_zone(&self) -> Result<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| Error::TimeZone(self.time_zone.clone()))
    }
}

// ---------------------------------------------------------------------------
// Daily scan config
// ---------------------------------------------------------------------------

/// Configuration for the hourly chart and the fine sun-window scan.
///
/// The two altitude gates approximate the terrain horizon and are tuned
/// independently.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyScanConfig {
    /// First local hour scanned (default: 6).
    pub first_hour: u32,
    /// Last local hour scanned, inclusive (default: 21).
    pub last_hour: u32,
    /// Step of the fine window scan in minutes (default: 15).
    pub step_minutes: u32,
    /// Hourly chart: sun counts as up above this altitude, degrees (default: 5.0).
    pub chart_min_altitude_deg: f64,
    /// Fine scan: sun counts as up above this altitude, radians (default: 0.1).
    pub window_min_altitude_rad: f64,
    /// Largest facing difference that still hits the wall, radians (default: π/2).
    pub facing_limit: f64,
}

impl Default for DailyScanConfig {
    fn default() -> Self {
        Self {
            first_hour: 6,
            last_hour: 21,
            step_minutes: 15,
            chart_min_altitude_deg: 5.0,
            window_min_altitude_rad: 0.1,
            facing_limit: FRAC_PI_2,
        }
    }
}

// ---------------------------------------------------------------------------
// Climate config
// ---------------------------------------------------------------------------

/// Coefficients of the empirical monthly temperature model.
///
/// Tuned for daytime highs relevant to climbing, not meteorological accuracy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateModelConfig {
    /// Yearly mean at the equator, °C (default: 48.0).
    pub equator_mean: f64,
    /// Mean drop per degree of latitude (default: 0.7).
    pub mean_per_latitude: f64,
    /// Lapse rate, °C per 1000 m (default: 6.5).
    pub lapse_rate_per_km: f64,
    /// Seasonal amplitude at the equator, °C (default: 5.0).
    pub equator_amplitude: f64,
    /// Amplitude gain per degree of latitude (default: 0.2).
    pub amplitude_per_latitude: f64,
    /// Day of month sampled for the sun boost (default: 15).
    pub reference_day: u32,
    /// Local hour sampled for the sun boost (default: 13).
    pub reference_hour: u32,
    /// Sun must be above this altitude to warm the wall, degrees (default: 10.0).
    pub boost_min_altitude_deg: f64,
    /// Boost at normal incidence, °C (default: 15.0).
    pub max_sun_boost: f64,
    /// Largest facing difference that still warms the wall, radians (default: π/2).
    pub facing_limit: f64,
}

impl Default for ClimateModelConfig {
    fn default() -> Self {
        Self {
            equator_mean: 48.0,
            mean_per_latitude: 0.7,
            lapse_rate_per_km: 6.5,
            equator_amplitude: 5.0,
            amplitude_per_latitude: 0.2,
            reference_day: 15,
            reference_hour: 13,
            boost_min_altitude_deg: 10.0,
            max_sun_boost: 15.0,
            facing_limit: FRAC_PI_2,
        }
    }
}

// ---------------------------------------------------------------------------
// Sky config
// ---------------------------------------------------------------------------

/// Sky sphere used when placing the sun in a 3D scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// Sphere radius in scene units (default: 15.0).
    pub radius: f64,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self { radius: 15.0 }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
