//! Seasonal climate estimate: monthly base and "feels like" temperatures.
//!
//! Base temperatures follow a cosine over the year whose mean and amplitude
//! depend on latitude, with a lapse-rate correction for altitude. The feels-like
//! value adds a boost when the early-afternoon sun hits the wall.

use std::f64::consts::PI;

use chrono::{NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;

use crate::core::{Error, Result};
use crate::engine::config::ClimateModelConfig;
use crate::engine::daily::local_instant;
use crate::engine::heading::{resolve_heading, target_azimuth};
use crate::solar::{SunPositionProvider, SunSample};
use crate::topo::{Route, Topo};

/// Month abbreviations, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Temperature estimate for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyClimatePoint {
    pub label: &'static str,
    pub base_temp: f64,
    pub feels_like_temp: f64,
}

impl MonthlyClimatePoint {
    #[inline]
    pub fn sun_boost(&self) -> f64 {
        self.feels_like_temp - self.base_temp
    }
}

/// Twelve monthly points, January to December.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalClimate {
    pub latitude: f64,
    pub months: Vec<MonthlyClimatePoint>,
}

/// Estimate the monthly climate of a wall for the given `year`.
///
/// Returns `Ok(None)` for topos without usable coordinates.
pub fn compute_seasonal_climate<P, Z>(
    provider: &P,
    config: &ClimateModelConfig,
    tz: &Z,
    topo: &Topo,
    route: Option<&Route>,
    year: i32,
) -> Result<Option<SeasonalClimate>>
where
    P: SunPositionProvider + ?Sized,
    Z: TimeZone,
{
    let Some(coords) = topo.geodata() else {
        return Ok(None);
    };

    let target = target_azimuth(resolve_heading(topo, route));
    let reference_time = NaiveTime::from_hms_opt(config.reference_hour, 0, 0)
        .ok_or_else(|| Error::LocalTime(format!("invalid hour {}", config.reference_hour)))?;

    let mut months = Vec::with_capacity(12);
    for (month, &label) in MONTH_LABELS.iter().enumerate() {
        let base = base_temperature(config, coords.latitude, topo.altitude, month);

        let day = NaiveDate::from_ymd_opt(year, month as u32 + 1, config.reference_day).ok_or_else(|| {
            Error::LocalTime(format!("no day {} in {}-{:02}", config.reference_day, year, month + 1))
        })?;
        let at = local_instant(tz, day.and_time(reference_time))?;
        let sun = provider.position(at, coords.latitude, coords.longitude)?;
        let boost = sun_boost(config, &sun, target);

        months.push(MonthlyClimatePoint {
            label,
            base_temp: base,
            feels_like_temp: base + boost,
        });
    }

    log::debug!(
        "Climate at {:.2}°: {:.1}°C .. {:.1}°C base",
        coords.latitude,
        months.iter().map(|m| m.base_temp).fold(f64::INFINITY, f64::min),
        months.iter().map(|m| m.base_temp).fold(f64::NEG_INFINITY, f64::max),
    );
    Ok(Some(SeasonalClimate {
        latitude: coords.latitude,
        months,
    }))
}

/// Base temperature in °C for calendar month `month` (0 = January).
///
/// The cosine bottoms out in January and peaks in July in the northern
/// hemisphere; southern latitudes are shifted by six months.
pub fn base_temperature(config: &ClimateModelConfig, latitude: f64, altitude: Option<f64>, month: usize) -> f64 {
    let abs_lat = latitude.abs();

    let mut yearly_mean = config.equator_mean - config.mean_per_latitude * abs_lat;
    if let Some(altitude) = altitude {
        yearly_mean -= altitude / 1000.0 * config.lapse_rate_per_km;
    }
    let yearly_amplitude = config.equator_amplitude + config.amplitude_per_latitude * abs_lat;

    let offset = if latitude < 0.0 { (month + 6) % 12 } else { month % 12 };
    yearly_mean - yearly_amplitude * (offset as f64 * PI / 6.0).cos()
}

/// Extra °C from direct sun on the wall. Zero unless the sun faces the wall
/// and stands above the boost altitude gate.
pub fn sun_boost(config: &ClimateModelConfig, sun: &SunSample, target: f64) -> f64 {
    let diff = sun.facing_difference(target);
    if diff >= config.facing_limit || sun.altitude_degrees() <= config.boost_min_altitude_deg {
        return 0.0;
    }
    let incidence = (sun.altitude.cos() * diff.cos()).max(0.0);
    config.max_sun_boost * incidence
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
