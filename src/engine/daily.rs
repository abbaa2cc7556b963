//! Daily sun exposure: hourly chart and sun-window text.
//!
//! Two independent scans over the same local day. The hourly scan feeds the
//! chart; the finer scan finds the first and last moment the sun hits the
//! wall. Each has its own altitude gate standing in for the terrain horizon.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::core::{Error, Result};
use crate::engine::config::DailyScanConfig;
use crate::engine::heading::{resolve_heading, target_azimuth};
use crate::solar::{SunPositionProvider, SunSample};
use crate::topo::{Coordinates, Route, Topo};

/// Window text when the topo has no usable coordinates.
pub const NO_GEODATA_TEXT: &str = "Keine Geodaten";
/// Window text when no scanned instant puts the wall in sun.
pub const SHADOW_ALL_DAY_TEXT: &str = "Schatten den ganzen Tag";

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Sun/shadow state of one hourly sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureTone {
    /// Sun is up and hits the wall.
    Sunny,
    /// Sun is up but behind the wall.
    Shady,
    /// Sun is below the altitude gate.
    LowLight,
}

impl ExposureTone {
    /// Chart color.
    pub fn color(self) -> &'static str {
        match self {
            ExposureTone::Sunny => "#fbbf24",
            ExposureTone::Shady => "#9ca3af",
            ExposureTone::LowLight => "#e5e7eb",
        }
    }

    /// Condition text shown next to the chart bar.
    pub fn condition(self) -> &'static str {
        match self {
            ExposureTone::Sunny => "Sonne",
            ExposureTone::Shady => "Schatten",
            ExposureTone::LowLight => "Tiefstehende Sonne",
        }
    }
}

/// One hourly chart sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureFrame {
    /// Local hour, e.g. `"14"`.
    pub label: String,
    /// Sun altitude in degrees, clamped to `>= 0`.
    pub altitude_degrees: f64,
    pub tone: ExposureTone,
    pub color: &'static str,
    pub condition: &'static str,
}

impl ExposureFrame {
    pub fn new(hour: u32, altitude_degrees: f64, tone: ExposureTone) -> Self {
        Self {
            label: hour.to_string(),
            altitude_degrees: altitude_degrees.max(0.0),
            tone,
            color: tone.color(),
            condition: tone.condition(),
        }
    }
}

/// Hourly chart series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureChart {
    pub frames: Vec<ExposureFrame>,
    /// Number of frames in [`ExposureTone::Sunny`].
    pub sunny_hours: usize,
}

impl ExposureChart {
    pub fn new(frames: Vec<ExposureFrame>) -> Self {
        let sunny_hours = frames.iter().filter(|f| f.tone == ExposureTone::Sunny).count();
        Self { frames, sunny_hours }
    }
}

/// When the wall is in sun during the day. Displays as the window text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum SunWindow {
    NoGeodata,
    ShadowAllDay,
    /// First and last sunlit scan instants, local clock time.
    Sunlit { first: NaiveTime, last: NaiveTime },
}

impl fmt::Display for SunWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SunWindow::NoGeodata => f.write_str(NO_GEODATA_TEXT),
            SunWindow::ShadowAllDay => f.write_str(SHADOW_ALL_DAY_TEXT),
            SunWindow::Sunlit { first, last } => {
                write!(f, "{} - {}", first.format("%H:%M"), last.format("%H:%M"))
            }
        }
    }
}

impl From<SunWindow> for String {
    fn from(window: SunWindow) -> Self {
        window.to_string()
    }
}

/// Result of a daily exposure query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyExposure {
    #[serde(rename = "hours")]
    pub window: SunWindow,
    /// `None` when the topo has no geodata.
    pub chart: Option<ExposureChart>,
}

impl DailyExposure {
    pub fn no_geodata() -> Self {
        Self {
            window: SunWindow::NoGeodata,
            chart: None,
        }
    }

    /// Window text, e.g. `"09:15 - 15:45"`.
    pub fn hours_text(&self) -> String {
        self.window.to_string()
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the hourly chart and sun window for `today` in zone `tz`.
///
/// Topos without usable coordinates short-circuit to [`DailyExposure::no_geodata`]
/// without querying the provider. Provider errors are returned as-is.
pub fn compute_daily_exposure<P, Z>(
    provider: &P,
    config: &DailyScanConfig,
    tz: &Z,
    topo: &Topo,
    route: Option<&Route>,
    today: NaiveDate,
) -> Result<DailyExposure>
where
    P: SunPositionProvider + ?Sized,
    Z: TimeZone,
{
    let Some(coords) = topo.geodata() else {
        return Ok(DailyExposure::no_geodata());
    };

    let target = target_azimuth(resolve_heading(topo, route));
    let frames = hourly_frames(provider, config, tz, coords, target, today)?;
    let window = sun_window(provider, config, tz, coords, target, today)?;

    log::debug!("Sun window on {}: {}", today, window);
    Ok(DailyExposure {
        window,
        chart: Some(ExposureChart::new(frames)),
    })
}

/// Classify one hourly sample from its altitude (degrees) and facing difference (radians).
pub fn classify_hour(config: &DailyScanConfig, altitude_degrees: f64, facing_difference: f64) -> ExposureTone {
    let is_up = altitude_degrees > config.chart_min_altitude_deg;
    let is_facing = facing_difference < config.facing_limit;
    match (is_up, is_facing) {
        (true, true) => ExposureTone::Sunny,
        (true, false) => ExposureTone::Shady,
        (false, _) => ExposureTone::LowLight,
    }
}

/// Whether a fine-scan sample puts the wall in sun.
pub fn is_in_sun(config: &DailyScanConfig, sun: &SunSample, target: f64) -> bool {
    sun.facing_difference(target) < config.facing_limit && sun.altitude > config.window_min_altitude_rad
}

fn hourly_frames<P, Z>(
    provider: &P,
    config: &DailyScanConfig,
    tz: &Z,
    coords: Coordinates,
    target: f64,
    today: NaiveDate,
) -> Result<Vec<ExposureFrame>>
where
    P: SunPositionProvider + ?Sized,
    Z: TimeZone,
{
    (config.first_hour..=config.last_hour)
        .map(|hour| {
            let at = local_instant(tz, today.and_time(hour_time(hour)?))?;
            let sun = provider.position(at, coords.latitude, coords.longitude)?;
            let altitude = sun.altitude_degrees();
            let tone = classify_hour(config, altitude, sun.facing_difference(target));
            Ok(ExposureFrame::new(hour, altitude, tone))
        })
        .collect()
}

fn sun_window<P, Z>(
    provider: &P,
    config: &DailyScanConfig,
    tz: &Z,
    coords: Coordinates,
    target: f64,
    today: NaiveDate,
) -> Result<SunWindow>
where
    P: SunPositionProvider + ?Sized,
    Z: TimeZone,
{
    let end = today.and_time(hour_time(config.last_hour)?);
    let step = Duration::minutes(i64::from(config.step_minutes.max(1)));

    let mut first = None;
    let mut last = None;
    let mut local = today.and_time(hour_time(config.first_hour)?);
    while local <= end {
        let sun = provider.position(local_instant(tz, local)?, coords.latitude, coords.longitude)?;
        if is_in_sun(config, &sun, target) {
            if first.is_none() {
                first = Some(local.time());
            }
            last = Some(local.time());
        }
        local += step;
    }

    Ok(match (first, last) {
        (Some(first), Some(last)) => SunWindow::Sunlit { first, last },
        _ => SunWindow::ShadowAllDay,
    })
}

fn hour_time(hour: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| Error::LocalTime(format!("invalid hour {hour}")))
}

/// UTC instant of a local wall-clock time. Ambiguous times resolve to the
/// earlier instant; times skipped by a DST change are an error.
pub(crate) fn local_instant<Z: TimeZone>(tz: &Z, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::LocalTime(format!("{local} does not exist in the configured time zone")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
