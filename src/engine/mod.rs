//! Sun exposure and seasonal climate engine.
//!
//! Resolves which way a wall faces, samples the sun over a day, and estimates
//! monthly temperatures. The main entry point is [`SunExposureEngine`], which
//! bundles an [`EngineConfig`] with a [`SunPositionProvider`]. All queries are
//! pure; one engine can serve any number of threads.

pub mod config;
pub mod daily;
pub mod direction;
pub mod heading;
pub mod report;
pub mod season;

// Re-exports
pub use config::{ClimateModelConfig, DailyScanConfig, EngineConfig, SkyConfig};
pub use daily::{DailyExposure, ExposureChart, ExposureFrame, ExposureTone, SunWindow};
pub use direction::{label_direction, Direction};
pub use heading::{resolve_heading, resolve_orientation};
pub use report::SunReport;
pub use season::{MonthlyClimatePoint, SeasonalClimate};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use rayon::prelude::*;

use crate::core::{DVec3, Result};
use crate::solar::{sun_to_render_vector, SpaSunProvider, SunPositionProvider};
use crate::topo::{Route, Topo};

// ---------------------------------------------------------------------------
// SunExposureEngine
// ---------------------------------------------------------------------------

/// Exposure engine. Holds only immutable configuration and the provider.
pub struct SunExposureEngine<P = SpaSunProvider> {
    config: EngineConfig,
    time_zone: Tz,
    provider: P,
}

impl SunExposureEngine<SpaSunProvider> {
    /// Engine backed by the SPA provider.
    pub fn with_spa(config: EngineConfig) -> Result<Self> {
        Self::new(config, SpaSunProvider::new())
    }

    /// Engine backed by the SPA provider, observing from the topo's altitude
    /// (sea level when the topo has none).
    pub fn with_spa_for(config: EngineConfig, topo: &Topo) -> Result<Self> {
        let elevation = topo.altitude.unwrap_or(0.0);
        Self::new(config, SpaSunProvider::with_elevation(elevation))
    }
}

impl<P: SunPositionProvider> SunExposureEngine<P> {
    /// Create an engine. Fails if the configured time zone is unknown.
    pub fn new(config: EngineConfig, provider: P) -> Result<Self> {
        let time_zone = config.parse_time_zone()?;
        Ok(Self {
            config,
            time_zone,
            provider,
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Current date in the engine's time zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }

    /// Compass heading in degrees, `[0, 360)`.
    pub fn heading(&self, topo: &Topo, route: Option<&Route>) -> f64 {
        resolve_heading(topo, route)
    }

    /// Eight-point direction label.
    pub fn direction(&self, topo: &Topo, route: Option<&Route>) -> Direction {
        label_direction(topo, route)
    }

    /// Hourly chart and sun window for `today` (local date).
    pub fn daily_exposure(&self, topo: &Topo, route: Option<&Route>, today: NaiveDate) -> Result<DailyExposure> {
        daily::compute_daily_exposure(&self.provider, &self.config.daily, &self.time_zone, topo, route, today)
    }

    /// Monthly base and feels-like temperatures for `year`.
    pub fn seasonal_climate(&self, topo: &Topo, route: Option<&Route>, year: i32) -> Result<Option<SeasonalClimate>> {
        season::compute_seasonal_climate(&self.provider, &self.config.climate, &self.time_zone, topo, route, year)
    }

    /// Sun position on the configured sky sphere.
    pub fn sky_vector(&self, at: DateTime<Utc>, latitude: f64, longitude: f64) -> Result<DVec3> {
        let sun = self.provider.position(at, latitude, longitude)?;
        Ok(sun_to_render_vector(&sun, self.config.sky.radius))
    }

    /// Full report for a topo page (`route = None`) or a route page.
    pub fn report(&self, topo: &Topo, route: Option<&Route>, today: NaiveDate) -> Result<SunReport> {
        let heading = self.heading(topo, route);
        Ok(SunReport {
            route_id: route.map(|r| r.id.clone()),
            heading,
            direction: Direction::from_heading(heading),
            sun: self.daily_exposure(topo, route, today)?,
            climate: self.seasonal_climate(topo, route, today.year())?,
        })
    }

    /// One report per route, computed in parallel, in route order.
    pub fn report_routes(&self, topo: &Topo, today: NaiveDate) -> Result<Vec<SunReport>> {
        log::debug!("Building reports for {} routes", topo.routes.len());
        topo.routes
            .par_iter()
            .map(|route| self.report(topo, Some(route), today))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
