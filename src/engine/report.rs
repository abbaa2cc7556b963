//! Aggregated sun report for one topo or route page.

use serde::Serialize;

use crate::engine::daily::DailyExposure;
use crate::engine::direction::Direction;
use crate::engine::season::SeasonalClimate;

/// Everything the topo page shows about sun and temperature.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunReport {
    /// `None` for the topo as a whole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
    /// Compass heading in degrees.
    pub heading: f64,
    pub direction: Direction,
    pub sun: DailyExposure,
    pub climate: Option<SeasonalClimate>,
}
