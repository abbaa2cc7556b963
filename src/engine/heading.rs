//! Wall heading resolution.
//!
//! A topo's 3D model is rotated by `wall_azimuth`; routes carry facing vectors
//! in the model's local space. Undoing the model rotation on the XZ plane gives
//! a world-space vector, read as a compass bearing with world -Z as north and
//! world +X as east.

use glam::DVec3;

use crate::topo::{Route, Topo};

/// Facing vector for the query, in model space.
///
/// The route's own orientation wins. Otherwise the component-wise mean of all
/// route orientations on the topo, or `None` when no route has one.
pub fn resolve_orientation(topo: &Topo, route: Option<&Route>) -> Option<DVec3> {
    if let Some(orientation) = route.and_then(|r| r.orientation) {
        return Some(orientation);
    }

    let (sum, count) = topo
        .routes
        .iter()
        .filter_map(|r| r.orientation)
        .fold((DVec3::ZERO, 0usize), |(sum, count), o| (sum + o, count + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Compass heading of the wall (or route) in degrees, in `[0, 360)`.
///
/// Without any orientation vector the heading is the model's `wall_azimuth`.
pub fn resolve_heading(topo: &Topo, route: Option<&Route>) -> f64 {
    let Some(orientation) = resolve_orientation(topo, route) else {
        return normalize_degrees(topo.wall_azimuth);
    };

    let theta = (-topo.wall_azimuth).to_radians();
    let (sin, cos) = theta.sin_cos();
    // y is the model's up axis and plays no part in the bearing
    let rx = orientation.x * cos - orientation.z * sin;
    let rz = orientation.x * sin + orientation.z * cos;

    let heading = normalize_degrees(rx.atan2(-rz).to_degrees());
    log::debug!(
        "Heading {:.1}° from orientation {} (wall azimuth {:.1}°)",
        heading,
        orientation,
        topo.wall_azimuth
    );
    heading
}

/// Sun-provider azimuth (south-referenced, radians) the wall faces.
#[inline]
pub fn target_azimuth(heading: f64) -> f64 {
    (heading - 180.0).to_radians()
}

fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
