//! Sun placement on a sky sphere for 3D scenes.

use glam::DVec3;

use crate::solar::provider::SunSample;

/// Convert a sun sample into a point on a sky sphere of `radius`.
///
/// Target frame is Y-up, Z-south, X-east. With the provider's azimuth growing
/// towards west, a positive azimuth maps to negative X.
pub fn sun_to_render_vector(sample: &SunSample, radius: f64) -> DVec3 {
    let zenith = std::f64::consts::FRAC_PI_2 - sample.altitude;
    let azimuth = sample.azimuth_from_south;

    DVec3::new(
        -radius * zenith.sin() * azimuth.sin(),
        radius * zenith.cos(),
        radius * zenith.sin() * azimuth.cos(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn sample(azimuth_deg: f64, altitude_deg: f64) -> SunSample {
        SunSample {
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            azimuth_from_south: azimuth_deg.to_radians(),
            altitude: altitude_deg.to_radians(),
        }
    }

    fn vec3_approx_eq(a: DVec3, b: DVec3, eps: f64) -> bool {
        (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps
    }

    #[test]
    fn test_zenith_is_straight_up() {
        let v = sun_to_render_vector(&sample(37.0, 90.0), 15.0);
        assert!(vec3_approx_eq(v, DVec3::new(0.0, 15.0, 0.0), 1e-9), "{v}");
    }

    #[test]
    fn test_cardinal_points_on_horizon() {
        let south = sun_to_render_vector(&sample(0.0, 0.0), 15.0);
        assert!(vec3_approx_eq(south, DVec3::new(0.0, 0.0, 15.0), 1e-9), "{south}");

        let west = sun_to_render_vector(&sample(90.0, 0.0), 15.0);
        assert!(vec3_approx_eq(west, DVec3::new(-15.0, 0.0, 0.0), 1e-9), "{west}");

        let east = sun_to_render_vector(&sample(-90.0, 0.0), 15.0);
        assert!(vec3_approx_eq(east, DVec3::new(15.0, 0.0, 0.0), 1e-9), "{east}");
    }

    #[test]
    fn test_length_is_radius() {
        for (az, alt) in [(12.0, 30.0), (-140.0, 5.0), (170.0, -10.0)] {
            let v = sun_to_render_vector(&sample(az, alt), 15.0);
            assert!((v.length() - 15.0).abs() < 1e-9);
        }
    }
}
