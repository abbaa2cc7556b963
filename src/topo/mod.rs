//! Topo and route records.
//!
//! A topo is the 3D model of one climbing wall plus the routes drawn on it.
//! Records are read-only input to the exposure engine; see [`catalog`] for
//! loading them from the per-crag JSON layout.

pub mod catalog;

pub use catalog::{TopoCatalog, TopoPage};

use glam::DVec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// Geographic position of a wall. Serialized as `[longitude, latitude]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// `(0, 0)` marks a topo that was never georeferenced.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.longitude == 0.0 && self.latitude == 0.0
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self { longitude, latitude }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.longitude, c.latitude]
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A single route on a topo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Identifier, unique within its topo. Also the last segment of the route page path.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Facing direction in the wall's local model space. `y` is up and never
    /// contributes to the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<DVec3>,
}

impl Route {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, orientation: DVec3) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

// ---------------------------------------------------------------------------
// Topo
// ---------------------------------------------------------------------------

/// A climbing wall model with its routes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Base rotation of the 3D model in degrees.
    #[serde(default)]
    pub wall_azimuth: f64,
    /// Meters above sea level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Topo {
    /// Coordinates usable for sun queries. `None` when missing or the `(0, 0)` placeholder.
    pub fn geodata(&self) -> Option<Coordinates> {
        self.coordinates.filter(|c| !c.is_placeholder())
    }

    /// Look up a route by id.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topo_json() {
        let json = r#"{
            "name": "Nasenwand",
            "coordinates": [15.42, 48.39],
            "wallAzimuth": 135.5,
            "altitude": 420,
            "routes": [
                { "id": "kante", "orientation": [0.2, 0.1, -0.9] },
                { "id": "riss" }
            ],
            "unknownField": true
        }"#;
        let topo: Topo = serde_json::from_str(json).unwrap();
        assert_eq!(topo.name.as_deref(), Some("Nasenwand"));
        assert_eq!(topo.coordinates, Some(Coordinates::new(15.42, 48.39)));
        assert_eq!(topo.wall_azimuth, 135.5);
        assert_eq!(topo.altitude, Some(420.0));
        assert_eq!(topo.routes.len(), 2);
        assert_eq!(topo.routes[0].orientation, Some(DVec3::new(0.2, 0.1, -0.9)));
        assert!(topo.routes[1].orientation.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let topo: Topo = serde_json::from_str("{}").unwrap();
        assert_eq!(topo.wall_azimuth, 0.0);
        assert!(topo.coordinates.is_none());
        assert!(topo.altitude.is_none());
        assert!(topo.routes.is_empty());
    }

    #[test]
    fn test_placeholder_coordinates_have_no_geodata() {
        let topo = Topo {
            coordinates: Some(Coordinates::new(0.0, 0.0)),
            ..Default::default()
        };
        assert!(topo.geodata().is_none());

        let topo = Topo {
            coordinates: Some(Coordinates::new(0.0, 47.0)),
            ..Default::default()
        };
        assert!(topo.geodata().is_some());
    }

    #[test]
    fn test_coordinates_serialize_as_pair() {
        let json = serde_json::to_string(&Coordinates::new(11.3, 47.3)).unwrap();
        assert_eq!(json, "[11.3,47.3]");
    }

    #[test]
    fn test_route_lookup() {
        let topo = Topo {
            routes: vec![Route::new("a"), Route::new("b")],
            ..Default::default()
        };
        assert_eq!(topo.route("b").map(|r| r.id.as_str()), Some("b"));
        assert!(topo.route("c").is_none());
    }
}
