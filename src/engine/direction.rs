//! Eight-point compass labels for wall headings.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::engine::heading::resolve_heading;
use crate::topo::{Route, Topo};

/// Compass direction a wall faces, clockwise from north in 45° steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Nearest direction for a heading in degrees.
    pub fn from_heading(heading: f64) -> Self {
        let index = (heading / 45.0).round().rem_euclid(8.0) as usize;
        Self::ALL[index % 8]
    }

    /// Position in [`ALL`](Self::ALL).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label (German, as shown on the topo pages).
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "Nord",
            Direction::NorthEast => "Nord-Ost",
            Direction::East => "Ost",
            Direction::SouthEast => "Süd-Ost",
            Direction::South => "Süd",
            Direction::SouthWest => "Süd-West",
            Direction::West => "West",
            Direction::NorthWest => "Nord-West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Direction the topo (or one of its routes) faces.
pub fn label_direction(topo: &Topo, route: Option<&Route>) -> Direction {
    Direction::from_heading(resolve_heading(topo, route))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_labels_clockwise() {
        let labels: Vec<_> = (0..8).map(|i| Direction::from_heading(i as f64 * 45.0).label()).collect();
        assert_eq!(
            labels,
            ["Nord", "Nord-Ost", "Ost", "Süd-Ost", "Süd", "Süd-West", "West", "Nord-West"]
        );
    }

    #[test]
    fn test_rounding_boundaries() {
        assert_eq!(Direction::from_heading(22.4), Direction::North);
        assert_eq!(Direction::from_heading(22.5), Direction::NorthEast);
        assert_eq!(Direction::from_heading(337.5), Direction::North);
        assert_eq!(Direction::from_heading(359.9), Direction::North);
        assert_eq!(Direction::from_heading(200.0), Direction::South);
    }

    #[test]
    fn test_index_matches_rounded_heading() {
        for h in 0..360 {
            let d = Direction::from_heading(h as f64);
            assert!(d.index() < 8);
            assert_eq!(d.index(), ((h as f64) / 45.0).round() as usize % 8);
        }
    }

    #[test]
    fn test_label_direction_from_topo() {
        let topo = Topo {
            wall_azimuth: 0.0,
            routes: vec![Route::new("a").with_orientation(DVec3::new(1.0, 2.0, 0.0))],
            ..Default::default()
        };
        assert_eq!(label_direction(&topo, None), Direction::East);
        assert_eq!(label_direction(&topo, None).to_string(), "Ost");
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Direction::SouthWest).unwrap(), "\"Süd-West\"");
    }
}
