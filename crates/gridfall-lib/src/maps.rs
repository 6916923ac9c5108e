//! Static map catalog: map sizes, special drop zones, and display helpers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Minimum similarity score for a map name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Identifier for a supported battleground map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapId {
    Erangel,
    Miramar,
    Taego,
    Deston,
    Rondo,
    Vikendi,
    Sanhok,
    Paramo,
    Karakin,
}

impl MapId {
    /// All supported maps, in catalog order.
    pub const ALL: [MapId; 9] = [
        MapId::Erangel,
        MapId::Miramar,
        MapId::Taego,
        MapId::Deston,
        MapId::Rondo,
        MapId::Vikendi,
        MapId::Sanhok,
        MapId::Paramo,
        MapId::Karakin,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            MapId::Erangel => "Erangel",
            MapId::Miramar => "Miramar",
            MapId::Taego => "Taego",
            MapId::Deston => "Deston",
            MapId::Rondo => "Rondo",
            MapId::Vikendi => "Vikendi",
            MapId::Sanhok => "Sanhok",
            MapId::Paramo => "Paramo",
            MapId::Karakin => "Karakin",
        }
    }

    /// Side length of the playable square in meters.
    pub fn size_meters(&self) -> f64 {
        match self {
            MapId::Erangel
            | MapId::Miramar
            | MapId::Taego
            | MapId::Deston
            | MapId::Rondo
            | MapId::Vikendi => 8000.0,
            MapId::Sanhok => 4000.0,
            MapId::Paramo => 3000.0,
            MapId::Karakin => 2000.0,
        }
    }

    /// Special drop zones configured for this map, if any.
    pub fn special_zones(&self) -> &'static [SpecialZone] {
        SPECIAL_ZONES.get(self).map(|zones| zones.as_slice()).unwrap_or(&[])
    }

    /// Resolve a user-supplied map name, case-insensitively.
    ///
    /// Unknown names produce an [`Error::UnknownMap`] carrying fuzzy
    /// suggestions for likely typos.
    pub fn parse(name: &str) -> Result<MapId> {
        for map in MapId::ALL {
            if map.name().eq_ignore_ascii_case(name) {
                return Ok(map);
            }
        }
        Err(Error::UnknownMap {
            name: name.to_string(),
            suggestions: fuzzy_map_matches(name, 3),
        })
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MapId::parse(s)
    }
}

/// Elliptical zone where a dedicated jump-distance rule applies.
///
/// Membership test: `((dx / radius_x)^2 + (dy / radius_y)^2) <= 1` in
/// normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecialZone {
    pub name: &'static str,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl SpecialZone {
    /// Whether `point` lies inside (or on the boundary of) the ellipse.
    pub fn contains(&self, point: &Point) -> bool {
        let nx = (point.x - self.center.x) / self.radius_x;
        let ny = (point.y - self.center.y) / self.radius_y;
        nx * nx + ny * ny <= 1.0
    }
}

/// Half a grid cell on an 8x8 map (500 m), the default zone radius.
const HALF_CELL_8X8: f64 = 0.0625;

// Zone centers use grid-cell coordinates: cell center = (index + 0.5) / 8.
static SPECIAL_ZONES: Lazy<HashMap<MapId, Vec<SpecialZone>>> = Lazy::new(|| {
    HashMap::from([
        (
            MapId::Erangel,
            vec![
                SpecialZone {
                    name: "Stalber",
                    center: Point::new(0.6875, 0.1875),
                    radius_x: HALF_CELL_8X8,
                    radius_y: HALF_CELL_8X8,
                },
                // Prison sits in a bay; the zone is squeezed vertically by 30%.
                SpecialZone {
                    name: "Prison",
                    center: Point::new(0.77, 0.52),
                    radius_x: HALF_CELL_8X8,
                    radius_y: 0.04375,
                },
            ],
        ),
        (
            MapId::Miramar,
            vec![
                SpecialZone {
                    name: "Chumacera",
                    center: Point::new(0.3125, 0.6875),
                    radius_x: HALF_CELL_8X8,
                    radius_y: HALF_CELL_8X8,
                },
                SpecialZone {
                    name: "Power Grid",
                    center: Point::new(0.4375, 0.4375),
                    radius_x: HALF_CELL_8X8,
                    radius_y: HALF_CELL_8X8,
                },
            ],
        ),
        (
            MapId::Deston,
            vec![SpecialZone {
                name: "Turrita",
                center: Point::new(0.3125, 0.4375),
                radius_x: HALF_CELL_8X8,
                radius_y: HALF_CELL_8X8,
            }],
        ),
    ])
});

/// Rank catalog names by similarity to `input` and return the closest few.
fn fuzzy_map_matches(input: &str, limit: usize) -> Vec<String> {
    let needle = input.to_lowercase();
    let mut scored: Vec<(f64, &'static str)> = MapId::ALL
        .iter()
        .map(|map| {
            let score = strsim::jaro_winkler(&needle, &map.name().to_lowercase());
            (score, map.name())
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Round a distance for display: to the meter up to 800 m, to 50 m beyond.
pub fn round_display_distance(meters: f64) -> f64 {
    if meters <= 800.0 {
        meters.round()
    } else {
        (meters / 50.0).round() * 50.0
    }
}
