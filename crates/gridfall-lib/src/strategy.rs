//! Per-map jump-distance rules.
//!
//! [`classify`] is a pure function of the map, the target point, and the
//! perpendicular distance from target to flight path. The first matching rule
//! wins: Sanhok override, Karakin override, special zones, then the generic
//! size-based rule.

use serde::Serialize;

use crate::geometry::Point;
use crate::maps::MapId;

/// Default jump distance on 8x8 maps.
pub const JUMP_DISTANCE_8X8: f64 = 800.0;

/// Default jump distance on smaller maps (Paramo and friends).
pub const JUMP_DISTANCE_SMALL: f64 = 600.0;

/// Sanhok always uses an extended glide from 1200 m out.
pub const JUMP_DISTANCE_SANHOK: f64 = 1200.0;

/// Karakin: jump at 500 m, fly horizontal, dive late.
pub const JUMP_DISTANCE_KARAKIN: f64 = 500.0;

/// Jump distance inside a configured special zone.
pub const SPECIAL_JUMP_DISTANCE: f64 = 600.0;

/// Maximum horizontal distance coverable with a slow glide.
pub const MAX_GLIDE_DISTANCE: f64 = 1200.0;

pub const DIVE_DISTANCE_SANHOK: f64 = 100.0;
pub const DIVE_DISTANCE_KARAKIN: f64 = 115.0;
pub const DIVE_DISTANCE_DEFAULT: f64 = 120.0;

/// Mutually exclusive classification of a single drop-planning attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropStrategy {
    /// Jump at the map's standard distance and dive straight in.
    Standard,
    /// Target is beyond the standard band; jump abeam and glide slowly.
    SlowGlide,
    /// Sanhok extended-glide technique.
    Sanhok,
    /// Karakin low-ceiling technique.
    Karakin,
    /// Target is inside a configured special zone.
    Special,
    /// Target cannot be reached from this flight path.
    TooFar,
}

/// Outcome of rule classification: the jump distance to aim for and the
/// technique it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JumpRule {
    /// Jump distance in meters. For glide strategies this is the
    /// perpendicular distance itself.
    pub distance_m: f64,
    pub strategy: DropStrategy,
}

/// Select the jump-distance rule for a drop on `map` targeting `target`.
///
/// `perp_distance_m` is the perpendicular distance from the target to the
/// flight path in meters, when known; the unknown case defaults toward the
/// map's standard rule.
pub fn classify(map: MapId, target: &Point, perp_distance_m: Option<f64>) -> JumpRule {
    if map == MapId::Sanhok {
        return JumpRule {
            distance_m: JUMP_DISTANCE_SANHOK,
            strategy: DropStrategy::Sanhok,
        };
    }

    if map == MapId::Karakin {
        if let Some(perp) = perp_distance_m {
            if perp > JUMP_DISTANCE_KARAKIN {
                if perp > MAX_GLIDE_DISTANCE {
                    return JumpRule {
                        distance_m: perp,
                        strategy: DropStrategy::TooFar,
                    };
                }
                return JumpRule {
                    distance_m: perp,
                    strategy: DropStrategy::SlowGlide,
                };
            }
        }
        return JumpRule {
            distance_m: JUMP_DISTANCE_KARAKIN,
            strategy: DropStrategy::Karakin,
        };
    }

    let in_special_zone = map.special_zones().iter().any(|zone| zone.contains(target));
    if in_special_zone {
        match perp_distance_m {
            // The 600 m rule only applies when the path passes close enough;
            // otherwise fall through to the generic distance checks.
            Some(perp) if perp <= SPECIAL_JUMP_DISTANCE => {
                return JumpRule {
                    distance_m: SPECIAL_JUMP_DISTANCE,
                    strategy: DropStrategy::Special,
                };
            }
            Some(_) => {}
            None => {
                return JumpRule {
                    distance_m: SPECIAL_JUMP_DISTANCE,
                    strategy: DropStrategy::Special,
                };
            }
        }
    }

    let standard_distance = if map.size_meters() >= 8000.0 {
        JUMP_DISTANCE_8X8
    } else {
        JUMP_DISTANCE_SMALL
    };

    if let Some(perp) = perp_distance_m {
        if perp > MAX_GLIDE_DISTANCE {
            return JumpRule {
                distance_m: perp,
                strategy: DropStrategy::TooFar,
            };
        }
        if perp > standard_distance {
            return JumpRule {
                distance_m: perp,
                strategy: DropStrategy::SlowGlide,
            };
        }
    }

    JumpRule {
        distance_m: standard_distance,
        strategy: DropStrategy::Standard,
    }
}

/// Dive distance in meters for the given map.
pub fn dive_distance_m(map: MapId) -> f64 {
    match map {
        MapId::Sanhok => DIVE_DISTANCE_SANHOK,
        MapId::Karakin => DIVE_DISTANCE_KARAKIN,
        _ => DIVE_DISTANCE_DEFAULT,
    }
}
