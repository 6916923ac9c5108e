//! Drop trajectory planner.
//!
//! Closed-form geometry only: the jump point is where the flight line crosses
//! a circle of the rule distance around the destination, the dive point is a
//! fixed offset back along the approach. No flight dynamics are simulated.

use serde::Serialize;

use crate::geometry::Point;
use crate::maps::MapId;
use crate::strategy::{classify, dive_distance_m, DropStrategy, MAX_GLIDE_DISTANCE};

/// Inputs for a single drop-planning attempt.
#[derive(Debug, Clone, Copy)]
pub struct DropRequest {
    pub map: MapId,
    /// First endpoint of the plane's flight path.
    pub plane_start: Point,
    /// Second endpoint of the plane's flight path.
    pub plane_end: Point,
    /// Intended landing spot.
    pub destination: Point,
}

/// Planned jump and dive points for a drop, plus the metrics behind them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DropPlan {
    pub jump_point: Point,
    pub dive_point: Point,
    /// Closest point on the flight line to the destination.
    pub perp_point: Point,
    /// Distance from the jump point to the destination, in meters.
    pub distance_to_target_m: f64,
    /// Perpendicular distance from the flight line to the destination, in meters.
    pub perp_distance_m: f64,
    /// Jump distance prescribed by the matched rule, in meters.
    pub rule_distance_m: f64,
    /// `false` when the destination cannot be reached from this flight path.
    pub reachable: bool,
    pub strategy: DropStrategy,
}

/// Compute jump and dive points for `request`.
///
/// Returns `None` for a zero-length flight path (no direction to project
/// onto) and when the flight line never comes within the rule distance ahead
/// of the plane (both circle intersections behind the start point).
pub fn plan_drop(request: &DropRequest) -> Option<DropPlan> {
    let DropRequest {
        map,
        plane_start,
        plane_end,
        destination,
    } = *request;
    let map_size = map.size_meters();

    let direction = plane_end.sub(&plane_start).normalized()?;

    // Unclamped projection of the destination onto the flight line.
    let perp_point = perpendicular_point(&plane_start, &direction, &destination);
    let perp_distance_m = perp_point.distance_to(&destination) * map_size;

    let rule = classify(map, &destination, Some(perp_distance_m));
    tracing::debug!(
        map = %map,
        strategy = ?rule.strategy,
        rule_distance_m = rule.distance_m,
        perp_distance_m,
        "classified drop"
    );

    let (jump_point, reachable) = match rule.strategy {
        // Glide strategies jump abeam the target; TooFar still reports the
        // best-effort point.
        DropStrategy::SlowGlide | DropStrategy::TooFar => {
            (perp_point, rule.strategy != DropStrategy::TooFar)
        }
        _ => {
            let radius = rule.distance_m / map_size;
            match jump_point_at_distance(&plane_start, &direction, &destination, radius) {
                CircleCrossing::At(point) => (point, true),
                CircleCrossing::Missed => {
                    // The circle never meets the line; jump abeam instead.
                    tracing::debug!(
                        perp_distance_m,
                        "no intersection at rule distance, falling back to perpendicular point"
                    );
                    (perp_point, perp_distance_m <= MAX_GLIDE_DISTANCE)
                }
                // Both crossings lie behind the plane; the flight is heading
                // away from the destination and no jump point exists.
                CircleCrossing::Behind => return None,
            }
        }
    };

    let dive_offset = dive_distance_m(map) / map_size;
    let dive_point = match destination.sub(&jump_point).normalized() {
        Some(approach) => destination.sub(&approach.scale(dive_offset)),
        // Jump point coincides with the destination; dive on the spot.
        None => destination,
    };

    Some(DropPlan {
        jump_point,
        dive_point,
        perp_point,
        distance_to_target_m: jump_point.distance_to(&destination) * map_size,
        perp_distance_m,
        rule_distance_m: rule.distance_m,
        reachable,
        strategy: rule.strategy,
    })
}

/// Closest point on the infinite line through `origin` along `direction` to
/// `target`. Scalar projection, not clamped to the segment.
fn perpendicular_point(origin: &Point, direction: &Point, target: &Point) -> Point {
    let t = target.sub(origin).dot(direction);
    origin.add(&direction.scale(t))
}

/// Outcome of intersecting the flight line with the rule-distance circle.
enum CircleCrossing {
    /// Earliest crossing at or ahead of the origin.
    At(Point),
    /// The line never reaches the circle (negative discriminant).
    Missed,
    /// Both crossings lie strictly behind the origin.
    Behind,
}

/// Earliest point on the flight line at exactly `radius` from `destination`.
///
/// Solves `|origin + t*direction - destination| = radius` for `t` and prefers
/// the smallest non-negative root (first jump opportunity).
fn jump_point_at_distance(
    origin: &Point,
    direction: &Point,
    destination: &Point,
    radius: f64,
) -> CircleCrossing {
    let offset = origin.sub(destination);
    // a = |direction|^2 = 1 for a unit direction.
    let b = 2.0 * offset.dot(direction);
    let c = offset.dot(&offset) - radius * radius;

    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return CircleCrossing::Missed;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / 2.0;
    let t2 = (-b + sqrt_d) / 2.0;

    let t = if t1 >= 0.0 {
        t1
    } else if t2 >= 0.0 {
        t2
    } else {
        return CircleCrossing::Behind;
    };

    CircleCrossing::At(origin.add(&direction.scale(t)))
}
