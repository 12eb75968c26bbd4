//! Orthogonal connector routing.
//!
//! Given two anchor points, each optionally attached to the bounding box of
//! the shape the connector leaves or enters, computes an axis-aligned
//! polyline that avoids the boxes when avoidable, never doubles back, and
//! prefers the fewest, smoothest turns.
//!
//! The pipeline is a fixed sequence with no back-edges: compute exit points,
//! generate the nine-candidate set, filter (orthogonality, forward progress,
//! box intersection, each skipped rather than emptying the set), keep the
//! shortest surviving segment-count class, then score for smoothness. Every
//! call is pure and allocates its own working data, so concurrent callers
//! need no coordination.

mod candidates;
mod exit;
mod filter;
mod score;

pub use candidates::{Candidate, Family};

use crate::config::RouterConfig;
use crate::geometry::{Point, Rect};

/// Routes a connector from `start` to `end` around the supplied obstacle
/// boxes. The result always begins with `start`, ends with `end`, and is
/// never empty; with no boxes at all it is exactly `[start, end]`.
pub fn route(
    start: Point,
    end: Point,
    start_box: Option<Rect>,
    end_box: Option<Rect>,
    config: &RouterConfig,
) -> Vec<Point> {
    // Unattached connectors draw a straight line; there is nothing to avoid.
    if start_box.is_none() && end_box.is_none() {
        return vec![start, end];
    }

    let start_exit = start_box.map(|rect| exit::exit_point(start, rect, config.escape_distance));
    let end_exit = end_box.map(|rect| exit::exit_point(end, rect, config.escape_distance));

    let skeleton = candidates::build_skeleton(start, end, start_exit, end_exit);
    let generated = candidates::generate(&skeleton, start_box, end_box, config.detour_margin);

    let survivors = filter::filter_orthogonal(generated);
    let survivors = filter::filter_forward(survivors, start, end);
    let boxes: Vec<Rect> = [start_box, end_box].into_iter().flatten().collect();
    let survivors = filter::filter_intersecting(survivors, &boxes);
    let class = filter::keep_shortest_class(survivors);

    match score::pick_best(&class) {
        Some(winner) => winner.points.clone(),
        None => vec![start, end],
    }
}

/// `route` with the default escape distance and detour margin.
pub fn route_with_defaults(
    start: Point,
    end: Point,
    start_box: Option<Rect>,
    end_box: Option<Rect>,
) -> Vec<Point> {
    route(start, end, start_box, end_box, &RouterConfig::default())
}

/// Removes zero-length segments from a routed polyline. The router itself
/// keeps duplicates (they collapse visually); consumers building stroke
/// paths can drop them with this helper.
pub fn collapse_duplicates(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if out.last() != Some(point) {
            out.push(*point);
        }
    }
    out
}
