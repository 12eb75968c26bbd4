use crate::geometry::{Point, Rect};

/// The point just outside `rect`, on the side nearest `anchor`, offset
/// outward by `escape_distance`.
///
/// Four candidates are considered in north/east/south/west order; the scan
/// keeps the current best only on a strict distance improvement, so ties go
/// to the earliest-enumerated side.
pub(super) fn exit_point(anchor: Point, rect: Rect, escape_distance: f32) -> Point {
    let candidates = [
        Point::new(anchor.x, rect.y1 - escape_distance),
        Point::new(rect.x2 + escape_distance, anchor.y),
        Point::new(anchor.x, rect.y2 + escape_distance),
        Point::new(rect.x1 - escape_distance, anchor.y),
    ];

    let mut best = candidates[0];
    let mut best_distance = anchor.distance_to(best);
    for candidate in candidates.into_iter().skip(1) {
        let distance = anchor.distance_to(candidate);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_near_top_edge_exits_north() {
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
        let anchor = Point::new(50.0, -5.0);
        assert_eq!(exit_point(anchor, rect, 30.0), Point::new(50.0, -30.0));
    }

    #[test]
    fn anchor_near_right_edge_exits_east() {
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
        let anchor = Point::new(95.0, 30.0);
        assert_eq!(exit_point(anchor, rect, 30.0), Point::new(130.0, 30.0));
    }

    #[test]
    fn anchor_near_bottom_edge_exits_south() {
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
        let anchor = Point::new(50.0, 55.0);
        assert_eq!(exit_point(anchor, rect, 30.0), Point::new(50.0, 90.0));
    }

    #[test]
    fn centered_anchor_ties_break_north_first() {
        // Square box, anchor dead center: all four sides are equidistant.
        let rect = Rect::new(-10.0, -10.0, 10.0, 10.0);
        let anchor = Point::new(0.0, 0.0);
        assert_eq!(exit_point(anchor, rect, 30.0), Point::new(0.0, -40.0));
    }

    #[test]
    fn escape_distance_is_respected() {
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
        let anchor = Point::new(50.0, -5.0);
        assert_eq!(exit_point(anchor, rect, 5.0), Point::new(50.0, -5.0));
        assert_eq!(exit_point(anchor, rect, 50.0), Point::new(50.0, -50.0));
    }
}
