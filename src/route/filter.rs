use crate::geometry::{Point, Rect, Segment};

use super::candidates::Candidate;

/// Applies `keep` to the candidate set; if that would reject every
/// candidate, the filter is skipped and the input passes through unchanged.
/// The pipeline must always end with at least one candidate.
fn retain_or_skip<F>(candidates: Vec<Candidate>, keep: F) -> Vec<Candidate>
where
    F: Fn(&Candidate) -> bool,
{
    let survivors: Vec<Candidate> = candidates.iter().filter(|c| keep(c)).cloned().collect();
    if survivors.is_empty() {
        candidates
    } else {
        survivors
    }
}

fn is_orthogonal(points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|pair| pair[0].x == pair[1].x || pair[0].y == pair[1].y)
}

/// Drops consecutive duplicate points so zero-length moves never count as
/// direction changes.
fn compact(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if out.last() != Some(point) {
            out.push(*point);
        }
    }
    out
}

/// True when some colinear triple reverses direction along its run.
fn has_reversal(points: &[Point]) -> bool {
    let compacted = compact(points);
    for window in compacted.windows(3) {
        let (a, b, c) = (window[0], window[1], window[2]);
        if a.x == b.x && b.x == c.x && (b.y - a.y) * (c.y - b.y) < 0.0 {
            return true;
        }
        if a.y == b.y && b.y == c.y && (b.x - a.x) * (c.x - b.x) < 0.0 {
            return true;
        }
    }
    false
}

fn crosses_any_box(points: &[Point], boxes: &[Rect]) -> bool {
    // The first and last segment attach the anchors to their boxes; testing
    // them would flag every routed connector, so they are stripped.
    if points.len() < 4 {
        return false;
    }
    let interior = &points[1..points.len() - 1];
    for pair in interior.windows(2) {
        let segment = Segment::new(pair[0], pair[1]);
        for rect in boxes {
            if rect.edges().iter().any(|edge| segment.intersects(edge)) {
                return true;
            }
        }
    }
    false
}

/// Rejects candidates with a diagonal move (a consecutive pair differing in
/// both coordinates).
pub(super) fn filter_orthogonal(candidates: Vec<Candidate>) -> Vec<Candidate> {
    retain_or_skip(candidates, |c| is_orthogonal(&c.points))
}

/// Rejects candidates that double back on themselves. Skipped entirely for
/// coincident endpoints, where every move doubles back by construction.
pub(super) fn filter_forward(candidates: Vec<Candidate>, start: Point, end: Point) -> Vec<Candidate> {
    if start == end {
        return candidates;
    }
    retain_or_skip(candidates, |c| !has_reversal(&c.points))
}

/// Rejects candidates whose interior segments cross an edge of a supplied
/// obstacle box. With no boxes there is nothing to test.
pub(super) fn filter_intersecting(candidates: Vec<Candidate>, boxes: &[Rect]) -> Vec<Candidate> {
    if boxes.is_empty() {
        return candidates;
    }
    retain_or_skip(candidates, |c| !crosses_any_box(&c.points, boxes))
}

/// Keeps only the candidates sharing the point count of the earliest
/// survivor, so the smallest sufficient segment-count class always wins.
pub(super) fn keep_shortest_class(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let Some(first) = candidates.first() else {
        return candidates;
    };
    let class_len = first.points.len();
    candidates
        .into_iter()
        .filter(|c| c.points.len() == class_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::candidates::Family;

    fn candidate(points: Vec<Point>) -> Candidate {
        Candidate {
            family: Family::TwoBend,
            variant: 1,
            points,
        }
    }

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn orthogonality_rejects_diagonal_moves() {
        let diagonal = candidate(pts(&[(0.0, 0.0), (10.0, 10.0)]));
        let bent = candidate(pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]));
        let survivors = filter_orthogonal(vec![diagonal, bent]);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].points.len(), 3);
    }

    #[test]
    fn orthogonality_allows_identical_consecutive_points() {
        let with_dup = candidate(pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 10.0)]));
        let survivors = filter_orthogonal(vec![with_dup]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn skipped_filter_passes_input_through() {
        let diagonal = candidate(pts(&[(0.0, 0.0), (10.0, 10.0)]));
        let survivors = filter_orthogonal(vec![diagonal]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn forward_filter_rejects_reversals() {
        let reversed = candidate(pts(&[(0.0, 0.0), (0.0, -40.0), (0.0, 160.0), (200.0, 160.0)]));
        let forward = candidate(pts(&[(0.0, 0.0), (0.0, -40.0), (200.0, -40.0), (200.0, 160.0)]));
        let survivors =
            filter_forward(vec![reversed, forward], Point::new(0.0, 0.0), Point::new(200.0, 160.0));
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].points[2], Point::new(200.0, -40.0));
    }

    #[test]
    fn forward_filter_ignores_zero_length_moves() {
        let with_dup = candidate(pts(&[
            (0.0, 0.0),
            (0.0, 10.0),
            (0.0, 10.0),
            (0.0, 20.0),
        ]));
        let survivors = filter_forward(vec![with_dup], Point::new(0.0, 0.0), Point::new(0.0, 20.0));
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn forward_filter_skipped_for_coincident_endpoints() {
        let p = Point::new(5.0, 5.0);
        let loopback = candidate(pts(&[(5.0, 5.0), (5.0, -25.0), (5.0, 5.0)]));
        let survivors = filter_forward(vec![loopback], p, p);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn reversal_across_a_corner_is_not_a_reversal() {
        // Right, up, then left: the x moves oppose but are separated by a
        // corner, which is exactly the shape of a detour candidate.
        let detour = candidate(pts(&[
            (0.0, 0.0),
            (50.0, 0.0),
            (50.0, -30.0),
            (10.0, -30.0),
        ]));
        let survivors =
            filter_forward(vec![detour], Point::new(0.0, 0.0), Point::new(10.0, -30.0));
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn intersection_filter_rejects_crossing_candidates() {
        let rect = Rect::new(40.0, -10.0, 60.0, 10.0);
        // Interior segment (10,0)->(90,0) slices straight through the box.
        let crossing = candidate(pts(&[(0.0, 0.0), (10.0, 0.0), (90.0, 0.0), (100.0, 0.0)]));
        let clear = candidate(pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 40.0),
            (90.0, 40.0),
            (90.0, 0.0),
            (100.0, 0.0),
        ]));
        let survivors = filter_intersecting(vec![crossing, clear], &[rect]);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].points.len(), 6);
    }

    #[test]
    fn intersection_filter_strips_anchor_segments() {
        let rect = Rect::new(-10.0, -10.0, 10.0, 10.0);
        // First segment leaves the box; only interior segments are tested.
        let leaving = candidate(pts(&[(0.0, 0.0), (0.0, -40.0), (50.0, -40.0), (50.0, 50.0)]));
        let survivors = filter_intersecting(vec![leaving], &[rect]);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn intersection_filter_skips_rather_than_emptying() {
        let rect = Rect::new(40.0, -10.0, 60.0, 10.0);
        let crossing = candidate(pts(&[(0.0, 0.0), (10.0, 0.0), (90.0, 0.0), (100.0, 0.0)]));
        let survivors = filter_intersecting(vec![crossing.clone()], &[rect]);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].points, crossing.points);
    }

    #[test]
    fn shortest_class_follows_the_first_survivor() {
        let short = candidate(pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]));
        let long = candidate(pts(&[
            (0.0, 0.0),
            (0.0, 5.0),
            (10.0, 5.0),
            (10.0, 10.0),
        ]));
        let other_short = candidate(pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        let class = keep_shortest_class(vec![short, long, other_short]);
        assert_eq!(class.len(), 2);
        assert!(class.iter().all(|c| c.points.len() == 3));
    }
}
