use crate::geometry::{Point, Rect};

/// Segment-count class of a candidate. Grouping and the "shortest class
/// wins" rule operate on this closed enum rather than on name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Direct,
    OneBend,
    TwoBend,
}

/// One fully formed proposed route. Every candidate owns a deep copy of its
/// points so mutating one can never leak into another.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub family: Family,
    /// Disambiguates candidates within a family, in generation order.
    pub variant: u8,
    pub points: Vec<Point>,
}

/// The base point sequence shared by all candidates:
/// `[start, start_exit?, end_exit?, end]`, plus the index of the point just
/// before the gap that inserted bend points will bridge.
#[derive(Debug, Clone)]
pub(super) struct Skeleton {
    pub(super) points: Vec<Point>,
    pub(super) gap_index: usize,
}

pub(super) fn build_skeleton(
    start: Point,
    end: Point,
    start_exit: Option<Point>,
    end_exit: Option<Point>,
) -> Skeleton {
    let mut points = Vec::with_capacity(4);
    points.push(start);
    if let Some(exit) = start_exit {
        points.push(exit);
    }
    if let Some(exit) = end_exit {
        points.push(exit);
    }
    points.push(end);
    let gap_index = if start_exit.is_some() { 1 } else { 0 };
    Skeleton { points, gap_index }
}

/// Builds the fixed nine-candidate set: the skeleton itself, two one-bend
/// variants, and six two-bend variants. All are produced unconditionally,
/// even when clearly invalid; filtering happens downstream. The returned
/// order is the tie-break order for every later "pick first" rule.
pub(super) fn generate(
    skeleton: &Skeleton,
    start_box: Option<Rect>,
    end_box: Option<Rect>,
    detour_margin: f32,
) -> Vec<Candidate> {
    let gap = skeleton.points[skeleton.gap_index];
    let next = skeleton.points[skeleton.gap_index + 1];

    let mid_x = (gap.x + next.x) / 2.0;
    let mid_y = (gap.y + next.y) / 2.0;

    // Detour offsets clear the gap coordinates by the margin and, when the
    // obstacle boxes are known, clear those as well.
    let mut east = gap.x.max(next.x) + detour_margin;
    let mut north = gap.y.min(next.y) - detour_margin;
    let mut west = gap.x.min(next.x) - detour_margin;
    let mut south = gap.y.max(next.y) + detour_margin;
    for rect in [start_box, end_box].into_iter().flatten() {
        east = east.max(rect.x2 + detour_margin);
        north = north.min(rect.y1 - detour_margin);
        west = west.min(rect.x1 - detour_margin);
        south = south.max(rect.y2 + detour_margin);
    }

    vec![
        with_inserts(skeleton, Family::Direct, 1, &[]),
        with_inserts(skeleton, Family::OneBend, 1, &[Point::new(gap.x, next.y)]),
        with_inserts(skeleton, Family::OneBend, 2, &[Point::new(next.x, gap.y)]),
        with_inserts(
            skeleton,
            Family::TwoBend,
            1,
            &[Point::new(gap.x, mid_y), Point::new(next.x, mid_y)],
        ),
        with_inserts(
            skeleton,
            Family::TwoBend,
            2,
            &[Point::new(mid_x, gap.y), Point::new(mid_x, next.y)],
        ),
        with_inserts(
            skeleton,
            Family::TwoBend,
            3,
            &[Point::new(east, gap.y), Point::new(east, next.y)],
        ),
        with_inserts(
            skeleton,
            Family::TwoBend,
            4,
            &[Point::new(gap.x, north), Point::new(next.x, north)],
        ),
        with_inserts(
            skeleton,
            Family::TwoBend,
            5,
            &[Point::new(west, gap.y), Point::new(west, next.y)],
        ),
        with_inserts(
            skeleton,
            Family::TwoBend,
            6,
            &[Point::new(gap.x, south), Point::new(next.x, south)],
        ),
    ]
}

fn with_inserts(skeleton: &Skeleton, family: Family, variant: u8, inserts: &[Point]) -> Candidate {
    let mut points = skeleton.points.clone();
    let at = skeleton.gap_index + 1;
    for (offset, point) in inserts.iter().enumerate() {
        points.insert(at + offset, *point);
    }
    Candidate {
        family,
        variant,
        points,
    }
}
