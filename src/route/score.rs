use crate::geometry::Point;

use super::candidates::Candidate;

/// Smoothness score for a candidate: +1 per straight-through interior point,
/// −1 per corner, and a terminal −1 the moment a run reverses direction.
/// Two-point candidates have no interior to score and rank −1.
pub(super) fn smoothness(points: &[Point]) -> i32 {
    if points.len() <= 2 {
        return -1;
    }
    let mut score = 0;
    for window in points.windows(3) {
        let (a, b, c) = (window[0], window[1], window[2]);
        let shares_x = a.x == b.x && b.x == c.x;
        let shares_y = a.y == b.y && b.y == c.y;
        if shares_x || shares_y {
            let step_in = if shares_x { b.y - a.y } else { b.x - a.x };
            let step_out = if shares_x { c.y - b.y } else { c.x - b.x };
            if step_in * step_out < 0.0 {
                return -1;
            }
            score += 1;
        } else {
            score -= 1;
        }
    }
    score
}

/// Picks the candidate with the strictly greatest smoothness. The scan
/// updates only on strict improvement, so ties keep the earliest candidate.
pub(super) fn pick_best(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut iter = candidates.iter();
    let first = iter.next()?;
    let mut best = first;
    let mut best_score = smoothness(&first.points);
    for candidate in iter {
        let score = smoothness(&candidate.points);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    Some(best)
}
