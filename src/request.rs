use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RouterConfig;
use crate::geometry::{Point, Rect};
use crate::route;

static POINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?[0-9]*\.?[0-9]+)\s*,\s*(-?[0-9]*\.?[0-9]+)\s*$").unwrap());
static RECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(-?[0-9]*\.?[0-9]+)\s*,\s*(-?[0-9]*\.?[0-9]+)\s*,\s*(-?[0-9]*\.?[0-9]+)\s*,\s*(-?[0-9]*\.?[0-9]+)\s*$",
    )
    .unwrap()
});

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid request document: {0}")]
    Parse(#[from] json5::Error),
    #[error("request document contains no requests")]
    Empty,
    #[error("non-finite coordinate in request {index}")]
    NonFinite { index: usize },
    #[error("expected 'x,y' point literal, got '{0}'")]
    PointLiteral(String),
    #[error("expected 'x1,y1,x2,y2' rect literal, got '{0}'")]
    RectLiteral(String),
}

/// One routing request: two anchors, each optionally attached to the
/// bounding box of the shape the connector leaves or enters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub start_box: Option<Rect>,
    #[serde(default)]
    pub end_box: Option<Rect>,
}

impl RouteRequest {
    /// Runs the router on this request. Boxes with swapped corners are
    /// normalized first; the router itself assumes canonical rects.
    pub fn route(&self, config: &RouterConfig) -> Vec<Point> {
        route::route(
            self.start,
            self.end,
            self.start_box.map(|r| r.normalized()),
            self.end_box.map(|r| r.normalized()),
            config,
        )
    }
}

/// A routed connector ready for serialization back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub points: Vec<Point>,
}

/// Parses a request document: either a single request object or an array of
/// them. JSON5 is accepted, so plain JSON works too. Rejects empty
/// documents and non-finite coordinates (JSON5 admits `Infinity`/`NaN`).
pub fn parse_requests(input: &str) -> Result<Vec<RouteRequest>, RequestError> {
    let requests: Vec<RouteRequest> = if input.trim_start().starts_with('[') {
        json5::from_str(input)?
    } else {
        vec![json5::from_str(input)?]
    };
    if requests.is_empty() {
        return Err(RequestError::Empty);
    }
    for (index, request) in requests.iter().enumerate() {
        if !request_is_finite(request) {
            return Err(RequestError::NonFinite { index });
        }
    }
    Ok(requests)
}

fn request_is_finite(request: &RouteRequest) -> bool {
    let mut coords = vec![request.start.x, request.start.y, request.end.x, request.end.y];
    for rect in [request.start_box, request.end_box].into_iter().flatten() {
        coords.extend([rect.x1, rect.y1, rect.x2, rect.y2]);
    }
    coords.into_iter().all(f32::is_finite)
}

/// Parses an `x,y` literal as used by the CLI flags.
pub fn parse_point(input: &str) -> Result<Point, RequestError> {
    let caps = POINT_RE
        .captures(input)
        .ok_or_else(|| RequestError::PointLiteral(input.to_string()))?;
    let x = caps[1]
        .parse()
        .map_err(|_| RequestError::PointLiteral(input.to_string()))?;
    let y = caps[2]
        .parse()
        .map_err(|_| RequestError::PointLiteral(input.to_string()))?;
    Ok(Point::new(x, y))
}

/// Parses an `x1,y1,x2,y2` literal as used by the CLI flags. Swapped
/// corners are accepted and normalized.
pub fn parse_rect(input: &str) -> Result<Rect, RequestError> {
    let caps = RECT_RE
        .captures(input)
        .ok_or_else(|| RequestError::RectLiteral(input.to_string()))?;
    let mut coords = [0.0f32; 4];
    for (slot, cap) in coords.iter_mut().zip(1usize..=4) {
        *slot = caps[cap]
            .parse()
            .map_err(|_| RequestError::RectLiteral(input.to_string()))?;
    }
    Ok(Rect::new(coords[0], coords[1], coords[2], coords[3]).normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_document_parses() {
        let input = r#"{"start": {"x": 0, "y": 0}, "end": {"x": 10, "y": 10}}"#;
        let requests = parse_requests(input).unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].start_box.is_none());
    }

    #[test]
    fn array_document_parses() {
        let input = r#"[
            {"start": {"x": 0, "y": 0}, "end": {"x": 10, "y": 10}},
            {"start": {"x": 5, "y": 5}, "end": {"x": 50, "y": 5},
             "start_box": {"x1": 0, "y1": 0, "x2": 10, "y2": 10}}
        ]"#;
        let requests = parse_requests(input).unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].start_box.is_some());
    }

    #[test]
    fn empty_array_is_rejected() {
        assert!(matches!(parse_requests("[]"), Err(RequestError::Empty)));
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(matches!(
            parse_requests("{not json"),
            Err(RequestError::Parse(_))
        ));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let input = r#"{start: {x: Infinity, y: 0}, end: {x: 10, y: 10}}"#;
        assert!(matches!(
            parse_requests(input),
            Err(RequestError::NonFinite { index: 0 })
        ));
    }

    #[test]
    fn point_literals_parse() {
        assert_eq!(parse_point("10,20").unwrap(), Point::new(10.0, 20.0));
        assert_eq!(parse_point(" -3.5 , 0.25 ").unwrap(), Point::new(-3.5, 0.25));
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn rect_literals_parse_and_normalize() {
        let rect = parse_rect("10,20,-10,5").unwrap();
        assert_eq!(rect, Rect::new(-10.0, 5.0, 10.0, 20.0));
        assert!(parse_rect("1,2,3").is_err());
    }

    #[test]
    fn routed_request_honors_normalized_boxes() {
        let request = RouteRequest {
            start: Point::new(50.0, -5.0),
            end: Point::new(50.0, -200.0),
            // Corners deliberately swapped.
            start_box: Some(Rect::new(100.0, 60.0, 0.0, 0.0)),
            end_box: None,
        };
        let points = request.route(&RouterConfig::default());
        assert_eq!(points[1], Point::new(50.0, -30.0));
    }
}
