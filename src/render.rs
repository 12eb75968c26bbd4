use crate::config::PreviewConfig;
use crate::geometry::Point;
use crate::request::RouteRequest;

/// Renders routed connectors as a standalone SVG preview: obstacle boxes,
/// routed polylines, and endpoint dots. Debug tooling for inspecting router
/// output; the hosting editor does its own drawing.
pub fn render_preview(routed: &[(RouteRequest, Vec<Point>)], config: &PreviewConfig) -> String {
    let (min, max) = content_bounds(routed, config.padding);
    let width = max.x - min.x;
    let height = max.y - min.y;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"{:.2} {:.2} {width:.2} {height:.2}\">",
        min.x, min.y
    ));
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{}\"/>",
        min.x, min.y, config.background
    ));

    for (request, _) in routed {
        for rect in [request.start_box, request.end_box].into_iter().flatten() {
            let rect = rect.normalized();
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                rect.x1,
                rect.y1,
                rect.x2 - rect.x1,
                rect.y2 - rect.y1,
                config.box_fill,
                config.box_stroke,
                config.box_stroke_width
            ));
        }
    }

    for (_, points) in routed {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            points_to_path(points),
            config.line_color,
            config.line_width
        ));
        for endpoint in [points.first(), points.last()].into_iter().flatten() {
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>",
                endpoint.x, endpoint.y, config.endpoint_radius, config.endpoint_color
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

fn content_bounds(routed: &[(RouteRequest, Vec<Point>)], padding: f32) -> (Point, Point) {
    let mut min = Point::new(f32::MAX, f32::MAX);
    let mut max = Point::new(f32::MIN, f32::MIN);
    let mut extend = |x: f32, y: f32| {
        min.x = min.x.min(x);
        min.y = min.y.min(y);
        max.x = max.x.max(x);
        max.y = max.y.max(y);
    };
    for (request, points) in routed {
        for point in points {
            extend(point.x, point.y);
        }
        for rect in [request.start_box, request.end_box].into_iter().flatten() {
            let rect = rect.normalized();
            extend(rect.x1, rect.y1);
            extend(rect.x2, rect.y2);
        }
    }
    if min.x > max.x {
        // Nothing to draw; fall back to a unit viewport.
        (Point::new(0.0, 0.0), Point::new(1.0, 1.0))
    } else {
        (
            Point::new(min.x - padding, min.y - padding),
            Point::new(max.x + padding, max.y + padding),
        )
    }
}

fn points_to_path(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", points[0].x, points[0].y));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.x, point.y));
    }
    d
}
