//! Conversions between crate geometry and `geo-types`.

use super::{Point, Polygon};

impl From<Point> for geo_types::Coord<f64> {
    fn from(p: Point) -> Self {
        geo_types::coord! { x: p.x, y: p.y }
    }
}

impl From<geo_types::Coord<f64>> for Point {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(poly: &Polygon) -> Self {
        let ring: Vec<geo_types::Coord<f64>> = poly.vertices.iter().map(|&v| v.into()).collect();
        geo_types::Polygon::new(geo_types::LineString::from(ring), Vec::new())
    }
}

/// Builds an obstacle from the exterior ring of a `geo-types` polygon.
///
/// Interior rings are ignored and the repeated closing coordinate is dropped.
impl From<&geo_types::Polygon<f64>> for Polygon {
    fn from(poly: &geo_types::Polygon<f64>) -> Self {
        let mut vertices: Vec<Point> = poly.exterior().coords().map(|&c| c.into()).collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Polygon::new(vertices)
    }
}

/// Converts an ordered path into a `geo-types` line string.
pub fn path_to_line_string(path: &[Point]) -> geo_types::LineString<f64> {
    path.iter()
        .map(|&p| geo_types::Coord::from(p))
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_round_trip_through_geo_types() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        let geo: geo_types::Polygon<f64> = (&poly).into();
        // geo-types closes the exterior ring.
        assert_eq!(geo.exterior().0.len(), 4);
        let back = Polygon::from(&geo);
        assert_eq!(back, poly);
    }

    #[test]
    fn path_converts_to_line_string() {
        let ls = path_to_line_string(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert_eq!(ls.0.len(), 2);
        assert_eq!(Point::from(ls.0[1]), Point::new(3.0, 4.0));
    }
}
