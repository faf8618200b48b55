//! Basic geometry primitives and predicates for obstacle routing.

pub mod convert;
pub mod polygon;

pub use polygon::Polygon;

/// Representation of a 2D point.
///
/// Equality is exact coordinate equality; vertices are matched against each
/// other by value when building the visibility graph.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Representation of a 2D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the length of the segment.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Returns the midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Returns `true` if this segment properly crosses `other`.
    pub fn crosses(&self, other: &Segment) -> bool {
        segments_cross(self.start, self.end, other.start, other.end)
    }
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns the vector pointing from `from` to `to`.
pub fn subtract(to: Point, from: Point) -> Point {
    Point::new(to.x - from.x, to.y - from.y)
}

/// Scalar cross product of two 2D vectors.
pub fn signed_cross(u: Point, v: Point) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Returns `true` if segment `(a, b)` crosses segment `(c, d)` at a point
/// strictly inside both of them.
///
/// Parallel or collinear segments never cross, and neither do segments that
/// meet at an endpoint.
pub fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    let denominator = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    if denominator == 0.0 {
        return false;
    }

    let numerator1 = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
    let numerator2 = (a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y);
    if numerator1 == 0.0 || numerator2 == 0.0 {
        return false;
    }

    let r = numerator1 / denominator;
    let s = numerator2 / denominator;
    (r > 0.0 && r < 1.0) && (s > 0.0 && s < 1.0)
}

/// Returns the shoelace orientation sum `Σ (bx - ax)(by + ay)` of a closed
/// vertex ring.
pub fn orientation_sum(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            (b.x - a.x) * (b.y + a.y)
        })
        .sum()
}

/// Returns `true` if the vertex ring is clockwise, meaning its orientation
/// sum is negative.
pub fn is_polygon_clockwise(vertices: &[Point]) -> bool {
    orientation_sum(vertices) < 0.0
}

/// Calculates the signed area of a vertex ring; the sign follows
/// [`orientation_sum`] with the opposite sign.
pub fn signed_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let j = (i + 1) % vertices.len();
        sum += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    sum * 0.5
}

/// Calculates the area of a simple polygon using the shoelace formula.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    signed_cross(subtract(b, a), subtract(p, a)) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Computes the winding number of the closed ring `vertices` around `p`.
pub fn winding_number(p: Point, vertices: &[Point]) -> i32 {
    let n = vertices.len();
    let mut winding = 0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let side = signed_cross(subtract(b, a), subtract(p, a));
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Returns `true` if `p` lies in the interior of the ring under the
/// non-zero winding rule. Points on the boundary are not contained.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let n = vertices.len();
    if (0..n).any(|i| on_segment(p, vertices[i], vertices[(i + 1) % n])) {
        return false;
    }
    winding_number(p, vertices) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn distance_three_four_five() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn segment_length_midpoint() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(seg.length(), 5.0);
        assert_eq!(seg.midpoint(), Point::new(1.5, 2.0));
    }

    #[test]
    fn cross_sign_follows_turn() {
        let east = Point::new(1.0, 0.0);
        let north = Point::new(0.0, 1.0);
        assert!(signed_cross(east, north) > 0.0);
        assert!(signed_cross(north, east) < 0.0);
        assert_eq!(signed_cross(east, east), 0.0);
    }

    #[test]
    fn proper_crossing_detected() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 2.0);
        let c = Point::new(0.0, 2.0);
        let d = Point::new(2.0, 0.0);
        assert!(segments_cross(a, b, c, d));
        assert!(Segment::new(a, b).crosses(&Segment::new(c, d)));
    }

    #[test]
    fn touching_at_endpoint_is_not_crossing() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 2.0);
        assert!(!segments_cross(a, b, b, Point::new(4.0, 0.0)));
        // T junction: the end of one segment lies inside the other.
        assert!(!segments_cross(
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(0.0, 1.0),
            Point::new(2.0, 1.0)
        ));
    }

    #[test]
    fn parallel_and_collinear_are_not_crossing() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        assert!(!segments_cross(a, b, Point::new(0.0, 1.0), Point::new(4.0, 1.0)));
        assert!(!segments_cross(a, b, Point::new(1.0, 0.0), Point::new(3.0, 0.0)));
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        assert!(!segments_cross(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 5.0)
        ));
    }

    #[test]
    fn clockwise_convention() {
        let positive_area = square();
        let negative_area: Vec<Point> = positive_area.iter().rev().copied().collect();
        assert!(is_polygon_clockwise(&positive_area));
        assert!(!is_polygon_clockwise(&negative_area));
        assert!(signed_area(&positive_area) > 0.0);
        assert!(signed_area(&negative_area) < 0.0);
        assert!((polygon_area(&negative_area) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn winding_containment_excludes_boundary() {
        let sq = square();
        assert!(point_in_polygon(Point::new(0.5, 0.5), &sq));
        assert!(!point_in_polygon(Point::new(1.5, 0.5), &sq));
        assert!(!point_in_polygon(Point::new(1.0, 0.5), &sq));
        assert!(!point_in_polygon(Point::new(0.0, 0.0), &sq));
        let reversed: Vec<Point> = sq.iter().rev().copied().collect();
        assert!(point_in_polygon(Point::new(0.5, 0.5), &reversed));
    }

    #[test]
    fn containment_of_concave_notch() {
        // U shape opening upwards; the notch is outside.
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(2.0, 3.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(0.0, 3.0),
        ];
        assert!(!point_in_polygon(Point::new(1.5, 2.0), &u));
        assert!(point_in_polygon(Point::new(0.5, 2.0), &u));
        assert!(point_in_polygon(Point::new(1.5, 0.5), &u));
    }
}
