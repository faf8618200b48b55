//! Closed polygon type used for obstacles.

use super::{
    is_polygon_clockwise, point_in_polygon, polygon_area, signed_area, signed_cross, subtract,
    Point, Segment,
};

/// Representation of a closed polygon. The last vertex connects back to the
/// first one.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a new polygon from its boundary vertices.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Number of vertices in the boundary.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A polygon is degenerate when it encloses no area: fewer than three
    /// vertices, or all of them collinear.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || signed_area(&self.vertices) == 0.0
    }

    /// Iterates over the boundary edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns `true` if the vertices are in clockwise order.
    pub fn is_clockwise(&self) -> bool {
        is_polygon_clockwise(&self.vertices)
    }

    /// Returns a copy with the vertex order reversed.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Reverses the vertex order in place when the polygon is clockwise so
    /// that every stored obstacle shares one winding order.
    pub fn normalize_winding(&mut self) {
        if self.is_clockwise() {
            self.vertices.reverse();
        }
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Calculates the area enclosed by the polygon.
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Returns `true` if `p` is strictly inside the polygon (non-zero winding).
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Returns the index of the first vertex equal to `p`.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.vertices.iter().position(|&v| v == p)
    }

    /// Returns `true` if `p` is one of the polygon's vertices.
    pub fn has_vertex(&self, p: Point) -> bool {
        self.index_of(p).is_some()
    }

    /// Returns `true` if vertex indices `i` and `j` are neighbours in the
    /// boundary cycle.
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        let dist = i.abs_diff(j);
        dist == 1 || dist + 1 == self.vertices.len()
    }

    /// Classifies vertex `index` as reflex from the turn
    /// `previous -> current -> next`.
    ///
    /// Assumes the polygon has been normalized with
    /// [`Polygon::normalize_winding`].
    pub fn is_reflex(&self, index: usize) -> bool {
        let n = self.vertices.len();
        if n < 3 || index >= n {
            return false;
        }
        let current = self.vertices[index];
        let next = self.vertices[(index + 1) % n];
        let previous = self.vertices[if index == 0 { n - 1 } else { index - 1 }];

        let left = subtract(current, previous);
        let right = subtract(next, current);
        signed_cross(left, right) >= 0.0
    }

    /// Returns the reflex vertices in boundary order.
    pub fn reflex_vertices(&self) -> Vec<Point> {
        if self.is_degenerate() {
            return Vec::new();
        }
        (0..self.vertices.len())
            .filter(|&i| self.is_reflex(i))
            .map(|i| self.vertices[i])
            .collect()
    }

    /// Axis aligned bounds as `(min, max)`, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        let (min, max) = self.vertices.iter().fold((first, first), |(min, max), v| {
            (
                Point::new(min.x.min(v.x), min.y.min(v.y)),
                Point::new(max.x.max(v.x), max.y.max(v.y)),
            )
        });
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(4.0, -2.0),
            Point::new(6.0, -2.0),
            Point::new(6.0, 2.0),
            Point::new(4.0, 2.0),
        ])
    }

    fn chevron() -> Polygon {
        Polygon::new(vec![
            Point::new(5.0, 10.0),
            Point::new(9.0, 6.0),
            Point::new(10.0, 7.0),
            Point::new(5.0, 12.0),
            Point::new(0.0, 7.0),
            Point::new(1.0, 6.0),
        ])
    }

    #[test]
    fn reverse_flips_orientation() {
        let sq = square();
        assert_eq!(sq.is_clockwise(), !sq.reversed().is_clockwise());
        let ch = chevron();
        assert_eq!(ch.is_clockwise(), !ch.reversed().is_clockwise());
    }

    #[test]
    fn normalized_winding_is_not_clockwise() {
        let mut sq = square();
        assert!(sq.is_clockwise());
        sq.normalize_winding();
        assert!(!sq.is_clockwise());
        let before = sq.clone();
        sq.normalize_winding();
        assert_eq!(sq, before);
    }

    #[test]
    fn convex_square_has_no_reflex_vertices() {
        let mut sq = square();
        sq.normalize_winding();
        assert!(sq.reflex_vertices().is_empty());
    }

    #[test]
    fn chevron_has_one_reflex_vertex() {
        let mut ch = chevron();
        ch.normalize_winding();
        assert_eq!(ch.reflex_vertices(), vec![Point::new(5.0, 10.0)]);
    }

    #[test]
    fn collinear_vertex_counts_as_reflex() {
        let mut tri = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 2.0),
        ]);
        tri.normalize_winding();
        let idx = tri.index_of(Point::new(1.0, 0.0)).unwrap();
        assert!(tri.is_reflex(idx));
    }

    #[test]
    fn degenerate_polygon_has_no_reflex_vertices() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(line.is_degenerate());
        assert!(line.reflex_vertices().is_empty());
    }

    #[test]
    fn collinear_polygon_is_degenerate() {
        let flat = Polygon::new(vec![
            Point::new(5.0, -3.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 3.0),
        ]);
        assert!(flat.is_degenerate());
        assert!(flat.reflex_vertices().is_empty());
        let spike = Polygon::new(vec![
            Point::new(5.0, -3.0),
            Point::new(5.0, 3.0),
            Point::new(5.0, 1.0),
        ]);
        assert!(spike.is_degenerate());
        assert!(spike.reflex_vertices().is_empty());
    }

    #[test]
    fn adjacency_wraps_around() {
        let sq = square();
        assert!(sq.are_adjacent(0, 1));
        assert!(sq.are_adjacent(3, 0));
        assert!(!sq.are_adjacent(0, 2));
    }

    #[test]
    fn edges_close_the_ring() {
        let sq = square();
        let edges: Vec<Segment> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].end, sq.vertices[0]);
    }

    #[test]
    fn area_and_bounds() {
        let sq = square();
        assert!((sq.area() - 8.0).abs() < 1e-6);
        let (min, max) = sq.bounds().unwrap();
        assert_eq!(min, Point::new(4.0, -2.0));
        assert_eq!(max, Point::new(6.0, 2.0));
        assert!(Polygon::default().bounds().is_none());
    }
}
