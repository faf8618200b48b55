//! Collection of static polygon obstacles.
//!
//! Obstacles never overlap: a polygon that overlaps existing obstacles is
//! merged with them before it is stored.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::geometry::{distance, polygon_area, Point, Polygon};

fn to_contour(poly: &Polygon) -> Vec<[f64; 2]> {
    poly.vertices.iter().map(|p| [p.x, p.y]).collect()
}

fn from_contour(contour: &[[f64; 2]]) -> Vec<Point> {
    contour.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

/// Returns `true` if the filled regions of `a` and `b` share a positive area.
///
/// Polygons that only touch along an edge or at a corner do not overlap.
pub fn polygons_overlap(a: &Polygon, b: &Polygon) -> bool {
    if a.is_degenerate() || b.is_degenerate() || !bounds_intersect(a, b) {
        return false;
    }
    let subject = vec![to_contour(a)];
    let clip = vec![to_contour(b)];
    let shapes = subject.overlay(&clip, OverlayRule::Intersect, FillRule::NonZero);
    shapes
        .iter()
        .flat_map(|shape| shape.first())
        .any(|outer| polygon_area(&from_contour(outer)) > 0.0)
}

/// Unions two overlapping polygons into a single outline.
///
/// Holes in the union are filled. Output vertices that land within
/// rounding distance of an input vertex are snapped back onto it, so
/// corners of the inputs survive the merge exactly. Returns `None` when the
/// union does not form exactly one connected shape.
pub fn union_polygons(a: &Polygon, b: &Polygon) -> Option<Polygon> {
    let subject = vec![to_contour(a)];
    let clip = vec![to_contour(b)];
    let shapes = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);
    if shapes.len() != 1 {
        log::warn!("union produced {} shapes, keeping inputs apart", shapes.len());
        return None;
    }
    let shape = &shapes[0];
    if shape.len() > 1 {
        log::warn!("filling {} hole(s) left by obstacle union", shape.len() - 1);
    }
    let outer = shape.first()?;
    let tolerance = snap_tolerance(a, b);
    let mut vertices: Vec<Point> = from_contour(outer)
        .into_iter()
        .map(|p| snap_to_inputs(p, a, b, tolerance))
        .collect();
    vertices.dedup();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    let merged = Polygon::new(vertices);
    if merged.is_degenerate() {
        return None;
    }
    Some(merged)
}

/// The overlay works on an integer grid scaled to the inputs' extent, so
/// rounding error is bounded by a small fraction of that extent.
fn snap_tolerance(a: &Polygon, b: &Polygon) -> f64 {
    a.vertices
        .iter()
        .chain(&b.vertices)
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0, f64::max)
        * 1e-6
}

fn snap_to_inputs(p: Point, a: &Polygon, b: &Polygon, tolerance: f64) -> Point {
    a.vertices
        .iter()
        .chain(&b.vertices)
        .map(|&v| (v, distance(p, v)))
        .filter(|&(_, d)| d <= tolerance)
        .min_by(|x, y| x.1.total_cmp(&y.1))
        .map_or(p, |(v, _)| v)
}

fn bounds_intersect(a: &Polygon, b: &Polygon) -> bool {
    match (a.bounds(), b.bounds()) {
        (Some((amin, amax)), Some((bmin, bmax))) => {
            amin.x <= bmax.x && bmin.x <= amax.x && amin.y <= bmax.y && bmin.y <= amax.y
        }
        _ => false,
    }
}

/// Container for the obstacles of a routing scene.
#[derive(Debug, Default, Clone)]
pub struct ObstacleSet {
    polygons: Vec<Polygon>,
}

impl ObstacleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polygon, merging it with every obstacle it overlaps.
    ///
    /// Polygons that enclose no area are ignored. If any union fails the
    /// set is left as it was and the polygon is rejected, so stored
    /// obstacles never overlap. Returns `true` if the set changed.
    pub fn add(&mut self, polygon: Polygon) -> bool {
        self.add_with(polygon, union_polygons)
    }

    fn add_with<F>(&mut self, polygon: Polygon, union: F) -> bool
    where
        F: Fn(&Polygon, &Polygon) -> Option<Polygon>,
    {
        if polygon.is_degenerate() {
            log::warn!(
                "ignoring degenerate obstacle with {} vertices and area {}",
                polygon.len(),
                polygon.area()
            );
            return false;
        }

        let snapshot = self.polygons.clone();
        let mut merged = polygon;
        merged.normalize_winding();
        while let Some(pos) = self
            .polygons
            .iter()
            .position(|other| polygons_overlap(&merged, other))
        {
            let other = self.polygons.remove(pos);
            let Some(next) = union(&merged, &other) else {
                log::warn!(
                    "could not merge obstacle ({} vertices) with overlapping obstacle ({} vertices), rejecting it",
                    merged.len(),
                    other.len()
                );
                self.polygons = snapshot;
                return false;
            };
            log::info!(
                "merged obstacle ({} vertices) into new obstacle ({} vertices)",
                other.len(),
                next.len()
            );
            merged = next;
            merged.normalize_winding();
        }
        self.polygons.push(merged);
        true
    }

    /// Removes every obstacle.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Returns the stored obstacles.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Returns the number of obstacles.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if there are no obstacles.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns `true` if `p` lies strictly inside any obstacle.
    pub fn contains_point(&self, p: Point) -> bool {
        self.polygons.iter().any(|poly| poly.contains(p))
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
