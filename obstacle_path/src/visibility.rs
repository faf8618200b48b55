//! Visibility graph over obstacle reflex vertices and query endpoints.

use crate::geometry::{segments_cross, Point, Segment};
use crate::obstacles::ObstacleSet;

/// Start and end points of an active path query.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QueryEndpoints {
    pub start: Point,
    pub end: Point,
}

impl QueryEndpoints {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Returns `true` if the straight segment between `a` and `b` is not blocked
/// by any obstacle.
///
/// Segments touching an obstacle edge at an endpoint or running along it are
/// not blocked. A chord between two vertices of the same obstacle is only
/// visible when the vertices are neighbours or the chord's midpoint lies
/// outside that obstacle.
pub fn line_of_sight(obstacles: &ObstacleSet, a: Point, b: Point) -> bool {
    if a == b {
        return false;
    }

    let blocked = obstacles.iter().any(|poly| {
        poly.edges()
            .any(|edge| segments_cross(edge.start, edge.end, a, b))
    });
    if blocked {
        return false;
    }

    let shared = obstacles.iter().find_map(|poly| {
        let i = poly.index_of(a)?;
        let j = poly.index_of(b)?;
        Some((poly, i, j))
    });
    match shared {
        Some((poly, i, j)) => {
            poly.are_adjacent(i, j) || !poly.contains(Segment::new(a, b).midpoint())
        }
        None => true,
    }
}

/// Visibility graph with a dense symmetric adjacency matrix.
///
/// With an active query, vertex `0` is the start point and the last vertex
/// is the end point; reflex vertices sit in between in obstacle order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityGraph {
    vertices: Vec<Point>,
    edges: Vec<Vec<bool>>,
    has_query: bool,
}

impl VisibilityGraph {
    /// Builds the graph for `obstacles` and an optional query.
    pub fn build(obstacles: &ObstacleSet, query: Option<QueryEndpoints>) -> Self {
        let mut vertices = Vec::new();
        if let Some(q) = query {
            vertices.push(q.start);
        }
        for poly in obstacles {
            vertices.extend(poly.reflex_vertices());
        }
        if let Some(q) = query {
            vertices.push(q.end);
        }

        let n = vertices.len();
        let mut edges = vec![vec![false; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let visible = line_of_sight(obstacles, vertices[i], vertices[j]);
                edges[i][j] = visible;
                edges[j][i] = visible;
            }
        }

        let graph = Self {
            vertices,
            edges,
            has_query: query.is_some(),
        };
        log::debug!(
            "built visibility graph with {} vertices and {} edges",
            graph.len(),
            graph.edge_count()
        );
        graph
    }

    /// Returns the graph vertices in index order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// Returns the adjacency matrix.
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.edges
    }

    /// Returns `true` if vertices `i` and `j` can see each other.
    pub fn is_edge(&self, i: usize, j: usize) -> bool {
        self.edges
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Indices of every vertex visible from `i`.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .get(i)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|(_, &visible)| visible)
            .map(|(j, _)| j)
    }

    /// Lists each undirected edge once as `(i, j)` with `i < j`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.vertices.len();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.edges[i][j])
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the graph was built with query endpoints.
    pub fn has_query(&self) -> bool {
        self.has_query
    }
}
