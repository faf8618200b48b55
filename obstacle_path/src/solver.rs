//! Shortest path search over a visibility graph.

use crate::geometry::{distance, Point};
use crate::visibility::VisibilityGraph;

/// Path found through the visibility graph.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShortestPath {
    /// Graph indices from start to end inclusive.
    pub indices: Vec<usize>,
    /// Coordinates of the path vertices.
    pub points: Vec<Point>,
    /// Sum of the Euclidean lengths of all legs.
    pub length: f64,
}

impl ShortestPath {
    fn from_indices(graph: &VisibilityGraph, indices: Vec<usize>) -> Self {
        let points: Vec<Point> = indices.iter().map(|&i| graph.vertices()[i]).collect();
        let length = points.windows(2).map(|w| distance(w[0], w[1])).sum();
        Self {
            indices,
            points,
            length,
        }
    }
}

/// Runs Dijkstra's algorithm from vertex `0` to the last vertex of `graph`.
///
/// Vertices are selected by a linear scan for the smallest tentative
/// distance, ties going to the lowest index. The search stops as soon as the
/// end vertex is selected. Returns `None` if the end cannot be reached or the
/// graph is empty.
pub fn shortest_path(graph: &VisibilityGraph) -> Option<ShortestPath> {
    let n = graph.len();
    if n == 0 {
        return None;
    }
    let vertices = graph.vertices();
    let end = n - 1;
    if vertices[0] == vertices[end] {
        return Some(ShortestPath {
            indices: vec![0],
            points: vec![vertices[0]],
            length: 0.0,
        });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut done = vec![false; n];
    dist[0] = 0.0;

    loop {
        let mut current = None;
        let mut min_dist = f64::INFINITY;
        for (i, &d) in dist.iter().enumerate() {
            if !done[i] && d < min_dist {
                min_dist = d;
                current = Some(i);
            }
        }
        let Some(u) = current else {
            log::trace!("remaining vertices are unreachable");
            break;
        };
        if u == end {
            break;
        }
        done[u] = true;

        for v in graph.neighbors(u) {
            let alt = dist[u] + distance(vertices[u], vertices[v]);
            if alt < dist[v] {
                log::trace!("relaxed {} via {}: {:.3}", v, u, alt);
                dist[v] = alt;
                prev[v] = Some(u);
            }
        }
    }

    prev[end]?;
    let mut indices = vec![end];
    let mut u = end;
    while let Some(p) = prev[u] {
        indices.push(p);
        u = p;
    }
    indices.reverse();
    Some(ShortestPath::from_indices(graph, indices))
}
