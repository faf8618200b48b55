//! Routing engine tying obstacles, visibility graph and solver together.
//!
//! Every operation fully recomputes the derived graph and route before it
//! returns.

use std::fmt;

use crate::geometry::{Point, Polygon};
use crate::obstacles::ObstacleSet;
use crate::solver::{shortest_path, ShortestPath};
use crate::visibility::{QueryEndpoints, VisibilityGraph};

/// Outcome of the current path query.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Route {
    /// No query endpoints are set.
    #[default]
    NoQuery,
    /// The end point cannot be reached from the start point.
    Unreachable,
    /// A shortest path was found.
    Found(ShortestPath),
}

impl Route {
    /// Returns the found path, if any.
    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            Route::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Errors reported for rejected queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// A query endpoint lies inside an obstacle.
    EndpointInsideObstacle(Point),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EndpointInsideObstacle(p) => {
                write!(f, "point ({}, {}) lies inside an obstacle", p.x, p.y)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Obstacle-aware shortest path engine.
#[derive(Debug, Default, Clone)]
pub struct PathEngine {
    obstacles: ObstacleSet,
    query: Option<QueryEndpoints>,
    graph: VisibilityGraph,
    route: Route,
}

impl PathEngine {
    /// Creates an engine with no obstacles and no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an obstacle outline, merging it with any obstacle it overlaps.
    ///
    /// Fewer than three points are ignored. Adding an obstacle cancels the
    /// active query. Returns `true` if the obstacle was added.
    pub fn add_obstacle(&mut self, points: Vec<Point>) -> bool {
        if points.len() < 3 {
            log::warn!("ignoring obstacle with {} points", points.len());
            return false;
        }
        if !self.obstacles.add(Polygon::new(points)) {
            return false;
        }
        self.query = None;
        self.recompute();
        true
    }

    /// Starts a path query between `start` and `end`.
    ///
    /// Endpoints strictly inside an obstacle are rejected and the active
    /// query is cleared.
    pub fn set_query_endpoints(&mut self, start: Point, end: Point) -> Result<(), EngineError> {
        let rejected = [start, end]
            .into_iter()
            .find(|&p| self.obstacles.contains_point(p));
        if let Some(p) = rejected {
            log::warn!("rejecting query endpoint ({}, {}) inside obstacle", p.x, p.y);
            self.query = None;
            self.recompute();
            return Err(EngineError::EndpointInsideObstacle(p));
        }
        self.query = Some(QueryEndpoints::new(start, end));
        self.recompute();
        Ok(())
    }

    /// Moves the end point of the active query.
    ///
    /// Ignored when there is no query or `end` lies inside an obstacle.
    /// Returns `true` if the query changed.
    pub fn move_query_end(&mut self, end: Point) -> bool {
        let Some(query) = self.query else {
            return false;
        };
        if self.obstacles.contains_point(end) {
            return false;
        }
        self.query = Some(QueryEndpoints::new(query.start, end));
        self.recompute();
        true
    }

    /// Cancels the active query. The graph of reflex vertices is kept.
    pub fn clear_query(&mut self) {
        self.query = None;
        self.recompute();
    }

    /// Removes all obstacles and the active query.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.query = None;
        self.graph = VisibilityGraph::default();
        self.route = Route::NoQuery;
    }

    fn recompute(&mut self) {
        self.graph = VisibilityGraph::build(&self.obstacles, self.query);
        self.route = match self.query {
            None => Route::NoQuery,
            Some(_) => match shortest_path(&self.graph) {
                Some(path) => Route::Found(path),
                None => Route::Unreachable,
            },
        };
        match &self.route {
            Route::Found(path) => log::debug!(
                "route with {} points, length {:.3}",
                path.points.len(),
                path.length
            ),
            Route::Unreachable => log::debug!("no route between query endpoints"),
            Route::NoQuery => {}
        }
    }

    /// Returns the current obstacles.
    pub fn obstacles(&self) -> &[Polygon] {
        self.obstacles.polygons()
    }

    pub fn obstacle_set(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Returns the active query endpoints, if any.
    pub fn query(&self) -> Option<QueryEndpoints> {
        self.query
    }

    /// Returns the current visibility graph.
    pub fn visibility_graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    /// Returns the status of the current query.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the path points, empty if there is no query or no path.
    pub fn path(&self) -> Vec<Point> {
        self.route
            .path()
            .map(|p| p.points.clone())
            .unwrap_or_default()
    }

    /// Returns the path as graph vertex indices.
    pub fn path_indices(&self) -> Vec<usize> {
        self.route
            .path()
            .map(|p| p.indices.clone())
            .unwrap_or_default()
    }

    /// Returns the length of the found path.
    pub fn path_length(&self) -> Option<f64> {
        self.route.path().map(|p| p.length)
    }
}
