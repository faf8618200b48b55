//! Shortest paths around polygonal obstacles.
//!
//! Obstacles are merged into non-overlapping polygons, their reflex corners
//! form a visibility graph together with the query endpoints, and Dijkstra's
//! algorithm finds the shortest route through that graph.

pub mod engine;
pub mod geometry;
pub mod obstacles;
pub mod solver;
pub mod visibility;

pub use engine::{EngineError, PathEngine, Route};
pub use geometry::{Point, Polygon};
pub use obstacles::ObstacleSet;
pub use solver::{shortest_path, ShortestPath};
pub use visibility::{line_of_sight, QueryEndpoints, VisibilityGraph};
