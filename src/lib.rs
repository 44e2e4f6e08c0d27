//! Shortest-route service over a fixed, weighted map of named locations.
//!
//! [`graph::GraphStore`] holds the immutable topology and
//! [`pathfinder::find_path`] answers route queries against it; the remaining
//! modules are the HTTP surface.

pub mod api_doc;
pub mod config;
pub mod error;
pub mod graph;
pub mod handlers;
pub mod models;
pub mod pathfinder;
pub mod routes;
pub mod state;

pub use graph::{EdgeSpec, GraphError, GraphStore, Location};
pub use pathfinder::{find_path, PathError, Route};
