use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A named point in the navigable space, compared by exact string match
pub type Location = String;

/// One undirected, weighted link as it appears in the static edge list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: Location,
    pub to: Location,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<Location>, to: impl Into<Location>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Unknown location: '{0}'")]
    UnknownLocation(String),
    #[error("Invalid graph data: edge {from} -- {to} has an empty location name")]
    EmptyLocationName { from: String, to: String },
    #[error("Invalid graph data: self-loop on '{0}'")]
    SelfLoop(String),
    #[error("Invalid graph data: edge {from} -- {to} has negative weight {weight}")]
    NegativeWeight { from: String, to: String, weight: f64 },
    #[error("Invalid graph data: edge {from} -- {to} has non-finite weight {weight}")]
    NonFiniteWeight { from: String, to: String, weight: f64 },
    #[error("Invalid graph data: duplicate edge {from} -- {to}")]
    DuplicateEdge { from: String, to: String },
    #[error("Invalid graph data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Immutable weighted undirected graph keyed by location name
///
/// Vertices are interned to dense indices in first-seen order. Adjacency
/// lists keep edge insertion order, which is what makes path tie-breaking
/// reproducible.
#[derive(Debug, Clone)]
pub struct GraphStore {
    names: Vec<Location>,
    index: HashMap<Location, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
}

impl GraphStore {
    /// Build the graph from a list of (from, to, weight) triples
    ///
    /// Construction is all-or-nothing: the first invalid edge aborts the build.
    ///
    /// # Errors
    /// Returns an error for empty names, self-loops, negative or non-finite
    /// weights, and for a second edge between an already connected pair
    /// (in either orientation).
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut graph = GraphStore {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        };
        let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();

        for EdgeSpec { from, to, weight } in edges {
            if from.is_empty() || to.is_empty() {
                return Err(GraphError::EmptyLocationName { from, to });
            }
            if from == to {
                return Err(GraphError::SelfLoop(from));
            }
            if !weight.is_finite() {
                return Err(GraphError::NonFiniteWeight { from, to, weight });
            }
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight { from, to, weight });
            }

            let a = graph.intern(&from);
            let b = graph.intern(&to);
            if !seen_pairs.insert((a.min(b), a.max(b))) {
                return Err(GraphError::DuplicateEdge { from, to });
            }

            graph.adjacency[a].push((b, weight));
            graph.adjacency[b].push((a, weight));
            graph.edge_count += 1;
        }

        tracing::debug!(
            "Built graph with {} locations and {} edges",
            graph.names.len(),
            graph.edge_count
        );
        Ok(graph)
    }

    /// Parse a JSON edge list: `[{"from": "A", "to": "B", "weight": 1.0}, ...]`
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        let edges: Vec<EdgeSpec> = serde_json::from_str(json)?;
        Self::from_edges(edges)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, GraphError> {
        let json = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The fixture graph served when no graph file is configured
    pub fn builtin() -> Result<Self, GraphError> {
        Self::from_edges([
            EdgeSpec::new("LAB", "VERANDAH", 1.0),
            EdgeSpec::new("VERANDAH", "LIBRARY", 1.0),
        ])
    }

    /// True iff `name` is a vertex; exact, case-sensitive match
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All edges incident to `name`, in edge insertion order
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, f64)>, GraphError> {
        let idx = self
            .index_of(name)
            .ok_or_else(|| GraphError::UnknownLocation(name.to_string()))?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(next, weight)| (self.names[next].as_str(), weight))
            .collect())
    }

    /// Location names in first-seen order
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn sorted_locations(&self) -> Vec<Location> {
        let mut names = self.names.clone();
        names.sort();
        names
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn name_of(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }
}
