use crate::config::Config;
use crate::graph::GraphStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Shared application state
///
/// The graph is built once and never mutated, so handlers share it through
/// an `Arc` without any locking.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<GraphStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Load the graph named by the config, or the built-in one
    ///
    /// Any invalid edge fails startup.
    pub fn from_config(config: Config) -> Result<Self> {
        let graph = match &config.graph_file {
            Some(path) => GraphStore::from_json_file(path)
                .with_context(|| format!("Failed to load graph from {}", path.display()))?,
            None => GraphStore::builtin().context("Built-in graph is invalid")?,
        };

        tracing::info!(
            "Graph ready: {} locations, {} edges",
            graph.location_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn config_with(graph_file: Option<PathBuf>) -> Config {
        Config {
            graph_file,
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        }
    }

    #[test]
    fn test_state_with_builtin_graph() {
        let state = AppState::from_config(config_with(None)).unwrap();

        assert_eq!(state.graph.location_count(), 3);
        assert!(state.graph.contains("VERANDAH"));
    }

    #[test]
    fn test_state_with_graph_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/building.json");
        let state = AppState::from_config(config_with(Some(path))).unwrap();

        assert_eq!(state.graph.location_count(), 8);
    }

    #[test]
    fn test_state_with_missing_graph_file() {
        let result = AppState::from_config(config_with(Some(PathBuf::from("missing.json"))));

        let error = result.err().unwrap();
        assert!(format!("{:#}", error).contains("missing.json"));
    }

    #[test]
    fn test_state_is_clonable() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }
}
