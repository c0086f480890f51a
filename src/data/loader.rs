//! JSON results file handling

use crate::partition::{Label, NoiseLevelGroup};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Perturbation runs exported by the clustering pipeline.
///
/// ```json
/// {
///   "nodes": ["Outlet A", "Outlet B", "Outlet C"],
///   "levels": [
///     {"p": 0.0, "runs": [{"Q": 0.12, "partition": [0, 0, 1]}]},
///     {"p": 0.1, "runs": [{"Q": 0.10, "partition": ["a", "b", "b"]}]}
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsFile {
    /// Node names, one per partition position
    #[serde(default)]
    pub nodes: Option<Vec<String>>,

    pub levels: Vec<NoiseLevelGroup<Label>>,
}

impl ResultsFile {
    /// Node names, falling back to `node_{i}` sized from the first run
    pub fn node_names(&self) -> Vec<String> {
        if let Some(ref nodes) = self.nodes {
            return nodes.clone();
        }

        let node_count = self
            .levels
            .iter()
            .flat_map(|level| level.runs.first())
            .map(|run| run.partition.len())
            .next()
            .unwrap_or(0);

        (0..node_count).map(|i| format!("node_{}", i)).collect()
    }
}

/// Load perturbation results from a JSON file
pub fn load_results(path: &str) -> Result<ResultsFile> {
    log::info!("Reading results file: {}", path);

    if !Path::new(path).exists() {
        return Err(anyhow::anyhow!("File not found: {}", path));
    }

    let file = File::open(path).with_context(|| format!("opening {}", path))?;
    let results: ResultsFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing results JSON in {}", path))?;

    let run_count: usize = results.levels.iter().map(|l| l.runs.len()).sum();
    log::info!(
        "Loaded {} noise levels with {} runs in total",
        results.levels.len(),
        run_count
    );

    Ok(results)
}

/// Parse perturbation results from an in-memory JSON string
pub fn parse_results(json: &str) -> Result<ResultsFile> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "levels": [
            {"p": 0.1, "runs": [{"Q": 0.10, "partition": ["a", "b", "b"]}]},
            {"p": 0.0, "runs": [{"Q": 0.12, "partition": [0, 0, 1]}, {"Q": 0.11, "partition": [0, 1, 1]}]}
        ]
    }"#;

    #[test]
    fn test_parse_mixed_labels() {
        let results = parse_results(SAMPLE).unwrap();
        assert_eq!(results.levels.len(), 2);
        assert_eq!(results.levels[1].runs[0].modularity, 0.12);
        assert_eq!(results.levels[0].runs[0].partition[1], Label::from("b"));
        assert_eq!(results.levels[1].runs[1].partition[2], Label::Int(1));
        assert!(results.nodes.is_none());
    }

    #[test]
    fn test_default_node_names() {
        let results = parse_results(SAMPLE).unwrap();
        assert_eq!(results.node_names(), vec!["node_0", "node_1", "node_2"]);
    }

    #[test]
    fn test_explicit_node_names() {
        let results = parse_results(r#"{"nodes": ["x", "y"], "levels": []}"#).unwrap();
        assert_eq!(results.node_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_results("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_results(r#"{"levels": [{"p": 0.0}]}"#).is_err());
    }
}
