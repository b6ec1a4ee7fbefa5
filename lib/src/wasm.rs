//! # JavaScript interface
//!
//! Defines the interface between bimatch and JavaScript callers via wasm-bindgen
use crate::error::InvalidGraphInput;
use crate::graph::{BipartiteGraph, Edge, Vertex};
use crate::hopcroft_karp::{MatchingConfig, MatchingRun, PhaseReport};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Error {
    BadEdgeList(String),
    InvalidGraph(InvalidGraphInput),
}

/// Input format expected from JavaScript
#[derive(Debug, Default, Serialize, Deserialize)]
struct Input {
    /// A text edge list; when present it replaces left, right and edges
    #[serde(default)]
    pub list: Option<String>,
    #[serde(default)]
    pub left: Vec<Vertex>,
    #[serde(default)]
    pub right: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Upper bound on the number of phases to run
    #[serde(default)]
    pub max_phases: Option<usize>,
}

/// Output format returned to JavaScript
#[derive(Debug, Default, Serialize, Deserialize)]
struct Output {
    pub pairs: Vec<(Vertex, Vertex)>,
    pub cardinality: usize,
    pub bootstrapped: usize,
    pub phases: Vec<PhaseReport>,
    pub complete: bool,
}

/// Runs the matcher given input
/// Assumes that input deserializes into a valid `Input`, and returns a serialized `Output`
/// # Example
///
///  ```js
///  const input = { left: [1, 2], right: [3], edges: [[1, 3], [2, 3]] };
///  const output = require('@mtgoncurve/bimatch').bimatch_run(input);
///  console.log(output.pairs);
///  ```
#[wasm_bindgen]
pub fn bimatch_run(input: &JsValue) -> JsValue {
    let input: Input = match input.into_serde() {
        Err(e) => {
            return JsValue::from_str(&format!("Error deserializing matching inputs: {:#?}", e));
        }
        Ok(v) => v,
    };
    let result = match run_impl(&input) {
        Err(e) => {
            return JsValue::from_str(&format!("Error running matching for input: {:#?}", e));
        }
        Ok(v) => v,
    };
    JsValue::from_serde(&result).unwrap_or_else(|e| {
        JsValue::from_str(&format!("Error serializing matching output: {:#?}", e))
    })
}

fn run_impl(input: &Input) -> Result<Output, Error> {
    let graph = match &input.list {
        Some(list) => match BipartiteGraph::from_list(list) {
            Err(e) => return Err(Error::BadEdgeList(e.0)),
            Ok(graph) => graph,
        },
        None => BipartiteGraph::from_parts(
            input.left.iter().cloned(),
            input.right.iter().cloned(),
            input.edges.iter().cloned(),
        ),
    };
    let mut config = MatchingConfig::new(&graph);
    config.max_phases = input.max_phases;
    let run = MatchingRun::from_config(&config).map_err(Error::InvalidGraph)?;
    Ok(Output {
        pairs: run.pairs(),
        cardinality: run.len(),
        bootstrapped: run.bootstrapped,
        phases: run.phases.clone(),
        complete: run.complete,
    })
}

#[cfg(test)]
mod tests {
    use crate::wasm::*;

    #[test]
    fn runs_from_partitions() {
        let input = Input {
            left: vec![1, 2, 3],
            right: vec![4, 5, 6],
            edges: vec![(1, 5), (1, 6), (2, 4), (2, 6), (3, 4), (3, 5)],
            ..Input::default()
        };
        let output = run_impl(&input).unwrap();
        assert_eq!(output.cardinality, 3);
        assert_eq!(output.pairs.len(), 3);
        assert!(output.complete);
        assert_eq!(output.bootstrapped, 2);
    }

    #[test]
    fn list_replaces_partitions() {
        let input = Input {
            list: Some("left: 1\nright: 2\n1 2".to_string()),
            left: vec![7],
            ..Input::default()
        };
        let output = run_impl(&input).unwrap();
        assert_eq!(output.pairs, vec![(1, 2)]);
    }

    #[test]
    fn bad_list_is_reported() {
        let input = Input {
            list: Some("left: 1\nright: 2\nnope".to_string()),
            ..Input::default()
        };
        match run_impl(&input) {
            Err(Error::BadEdgeList(_)) => {}
            other => panic!("expected a bad edge list, got {:?}", other),
        }
    }

    #[test]
    fn invalid_graph_is_reported() {
        let input = Input {
            left: vec![1],
            right: vec![1],
            ..Input::default()
        };
        assert_eq!(
            run_impl(&input).err(),
            Some(Error::InvalidGraph(InvalidGraphInput::PartitionsOverlap(1)))
        );
    }

    #[test]
    fn input_deserializes_from_json() {
        let input: Input =
            serde_json::from_str(r#"{"left": [1], "right": [2], "edges": [[2, 1]], "max_phases": 3}"#).unwrap();
        assert_eq!(input.max_phases, Some(3));
        let output = run_impl(&input).unwrap();
        assert_eq!(output.pairs, vec![(1, 2)]);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"cardinality\":1"));
    }
}
