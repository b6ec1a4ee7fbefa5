//! # Maximum Cardinality Bipartite Matching
//!
//! bimatch computes a maximum matching of an unweighted bipartite graph with the
//! Hopcroft-Karp algorithm: a greedy seed followed by phases of alternating
//! BFS layering, disjoint shortest augmenting path extraction, and symmetric
//! difference updates. It runs in O(E sqrt(V)) time.
//!
//! ```
//! use bimatch::{MatchingConfig, MatchingRun};
//!
//! let graph = bimatch::graph!("
//!     left: 1 2 3
//!     right: 4 5 6
//!     1 5
//!     1 6
//!     2 4
//!     2 6
//!     3 4
//!     3 5
//! ");
//! let run = MatchingRun::from_config(&MatchingConfig::new(&graph)).unwrap();
//! assert_eq!(run.len(), 3);
//! ```

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate bincode;
extern crate flate2;
extern crate rand;
extern crate regex;
extern crate wasm_bindgen;

#[macro_use]
pub mod edge_list;
pub mod bipartite;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod hopcroft_karp;
pub mod layers;
pub mod matching;
pub mod paths;
pub mod random;
pub mod store;
pub mod update;
pub mod wasm;

pub use crate::error::InvalidGraphInput;
pub use crate::graph::{BipartiteGraph, GraphView, Vertex};
pub use crate::hopcroft_karp::{maximum_matching, MatchingConfig, MatchingRun};
