//! # Random bipartite graphs
//!
use crate::graph::{BipartiteGraph, Vertex};
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Returns a graph with `left_count` left vertices `0..left_count`,
/// `right_count` right vertices numbered after them, and each possible edge
/// present with probability `edge_probability`.
///
/// Edges are listed in left-major order.
pub fn random_graph(
  rng: &mut impl Rng,
  left_count: usize,
  right_count: usize,
  edge_probability: f64,
) -> BipartiteGraph {
  let p = edge_probability.max(0.0).min(1.0);
  let left: Vec<Vertex> = (0..left_count as Vertex).collect();
  let right: Vec<Vertex> = (left_count as Vertex..(left_count + right_count) as Vertex).collect();
  let mut edges = Vec::new();
  for &l in &left {
    for &r in &right {
      if rng.gen_bool(p) {
        edges.push((l, r));
      }
    }
  }
  BipartiteGraph { left, right, edges }
}

/// Same as `random_graph` with a fresh `SmallRng`
pub fn random_graph_from_entropy(
  left_count: usize,
  right_count: usize,
  edge_probability: f64,
) -> BipartiteGraph {
  let mut rng = SmallRng::from_entropy();
  random_graph(&mut rng, left_count, right_count, edge_probability)
}
