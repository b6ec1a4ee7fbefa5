//! # Alternating BFS layering
//!
//! Builds the layered graph of one Hopcroft-Karp phase. Layer 0 holds every
//! unmatched left node. Odd layers hold right nodes reached over non-matching
//! edges, even layers hold left nodes reached over matching edges. Growth stops
//! at the first right layer that contains an unmatched right node, so every
//! path through the layers to that frontier has the same, minimal length.
use crate::graph::{GraphView, Node};
use crate::matching::{Matching, UnmatchedSet};

/// The tight-edge DAG of one phase
#[derive(Debug, Clone)]
pub struct LayeredMap {
  layer: Vec<Option<usize>>,
  predecessors: Vec<Vec<Node>>,
  frontier: Vec<Node>,
  depth: usize,
}

impl LayeredMap {
  /// Predecessors of `node` one layer closer to the unmatched left nodes
  pub fn predecessors(&self, node: Node) -> &[Node] {
    &self.predecessors[node]
  }

  pub fn layer(&self, node: Node) -> Option<usize> {
    self.layer[node]
  }

  /// True for the unmatched left nodes the layering started from
  pub fn is_root(&self, node: Node) -> bool {
    self.layer[node] == Some(0)
  }

  /// Unmatched right nodes in the last layer, in discovery order
  pub fn frontier(&self) -> &[Node] {
    &self.frontier
  }

  /// Index of the frontier layer, equal to the edge length of every shortest
  /// augmenting path in this phase
  pub fn depth(&self) -> usize {
    self.depth
  }

  pub fn node_count(&self) -> usize {
    self.layer.len()
  }
}

#[derive(Debug, Clone)]
pub enum Frontier {
  /// At least one shortest augmenting path exists
  Augmentable(LayeredMap),
  /// The matching is maximum
  Exhausted,
}

/// Runs the alternating BFS from every node in `unmatched_left`.
pub fn build_layers(
  view: &GraphView,
  matching: &Matching,
  unmatched_left: &UnmatchedSet,
  unmatched_right: &UnmatchedSet,
) -> Frontier {
  let node_count = view.node_count();
  let mut layer = vec![None; node_count];
  let mut predecessors = vec![Vec::new(); node_count];

  let mut odd: Vec<Node> = unmatched_left.iter().collect();
  for &l in &odd {
    layer[l] = Some(0);
  }
  let mut depth = 0;

  loop {
    // left -> right over non-matching edges
    depth += 1;
    let mut even = Vec::new();
    for &l in &odd {
      let mate = matching.mate(l);
      for &r in view.neighbors(l) {
        if mate == Some(r) {
          continue;
        }
        match layer[r] {
          None => {
            layer[r] = Some(depth);
            even.push(r);
            predecessors[r].push(l);
          }
          // Reached again from the same layer, another tight edge
          Some(d) if d == depth => predecessors[r].push(l),
          Some(_) => {}
        }
      }
    }
    if even.is_empty() {
      trace!("Layering exhausted at depth {}", depth);
      return Frontier::Exhausted;
    }
    let frontier: Vec<Node> = even
      .iter()
      .cloned()
      .filter(|&r| unmatched_right.contains(r))
      .collect();
    if !frontier.is_empty() {
      trace!(
        "Layering reached {} free right node(s) at depth {}",
        frontier.len(),
        depth
      );
      return Frontier::Augmentable(LayeredMap {
        layer,
        predecessors,
        frontier,
        depth,
      });
    }

    // right -> left over matching edges
    depth += 1;
    odd = Vec::with_capacity(even.len());
    for &r in &even {
      let l = match matching.mate(r) {
        Some(l) => l,
        None => continue,
      };
      if layer[l].is_none() {
        layer[l] = Some(depth);
        predecessors[l].push(r);
        odd.push(l);
      }
    }
  }
}
