use crate::graph::Node;
use crate::layers::LayeredMap;

/// Extracts vertex-disjoint shortest augmenting paths from one phase's layers.
///
/// Nodes are consumed when they join an extracted path, or when a search
/// proves they cannot reach an unconsumed root. Consumption only grows within
/// a phase, so a node that failed once stays failed.
pub struct AugmentingPathFinder<'a> {
  layers: &'a LayeredMap,
  consumed: Vec<bool>,
}

impl<'a> AugmentingPathFinder<'a> {
  pub fn new(layers: &'a LayeredMap) -> Self {
    Self {
      layers,
      consumed: vec![false; layers.node_count()],
    }
  }

  /// Walks predecessor links back from `start` to a root.
  ///
  /// The returned path runs from the unmatched left node to `start` and
  /// alternates non-matching and matching edges.
  pub fn find_path(&mut self, start: Node) -> Option<Vec<Node>> {
    if self.consumed[start] || self.layers.layer(start).is_none() {
      return None;
    }
    // (node, index of the next predecessor to try)
    let mut stack: Vec<(Node, usize)> = Vec::with_capacity(self.layers.depth() + 1);
    stack.push((start, 0));
    while let Some(top) = stack.last_mut() {
      let node = top.0;
      if self.layers.is_root(node) {
        let path: Vec<Node> = stack.iter().rev().map(|&(n, _)| n).collect();
        for &n in &path {
          self.consumed[n] = true;
        }
        return Some(path);
      }
      let predecessors = self.layers.predecessors(node);
      let mut next = None;
      while top.1 < predecessors.len() {
        let candidate = predecessors[top.1];
        top.1 += 1;
        if !self.consumed[candidate] {
          next = Some(candidate);
          break;
        }
      }
      match next {
        Some(p) => stack.push((p, 0)),
        None => {
          // dead end
          self.consumed[node] = true;
          stack.pop();
        }
      }
    }
    None
  }

  /// A maximal set of vertex-disjoint augmenting paths, one attempt per
  /// frontier node in discovery order
  pub fn find_paths(mut self) -> Vec<Vec<Node>> {
    let layers = self.layers;
    layers
      .frontier()
      .iter()
      .filter_map(|&r| self.find_path(r))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use crate::graph::*;
  use crate::layers::{build_layers, Frontier, LayeredMap};
  use crate::matching::{Matching, UnmatchedSet};
  use crate::paths::*;
  use std::collections::HashSet;

  fn layered(view: &GraphView, matching: &Matching) -> LayeredMap {
    let mut ul = UnmatchedSet::full(view.left_nodes());
    let mut ur = UnmatchedSet::full(view.right_nodes());
    for n in 0..view.node_count() {
      if matching.is_matched(n) {
        if view.side(n) == Side::Left {
          ul.remove(n);
        } else {
          ur.remove(n);
        }
      }
    }
    match build_layers(view, matching, &ul, &ur) {
      Frontier::Augmentable(layers) => layers,
      Frontier::Exhausted => panic!("expected augmenting paths"),
    }
  }

  #[test]
  fn path_alternates_from_free_left_to_free_right() {
    let graph = BipartiteGraph::from_parts(
      vec![1, 2, 3],
      vec![4, 5, 6],
      vec![(1, 5), (1, 6), (2, 4), (2, 6), (3, 4), (3, 5)],
    );
    let view = GraphView::new(&graph).unwrap();
    let n = |v| view.node(v).unwrap();
    let mut matching = Matching::new(view.node_count());
    matching.link(n(1), n(5));
    matching.link(n(2), n(4));
    let layers = layered(&view, &matching);
    let paths = AugmentingPathFinder::new(&layers).find_paths();
    assert_eq!(paths.len(), 1);
    let path: Vec<Vertex> = paths[0].iter().map(|&p| view.vertex(p)).collect();
    assert_eq!(path.len(), 4);
    assert_eq!(path[0], 3);
    assert_eq!(path[3], 6);
    // 3 - 4 = 2 - 6 or 3 - 5 = 1 - 6
    assert!(path == vec![3, 4, 2, 6] || path == vec![3, 5, 1, 6]);
  }

  #[test]
  fn paths_in_one_phase_are_vertex_disjoint() {
    // Two free left nodes both reaching the free right nodes through the same
    // matched pair (2, 5): only one of them may use it
    let graph = BipartiteGraph::from_parts(
      vec![1, 2, 3],
      vec![4, 5, 6],
      vec![(1, 5), (3, 5), (2, 5), (2, 4), (2, 6)],
    );
    let view = GraphView::new(&graph).unwrap();
    let n = |v| view.node(v).unwrap();
    let mut matching = Matching::new(view.node_count());
    matching.link(n(2), n(5));
    let layers = layered(&view, &matching);
    assert_eq!(layers.depth(), 3);
    let paths = AugmentingPathFinder::new(&layers).find_paths();
    assert_eq!(paths.len(), 1);
    let mut seen = HashSet::new();
    for path in &paths {
      for node in path {
        assert!(seen.insert(*node));
      }
    }
  }

  #[test]
  fn consumed_start_yields_nothing() {
    let graph = BipartiteGraph::from_parts(vec![1], vec![2], vec![(1, 2)]);
    let view = GraphView::new(&graph).unwrap();
    let matching = Matching::new(view.node_count());
    let layers = layered(&view, &matching);
    let mut finder = AugmentingPathFinder::new(&layers);
    assert_eq!(finder.find_path(1), Some(vec![0, 1]));
    assert_eq!(finder.find_path(1), None);
  }
}
