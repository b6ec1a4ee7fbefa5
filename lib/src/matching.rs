//! # Matching and unmatched-vertex bookkeeping
//!
use crate::graph::{GraphView, Node, Side, Vertex};

/// A set of (left, right) node pairs in which every node appears at most once.
///
/// Stored as a mate table so that edge membership and vertex coverage are
/// both constant time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
  mate: Vec<Option<Node>>,
  len: usize,
}

impl Matching {
  /// An empty matching over `node_count` nodes
  pub fn new(node_count: usize) -> Self {
    Self {
      mate: vec![None; node_count],
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn mate(&self, node: Node) -> Option<Node> {
    self.mate[node]
  }

  pub fn is_matched(&self, node: Node) -> bool {
    self.mate[node].is_some()
  }

  pub fn contains(&self, a: Node, b: Node) -> bool {
    self.mate[a] == Some(b)
  }

  /// Adds the edge (l, r). Both nodes must be unmatched.
  pub fn link(&mut self, l: Node, r: Node) {
    debug_assert!(
      self.mate[l].is_none() && self.mate[r].is_none(),
      "node matched twice: ({}, {})",
      l,
      r
    );
    self.mate[l] = Some(r);
    self.mate[r] = Some(l);
    self.len += 1;
  }

  /// Removes the edge (l, r), which must be in the matching.
  pub fn unlink(&mut self, l: Node, r: Node) {
    debug_assert!(
      self.contains(l, r) && self.contains(r, l),
      "edge ({}, {}) is not matched",
      l,
      r
    );
    self.mate[l] = None;
    self.mate[r] = None;
    self.len -= 1;
  }

  /// Matched pairs as (left vertex, right vertex), in left partition order
  pub fn pairs(&self, view: &GraphView) -> Vec<(Vertex, Vertex)> {
    view
      .left_nodes()
      .filter_map(|l| self.mate[l].map(|r| (view.vertex(l), view.vertex(r))))
      .collect()
  }

  /// True if every pair is an input edge between opposite sides and the mate
  /// table is symmetric
  pub fn verify(&self, view: &GraphView) -> bool {
    if self.mate.len() != view.node_count() {
      return false;
    }
    let mut count = 0;
    for (node, mate) in self.mate.iter().enumerate() {
      let mate = match mate {
        Some(m) => *m,
        None => continue,
      };
      if self.mate[mate] != Some(node) || view.side(node) == view.side(mate) {
        return false;
      }
      if view.side(node) == Side::Left {
        if !view.has_edge(node, mate) {
          return false;
        }
        count += 1;
      }
    }
    count == self.len
  }
}

/// Membership flags for the nodes of one partition not covered by a matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedSet {
  member: Vec<bool>,
  offset: Node,
  len: usize,
}

impl UnmatchedSet {
  /// A set that initially holds every node in `nodes`
  pub fn full(nodes: std::ops::Range<Node>) -> Self {
    let len = nodes.len();
    Self {
      member: vec![true; len],
      offset: nodes.start,
      len,
    }
  }

  pub fn contains(&self, node: Node) -> bool {
    node >= self.offset
      && self
        .member
        .get(node - self.offset)
        .cloned()
        .unwrap_or(false)
  }

  pub fn insert(&mut self, node: Node) {
    let slot = &mut self.member[node - self.offset];
    if !*slot {
      *slot = true;
      self.len += 1;
    }
  }

  pub fn remove(&mut self, node: Node) {
    let slot = &mut self.member[node - self.offset];
    if *slot {
      *slot = false;
      self.len -= 1;
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Members in ascending node order
  pub fn iter<'a>(&'a self) -> impl Iterator<Item = Node> + 'a {
    let offset = self.offset;
    self
      .member
      .iter()
      .enumerate()
      .filter(|&(_, &m)| m)
      .map(move |(i, _)| i + offset)
  }
}

#[cfg(test)]
mod tests {
  use crate::graph::*;
  use crate::matching::*;

  fn square() -> GraphView {
    let graph = BipartiteGraph::from_parts(
      vec![10, 11],
      vec![20, 21],
      vec![(10, 20), (10, 21), (11, 20)],
    );
    GraphView::new(&graph).unwrap()
  }

  #[test]
  fn link_and_unlink_track_cardinality() {
    let view = square();
    let mut m = Matching::new(view.node_count());
    m.link(0, 3);
    m.link(1, 2);
    assert_eq!(m.len(), 2);
    assert!(m.contains(3, 0));
    assert!(m.verify(&view));
    assert_eq!(m.pairs(&view), vec![(10, 21), (11, 20)]);
    m.unlink(1, 2);
    assert_eq!(m.len(), 1);
    assert_eq!(m.mate(2), None);
    assert!(m.verify(&view));
  }

  #[test]
  fn verify_rejects_non_edges() {
    let view = square();
    let mut m = Matching::new(view.node_count());
    // 11 - 21 is not an input edge
    m.link(1, 3);
    assert!(!m.verify(&view));
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic]
  fn double_match_is_an_invariant_violation() {
    let mut m = Matching::new(4);
    m.link(0, 2);
    m.link(1, 2);
  }

  #[test]
  fn unmatched_set_tracks_membership() {
    let mut s = UnmatchedSet::full(3..6);
    assert_eq!(s.len(), 3);
    assert!(s.contains(4));
    assert!(!s.contains(2));
    assert!(!s.contains(6));
    s.remove(4);
    s.remove(4);
    assert_eq!(s.len(), 2);
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 5]);
    s.insert(4);
    assert_eq!(s.len(), 3);
    assert!(!s.is_empty());
  }
}
