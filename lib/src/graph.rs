//! # Bipartite graph input and adjacency view
//!
//! `BipartiteGraph` is the input record as supplied by the caller.
//! `GraphView` is the validated, densely indexed form every matcher in this
//! crate runs on: left vertices take nodes `0..n` and right vertices take
//! nodes `n..n + m`, in partition order.
use crate::error::InvalidGraphInput;
use std::collections::{HashMap, HashSet};

/// Opaque vertex identifier
pub type Vertex = i64;

/// An undirected edge. Either orientation is accepted as input.
pub type Edge = (Vertex, Vertex);

/// Dense node index into a `GraphView`
pub type Node = usize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
  Left,
  Right,
}

/// Two vertex partitions and the edges between them
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BipartiteGraph {
  pub left: Vec<Vertex>,
  pub right: Vec<Vertex>,
  pub edges: Vec<Edge>,
}

impl BipartiteGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_parts<L, R, E>(left: L, right: R, edges: E) -> Self
  where
    L: IntoIterator<Item = Vertex>,
    R: IntoIterator<Item = Vertex>,
    E: IntoIterator<Item = Edge>,
  {
    Self {
      left: left.into_iter().collect(),
      right: right.into_iter().collect(),
      edges: edges.into_iter().collect(),
    }
  }

  /// Checks the bipartite preconditions, reporting the first violation found.
  ///
  /// Partitions are checked before edges, so a graph with overlapping
  /// partitions never reports an edge error.
  pub fn validate(&self) -> Result<(), InvalidGraphInput> {
    self.sides().map(|_| ())
  }

  fn sides(&self) -> Result<HashMap<Vertex, Side>, InvalidGraphInput> {
    let mut sides = HashMap::with_capacity(self.left.len() + self.right.len());
    for &v in &self.left {
      if sides.insert(v, Side::Left).is_some() {
        return Err(InvalidGraphInput::DuplicateVertex(v));
      }
    }
    for &v in &self.right {
      match sides.insert(v, Side::Right) {
        Some(Side::Left) => return Err(InvalidGraphInput::PartitionsOverlap(v)),
        Some(Side::Right) => return Err(InvalidGraphInput::DuplicateVertex(v)),
        None => {}
      }
    }
    for &(a, b) in &self.edges {
      match (sides.get(&a), sides.get(&b)) {
        (Some(x), Some(y)) if x == y => {
          return Err(InvalidGraphInput::EdgeEndpointsInSamePartition((a, b)))
        }
        (Some(_), Some(_)) => {}
        _ => return Err(InvalidGraphInput::EdgeEndpointOutsidePartitions((a, b))),
      }
    }
    Ok(sides)
  }
}

/// Validated adjacency lookup over a `BipartiteGraph`
#[derive(Debug, Clone)]
pub struct GraphView {
  vertices: Vec<Vertex>,
  nodes: HashMap<Vertex, Node>,
  adjacency: Vec<Vec<Node>>,
  left_count: usize,
  edge_count: usize,
}

impl GraphView {
  pub fn new(graph: &BipartiteGraph) -> Result<Self, InvalidGraphInput> {
    graph.validate()?;
    let left_count = graph.left.len();
    let vertices: Vec<Vertex> = graph.left.iter().chain(graph.right.iter()).cloned().collect();
    let nodes: HashMap<Vertex, Node> = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut adjacency = vec![Vec::new(); vertices.len()];
    let mut seen = HashSet::with_capacity(graph.edges.len());
    for &(a, b) in &graph.edges {
      let (a, b) = (nodes[&a], nodes[&b]);
      let (l, r) = if a < left_count { (a, b) } else { (b, a) };
      // Parallel edges carry no extra capacity
      if !seen.insert((l, r)) {
        continue;
      }
      adjacency[l].push(r);
      adjacency[r].push(l);
    }
    let edge_count = seen.len();
    if edge_count < graph.edges.len() {
      debug!(
        "Collapsed {} duplicate edge(s)",
        graph.edges.len() - edge_count
      );
    }
    Ok(Self {
      vertices,
      nodes,
      adjacency,
      left_count,
      edge_count,
    })
  }

  /// Nodes adjacent to `node`, in edge-list order
  pub fn neighbors(&self, node: Node) -> &[Node] {
    &self.adjacency[node]
  }

  /// Vertices adjacent to `vertex`. Unknown and isolated vertices have none.
  pub fn neighbors_of(&self, vertex: Vertex) -> Vec<Vertex> {
    match self.nodes.get(&vertex) {
      Some(&node) => self.adjacency[node]
        .iter()
        .map(|&n| self.vertices[n])
        .collect(),
      None => Vec::new(),
    }
  }

  pub fn side(&self, node: Node) -> Side {
    if node < self.left_count {
      Side::Left
    } else {
      Side::Right
    }
  }

  pub fn vertex(&self, node: Node) -> Vertex {
    self.vertices[node]
  }

  pub fn node(&self, vertex: Vertex) -> Option<Node> {
    self.nodes.get(&vertex).cloned()
  }

  pub fn left_count(&self) -> usize {
    self.left_count
  }

  pub fn right_count(&self) -> usize {
    self.vertices.len() - self.left_count
  }

  pub fn node_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of distinct edges
  pub fn edge_count(&self) -> usize {
    self.edge_count
  }

  pub fn left_nodes(&self) -> std::ops::Range<Node> {
    0..self.left_count
  }

  pub fn right_nodes(&self) -> std::ops::Range<Node> {
    self.left_count..self.vertices.len()
  }

  /// True if `l` and `r` are joined by an input edge
  pub fn has_edge(&self, l: Node, r: Node) -> bool {
    let (a, b) = if self.adjacency[l].len() <= self.adjacency[r].len() {
      (l, r)
    } else {
      (r, l)
    };
    self.adjacency[a].contains(&b)
  }
}

#[cfg(test)]
mod tests {
  use crate::error::InvalidGraphInput;
  use crate::graph::*;

  fn triangle_free() -> BipartiteGraph {
    BipartiteGraph::from_parts(
      vec![1, 2, 3],
      vec![4, 5, 6],
      vec![(1, 5), (1, 6), (2, 4), (2, 6), (3, 4), (3, 5)],
    )
  }

  #[test]
  fn neighbors_are_symmetric() {
    let view = GraphView::new(&triangle_free()).unwrap();
    assert_eq!(view.neighbors_of(1), vec![5, 6]);
    assert_eq!(view.neighbors_of(4), vec![2, 3]);
    assert_eq!(view.neighbors_of(5), vec![1, 3]);
  }

  #[test]
  fn reversed_edges_are_the_same_edge() {
    let graph = BipartiteGraph::from_parts(vec![1], vec![2], vec![(2, 1), (1, 2)]);
    let view = GraphView::new(&graph).unwrap();
    assert_eq!(view.edge_count(), 1);
    assert_eq!(view.neighbors_of(1), vec![2]);
    assert_eq!(view.neighbors_of(2), vec![1]);
  }

  #[test]
  fn isolated_and_unknown_vertices_have_no_neighbors() {
    let graph = BipartiteGraph::from_parts(vec![1, 2], vec![3], vec![(1, 3)]);
    let view = GraphView::new(&graph).unwrap();
    assert!(view.neighbors_of(2).is_empty());
    assert!(view.neighbors_of(42).is_empty());
  }

  #[test]
  fn nodes_follow_partition_order() {
    let view = GraphView::new(&triangle_free()).unwrap();
    assert_eq!(view.left_count(), 3);
    assert_eq!(view.right_count(), 3);
    assert_eq!(view.node(4), Some(3));
    assert_eq!(view.side(3), Side::Right);
    assert_eq!(view.side(2), Side::Left);
    assert_eq!(view.vertex(5), 6);
    assert!(view.has_edge(0, 4));
    assert!(!view.has_edge(0, 3));
  }

  #[test]
  fn overlapping_partitions_are_rejected() {
    let graph = BipartiteGraph::from_parts(vec![1, 2], vec![2, 3], vec![]);
    assert_eq!(
      graph.validate(),
      Err(InvalidGraphInput::PartitionsOverlap(2))
    );
  }

  #[test]
  fn duplicate_vertices_are_rejected() {
    let graph = BipartiteGraph::from_parts(vec![1, 1], vec![2], vec![]);
    assert_eq!(graph.validate(), Err(InvalidGraphInput::DuplicateVertex(1)));
    let graph = BipartiteGraph::from_parts(vec![1], vec![2, 2], vec![]);
    assert_eq!(graph.validate(), Err(InvalidGraphInput::DuplicateVertex(2)));
  }

  #[test]
  fn edge_outside_partitions_is_rejected() {
    let graph = BipartiteGraph::from_parts(vec![1], vec![2], vec![(1, 7)]);
    assert_eq!(
      GraphView::new(&graph).err(),
      Some(InvalidGraphInput::EdgeEndpointOutsidePartitions((1, 7)))
    );
  }

  #[test]
  fn edge_inside_one_partition_is_rejected() {
    let graph = BipartiteGraph::from_parts(vec![1, 2], vec![3], vec![(1, 3), (2, 1)]);
    assert_eq!(
      graph.validate(),
      Err(InvalidGraphInput::EdgeEndpointsInSamePartition((2, 1)))
    );
  }
}
