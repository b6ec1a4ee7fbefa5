//! # Hopcroft-Karp maximum matching
//!
//! The driver seeds a matching greedily, then runs phases until the layering
//! finds no augmenting path. Each phase builds the layered graph, extracts a
//! maximal set of vertex-disjoint shortest augmenting paths, and applies them.
//! Which maximum matching comes back depends on the order of the left
//! partition and of the edge list; callers should only rely on its size.
use crate::error::InvalidGraphInput;
use crate::graph::{BipartiteGraph, Edge, GraphView, Vertex};
use crate::greedy::greedy_bootstrap;
use crate::layers::{build_layers, Frontier};
use crate::matching::{Matching, UnmatchedSet};
use crate::paths::AugmentingPathFinder;
use crate::update::apply_augmenting_path;

pub struct MatchingConfig<'a> {
  pub graph: &'a BipartiteGraph,
  /// Stop after this many phases, returning a valid but possibly smaller
  /// matching. `None` runs to completion.
  pub max_phases: Option<usize>,
  /// Seed the first phase with a greedy matching
  pub greedy_bootstrap: bool,
}

impl<'a> MatchingConfig<'a> {
  pub fn new(graph: &'a BipartiteGraph) -> Self {
    Self {
      graph,
      max_phases: None,
      greedy_bootstrap: true,
    }
  }
}

/// Summary of one phase
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
  /// 1-based phase number
  pub phase: usize,
  /// Edge count of every augmenting path applied in this phase
  pub path_length: usize,
  /// Number of paths applied
  pub augmented: usize,
  /// Unmatched left vertices left after the phase
  pub unmatched_left: usize,
}

#[derive(Debug, Clone)]
pub struct MatchingRun {
  pub view: GraphView,
  pub matching: Matching,
  /// Pairs contributed by the greedy seed
  pub bootstrapped: usize,
  pub phases: Vec<PhaseReport>,
  /// False if the phase budget ran out before the matching was proven maximum
  pub complete: bool,
}

impl MatchingRun {
  pub fn from_config(config: &MatchingConfig) -> Result<Self, InvalidGraphInput> {
    let view = GraphView::new(config.graph)?;
    let mut matching = Matching::new(view.node_count());
    let mut unmatched_left = UnmatchedSet::full(view.left_nodes());
    let mut unmatched_right = UnmatchedSet::full(view.right_nodes());

    let bootstrapped = if config.greedy_bootstrap {
      greedy_bootstrap(&view, &mut matching, &mut unmatched_left, &mut unmatched_right)
    } else {
      0
    };
    debug!(
      "Greedy seed matched {} of {} left vertices",
      bootstrapped,
      view.left_count()
    );

    let mut phases = Vec::new();
    let complete = loop {
      if unmatched_left.is_empty() || unmatched_right.is_empty() {
        break true;
      }
      if config.max_phases.map_or(false, |max| phases.len() >= max) {
        debug!("Phase budget of {} reached", phases.len());
        break false;
      }
      let layers = match build_layers(&view, &matching, &unmatched_left, &unmatched_right) {
        Frontier::Augmentable(layers) => layers,
        Frontier::Exhausted => break true,
      };
      let paths = AugmentingPathFinder::new(&layers).find_paths();
      debug_assert!(!paths.is_empty(), "layering found a frontier without a path");
      for path in &paths {
        trace!("Augmenting along {:?}", path);
        apply_augmenting_path(&mut matching, &mut unmatched_left, &mut unmatched_right, path);
      }
      let report = PhaseReport {
        phase: phases.len() + 1,
        path_length: layers.depth(),
        augmented: paths.len(),
        unmatched_left: unmatched_left.len(),
      };
      debug!(
        "Phase {}: {} path(s) of length {}, {} left vertices unmatched",
        report.phase, report.augmented, report.path_length, report.unmatched_left
      );
      phases.push(report);
    };
    debug_assert!(matching.verify(&view));

    Ok(Self {
      view,
      matching,
      bootstrapped,
      phases,
      complete,
    })
  }

  /// Matched pairs as (left vertex, right vertex)
  pub fn pairs(&self) -> Vec<(Vertex, Vertex)> {
    self.matching.pairs(&self.view)
  }

  pub fn len(&self) -> usize {
    self.matching.len()
  }

  pub fn is_empty(&self) -> bool {
    self.matching.is_empty()
  }
}

/// Returns a maximum cardinality matching of the bipartite graph with the
/// given partitions and edges, as (left, right) pairs in no particular order.
///
/// # Example
///
/// ```
/// let pairs = bimatch::maximum_matching(&[1, 2], &[3, 4], &[(1, 3), (2, 3), (2, 4)]).unwrap();
/// assert_eq!(pairs.len(), 2);
/// ```
pub fn maximum_matching(
  left: &[Vertex],
  right: &[Vertex],
  edges: &[Edge],
) -> Result<Vec<(Vertex, Vertex)>, InvalidGraphInput> {
  let graph = BipartiteGraph::from_parts(left.iter().cloned(), right.iter().cloned(), edges.iter().cloned());
  let run = MatchingRun::from_config(&MatchingConfig::new(&graph))?;
  Ok(run.pairs())
}
