use crate::graph::GraphView;
use crate::matching::{Matching, UnmatchedSet};

/// Seeds `matching` with a single greedy pass and returns the number of
/// pairs added.
///
/// Left nodes are visited in partition order and each takes its first
/// unclaimed neighbor in edge-list order. The result is a valid matching but
/// not necessarily a maximum one.
pub fn greedy_bootstrap(
  view: &GraphView,
  matching: &mut Matching,
  unmatched_left: &mut UnmatchedSet,
  unmatched_right: &mut UnmatchedSet,
) -> usize {
  let before = matching.len();
  for l in view.left_nodes() {
    if matching.is_matched(l) {
      continue;
    }
    let free = view
      .neighbors(l)
      .iter()
      .cloned()
      .find(|&r| !matching.is_matched(r));
    if let Some(r) = free {
      matching.link(l, r);
      unmatched_left.remove(l);
      unmatched_right.remove(r);
    }
  }
  matching.len() - before
}
