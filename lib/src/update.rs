use crate::graph::Node;
use crate::matching::{Matching, UnmatchedSet};

/// Applies one augmenting path to `matching` by symmetric difference.
///
/// `path` alternates left and right nodes, starting at an unmatched left node
/// and ending at an unmatched right node. Edge `i` of the path is added for
/// even `i` and removed for odd `i`. Removals run first so the mate table never
/// holds a node twice. The matching grows by exactly one pair and both
/// endpoints leave their unmatched sets. A path with an odd node count or
/// fewer than two nodes is ignored.
pub fn apply_augmenting_path(
  matching: &mut Matching,
  unmatched_left: &mut UnmatchedSet,
  unmatched_right: &mut UnmatchedSet,
  path: &[Node],
) {
  if path.len() < 2 || path.len() % 2 != 0 {
    debug!("Ignoring malformed path {:?}", path);
    return;
  }
  let before = matching.len();
  for i in (1..path.len() - 1).step_by(2) {
    // (right, left) edge currently in the matching
    matching.unlink(path[i + 1], path[i]);
  }
  for i in (0..path.len()).step_by(2) {
    matching.link(path[i], path[i + 1]);
  }
  unmatched_left.remove(path[0]);
  unmatched_right.remove(path[path.len() - 1]);
  debug_assert_eq!(matching.len(), before + 1);
}
