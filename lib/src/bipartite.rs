//! # Reference maximum bipartite matching
//!
//! A deliberately simple augmenting path matcher, independent of the
//! Hopcroft-Karp phases, used to cross check results.

// Various resources for my own benefit
// - https://www.youtube.com/watch?v=HZLKDC9OSaQ
// - https://en.wikipedia.org/wiki/Ford%E2%80%93Fulkerson_algorithm
// - https://en.wikipedia.org/wiki/Hopcroft%E2%80%93Karp_algorithm
// - http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf

use crate::graph::{GraphView, Node};

/// Returns the size of the maximum matching set of the
/// bipartite graph `view`.
/// `seen` and `matches` are implementation-specific data structures
/// that are resized here but may be reused across calls by the caller to
/// reduce runtime allocations. On return `matches[r]` holds the left node
/// matched to right node `left_count + r`.
/// Implementation based on the "Alternate Approach" from
/// http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf
pub fn maximum_bipartite_matching(
    view: &GraphView,
    seen: &mut Vec<bool>,
    matches: &mut Vec<Option<Node>>,
) -> usize {
    let right_count = view.right_count();
    let mut match_count = 0;
    // reset matches
    matches.clear();
    matches.resize(right_count, None);
    for l in view.left_nodes() {
        // reset right nodes seen
        seen.clear();
        seen.resize(right_count, false);
        // Attempt to find a partner for l, displacing earlier choices if needed
        if recursive_find_match(view, l, seen, matches) {
            match_count += 1;
        }
    }
    match_count
}

/// Convenience wrapper that allocates its own scratch space
pub fn maximum_matching_size(view: &GraphView) -> usize {
    let mut seen = Vec::with_capacity(view.right_count());
    let mut matches = Vec::with_capacity(view.right_count());
    maximum_bipartite_matching(view, &mut seen, &mut matches)
}

fn recursive_find_match(
    view: &GraphView,
    l: Node,
    seen: &mut Vec<bool>,
    matches: &mut Vec<Option<Node>>,
) -> bool {
    let offset = view.left_count();
    for &r in view.neighbors(l) {
        let n = r - offset;
        // Is this the first time we're seeing this right node?
        if seen[n] {
            continue;
        }
        seen[n] = true;
        // Is this right node free OR can its current partner move elsewhere
        let available = match matches[n] {
            None => true,
            Some(other) => recursive_find_match(view, other, seen, matches),
        };
        if available {
            matches[n] = Some(l);
            return true;
        }
    }
    false
}
