//! # Text edge lists
//!
//! ```text
//! # comment
//! left: 1 2 3
//! right: 4 5 6
//! 1 5
//! 1, 6  # trailing comment
//! ```
//!
//! `left:` and `right:` lines may repeat and accumulate. Every other non-empty
//! line is one edge, two integers separated by whitespace or a comma.
use crate::error::EdgeListError;
use crate::graph::{BipartiteGraph, Vertex};
use regex::Regex;

impl BipartiteGraph {
  pub fn from_list(list: &str) -> Result<Self, EdgeListError> {
    lazy_static! {
        static ref PARTITION_LINE_REGEX: Regex =
            Regex::new(r"^(?i)(?P<side>left|right)\s*:(?P<vertices>.*)$")
                .expect("Failed to compile PARTITION_LINE_REGEX regex");
        static ref EDGE_LINE_REGEX: Regex =
            Regex::new(r"^(?P<a>[+-]?\d+)(?:\s*,\s*|\s+)(?P<b>[+-]?\d+)$")
                .expect("Failed to compile EDGE_LINE_REGEX regex");
    }
    let mut graph = BipartiteGraph::new();
    for (number, line) in list.lines().enumerate() {
      // Ignore comments
      let trimmed = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
      }
      .trim();
      if trimmed.is_empty() {
        continue;
      }
      if let Some(caps) = PARTITION_LINE_REGEX.captures(trimmed) {
        let side = if caps["side"].eq_ignore_ascii_case("left") {
          &mut graph.left
        } else {
          &mut graph.right
        };
        for token in caps["vertices"].split(|c: char| c == ',' || c.is_whitespace()) {
          if token.is_empty() {
            continue;
          }
          side.push(parse_vertex(token, number, line)?);
        }
        continue;
      }
      let caps = EDGE_LINE_REGEX.captures(trimmed).ok_or_else(|| {
        EdgeListError(format!(
          "Cannot regex capture edge list line {}: {}",
          number + 1,
          line
        ))
      })?;
      let a = parse_vertex(&caps["a"], number, line)?;
      let b = parse_vertex(&caps["b"], number, line)?;
      graph.edges.push((a, b));
    }
    Ok(graph)
  }

  /// Renders the graph in the format read by `from_list`
  pub fn to_list(&self) -> String {
    let join = |vs: &[Vertex]| {
      vs.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
    };
    let mut s = format!("left: {}\nright: {}\n", join(&self.left), join(&self.right));
    for (a, b) in &self.edges {
      s.push_str(&format!("{} {}\n", a, b));
    }
    s
  }
}

fn parse_vertex(token: &str, number: usize, line: &str) -> Result<Vertex, EdgeListError> {
  token.trim_start_matches('+').parse::<Vertex>().or_else(|_| {
    Err(EdgeListError(format!(
      "Cannot parse vertex \"{}\" on edge list line {}: {}",
      token,
      number + 1,
      line
    )))
  })
}

#[macro_export]
macro_rules! graph {
  ($list:expr) => {
    $crate::graph::BipartiteGraph::from_list($list).unwrap_or_else(|e| panic!("Bad edge list: {}", e))
  };
}
