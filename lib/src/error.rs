//! # Errors reported for malformed input graphs
//!
use crate::graph::{Edge, Vertex};
use std::error::Error;
use std::fmt;

/// The input graph is not a valid bipartite graph.
///
/// Reported before any matching work starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidGraphInput {
  /// A vertex appears more than once in the same partition
  DuplicateVertex(Vertex),
  /// A vertex appears in both the left and the right partition
  PartitionsOverlap(Vertex),
  /// An edge names a vertex that is in neither partition
  EdgeEndpointOutsidePartitions(Edge),
  /// Both endpoints of an edge are in the same partition
  EdgeEndpointsInSamePartition(Edge),
}

impl fmt::Display for InvalidGraphInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DuplicateVertex(v) => write!(f, "vertex {} is listed twice in one partition", v),
      Self::PartitionsOverlap(v) => write!(f, "vertex {} is in both partitions", v),
      Self::EdgeEndpointOutsidePartitions((a, b)) => {
        write!(f, "edge ({}, {}) has an endpoint outside both partitions", a, b)
      }
      Self::EdgeEndpointsInSamePartition((a, b)) => {
        write!(f, "edge ({}, {}) has both endpoints in the same partition", a, b)
      }
    }
  }
}

impl Error for InvalidGraphInput {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    None
  }
}

/// A line of a text edge list could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListError(pub String);

impl fmt::Display for EdgeListError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "edge list error: {}", self.0)
  }
}

impl Error for EdgeListError {}

/// Failure to pack or unpack a graph file
#[derive(Debug)]
pub enum StoreError {
  Io(std::io::Error),
  Bincode(bincode::Error),
}

impl From<std::io::Error> for StoreError {
  fn from(error: std::io::Error) -> Self {
    Self::Io(error)
  }
}

impl From<bincode::Error> for StoreError {
  fn from(error: bincode::Error) -> Self {
    Self::Bincode(error)
  }
}

impl fmt::Display for StoreError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "graph file io error: {}", e),
      Self::Bincode(e) => write!(f, "graph file decode error: {}", e),
    }
  }
}

impl Error for StoreError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Bincode(e) => Some(e),
    }
  }
}
