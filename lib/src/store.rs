//! # Packed graph files
//!
//! A packed graph is a bincode encoded `BipartiteGraph`, gzip compressed.
use crate::error::StoreError;
use crate::graph::BipartiteGraph;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::prelude::*;

/// Returns the packed bytes of `graph`
pub fn encode_graph(graph: &BipartiteGraph) -> Result<Vec<u8>, StoreError> {
  let encoded = bincode::serialize(graph)?;
  let mut e = GzEncoder::new(Vec::with_capacity(encoded.len() / 2), Compression::default());
  e.write_all(&encoded[..])?;
  Ok(e.finish()?)
}

/// Returns the graph packed into `bytes`
pub fn decode_graph(bytes: &[u8]) -> Result<BipartiteGraph, StoreError> {
  let mut gz = GzDecoder::new(bytes);
  let mut s: Vec<u8> = Vec::new();
  gz.read_to_end(&mut s)?;
  Ok(bincode::deserialize(&s)?)
}
