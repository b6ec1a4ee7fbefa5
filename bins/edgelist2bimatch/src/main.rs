extern crate serde_json;
#[macro_use]
extern crate log;
extern crate bimatch;

use bimatch::error::{EdgeListError, StoreError};
use bimatch::store::encode_graph;
use bimatch::{BipartiteGraph, GraphView, InvalidGraphInput};
use std::env;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::Path;

#[derive(Debug)]
enum Error {
    Usage,
    Json(serde_json::Error),
    EdgeList(EdgeListError),
    Graph(InvalidGraphInput),
    Store(StoreError),
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<EdgeListError> for Error {
    fn from(error: EdgeListError) -> Self {
        Self::EdgeList(error)
    }
}

impl From<InvalidGraphInput> for Error {
    fn from(error: InvalidGraphInput) -> Self {
        Self::Graph(error)
    }
}

impl From<StoreError> for Error {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}

fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <edge list or .json graph> <output.bimatch>", args[0]);
        return Err(Error::Usage);
    }
    let in_path_string = &args[1];
    let out_path_string = &args[2];

    let in_path = Path::new(in_path_string);
    info!("Loading graph @ {}", in_path_string);
    let mut contents = String::new();
    File::open(in_path)?.read_to_string(&mut contents)?;
    let graph: BipartiteGraph = if in_path.extension().map_or(false, |ext| ext == "json") {
        info!("Deserializing JSON graph");
        serde_json::from_str(&contents)?
    } else {
        info!("Parsing edge list");
        BipartiteGraph::from_list(&contents)?
    };
    // Refuse to pack a graph the matcher would reject
    let view = GraphView::new(&graph)?;
    info!(
        "Graph has {} left, {} right vertices and {} distinct edges",
        view.left_count(),
        view.right_count(),
        view.edge_count()
    );
    if view.edge_count() < graph.edges.len() {
        warn!(
            "{} duplicate edge(s) will be packed as given",
            graph.edges.len() - view.edge_count()
        );
    }
    let packed = encode_graph(&graph)?;
    info!("Writing {} ({} bytes)", out_path_string, packed.len());
    let mut file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(out_path_string)?;
    file.write_all(&packed[..])?;
    Ok(())
}
