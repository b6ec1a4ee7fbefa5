extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate env_logger;
#[macro_use]
extern crate serde_derive;
extern crate bimatch;

use bimatch::bipartite::maximum_matching_size;
use bimatch::error::{EdgeListError, StoreError};
use bimatch::hopcroft_karp::PhaseReport;
use bimatch::store::decode_graph;
use bimatch::{BipartiteGraph, InvalidGraphInput, MatchingConfig, MatchingRun, Vertex};
use std::env;
use std::error;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
enum Error {
    Usage(String),
    Json(serde_json::Error),
    EdgeList(EdgeListError),
    Graph(InvalidGraphInput),
    Store(StoreError),
    Io(std::io::Error),
    /// The reference matcher found a larger matching
    NotMaximum { found: usize, reference: usize },
    /// A pair is not an input edge or a vertex is matched twice
    InvalidMatching,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(s) => write!(f, "{}", s),
            Self::Json(e) => write!(f, "{}", e),
            Self::EdgeList(e) => write!(f, "{}", e),
            Self::Graph(e) => write!(f, "invalid graph: {}", e),
            Self::Store(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "{}", e),
            Self::NotMaximum { found, reference } => write!(
                f,
                "matching of size {} is not maximum, reference found {}",
                found, reference
            ),
            Self::InvalidMatching => write!(f, "matching failed validation"),
        }
    }
}

impl error::Error for Error {}

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

#[derive(Debug, Serialize)]
struct Output {
    pairs: Vec<(Vertex, Vertex)>,
    cardinality: usize,
    bootstrapped: usize,
    phases: Vec<PhaseReport>,
    complete: bool,
}

struct Options {
    path: String,
    verify: bool,
    greedy_bootstrap: bool,
    max_phases: Option<usize>,
}

fn usage(program: &str) -> Error {
    Error::Usage(format!(
        "usage: {} <graph: .txt edge list, .json or .bimatch> [--verify] [--no-greedy] [--max-phases N]",
        program
    ))
}

fn parse_args(args: &[String]) -> Result<Options, Error> {
    let program = args.get(0).map(|s| s.as_str()).unwrap_or("bimatch_solve");
    let mut options = Options {
        path: String::new(),
        verify: false,
        greedy_bootstrap: true,
        max_phases: None,
    };
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--verify" => options.verify = true,
            "--no-greedy" => options.greedy_bootstrap = false,
            "--max-phases" => {
                let n = rest
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .ok_or_else(|| usage(program))?;
                options.max_phases = Some(n);
            }
            path if options.path.is_empty() && !path.starts_with("--") => {
                options.path = path.to_string()
            }
            _ => return Err(usage(program)),
        }
    }
    if options.path.is_empty() {
        return Err(usage(program));
    }
    Ok(options)
}

/// Checks the run against the graph and the reference matcher
fn check_run(run: &MatchingRun) -> Result<(), Error> {
    if !run.matching.verify(&run.view) {
        return Err(Error::InvalidMatching);
    }
    let reference = maximum_matching_size(&run.view);
    if reference == run.len() {
        info!("Reference matcher agrees: {} pairs", reference);
    } else if run.complete {
        return Err(Error::NotMaximum {
            found: run.len(),
            reference,
        });
    } else {
        warn!(
            "Stopped at {} pairs, reference matcher found {}",
            run.len(),
            reference
        );
    }
    Ok(())
}

fn load_graph(path: &Path) -> Result<BipartiteGraph, Error> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let graph = match extension {
        "bimatch" => {
            info!("Unpacking graph @ {:?}", path);
            decode_graph(&std::fs::read(path)?)?
        }
        "json" => {
            info!("Deserializing JSON graph @ {:?}", path);
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        _ => {
            info!("Parsing edge list @ {:?}", path);
            BipartiteGraph::from_list(&std::fs::read_to_string(path)?)?
        }
    };
    Ok(graph)
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args)?;
    let graph = load_graph(Path::new(&options.path))?;
    let mut config = MatchingConfig::new(&graph);
    config.greedy_bootstrap = options.greedy_bootstrap;
    config.max_phases = options.max_phases;
    let run = MatchingRun::from_config(&config).map_err(Error::from)?;
    info!(
        "Matched {} pairs in {} phase(s), {} from the greedy seed",
        run.len(),
        run.phases.len(),
        run.bootstrapped
    );
    if !run.complete {
        warn!("Phase budget exhausted, the matching may not be maximum");
    }
    if options.verify {
        check_run(&run)?;
    }
    let output = Output {
        pairs: run.pairs(),
        cardinality: run.len(),
        bootstrapped: run.bootstrapped,
        phases: run.phases.clone(),
        complete: run.complete,
    };
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &output)?;
    println!();
    Ok(())
}
