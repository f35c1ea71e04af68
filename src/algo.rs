pub mod shortest_paths;

pub use shortest_paths::{floyd_warshall, reconstruct_path, Outcome, ShortestPaths};
