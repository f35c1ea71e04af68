//! All-pairs shortest paths in dense directed graphs with negative arc
//! weights, negative cycle detection and path reconstruction.
//!
//! ```
//! use warshall::prelude::*;
//!
//! let mut graph = Graph::new(3).unwrap();
//! graph.extend_with_arcs([(0, 1, 2), (1, 2, -1)]).unwrap();
//!
//! match ShortestPaths::on(&mut graph).run() {
//!     Outcome::Solved(paths) => assert_eq!(paths.reconstruct(0, 2), Some(vec![0, 1, 2])),
//!     Outcome::NegativeCycle(_) => unreachable!(),
//! }
//! ```

pub mod algo;
pub mod core;
pub mod infra;

pub mod prelude {
    pub use crate::{
        algo::{Outcome, ShortestPaths},
        core::{Graph, Weight},
    };
}
