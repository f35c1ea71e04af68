pub mod error;
pub mod matrix;
pub mod weight;

mod graph;

pub use error::{AddArcError, AddArcErrorKind, CreateGraphError};
pub use graph::Graph;
pub use matrix::Matrix;
pub use weight::Weight;
