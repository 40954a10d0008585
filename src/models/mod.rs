pub mod matrix;
pub mod path;

pub use matrix::{Matrix, FINDER_SIZE};
pub use path::{Path, PathOp};
