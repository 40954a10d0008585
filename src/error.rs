// src/error.rs
// Typed errors for the render pipeline. Rendering is a deterministic
// transform; every failure is an input-contract or capability violation,
// never a transient condition, so there are no retries at this layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The encoder handed over a non-square matrix. Raised before any
    /// surface call is issued.
    #[error("matrix must have the same width and height (got {width}x{height})")]
    NonSquareMatrix { width: usize, height: usize },

    /// A surface backend failed or refused a primitive mid-render.
    /// Calls already issued are not retracted; the surface owns its
    /// own atomicity.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The backend cannot realize a requested primitive (e.g. gradient
    /// fills, elliptic arcs). The core never works around this.
    #[error("surface does not support {0}")]
    Unsupported(&'static str),

    /// The surface contract was misused (e.g. fill with no open path).
    #[error("malformed surface use: {0}")]
    Malformed(String),
}
