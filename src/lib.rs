// src/lib.rs
// qrvis: renders a matrix barcode symbol into vector drawing calls on a
// pluggable surface. The encoder producing the matrix and any raster or
// GUI back end live outside this crate.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod style;
pub mod surface;

pub use error::{RenderError, SurfaceError};
pub use models::{Matrix, Path, PathOp};
pub use render::Renderer;
pub use style::{EyeFill, EyeShape, Fill, FillSet, ModuleShape, RendererStyle, Rgb, RingFill};
pub use surface::{RecordingSurface, Surface, SvgSurface};
