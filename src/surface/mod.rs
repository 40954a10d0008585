// src/surface/mod.rs
// The drawing-surface boundary. The core emits transform state changes
// and absolute-coordinate path primitives; a backend realizes them and
// finally hands back the produced artifact as bytes.

pub mod recording;
pub mod svg;

pub use recording::{RecordingSurface, SurfaceCall};
pub use svg::SvgSurface;

use crate::error::SurfaceError;
use crate::style::{Gradient, Rgb};

/// An axis-aligned surface-space rectangle, used to bound gradient fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One render attempt owns one surface; on failure the surface is
/// discarded (it may have received partial draw calls).
///
/// Path primitives are fallible so a backend can refuse a primitive it
/// cannot realize; the player aborts at the first refusal.
pub trait Surface {
    /// Start a new square surface of the given side length, filled with
    /// the background color.
    fn begin(&mut self, size: f64, background: Rgb) -> Result<(), SurfaceError>;

    fn scale(&mut self, factor: f64);
    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotate subsequent drawing by `degrees` around the given
    /// surface-space pivot. Must be bracketed by push/pop state.
    fn rotate(&mut self, degrees: f64, pivot_x: f64, pivot_y: f64);
    fn push_state(&mut self);
    fn pop_state(&mut self);

    fn begin_path(&mut self) -> Result<(), SurfaceError>;
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;
    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;
    fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> Result<(), SurfaceError>;
    #[allow(clippy::too_many_arguments)]
    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Result<(), SurfaceError>;
    fn close_path(&mut self) -> Result<(), SurfaceError>;

    /// Fill the accumulated path with a solid color.
    fn fill(&mut self, color: Rgb) -> Result<(), SurfaceError>;
    /// Fill the accumulated path with a gradient bounded by `region`.
    /// Backends without gradient support return a capability error.
    fn fill_gradient(&mut self, gradient: &Gradient, region: Region) -> Result<(), SurfaceError>;

    /// Finalize and return the artifact. An empty byte sequence is
    /// permitted when the backend streams its output elsewhere.
    fn finish(&mut self) -> Result<Vec<u8>, SurfaceError>;
}
