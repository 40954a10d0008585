// src/render/path_player.rs
// Replays a path's operation sequence as surface primitives, tracking
// the drawing cursor. Operations are played in exact path order and a
// failing surface call aborts playback immediately.

use tracing::trace;

use crate::error::SurfaceError;
use crate::models::{Path, PathOp};
use crate::style::Rgb;
use crate::surface::Surface;

use super::transform::TransformContext;

pub struct PathPlayer<'a> {
    ctx: &'a TransformContext,
}

impl<'a> PathPlayer<'a> {
    pub fn new(ctx: &'a TransformContext) -> Self {
        Self { ctx }
    }

    /// Walks the path and emits its primitives, leaving the surface path
    /// open for the caller to fill.
    pub fn play<S: Surface>(&self, path: &Path, surface: &mut S) -> Result<(), SurfaceError> {
        surface.begin_path()?;

        let origin = self.ctx.apply(0.0, 0.0);
        let mut cursor = origin;

        for op in path {
            match *op {
                PathOp::Move { x, y } => {
                    cursor = self.ctx.apply(x, y);
                    surface.move_to(cursor.0, cursor.1)?;
                }
                PathOp::Line { x, y } => {
                    let to = self.ctx.apply(x, y);
                    surface.line_to(to.0, to.1)?;
                    cursor = to;
                }
                PathOp::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x3,
                    y3,
                } => {
                    let c1 = self.ctx.apply(x1, y1);
                    let c2 = self.ctx.apply(x2, y2);
                    let to = self.ctx.apply(x3, y3);
                    surface.curve_to(c1.0, c1.1, c2.0, c2.1, to.0, to.1)?;
                    cursor = to;
                }
                PathOp::EllipticArc {
                    rx,
                    ry,
                    x_axis_angle,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => {
                    let to = self.ctx.apply(x, y);
                    surface.arc_to(
                        self.ctx.scaled(rx),
                        self.ctx.scaled(ry),
                        x_axis_angle,
                        large_arc,
                        sweep,
                        to.0,
                        to.1,
                    )?;
                    cursor = to;
                }
                PathOp::Close => {
                    surface.close_path()?;
                    // cursor returns to the module-space origin
                    cursor = origin;
                }
            }
            trace!(cursor_x = cursor.0, cursor_y = cursor.1, "played op");
        }
        Ok(())
    }

    /// Plays the path and fills it with a solid color.
    pub fn play_filled<S: Surface>(
        &self,
        path: &Path,
        surface: &mut S,
        color: Rgb,
    ) -> Result<(), SurfaceError> {
        self.play(path, surface)?;
        surface.fill(color)
    }
}
