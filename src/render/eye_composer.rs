// src/render/eye_composer.rs
// Folds the three finder patterns into the render: inherited rings are
// merged into the shared module path (module units, drawn later in the
// body fill), overridden rings are drawn immediately in their own color
// under the eye's offset and rotation.

use tracing::debug;

use crate::error::SurfaceError;
use crate::models::Path;
use crate::style::{EyeFill, RendererStyle, RingFill};
use crate::surface::Surface;

use super::path_player::PathPlayer;
use super::transform::TransformContext;

/// The canonical pivot is 3.5 modules inward from the relevant edges;
/// rotation is 0, 90 and -90 degrees for the three corners.
fn corners(style: &RendererStyle, matrix_size: usize) -> [(&'static str, &EyeFill, f64, f64, f64); 3] {
    let n = matrix_size as f64;
    [
        ("top-left", &style.fill.top_left_eye, 3.5, 3.5, 0.0),
        ("top-right", &style.fill.top_right_eye, n - 3.5, 3.5, 90.0),
        ("bottom-left", &style.fill.bottom_left_eye, 3.5, n - 3.5, -90.0),
    ]
}

/// Composes all three eyes, returning the module path extended with any
/// inherited ring geometry. Every corner goes through the same routine.
pub fn compose_eyes<S: Surface>(
    style: &RendererStyle,
    ctx: &mut TransformContext,
    matrix_size: usize,
    module_path: Path,
    surface: &mut S,
) -> Result<Path, SurfaceError> {
    let external = style.eye_shape.external_path();
    let internal = style.eye_shape.internal_path();

    let mut path = module_path;
    for (corner, fill, x, y, rotation) in corners(style, matrix_size) {
        debug!(
            corner,
            inherits_both = fill.inherits_both(),
            rotation,
            "composing eye"
        );
        path = compose_eye(&external, &internal, fill, x, y, rotation, path, ctx, surface)?;
    }
    Ok(path)
}

#[allow(clippy::too_many_arguments)]
fn compose_eye<S: Surface>(
    external: &Path,
    internal: &Path,
    fill: &EyeFill,
    x: f64,
    y: f64,
    rotation: f64,
    module_path: Path,
    ctx: &mut TransformContext,
    surface: &mut S,
) -> Result<Path, SurfaceError> {
    // pure geometry: fold both rings into the shared path and move on
    if fill.inherits_both() {
        return Ok(module_path
            .append(&external.translate(x, y))
            .append(&internal.translate(x, y)));
    }

    surface.push_state();
    if rotation != 0.0 {
        // pivot in surface units, computed before the offset is set
        let (pivot_x, pivot_y) = ctx.apply(x, y);
        surface.rotate(rotation, pivot_x, pivot_y);
    }
    ctx.set_offset(x * ctx.module_size(), y * ctx.module_size());

    // Inherited rings are merged in absolute module units and played
    // later at zero offset; overridden rings are drawn right now, while
    // this eye's transform state is active.
    let mut path = module_path;
    for (ring, ring_fill) in [(external, fill.external), (internal, fill.internal)] {
        match ring_fill {
            RingFill::Inherit => path = path.append(&ring.translate(x, y)),
            RingFill::Override(color) => {
                PathPlayer::new(ctx).play_filled(ring, surface, color)?;
            }
        }
    }

    ctx.clear_offset();
    surface.pop_state();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{EyeShape, FillSet, ModuleShape, Rgb};
    use crate::surface::{RecordingSurface, SurfaceCall};

    fn style_with_fill(fill: FillSet) -> RendererStyle {
        RendererStyle {
            size: 290.0,
            margin: 4.0,
            x: 0.0,
            y: 0.0,
            module_shape: ModuleShape::Square,
            eye_shape: EyeShape::Square,
            fill,
        }
    }

    fn compose(style: &RendererStyle) -> (Path, RecordingSurface) {
        let mut ctx = TransformContext::new(style.x, style.y, 10.0);
        let mut surface = RecordingSurface::new();
        let path = compose_eyes(style, &mut ctx, 21, Path::new(), &mut surface).unwrap();
        (path, surface)
    }

    #[test]
    fn test_inherit_both_merges_geometry_without_draw_calls() {
        let style = style_with_fill(FillSet::default());
        let (path, surface) = compose(&style);

        // three eyes, 10 + 5 ops each, all merged
        assert_eq!(path.len(), 45);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_override_both_draws_two_fills_per_eye() {
        let red = Rgb::new(200, 0, 0);
        let mut fill = FillSet::default();
        fill.top_left_eye = EyeFill::uniform(red);
        let style = style_with_fill(fill);

        let (path, surface) = compose(&style);

        // overridden eye contributes nothing to the merged path
        assert_eq!(path.len(), 30);
        assert_eq!(surface.fills(), vec![red, red]);
        // top-left has no rotation
        assert_eq!(
            surface.count(|c| matches!(c, SurfaceCall::Rotate { .. })),
            0
        );
    }

    #[test]
    fn test_mixed_ring_inheritance() {
        let blue = Rgb::new(0, 0, 180);
        let mut fill = FillSet::default();
        fill.top_right_eye = EyeFill {
            external: RingFill::Inherit,
            internal: RingFill::Override(blue),
        };
        let style = style_with_fill(fill);

        let (path, surface) = compose(&style);

        // two fully inherited eyes (15 ops each) plus one inherited
        // external ring (10 ops)
        assert_eq!(path.len(), 40);
        assert_eq!(surface.fills(), vec![blue]);
    }

    #[test]
    fn test_inherited_rings_land_on_their_corner() {
        let style = style_with_fill(FillSet::default());
        let (path, _) = compose(&style);

        use crate::models::PathOp;
        // top-left external ring starts at (0, 0)
        assert_eq!(path.ops()[0], PathOp::Move { x: 0.0, y: 0.0 });
        // top-right external ring starts at (n - 7, 0) = (14, 0)
        assert_eq!(path.ops()[15], PathOp::Move { x: 14.0, y: 0.0 });
        // bottom-left external ring starts at (0, 14)
        assert_eq!(path.ops()[30], PathOp::Move { x: 0.0, y: 14.0 });
    }

    #[test]
    fn test_rotation_is_pushed_and_popped_per_eye() {
        let red = Rgb::new(255, 0, 0);
        let mut fill = FillSet::default();
        fill.top_left_eye = EyeFill::uniform(red);
        fill.top_right_eye = EyeFill::uniform(red);
        fill.bottom_left_eye = EyeFill::uniform(red);
        let style = style_with_fill(fill);

        let (_, surface) = compose(&style);

        // each rotate sits inside its own push/pop bracket
        let mut depth: i32 = 0;
        for call in &surface.calls {
            match call {
                SurfaceCall::PushState => depth += 1,
                SurfaceCall::PopState => {
                    depth -= 1;
                    assert!(depth >= 0);
                }
                SurfaceCall::Rotate { .. } => assert!(depth > 0),
                _ => {}
            }
        }
        assert_eq!(depth, 0);

        // top-left draws unrotated, the other two rotate +90 / -90
        let rotations: Vec<f64> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Rotate { degrees, .. } => Some(*degrees),
                _ => None,
            })
            .collect();
        assert_eq!(rotations, vec![90.0, -90.0]);

        // pivots sit 3.5 modules inward from the relevant edges
        let pivots: Vec<(f64, f64)> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Rotate { pivot, .. } => Some(*pivot),
                _ => None,
            })
            .collect();
        assert_eq!(pivots, vec![(175.0, 35.0), (35.0, 175.0)]);
    }

    #[test]
    fn test_offset_is_cleared_after_each_eye() {
        let red = Rgb::new(255, 0, 0);
        let mut fill = FillSet::default();
        fill.top_right_eye = EyeFill::uniform(red);
        let style = style_with_fill(fill);

        let mut ctx = TransformContext::new(0.0, 0.0, 10.0);
        let mut surface = RecordingSurface::new();
        compose_eyes(&style, &mut ctx, 21, Path::new(), &mut surface).unwrap();

        // the transient eye offset must not leak past composition
        assert_eq!(ctx.apply(0.0, 0.0), (0.0, 0.0));
    }
}
