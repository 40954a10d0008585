// src/render/renderer.rs
// The render entry point: validates the matrix, sizes the transform,
// paints the background, folds the eyes in and plays the merged module
// path onto the surface.

use tracing::debug;

use crate::error::RenderError;
use crate::models::Matrix;
use crate::style::{Fill, RendererStyle};
use crate::surface::{Region, Surface};

use super::eye_composer::compose_eyes;
use super::path_player::PathPlayer;
use super::transform::TransformContext;

pub struct Renderer {
    style: RendererStyle,
}

impl Renderer {
    pub fn new(style: RendererStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RendererStyle {
        &self.style
    }

    /// Renders one symbol onto the surface and returns the finished
    /// artifact bytes. All mutable state lives inside this call.
    pub fn render<S: Surface>(
        &self,
        matrix: &Matrix,
        surface: &mut S,
    ) -> Result<Vec<u8>, RenderError> {
        if matrix.width() != matrix.height() {
            return Err(RenderError::NonSquareMatrix {
                width: matrix.width(),
                height: matrix.height(),
            });
        }
        let matrix_size = matrix.width();
        let module_size =
            TransformContext::module_size_for(self.style.size, matrix_size, self.style.margin);
        debug!(matrix_size, module_size, "rendering symbol");

        let mut ctx = TransformContext::new(self.style.x, self.style.y, module_size);

        surface.begin(self.style.size, self.style.fill.background)?;

        // body modules, minus the three finder regions the eyes replace
        let module_matrix = matrix.without_finder_patterns();
        let module_path = self.style.module_shape.module_path(&module_matrix);

        let module_path = compose_eyes(&self.style, &mut ctx, matrix_size, module_path, surface)?;

        // one deferred draw call for everything in the body fill
        let player = PathPlayer::new(&ctx);
        match &self.style.fill.foreground {
            Fill::Solid(color) => player.play_filled(&module_path, surface, *color)?,
            Fill::Gradient(gradient) => {
                player.play(&module_path, surface)?;
                surface.fill_gradient(
                    gradient,
                    Region {
                        x: self.style.x,
                        y: self.style.y,
                        width: self.style.size,
                        height: self.style.size,
                    },
                )?;
            }
        }

        let bytes = surface.finish()?;
        debug!(bytes = bytes.len(), "surface finalized");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{EyeFill, FillSet, Gradient, GradientKind, Rgb};
    use crate::surface::{RecordingSurface, SurfaceCall};

    fn renderer() -> Renderer {
        Renderer::new(RendererStyle::new(290.0).with_margin(4.0))
    }

    #[test]
    fn test_non_square_matrix_is_rejected_before_any_drawing() {
        let matrix = Matrix::new(21, 22);
        let mut surface = RecordingSurface::new();

        let result = renderer().render(&matrix, &mut surface);
        assert!(matches!(
            result,
            Err(RenderError::NonSquareMatrix {
                width: 21,
                height: 22,
            })
        ));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_all_inherit_draws_one_body_fill() {
        let matrix = Matrix::demo();
        let mut surface = RecordingSurface::new();
        renderer().render(&matrix, &mut surface).unwrap();

        assert_eq!(surface.fills(), vec![Rgb::BLACK]);
        assert_eq!(surface.calls[0], SurfaceCall::Begin {
            size: 290.0,
            background: Rgb::WHITE,
        });
        assert_eq!(*surface.calls.last().unwrap(), SurfaceCall::Finish);
    }

    #[test]
    fn test_override_eye_adds_exactly_two_fills() {
        let red = Rgb::new(220, 30, 30);
        let mut fill = FillSet::default();
        fill.bottom_left_eye = EyeFill::uniform(red);
        let renderer = Renderer::new(RendererStyle::new(290.0).with_fill(fill));

        let matrix = Matrix::demo();
        let mut surface = RecordingSurface::new();
        renderer.render(&matrix, &mut surface).unwrap();

        // two eye fills first, the body fill last
        assert_eq!(surface.fills(), vec![red, red, Rgb::BLACK]);
        // the -90 degree corner rotates and restores
        assert_eq!(
            surface.count(|c| matches!(c, SurfaceCall::Rotate { degrees, .. } if *degrees == -90.0)),
            1
        );
        assert_eq!(
            surface.count(|c| matches!(c, SurfaceCall::PushState)),
            surface.count(|c| matches!(c, SurfaceCall::PopState))
        );
    }

    #[test]
    fn test_gradient_foreground_is_delegated() {
        let gradient = Gradient {
            start: Rgb::new(0, 0, 90),
            end: Rgb::new(90, 0, 0),
            kind: GradientKind::Diagonal,
        };
        let mut fill = FillSet::default();
        fill.foreground = Fill::Gradient(gradient);
        let renderer = Renderer::new(RendererStyle::new(290.0).with_fill(fill));

        // the recording surface has no gradient capability
        let matrix = Matrix::demo();
        let mut surface = RecordingSurface::new();
        let result = renderer.render(&matrix, &mut surface);

        assert!(matches!(result, Err(RenderError::Surface(_))));
        // playback reached the body path but nothing was filled
        assert!(surface.fills().is_empty());
        assert!(!surface
            .calls
            .iter()
            .any(|c| matches!(c, SurfaceCall::Finish)));
    }

    #[test]
    fn test_svg_end_to_end() {
        use crate::surface::SvgSurface;

        let matrix = Matrix::demo();
        let mut surface = SvgSurface::new();
        let bytes = renderer().render(&matrix, &mut surface).unwrap();

        let doc = String::from_utf8(bytes).unwrap();
        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains(r#"viewBox="0 0 290 290""#));
        assert!(doc.contains(r#"fill-rule="evenodd""#));
        assert!(doc.ends_with("</svg>"));
    }
}
