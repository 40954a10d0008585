// src/surface/svg.rs
// An SVG document backend. Path primitives accumulate into a "d"
// attribute; fills emit <path> elements; rotation state maps onto
// nested <g transform="rotate(...)"> groups; gradients become <defs>.

use std::fmt::Write as _;

use crate::error::SurfaceError;
use crate::style::{Gradient, GradientKind, Rgb};

use super::{Region, Surface};

#[derive(Debug, Default)]
pub struct SvgSurface {
    size: f64,
    background: Rgb,
    started: bool,
    // document body (everything between the background rect and </svg>)
    body: String,
    defs: String,
    gradient_count: usize,
    // current path data, None when no path is open
    path_data: Option<String>,
    // open <g> elements per pushed state
    group_stack: Vec<usize>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            background: Rgb::WHITE,
            ..Self::default()
        }
    }

    fn take_path_data(&mut self) -> Result<String, SurfaceError> {
        self.path_data
            .take()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| SurfaceError::Malformed("fill issued with no open path".into()))
    }

    fn path_mut(&mut self) -> Result<&mut String, SurfaceError> {
        self.path_data
            .as_mut()
            .ok_or_else(|| SurfaceError::Malformed("path primitive outside begin_path".into()))
    }

    fn write_gradient_def(&mut self, gradient: &Gradient, region: Region) -> String {
        self.gradient_count += 1;
        let id = format!("g{}", self.gradient_count);

        match gradient.kind {
            GradientKind::Radial => {
                let _ = write!(
                    self.defs,
                    r#"<radialGradient id="{}" cx="{}" cy="{}" r="{}" gradientUnits="userSpaceOnUse">"#,
                    id,
                    region.x + region.width / 2.0,
                    region.y + region.height / 2.0,
                    region.width.max(region.height) / 2.0,
                );
            }
            kind => {
                let (x2, y2) = match kind {
                    GradientKind::Horizontal => (region.x + region.width, region.y),
                    GradientKind::Diagonal => {
                        (region.x + region.width, region.y + region.height)
                    }
                    // Vertical (Radial handled above)
                    _ => (region.x, region.y + region.height),
                };
                let _ = write!(
                    self.defs,
                    r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}" gradientUnits="userSpaceOnUse">"#,
                    id, region.x, region.y, x2, y2,
                );
            }
        }
        let _ = write!(
            self.defs,
            r#"<stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/>"#,
            gradient.start.to_hex(),
            gradient.end.to_hex(),
        );
        self.defs.push_str(match gradient.kind {
            GradientKind::Radial => "</radialGradient>",
            _ => "</linearGradient>",
        });
        id
    }

    fn emit_transform_group(&mut self, transform: String) {
        let _ = write!(self.body, r#"<g transform="{}">"#, transform);
        if let Some(open) = self.group_stack.last_mut() {
            *open += 1;
        } else {
            // transform outside any pushed state stays open to the end
            self.group_stack.push(1);
        }
    }
}

impl Surface for SvgSurface {
    fn begin(&mut self, size: f64, background: Rgb) -> Result<(), SurfaceError> {
        *self = Self::new();
        self.size = size;
        self.background = background;
        self.started = true;
        Ok(())
    }

    fn scale(&mut self, factor: f64) {
        self.emit_transform_group(format!("scale({})", factor));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.emit_transform_group(format!("translate({} {})", dx, dy));
    }

    fn rotate(&mut self, degrees: f64, pivot_x: f64, pivot_y: f64) {
        self.emit_transform_group(format!("rotate({} {} {})", degrees, pivot_x, pivot_y));
    }

    fn push_state(&mut self) {
        self.group_stack.push(0);
    }

    fn pop_state(&mut self) {
        let open = self.group_stack.pop().unwrap_or(0);
        for _ in 0..open {
            self.body.push_str("</g>");
        }
    }

    fn begin_path(&mut self) -> Result<(), SurfaceError> {
        self.path_data = Some(String::new());
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let d = self.path_mut()?;
        let _ = write!(d, "M{} {}", x, y);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        let d = self.path_mut()?;
        let _ = write!(d, "L{} {}", x, y);
        Ok(())
    }

    fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> Result<(), SurfaceError> {
        let d = self.path_mut()?;
        let _ = write!(d, "C{} {} {} {} {} {}", x1, y1, x2, y2, x3, y3);
        Ok(())
    }

    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_axis_angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Result<(), SurfaceError> {
        let d = self.path_mut()?;
        let _ = write!(
            d,
            "A{} {} {} {} {} {} {}",
            rx,
            ry,
            x_axis_angle,
            large_arc as u8,
            sweep as u8,
            x,
            y,
        );
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        self.path_mut()?.push('Z');
        Ok(())
    }

    fn fill(&mut self, color: Rgb) -> Result<(), SurfaceError> {
        let d = self.take_path_data()?;
        let _ = write!(
            self.body,
            r#"<path fill="{}" fill-rule="evenodd" d="{}"/>"#,
            color.to_hex(),
            d,
        );
        Ok(())
    }

    fn fill_gradient(&mut self, gradient: &Gradient, region: Region) -> Result<(), SurfaceError> {
        let d = self.take_path_data()?;
        let id = self.write_gradient_def(gradient, region);
        let _ = write!(
            self.body,
            r#"<path fill="url(#{})" fill-rule="evenodd" d="{}"/>"#,
            id, d,
        );
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, SurfaceError> {
        if !self.started {
            return Err(SurfaceError::Malformed("finish before begin".into()));
        }
        // close any transform groups left open outside a pushed state
        while !self.group_stack.is_empty() {
            self.pop_state();
        }

        let mut doc = String::new();
        doc.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        doc.push('\n');
        let _ = write!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            size = self.size,
        );
        if !self.defs.is_empty() {
            let _ = write!(doc, "<defs>{}</defs>", self.defs);
        }
        let _ = write!(
            doc,
            r#"<rect x="0" y="0" width="{size}" height="{size}" fill="{}"/>"#,
            self.background.to_hex(),
            size = self.size,
        );
        doc.push_str(&self.body);
        doc.push_str("</svg>");

        self.started = false;
        Ok(doc.into_bytes())
    }
}
