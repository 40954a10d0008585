// src/style/mod.rs
// Immutable render style: target size, margin, surface offset, the
// module/eye shape generators and the fill configuration.

pub mod color;
pub mod fill;
pub mod shape;
pub mod style_file;

pub use color::{Fill, Gradient, GradientKind, Rgb};
pub use fill::{EyeFill, FillSet, RingFill};
pub use shape::{EyeShape, ModuleShape};
pub use style_file::StyleFile;

#[derive(Debug, Clone, PartialEq)]
pub struct RendererStyle {
    /// Target surface size in surface units (the symbol is square).
    pub size: f64,
    /// Quiet-zone margin in module units, on every side.
    pub margin: f64,
    /// Surface-space offset of the symbol.
    pub x: f64,
    pub y: f64,
    pub module_shape: ModuleShape,
    pub eye_shape: EyeShape,
    pub fill: FillSet,
}

impl RendererStyle {
    /// Black-on-white square-module style with the conventional
    /// four-module quiet zone.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            margin: 4.0,
            x: 0.0,
            y: 0.0,
            module_shape: ModuleShape::Square,
            eye_shape: EyeShape::Square,
            fill: FillSet::default(),
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_fill(mut self, fill: FillSet) -> Self {
        self.fill = fill;
        self
    }
}
