// src/style/color.rs
// Color and fill types. The core only ever draws with a resolved RGB
// triple; gradient rasterization is delegated to the surface backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Vertical,
    Horizontal,
    Diagonal,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
    pub kind: GradientKind,
}

/// A fill specification. `Solid` resolves directly; `Gradient` is a
/// reference the surface backend realizes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Solid(Rgb),
    Gradient(Gradient),
}

impl Fill {
    /// Resolves any fill to a representative RGB triple. A gradient
    /// resolves to its start color.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Fill::Solid(color) => *color,
            Fill::Gradient(gradient) => gradient.start,
        }
    }
}
