// src/style/fill.rs
// Fill-inheritance model for the three eye corners. Each ring either
// inherits the body-module fill (its geometry is folded into the shared
// module path) or overrides it with its own color (drawn separately).

use serde::Deserialize;

use super::color::{Fill, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingFill {
    Inherit,
    Override(Rgb),
}

impl RingFill {
    pub fn inherits(&self) -> bool {
        matches!(self, RingFill::Inherit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EyeFill {
    pub external: RingFill,
    pub internal: RingFill,
}

impl EyeFill {
    pub fn inherit() -> Self {
        Self {
            external: RingFill::Inherit,
            internal: RingFill::Inherit,
        }
    }

    pub fn uniform(color: Rgb) -> Self {
        Self {
            external: RingFill::Override(color),
            internal: RingFill::Override(color),
        }
    }

    /// An eye that inherits both rings contributes pure geometry; it is
    /// indistinguishable from body modules once merged.
    pub fn inherits_both(&self) -> bool {
        self.external.inherits() && self.internal.inherits()
    }
}

impl Default for EyeFill {
    fn default() -> Self {
        Self::inherit()
    }
}

/// The complete fill configuration for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FillSet {
    pub background: Rgb,
    pub foreground: Fill,
    #[serde(default)]
    pub top_left_eye: EyeFill,
    #[serde(default)]
    pub top_right_eye: EyeFill,
    #[serde(default)]
    pub bottom_left_eye: EyeFill,
}

impl FillSet {
    /// One background and one foreground color, all eyes inheriting.
    pub fn uniform(background: Rgb, foreground: Fill) -> Self {
        Self {
            background,
            foreground,
            top_left_eye: EyeFill::inherit(),
            top_right_eye: EyeFill::inherit(),
            bottom_left_eye: EyeFill::inherit(),
        }
    }
}

impl Default for FillSet {
    fn default() -> Self {
        Self::uniform(Rgb::WHITE, Fill::Solid(Rgb::BLACK))
    }
}
