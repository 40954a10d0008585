// src/render/transform.rs
// Request-scoped coordinate mapping from abstract module units to
// surface units. One context per render call; the eye composer sets a
// transient offset around each override eye and clears it afterwards.

#[derive(Debug, Clone)]
pub struct TransformContext {
    origin_x: f64,
    origin_y: f64,
    module_size: f64,
    offset_x: f64,
    offset_y: f64,
}

impl TransformContext {
    pub fn new(origin_x: f64, origin_y: f64, module_size: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            module_size,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Surface units per module unit for a symbol of `matrix_size`
    /// modules plus a quiet zone of `margin` modules on each side.
    pub fn module_size_for(size: f64, matrix_size: usize, margin: f64) -> f64 {
        size / (matrix_size as f64 + margin * 2.0)
    }

    pub fn module_size(&self) -> f64 {
        self.module_size
    }

    /// Scale a module-unit length (arc radii) to surface units.
    pub fn scaled(&self, length: f64) -> f64 {
        length * self.module_size
    }

    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    pub fn clear_offset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Map a module-space point to surface space.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.origin_x + self.offset_x + x * self.module_size,
            self.origin_y + self.offset_y + y * self.module_size,
        )
    }
}
