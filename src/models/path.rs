// src/models/path.rs
// The abstract path model: an ordered, replayable sequence of vector
// drawing operations in module-grid coordinates (1 unit = 1 module width)

/// A single drawing operation. Coordinates are absolute, in module units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    Move {
        x: f64,
        y: f64,
    },
    Line {
        x: f64,
        y: f64,
    },
    Curve {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
    EllipticArc {
        rx: f64,
        ry: f64,
        x_axis_angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathOp {
    /// The same operation with every coordinate-bearing point shifted
    /// componentwise. Radii, angles and flags are untouched.
    pub fn translated(&self, dx: f64, dy: f64) -> PathOp {
        match *self {
            PathOp::Move { x, y } => PathOp::Move {
                x: x + dx,
                y: y + dy,
            },
            PathOp::Line { x, y } => PathOp::Line {
                x: x + dx,
                y: y + dy,
            },
            PathOp::Curve {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => PathOp::Curve {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                x3: x3 + dx,
                y3: y3 + dy,
            },
            PathOp::EllipticArc {
                rx,
                ry,
                x_axis_angle,
                large_arc,
                sweep,
                x,
                y,
            } => PathOp::EllipticArc {
                rx,
                ry,
                x_axis_angle,
                large_arc,
                sweep,
                x: x + dx,
                y: y + dy,
            },
            PathOp::Close => PathOp::Close,
        }
    }
}

/// A value-like path. `translate` and `append` return new paths and
/// leave the receiver untouched; a path is only meaningful when replayed
/// with a defined starting cursor (origin unless the first op is a Move).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ops(ops: Vec<PathOp>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    // Chainable builders, handy for shape definitions
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.ops.push(PathOp::Move { x, y });
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.ops.push(PathOp::Line { x, y });
        self
    }

    pub fn curve_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        self.ops.push(PathOp::Curve {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        });
        self
    }

    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        x_axis_angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.ops.push(PathOp::EllipticArc {
            rx,
            ry,
            x_axis_angle,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.ops.push(PathOp::Close);
        self
    }

    /// Returns a new path with every coordinate shifted by (dx, dy).
    pub fn translate(&self, dx: f64, dy: f64) -> Path {
        Path {
            ops: self.ops.iter().map(|op| op.translated(dx, dy)).collect(),
        }
    }

    /// Returns a new path: the receiver's operations followed by `other`'s,
    /// with no coordinate adjustment. Position each operand beforehand.
    pub fn append(&self, other: &Path) -> Path {
        let mut ops = Vec::with_capacity(self.ops.len() + other.ops.len());
        ops.extend_from_slice(&self.ops);
        ops.extend_from_slice(&other.ops);
        Path { ops }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathOp;
    type IntoIter = std::slice::Iter<'a, PathOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Path {
        Path::new()
            .move_to(0.0, 0.0)
            .line_to(1.0, 0.0)
            .curve_to(1.5, 0.5, 1.5, 1.5, 1.0, 2.0)
            .arc_to(0.5, 0.5, 0.0, false, true, 0.0, 2.0)
            .close()
    }

    #[test]
    fn test_translate_shifts_every_coordinate() {
        let path = sample_path().translate(2.0, 3.0);

        assert_eq!(path.ops()[0], PathOp::Move { x: 2.0, y: 3.0 });
        assert_eq!(path.ops()[1], PathOp::Line { x: 3.0, y: 3.0 });
        assert_eq!(
            path.ops()[2],
            PathOp::Curve {
                x1: 3.5,
                y1: 3.5,
                x2: 3.5,
                y2: 4.5,
                x3: 3.0,
                y3: 5.0,
            }
        );
        assert_eq!(
            path.ops()[3],
            PathOp::EllipticArc {
                rx: 0.5,
                ry: 0.5,
                x_axis_angle: 0.0,
                large_arc: false,
                sweep: true,
                x: 2.0,
                y: 5.0,
            }
        );
        assert_eq!(path.ops()[4], PathOp::Close);
    }

    #[test]
    fn test_translate_is_additive() {
        let path = sample_path();
        let chained = path.translate(1.25, -2.0).translate(0.75, 5.0);
        let combined = path.translate(2.0, 3.0);
        assert_eq!(chained, combined);
    }

    #[test]
    fn test_translate_leaves_original_untouched() {
        let path = sample_path();
        let _ = path.translate(10.0, 10.0);
        assert_eq!(path, sample_path());
    }

    #[test]
    fn test_append_preserves_order_and_count() {
        let p1 = sample_path();
        let p2 = Path::new().move_to(5.0, 5.0).line_to(6.0, 5.0).close();

        let joined = p1.append(&p2);
        assert_eq!(joined.len(), p1.len() + p2.len());
        assert_eq!(&joined.ops()[..p1.len()], p1.ops());
        assert_eq!(&joined.ops()[p1.len()..], p2.ops());

        // operands untouched
        assert_eq!(p1, sample_path());
        assert_eq!(p2.len(), 3);
    }
}
