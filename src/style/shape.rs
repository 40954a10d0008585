// src/style/shape.rs
// Path generators: module shapes stamped per on module, and the two
// nested eye rings. Eye ring coordinates are centered on the eye pivot
// (the 3.5-module point), so a translated copy lands on any corner.

use crate::models::{Matrix, Path};

/// How a single on module is turned into path geometry. The stamp is
/// defined inside the unit cell at the origin and translated per module.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleShape {
    Square,
    Dot,
    Custom(Path),
}

impl ModuleShape {
    /// Builds the merged body path for every on module of the matrix.
    pub fn module_path(&self, matrix: &Matrix) -> Path {
        let stamp = self.stamp();
        let mut ops = Vec::new();
        for y in 0..matrix.height() {
            for x in 0..matrix.width() {
                if matrix.get(x, y) {
                    for op in &stamp.translate(x as f64, y as f64) {
                        ops.push(*op);
                    }
                }
            }
        }
        Path::from_ops(ops)
    }

    fn stamp(&self) -> Path {
        match self {
            ModuleShape::Square => Path::new()
                .move_to(0.0, 0.0)
                .line_to(1.0, 0.0)
                .line_to(1.0, 1.0)
                .line_to(0.0, 1.0)
                .close(),
            // a circle from two arc halves, slightly inset in the cell
            ModuleShape::Dot => Path::new()
                .move_to(0.1, 0.5)
                .arc_to(0.4, 0.4, 0.0, false, true, 0.9, 0.5)
                .arc_to(0.4, 0.4, 0.0, false, true, 0.1, 0.5)
                .close(),
            ModuleShape::Custom(path) => path.clone(),
        }
    }
}

impl Default for ModuleShape {
    fn default() -> Self {
        ModuleShape::Square
    }
}

/// The geometry of one finder pattern: an external ring (7x7 outline
/// with a counter-wound 5x5 hole, filled even-odd) and a solid 3x3
/// internal square.
#[derive(Debug, Clone, PartialEq)]
pub enum EyeShape {
    Square,
    Custom { external: Path, internal: Path },
}

impl EyeShape {
    pub fn external_path(&self) -> Path {
        match self {
            EyeShape::Square => Path::new()
                .move_to(-3.5, -3.5)
                .line_to(3.5, -3.5)
                .line_to(3.5, 3.5)
                .line_to(-3.5, 3.5)
                .close()
                // hole, wound the other way
                .move_to(-2.5, -2.5)
                .line_to(-2.5, 2.5)
                .line_to(2.5, 2.5)
                .line_to(2.5, -2.5)
                .close(),
            EyeShape::Custom { external, .. } => external.clone(),
        }
    }

    pub fn internal_path(&self) -> Path {
        match self {
            EyeShape::Square => Path::new()
                .move_to(-1.5, -1.5)
                .line_to(1.5, -1.5)
                .line_to(1.5, 1.5)
                .line_to(-1.5, 1.5)
                .close(),
            EyeShape::Custom { internal, .. } => internal.clone(),
        }
    }
}

impl Default for EyeShape {
    fn default() -> Self {
        EyeShape::Square
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathOp;

    #[test]
    fn test_square_module_path() {
        let mut matrix = Matrix::new(2, 2);
        matrix.set(0, 0, true);
        matrix.set(1, 1, true);

        let path = ModuleShape::Square.module_path(&matrix);
        // two squares of five ops each
        assert_eq!(path.len(), 10);
        assert_eq!(path.ops()[0], PathOp::Move { x: 0.0, y: 0.0 });
        assert_eq!(path.ops()[5], PathOp::Move { x: 1.0, y: 1.0 });
        assert_eq!(path.ops()[6], PathOp::Line { x: 2.0, y: 1.0 });
    }

    #[test]
    fn test_dot_module_uses_arcs() {
        let mut matrix = Matrix::new(1, 1);
        matrix.set(0, 0, true);

        let path = ModuleShape::Dot.module_path(&matrix);
        let arcs = path
            .ops()
            .iter()
            .filter(|op| matches!(op, PathOp::EllipticArc { .. }))
            .count();
        assert_eq!(arcs, 2);
    }

    #[test]
    fn test_empty_matrix_yields_empty_path() {
        let matrix = Matrix::new(4, 4);
        assert!(ModuleShape::Square.module_path(&matrix).is_empty());
    }

    #[test]
    fn test_square_eye_rings_are_pivot_centered() {
        let external = EyeShape::Square.external_path();
        let internal = EyeShape::Square.internal_path();

        assert_eq!(external.ops()[0], PathOp::Move { x: -3.5, y: -3.5 });
        // outline square, then the counter-wound hole
        assert_eq!(external.ops()[5], PathOp::Move { x: -2.5, y: -2.5 });
        assert_eq!(external.len(), 10);

        assert_eq!(internal.ops()[0], PathOp::Move { x: -1.5, y: -1.5 });
        assert_eq!(internal.len(), 5);

        // translated to the canonical top-left pivot, the ring spans 0..7
        let at_corner = external.translate(3.5, 3.5);
        assert_eq!(at_corner.ops()[0], PathOp::Move { x: 0.0, y: 0.0 });
        assert_eq!(at_corner.ops()[2], PathOp::Line { x: 7.0, y: 7.0 });
    }
}
