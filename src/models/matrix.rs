// src/models/matrix.rs
// The module matrix handed over by an encoder: a grid of on/off modules.
// The renderer requires width == height; non-square input is kept
// representable here so the render entry point can reject it.

/// Side length of a finder ("eye") pattern in modules.
pub const FINDER_SIZE: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Matrix {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a matrix from rows of cells. Rows shorter than the first
    /// row are padded with off modules.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut matrix = Matrix::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &on) in row.iter().take(width).enumerate() {
                matrix.set(x, y, on);
            }
        }
        matrix
    }

    /// Parses a text-art matrix: one line per row, `#` or `1` for an
    /// on module, anything else off. Blank lines are skipped.
    pub fn parse_text(text: &str) -> Self {
        let rows: Vec<Vec<bool>> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == '#' || c == '1').collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            false
        }
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = on;
        }
    }

    /// Returns a copy with the three finder-pattern regions cleared
    /// (top-left, top-right, bottom-left). The eye composer draws those
    /// regions from the style's eye shape instead.
    pub fn without_finder_patterns(&self) -> Matrix {
        let mut stripped = self.clone();
        if self.width < FINDER_SIZE || self.height < FINDER_SIZE {
            return stripped;
        }
        let corners = [
            (0, 0),
            (self.width - FINDER_SIZE, 0),
            (0, self.height - FINDER_SIZE),
        ];
        for (cx, cy) in corners {
            for y in 0..FINDER_SIZE {
                for x in 0..FINDER_SIZE {
                    stripped.set(cx + x, cy + y, false);
                }
            }
        }
        stripped
    }

    /// A deterministic 21x21 demo symbol so the CLI can run without an
    /// encoder collaborator: three finder patterns, timing tracks, and a
    /// fixed pseudo-data fill. Not a decodable code.
    pub fn demo() -> Matrix {
        let size = 21;
        let mut matrix = Matrix::new(size, size);

        for (cx, cy) in [(0, 0), (size - FINDER_SIZE, 0), (0, size - FINDER_SIZE)] {
            place_finder(&mut matrix, cx, cy);
        }

        // timing tracks on row/column 6
        for i in 8..size - 8 {
            matrix.set(i, 6, i % 2 == 0);
            matrix.set(6, i, i % 2 == 0);
        }

        // pseudo data in the remaining area
        for y in 0..size {
            for x in 0..size {
                if in_reserved_zone(x, y, size) {
                    continue;
                }
                matrix.set(x, y, (x * 3 + y * 7 + x * y) % 5 < 2);
            }
        }
        matrix
    }
}

fn place_finder(matrix: &mut Matrix, cx: usize, cy: usize) {
    for y in 0..FINDER_SIZE {
        for x in 0..FINDER_SIZE {
            let ring = x == 0 || y == 0 || x == FINDER_SIZE - 1 || y == FINDER_SIZE - 1;
            let core = (2..=4).contains(&x) && (2..=4).contains(&y);
            matrix.set(cx + x, cy + y, ring || core);
        }
    }
}

// finder zones plus one module of separator, plus the timing tracks
fn in_reserved_zone(x: usize, y: usize, size: usize) -> bool {
    let sep = FINDER_SIZE + 1;
    (x < sep && y < sep)
        || (x >= size - sep && y < sep)
        || (x < sep && y >= size - sep)
        || x == 6
        || y == 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        let matrix = Matrix::parse_text("#.#\n.1.\n##.\n");
        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 3);
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(1, 0));
        assert!(matrix.get(1, 1));
        assert!(!matrix.get(2, 2));
    }

    #[test]
    fn test_non_square_is_representable() {
        let matrix = Matrix::new(21, 22);
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.height(), 22);
    }

    #[test]
    fn test_without_finder_patterns_clears_three_corners() {
        let size = 21;
        let mut matrix = Matrix::new(size, size);
        for y in 0..size {
            for x in 0..size {
                matrix.set(x, y, true);
            }
        }

        let stripped = matrix.without_finder_patterns();
        // the three finder regions are off
        for y in 0..FINDER_SIZE {
            for x in 0..FINDER_SIZE {
                assert!(!stripped.get(x, y));
                assert!(!stripped.get(size - FINDER_SIZE + x, y));
                assert!(!stripped.get(x, size - FINDER_SIZE + y));
            }
        }
        // the fourth corner is untouched
        assert!(stripped.get(size - 1, size - 1));
        // center is untouched
        assert!(stripped.get(10, 10));
        // original is unmodified
        assert!(matrix.get(0, 0));
    }

    #[test]
    fn test_demo_matrix_shape() {
        let matrix = Matrix::demo();
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.height(), 21);
        // finder ring corners on, separator off
        assert!(matrix.get(0, 0));
        assert!(matrix.get(6, 0));
        assert!(!matrix.get(7, 0));
        assert!(matrix.get(3, 3));
    }
}
