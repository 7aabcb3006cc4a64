use super::piece::{Orientation, PieceKind};

/// Signed (row, column) pair measured from a piece's center.
///
/// Doubles as a kick translation during rotation resolution. Row sign is an
/// internal convention of the shape and kick tables; nothing outside the
/// tables assigns it a visual direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Rotates this offset around the origin into the given orientation.
    ///
    /// Pure geometric rotation of the (row, col) vector:
    ///
    /// - orientation 0: (r, c)
    /// - orientation 1: (-c, r)
    /// - orientation 2: (-r, -c)
    /// - orientation 3: (c, -r)
    #[must_use]
    pub const fn rotated(self, orientation: Orientation) -> Self {
        match orientation.index() {
            0 => self,
            1 => Self::new(-self.col, self.row),
            2 => Self::new(-self.row, -self.col),
            _ => Self::new(self.col, -self.row),
        }
    }
}

/// Block positions of a piece relative to its center, in spawn orientation.
///
/// Every piece is exactly 4 blocks; other orientations are derived by
/// [`Offset::rotated`], never stored.
pub type Shape = [Offset; 4];

const SHAPES: [Shape; PieceKind::LEN] = {
    const fn o(row: i32, col: i32) -> Offset {
        Offset::new(row, col)
    }
    [
        // I-piece
        [o(0, -1), o(0, 0), o(0, 1), o(0, 2)],
        // J-piece
        [o(1, -1), o(0, -1), o(0, 0), o(0, 1)],
        // L-piece
        [o(1, 1), o(0, -1), o(0, 0), o(0, 1)],
        // O-piece
        [o(1, 0), o(1, 1), o(0, 0), o(0, 1)],
        // S-piece
        [o(1, 0), o(1, 1), o(0, -1), o(0, 0)],
        // T-piece
        [o(1, 0), o(0, -1), o(0, 0), o(0, 1)],
        // Z-piece
        [o(1, -1), o(1, 0), o(0, 0), o(0, 1)],
    ]
};

/// Returns the spawn-orientation shape of the given piece kind.
///
/// Total over the closed [`PieceKind`] enumeration; the table is populated
/// for all seven kinds at compile time.
#[must_use]
pub fn shape_of(kind: PieceKind) -> &'static Shape {
    &SHAPES[kind as usize]
}
