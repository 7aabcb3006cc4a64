/// Color group that a block belongs to.
///
/// A value does not name a fixed on-screen color; it names a set of blocks
/// that are rendered alike. The palette belongs to the rendering
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    /// I-piece blocks.
    I,
    /// J-piece blocks.
    J,
    /// L-piece blocks.
    L,
    /// O-piece blocks.
    O,
    /// S-piece blocks.
    S,
    /// T-piece blocks.
    T,
    /// Z-piece blocks.
    Z,
}

/// A single block, either part of a falling piece or already locked on the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    color: BlockColor,
}

impl Block {
    #[must_use]
    pub const fn new(color: BlockColor) -> Self {
        Self { color }
    }

    /// Returns the color group this block belongs to.
    #[must_use]
    pub const fn color(self) -> BlockColor {
        self.color
    }
}

/// A block together with its absolute (row, column) position.
///
/// Produced transiently by [`Piece::blocks`](super::piece::Piece::blocks);
/// never stored independently of the piece that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedBlock {
    block: Block,
    row: i32,
    col: i32,
}

impl IndexedBlock {
    pub(crate) const fn new(block: Block, row: i32, col: i32) -> Self {
        Self { block, row, col }
    }

    /// Returns the raw block, without position information.
    #[must_use]
    pub const fn block(self) -> Block {
        self.block
    }

    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }
}
