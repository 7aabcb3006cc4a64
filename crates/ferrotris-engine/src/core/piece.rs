use std::{fmt, str::FromStr};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::ParsePieceError;

use super::{
    block::{Block, BlockColor, IndexedBlock},
    shape::{Offset, shape_of},
};

/// A falling tetromino with kind, center position, and orientation.
///
/// This represents a piece at a specific location and orientation. Pieces
/// are immutable - movement and rotation operations return new `Piece`
/// instances, and a piece's cells are derived on demand from the spawn
/// shape of its kind.
///
/// # Coordinate System
///
/// - The center is an absolute (row, column) anchor from which all block
///   offsets are measured
/// - Orientation is tracked as 0° (spawn), 90° clockwise, 180°, or 270°
///   clockwise
///
/// # Example
///
/// ```
/// use ferrotris_engine::{Piece, PieceKind};
///
/// let piece = Piece::new(PieceKind::T, 18, 4);
/// let moved = piece.translated(-1, 0);
/// let rotated = moved.rotated_cw();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    row: i32,
    col: i32,
    orientation: Orientation,
}

impl Piece {
    /// Creates a piece of the given kind centered at (row, col), in spawn
    /// orientation.
    #[must_use]
    pub const fn new(kind: PieceKind, row: i32, col: i32) -> Self {
        Self {
            kind,
            row,
            col,
            orientation: Orientation::SPAWN,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> i32 {
        self.col
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns an iterator over the absolute (row, col) cells occupied by
    /// this piece.
    ///
    /// Always yields exactly 4 cells: the spawn shape of the piece's kind,
    /// rotated into the current orientation and translated to the center.
    /// A pure function of the piece value; restarting the iterator yields
    /// the same sequence.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        shape_of(self.kind).iter().map(|offset| {
            let Offset { row, col } = offset.rotated(self.orientation);
            (self.row + row, self.col + col)
        })
    }

    /// Returns the piece's blocks together with their absolute positions.
    pub fn blocks(&self) -> impl Iterator<Item = IndexedBlock> + '_ {
        let block = Block::new(self.kind.color());
        self.occupied_cells()
            .map(move |(row, col)| IndexedBlock::new(block, row, col))
    }

    /// Returns this piece translated by the given row and column deltas.
    ///
    /// No legality check is performed; validity is the caller's concern.
    #[must_use]
    pub const fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            kind: self.kind,
            row: self.row + d_row,
            col: self.col + d_col,
            orientation: self.orientation,
        }
    }

    /// Returns this piece rotated 90° clockwise around its center.
    ///
    /// Bare rotation primitive: no wall kicks, no legality check. Use
    /// [`rotate`](super::rotation::rotate) to resolve a rotation against
    /// the board.
    #[must_use]
    pub const fn rotated_cw(&self) -> Self {
        Self {
            kind: self.kind,
            row: self.row,
            col: self.col,
            orientation: self.orientation.rotated_cw(),
        }
    }

    /// Returns this piece rotated 90° counterclockwise around its center.
    ///
    /// Bare rotation primitive: no wall kicks, no legality check. Use
    /// [`rotate`](super::rotation::rotate) to resolve a rotation against
    /// the board.
    #[must_use]
    pub const fn rotated_ccw(&self) -> Self {
        Self {
            kind: self.kind,
            row: self.row,
            col: self.col,
            orientation: self.orientation.rotated_ccw(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "kind#orientation@row,col" (e.g., "S#1@4,-2")
        write!(
            f,
            "{}#{}@{},{}",
            self.kind.as_char(),
            self.orientation.0,
            self.row,
            self.col
        )
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parse format: "kind#orientation@row,col" (e.g., "S#1@4,-2")
        let (kind_str, rest) =
            s.split_once('#')
                .ok_or(ParsePieceError::MissingSeparator { separator: '#' })?;

        let mut kind_chars = kind_str.chars();
        let kind = kind_chars
            .next()
            .filter(|_| kind_chars.next().is_none())
            .and_then(PieceKind::from_char)
            .ok_or_else(|| ParsePieceError::InvalidKind {
                kind: kind_str.to_owned(),
            })?;

        let (orientation_str, position_str) =
            rest.split_once('@')
                .ok_or(ParsePieceError::MissingSeparator { separator: '@' })?;

        let orientation = orientation_str
            .parse::<u8>()
            .ok()
            .filter(|n| *n < 4)
            .map(Orientation)
            .ok_or_else(|| ParsePieceError::InvalidOrientation {
                orientation: orientation_str.to_owned(),
            })?;

        let (row_str, col_str) =
            position_str
                .split_once(',')
                .ok_or(ParsePieceError::MissingSeparator { separator: ',' })?;

        let parse_coordinate = |coordinate: &str| {
            coordinate
                .parse::<i32>()
                .map_err(|_| ParsePieceError::InvalidCoordinate {
                    coordinate: coordinate.to_owned(),
                })
        };
        let row = parse_coordinate(row_str)?;
        let col = parse_coordinate(col_str)?;

        Ok(Self {
            kind,
            row,
            col,
            orientation,
        })
    }
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Orientation of a piece.
///
/// One of four rotation states, forming a cyclic group under addition
/// modulo 4:
///
/// - `0`: 0° (spawn orientation)
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise (90° counterclockwise)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Orientation(u8);

impl Orientation {
    /// The spawn orientation.
    pub const SPAWN: Self = Self(0);

    /// All four orientations, in clockwise order from spawn.
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    #[must_use]
    pub const fn rotated_cw(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn rotated_ccw(self) -> Self {
        Self((self.0 + 3) % 4)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Enum representing the kind of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// J-piece.
    J = 1,
    /// L-piece.
    L = 2,
    /// O-piece.
    O = 3,
    /// S-piece.
    S = 4,
    /// T-piece.
    T = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::J,
            2 => PieceKind::L,
            3 => PieceKind::O,
            4 => PieceKind::S,
            5 => PieceKind::T,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All seven piece kinds, in ordinal order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Returns the color group used to render blocks of this kind.
    #[must_use]
    pub const fn color(self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::I,
            PieceKind::J => BlockColor::J,
            PieceKind::L => BlockColor::L,
            PieceKind::O => BlockColor::O,
            PieceKind::S => BlockColor::S,
            PieceKind::T => BlockColor::T,
            PieceKind::Z => BlockColor::Z,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferrotris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferrotris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(piece: &Piece) -> Vec<(i32, i32)> {
        piece.occupied_cells().collect()
    }

    #[test]
    fn test_spawn_piece_at_origin_yields_shape_literals() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, 0, 0);
            let expected: Vec<_> = shape_of(kind).iter().map(|o| (o.row, o.col)).collect();
            assert_eq!(cells(&piece), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_occupied_cells_is_restartable() {
        let piece = Piece::new(PieceKind::S, 7, -3).rotated_cw();
        assert_eq!(cells(&piece), cells(&piece));
    }

    #[test]
    fn test_translated_shifts_every_cell() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, 5, 5).rotated_ccw();
            let moved = piece.translated(2, -1);

            assert_eq!(moved.kind(), piece.kind());
            assert_eq!(moved.orientation(), piece.orientation());
            let expected: Vec<_> = cells(&piece)
                .into_iter()
                .map(|(row, col)| (row + 2, col - 1))
                .collect();
            assert_eq!(cells(&moved), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_bare_rotation_is_a_four_cycle() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, 3, 7);
            assert_eq!(
                piece.rotated_cw().rotated_cw().rotated_cw().rotated_cw(),
                piece,
            );
            assert_eq!(
                piece
                    .rotated_ccw()
                    .rotated_ccw()
                    .rotated_ccw()
                    .rotated_ccw(),
                piece,
            );
        }
    }

    #[test]
    fn test_cw_then_ccw_is_identity_in_every_orientation() {
        let mut piece = Piece::new(PieceKind::L, 0, 0);
        for _ in 0..4 {
            assert_eq!(piece.rotated_cw().rotated_ccw(), piece);
            assert_eq!(piece.rotated_ccw().rotated_cw(), piece);
            piece = piece.rotated_cw();
        }
    }

    #[test]
    fn test_t_piece_rotated_cw_cells() {
        let piece = Piece::new(PieceKind::T, 0, 0).rotated_cw();
        assert_eq!(cells(&piece), [(0, 1), (1, 0), (0, 0), (-1, 0)]);
    }

    #[test]
    fn test_t_piece_rotated_ccw_cells() {
        let piece = Piece::new(PieceKind::T, 0, 0).rotated_ccw();
        assert_eq!(cells(&piece), [(0, -1), (-1, 0), (0, 0), (1, 0)]);
    }

    #[test]
    fn test_blocks_carry_the_kind_color() {
        let piece = Piece::new(PieceKind::Z, 2, 3);
        let blocks: Vec<_> = piece.blocks().collect();

        assert_eq!(blocks.len(), 4);
        for (block, cell) in blocks.iter().zip(piece.occupied_cells()) {
            assert_eq!(block.block().color(), BlockColor::Z);
            assert_eq!((block.row(), block.col()), cell);
        }
    }

    #[test]
    fn test_piece_serialization() {
        // Format: "kind#orientation@row,col"
        let piece = Piece::new(PieceKind::S, 4, 18).rotated_cw();

        let serialized = serde_json::to_string(&piece).unwrap();
        assert_eq!(serialized, "\"S#1@4,18\"");

        let deserialized: Piece = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, piece);
    }

    #[test]
    fn test_piece_round_trips_with_negative_center() {
        let piece = Piece::new(PieceKind::I, -2, -11).rotated_ccw();

        let s = piece.to_string();
        assert_eq!(s, "I#3@-2,-11");
        assert_eq!(s.parse::<Piece>().unwrap(), piece);
    }

    #[test]
    fn test_piece_round_trips_all_kinds_and_orientations() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::new(kind, 5, 10);
            for _ in 0..4 {
                let round_tripped: Piece = piece.to_string().parse().unwrap();
                assert_eq!(round_tripped, piece);
                piece = piece.rotated_cw();
            }
        }
    }

    #[test]
    fn test_piece_parse_error_cases() {
        // Missing separators
        assert!("S1@4,18".parse::<Piece>().is_err());
        assert!("S#1#4,18".parse::<Piece>().is_err());
        assert!("S#1@4".parse::<Piece>().is_err());

        // Invalid piece kind
        assert!("X#1@4,18".parse::<Piece>().is_err());
        assert!("SS#1@4,18".parse::<Piece>().is_err());
        assert!("#1@4,18".parse::<Piece>().is_err());

        // Orientation out of range
        assert!("S#4@4,18".parse::<Piece>().is_err());
        assert!("S#-1@4,18".parse::<Piece>().is_err());

        // Malformed coordinates
        assert!("S#1@abc,18".parse::<Piece>().is_err());
        assert!("S#1@4,xyz".parse::<Piece>().is_err());
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
        assert_eq!(PieceKind::from_char('t'), None);
    }
}
