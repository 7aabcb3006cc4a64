use arrayvec::ArrayVec;

use super::{
    piece::{Orientation, PieceKind},
    shape::Offset,
};

/// Wall-kick offset table for one piece kind.
///
/// Indexed by orientation; each entry is the ordered attempt list for that
/// orientation. Every entry of a table has the same length, and attempt `n`
/// of one orientation pairs with attempt `n` of another: each entry places
/// its orientation in the table's shared virtual grid, and the kick for a
/// transition is the difference that aligns the two grids.
pub type KickTable = [&'static [Offset]; 4];

/// Upper bound on kick attempts per transition across all tables.
pub const MAX_KICK_ATTEMPTS: usize = 5;

const O_KICKS: KickTable = {
    const fn k(row: i32, col: i32) -> Offset {
        Offset::new(row, col)
    }
    [&[k(0, 0)], &[k(-1, 0)], &[k(-1, -1)], &[k(0, -1)]]
};

const I_KICKS: KickTable = {
    const fn k(row: i32, col: i32) -> Offset {
        Offset::new(row, col)
    }
    [
        &[k(0, 0), k(0, -1), k(0, 2), k(0, -1), k(0, 2)],
        &[k(0, -1), k(0, 0), k(0, 0), k(1, 0), k(-2, 0)],
        &[k(1, -1), k(1, 1), k(1, -2), k(0, 1), k(0, -2)],
        &[k(1, 0), k(1, 0), k(1, 0), k(-1, 0), k(2, 0)],
    ]
};

const JLSTZ_KICKS: KickTable = {
    const fn k(row: i32, col: i32) -> Offset {
        Offset::new(row, col)
    }
    [
        &[k(0, 0), k(0, 0), k(0, 0), k(0, 0), k(0, 0)],
        &[k(0, 0), k(0, 1), k(-1, 1), k(2, 0), k(2, 1)],
        &[k(0, 0), k(0, 0), k(0, 0), k(0, 0), k(0, 0)],
        &[k(0, 0), k(0, -1), k(-1, -1), k(2, 0), k(2, -1)],
    ]
};

/// Returns the wall-kick table of the given piece kind.
///
/// J, L, S, T, and Z share one 5-attempt table; I has its own 5-attempt
/// table; O has a single attempt per orientation.
#[must_use]
pub fn kicks_of(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Computes the kick translations to attempt for one orientation transition,
/// in attempt order.
///
/// Attempt `n` is `table[from][n] - table[to][n]`, the translation that
/// aligns the two orientations' virtual grids for that attempt pairing.
#[must_use]
pub fn kick_offsets(
    kind: PieceKind,
    from: Orientation,
    to: Orientation,
) -> ArrayVec<Offset, MAX_KICK_ATTEMPTS> {
    let table = kicks_of(kind);
    table[from.index()]
        .iter()
        .zip(table[to.index()])
        .map(|(src, dst)| Offset::new(src.row - dst.row, src.col - dst.col))
        .collect()
}
