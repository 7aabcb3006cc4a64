use super::{kick::kick_offsets, piece::Piece};

/// Direction of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// 90° clockwise.
    Clockwise,
    /// 90° counterclockwise.
    CounterClockwise,
}

/// Rotates a piece, resolving collisions with wall kicks.
///
/// Steps the piece's orientation in the requested direction, then tries the
/// kick translations for that transition in table order. The first candidate
/// accepted by `is_valid` is returned; if every attempt is rejected, the
/// original piece is returned unchanged. A rejected rotation is a defined
/// no-op outcome, not an error; callers can detect it by comparing the
/// result to the input.
///
/// `is_valid` is the board collaborator's placement check. It is called at
/// most once per attempt, and attempt order is significant: later attempts
/// are deliberately prioritized fallback offsets.
///
/// # Example
///
/// ```
/// use ferrotris_engine::{Piece, PieceKind, RotationDirection, rotate};
///
/// let piece = Piece::new(PieceKind::T, 18, 4);
/// let rotated = rotate(piece, RotationDirection::Clockwise, |_| true);
/// assert_eq!(rotated.orientation(), piece.orientation().rotated_cw());
/// ```
#[must_use]
pub fn rotate<F>(piece: Piece, direction: RotationDirection, is_valid: F) -> Piece
where
    F: Fn(&Piece) -> bool,
{
    let rotated = match direction {
        RotationDirection::Clockwise => piece.rotated_cw(),
        RotationDirection::CounterClockwise => piece.rotated_ccw(),
    };
    for kick in kick_offsets(piece.kind(), piece.orientation(), rotated.orientation()) {
        let candidate = rotated.translated(kick.row, kick.col);
        if is_valid(&candidate) {
            return candidate;
        }
    }
    piece
}
