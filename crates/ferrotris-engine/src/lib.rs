pub use self::core::*;

pub mod core;

/// Error returned when parsing a piece from its compact string form.
///
/// The expected format is `"kind#orientation@row,col"` (e.g. `"S#1@4,-2"`).
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParsePieceError {
    #[display("missing '{separator}' in piece string")]
    MissingSeparator { separator: char },
    #[display("invalid piece kind '{kind}'")]
    InvalidKind { kind: String },
    #[display("orientation must be 0-3, got '{orientation}'")]
    InvalidOrientation { orientation: String },
    #[display("invalid center coordinate '{coordinate}'")]
    InvalidCoordinate { coordinate: String },
}
