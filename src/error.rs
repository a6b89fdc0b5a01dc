use std::{error::Error, fmt::Display};

/// A vehicle layout that does not form a playable board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// No vehicle is flagged as the goal vehicle.
    MissingGoal,
    /// More than one vehicle is flagged as the goal vehicle.
    MultipleGoals,
    /// Vehicle `index` has a cell outside the grid.
    OutOfBounds { index: usize },
    /// Two vehicles cover the same `(row, column)` cell.
    Overlap { cell: (usize, usize) },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::MissingGoal => f.write_str("board has no goal vehicle"),
            BoardError::MultipleGoals => f.write_str("board has more than one goal vehicle"),
            BoardError::OutOfBounds { index } => {
                write!(f, "vehicle {} does not fit on the board", index)
            }
            BoardError::Overlap { cell: (row, column) } => {
                write!(f, "vehicles overlap at row {}, column {}", row, column)
            }
        }
    }
}

impl Error for BoardError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A block with a name but no grid rows.
    EmptyGrid,
    /// A grid row whose width differs from the number of rows.
    RaggedRow { expected: usize, found: usize },
    UnknownSymbol(char),
    /// A vehicle that is opened but never closed (or the reverse).
    BrokenVehicle,
    Board(BoardError),
}

/// Failure to read a board from text; `line` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> ParseError {
        ParseError { line, kind }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::EmptyGrid => f.write_str("puzzle has a name but no grid"),
            ParseErrorKind::RaggedRow { expected, found } => write!(
                f,
                "grid row has {} cells, expected {}",
                found, expected
            ),
            ParseErrorKind::UnknownSymbol(c) => write!(f, "unknown symbol {:?}", c),
            ParseErrorKind::BrokenVehicle => f.write_str("vehicle is not properly terminated"),
            ParseErrorKind::Board(e) => e.fmt(f),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Board(e) => Some(e),
            _ => None,
        }
    }
}
