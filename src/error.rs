//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods of the board types in
/// the [root module](../index.html) and of the session types in the
/// [session module](../session/index.html). This does not include errors that
/// occur when parsing a puzzle template, see
/// [TemplateParseError](enum.TemplateParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum BoardError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either of them is greater than or
    /// equal to 9.
    OutOfBounds,

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that a cell which holds one of the puzzle's givens was about
    /// to be overwritten or cleared. Fixed cells never change during play.
    FixedCell
}

/// Syntactic sugar for `Result<V, BoardError>`.
pub type BoardResult<V> = Result<V, BoardError>;

/// An enumeration of the errors that may occur when parsing a
/// [PuzzleTemplate](../struct.PuzzleTemplate.html).
#[derive(Debug, Eq, PartialEq)]
pub enum TemplateParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that the content of some non-empty cell could not be parsed
    /// as a number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber
}

impl From<ParseIntError> for TemplateParseError {
    fn from(_: ParseIntError) -> Self {
        TemplateParseError::NumberFormatError
    }
}

impl Display for TemplateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = match self {
            TemplateParseError::WrongNumberOfCells =>
                "wrong number of cells",
            TemplateParseError::NumberFormatError =>
                "cell content is not a number",
            TemplateParseError::InvalidNumber =>
                "cell holds an invalid number"
        };

        f.write_str(message)
    }
}

/// Syntactic sugar for `Result<V, TemplateParseError>`.
pub type TemplateParseResult<V> = Result<V, TemplateParseError>;
