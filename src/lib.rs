// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a small, self-contained engine for playing a single
//! Sudoku puzzle. It supports the following key features:
//!
//! * Keeping a board of fixed givens and editable cells
//! * Checking every entered digit against the standard Sudoku rules the
//! moment it is placed
//! * Validating a completely filled board as a solution
//! * Tracking the elapsed time of a play session
//! * Resetting a session to its initial state
//!
//! Rendering and input capture are left to an embedding frontend. The engine
//! holds the state, answers questions about it, and reports the outcome of
//! every move in plain data structures which the frontend can display as it
//! sees fit.
//!
//! # Boards and templates
//!
//! A puzzle is described by a [PuzzleTemplate], which assigns a given digit
//! to some cells and leaves the rest to the player. Templates can be parsed
//! from a code (see [PuzzleTemplate::parse]) or built from rows of numbers
//! (see [PuzzleTemplate::from_rows]). One puzzle is shipped with the crate:
//!
//! ```
//! use sudoku_play::{Board, PuzzleTemplate};
//!
//! let template = PuzzleTemplate::sample();
//! let board = Board::from_template(&template);
//!
//! println!("{}", board);
//! assert_eq!(30, board.count_filled());
//! ```
//!
//! # Playing
//!
//! A play session is managed by a [Session](session::Session), which owns the
//! board, the rules, and the clock. Edits go through
//! [Session::edit_cell](session::Session::edit_cell), which takes the raw
//! text the player typed and answers with an [EditOutcome](session::EditOutcome)
//! that states whether the input was usable and whether the placed digit
//! collides with another one.
//!
//! ```
//! use sudoku_play::PuzzleTemplate;
//! use sudoku_play::constraint::DefaultConstraint;
//! use sudoku_play::session::Session;
//!
//! let mut session =
//!     Session::new(&PuzzleTemplate::sample(), DefaultConstraint);
//!
//! // The top-left cell already holds the given 5, so a second 5 in the same
//! // row is flagged the moment it is entered.
//! let outcome = session.edit_cell(2, 0, "5").unwrap();
//! assert!(outcome.accepted);
//! assert!(outcome.conflict);
//!
//! // Entering a digit that fits clears the flag again.
//! let outcome = session.edit_cell(2, 0, "1").unwrap();
//! assert!(outcome.accepted);
//! assert!(!outcome.conflict);
//! ```
//!
//! # Checking a solution
//!
//! Flagging is advisory and never blocks play; the final verdict comes from
//! [Session::check_solution](session::Session::check_solution), which answers
//! with a [CheckOutcome](session::CheckOutcome).
//!
//! ```
//! use sudoku_play::PuzzleTemplate;
//! use sudoku_play::constraint::DefaultConstraint;
//! use sudoku_play::session::{Feedback, Session};
//!
//! let mut session =
//!     Session::new(&PuzzleTemplate::sample(), DefaultConstraint);
//! let outcome = session.check_solution();
//!
//! // The sample puzzle starts with 51 empty cells, so there is no verdict
//! // on the digits yet.
//! assert!(!outcome.solved);
//! assert_eq!(Feedback::Incomplete, outcome.message);
//! assert_eq!("Please fill all cells.", outcome.message.to_string());
//! ```
//!
//! # Session timing
//!
//! The engine never reads a wall clock. The
//! [SessionTimer](timer::SessionTimer) counts whole seconds and only advances
//! when the frontend calls [Session::tick](session::Session::tick), typically
//! from a one-second interval. This keeps the engine deterministic and easy
//! to test.
//!
//! ```
//! use sudoku_play::PuzzleTemplate;
//! use sudoku_play::constraint::DefaultConstraint;
//! use sudoku_play::session::Session;
//!
//! let mut session =
//!     Session::new(&PuzzleTemplate::sample(), DefaultConstraint);
//! assert_eq!(0, session.elapsed_seconds());
//!
//! session.tick();
//! session.tick();
//! assert_eq!(2, session.elapsed_seconds());
//! ```
//!
//! # Custom rules
//!
//! All rule checking goes through the
//! [Constraint](constraint::Constraint) trait. Standard play uses
//! [DefaultConstraint](constraint::DefaultConstraint), which combines the
//! row, column, and box rules, but sessions accept any constraint, and
//! constraints can be combined with
//! [CompositeConstraint](constraint::CompositeConstraint). Check out the
//! [constraint] module for details.

pub mod constraint;
pub mod error;
pub mod session;
pub mod timer;
pub mod util;



use error::{BoardError, BoardResult, TemplateParseError, TemplateParseResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of the grid, which is also the number of cells in
/// each row, column, and box, and the highest digit.
pub const SIZE: usize = 9;

/// The width and height of one of the nine 3x3 boxes the grid is divided
/// into.
pub const BOX_SIZE: usize = 3;

/// The total number of cells on a board.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

/// The definition of a puzzle: a 9x9 grid in which some cells hold a given
/// digit (a "clue") while the remaining cells are left to the player. A
/// template only describes the starting position; the state of a running
/// game is kept by a [Board] created from it.
///
/// Note that a template is not checked for solvability or even consistency.
/// It is perfectly legal to define an unsolvable puzzle. Structurally
/// invalid templates are rejected on every construction path, though;
/// deserialization applies the same checks as [parse](#method.parse).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "UncheckedPuzzleTemplate")]
pub struct PuzzleTemplate {
    clues: Vec<Option<usize>>
}

/// The raw form a [PuzzleTemplate] is deserialized into before validation.
#[derive(Deserialize)]
struct UncheckedPuzzleTemplate {
    clues: Vec<Option<usize>>
}

impl TryFrom<UncheckedPuzzleTemplate> for PuzzleTemplate {
    type Error = TemplateParseError;

    fn try_from(unchecked: UncheckedPuzzleTemplate)
            -> TemplateParseResult<PuzzleTemplate> {
        if unchecked.clues.len() != CELL_COUNT {
            return Err(TemplateParseError::WrongNumberOfCells);
        }

        for clue in unchecked.clues.iter() {
            if let Some(number) = *clue {
                if number == 0 || number > SIZE {
                    return Err(TemplateParseError::InvalidNumber);
                }
            }
        }

        Ok(PuzzleTemplate {
            clues: unchecked.clues
        })
    }
}

impl PuzzleTemplate {

    /// Creates a template from an array of nine rows with nine numbers each,
    /// in top-to-bottom order. A 0 encodes an empty cell, the numbers 1 to 9
    /// encode a given digit.
    ///
    /// # Errors
    ///
    /// If any entry is greater than 9. In that case,
    /// `BoardError::InvalidNumber` is returned.
    pub fn from_rows(rows: [[usize; SIZE]; SIZE])
            -> BoardResult<PuzzleTemplate> {
        let mut clues = Vec::with_capacity(CELL_COUNT);

        for row in rows.iter() {
            for &number in row.iter() {
                if number > SIZE {
                    return Err(BoardError::InvalidNumber);
                }

                if number == 0 {
                    clues.push(None);
                }
                else {
                    clues.push(Some(number));
                }
            }
        }

        Ok(PuzzleTemplate {
            clues
        })
    }

    /// Parses a code encoding a puzzle template. The code is a
    /// comma-separated list of 81 entries, which are either empty or a digit
    /// from 1 to 9. The entries are assigned left-to-right, top-to-bottom,
    /// where each row is completed before the next one is started. Whitespace
    /// in the entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code of a puzzle whose first row starts with the
    /// givens 5 and 3 and whose last cell is a given 9 begins with
    /// `5,3,` and ends with `,9`.
    ///
    /// # Errors
    ///
    /// Any specialization of `TemplateParseError` (see that documentation).
    pub fn parse(code: &str) -> TemplateParseResult<PuzzleTemplate> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(TemplateParseError::WrongNumberOfCells);
        }

        let mut clues = vec![None; CELL_COUNT];

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(TemplateParseError::InvalidNumber);
            }

            clues[i] = Some(number);
        }

        Ok(PuzzleTemplate {
            clues
        })
    }

    /// Converts the template into a `String` in a way that is consistent
    /// with [PuzzleTemplate::parse](#method.parse). That is, a template that
    /// is converted to a string and parsed again will not change.
    ///
    /// ```
    /// use sudoku_play::PuzzleTemplate;
    ///
    /// let template = PuzzleTemplate::sample();
    /// let code = template.to_parseable_string();
    /// let parsed = PuzzleTemplate::parse(code.as_str()).unwrap();
    /// assert_eq!(template, parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.clues.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the given at the specified position, or `None` if that cell is
    /// left to the player.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `BoardError::OutOfBounds` is returned.
    pub fn clue(&self, column: usize, row: usize)
            -> BoardResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(BoardError::OutOfBounds)
        }
        else {
            Ok(self.clues[index(column, row)])
        }
    }

    /// Counts the number of clues specified by this template, that is, the
    /// number of cells which hold a given.
    pub fn count_clues(&self) -> usize {
        self.clues.iter()
            .filter(|clue| clue.is_some())
            .count()
    }

    /// Returns the sample puzzle shipped with this crate. It specifies 30
    /// givens and has exactly one solution.
    pub fn sample() -> PuzzleTemplate {
        let rows = [
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9]
        ];
        let clues = rows.iter()
            .flat_map(|row| row.iter())
            .map(|&number| {
                if number == 0 {
                    None
                }
                else {
                    Some(number)
                }
            })
            .collect();

        PuzzleTemplate {
            clues
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Cell {
    value: Option<usize>,
    fixed: bool
}

/// The state of a board during play: 81 cells in left-to-right,
/// top-to-bottom order, where each cell may or may not be occupied by a
/// number. Cells which hold a given of the puzzle are *fixed*; they are
/// filled at construction time and keep their digit until the board is
/// dropped. All other cells are freely editable.
///
/// A board does not know the rules. Whether its content is valid is decided
/// by a [Constraint](constraint::Constraint).
///
/// `Board` implements `Display`, which renders the grid with box-drawing
/// characters and one digit per cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: Vec<Cell>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, y: usize) -> String {
    line('║', '║', '│', |x| to_char(board.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl Board {

    /// Creates a new board from the given template. Cells which hold a given
    /// in the template are filled with that digit and fixed, all other cells
    /// start out empty and editable.
    pub fn from_template(template: &PuzzleTemplate) -> Board {
        let cells = template.clues.iter()
            .map(|&clue| Cell {
                value: clue,
                fixed: clue.is_some()
            })
            .collect();

        Board {
            cells
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `BoardError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> BoardResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(BoardError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)].value)
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `BoardError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> BoardResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Indicates whether the cell at the specified position is fixed, that
    /// is, holds a given of the puzzle. Fixed cells reject
    /// [Board::set_cell] and [Board::clear_cell].
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `BoardError::OutOfBounds` is returned.
    pub fn is_fixed(&self, column: usize, row: usize) -> BoardResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(BoardError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)].fixed)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `BoardError::InvalidNumber` If `number` is not in the specified
    /// range.
    /// * `BoardError::FixedCell` If the specified cell holds a given.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> BoardResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(BoardError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(BoardError::InvalidNumber);
        }

        let index = index(column, row);

        if self.cells[index].fixed {
            return Err(BoardError::FixedCell);
        }

        self.cells[index].value = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `BoardError::FixedCell` If the specified cell holds a given.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> BoardResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(BoardError::OutOfBounds);
        }

        let index = index(column, row);

        if self.cells[index].fixed {
            return Err(BoardError::FixedCell);
        }

        self.cells[index].value = None;
        Ok(())
    }

    /// Clears the content of every editable cell, returning the board to the
    /// state it had when it was created from its template. Fixed cells keep
    /// their given.
    pub fn clear_entries(&mut self) {
        for cell in self.cells.iter_mut() {
            if !cell.fixed {
                cell.value = None;
            }
        }
    }

    /// Counts the number of cells which currently hold a digit, givens
    /// included. For a board that is full, this is 81.
    pub fn count_filled(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.value.is_some())
            .count()
    }

    /// Indicates whether this board is full, i.e. every cell is filled with
    /// a number. Only a full board can be a solution.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.value.is_none())
    }
}
