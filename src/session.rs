//! This module contains the types which manage a play session: the
//! [Session](struct.Session.html) itself, the outcome records returned by
//! its operations, and the [Feedback](enum.Feedback.html) messages shown to
//! the player.

use crate::{index, Board, PuzzleTemplate, CELL_COUNT, SIZE};
use crate::constraint::Constraint;
use crate::error::{BoardError, BoardResult};
use crate::timer::SessionTimer;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The feedback messages the engine reports to the player. Each variant
/// renders to a fixed English message via `Display`; frontends which need
/// other wordings can match on the variant instead.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Feedback {

    /// The digit entered last collides with another digit in the same row,
    /// column, or box.
    RuleConflict,

    /// A solution check was requested while the board still has empty
    /// cells.
    Incomplete,

    /// The board is completely filled and satisfies the rules. The puzzle
    /// is solved.
    Solved,

    /// The board is completely filled but violates the rules somewhere.
    Unsolved
}

impl Feedback {

    /// Returns the message text for this feedback.
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::RuleConflict => "Error: Invalid number entered!",
            Feedback::Incomplete => "Please fill all cells.",
            Feedback::Solved => "Congratulations! You solved the puzzle!",
            Feedback::Unsolved => "There are errors in your solution."
        }
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The phase a [Session](struct.Session.html) is in.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SessionPhase {

    /// The puzzle is being played. Cells accept edits and the clock runs.
    Playing,

    /// The puzzle has been solved. The board no longer accepts edits and
    /// the clock is stopped.
    Solved
}

/// The result of a call to
/// [Session.edit_cell](struct.Session.html#method.edit_cell). This is a
/// plain record for the frontend to render; the session keeps the same
/// information in its own state.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EditOutcome {

    /// Whether the input was written to the board. `false` means the edit
    /// was dropped because the cell is fixed, the puzzle is already solved,
    /// or the input was not a digit from 1 to 9, in which case the cell was
    /// emptied instead.
    pub accepted: bool,

    /// Whether the digit placed by this edit collides with another digit in
    /// its row, column, or box. Only accepted edits can raise a conflict.
    pub conflict: bool,

    /// The feedback message the session displays after this edit, if any.
    pub message: Option<Feedback>
}

/// The result of a call to
/// [Session.check_solution](struct.Session.html#method.check_solution).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CheckOutcome {

    /// Whether the board was found to be a valid solution of the puzzle.
    pub solved: bool,

    /// The feedback message describing the verdict.
    pub message: Feedback
}

fn parse_digit(input: &str) -> Option<usize> {
    let mut chars = input.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c >= '1' && c <= '9' =>
            Some(c as usize - '0' as usize),
        _ => None
    }
}

/// A play session for a single puzzle. The session owns the
/// [Board](../struct.Board.html), the rules it is played by, the per-cell
/// conflict marks, the current [Feedback](enum.Feedback.html) message, the
/// [SessionPhase](enum.SessionPhase.html), and the
/// [SessionTimer](../timer/struct.SessionTimer.html).
///
/// All player interaction goes through
/// [edit_cell](#method.edit_cell),
/// [check_solution](#method.check_solution), and
/// [reset](#method.reset); everything else is read-only queries. This keeps
/// the conflict marks and the message consistent with the board at all
/// times.
///
/// ```
/// use sudoku_play::PuzzleTemplate;
/// use sudoku_play::constraint::DefaultConstraint;
/// use sudoku_play::session::Session;
///
/// let mut session = Session::new(&PuzzleTemplate::sample(),
///     DefaultConstraint);
/// session.edit_cell(2, 0, "1").unwrap();
/// assert_eq!(Some(1), session.board().get_cell(2, 0).unwrap());
/// ```
#[derive(Clone)]
pub struct Session<C: Constraint + Clone> {
    board: Board,
    constraint: C,
    conflicts: Vec<bool>,
    message: Option<Feedback>,
    phase: SessionPhase,
    timer: SessionTimer
}

impl<C: Constraint + Clone> Session<C> {

    /// Creates a new session for the puzzle described by `template`, played
    /// by the rules given as `constraint`. The session starts in the
    /// [Playing](enum.SessionPhase.html#variant.Playing) phase with a
    /// running timer, no conflict marks, and no message.
    pub fn new(template: &PuzzleTemplate, constraint: C) -> Session<C> {
        let mut timer = SessionTimer::new();
        timer.start();

        Session {
            board: Board::from_template(template),
            constraint,
            conflicts: vec![false; CELL_COUNT],
            message: None,
            phase: SessionPhase::Playing,
            timer
        }
    }

    /// Gets a reference to the board of this session.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets a reference to the `Constraint` this session is played by.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Gets a reference to the timer of this session.
    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    /// The phase this session is in.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Indicates whether the puzzle has been solved.
    pub fn is_solved(&self) -> bool {
        self.phase == SessionPhase::Solved
    }

    /// The feedback message the session currently displays, if any.
    pub fn message(&self) -> Option<Feedback> {
        self.message
    }

    /// Advances the session clock by one second if it is running. The
    /// engine never reads a wall clock; the embedding frontend calls this
    /// method on its own schedule, typically once per second.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Returns the number of whole seconds the current attempt has been
    /// played.
    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    /// Indicates whether the entire board currently matches the rules.
    /// Empty cells are ignored.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.board)
    }

    /// Indicates whether the cell at the given position matches the rules.
    /// Empty cells are always considered valid.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If `column` or `row` are not in the specified range. In that case,
    /// `BoardError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> BoardResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(BoardError::OutOfBounds)
        }
        else {
            Ok(self.constraint.check_cell(&self.board, column, row))
        }
    }

    /// Indicates whether the given number could be placed in the cell at
    /// the given position without breaking the rules. The current content
    /// of the target cell is ignored, so a digit is never in conflict with
    /// itself.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds` if `column` or `row` are not in the
    /// specified range.
    /// * `BoardError::InvalidNumber` if `number` is not in the specified
    /// range.
    pub fn is_valid_placement(&self, column: usize, row: usize,
            number: usize) -> BoardResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(BoardError::OutOfBounds)
        }
        else if number == 0 || number > SIZE {
            Err(BoardError::InvalidNumber)
        }
        else {
            Ok(self.constraint.check_number(&self.board, column, row, number))
        }
    }

    /// Indicates whether the cell at the given position is currently marked
    /// as conflicting. Only the cell whose edit raised the conflict carries
    /// the mark; the cells it collides with keep their own state.
    ///
    /// # Errors
    ///
    /// If `column` or `row` are not in the range `[0, 9[`. In that case,
    /// `BoardError::OutOfBounds` is returned.
    pub fn has_conflict(&self, column: usize, row: usize)
            -> BoardResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(BoardError::OutOfBounds)
        }
        else {
            Ok(self.conflicts[index(column, row)])
        }
    }

    /// Indicates whether any cell is currently marked as conflicting.
    pub fn any_conflicts(&self) -> bool {
        self.conflicts.iter().any(|&conflict| conflict)
    }

    fn rejected_outcome(&self) -> EditOutcome {
        EditOutcome {
            accepted: false,
            conflict: false,
            message: self.message
        }
    }

    /// Applies the raw text a player entered into a cell.
    ///
    /// If the input is a single digit from 1 to 9, it is written to the
    /// cell and checked against the rules. A digit which breaks the rules
    /// stays on the board, but the edited cell is marked as conflicting and
    /// the message changes to [Feedback::RuleConflict](enum.Feedback.html).
    /// A digit which matches the rules clears the cell's conflict mark and,
    /// if no other cell is marked, also clears the message.
    ///
    /// Any other input (empty text, letters, multi-digit numbers, `0`)
    /// empties the cell and clears its conflict mark, leaving the message
    /// untouched.
    ///
    /// Edits of fixed cells and edits made after the puzzle has been solved
    /// are dropped entirely.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the edited cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the edited cell. Must be in the
    /// range `[0, 9[`.
    /// * `input`: The raw text the player entered.
    ///
    /// # Errors
    ///
    /// If `column` or `row` are not in the specified range. In that case,
    /// `BoardError::OutOfBounds` is returned.
    pub fn edit_cell(&mut self, column: usize, row: usize, input: &str)
            -> BoardResult<EditOutcome> {
        if column >= SIZE || row >= SIZE {
            return Err(BoardError::OutOfBounds);
        }

        if self.phase == SessionPhase::Solved ||
                self.board.is_fixed(column, row)? {
            return Ok(self.rejected_outcome());
        }

        match parse_digit(input) {
            Some(number) => {
                self.board.set_cell(column, row, number)?;

                let valid = self.constraint
                    .check_number(&self.board, column, row, number);
                self.conflicts[index(column, row)] = !valid;

                if !valid {
                    self.message = Some(Feedback::RuleConflict);
                }
                else if !self.any_conflicts() {
                    self.message = None;
                }

                Ok(EditOutcome {
                    accepted: true,
                    conflict: !valid,
                    message: self.message
                })
            },
            None => {
                self.board.clear_cell(column, row)?;
                self.conflicts[index(column, row)] = false;
                Ok(self.rejected_outcome())
            }
        }
    }

    /// Checks whether the board is a valid solution of the puzzle and
    /// reports the verdict.
    ///
    /// If the board still has empty cells, the verdict is
    /// [Feedback::Incomplete](enum.Feedback.html). If it is full and
    /// matches the rules, the session moves to the
    /// [Solved](enum.SessionPhase.html#variant.Solved) phase and the timer
    /// is stopped. If it is full but breaks the rules, the verdict is
    /// [Feedback::Unsolved](enum.Feedback.html) and play continues.
    ///
    /// The conflict marks are not touched by this method. They track
    /// individual edits, while the verdict judges the board as a whole.
    pub fn check_solution(&mut self) -> CheckOutcome {
        let feedback = if !self.board.is_full() {
            Feedback::Incomplete
        }
        else if self.is_valid() {
            self.phase = SessionPhase::Solved;
            self.timer.stop();
            Feedback::Solved
        }
        else {
            Feedback::Unsolved
        };

        self.message = Some(feedback);

        CheckOutcome {
            solved: feedback == Feedback::Solved,
            message: feedback
        }
    }

    /// Returns the session to the state it had at construction: all
    /// non-fixed cells are emptied, all conflict marks and the message are
    /// cleared, the phase is set back to
    /// [Playing](enum.SessionPhase.html#variant.Playing), and the timer is
    /// restarted from zero.
    pub fn reset(&mut self) {
        self.board.clear_entries();

        for conflict in self.conflicts.iter_mut() {
            *conflict = false;
        }

        self.message = None;
        self.phase = SessionPhase::Playing;
        self.timer.start();
    }
}
