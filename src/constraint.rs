//! This module defines constraints which can be applied to Sudoku boards,
//! thus specifying the rules of the puzzle.
//!
//! Besides the definition of the [Constraint](trait.Constraint.html) trait,
//! this module contains the constraints for default Sudoku rules. We will
//! cover them first and afterwards show how to implement a custom constraint.
//!
//! # Default Sudoku rules
//!
//! To get the default Sudoku rules,
//! [DefaultConstraint](struct.DefaultConstraint.html) can be used.
//! Conceptually, it is a conjunction of
//! [RowConstraint](struct.RowConstraint.html),
//! [ColumnConstraint](struct.ColumnConstraint.html), and
//! [BoxConstraint](struct.BoxConstraint.html). Each of the three enforces one
//! group rule: no duplicate digits in any row, column, or 3x3 box.
//!
//! # Combining rules
//!
//! Two constraints can be combined into one which requires both with a
//! [CompositeConstraint](struct.CompositeConstraint.html). Nesting composite
//! constraints allows rule sets of any size. As an example, the standard
//! rules can be assembled by hand as follows:
//!
//! ```
//! use sudoku_play::constraint::{
//!     BoxConstraint,
//!     ColumnConstraint,
//!     CompositeConstraint,
//!     RowConstraint
//! };
//!
//! let standard = CompositeConstraint::new(
//!     RowConstraint,
//!     CompositeConstraint::new(ColumnConstraint, BoxConstraint)
//! );
//! ```
//!
//! # Custom constraints
//!
//! When implementing a constraint, it is usually sufficient to implement
//! [Constraint.check_number](trait.Constraint.html#tymethod.check_number).
//! All other methods are default-implemented based on it. However, the
//! performance of [Constraint.check](trait.Constraint.html#method.check)
//! could be improved by a specialized implementation, since by default it
//! calls `check_number` for every cell.
//!
//! As an example of an implementation of a custom constraint, we will look
//! at a constraint which checks the diagonal from the top-left to the
//! bottom-right corner of the board.
//!
//! ```
//! use sudoku_play::{Board, SIZE};
//! use sudoku_play::constraint::Constraint;
//!
//! #[derive(Clone)]
//! struct MainDiagonalConstraint;
//!
//! impl Constraint for MainDiagonalConstraint {
//!     fn check_number(&self, board: &Board, column: usize, row: usize,
//!             number: usize) -> bool {
//!         // For all cells on the diagonal, the column index is equal to the
//!         // row index. All other cells don't interact with this constraint,
//!         // so we return true, indicating that they don't violate it.
//!         if column == row {
//!             for i in 0..SIZE {
//!                 // Since column == row, if i == column we are looking at
//!                 // the checked cell itself, which may contain the number.
//!                 if i != column && board.has_number(i, i, number).unwrap() {
//!                     return false;
//!                 }
//!             }
//!         }
//!
//!         true
//!     }
//! }
//! ```
//!
//! Deriving `Clone` is important, since sessions occasionally need to be
//! cloned. [Session](../session/struct.Session.html) therefore implements
//! `Clone`, which requires its constraint to be cloneable as well. Note that
//! `Clone` is not required by the `Constraint` trait itself, since that would
//! make it impossible to create `Constraint`-trait objects.

use crate::{Board, BOX_SIZE, SIZE};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

/// A constraint defines some property on a Sudoku board. These are
/// essentially the rules of the puzzle. In standard Sudoku these are "No
/// duplicates in a row" (`RowConstraint`), "No duplicates in a column"
/// (`ColumnConstraint`), and "No duplicates in a box" (`BoxConstraint`).
/// Here, however, the design is more flexible to allow for custom
/// constraints.
///
/// By default, implementors of this trait only need to implement the
/// `check_number` associated function, which verifies a proposed number for
/// a specified cell. `check_cell` and `check` are implemented by default
/// based on it, however `check` in particular may be very inefficient
/// compared to a specialized implementation (it checks every cell using
/// `check_number`).
pub trait Constraint {

    /// Checks whether the given [Board](../struct.Board.html) matches this
    /// constraint, that is, every cell matches this constraint. Empty cells
    /// never violate a constraint. By default, this runs `check_cell` on
    /// every cell of the board, which may be inefficient, so custom
    /// implementations may be advantageous.
    fn check(&self, board: &Board) -> bool {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if !self.check_cell(board, column, row) {
                    return false;
                }
            }
        }

        true
    }

    /// Checks whether the cell at the given position in the
    /// [Board](../struct.Board.html) fulfills the constraint. This is the
    /// same as calling `check_number` with the same coordinates and the
    /// number which is actually filled in that cell. If the cell is empty,
    /// this function always returns `true`.
    fn check_cell(&self, board: &Board, column: usize, row: usize) -> bool {
        if let Some(number) = board.get_cell(column, row).unwrap() {
            self.check_number(board, column, row, number)
        }
        else {
            true
        }
    }

    /// Checks whether the given `number` would fit into the cell specified
    /// by `column` and `row` into the `board` without violating this
    /// constraint. The current content of the target cell is ignored, so a
    /// number never collides with itself.
    ///
    /// This function does *not* have to check whether `number` is actually a
    /// valid digit (i.e. in the interval [1, 9]). If you require this
    /// guarantee, use
    /// [Session.is_valid_placement](../session/struct.Session.html#method.is_valid_placement)
    /// instead.
    fn check_number(&self, board: &Board, column: usize, row: usize,
        number: usize) -> bool;
}

/// A `Constraint` that there are no duplicates in each row.
#[derive(Clone, Deserialize, Serialize)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check(&self, board: &Board) -> bool {
        let mut set = DigitSet::new();

        for row in 0..SIZE {
            set.clear();

            for column in 0..SIZE {
                if let Some(number) = board.get_cell(column, row).unwrap() {
                    if !set.insert(number).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, board: &Board, column: usize, row: usize,
            number: usize) -> bool {
        for other_column in 0..SIZE {
            if other_column != column &&
                    board.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

/// A `Constraint` that there are no duplicates in each column.
#[derive(Clone, Deserialize, Serialize)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check(&self, board: &Board) -> bool {
        let mut set = DigitSet::new();

        for column in 0..SIZE {
            set.clear();

            for row in 0..SIZE {
                if let Some(number) = board.get_cell(column, row).unwrap() {
                    if !set.insert(number).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, board: &Board, column: usize, row: usize,
            number: usize) -> bool {
        for other_row in 0..SIZE {
            if other_row != row &&
                    board.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

fn check_number_box(board: &Board, column: usize, row: usize, number: usize,
        bop: impl Fn(bool, bool) -> bool) -> bool {
    let box_column = (column / BOX_SIZE) * BOX_SIZE;
    let box_row = (row / BOX_SIZE) * BOX_SIZE;

    for other_row in box_row..(box_row + BOX_SIZE) {
        for other_column in box_column..(box_column + BOX_SIZE) {
            if bop(other_row != row, other_column != column) {
                if board.has_number(other_column, other_row, number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

/// A `Constraint` that there are no duplicates in each of the nine 3x3
/// boxes.
#[derive(Clone, Deserialize, Serialize)]
pub struct BoxConstraint;

impl Constraint for BoxConstraint {
    fn check(&self, board: &Board) -> bool {
        let mut set = DigitSet::new();

        for box_row in 0..BOX_SIZE {
            for box_column in 0..BOX_SIZE {
                let row_start = box_row * BOX_SIZE;
                let column_start = box_column * BOX_SIZE;
                set.clear();

                for row in row_start..(row_start + BOX_SIZE) {
                    for column in column_start..(column_start + BOX_SIZE) {
                        if let Some(number) =
                                board.get_cell(column, row).unwrap() {
                            if !set.insert(number).unwrap() {
                                return false;
                            }
                        }
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, board: &Board, column: usize, row: usize,
            number: usize) -> bool {
        check_number_box(board, column, row, number, |a, b| a || b)
    }
}

/// Similar to `BoxConstraint`, but does not check numbers in the same row
/// and column to save some time. For use in the DefaultConstraint.
#[derive(Clone)]
struct BoxConstraintNoRowColumn;

impl Constraint for BoxConstraintNoRowColumn {
    fn check_number(&self, board: &Board, column: usize, row: usize,
            number: usize) -> bool {
        check_number_box(board, column, row, number, |a, b| a && b)
    }
}

/// The default Sudoku `Constraint` which is a logical conjunction of
/// `RowConstraint`, `ColumnConstraint`, and `BoxConstraint`. This is the
/// rule set used for standard play.
#[derive(Clone, Deserialize, Serialize)]
pub struct DefaultConstraint;

impl Constraint for DefaultConstraint {
    fn check(&self, board: &Board) -> bool {
        RowConstraint.check(board) &&
            ColumnConstraint.check(board) &&
            BoxConstraint.check(board)
    }

    fn check_cell(&self, board: &Board, column: usize, row: usize) -> bool {
        RowConstraint.check_cell(board, column, row) &&
            ColumnConstraint.check_cell(board, column, row) &&
            BoxConstraintNoRowColumn.check_cell(board, column, row)
    }

    fn check_number(&self, board: &Board, column: usize, row: usize,
            number: usize) -> bool {
        RowConstraint.check_number(board, column, row, number) &&
            ColumnConstraint.check_number(board, column, row, number) &&
            BoxConstraintNoRowColumn.check_number(board, column, row, number)
    }
}

/// A `Constraint` which simultaneously enforces two other constraints. This
/// allows the construction of complex constraints by nesting composite
/// constraints.
///
/// As an example, a constraint with the standard rules plus a custom rule
/// `MyConstraint` would be constructed as follows:
///
/// ```
/// use sudoku_play::constraint::{CompositeConstraint, DefaultConstraint};
/// # use sudoku_play::constraint::RowConstraint as MyConstraint;
///
/// let constraint = CompositeConstraint::new(DefaultConstraint, MyConstraint);
/// ```
#[derive(Clone)]
pub struct CompositeConstraint<C1, C2>
where
    C1: Constraint + Clone + 'static,
    C2: Constraint + Clone + 'static
{
    c1: C1,
    c2: C2
}

impl<C1, C2> CompositeConstraint<C1, C2>
where
    C1: Constraint + Clone + 'static,
    C2: Constraint + Clone + 'static
{
    /// Creates a new composite constraint from the two child constraints
    /// which will be enforced.
    pub fn new(c1: C1, c2: C2) -> CompositeConstraint<C1, C2> {
        CompositeConstraint {
            c1,
            c2
        }
    }
}

impl<C1, C2> Constraint for CompositeConstraint<C1, C2>
where
    C1: Constraint + Clone + 'static,
    C2: Constraint + Clone + 'static
{
    fn check(&self, board: &Board) -> bool {
        self.c1.check(board) && self.c2.check(board)
    }

    fn check_cell(&self, board: &Board, column: usize, row: usize) -> bool {
        self.c1.check_cell(board, column, row) &&
            self.c2.check_cell(board, column, row)
    }

    fn check_number(&self, board: &Board, column: usize, row: usize,
            number: usize) -> bool {
        self.c1.check_number(board, column, row, number) &&
            self.c2.check_number(board, column, row, number)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::PuzzleTemplate;
    use crate::session::Session;

    fn session_with<C>(code: &str, constraint: C) -> Session<C>
    where
        C: Constraint + Clone
    {
        Session::new(&PuzzleTemplate::parse(code).unwrap(), constraint)
    }

    fn board_with(code: &str) -> Board {
        Board::from_template(&PuzzleTemplate::parse(code).unwrap())
    }

    fn row_satisfied_code() -> &'static str {
        "1, , , ,5, , , ,9,\
          ,1, , , , ,2, , ,\
          , ,3, , ,4, , , ,\
         1, , , , , , , ,2,\
          , , ,7, , , ,8, ,\
          ,5, , , , , , ,6,\
          , ,2, , , ,4, , ,\
          , , ,9, ,1, , , ,\
         3, , , , , , , ,7"
    }

    #[test]
    fn row_satisfied() {
        // Columns and boxes do contain duplicates here, which the row
        // constraint must not care about.
        let session = session_with(row_satisfied_code(), RowConstraint);
        assert!(session.is_valid());
        assert!(session.is_valid_cell(0, 0).unwrap());
        assert!(session.is_valid_cell(1, 1).unwrap());
        assert!(session.is_valid_placement(2, 0, 3).unwrap());
        assert!(session.is_valid_placement(0, 0, 1).unwrap());
    }

    #[test]
    fn row_violated() {
        let code = "1, , , ,5, , , ,9,\
             ,1, , , , ,2, , ,\
             , ,3, , ,4, , , ,\
            1, , , , , , , ,2,\
             , , ,7, , , ,8, ,\
             ,5, , , , , , ,6,\
             , ,2, , , ,4, , ,\
             , , ,9, ,1, , , ,\
            3, , , ,3, , , ,7";
        let session = session_with(code, RowConstraint);
        assert!(!session.is_valid());
        assert!(!session.is_valid_cell(0, 8).unwrap());
        assert!(!session.is_valid_cell(4, 8).unwrap());
        assert!(session.is_valid_cell(8, 8).unwrap());
        assert!(!session.is_valid_placement(2, 8, 3).unwrap());
        assert!(!session.is_valid_placement(6, 0, 5).unwrap());
        assert!(session.is_valid_placement(6, 0, 2).unwrap());
    }

    #[test]
    fn column_satisfied() {
        // The first row contains two 2s, which the column constraint must
        // not care about.
        let code = "2, , , , ,2, , , ,\
             ,4, , , , , ,1, ,\
             , ,6, , , , , , ,\
            1, , , ,9, , , , ,\
             , , , , , ,3, , ,\
             ,2, , , , , , ,8,\
             , , ,5, , , , , ,\
            7, , , , ,4, , , ,\
             , ,9, , , , , ,2";
        let session = session_with(code, ColumnConstraint);
        assert!(session.is_valid());
        assert!(session.is_valid_cell(0, 0).unwrap());
        assert!(session.is_valid_cell(5, 0).unwrap());
        assert!(session.is_valid_placement(0, 6, 3).unwrap());
        assert!(session.is_valid_placement(0, 3, 1).unwrap());
    }

    #[test]
    fn column_violated() {
        let code = "2, , , , ,2, , , ,\
             ,4, , , , , ,1, ,\
             , ,6, , , , , , ,\
            1, , , ,9, , , , ,\
             , , , , , ,3, , ,\
             ,2, , , , , , ,8,\
             , , ,5, , , , , ,\
            7, , , , ,4, , , ,\
            2, ,9, , , , , ,2";
        let session = session_with(code, ColumnConstraint);
        assert!(!session.is_valid());
        assert!(!session.is_valid_cell(0, 0).unwrap());
        assert!(!session.is_valid_cell(0, 8).unwrap());
        assert!(session.is_valid_cell(0, 3).unwrap());
        assert!(!session.is_valid_placement(0, 5, 1).unwrap());
        assert!(!session.is_valid_placement(1, 2, 4).unwrap());
        assert!(session.is_valid_placement(0, 5, 3).unwrap());
    }

    #[test]
    fn box_satisfied() {
        // The first column and the first row contain duplicates, which the
        // box constraint must not care about.
        let code = "4, , ,4, , , , , ,\
             , , , ,2, , , ,1,\
             ,5, , , , ,3, , ,\
            4, , , , ,6, , , ,\
             , ,8, , , , ,9, ,\
             , , ,1, , , , , ,\
             , ,2, , ,7, , , ,\
            6, , , , , , , ,5,\
             , , , ,3, ,8, , ";
        let session = session_with(code, BoxConstraint);
        assert!(session.is_valid());
        assert!(session.is_valid_cell(0, 0).unwrap());
        assert!(session.is_valid_cell(3, 0).unwrap());
        assert!(session.is_valid_placement(1, 1, 9).unwrap());
        assert!(session.is_valid_placement(0, 0, 4).unwrap());
    }

    #[test]
    fn box_violated() {
        let code = "4, , ,4, , , , , ,\
             , , , ,2, , , ,1,\
             ,5, , , , ,3, , ,\
            4, , , , ,6, , , ,\
             , ,8, , , , ,9, ,\
             , , ,1, , , , , ,\
             , ,2, , ,7, ,5, ,\
            6, , , , , , , ,5,\
             , , , ,3, ,8, , ";
        let session = session_with(code, BoxConstraint);
        assert!(!session.is_valid());
        assert!(!session.is_valid_cell(7, 6).unwrap());
        assert!(!session.is_valid_cell(8, 7).unwrap());
        assert!(session.is_valid_cell(6, 8).unwrap());
        assert!(!session.is_valid_placement(6, 6, 5).unwrap());
        assert!(!session.is_valid_placement(4, 7, 3).unwrap());
        assert!(session.is_valid_placement(6, 6, 1).unwrap());
    }

    #[test]
    fn default_satisfied() {
        let code = "5, , , ,7, , , , ,\
             ,7, , , , ,3, , ,\
             , ,9, , , , , ,6,\
            8, , , , ,5, , , ,\
             , , ,2, , , ,4, ,\
             , ,3, , , , , ,1,\
             ,2, , , ,8, , , ,\
             , , , ,4, ,9, , ,\
            1, , , , , , ,7, ";
        let session = session_with(code, DefaultConstraint);
        assert!(session.is_valid());
        assert!(session.is_valid_cell(0, 0).unwrap());
        assert!(session.is_valid_cell(4, 7).unwrap());
        assert!(session.is_valid_placement(2, 0, 1).unwrap());
        assert!(!session.is_valid_placement(2, 0, 9).unwrap());
    }

    #[test]
    fn default_violated_in_box_only() {
        // The two 4s share only a box, the two 7s share only a row. The 4s
        // must be found by the box part of the conjunction.
        let code = "4, , , , , , , , ,\
             ,4, , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
            7, , , , ,7, , , ";
        let session = session_with(code, DefaultConstraint);
        assert!(!session.is_valid());
        assert!(!session.is_valid_cell(0, 0).unwrap());
        assert!(!session.is_valid_cell(1, 1).unwrap());
        assert!(!session.is_valid_cell(0, 8).unwrap());
        assert!(session.is_valid_cell(2, 2).unwrap());
        assert!(!session.is_valid_placement(2, 2, 4).unwrap());
    }

    fn test_column_row_satisfied(constraint: impl Constraint + Clone) {
        // The box with the two 1s is fine as long as only rows and columns
        // are checked.
        let code = "1, , , , , , , , ,\
             ,1, , , , , , , ,\
             , ,2, , , , , , ,\
             , , ,3, , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ";
        let session = session_with(code, constraint);
        assert!(session.is_valid());
        assert!(session.is_valid_cell(0, 0).unwrap());
        assert!(session.is_valid_cell(1, 1).unwrap());
        assert!(session.is_valid_placement(5, 0, 2).unwrap());
    }

    fn test_column_row_violated(constraint: impl Constraint + Clone) {
        let code = "1, , , , ,1, , , ,\
             ,1, , , , , , , ,\
             , ,2, , , , , , ,\
             , , ,3, , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ";
        let session = session_with(code, constraint);
        assert!(!session.is_valid());
        assert!(!session.is_valid_cell(0, 0).unwrap());
        assert!(!session.is_valid_cell(5, 0).unwrap());
        assert!(session.is_valid_cell(1, 1).unwrap());
        assert!(!session.is_valid_placement(3, 1, 1).unwrap());
    }

    #[test]
    fn composite_satisfied() {
        test_column_row_satisfied(CompositeConstraint::new(
            RowConstraint, ColumnConstraint));
    }

    #[test]
    fn composite_violated() {
        test_column_row_violated(CompositeConstraint::new(
            RowConstraint, ColumnConstraint));
    }

    #[test]
    fn composite_of_all_three_matches_default() {
        let standard = CompositeConstraint::new(
            RowConstraint,
            CompositeConstraint::new(ColumnConstraint, BoxConstraint)
        );
        let codes = [
            row_satisfied_code(),
            "4, , , , , , , , ,\
              ,4, , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
             7, , , , ,7, , , ",
            "5, , , ,7, , , , ,\
              ,7, , , , ,3, , ,\
              , ,9, , , , , ,6,\
             8, , , , ,5, , , ,\
              , , ,2, , , ,4, ,\
              , ,3, , , , , ,1,\
              ,2, , , ,8, , , ,\
              , , , ,4, ,9, , ,\
             1, , , , , , ,7, "
        ];

        for code in codes.iter() {
            let board = board_with(code);

            assert_eq!(DefaultConstraint.check(&board), standard.check(&board));

            for row in 0..SIZE {
                for column in 0..SIZE {
                    assert_eq!(
                        DefaultConstraint.check_cell(&board, column, row),
                        standard.check_cell(&board, column, row));

                    for number in 1..=SIZE {
                        assert_eq!(
                            DefaultConstraint
                                .check_number(&board, column, row, number),
                            standard.check_number(&board, column, row, number));
                    }
                }
            }
        }
    }

    #[test]
    fn specialized_checks_match_cell_scan() {
        fn check_via_cells(constraint: &impl Constraint, board: &Board)
                -> bool {
            for row in 0..SIZE {
                for column in 0..SIZE {
                    if !constraint.check_cell(board, column, row) {
                        return false;
                    }
                }
            }

            true
        }

        let codes = [
            row_satisfied_code(),
            "2, , , , ,2, , , ,\
              ,4, , , , , ,1, ,\
              , ,6, , , , , , ,\
             1, , , ,9, , , , ,\
              , , , , , ,3, , ,\
              ,2, , , , , , ,8,\
              , , ,5, , , , , ,\
             7, , , , ,4, , , ,\
             2, ,9, , , , , ,2",
            "4, , , , , , , , ,\
              ,4, , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , , , , , , "
        ];

        for code in codes.iter() {
            let board = board_with(code);

            assert_eq!(check_via_cells(&RowConstraint, &board),
                RowConstraint.check(&board));
            assert_eq!(check_via_cells(&ColumnConstraint, &board),
                ColumnConstraint.check(&board));
            assert_eq!(check_via_cells(&BoxConstraint, &board),
                BoxConstraint.check(&board));
            assert_eq!(check_via_cells(&DefaultConstraint, &board),
                DefaultConstraint.check(&board));
        }
    }

    #[test]
    fn check_number_ignores_target_cell() {
        let mut board = board_with(row_satisfied_code());
        board.set_cell(2, 0, 7).unwrap();

        assert!(RowConstraint.check_number(&board, 2, 0, 7));
        assert!(ColumnConstraint.check_number(&board, 2, 0, 7));
        assert!(BoxConstraint.check_number(&board, 2, 0, 7));
        assert!(DefaultConstraint.check_number(&board, 2, 0, 7));
    }
}
