//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used by the
//! constraints for duplicate detection.
//!
//! The built-in constraints only use [DigitSet::insert], whose return value
//! doubles as their duplicate test. The query methods are public for custom
//! [Constraint](../constraint/trait.Constraint.html) implementations, which
//! can use a [DigitSet] for their own digit tracking.

use crate::error::{BoardError, BoardResult};

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask over a
/// `u16`. Each digit is represented by one bit. This generally has better
/// performance than a `HashSet`, which matters in the duplicate scans that
/// run on every checked placement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitSet {
    bits: u16
}

const DIGIT_MIN: usize = 1;
const DIGIT_MAX: usize = 9;

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    fn mask(number: usize) -> BoardResult<u16> {
        if number < DIGIT_MIN || number > DIGIT_MAX {
            Err(BoardError::InvalidNumber)
        }
        else {
            Ok(1u16 << number)
        }
    }

    /// Indicates whether this set contains the given number, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// digit range, `false` will be returned.
    pub fn contains(&self, number: usize) -> bool {
        if let Ok(mask) = DigitSet::mask(number) {
            self.bits & mask > 0
        }
        else {
            false
        }
    }

    /// Inserts the given number into this set, such that [DigitSet::contains]
    /// returns `true` for this number afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the number was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `number` is less than 1 or greater than 9. In that case,
    /// `BoardError::InvalidNumber` is returned.
    pub fn insert(&mut self, number: usize) -> BoardResult<bool> {
        let mask = DigitSet::mask(number)?;

        if self.bits & mask == 0 {
            self.bits |= mask;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes all numbers from this set, such that [DigitSet::contains] will
    /// return `false` for all inputs and [DigitSet::is_empty] will return
    /// `true`.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Indicates whether this set is empty, i.e. contains no digits. If this
    /// method returns `true`, [DigitSet::contains] will return `false` for
    /// all inputs.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}
