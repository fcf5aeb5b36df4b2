use crate::bitset::Set;
use crate::board::{Cell, Digit};
use std::fmt;

/// A digit in a specific cell, either placed there or remaining as one of its candidates.
///
/// Displayed as `r2c4-3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Candidate {
    pub cell: Cell,
    pub digit: Digit,
}

impl Candidate {
    /// Constructs a new candidate from the raw cell number and digit.
    ///
    /// # Panics
    ///
    /// panics if `cell >= 81` or `!(1..=9).contains(digit)`
    pub fn new(cell: u8, digit: u8) -> Candidate {
        assert!(cell < 81, "cell {} is out of range", cell);
        Candidate {
            cell: Cell::new(cell),
            digit: Digit::new(digit),
        }
    }

    /// All candidates of `cell` with a digit in `digits`, in ascending order.
    pub fn in_cell(cell: Cell, digits: Set<Digit>) -> impl Iterator<Item = Candidate> {
        digits.into_iter().map(move |digit| Candidate { cell, digit })
    }

    #[inline]
    pub(crate) fn digit_set(self) -> Set<Digit> {
        self.digit.as_set()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.cell, self.digit)
    }
}
