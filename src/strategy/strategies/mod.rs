pub(crate) mod aligned_exclusion;
pub(crate) mod naked_singles;
mod prelude;

use self::aligned_exclusion::{MAX_DEGREE, MIN_DEGREE};
use super::{Deduction, StrategySolver};
use std::fmt;

/// The strategies that can be used to find hints or solve a sudoku.
///
/// This can be used with [`StrategySolver::solve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Strategy {
    NakedSingles,
    AlignedPair,
    AlignedTriple,
    AlignedQuad,
    AlignedPent,
    AlignedHex,
    AlignedSept,
    AlignedOct,
    AlignedNona,
    AlignedDec,
}

impl Strategy {
    /// Set of all available strategies, cheapest first
    pub const ALL: &'static [Strategy] = &[
        Strategy::NakedSingles,
        Strategy::AlignedPair,
        Strategy::AlignedTriple,
        Strategy::AlignedQuad,
        Strategy::AlignedPent,
        Strategy::AlignedHex,
        Strategy::AlignedSept,
        Strategy::AlignedOct,
        Strategy::AlignedNona,
        Strategy::AlignedDec,
    ];

    /// Aligned set exclusion for tuples of `degree` cells.
    /// Returns `None` if the degree is not in `2..=10`.
    pub fn aligned(degree: u8) -> Option<Strategy> {
        if degree < MIN_DEGREE || degree > MAX_DEGREE {
            return None;
        }
        // aligned strategies follow NakedSingles in order of degree
        Some(Strategy::ALL[(degree - MIN_DEGREE + 1) as usize])
    }

    /// The tuple size of an aligned set exclusion, `None` for other strategies.
    pub fn degree(self) -> Option<u8> {
        use self::Strategy::*;
        let degree = match self {
            NakedSingles => return None,
            AlignedPair => 2,
            AlignedTriple => 3,
            AlignedQuad => 4,
            AlignedPent => 5,
            AlignedHex => 6,
            AlignedSept => 7,
            AlignedOct => 8,
            AlignedNona => 9,
            AlignedDec => 10,
        };
        Some(degree)
    }

    pub(crate) fn deduce(
        self,
        state: &mut StrategySolver,
        stop_after_first: bool,
        mut on_deduction: impl FnMut(Deduction),
    ) {
        match self.degree() {
            None => naked_singles::find_naked_singles(state.grid().cells_poss_digits(), stop_after_first, |single| {
                on_deduction(Deduction::NakedSingles(single))
            }),
            Some(degree) => {
                let (grid, engine) = state.grid_and_engine(degree);
                engine.find_hints(grid.cells_poss_digits(), stop_after_first, |hint| {
                    on_deduction(Deduction::AlignedExclusion(hint))
                })
            }
        }
    }

    pub(crate) fn deduce_one(self, state: &mut StrategySolver) -> Option<Deduction> {
        let mut deduction = None;
        self.deduce(state, true, |found| deduction = Some(found));
        deduction
    }

    pub(crate) fn deduce_all(self, state: &mut StrategySolver) -> Vec<Deduction> {
        let mut deductions = vec![];
        self.deduce(state, false, |found| deductions.push(found));
        deductions
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.degree() {
            None => f.write_str("Naked Singles"),
            Some(degree) => f.write_str(aligned_exclusion::degree_name(degree)),
        }
    }
}
