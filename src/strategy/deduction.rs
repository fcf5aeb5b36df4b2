//! The results of strategies.

use super::Strategy;
use crate::board::Candidate;
use crate::AlignedExclusionHint;
use std::fmt;

/// Result of a single strategy
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deduction {
    /// A cell with only one candidate left
    NakedSingles(Candidate),
    /// Candidates removed by aligned set exclusion
    AlignedExclusion(AlignedExclusionHint),
}

impl Deduction {
    /// Returns the strategy that was used for this deduction.
    pub fn strategy(&self) -> Strategy {
        match self {
            Deduction::NakedSingles(_) => Strategy::NakedSingles,
            Deduction::AlignedExclusion(hint) => {
                debug_assert!(Strategy::aligned(hint.degree).is_some());
                Strategy::aligned(hint.degree).unwrap_or(Strategy::AlignedPair)
            }
        }
    }

    /// Candidates that are removed by this deduction. Empty for placed digits.
    pub fn eliminations(&self) -> Vec<Candidate> {
        match self {
            Deduction::NakedSingles(_) => vec![],
            Deduction::AlignedExclusion(hint) => hint.eliminations().collect(),
        }
    }
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Deduction::NakedSingles(candidate) => write!(f, "Naked Single: {}", candidate),
            Deduction::AlignedExclusion(hint) => fmt::Display::fmt(hint, f),
        }
    }
}

/// Contains the sequence of deductions made to solve / partially solve the sudoku
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deductions {
    pub(crate) deductions: Vec<Deduction>,
}

impl Deductions {
    /// Returns the number of deductions.
    pub fn len(&self) -> usize {
        self.deductions.len()
    }

    /// Returns true if no deductions were made.
    pub fn is_empty(&self) -> bool {
        self.deductions.is_empty()
    }

    /// Return the `index`th Deduction, if it exists.
    pub fn get(&self, index: usize) -> Option<&Deduction> {
        self.deductions.get(index)
    }

    /// Return an iterator over the deductions.
    pub fn iter(&self) -> std::slice::Iter<'_, Deduction> {
        self.deductions.iter()
    }
}

impl<'a> IntoIterator for &'a Deductions {
    type Item = &'a Deduction;
    type IntoIter = std::slice::Iter<'a, Deduction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
