//! Which combinations were ruled out, and by what.
//!
//! Only run once a tuple is known to eliminate something, to back the hint
//! with the list of impossible combinations.

use super::search::Tuple;
use super::MAX;
use crate::bitset::Set;
use crate::board::{Cell, Digit};
use std::collections::BTreeMap;
use std::fmt;

/// One digit per position of an aligned tuple.
///
/// Combinations ruled out because two cells that see each other would hold the same digit
/// end at the second of those cells: all later positions are `None`, because the
/// combination is impossible regardless of them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combo(Vec<Option<Digit>>);

impl Combo {
    /// Creates a combination from the digit of each position.
    pub fn new(digits: Vec<Option<Digit>>) -> Combo {
        Combo(digits)
    }

    /// The digit of each position, `None` for positions that were never reached.
    pub fn digits(&self) -> &[Option<Digit>] {
        &self.0
    }

    /// All digits used by this combination.
    pub fn digit_set(&self) -> Set<Digit> {
        self.0.iter().flatten().cloned().collect()
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in &self.0 {
            match digit {
                Some(digit) => write!(f, "{}", digit)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// The impossible combinations of an aligned tuple.
///
/// Maps each combination to the common excluder that rules it out, or to `None` if it
/// puts the same digit into two cells that see each other.
/// Possible combinations are not contained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExcludedCombos(BTreeMap<Combo, Option<Cell>>);

impl ExcludedCombos {
    /// Number of excluded combinations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no combination was excluded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `Some(excluder)` if the combination is excluded, `None` if it isn't.
    /// The excluder itself is `None` for combinations excluded by the same house rule.
    pub fn get(&self, combo: &Combo) -> Option<Option<Cell>> {
        self.0.get(combo).cloned()
    }

    /// Iterates over all excluded combinations in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&Combo, Option<Cell>)> + '_ {
        self.0.iter().map(|(combo, &excluder)| (combo, excluder))
    }
}

/// Walks all combinations of the tuple and records why each impossible one is impossible.
/// `excluders` must be the reduced list the search ran with, the first one that is
/// covered is the one recorded.
pub(crate) fn excluded_combos(tuple: &Tuple, excluders: &[(Cell, Set<Digit>)]) -> ExcludedCombos {
    let mut explain = Explain {
        tuple,
        excluders,
        chosen: [None; MAX],
        combos: BTreeMap::new(),
    };
    if tuple.len() > 0 {
        explain.walk(0, Set::NONE);
    }
    ExcludedCombos(explain.combos)
}

struct Explain<'a> {
    tuple: &'a Tuple,
    excluders: &'a [(Cell, Set<Digit>)],
    chosen: [Option<Digit>; MAX],
    combos: BTreeMap<Combo, Option<Cell>>,
}

impl Explain<'_> {
    fn combo(&self) -> Combo {
        Combo(self.chosen[..self.tuple.len()].to_vec())
    }

    fn collides(&self, pos: usize, digit: Digit) -> bool {
        let seen_by = self.tuple.seen_by(pos);
        (0..pos).any(|j| seen_by & 1 << j != 0 && self.chosen[j] == Some(digit))
    }

    fn walk(&mut self, pos: usize, union: Set<Digit>) {
        let is_last = pos + 1 == self.tuple.len();
        for digit in self.tuple.maybes()[pos] {
            self.chosen[pos] = Some(digit);
            if self.collides(pos, digit) {
                for later in &mut self.chosen[pos + 1..] {
                    *later = None;
                }
                let combo = self.combo();
                self.combos.insert(combo, None);
                continue;
            }

            let new_union = union | digit;
            if !is_last {
                self.walk(pos + 1, new_union);
                continue;
            }

            let excluder = self.excluders
                .iter()
                .find(|&&(_, maybes)| maybes.is_subset_of(new_union))
                .map(|&(cell, _)| cell);
            if let Some(cell) = excluder {
                let combo = self.combo();
                self.combos.insert(combo, Some(cell));
            }
        }
    }
}
