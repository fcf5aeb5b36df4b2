//! Aligned Set Exclusion for tuples of 2 up to 10 cells.
//!
//! A search runs in these steps:
//!
//! 1. collect all cells with at least 2 candidates, together with the peers
//!    that could act as excluders ([`collect`])
//! 2. walk all combinations of `degree` of those cells that still share enough excluders,
//!    intersecting the excluder sets on the way down
//! 3. reduce the common excluders of the tuple to a minimal list ([`reduce`])
//! 4. try all combinations of the tuple's candidates ([`search`])
//! 5. if any candidate never survived, explain which combinations were ruled out ([`explain`])
//!    and report the hint
//!
//! Tuples that were searched in vain are remembered ([`memo`]) so they are skipped
//! as long as they keep the same excluders and no cell involved lost a candidate.

mod collect;
mod explain;
mod memo;
mod reduce;
pub(crate) mod search;
#[cfg(feature = "trace")]
pub mod trace;

pub use self::explain::{Combo, ExcludedCombos};

use self::collect::collect_candidates;
use self::explain::excluded_combos;
use self::memo::NonHinterMemo;
use self::reduce::reduce_common_excluders;
use self::search::{allowed_digits, Tuple};
use crate::bitset::Set;
use crate::board::{Candidate, Cell, Digit};
use crate::errors::InvalidDegree;
use crate::helper::CellArray;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest supported number of cells in an aligned tuple
pub const MIN_DEGREE: u8 = 2;
/// Largest supported number of cells in an aligned tuple
pub const MAX_DEGREE: u8 = 10;

pub(crate) const MAX: usize = MAX_DEGREE as usize;

/// How many excluders a tuple needs before it is searched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Mode {
    /// At least one common excluder. Finds every aligned exclusion.
    Correct,
    /// At least two common excluders, and two excluders per cell.
    /// Much faster for big tuples, but misses exclusions that only rely on one excluder.
    Hacked,
}

impl Mode {
    /// Minimum number of excluders per candidate cell and common to a tuple
    pub fn min_excluders(self) -> u8 {
        match self {
            Mode::Correct => 1,
            Mode::Hacked => 2,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Correct
    }
}

/// Settings of an [`AlignedExclusion`] engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignedExclusionConfig {
    degree: u8,
    mode: Mode,
    min_candidates: usize,
    max_candidates: usize,
    memo: bool,
}

impl AlignedExclusionConfig {
    /// Default configuration for tuples of `degree` cells.
    ///
    /// The memo is enabled from degree 4 on. Below that, searching a tuple is
    /// about as fast as looking it up.
    pub fn new(degree: u8) -> Result<Self, InvalidDegree> {
        if degree < MIN_DEGREE || degree > MAX_DEGREE {
            return Err(InvalidDegree(degree));
        }
        Ok(AlignedExclusionConfig {
            degree,
            mode: Mode::Correct,
            min_candidates: 0,
            max_candidates: usize::MAX,
            memo: degree >= 4,
        })
    }

    /// Sets the mode.
    pub fn with_mode(self, mode: Mode) -> Self {
        AlignedExclusionConfig { mode, ..self }
    }

    /// Skips the search if the number of candidate cells is not within `min..=max`.
    /// Grids that are nearly solved or nearly empty are rarely worth the effort.
    pub fn with_candidate_limits(self, min: usize, max: usize) -> Self {
        AlignedExclusionConfig {
            min_candidates: min,
            max_candidates: max,
            ..self
        }
    }

    /// Enables or disables the non-hinter memo.
    pub fn with_memo(self, memo: bool) -> Self {
        AlignedExclusionConfig { memo, ..self }
    }

    /// Number of cells per tuple
    pub fn degree(&self) -> u8 {
        self.degree
    }

    #[allow(missing_docs)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The range of candidate counts for which the search is run
    pub fn candidate_limits(&self) -> (usize, usize) {
        (self.min_candidates, self.max_candidates)
    }

    #[allow(missing_docs)]
    pub fn memo(&self) -> bool {
        self.memo
    }
}

/// Counters of an engine. They accumulate over all searches until reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Number of calls to [`AlignedExclusion::find_hints`]
    pub searches: u64,
    /// Candidate cells found by the last search
    pub candidates: usize,
    /// Tuples with enough common excluders
    pub tuples: u64,
    /// Tuples whose combinations were actually enumerated
    pub tuples_searched: u64,
    /// Tuples skipped because the memo knew them
    pub memo_hits: u64,
    #[allow(missing_docs)]
    pub hints: u64,
    /// Searches that were cancelled
    pub interrupted: u64,
}

/// An aligned tuple that excludes at least one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignedExclusionHint {
    /// Number of cells in the tuple
    pub degree: u8,
    /// The cells of the tuple, in grid order
    pub cells: Vec<Cell>,
    /// The common excluders that the combinations were checked against
    pub excluders: Vec<Cell>,
    /// Candidates that appear in no possible combination, for each cell that has some
    pub removable: BTreeMap<Cell, Set<Digit>>,
    /// Every impossible combination with the reason it is impossible
    pub excluded_combos: ExcludedCombos,
}

impl AlignedExclusionHint {
    /// The removable candidates, ordered by cell and digit
    pub fn eliminations(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.removable
            .iter()
            .flat_map(|(&cell, &digits)| Candidate::in_cell(cell, digits))
    }

    /// Name of the technique, e.g. `Aligned Triple`
    pub fn name(&self) -> &'static str {
        degree_name(self.degree)
    }
}

pub(crate) fn degree_name(degree: u8) -> &'static str {
    match degree {
        2 => "Aligned Pair",
        3 => "Aligned Triple",
        4 => "Aligned Quad",
        5 => "Aligned Pent",
        6 => "Aligned Hex",
        7 => "Aligned Sept",
        8 => "Aligned Oct",
        9 => "Aligned Nona",
        10 => "Aligned Dec",
        _ => "Aligned Set",
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter, items: impl IntoIterator<Item = T>) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for AlignedExclusionHint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.name())?;
        join(f, &self.cells)?;
        f.write_str(" (excluders ")?;
        join(f, &self.excluders)?;
        f.write_str(") => ")?;
        join(f, self.eliminations())
    }
}

#[derive(Clone, Debug, Default)]
struct Scratch {
    candidates: Vec<Cell>,
    excluders: Vec<Set<Cell>>,
    common: Vec<(Cell, Set<Digit>)>,
}

/// Search engine for aligned tuples of one degree.
///
/// The engine keeps its memo between searches, so it should be used on one puzzle at a time.
/// Call [`clear_memo`](Self::clear_memo) before moving on to a different puzzle.
#[derive(Clone, Debug)]
pub struct AlignedExclusion {
    config: AlignedExclusionConfig,
    memo: NonHinterMemo,
    scratch: Scratch,
    stats: SearchStats,
    interrupt: Option<Arc<AtomicBool>>,
    #[cfg(feature = "trace")]
    trace: trace::Trace,
}

impl AlignedExclusion {
    #[allow(missing_docs)]
    pub fn new(config: AlignedExclusionConfig) -> Self {
        AlignedExclusion {
            config,
            memo: NonHinterMemo::default(),
            scratch: Scratch::default(),
            stats: SearchStats::default(),
            interrupt: None,
            #[cfg(feature = "trace")]
            trace: trace::Trace::default(),
        }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &AlignedExclusionConfig {
        &self.config
    }

    /// Cancels running and future searches as soon as `flag` is set.
    /// The flag is checked once per tuple.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    #[allow(missing_docs)]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[allow(missing_docs)]
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Forgets all tuples known to be without hint.
    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }

    /// Number of tuples in the memo
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Events of all searches so far
    #[cfg(feature = "trace")]
    pub fn trace(&self) -> &trace::Trace {
        &self.trace
    }

    /// Returns the first hint, if there is any.
    pub fn find_hint(&mut self, cells_poss_digits: &CellArray<Set<Digit>>) -> Option<AlignedExclusionHint> {
        let mut hint = None;
        self.find_hints(cells_poss_digits, true, |found| hint = Some(found));
        hint
    }

    /// Returns all hints for the grid. The hints are independent of each other, and
    /// can overlap.
    pub fn find_all_hints(&mut self, cells_poss_digits: &CellArray<Set<Digit>>) -> Vec<AlignedExclusionHint> {
        let mut hints = vec![];
        self.find_hints(cells_poss_digits, false, |found| hints.push(found));
        hints
    }

    /// Searches all aligned tuples of the grid and calls `on_hint` for each one that
    /// excludes a candidate. Tuples are visited in lexicographic order of their cells.
    ///
    /// Solved cells must have no candidates.
    pub fn find_hints(
        &mut self,
        cells_poss_digits: &CellArray<Set<Digit>>,
        stop_after_first: bool,
        mut on_hint: impl FnMut(AlignedExclusionHint),
    ) {
        self.stats.searches += 1;
        let degree = self.config.degree;
        let min_excluders = self.config.mode.min_excluders();

        let mut scratch = std::mem::take(&mut self.scratch);
        let enough = collect_candidates(
            cells_poss_digits,
            degree,
            min_excluders,
            &mut scratch.candidates,
            &mut scratch.excluders,
        );
        let n_candidates = scratch.candidates.len();
        self.stats.candidates = n_candidates;

        #[cfg(feature = "trace")]
        self.trace.events.push(trace::Event::Collected { candidates: n_candidates });

        let (min, max) = self.config.candidate_limits();
        if !enough {
            #[cfg(feature = "trace")]
            self.trace.events.push(trace::Event::TooFewCandidates);
        } else if n_candidates < min || n_candidates > max {
            #[cfg(feature = "trace")]
            self.trace.events.push(trace::Event::OutsideCandidateLimits);
        } else {
            let mut walk = TupleWalk {
                cells_poss_digits,
                candidates: &scratch.candidates,
                excluders: &scratch.excluders,
                common: &mut scratch.common,
                tuple: [Cell::new(0); MAX],
                stop_after_first,
                on_hint: &mut on_hint,
            };
            self.walk_tuples(&mut walk, 0, 0, Set::ALL);
        }
        self.scratch = scratch;
    }

    fn is_interrupted(&self) -> bool {
        match &self.interrupt {
            Some(flag) => flag.load(Ordering::Relaxed),
            None => false,
        }
    }

    // Returns true if the search must stop.
    fn walk_tuples<F: FnMut(AlignedExclusionHint)>(
        &mut self,
        walk: &mut TupleWalk<'_, F>,
        pos: usize,
        start: usize,
        common: Set<Cell>,
    ) -> bool {
        let degree = self.config.degree as usize;
        let min_common = self.config.mode.min_excluders();
        let end = walk.candidates.len() + pos + 1 - degree;

        for idx in start..end {
            let common = common & walk.excluders[idx];
            if common.len() < min_common {
                continue;
            }
            walk.tuple[pos] = walk.candidates[idx];

            let stop = match pos + 1 == degree {
                true => self.visit(walk, common),
                false => self.walk_tuples(walk, pos + 1, idx + 1, common),
            };
            if stop {
                return true;
            }
        }
        false
    }

    // Searches one complete tuple. Returns true if the search must stop.
    fn visit<F: FnMut(AlignedExclusionHint)>(&mut self, walk: &mut TupleWalk<'_, F>, common: Set<Cell>) -> bool {
        if self.is_interrupted() {
            self.stats.interrupted += 1;
            #[cfg(feature = "trace")]
            self.trace.events.push(trace::Event::Interrupted);
            return true;
        }
        self.stats.tuples += 1;

        let degree = self.config.degree as usize;
        let cells_poss_digits = walk.cells_poss_digits;
        let cells = &walk.tuple[..degree];
        let mut maybes = [Set::NONE; MAX];
        for (maybes, &cell) in maybes.iter_mut().zip(cells) {
            *maybes = cells_poss_digits[cell];
        }
        let maybes = &maybes[..degree];

        let memo_entry = match self.config.memo {
            true => {
                let fingerprint = NonHinterMemo::fingerprint(cells);
                let excluder_maybes = common.into_iter().map(|cell| cells_poss_digits[cell]);
                let checksum = NonHinterMemo::checksum(maybes.iter().cloned().chain(excluder_maybes));
                if self.memo.skip(fingerprint, common, checksum) {
                    self.stats.memo_hits += 1;
                    return false;
                }
                Some((fingerprint, checksum))
            }
            false => None,
        };

        let tuple = Tuple::from_cells(cells, maybes);
        walk.common.clear();
        walk.common
            .extend(common.into_iter().map(|cell| (cell, cells_poss_digits[cell])));
        reduce_common_excluders(tuple.union(), walk.common);
        if walk.common.len() < self.config.mode.min_excluders() as usize {
            return false;
        }

        self.stats.tuples_searched += 1;
        let allowed = allowed_digits(&tuple, walk.common);
        let removable: BTreeMap<Cell, Set<Digit>> = cells
            .iter()
            .zip(maybes)
            .zip(allowed.iter())
            .map(|((&cell, &maybes), &allowed)| {
                debug_assert!(allowed.is_subset_of(maybes));
                (cell, maybes.without(allowed))
            })
            .filter(|(_, removable)| !removable.is_empty())
            .collect();

        if removable.is_empty() {
            if let Some((fingerprint, checksum)) = memo_entry {
                self.memo.put(fingerprint, common, checksum);
            }
            return false;
        }

        let hint = AlignedExclusionHint {
            degree: self.config.degree,
            cells: cells.to_vec(),
            excluders: walk.common.iter().map(|&(cell, _)| cell).collect(),
            removable,
            excluded_combos: excluded_combos(&tuple, walk.common),
        };
        self.stats.hints += 1;

        #[cfg(feature = "trace")]
        self.trace.events.push(trace::Event::Hint {
            cells: hint.cells.clone(),
            eliminations: hint.eliminations().collect(),
        });

        (walk.on_hint)(hint);
        walk.stop_after_first
    }
}

struct TupleWalk<'a, F> {
    cells_poss_digits: &'a CellArray<Set<Digit>>,
    candidates: &'a [Cell],
    excluders: &'a [Set<Cell>],
    common: &'a mut Vec<(Cell, Set<Digit>)>,
    tuple: [Cell; MAX],
    stop_after_first: bool,
    on_hint: &'a mut F,
}
