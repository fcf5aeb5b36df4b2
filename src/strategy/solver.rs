use super::{Deduction, Deductions, Strategy};
use crate::board::Grid;
use crate::errors::Unsolvable;
use crate::strategy::strategies::aligned_exclusion::{
    AlignedExclusion, AlignedExclusionConfig, Mode, SearchStats, MAX_DEGREE, MIN_DEGREE,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings shared by the aligned set exclusion engines of a [`StrategySolver`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    #[allow(missing_docs)]
    pub mode: Mode,
    /// Enables or disables the memo for all degrees.
    /// `None` keeps the default of each degree.
    pub memo: Option<bool>,
}

impl SolverConfig {
    fn engine_config(&self, degree: u8) -> AlignedExclusionConfig {
        // every degree the solver asks for comes from a `Strategy`
        let config = match AlignedExclusionConfig::new(degree) {
            Ok(config) => config.with_mode(self.mode),
            Err(_) => unreachable!("strategy with invalid degree {}", degree),
        };
        match self.memo {
            Some(memo) => config.with_memo(memo),
            None => config,
        }
    }
}

/// The `StrategySolver` is the struct that allows applying aligned set exclusion
/// to a sudoku.
///
/// It is built from a single `Grid` and keeps one search engine per degree.
/// It can find hints or solve the grid completely and return the sequence
/// of logical steps taken.
///
/// The engines remember fruitless tuples between searches. They are reset
/// when a different grid is [loaded](Self::load).
#[derive(Clone, Debug)]
pub struct StrategySolver {
    grid: Grid,
    config: SolverConfig,
    // lazily created, indexed by `degree - MIN_DEGREE`
    engines: Vec<Option<AlignedExclusion>>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl StrategySolver {
    /// Constructs a new solver from a grid with the default configuration.
    pub fn from_grid(grid: Grid) -> StrategySolver {
        StrategySolver::with_config(grid, SolverConfig::default())
    }

    #[allow(missing_docs)]
    pub fn with_config(grid: Grid, config: SolverConfig) -> StrategySolver {
        StrategySolver {
            grid,
            config,
            engines: (MIN_DEGREE..=MAX_DEGREE).map(|_| None).collect(),
            interrupt: None,
        }
    }

    /// Cancels running and future aligned set exclusion searches as soon as `flag` is set.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> StrategySolver {
        self.engines = self
            .engines
            .into_iter()
            .map(|engine| engine.map(|engine| engine.with_interrupt(flag.clone())))
            .collect();
        self.interrupt = Some(flag);
        self
    }

    /// Returns the current state of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replaces the grid and forgets everything the engines learned about the old one.
    pub fn load(&mut self, grid: Grid) {
        self.grid = grid;
        for engine in self.engines.iter_mut().flatten() {
            engine.clear_memo();
        }
    }

    /// Counters of the engine of `degree`, if it was used already.
    pub fn stats(&self, degree: u8) -> Option<&SearchStats> {
        let idx = degree.checked_sub(MIN_DEGREE)? as usize;
        self.engines.get(idx)?.as_ref().map(AlignedExclusion::stats)
    }

    pub(crate) fn grid_and_engine(&mut self, degree: u8) -> (&Grid, &mut AlignedExclusion) {
        let idx = (degree - MIN_DEGREE) as usize;
        let config = self.config.engine_config(degree);
        let interrupt = &self.interrupt;
        let engine = self.engines[idx].get_or_insert_with(|| {
            let engine = AlignedExclusion::new(config);
            match interrupt {
                Some(flag) => engine.with_interrupt(flag.clone()),
                None => engine,
            }
        });
        (&self.grid, engine)
    }

    /// Returns the first deduction `strategy` can make, without applying it.
    pub fn find_hint(&mut self, strategy: Strategy) -> Option<Deduction> {
        strategy.deduce_one(self)
    }

    /// Returns all deductions `strategy` can make on the current grid, without applying them.
    pub fn find_hints(&mut self, strategy: Strategy) -> Vec<Deduction> {
        strategy.deduce_all(self)
    }

    /// Applies a deduction to the grid.
    ///
    /// Returns an error if the deduction leaves a cell without candidates,
    /// in which case the grid may be partially updated.
    pub fn apply(&mut self, deduction: &Deduction) -> Result<(), Unsolvable> {
        match deduction {
            Deduction::NakedSingles(candidate) => self.grid.place(*candidate),
            Deduction::AlignedExclusion(hint) => {
                for candidate in hint.eliminations() {
                    self.grid.eliminate(candidate)?;
                }
                Ok(())
            }
        }
    }

    /// Try to solve the sudoku using the given `strategies`. Returns a `Result` of the grid and a struct containing the series of deductions.
    /// If a solution was found, `Ok(..)` is returned, otherwise `Err(..)`.
    ///
    /// Strategies are tried in the given order. After every successful deduction,
    /// the search starts over with the first one.
    pub fn solve(mut self, strategies: &[Strategy]) -> Result<(Grid, Deductions), (Grid, Deductions)> {
        let mut deductions = Deductions::default();
        'outer: while !self.grid.is_solved() {
            for &strategy in strategies {
                if let Some(deduction) = self.find_hint(strategy) {
                    if self.apply(&deduction).is_err() {
                        deductions.deductions.push(deduction);
                        break 'outer;
                    }
                    deductions.deductions.push(deduction);
                    continue 'outer;
                }
            }
            break;
        }

        match self.grid.is_solved() {
            true => Ok((self.grid, deductions)),
            false => Err((self.grid, deductions)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Candidate, Cell, Digit};
    use crate::helper::CellArray;
    use crate::strategy::strategies::aligned_exclusion::search::test::digits;
    use crate::bitset::Set;
    use std::sync::atomic::Ordering;

    // sudoku taken from http://www.sudokuwiki.org/Y_Wing_Strategy, Example 1 (2019-03-18)
    const XY_WING: &str = "9..24.....5.69.231.2..5..9..9.7..32...29356.7.7...29...69.2..7351..79.622.7.86..9";

    fn pencilmarks() -> Grid {
        let mut cells = CellArray::splat(Set::NONE);
        cells[Cell::new(0)] = digits(&[1, 2]);
        cells[Cell::new(12)] = digits(&[1, 2, 3]);
        cells[Cell::new(3)] = digits(&[1, 3]);
        cells[Cell::new(9)] = digits(&[2, 3]);
        Grid::from_candidates(cells)
    }

    #[test]
    fn find_and_apply() {
        let mut solver = StrategySolver::from_grid(pencilmarks());
        assert_eq!(solver.find_hint(Strategy::NakedSingles), None);

        let deduction = solver.find_hint(Strategy::AlignedPair).unwrap();
        assert_eq!(deduction.strategy(), Strategy::AlignedPair);
        assert_eq!(deduction.eliminations(), vec![Candidate::new(12, 3)]);
        assert_eq!(solver.find_hints(Strategy::AlignedPair), vec![deduction.clone()]);

        solver.apply(&deduction).unwrap();
        assert_eq!(solver.grid().candidates(Cell::new(12)), digits(&[1, 2]));
        assert_eq!(solver.find_hint(Strategy::AlignedPair), None);
        assert_eq!(solver.stats(2).map(|stats| stats.searches), Some(3));
        assert_eq!(solver.stats(3), None);
    }

    #[test]
    fn apply_to_contradiction() {
        let mut solver = StrategySolver::from_grid(pencilmarks());
        let deduction = solver.find_hint(Strategy::AlignedPair).unwrap();

        let mut cells = *pencilmarks().cells_poss_digits();
        cells[Cell::new(12)] = digits(&[3]);
        solver.load(Grid::from_candidates(cells));
        assert_eq!(solver.apply(&deduction), Err(Unsolvable));
    }

    #[test]
    fn solve_with_singles_and_pairs() {
        let grid = Grid::from_str_line(XY_WING).unwrap();
        let strategies = [Strategy::NakedSingles, Strategy::AlignedPair, Strategy::AlignedTriple];
        let (solved, deductions) = StrategySolver::from_grid(grid.clone())
            .solve(&strategies)
            .unwrap_or_else(|(grid, _)| panic!("not solved: {}", grid));
        assert!(solved.is_solved());
        assert!(deductions.iter().any(|d| d.strategy() != Strategy::NakedSingles));

        // givens stay in place
        for cell in Cell::all() {
            if let Some(digit) = grid.digit(cell) {
                assert_eq!(solved.digit(cell), Some(digit));
            }
        }
    }

    #[test]
    fn without_strategies_nothing_happens() {
        let grid = Grid::from_str_line(XY_WING).unwrap();
        let (unsolved, deductions) = StrategySolver::from_grid(grid.clone()).solve(&[]).unwrap_err();
        assert_eq!(unsolved, grid);
        assert!(deductions.is_empty());
    }

    #[test]
    fn load_clears_memo() {
        let config = SolverConfig { memo: Some(true), ..SolverConfig::default() };
        let mut solver = StrategySolver::with_config(pencilmarks(), config);
        let mut cells = *pencilmarks().cells_poss_digits();
        cells[Cell::new(12)] = digits(&[1, 2]);
        cells[Cell::new(3)] = digits(&[1, 2]);
        solver.load(Grid::from_candidates(cells));

        assert_eq!(solver.find_hint(Strategy::AlignedPair), None);
        assert_eq!(solver.find_hint(Strategy::AlignedPair), None);
        assert_eq!(solver.stats(2).map(|stats| stats.memo_hits), Some(2));

        solver.load(Grid::from_candidates(cells));
        assert_eq!(solver.find_hint(Strategy::AlignedPair), None);
        assert_eq!(solver.stats(2).map(|stats| stats.memo_hits), Some(2));
    }

    #[test]
    fn interrupted() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut solver = StrategySolver::from_grid(pencilmarks()).with_interrupt(flag.clone());
        flag.store(true, Ordering::Relaxed);
        assert_eq!(solver.find_hint(Strategy::AlignedPair), None);
        assert_eq!(solver.stats(2).map(|stats| stats.interrupted), Some(1));

        // naked singles ignore the flag
        let mut cells = *pencilmarks().cells_poss_digits();
        cells[Cell::new(80)] = Digit::new(7).as_set();
        solver.load(Grid::from_candidates(cells));
        assert_eq!(
            solver.find_hint(Strategy::NakedSingles),
            Some(Deduction::NakedSingles(Candidate::new(80, 7)))
        );
    }
}
