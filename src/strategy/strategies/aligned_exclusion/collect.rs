use crate::bitset::Set;
use crate::board::{Cell, Digit};
use crate::helper::CellArray;

/// Finds the cells that can be part of an aligned tuple of `degree` cells, and their excluders.
///
/// Candidates are unsolved cells with at least 2 candidates, in grid order. Excluders of a
/// candidate are the cells it sees that have between 2 and `degree` candidates; cells with
/// more can never have all their candidates used up by `degree` cells. Candidates with
/// fewer than `min_excluders` excluders are left out.
///
/// `candidates` and `excluders` are cleared first and filled in parallel.
/// Returns `false` if fewer than `degree` candidates were found.
pub(crate) fn collect_candidates(
    cells_poss_digits: &CellArray<Set<Digit>>,
    degree: u8,
    min_excluders: u8,
    candidates: &mut Vec<Cell>,
    excluders: &mut Vec<Set<Cell>>,
) -> bool {
    candidates.clear();
    excluders.clear();

    let mut excluder_pool = Set::NONE;
    for (cell, poss_digits) in cells_poss_digits.iter_cells() {
        let n_poss = poss_digits.len();
        if 2 <= n_poss && n_poss <= degree {
            excluder_pool |= cell;
        }
    }

    for (cell, poss_digits) in cells_poss_digits.iter_cells() {
        if poss_digits.len() < 2 {
            continue;
        }
        let cell_excluders = cell.neighbors() & excluder_pool;
        if cell_excluders.len() < min_excluders {
            continue;
        }
        candidates.push(cell);
        excluders.push(cell_excluders);
    }

    candidates.len() >= degree as usize
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::strategy::strategies::aligned_exclusion::search::test::digits;

    // r1c1 {1,2}, r2c4 {1,2,3}, r1c4 {1,3}, r2c1 {2,3}, everything else solved
    pub(crate) fn sparse_grid() -> CellArray<Set<Digit>> {
        let mut cells = CellArray::splat(Set::NONE);
        cells[Cell::new(0)] = digits(&[1, 2]);
        cells[Cell::new(12)] = digits(&[1, 2, 3]);
        cells[Cell::new(3)] = digits(&[1, 3]);
        cells[Cell::new(9)] = digits(&[2, 3]);
        cells
    }

    fn cells(cs: &[u8]) -> Vec<Cell> {
        cs.iter().map(|&c| Cell::new(c)).collect()
    }

    #[test]
    fn candidates_and_excluders() {
        let (mut candidates, mut excluders) = (vec![], vec![]);
        assert!(collect_candidates(&sparse_grid(), 2, 1, &mut candidates, &mut excluders));
        assert_eq!(candidates, cells(&[0, 3, 9, 12]));

        let excluders: Vec<Vec<Cell>> = excluders.iter().map(|set| set.into_iter().collect()).collect();
        // r2c4 has 3 candidates, too many to be excluded by a pair
        assert_eq!(excluders, vec![cells(&[3, 9]), cells(&[0]), cells(&[0]), cells(&[3, 9])]);
    }

    #[test]
    fn bigger_degree_admits_bigger_excluders() {
        let (mut candidates, mut excluders) = (vec![], vec![]);
        assert!(collect_candidates(&sparse_grid(), 3, 1, &mut candidates, &mut excluders));
        let expected: Set<Cell> = cells(&[0, 12]).into_iter().collect();
        assert_eq!(excluders[1], expected);
    }

    #[test]
    fn min_excluders_drops_candidates() {
        let (mut candidates, mut excluders) = (vec![Cell::new(80)], vec![Set::ALL]);
        assert!(collect_candidates(&sparse_grid(), 2, 2, &mut candidates, &mut excluders));
        assert_eq!(candidates, cells(&[0, 12]));
        assert_eq!(excluders.len(), 2);

        assert!(!collect_candidates(&sparse_grid(), 3, 3, &mut candidates, &mut excluders));
        assert!(candidates.is_empty());
    }
}
