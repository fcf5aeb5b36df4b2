use super::prelude::*;

/// Calls `on_single` for every unsolved cell that is left with exactly one candidate.
pub(crate) fn find_naked_singles(
    cells_poss_digits: &CellArray<Set<Digit>>,
    stop_after_first: bool,
    mut on_single: impl FnMut(Candidate),
) {
    for (cell, poss_digits) in cells_poss_digits.iter_cells() {
        // solved cells have no candidates, skip them via unwrap_or(None)
        if let Some(digit) = poss_digits.unique().unwrap_or(None) {
            on_single(Candidate { cell, digit });
            if stop_after_first {
                return;
            }
        }
    }
}
