use crate::bitset::Set;
use crate::board::{Cell, Digit};

/// Reduces the common excluders of a tuple to those that can actually exclude something.
///
/// An excluder with a candidate outside of `tuple_union` can't be covered by any
/// combination of the tuple, so it is dropped. Of the rest, an excluder whose candidates
/// are a superset of another's is redundant, because every combination covering it
/// also covers the smaller one. Of excluders with equal candidates, the first is kept.
///
/// Afterwards, no remaining excluder is a subset of another one.
pub(crate) fn reduce_common_excluders(tuple_union: Set<Digit>, excluders: &mut Vec<(Cell, Set<Digit>)>) {
    excluders.retain(|&(_, maybes)| maybes.is_subset_of(tuple_union));

    // at most 20 peers per tuple cell
    debug_assert!(excluders.len() <= 64);
    let mut dominated = 0u64;
    for (i, &(_, e_i)) in excluders.iter().enumerate() {
        let is_dominated = excluders.iter().enumerate().any(|(j, &(_, e_j))| {
            j != i && e_j.is_subset_of(e_i) && (e_j != e_i || j < i)
        });
        if is_dominated {
            dominated |= 1 << i;
        }
    }

    let mut i = 0;
    excluders.retain(|_| {
        let keep = dominated & 1 << i == 0;
        i += 1;
        keep
    });
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::strategy::strategies::aligned_exclusion::search::test::digits;

    fn excluders(sets: &[&[u8]]) -> Vec<(Cell, Set<Digit>)> {
        sets.iter()
            .enumerate()
            .map(|(i, ds)| (Cell::new(i as u8), digits(ds)))
            .collect()
    }

    fn cells(excluders: &[(Cell, Set<Digit>)]) -> Vec<u8> {
        excluders.iter().map(|(cell, _)| cell.get()).collect()
    }

    #[test]
    fn drops_excluders_outside_union() {
        let mut ex = excluders(&[&[1, 2], &[3, 4], &[1, 5]]);
        reduce_common_excluders(digits(&[1, 2, 3, 4]), &mut ex);
        assert_eq!(cells(&ex), vec![0, 1]);
    }

    #[test]
    fn keeps_antichain() {
        let mut ex = excluders(&[&[1, 2, 3], &[1, 2], &[2, 3], &[1, 2], &[4, 5], &[1, 2, 4]]);
        reduce_common_excluders(Set::ALL, &mut ex);
        assert_eq!(cells(&ex), vec![1, 2, 4]);

        for (i, &(_, a)) in ex.iter().enumerate() {
            for (j, &(_, b)) in ex.iter().enumerate() {
                assert!(i == j || !a.is_subset_of(b));
            }
        }
    }

    #[test]
    fn all_peers_as_excluders() {
        // as many common excluders as a cell has peers, only the last one is minimal
        let (triple, pair): (&[u8], &[u8]) = (&[1, 2, 3], &[1, 2]);
        let mut sets = vec![triple; 19];
        sets.push(pair);
        let mut ex = excluders(&sets);
        reduce_common_excluders(Set::ALL, &mut ex);
        assert_eq!(cells(&ex), vec![19]);

        let mut ex = excluders(&[pair; 20]);
        reduce_common_excluders(Set::ALL, &mut ex);
        assert_eq!(cells(&ex), vec![0]);
    }

    #[test]
    fn idempotent() {
        let mut ex = excluders(&[&[1, 2, 3], &[3, 4], &[1, 2], &[2, 3, 4], &[1, 2]]);
        reduce_common_excluders(digits(&[1, 2, 3, 4]), &mut ex);
        let once = ex.clone();
        reduce_common_excluders(digits(&[1, 2, 3, 4]), &mut ex);
        assert_eq!(ex, once);
        assert_eq!(cells(&ex), vec![1, 2]);
    }
}
