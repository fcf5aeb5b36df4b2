//! The combination search at the heart of aligned set exclusion.
//!
//! For a tuple of cells, every assignment of one candidate to each cell is tried.
//! An assignment is impossible if
//!
//! 1. two cells that see each other get the same digit, or
//! 2. the digits used so far contain all candidates of a common excluder.
//!
//! Rule 1 is applied up front: a digit chosen for a position is removed from the
//! candidates of every later position that sees it. Rule 2 is checked on every
//! partial assignment, so whole subtrees are cut as soon as an excluder is covered.
//!
//! The digits of all surviving assignments are accumulated per position. Whatever
//! a cell has as candidate but never got accumulated can be eliminated.

use super::MAX;
use crate::bitset::Set;
use crate::board::{Cell, Digit};

/// The cells of one aligned tuple, reduced to what the search needs:
/// their candidates and which of them see each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tuple {
    len: usize,
    maybes: [Set<Digit>; MAX],
    // bit `j` of `seen_by[k]` is set if position `j < k` sees position `k`
    seen_by: [u16; MAX],
}

impl Tuple {
    pub(crate) fn new(maybes: &[Set<Digit>], mut sees: impl FnMut(usize, usize) -> bool) -> Tuple {
        debug_assert!(maybes.len() <= MAX);
        let mut tuple = Tuple {
            len: maybes.len(),
            maybes: [Set::NONE; MAX],
            seen_by: [0; MAX],
        };
        tuple.maybes[..maybes.len()].copy_from_slice(maybes);
        for k in 1..maybes.len() {
            for j in 0..k {
                if sees(j, k) {
                    tuple.seen_by[k] |= 1 << j;
                }
            }
        }
        tuple
    }

    pub(crate) fn from_cells(cells: &[Cell], maybes: &[Set<Digit>]) -> Tuple {
        debug_assert_eq!(cells.len(), maybes.len());
        Tuple::new(maybes, |j, k| cells[j].sees(cells[k]))
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn maybes(&self) -> &[Set<Digit>] {
        &self.maybes[..self.len]
    }

    /// Whether the cells at positions `j` and `k` see each other
    pub(crate) fn sees(&self, j: usize, k: usize) -> bool {
        let (j, k) = if j < k { (j, k) } else { (k, j) };
        self.seen_by[k] & 1 << j != 0
    }

    pub(crate) fn seen_by(&self, k: usize) -> u16 {
        self.seen_by[k]
    }

    pub(crate) fn union(&self) -> Set<Digit> {
        self.maybes().iter().fold(Set::NONE, |acc, &maybes| acc | maybes)
    }
}

/// Checks if any excluder has all of its candidates in `digits`.
#[inline(always)]
pub(crate) fn covers_any(excluders: &[(Cell, Set<Digit>)], digits: Set<Digit>) -> bool {
    excluders.iter().any(|&(_, maybes)| maybes.is_subset_of(digits))
}

/// Returns, for every position of the tuple, the digits that occur in at least
/// one possible assignment. Positions past `tuple.len()` are empty.
pub(crate) fn allowed_digits(tuple: &Tuple, excluders: &[(Cell, Set<Digit>)]) -> [Set<Digit>; MAX] {
    let mut search = Search {
        tuple,
        excluders,
        chosen: [Set::NONE; MAX],
        allowed: [Set::NONE; MAX],
    };
    if tuple.len > 0 {
        search.walk(0, Set::NONE);
    }
    search.allowed
}

struct Search<'a> {
    tuple: &'a Tuple,
    excluders: &'a [(Cell, Set<Digit>)],
    // single digit chosen for each position of the current prefix
    chosen: [Set<Digit>; MAX],
    allowed: [Set<Digit>; MAX],
}

impl Search<'_> {
    fn all_allowed_from(&self, pos: usize) -> bool {
        (pos..self.tuple.len).all(|i| self.allowed[i] == self.tuple.maybes[i])
    }

    // Returns true if at least one complete assignment extends the current prefix.
    //
    // Once a completion is found and every position from `pos` on has all of its
    // candidates allowed, other completions of the prefix can't add anything new.
    // The prefix digits themselves were already added by the one that was found.
    fn walk(&mut self, pos: usize, union: Set<Digit>) -> bool {
        let tuple = self.tuple;
        let mut available = tuple.maybes[pos];
        let mut seen_by = tuple.seen_by[pos];
        while seen_by != 0 {
            let j = seen_by.trailing_zeros() as usize;
            seen_by &= seen_by - 1;
            available.remove(self.chosen[j]);
        }

        let is_last = pos + 1 == tuple.len;
        let mut found = false;
        for digit in available {
            let digit_set = digit.as_set();
            let new_union = union | digit_set;
            if covers_any(self.excluders, new_union) {
                continue;
            }
            self.chosen[pos] = digit_set;

            let survived = if is_last {
                for i in 0..tuple.len {
                    self.allowed[i] |= self.chosen[i];
                }
                true
            } else {
                self.walk(pos + 1, new_union)
            };

            if survived {
                found = true;
                if self.all_allowed_from(pos) {
                    return true;
                }
            }
        }
        found
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    pub(crate) fn digits(ds: &[u8]) -> Set<Digit> {
        ds.iter().map(|&d| Digit::new(d)).collect()
    }

    fn excluders(sets: &[&[u8]]) -> Vec<(Cell, Set<Digit>)> {
        sets.iter()
            .enumerate()
            .map(|(i, ds)| (Cell::new(60 + i as u8), digits(ds)))
            .collect()
    }

    fn no_one_sees(_: usize, _: usize) -> bool {
        false
    }

    // Tries every assignment without any pruning.
    pub(crate) fn brute_force(tuple: &Tuple, excluders: &[(Cell, Set<Digit>)]) -> [Set<Digit>; MAX] {
        let mut allowed = [Set::NONE; MAX];
        let options: Vec<Vec<Digit>> = tuple.maybes().iter().map(|m| m.into_iter().collect()).collect();
        let mut indices = vec![0; tuple.len()];
        loop {
            let combo: Vec<Digit> = indices.iter().zip(&options).map(|(&i, opts)| opts[i]).collect();
            let collision = (0..combo.len())
                .any(|k| (0..k).any(|j| combo[j] == combo[k] && tuple.sees(j, k)));
            let union: Set<Digit> = combo.iter().cloned().collect();
            if !collision && !covers_any(excluders, union) {
                for (slot, digit) in allowed.iter_mut().zip(&combo) {
                    *slot |= *digit;
                }
            }

            // odometer increment
            let mut pos = tuple.len();
            loop {
                if pos == 0 {
                    return allowed;
                }
                pos -= 1;
                indices[pos] += 1;
                if indices[pos] < options[pos].len() {
                    break;
                }
                indices[pos] = 0;
            }
        }
    }

    #[test]
    fn excluder_prunes_without_hint() {
        // A {1,2}, B {1,2} not seeing each other, excluders {1,2} and {1,3}:
        // (1,2) and (2,1) are impossible, (1,1) and (2,2) still allow every digit
        let tuple = Tuple::new(&[digits(&[1, 2]), digits(&[1, 2])], no_one_sees);
        let allowed = allowed_digits(&tuple, &excluders(&[&[1, 2], &[1, 3]]));
        assert_eq!(allowed[0], digits(&[1, 2]));
        assert_eq!(allowed[1], digits(&[1, 2]));
    }

    #[test]
    fn surviving_combo_keeps_digit() {
        // (1,3) is covered by {1,3}, but (2,3) survives and keeps 3 in B
        let tuple = Tuple::new(&[digits(&[1, 2]), digits(&[1, 2, 3])], no_one_sees);
        let allowed = allowed_digits(&tuple, &excluders(&[&[1, 2], &[1, 3]]));
        assert_eq!(allowed[0], digits(&[1, 2]));
        assert_eq!(allowed[1], digits(&[1, 2, 3]));
    }

    #[test]
    fn excluders_remove_digit() {
        // B = 3 would leave {1,3} and {2,3} to 1 and 2, both needed by A
        let tuple = Tuple::new(&[digits(&[1, 2]), digits(&[1, 2, 3])], no_one_sees);
        let allowed = allowed_digits(&tuple, &excluders(&[&[1, 3], &[2, 3]]));
        assert_eq!(allowed[0], digits(&[1, 2]));
        assert_eq!(allowed[1], digits(&[1, 2]));
    }

    #[test]
    fn same_house_rule() {
        // A and B see each other, so (1,1) and (2,2) are impossible
        let tuple = Tuple::new(&[digits(&[1, 2]), digits(&[1, 2, 3])], |_, _| true);
        let allowed = allowed_digits(&tuple, &excluders(&[&[1, 3], &[2, 3]]));
        assert_eq!(allowed[0], digits(&[1, 2]));
        assert_eq!(allowed[1], digits(&[1, 2]));

        // without excluders, the same house rule alone never removes anything here
        let allowed = allowed_digits(&tuple, &[]);
        assert_eq!(allowed[1], digits(&[1, 2, 3]));
    }

    #[test]
    fn nothing_survives() {
        // naked pair {1,2} with a third cell {1,2} seeing both
        let tuple = Tuple::new(&[digits(&[1, 2]), digits(&[1, 2])], |_, _| true);
        let allowed = allowed_digits(&tuple, &excluders(&[&[1, 2]]));
        assert!(allowed.iter().all(|allowed| allowed.is_empty()));
    }

    #[test]
    fn tuple_sees() {
        let tuple = Tuple::new(&[digits(&[1, 2]); 4], |j, k| (j, k) == (0, 3) || (j, k) == (1, 2));
        assert!(tuple.sees(0, 3));
        assert!(tuple.sees(3, 0));
        assert!(tuple.sees(2, 1));
        assert!(!tuple.sees(0, 1));
        assert_eq!(tuple.seen_by(3), 0b1);
        assert_eq!(tuple.union(), digits(&[1, 2]));
    }

    fn random_set(rng: &mut StdRng, max_digit: u8, min_len: u8, max_len: u8) -> Set<Digit> {
        let len = rng.gen_range(min_len..=max_len);
        let mut set = Set::NONE;
        while set.len() < len {
            set |= Digit::new(rng.gen_range(1..=max_digit));
        }
        set
    }

    pub(crate) fn random_tuple(rng: &mut StdRng, degree: usize) -> (Tuple, Vec<(Cell, Set<Digit>)>) {
        random_tuple_with(rng, degree, 4)
    }

    // `max_maybes` keeps the brute force over big tuples fast
    pub(crate) fn random_tuple_with(
        rng: &mut StdRng,
        degree: usize,
        max_maybes: u8,
    ) -> (Tuple, Vec<(Cell, Set<Digit>)>) {
        let maybes: Vec<_> = (0..degree).map(|_| random_set(rng, 6, 2, max_maybes)).collect();
        let sees: Vec<bool> = (0..degree * degree).map(|_| rng.gen_bool(0.3)).collect();
        let tuple = Tuple::new(&maybes, |j, k| sees[j * degree + k]);
        let n_excluders = rng.gen_range(1..=3);
        let excluders = (0..n_excluders)
            .map(|i| (Cell::new(70 + i), random_set(rng, 6, 2, degree.min(4) as u8)))
            .collect();
        (tuple, excluders)
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2000 {
            let degree = rng.gen_range(2..=5);
            let (tuple, excluders) = random_tuple(&mut rng, degree);
            let allowed = allowed_digits(&tuple, &excluders);
            assert_eq!(allowed, brute_force(&tuple, &excluders), "{:?} {:?}", tuple, excluders);
            for (allowed, maybes) in allowed.iter().zip(tuple.maybes()) {
                assert!(allowed.is_subset_of(*maybes));
            }
        }
    }

    #[test]
    fn matches_brute_force_up_to_dec() {
        let mut rng = StdRng::seed_from_u64(0xdec);
        for degree in 6..=MAX {
            for _ in 0..12 {
                let (tuple, excluders) = random_tuple_with(&mut rng, degree, 3);
                assert_eq!(tuple.len(), degree);
                let allowed = allowed_digits(&tuple, &excluders);
                assert_eq!(allowed, brute_force(&tuple, &excluders), "{:?} {:?}", tuple, excluders);
            }
        }
    }

    #[test]
    fn seen_by_covers_all_positions() {
        // every position sees every other one
        let tuple = Tuple::new(&[digits(&[1, 2]); MAX], |_, _| true);
        assert_eq!(tuple.seen_by(MAX - 1), (1 << (MAX - 1)) - 1);
        assert!(tuple.sees(0, MAX - 1));

        // ten cells in one house can't share two digits
        let allowed = allowed_digits(&tuple, &[]);
        assert!(allowed.iter().all(|allowed| allowed.is_empty()));
    }

    #[test]
    fn removing_candidates_never_allows_more() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let degree = rng.gen_range(2..=5);
            let (tuple, excluders) = random_tuple(&mut rng, degree);
            let before = allowed_digits(&tuple, &excluders);

            let pos = rng.gen_range(0..degree);
            let mut maybes = tuple.maybes().to_vec();
            let removed = maybes[pos].into_iter().next().unwrap();
            maybes[pos].remove(removed.as_set());
            let shrunk = Tuple::new(&maybes, |j, k| tuple.sees(j, k));
            let after = allowed_digits(&shrunk, &excluders);

            for i in 0..degree {
                assert!(after[i].is_subset_of(before[i]));
            }
        }
    }
}
