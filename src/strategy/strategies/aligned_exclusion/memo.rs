use crate::bitset::Set;
use crate::board::{Cell, Digit};
use std::collections::HashMap;

/// Remembers tuples that were searched without finding anything.
///
/// Candidates are only ever removed, so for a fixed set of common excluders the sum of
/// the candidate bits of a tuple and its excluders can only go down. The set itself can
/// grow, when a peer drops to few enough candidates to become an excluder, so it is
/// stored along with the sum. If both are unchanged since the last fruitless search,
/// nothing has changed and the tuple can be skipped.
///
/// Tuples are keyed by a hash of their cells. Two tuples with the same hash and the
/// same sum would shadow each other; this is rare enough to be accepted in exchange
/// for not storing the cells themselves. Disable the memo when exactness matters more
/// than speed.
#[derive(Clone, Debug, Default)]
pub(crate) struct NonHinterMemo {
    entries: HashMap<u64, (Set<Cell>, u32)>,
}

impl NonHinterMemo {
    /// Order sensitive hash of the tuple's cells
    pub(crate) fn fingerprint(cells: &[Cell]) -> u64 {
        // FNV-1a
        cells.iter().fold(0xcbf2_9ce4_8422_2325, |hash, cell| {
            (hash ^ cell.get() as u64).wrapping_mul(0x0000_0100_0000_01b3)
        })
    }

    pub(crate) fn checksum(maybes: impl IntoIterator<Item = Set<Digit>>) -> u32 {
        maybes.into_iter().map(|maybes| maybes.bits() as u32).sum()
    }

    /// Whether the tuple was searched fruitlessly before and nothing changed since.
    pub(crate) fn skip(&self, fingerprint: u64, excluders: Set<Cell>, checksum: u32) -> bool {
        self.entries.get(&fingerprint) == Some(&(excluders, checksum))
    }

    pub(crate) fn put(&mut self, fingerprint: u64, excluders: Set<Cell>, checksum: u32) {
        self.entries.insert(fingerprint, (excluders, checksum));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
