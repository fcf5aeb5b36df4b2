//! Generic, fixed-size bitsets
//!
//! Aligned set exclusion works almost entirely on sets of [`Digit`s](crate::board::Digit), the candidates
//! of a cell, and sets of [`Cell`s](crate::board::Cell), the excluders of a cell. Both are kept in
//! single integers so that intersections and subset checks are one or two instructions,
//! but the element type is kept in the type so the two can't be confused.

use crate::board::{Cell, Digit};
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Generic, fixed-size bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set<T: SetElement>(pub(crate) T::Storage);

/// Iterator over the elements contained in a [`Set`], lowest first
#[derive(Debug, Clone)]
pub struct Iter<T: SetElement>(T::Storage);

/// Trait for types that can be stored in a [`Set`]
pub trait SetElement: Copy + sealed::Sealed {
    /// Integer with one bit per possible element
    type Storage: BitAnd<Output = Self::Storage>
        + BitAndAssign
        + BitOr<Output = Self::Storage>
        + BitOrAssign
        + Not<Output = Self::Storage>
        + Copy
        + Eq
        + Ord
        + Hash
        + fmt::Debug
        + fmt::Binary;

    #[allow(missing_docs)]
    const ALL: Self::Storage;
    #[allow(missing_docs)]
    const NONE: Self::Storage;

    #[doc(hidden)]
    fn bit(self) -> Self::Storage;
    #[doc(hidden)]
    fn count(bits: Self::Storage) -> u32;
    #[doc(hidden)]
    fn pop_lowest(bits: &mut Self::Storage) -> Option<Self>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! set_element {
    ( $( $element:ident => $storage:ty, $n_elements:expr, $from_pos:expr; )* ) => {
        $(
            impl sealed::Sealed for $element {}

            impl SetElement for $element {
                type Storage = $storage;
                const ALL: $storage = (1 << $n_elements) - 1;
                const NONE: $storage = 0;

                #[inline(always)]
                fn bit(self) -> $storage {
                    1 << self.as_index()
                }

                #[inline(always)]
                fn count(bits: $storage) -> u32 {
                    bits.count_ones()
                }

                #[inline]
                fn pop_lowest(bits: &mut $storage) -> Option<Self> {
                    if *bits == 0 {
                        return None;
                    }
                    let pos = bits.trailing_zeros() as u8;
                    *bits &= *bits - 1;
                    Some($from_pos(pos))
                }
            }

            impl $element {
                /// The set that contains only this element
                #[inline(always)]
                pub fn as_set(self) -> Set<Self> {
                    Set(self.bit())
                }
            }
        )*
    };
}

set_element! {
    Cell => u128, 81, Cell::new;
    Digit => u16, 9, Digit::from_index;
}

impl<T: SetElement> Set<T> {
    /// Set containing all possible elements
    pub const ALL: Set<T> = Set(T::ALL);

    /// Empty Set
    pub const NONE: Set<T> = Set(T::NONE);

    /// Construct a bitset from a raw integer.
    ///
    /// # Panic
    /// Panics, if the integer contains bits above [`Set::ALL`]
    pub fn from_bits(bits: T::Storage) -> Self {
        assert!(bits & !T::ALL == T::NONE, "{:b} is out of range", bits);
        Set(bits)
    }

    /// Return the raw integer backing the set.
    pub fn bits(self) -> T::Storage {
        self.0
    }

    /// Returns the set of elements in this set, that aren't present in `other`.
    #[inline(always)]
    pub fn without(self, other: Self) -> Self {
        Set(self.0 & !other.0)
    }

    /// Deletes all elements from this set that are present in `other`.
    #[inline(always)]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Checks if `self` and `other` contain any common element.
    pub fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != T::NONE
    }

    /// Checks if `self` contains `other`, an element or a set.
    pub fn contains(self, other: impl Into<Self>) -> bool {
        other.into().is_subset_of(self)
    }

    /// Checks if every element of `self` is also in `other`.
    ///
    /// This is the "covers" relation between an excluder and a combination:
    /// an excluder is covered if its candidates are a subset of the combination's digits.
    #[inline(always)]
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == T::NONE
    }

    /// Returns the number of elements in this set.
    #[inline(always)]
    pub fn len(self) -> u8 {
        T::count(self.0) as u8
    }

    /// Checks whether this set contains no element.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == T::NONE
    }

    /// Returns the only element in this set, iff only 1 element exists.
    /// If no elements exist, it returns `Err(Empty)`.
    /// If more than 1 element exists, it returns `Ok(None)`.
    pub fn unique(self) -> Result<Option<T>, Empty> {
        match self.len() {
            0 => Err(Empty),
            1 => Ok(self.into_iter().next()),
            _ => Ok(None),
        }
    }
}

/// Potential return value for [`Set::unique`]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Empty;

impl<T: SetElement> From<T> for Set<T> {
    fn from(element: T) -> Self {
        Set(element.bit())
    }
}

impl<T: SetElement> BitAnd for Set<T> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, other: Self) -> Self {
        Set(self.0 & other.0)
    }
}

impl<T: SetElement> BitOr for Set<T> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        Set(self.0 | other.0)
    }
}

impl<T: SetElement> BitOr<T> for Set<T> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: T) -> Self {
        Set(self.0 | other.bit())
    }
}

impl<T: SetElement> BitAndAssign for Set<T> {
    #[inline(always)]
    fn bitand_assign(&mut self, other: Self) {
        self.0 &= other.0;
    }
}

impl<T: SetElement> BitOrAssign for Set<T> {
    #[inline(always)]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl<T: SetElement> BitOrAssign<T> for Set<T> {
    #[inline(always)]
    fn bitor_assign(&mut self, other: T) {
        self.0 |= other.bit();
    }
}

impl<T: SetElement> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter(self.0)
    }
}

impl<T: SetElement> Iterator for Iter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        T::pop_lowest(&mut self.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = T::count(self.0) as usize;
        (len, Some(len))
    }
}

impl<T: SetElement> ExactSizeIterator for Iter<T> {}

impl<T: SetElement> std::iter::FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Set::NONE, |set, element| set | element)
    }
}

impl<T: SetElement> fmt::Binary for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

// pencilmark style, e.g. `259`
impl fmt::Display for Set<Digit> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in *self {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn digits(ds: &[u8]) -> Set<Digit> {
        ds.iter().map(|&d| Digit::new(d)).collect()
    }

    #[test]
    fn unique() {
        for digit in <Set<Digit>>::ALL {
            assert_eq!(digit.as_set().into_iter().count(), 1);
        }
        assert_eq!(digits(&[4]).unique(), Ok(Some(Digit::new(4))));
        assert_eq!(digits(&[4, 5]).unique(), Ok(None));
        assert_eq!(Set::<Digit>::NONE.unique(), Err(Empty));
    }

    #[test]
    fn subset() {
        let one_two = digits(&[1, 2]);
        assert!(one_two.is_subset_of(digits(&[1, 2, 3])));
        assert!(one_two.is_subset_of(one_two));
        assert!(!one_two.is_subset_of(digits(&[1, 3])));
        assert!(Set::NONE.is_subset_of(one_two));
        assert!(digits(&[1, 2, 3]).contains(one_two));
        assert!(one_two.overlaps(digits(&[2, 7])));
        assert!(!one_two.overlaps(digits(&[7])));
    }

    #[test]
    fn iteration_order() {
        let set = digits(&[9, 2, 5]);
        let iterated: Vec<u8> = set.into_iter().map(Digit::get).collect();
        assert_eq!(iterated, vec![2, 5, 9]);
        assert_eq!(set.into_iter().len(), 3);
        assert_eq!(format!("{}", set), "259");
        assert_eq!(Set::<Digit>::ALL.len(), 9);
    }

    #[test]
    fn cell_sets() {
        let set: Set<Cell> = [0, 40, 80].iter().map(|&c| Cell::new(c)).collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Cell::new(80)));
        assert!(!set.contains(Cell::new(79)));
        assert_eq!(set.into_iter().last(), Some(Cell::new(80)));
        assert_eq!(Set::<Cell>::ALL.len(), 81);
        assert_eq!(set.without(Cell::new(40).as_set()).len(), 2);
    }

    #[test]
    #[should_panic]
    fn bits_out_of_range() {
        Set::<Digit>::from_bits(1 << 9);
    }
}
