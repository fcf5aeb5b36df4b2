use std::fmt;
use std::num::NonZeroU8;

/// A digit from 1 to 9 that can be placed in a cell or remain as one of its candidates.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Digit {
        match Digit::new_checked(digit) {
            Some(digit) => digit,
            None => panic!("digit {} is not in 1..=9", digit),
        }
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Digit> {
        match digit {
            1..=9 => NonZeroU8::new(digit).map(Digit),
            _ => None,
        }
    }

    // `idx` is `digit - 1`, the bit position in a `Set<Digit>`
    pub(crate) fn from_index(idx: u8) -> Digit {
        Digit::new(idx + 1)
    }

    /// Parses `'1'..='9'`.
    pub fn from_char(ch: char) -> Option<Digit> {
        ch.to_digit(10).and_then(|digit| Digit::new_checked(digit as u8))
    }

    /// Returns an iterator over all digits.
    pub fn all() -> impl Iterator<Item = Digit> {
        (1..=9).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as `usize`, offset by `-1`, for indexing.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }

    #[allow(missing_docs)]
    pub fn to_char(self) -> char {
        (b'0' + self.get()) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
