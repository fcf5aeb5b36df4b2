//! Types for cells, digits and the candidate grid the strategies work on
mod candidate;
mod digit;
mod grid;
pub mod positions;

pub(crate) use self::positions::N_CELLS;

#[rustfmt::skip]
pub use self::{
    candidate::Candidate,
    digit::Digit,
    grid::Grid,
    positions::{Cell, House, HouseKind},
};
