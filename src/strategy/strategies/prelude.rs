pub(crate) use crate::bitset::Set;
pub(crate) use crate::board::{Candidate, Cell, Digit};
pub(crate) use crate::helper::CellArray;
