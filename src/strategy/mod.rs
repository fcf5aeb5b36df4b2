//! Tools for solving sudokus with aligned set exclusion.
//!
//! This module contains the [`StrategySolver`] that applies aligned set exclusion of any
//! degree, together with naked singles to fill in the cells that are left with one candidate.
//! The `StrategySolver` together with the [`Strategy`] enum form the core of this module.
//! All deductions are recorded and can be obtained through the appropriate methods.
//!
//! Aligned set exclusion gets expensive quickly. Degree 2 and 3 are cheap on any grid,
//! from degree 5 on a search can take seconds.

pub mod deduction;
mod solver;
pub(crate) mod strategies;

pub use self::deduction::{Deduction, Deductions};
pub use self::solver::{SolverConfig, StrategySolver};
pub use self::strategies::Strategy;
