//! Record of what an [`AlignedExclusion`](crate::AlignedExclusion) engine did.
//!
//! Only available with the `trace` feature.

use crate::board::{Candidate, Cell};

/// A step of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Candidate cells were collected from the grid
    Collected {
        /// Number of candidate cells
        candidates: usize,
    },
    /// Fewer candidate cells than the degree, nothing to search
    TooFewCandidates,
    /// The number of candidate cells is outside of the configured limits
    OutsideCandidateLimits,
    /// A hint was found
    Hint {
        /// The aligned tuple
        cells: Vec<Cell>,
        /// The candidates it removes
        eliminations: Vec<Candidate>,
    },
    /// The search was cancelled
    Interrupted,
}

/// All events since the engine was created or the trace was last cleared
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    #[allow(missing_docs)]
    pub events: Vec<Event>,
}
