#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Plies searched, counting the root move.
    pub depth: u32,
    /// Root moves scoring within this many centipawns of the best are
    /// candidates for the random pick.
    pub tolerance: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            tolerance: 15,
        }
    }
}
