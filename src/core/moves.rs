//! Move representation.
//!
//! A move names the pit its beans are sown from. The board engine owns what
//! sowing and capturing actually do; the search treats moves as opaque,
//! comparable tokens.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Number of pits on each player's side of the board.
pub const PITS_PER_SIDE: usize = 6;

/// Pit contents for both players, indexed by `PlayerId::index()` then pit.
pub type Pits = [[u32; PITS_PER_SIDE]; 2];

/// Legal moves for one position.
///
/// There are never more than `PITS_PER_SIDE` of them, so they stay inline.
pub type MoveList = SmallVec<[PitMove; PITS_PER_SIDE]>;

/// A move: the index of the pit to sow from, in `0..PITS_PER_SIDE`.
///
/// ## Example
///
/// ```
/// use mancala_search::core::PitMove;
///
/// let mv = PitMove::new(4).unwrap();
/// assert_eq!(mv.pit(), 4);
/// assert!(PitMove::new(6).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitMove(u8);

impl PitMove {
    /// Create a move from a pit index.
    ///
    /// Returns `None` if the pit is off the board.
    #[must_use]
    pub const fn new(pit: u8) -> Option<Self> {
        if (pit as usize) < PITS_PER_SIDE {
            Some(Self(pit))
        } else {
            None
        }
    }

    /// Get the pit index.
    #[must_use]
    pub const fn pit(self) -> usize {
        self.0 as usize
    }

    /// Every pit on one side, in index order.
    pub fn all() -> impl Iterator<Item = PitMove> {
        (0..PITS_PER_SIDE as u8).map(PitMove)
    }
}

impl TryFrom<u8> for PitMove {
    type Error = ConfigError;

    fn try_from(pit: u8) -> Result<Self, Self::Error> {
        PitMove::new(pit).ok_or(ConfigError::PitOutOfRange(pit))
    }
}

impl From<PitMove> for u8 {
    fn from(mv: PitMove) -> u8 {
        mv.0
    }
}

impl std::fmt::Display for PitMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pit {}", self.0)
    }
}
