//! Board state trait implemented by the game engine.
//!
//! The search never interprets sowing or capture rules. It only needs to
//! copy a position, play a move on the copy, and read scores and pits.
//!
//! ## Implementation Notes
//!
//! - `Clone`: must be a deep copy; playing on the clone leaves the original untouched
//! - `apply_move`: must be deterministic
//! - `legal_moves`: return an empty list when the side to move cannot act
//! - Beans in pits plus both scores must be conserved by every move

use crate::core::{MoveList, PitMove, Pits, PlayerId};

/// A position in a two-player sowing game.
pub trait BoardState: Clone {
    /// Play a move in place.
    fn apply_move(&mut self, mv: PitMove);

    /// Legal moves for the side to move.
    ///
    /// Returns empty if the position is terminal for that side.
    fn legal_moves(&self) -> MoveList;

    /// Beans captured so far by `player`.
    fn score(&self, player: PlayerId) -> u32;

    /// Current pit contents for both sides.
    fn pits(&self) -> Pits;

    /// Number of moves played so far.
    fn turn_number(&self) -> u32;

    // === Convenience Methods ===

    /// The position reached by playing `mv` on a copy of this one.
    #[must_use]
    fn after(&self, mv: PitMove) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// Beans in `player`'s pits.
    fn beans_on_side(&self, player: PlayerId) -> u32 {
        self.pits()[player.index()].iter().sum()
    }

    /// Empty pits on `player`'s side.
    fn empty_pits(&self, player: PlayerId) -> u32 {
        self.pits()[player.index()].iter().filter(|&&b| b == 0).count() as u32
    }

    /// Every bean in the game: both sides' pits plus both scores.
    ///
    /// Constant over a game, since moves only relocate beans.
    fn total_beans(&self) -> u32 {
        PlayerId::both()
            .map(|p| self.beans_on_side(p) + self.score(p))
            .sum()
    }
}
