//! One iterative deepening step: a full root search at a fixed depth limit.
//!
//! A depth either completes for every root move or is thrown away. A partial
//! ranking is never returned.

use log::debug;

use crate::core::PitMove;
use crate::rules::BoardState;

use super::alphabeta::{SearchContext, TimedOut};
use super::evaluator::Score;

/// Outcome of a completed depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthResult {
    /// Highest-valued root move; the first one wins ties.
    pub best_move: PitMove,

    /// Its value.
    pub score: Score,

    /// The depth limit searched.
    pub depth: u32,

    /// Nodes visited while searching this depth.
    pub nodes: u64,
}

/// Search every legal root move to `depth` and return the best.
///
/// Returns `None` if the deadline has already passed, if it passes during
/// any root move's search, or if the root has no legal moves.
pub fn best_move_at_depth<S: BoardState>(
    ctx: &mut SearchContext<'_, S>,
    state: &S,
    depth: u32,
) -> Option<DepthResult> {
    if ctx.deadline.expired() {
        return None;
    }

    let nodes_before = ctx.stats.nodes_visited;
    let mut best: Option<(PitMove, Score)> = None;

    for mv in state.legal_moves() {
        let child = state.after(mv);
        let score = match ctx.search_root_child(&child, depth) {
            Ok(score) => score,
            Err(TimedOut) => {
                ctx.stats.depths_abandoned += 1;
                debug!("depth {depth} abandoned at {mv}: deadline reached");
                return None;
            }
        };
        if best.map_or(true, |(_, best_score)| best_score < score) {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = best?;
    let nodes = ctx.stats.nodes_visited - nodes_before;
    ctx.stats.completed_depth = Some(depth);
    debug!("depth {depth} complete: {best_move} scores {score} ({nodes} nodes)");

    Some(DepthResult {
        best_move,
        score,
        depth,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveList, Pits, PlayerId};
    use crate::search::deadline::Deadline;
    use crate::search::evaluator::ScoreDifferential;
    use std::time::{Duration, Instant};

    // Root move i captures `gains[i]` for the first player; every reply
    // captures `reply` for the second player, then the game ends.
    #[derive(Clone, Debug)]
    struct TwoPly {
        gains: [u32; 3],
        reply: u32,
        scores: [u32; 2],
        ply: u32,
    }

    impl BoardState for TwoPly {
        fn apply_move(&mut self, mv: PitMove) {
            if self.ply == 0 {
                self.scores[0] += self.gains[mv.pit()];
            } else {
                self.scores[1] += self.reply;
            }
            self.ply += 1;
        }

        fn legal_moves(&self) -> MoveList {
            if self.ply < 2 {
                PitMove::all().take(3).collect()
            } else {
                MoveList::new()
            }
        }

        fn score(&self, player: PlayerId) -> u32 {
            self.scores[player.index()]
        }

        fn pits(&self) -> Pits {
            [[0; 6]; 2]
        }

        fn turn_number(&self) -> u32 {
            self.ply
        }
    }

    fn two_ply(gains: [u32; 3]) -> TwoPly {
        TwoPly {
            gains,
            reply: 2,
            scores: [0, 0],
            ply: 0,
        }
    }

    fn open_deadline() -> Deadline {
        Deadline::after(Duration::from_secs(60))
    }

    #[test]
    fn test_picks_highest_root_move() {
        let eval = ScoreDifferential;
        let mut ctx = SearchContext::new(PlayerId::FIRST, open_deadline(), &eval);

        let result = best_move_at_depth(&mut ctx, &two_ply([1, 4, 2]), 2).unwrap();

        assert_eq!(result.best_move.pit(), 1);
        assert_eq!(result.score, 2.0);
        assert_eq!(result.depth, 2);
        assert_eq!(ctx.stats.completed_depth, Some(2));
    }

    #[test]
    fn test_ties_keep_first_move() {
        let eval = ScoreDifferential;
        let mut ctx = SearchContext::new(PlayerId::FIRST, open_deadline(), &eval);

        let result = best_move_at_depth(&mut ctx, &two_ply([3, 5, 5]), 2).unwrap();

        assert_eq!(result.best_move.pit(), 1);
    }

    #[test]
    fn test_depth_zero_scores_root_children() {
        let eval = ScoreDifferential;
        let mut ctx = SearchContext::new(PlayerId::FIRST, open_deadline(), &eval);

        let result = best_move_at_depth(&mut ctx, &two_ply([1, 4, 2]), 0).unwrap();

        // No reply searched: the score is just the capture.
        assert_eq!(result.score, 4.0);
        assert_eq!(result.nodes, 3);
    }

    #[test]
    fn test_expired_deadline_returns_none() {
        let eval = ScoreDifferential;
        let mut ctx = SearchContext::new(PlayerId::FIRST, Deadline::at(Instant::now()), &eval);

        assert!(best_move_at_depth(&mut ctx, &two_ply([1, 4, 2]), 2).is_none());
        assert_eq!(ctx.stats.completed_depth, None);
    }

    #[test]
    fn test_terminal_root_returns_none() {
        let eval = ScoreDifferential;
        let mut ctx = SearchContext::new(PlayerId::FIRST, open_deadline(), &eval);
        let mut state = two_ply([1, 1, 1]);
        state.ply = 2;

        assert!(best_move_at_depth(&mut ctx, &state, 3).is_none());
    }
}
