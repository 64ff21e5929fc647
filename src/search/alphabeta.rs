//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from the searching player's fixed perspective: the
//! maximizing and minimizing roles alternate, the sign of the score never
//! does. Depth counts plies, starting at 1 for the first call beneath the
//! root. Running out of time anywhere aborts the whole call chain with
//! `TimedOut`.

use thiserror::Error;

use crate::core::PlayerId;
use crate::rules::BoardState;

use super::config::SearchAlgorithm;
use super::deadline::Deadline;
use super::evaluator::{Evaluator, Score};
use super::ordering::order_states;
use super::stats::SearchStats;

/// The deadline passed before the search finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("search deadline reached")]
pub struct TimedOut;

/// Result of searching one subtree.
pub type SearchOutcome = Result<Score, TimedOut>;

/// Everything fixed for the duration of one decision.
pub struct SearchContext<'a, S: BoardState> {
    /// The searching player; scores are from this side's perspective.
    pub me: PlayerId,

    /// The other side.
    pub opponent: PlayerId,

    /// When to stop.
    pub deadline: Deadline,

    /// Leaf evaluator, also used to order children.
    pub evaluator: &'a dyn Evaluator<S>,

    /// Search run beneath each root move.
    pub algorithm: SearchAlgorithm,

    /// Counters accumulated across every depth of the decision.
    pub stats: SearchStats,
}

impl<'a, S: BoardState> SearchContext<'a, S> {
    /// Create a context for `me` with alpha-beta search.
    pub fn new(me: PlayerId, deadline: Deadline, evaluator: &'a dyn Evaluator<S>) -> Self {
        Self {
            me,
            opponent: me.opponent(),
            deadline,
            evaluator,
            algorithm: SearchAlgorithm::AlphaBeta,
            stats: SearchStats::default(),
        }
    }

    /// Set the search algorithm.
    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Value of a position reached by the root move, searched to `depth_limit`.
    ///
    /// The opponent replies first, so the search starts in the minimizing role.
    pub fn search_root_child(&mut self, child: &S, depth_limit: u32) -> SearchOutcome {
        match self.algorithm {
            SearchAlgorithm::AlphaBeta => alpha_beta(
                self,
                child,
                depth_limit,
                1,
                false,
                Score::NEG_INFINITY,
                Score::INFINITY,
            ),
            SearchAlgorithm::Minimax => minimax(self, child, depth_limit, 1, false),
        }
    }

    fn leaf(&mut self, state: &S) -> Score {
        self.stats.leaves_evaluated += 1;
        self.evaluator.evaluate(state, self.me, self.opponent)
    }
}

/// Alpha-beta value of `state`.
///
/// `maximizing` is true when the searching player is to move. A position
/// with no legal moves is a leaf however much depth remains. The max role
/// returns as soon as a child exceeds `beta`, the min role as soon as one
/// falls below `alpha`.
pub fn alpha_beta<S: BoardState>(
    ctx: &mut SearchContext<'_, S>,
    state: &S,
    depth_limit: u32,
    depth_now: u32,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> SearchOutcome {
    if ctx.deadline.expired() {
        return Err(TimedOut);
    }
    ctx.stats.nodes_visited += 1;

    if depth_now >= depth_limit {
        return Ok(ctx.leaf(state));
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Ok(ctx.leaf(state));
    }

    let children = order_states(state, &moves, ctx.evaluator, ctx.me, ctx.opponent);

    if maximizing {
        let mut value = Score::NEG_INFINITY;
        for child in &children {
            let child_value = alpha_beta(ctx, child, depth_limit, depth_now + 1, false, alpha, beta)?;
            value = value.max(child_value);
            if value > beta {
                ctx.stats.cutoffs += 1;
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    } else {
        let mut value = Score::INFINITY;
        for child in &children {
            let child_value = alpha_beta(ctx, child, depth_limit, depth_now + 1, true, alpha, beta)?;
            value = value.min(child_value);
            if value < alpha {
                ctx.stats.cutoffs += 1;
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

/// Plain minimax value of `state`: same leaves as `alpha_beta`, every child
/// searched, in legal-move order.
pub fn minimax<S: BoardState>(
    ctx: &mut SearchContext<'_, S>,
    state: &S,
    depth_limit: u32,
    depth_now: u32,
    maximizing: bool,
) -> SearchOutcome {
    if ctx.deadline.expired() {
        return Err(TimedOut);
    }
    ctx.stats.nodes_visited += 1;

    if depth_now >= depth_limit {
        return Ok(ctx.leaf(state));
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Ok(ctx.leaf(state));
    }

    let mut value = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    for mv in moves {
        let child_value = minimax(ctx, &state.after(mv), depth_limit, depth_now + 1, !maximizing)?;
        value = if maximizing {
            value.max(child_value)
        } else {
            value.min(child_value)
        };
    }
    Ok(value)
}
