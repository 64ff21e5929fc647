//! Child ordering for alpha-beta.
//!
//! Children are generated as positions rather than moves, then sorted by the
//! leaf evaluator. Both search roles use the same ascending order.

use crate::core::{PitMove, PlayerId};
use crate::rules::BoardState;

use super::evaluator::{Evaluator, Score};

/// Expand `moves` from `state` into resulting positions, ascending by
/// `evaluator` score for `me`.
///
/// One clone per move; `state` is not modified. Equal scores keep the order
/// of `moves`.
pub fn order_states<S: BoardState>(
    state: &S,
    moves: &[PitMove],
    evaluator: &dyn Evaluator<S>,
    me: PlayerId,
    opponent: PlayerId,
) -> Vec<S> {
    let mut scored: Vec<(Score, S)> = moves
        .iter()
        .map(|&mv| {
            let next = state.after(mv);
            (evaluator.evaluate(&next, me, opponent), next)
        })
        .collect();

    scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    scored.into_iter().map(|(_, next)| next).collect()
}
