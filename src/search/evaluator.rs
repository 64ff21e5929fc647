//! Static evaluation of leaf positions.
//!
//! Evaluators are trait-based so the search can be run with any of them:
//! - `ScoreDifferential`: captured-score difference (the default)
//! - `OwnScore`: own captured score only
//! - `EmptyPits`, `BeanCount`, `EmptiesAndBeans`: board-content heuristics
//! - `OpeningPitBias`: score difference plus a bonus for right-hand pits early on
//!
//! Every evaluator scores from a fixed player's point of view: positive is
//! good for `me`, whichever side is to move.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::BoardState;

/// Evaluation score. Positive favours the searching player.
pub type Score = f64;

/// Bonus for leaving the opponent with six empty pits.
const ALL_EMPTY_BONUS: Score = 100.0;

/// Turns during which `OpeningPitBias` applies its bonus.
const OPENING_TURNS: u32 = 5;

/// Weight of each bean in pits 3..=5 during the opening.
const OPENING_PIT_WEIGHT: Score = 0.1;

/// Policy for scoring a position.
pub trait Evaluator<S: BoardState>: Send + Sync {
    /// Score `state` from `me`'s perspective.
    fn evaluate(&self, state: &S, me: PlayerId, opponent: PlayerId) -> Score;
}

/// Own captured score minus the opponent's.
///
/// Relative standing matters more than raw accumulation, so this beats the
/// richer variants below in play and is the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreDifferential;

impl<S: BoardState> Evaluator<S> for ScoreDifferential {
    fn evaluate(&self, state: &S, me: PlayerId, opponent: PlayerId) -> Score {
        Score::from(state.score(me)) - Score::from(state.score(opponent))
    }
}

/// Own captured score, ignoring the opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct OwnScore;

impl<S: BoardState> Evaluator<S> for OwnScore {
    fn evaluate(&self, state: &S, me: PlayerId, _opponent: PlayerId) -> Score {
        Score::from(state.score(me))
    }
}

/// Doubled score difference, adjusted by who has more empty pits.
///
/// Emptying the opponent's side entirely earns a large bonus.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyPits;

impl<S: BoardState> Evaluator<S> for EmptyPits {
    fn evaluate(&self, state: &S, me: PlayerId, opponent: PlayerId) -> Score {
        let their_empties = state.empty_pits(opponent);
        let mine = 2.0 * Score::from(state.score(me))
            + Score::from(their_empties)
            + wipeout_bonus(their_empties);
        let theirs = 2.0 * Score::from(state.score(opponent)) + Score::from(state.empty_pits(me));
        mine - theirs
    }
}

/// Doubled score difference plus the difference in beans on each side.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeanCount;

impl<S: BoardState> Evaluator<S> for BeanCount {
    fn evaluate(&self, state: &S, me: PlayerId, opponent: PlayerId) -> Score {
        let mine = 2.0 * Score::from(state.score(me)) + Score::from(state.beans_on_side(me));
        let theirs =
            2.0 * Score::from(state.score(opponent)) + Score::from(state.beans_on_side(opponent));
        mine - theirs
    }
}

/// `EmptyPits` and `BeanCount` combined.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptiesAndBeans;

impl<S: BoardState> Evaluator<S> for EmptiesAndBeans {
    fn evaluate(&self, state: &S, me: PlayerId, opponent: PlayerId) -> Score {
        let their_empties = state.empty_pits(opponent);
        let mine = 2.0 * Score::from(state.score(me))
            + Score::from(their_empties)
            + Score::from(state.beans_on_side(me))
            + wipeout_bonus(their_empties);
        let theirs = 2.0 * Score::from(state.score(opponent))
            + Score::from(state.empty_pits(me))
            + Score::from(state.beans_on_side(opponent));
        mine - theirs
    }
}

/// Score difference, plus a small bonus for beans kept in pits 3..=5 while
/// the game is in its first few turns.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpeningPitBias;

impl<S: BoardState> Evaluator<S> for OpeningPitBias {
    fn evaluate(&self, state: &S, me: PlayerId, opponent: PlayerId) -> Score {
        let mut eval = ScoreDifferential.evaluate(state, me, opponent);
        if state.turn_number() < OPENING_TURNS {
            let pits = state.pits()[me.index()];
            eval += pits[3..]
                .iter()
                .map(|&b| OPENING_PIT_WEIGHT * Score::from(b))
                .sum::<Score>();
        }
        eval
    }
}

fn wipeout_bonus(empties: u32) -> Score {
    if empties as usize == crate::core::PITS_PER_SIDE {
        ALL_EMPTY_BONUS
    } else {
        0.0
    }
}

/// Evaluator choice carried in `SearchConfig`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluatorKind {
    #[default]
    ScoreDifferential,
    OwnScore,
    EmptyPits,
    BeanCount,
    EmptiesAndBeans,
    OpeningPitBias,
}

impl EvaluatorKind {
    /// Instantiate the evaluator this kind names.
    #[must_use]
    pub fn build<S: BoardState>(self) -> Box<dyn Evaluator<S>> {
        match self {
            EvaluatorKind::ScoreDifferential => Box::new(ScoreDifferential),
            EvaluatorKind::OwnScore => Box::new(OwnScore),
            EvaluatorKind::EmptyPits => Box::new(EmptyPits),
            EvaluatorKind::BeanCount => Box::new(BeanCount),
            EvaluatorKind::EmptiesAndBeans => Box::new(EmptiesAndBeans),
            EvaluatorKind::OpeningPitBias => Box::new(OpeningPitBias),
        }
    }
}
