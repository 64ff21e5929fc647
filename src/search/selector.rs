//! Top-level move selection.
//!
//! Each call runs through three phases and always ends in a move:
//! 1. **Opening**: the first call of a game returns a fixed move unsearched.
//! 2. **Greedy win**: any move that takes the score past the win threshold is
//!    played at once.
//! 3. **Timed search**: iterative deepening until the deadline, keeping the
//!    last depth that finished, or a random legal move if none did.

use std::time::Instant;

use log::{debug, info, trace};

use crate::core::{GameRng, PitMove, PlayerId};
use crate::error::{ConfigError, SelectError};
use crate::rules::BoardState;

use super::alphabeta::SearchContext;
use super::config::SearchConfig;
use super::deadline::Deadline;
use super::evaluator::Evaluator;
use super::iterative::best_move_at_depth;
use super::stats::SearchStats;

/// Where a game session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No move has been chosen yet this game.
    Opening,
    /// The opening move has been played.
    Normal,
}

impl Phase {
    /// The phase after a move has been chosen.
    #[must_use]
    pub fn advance(self) -> Self {
        Phase::Normal
    }
}

/// How the last move was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The configured opening move.
    Opening,
    /// A move that wins outright.
    GreedyWin,
    /// The best move of the deepest completed depth.
    Searched { depth: u32 },
    /// No depth completed; a random legal move.
    Fallback,
}

/// Chooses one move per turn for one player within a time budget.
///
/// Holds per-game session state: the phase, the fallback RNG, and the
/// statistics of the last decision. Use one selector per game, or call
/// `new_game` between games.
pub struct MoveSelector<S: BoardState> {
    /// Selector configuration.
    config: SearchConfig,

    /// Leaf evaluator.
    evaluator: Box<dyn Evaluator<S>>,

    /// Whether `evaluator` was supplied by `with_evaluator` rather than built
    /// from `config.evaluator`.
    custom_evaluator: bool,

    /// RNG for the fallback move.
    rng: GameRng,

    /// Session phase.
    phase: Phase,

    /// How the last move was chosen.
    last_decision: Option<Decision>,

    /// Statistics of the last decision.
    stats: SearchStats,
}

impl<S: BoardState> MoveSelector<S> {
    /// Create a selector using the evaluator named in `config`.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let evaluator = config.evaluator.build();
        let rng = GameRng::new(config.seed);
        let phase = Self::initial_phase(&config);

        Ok(Self {
            config,
            evaluator,
            custom_evaluator: false,
            rng,
            phase,
            last_decision: None,
            stats: SearchStats::default(),
        })
    }

    /// Set a custom evaluator, overriding `config.evaluator`.
    ///
    /// The config is left as given; `has_custom_evaluator` reports the override.
    pub fn with_evaluator<E: Evaluator<S> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self.custom_evaluator = true;
        self
    }

    fn initial_phase(config: &SearchConfig) -> Phase {
        if config.opening_move.is_some() {
            Phase::Opening
        } else {
            Phase::Normal
        }
    }

    /// Reset the session for a new game.
    pub fn new_game(&mut self) {
        self.phase = Self::initial_phase(&self.config);
        self.rng.reseed();
        self.last_decision = None;
        self.stats.reset();
    }

    /// Choose a move for `me`, stopping the search at the configured cutoff.
    pub fn choose_move(&mut self, state: &S, me: PlayerId) -> Result<PitMove, SelectError> {
        let deadline = Deadline::after(self.config.search_window());
        self.choose_move_with_deadline(state, me, deadline)
    }

    /// Choose a move for `me`, stopping the search at `deadline`.
    ///
    /// `state` is only ever read; every hypothetical move is played on a copy.
    pub fn choose_move_with_deadline(
        &mut self,
        state: &S,
        me: PlayerId,
        deadline: Deadline,
    ) -> Result<PitMove, SelectError> {
        let start = Instant::now();
        self.stats.reset();

        let (mv, decision) = self.decide(state, me, deadline)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.last_decision = Some(decision);
        info!(
            "{me} plays {mv} ({decision:?}, {} nodes, {}us)",
            self.stats.nodes_visited, self.stats.time_us
        );
        Ok(mv)
    }

    fn decide(
        &mut self,
        state: &S,
        me: PlayerId,
        deadline: Deadline,
    ) -> Result<(PitMove, Decision), SelectError> {
        if self.phase == Phase::Opening {
            self.phase = self.phase.advance();
            if let Some(opening) = self.config.opening_move {
                return Ok((opening, Decision::Opening));
            }
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(SelectError::NoLegalMoves);
        }

        let threshold = self.config.win_threshold.resolve(state.total_beans());
        if let Some(&winner) = moves
            .iter()
            .find(|&&mv| state.after(mv).score(me) > threshold)
        {
            trace!("{winner} takes {me} past {threshold}");
            return Ok((winner, Decision::GreedyWin));
        }

        let fallback = self
            .rng
            .choose(&moves)
            .copied()
            .ok_or(SelectError::NoLegalMoves)?;

        let mut ctx = SearchContext::new(me, deadline, self.evaluator.as_ref())
            .with_algorithm(self.config.algorithm);
        let mut choice = None;
        let mut depth = 0;

        while !deadline.expired() && self.config.max_depth.map_or(true, |max| depth <= max) {
            match best_move_at_depth(&mut ctx, state, depth) {
                Some(result) => choice = Some(result),
                None => break,
            }
            depth += 1;
        }

        self.stats = ctx.stats;
        Ok(match choice {
            Some(result) => (
                result.best_move,
                Decision::Searched {
                    depth: result.depth,
                },
            ),
            None => {
                debug!("no depth completed; falling back to {fallback}");
                (fallback, Decision::Fallback)
            }
        })
    }

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How the last move was chosen, if any has been.
    #[must_use]
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Whether the evaluator in use came from `with_evaluator` instead of
    /// `config().evaluator`.
    #[must_use]
    pub fn has_custom_evaluator(&self) -> bool {
        self.custom_evaluator
    }
}
