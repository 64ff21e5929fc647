//! Move selector configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PitMove;
use crate::error::ConfigError;

use super::evaluator::EvaluatorKind;

/// Pit played as the first move of a game.
pub const DEFAULT_OPENING_PIT: u8 = 4;

/// Score above which a player has won outright.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinThreshold {
    /// Half of all beans in the game, read off the position.
    #[default]
    HalfOfBeans,
    /// A fixed score.
    Fixed(u32),
}

impl WinThreshold {
    /// Resolve the threshold for a game holding `total_beans` beans.
    #[must_use]
    pub fn resolve(self, total_beans: u32) -> u32 {
        match self {
            WinThreshold::HalfOfBeans => total_beans / 2,
            WinThreshold::Fixed(score) => score,
        }
    }
}

/// Tree search used by the iterative deepening driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    /// Minimax with alpha-beta pruning and evaluator-ordered children.
    #[default]
    AlphaBeta,
    /// Full-width minimax, children in legal order. For measuring pruning.
    Minimax,
}

/// Move selector configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Wall-clock time the caller allows per move.
    pub turn_budget: Duration,

    /// Time held back from the budget for unwinding and returning.
    /// Searching stops at `turn_budget - safety_margin`.
    pub safety_margin: Duration,

    /// Move returned, unsearched, on the first call of a game.
    /// `None` skips the opening phase.
    pub opening_move: Option<PitMove>,

    /// Captured score that wins the game outright.
    pub win_threshold: WinThreshold,

    /// Leaf evaluator.
    pub evaluator: EvaluatorKind,

    /// Search algorithm run at each depth.
    pub algorithm: SearchAlgorithm,

    /// Deepest depth limit to try (`None` = until the deadline).
    pub max_depth: Option<u32>,

    /// Seed for the fallback move RNG.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            turn_budget: Duration::from_millis(700),
            safety_margin: Duration::from_millis(15),
            opening_move: PitMove::new(DEFAULT_OPENING_PIT),
            win_threshold: WinThreshold::HalfOfBeans,
            evaluator: EvaluatorKind::ScoreDifferential,
            algorithm: SearchAlgorithm::AlphaBeta,
            max_depth: None,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Time from the start of a decision until searching stops.
    #[must_use]
    pub fn search_window(&self) -> Duration {
        self.turn_budget.saturating_sub(self.safety_margin)
    }

    /// Check the configuration for values the selector cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_window().is_zero() {
            return Err(ConfigError::NoSearchWindow {
                budget: self.turn_budget,
                margin: self.safety_margin,
            });
        }
        if self.win_threshold == WinThreshold::Fixed(0) {
            return Err(ConfigError::ZeroWinThreshold);
        }
        Ok(())
    }

    /// Create a new config with a custom turn budget.
    pub fn with_turn_budget(mut self, budget: Duration) -> Self {
        self.turn_budget = budget;
        self
    }

    /// Create a new config with a custom safety margin.
    pub fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    /// Create a new config with a custom opening move, or none.
    pub fn with_opening_move(mut self, opening: Option<PitMove>) -> Self {
        self.opening_move = opening;
        self
    }

    /// Create a new config with a custom win threshold.
    pub fn with_win_threshold(mut self, threshold: WinThreshold) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Create a new config with a custom evaluator.
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Create a new config with a custom search algorithm.
    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Create a new config with a depth cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
