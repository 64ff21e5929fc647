//! # mancala-search
//!
//! A time-bounded move-selection engine for two-player sowing games in the
//! Mancala family (Bohnenspiel, Kalah and relatives).
//!
//! ## Design Principles
//!
//! 1. **Rules-Agnostic**: Sowing and capture live in the caller's board
//!    engine. The search sees positions only through `BoardState`.
//!
//! 2. **Always Answers**: Every call returns a legal move within the turn
//!    budget, even if not a single search depth finishes.
//!
//! 3. **Copies, Never Mutates**: Each hypothetical move is played on a clone.
//!    The caller's position is read-only.
//!
//! ## Architecture
//!
//! - **Opening book of one**: the first move of a game is a tuned constant.
//!
//! - **Greedy win check**: a move that crosses half the beans wins outright
//!   and is played without searching.
//!
//! - **Iterative deepening alpha-beta**: deepening until the deadline, with
//!   children ordered by the evaluator and a timed-out depth discarded whole.
//!
//! ## Modules
//!
//! - `core`: players, moves, RNG
//! - `rules`: the `BoardState` trait board engines implement
//! - `search`: evaluators, ordering, alpha-beta, deepening, move selection
//! - `error`: configuration and selection errors

pub mod core;
pub mod error;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, MoveList, PitMove, Pits, PlayerId, PITS_PER_SIDE};

pub use crate::error::{ConfigError, SelectError};

pub use crate::rules::BoardState;

pub use crate::search::{
    Deadline, Decision, DepthResult, Evaluator, EvaluatorKind, MoveSelector, Phase, Score,
    SearchAlgorithm, SearchConfig, SearchContext, SearchOutcome, SearchStats, TimedOut,
    WinThreshold,
};
