//! Time-bounded move search.
//!
//! ## Overview
//!
//! Layers, top down:
//!
//! - **Selector**: opening move, immediate wins, then the timed deepening loop
//! - **Iterative deepening**: one complete root search per depth limit
//! - **Alpha-beta**: depth-limited minimax with pruning and deadline abort
//! - **Ordering**: children sorted by evaluator score before searching
//! - **Evaluator**: static score of a leaf from the searching side's view
//!
//! A single `Deadline` computed at the start of each decision is threaded
//! through every layer. The caller's position is never modified.
//!
//! ## Usage
//!
//! ```rust
//! use mancala_search::core::PlayerId;
//! use mancala_search::rules::BoardState;
//! use mancala_search::search::MoveSelector;
//!
//! // Assuming your board engine implements BoardState
//! fn play_turn<S: BoardState>(selector: &mut MoveSelector<S>, state: &S, me: PlayerId) {
//!     match selector.choose_move(state, me) {
//!         Ok(mv) => println!("Playing {mv}"),
//!         Err(err) => eprintln!("No move: {err}"),
//!     }
//!     println!("Searched {} nodes", selector.stats().nodes_visited);
//! }
//! ```
//!
//! ## Custom Evaluators
//!
//! ```rust
//! use mancala_search::rules::BoardState;
//! use mancala_search::search::{BeanCount, MoveSelector, SearchConfig};
//! use mancala_search::ConfigError;
//!
//! fn bean_counting_selector<S: BoardState>() -> Result<MoveSelector<S>, ConfigError> {
//!     let selector = MoveSelector::new(SearchConfig::default())?.with_evaluator(BeanCount);
//!     Ok(selector)
//! }
//! ```

pub mod alphabeta;
pub mod config;
pub mod deadline;
pub mod evaluator;
pub mod iterative;
pub mod ordering;
pub mod selector;
pub mod stats;

pub use alphabeta::{alpha_beta, minimax, SearchContext, SearchOutcome, TimedOut};
pub use config::{SearchAlgorithm, SearchConfig, WinThreshold, DEFAULT_OPENING_PIT};
pub use deadline::Deadline;
pub use evaluator::{
    BeanCount, EmptiesAndBeans, EmptyPits, Evaluator, EvaluatorKind, OpeningPitBias, OwnScore,
    Score, ScoreDifferential,
};
pub use iterative::{best_move_at_depth, DepthResult};
pub use ordering::order_states;
pub use selector::{Decision, MoveSelector, Phase};
pub use stats::SearchStats;
