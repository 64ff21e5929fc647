//! Core types shared by the board interface and the search: players, moves,
//! and the seeded RNG.

pub mod moves;
pub mod player;
pub mod rng;

pub use moves::{MoveList, PitMove, Pits, PITS_PER_SIDE};
pub use player::PlayerId;
pub use rng::GameRng;
