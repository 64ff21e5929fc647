//! Board engine interface.
//!
//! Games implement `BoardState` to expose:
//! - Legal moves for the side to move
//! - How a move changes the position
//! - Captured scores and pit contents
//!
//! The search calls into `BoardState` but never interprets sowing or
//! capture rules directly.

pub mod board;

pub use board::BoardState;
