// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Gamma: an engine for a multi-player territorial board game.
//!
//! Players take turns placing pieces on a rectangular grid. The cells a
//! player owns decompose into 4-connected *areas*, and the engine enforces
//! a per-player cap on how many disjoint areas may exist at any time. Each
//! player additionally holds one lifetime *golden move* that captures an
//! opponent's cell, subject to the same cap for every player.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Drivers (batch / interactive)     │
//! ├─────────────────────────────────────┤
//! │   Engine façade + queries (Game)    │
//! ├─────────────────────────────────────┤
//! │   Move engines + renderer           │
//! ├─────────────────────────────────────┤
//! │   Board store + disjoint-set forest │
//! └─────────────────────────────────────┘
//! ```
//!
//! Ordinary moves maintain the area partition incrementally through a
//! union-find with path halving and union by rank; the golden move is the
//! only operation allowed a whole-board rebuild, because removing a cell
//! can split a region in ways a union-find cannot undo.

pub mod error;
pub mod game;
mod render;

pub use error::{GameError, GameResult};
pub use game::{
    assert_invariants, check_invariants, Board, Cell, Game, InvariantViolation, PlayerId,
    PlayerState,
};
