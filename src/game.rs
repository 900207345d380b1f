//! Game engine for gamma.
//!
//! Implements the rules of the territorial board game:
//! - Board of cells whose 4-connected monochromatic components are *areas*
//! - Per-player statistics maintained incrementally on every move
//! - Ordinary moves bounded by a per-player areas limit
//! - The once-per-game golden move with transactional re-validation
//! - Consistency checks that recompute everything from scratch

mod board;
mod dsu;
mod golden;
mod invariants;
mod moves;
mod player;
mod state;

pub use board::{Board, Cell};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use player::{PlayerId, PlayerState};
pub use state::Game;

pub(crate) use board::NEIGHBOR_OFFSETS;
