//! Per-player counters and flags.

/// Unique identifier for a player.
///
/// Valid ids run from 1 to the game's player count; 0 never identifies a
/// player (an empty cell has no owner at all).
pub type PlayerId = u32;

/// Incrementally maintained statistics for a single player.
///
/// The move engines keep every field consistent with the board after each
/// completed operation; `invariants::check_invariants` recomputes them from
/// scratch to catch drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Number of cells owned by this player.
    pub occupied_fields: u64,
    /// Number of empty cells with at least one neighbor owned by this
    /// player. These are the only cells the player may take once at the
    /// area limit.
    pub border_empty_fields: u64,
    /// Number of disjoint 4-connected areas the player's cells form.
    pub areas: u32,
    /// Whether the player has spent their lifetime golden move.
    pub golden_move_done: bool,
}

impl PlayerState {
    /// Fresh zero-valued record.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_zeroed() {
        let player = PlayerState::new();
        assert_eq!(player.occupied_fields, 0);
        assert_eq!(player.border_empty_fields, 0);
        assert_eq!(player.areas, 0);
        assert!(!player.golden_move_done);
    }
}
