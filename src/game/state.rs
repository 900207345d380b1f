//! Game state: construction and the query layer.

use crate::error::{GameError, GameResult};
use crate::game::{Board, PlayerId, PlayerState};

/// Complete state of one gamma game.
///
/// A game is a self-contained owned aggregate: the board, the player table
/// and the grand occupancy total. All engine operations run to completion on
/// the calling thread and keep the documented invariants intact.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) players_num: u32,
    pub(crate) max_areas: u32,
    pub(crate) occupied_fields: u64,
    pub(crate) board: Board,
    pub(crate) players: Vec<PlayerState>,
}

impl Game {
    /// Create a game with an empty `width x height` board, `players`
    /// players and an areas limit of `areas` per player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] when any parameter is zero and
    /// [`GameError::OutOfMemory`] when the board or the player table cannot
    /// be allocated. A failed construction leaves nothing allocated.
    pub fn new(width: u32, height: u32, players: u32, areas: u32) -> GameResult<Self> {
        if width == 0 || height == 0 || players == 0 || areas == 0 {
            return Err(GameError::InvalidArgument);
        }

        let board = Board::new(width, height)?;

        let mut table = Vec::new();
        table
            .try_reserve_exact(players as usize)
            .map_err(|_| GameError::OutOfMemory)?;
        table.extend((0..players).map(|_| PlayerState::new()));

        Ok(Self {
            players_num: players,
            max_areas: areas,
            occupied_fields: 0,
            board,
            players: table,
        })
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.board.width()
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.board.height()
    }

    /// Number of players in the game.
    #[must_use]
    pub const fn players_number(&self) -> u32 {
        self.players_num
    }

    /// Per-player upper bound on the number of disjoint areas.
    #[must_use]
    pub const fn max_areas(&self) -> u32 {
        self.max_areas
    }

    /// Total number of occupied cells across all players.
    #[must_use]
    pub const fn occupied_total(&self) -> u64 {
        self.occupied_fields
    }

    /// Owner of the cell at (x, y); `None` when empty or out of bounds.
    #[must_use]
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        self.board.owner_at(i64::from(x), i64::from(y))
    }

    /// The statistics record of `player`, or `None` for an invalid id.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.player_index(player).map(|index| &self.players[index])
    }

    /// Table index of a valid player id (ids map 1..=players_num onto
    /// 0..players_num).
    #[inline]
    pub(crate) fn player_index(&self, player: PlayerId) -> Option<usize> {
        if player >= 1 && player <= self.players_num {
            Some((player - 1) as usize)
        } else {
            None
        }
    }

    /// Number of cells occupied by `player`, 0 for an invalid id.
    #[must_use]
    pub fn busy_fields(&self, player: PlayerId) -> u64 {
        self.player_index(player)
            .map_or(0, |index| self.players[index].occupied_fields)
    }

    /// Number of cells `player` may take with an ordinary move.
    ///
    /// Below the areas limit every empty cell counts; at the limit only the
    /// cells bordering the player's existing territory do. Returns 0 for an
    /// invalid id.
    #[must_use]
    pub fn free_fields(&self, player: PlayerId) -> u64 {
        let Some(index) = self.player_index(player) else {
            return 0;
        };

        if self.players[index].areas < self.max_areas {
            u64::from(self.width()) * u64::from(self.height()) - self.occupied_fields
        } else {
            self.players[index].border_empty_fields
        }
    }

    /// Check whether `player` may still attempt a golden move.
    ///
    /// True iff the player has not spent their golden move and some other
    /// player occupies at least one cell. This is a necessary condition
    /// only: a concrete golden move can still fail on the areas limit.
    #[must_use]
    pub fn golden_possible(&self, player: PlayerId) -> bool {
        let Some(index) = self.player_index(player) else {
            return false;
        };

        if self.players[index].golden_move_done {
            return false;
        }

        self.players
            .iter()
            .enumerate()
            .any(|(other, state)| other != index && state.occupied_fields > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_parameters() {
        assert_eq!(Game::new(0, 1, 1, 1).unwrap_err(), GameError::InvalidArgument);
        assert_eq!(Game::new(1, 0, 1, 1).unwrap_err(), GameError::InvalidArgument);
        assert_eq!(Game::new(1, 1, 0, 1).unwrap_err(), GameError::InvalidArgument);
        assert_eq!(Game::new(1, 1, 1, 0).unwrap_err(), GameError::InvalidArgument);
    }

    #[test]
    fn test_new_game_is_blank() {
        let game = Game::new(4, 3, 2, 5).unwrap();
        assert_eq!(game.width(), 4);
        assert_eq!(game.height(), 3);
        assert_eq!(game.players_number(), 2);
        assert_eq!(game.max_areas(), 5);
        assert_eq!(game.occupied_total(), 0);
        for player in 1..=2 {
            assert_eq!(game.busy_fields(player), 0);
            assert_eq!(game.free_fields(player), 12);
            assert!(!game.golden_possible(player));
        }
    }

    #[test]
    fn test_player_index_mapping() {
        let game = Game::new(1, 1, 3, 1).unwrap();
        assert_eq!(game.player_index(0), None);
        assert_eq!(game.player_index(1), Some(0));
        assert_eq!(game.player_index(3), Some(2));
        assert_eq!(game.player_index(4), None);
    }

    #[test]
    fn test_queries_on_invalid_player() {
        let game = Game::new(2, 2, 2, 1).unwrap();
        assert_eq!(game.busy_fields(0), 0);
        assert_eq!(game.busy_fields(3), 0);
        assert_eq!(game.free_fields(0), 0);
        assert_eq!(game.free_fields(3), 0);
        assert!(!game.golden_possible(0));
        assert!(!game.golden_possible(3));
        assert!(game.player(3).is_none());
    }
}
