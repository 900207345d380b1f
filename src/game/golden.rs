//! Golden move engine: transactional capture of an opponent's cell.
//!
//! Removing a cell from a connected region can split it into up to four
//! sub-regions, which a union-find cannot express incrementally. The engine
//! therefore mutates, rebuilds the whole forest, and rolls the mutation back
//! when any player ends above the areas limit. Golden moves happen at most
//! once per player per game, so the bounded O(width x height) rebuild is
//! confined to them.

use crate::game::{Game, PlayerId};

impl Game {
    /// Rebuild every player's area statistics from the board.
    ///
    /// Resets all union-find links to singletons, counts one area per owned
    /// cell, then re-unions each cell with its same-owner neighbors,
    /// subtracting one area per merge. Returns `false` when some player
    /// ends above the areas limit.
    pub(crate) fn reindex_areas(&mut self) -> bool {
        for state in &mut self.players {
            state.areas = 0;
        }

        for index in 0..self.board.cells().len() {
            let Some(owner) = self.board.cell(index).owner() else {
                continue;
            };
            self.board.detach(index);
            if let Some(owner_index) = self.player_index(owner) {
                self.players[owner_index].areas += 1;
            }
        }

        for index in 0..self.board.cells().len() {
            let Some(owner) = self.board.cell(index).owner() else {
                continue;
            };
            let (x, y) = self.board.coord_of(index);
            let merged = self.union_with_own_neighbors(x, y);
            if let Some(owner_index) = self.player_index(owner) {
                self.players[owner_index].areas -= merged;
            }
        }

        self.players.iter().all(|state| state.areas <= self.max_areas)
    }

    /// Replace the owner of the occupied cell (x, y) with `player`.
    ///
    /// Available once per player per game. Returns `true` iff the capture
    /// is legal, keeps every player within the areas limit, and was
    /// applied; otherwise returns `false` and leaves the game unchanged.
    pub fn golden_move(&mut self, player: PlayerId, x: u32, y: u32) -> bool {
        let Some(player_index) = self.player_index(player) else {
            return false;
        };
        let (xs, ys) = (i64::from(x), i64::from(y));
        if !self.board.in_bounds(xs, ys) {
            return false;
        }

        let cell_index = self.board.index(x, y);
        let Some(previous) = self.board.cell(cell_index).owner() else {
            return false;
        };
        if previous == player {
            return false;
        }
        if self.players[player_index].golden_move_done {
            return false;
        }
        if self.would_exceed_areas_limit(player_index, xs, ys, player) {
            return false;
        }

        // Counted against the pre-capture board, like an ordinary move.
        let border_gain = self.new_border_empty_count(xs, ys, player);

        self.board.cell_mut(cell_index).owner = Some(player);

        if !self.reindex_areas() {
            // The capture pushed someone past the limit. The removed cell
            // may have disconnected the previous owner's territory, so the
            // forest must be rebuilt again after restoring ownership.
            self.board.cell_mut(cell_index).owner = Some(previous);
            self.reindex_areas();
            return false;
        }

        // Cells that stop bordering the previous owner's territory, counted
        // against the post-capture board.
        let border_lose = self.new_border_empty_count(xs, ys, previous);

        self.players[player_index].occupied_fields += 1;
        self.players[player_index].border_empty_fields += border_gain;
        self.players[player_index].golden_move_done = true;

        if let Some(previous_index) = self.player_index(previous) {
            self.players[previous_index].occupied_fields -= 1;
            self.players[previous_index].border_empty_fields -= border_lose;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{assert_invariants, Game};

    #[test]
    fn test_golden_captures_opponent_cell() {
        let mut game = Game::new(3, 1, 2, 1).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(game.make_move(2, 1, 0));

        assert!(game.golden_possible(1));
        assert!(game.golden_move(1, 1, 0));
        assert_eq!(game.busy_fields(1), 2);
        assert_eq!(game.busy_fields(2), 0);
        assert_eq!(game.occupied_total(), 2);
        assert!(game.player(1).unwrap().golden_move_done);
        assert_invariants(&game);
    }

    #[test]
    fn test_golden_rejects_empty_and_own_cells() {
        let mut game = Game::new(3, 1, 2, 2).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(game.make_move(2, 2, 0));

        assert!(!game.golden_move(1, 1, 0)); // empty
        assert!(!game.golden_move(1, 0, 0)); // own cell
        assert!(!game.player(1).unwrap().golden_move_done);
    }

    #[test]
    fn test_golden_only_once() {
        let mut game = Game::new(4, 1, 2, 2).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(game.make_move(2, 2, 0));
        assert!(game.make_move(2, 3, 0));

        assert!(game.golden_move(1, 2, 0));
        assert!(!game.golden_possible(1));
        assert!(!game.golden_move(1, 3, 0));
        assert_eq!(game.busy_fields(2), 1);
    }

    #[test]
    fn test_golden_reverts_on_split_past_limit() {
        // Player 2 owns a 3-cell line; stealing the middle would leave two
        // areas against a limit of one.
        let mut game = Game::new(5, 1, 2, 1).unwrap();
        assert!(game.make_move(2, 1, 0));
        assert!(game.make_move(2, 2, 0));
        assert!(game.make_move(2, 3, 0));
        assert!(game.make_move(1, 0, 0));

        let busy_before = (game.busy_fields(1), game.busy_fields(2));
        assert!(!game.golden_move(1, 2, 0));

        assert_eq!(game.owner(2, 0), Some(2));
        assert_eq!((game.busy_fields(1), game.busy_fields(2)), busy_before);
        assert_eq!(game.player(2).unwrap().areas, 1);
        assert!(!game.player(1).unwrap().golden_move_done);
        assert_invariants(&game);
    }

    #[test]
    fn test_golden_at_area_limit_needs_neighbor() {
        let mut game = Game::new(5, 1, 2, 1).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(game.make_move(2, 2, 0));
        assert!(game.make_move(2, 3, 0));

        // Player 1 is at the limit and (3, 0) has no player-1 neighbor.
        assert!(!game.golden_move(1, 3, 0));

        // (2, 0) does not touch player 1's territory either... but (1, 0)
        // is empty, so extend first, then capture the adjacent cell.
        assert!(game.make_move(1, 1, 0));
        assert!(game.golden_move(1, 2, 0));
        assert_eq!(game.busy_fields(1), 3);
        assert_invariants(&game);
    }

    #[test]
    fn test_reindex_restores_areas_after_capture() {
        // Stealing the middle of a 3-cell line within a limit of 2 splits
        // the previous owner into two legal areas.
        let mut game = Game::new(5, 1, 2, 2).unwrap();
        assert!(game.make_move(2, 1, 0));
        assert!(game.make_move(2, 2, 0));
        assert!(game.make_move(2, 3, 0));
        assert!(game.make_move(1, 0, 0));

        assert!(game.golden_move(1, 2, 0));
        assert_eq!(game.player(2).unwrap().areas, 2);
        assert_eq!(game.player(1).unwrap().areas, 1);
        assert_invariants(&game);
    }
}
