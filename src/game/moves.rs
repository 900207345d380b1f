//! Ordinary move engine and the legality predicates shared with the golden
//! move.
//!
//! A successful move updates every per-player counter incrementally; the
//! only whole-board walk in the engine lives in the golden move's reindex.

use crate::game::{Game, PlayerId, NEIGHBOR_OFFSETS};

impl Game {
    /// Check whether any of the four neighbors of (x, y) is owned by
    /// `player`.
    pub(crate) fn has_own_neighbor(&self, x: i64, y: i64, player: PlayerId) -> bool {
        NEIGHBOR_OFFSETS
            .iter()
            .any(|&(dx, dy)| self.board.belongs_to(x + dx, y + dy, player))
    }

    /// Number of empty neighbors of (x, y) that have no neighbor owned by
    /// `player`: the cells that newly border the player's territory once
    /// the player holds (x, y).
    pub(crate) fn new_border_empty_count(&self, x: i64, y: i64, player: PlayerId) -> u64 {
        let mut count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if let Some(cell) = self.board.get(nx, ny) {
                if cell.is_empty() && !self.has_own_neighbor(nx, ny, player) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Check whether taking (x, y) would start a new area for a player
    /// already at the areas limit.
    pub(crate) fn would_exceed_areas_limit(
        &self,
        player_index: usize,
        x: i64,
        y: i64,
        player: PlayerId,
    ) -> bool {
        self.players[player_index].areas == self.max_areas
            && !self.has_own_neighbor(x, y, player)
    }

    /// Union the owned cell at (x, y) with its same-owner neighbors.
    ///
    /// Returns the number of unions that merged two previously disjoint
    /// sets; the caller subtracts it from the owner's area count.
    pub(crate) fn union_with_own_neighbors(&mut self, x: u32, y: u32) -> u32 {
        let cell_index = self.board.index(x, y);
        let Some(player) = self.board.cell(cell_index).owner() else {
            return 0;
        };

        let mut merged = 0;
        let (neighbors, count) = self.board.neighbors(x, y);
        for &(nx, ny) in &neighbors[..count as usize] {
            let neighbor_index = self.board.index(nx, ny);
            if self.board.cell(neighbor_index).owner() == Some(player)
                && self.board.union(cell_index, neighbor_index)
            {
                merged += 1;
            }
        }

        merged
    }

    /// Distinct owners among the four neighbors of (x, y), de-duplicated by
    /// player id.
    fn distinct_neighbor_owners(&self, x: u32, y: u32) -> ([PlayerId; 4], u8) {
        let mut owners = [0; 4];
        let mut count = 0u8;

        let (neighbors, neighbor_count) = self.board.neighbors(x, y);
        for &(nx, ny) in &neighbors[..neighbor_count as usize] {
            if let Some(owner) = self.board.owner_at(i64::from(nx), i64::from(ny)) {
                if !owners[..count as usize].contains(&owner) {
                    owners[count as usize] = owner;
                    count += 1;
                }
            }
        }

        (owners, count)
    }

    /// Place a piece of `player` on the empty cell (x, y).
    ///
    /// Returns `true` iff the move is legal and was applied. An illegal or
    /// malformed move returns `false` and leaves the game untouched.
    pub fn make_move(&mut self, player: PlayerId, x: u32, y: u32) -> bool {
        let Some(player_index) = self.player_index(player) else {
            return false;
        };
        let (xs, ys) = (i64::from(x), i64::from(y));
        if !self.board.in_bounds(xs, ys) {
            return false;
        }

        let cell_index = self.board.index(x, y);
        if !self.board.cell(cell_index).is_empty() {
            return false;
        }
        if self.would_exceed_areas_limit(player_index, xs, ys, player) {
            return false;
        }

        // Counted against the pre-placement board: the placed cell itself
        // must not act as an owned neighbor yet.
        let border_gain = self.new_border_empty_count(xs, ys, player);
        let (neighbor_owners, owner_count) = self.distinct_neighbor_owners(x, y);

        self.board.cell_mut(cell_index).owner = Some(player);
        self.occupied_fields += 1;
        self.players[player_index].occupied_fields += 1;

        // The new piece starts as an area of its own; every union that
        // merges collapses one area into another.
        self.players[player_index].areas += 1;
        let merged = self.union_with_own_neighbors(x, y);
        self.players[player_index].areas -= merged;

        self.players[player_index].border_empty_fields += border_gain;

        // (x, y) stopped being an empty border cell for every distinct
        // owner around it, the mover included.
        for &owner in &neighbor_owners[..owner_count as usize] {
            if let Some(owner_index) = self.player_index(owner) {
                self.players[owner_index].border_empty_fields -= 1;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{assert_invariants, Game};

    #[test]
    fn test_move_on_empty_cell() {
        let mut game = Game::new(3, 3, 2, 2).unwrap();
        assert!(game.make_move(1, 1, 1));
        assert_eq!(game.owner(1, 1), Some(1));
        assert_eq!(game.busy_fields(1), 1);
        assert_eq!(game.player(1).unwrap().areas, 1);
        assert_eq!(game.player(1).unwrap().border_empty_fields, 4);
        assert_invariants(&game);
    }

    #[test]
    fn test_move_rejects_invalid_arguments() {
        let mut game = Game::new(3, 3, 2, 2).unwrap();
        assert!(!game.make_move(0, 0, 0));
        assert!(!game.make_move(3, 0, 0));
        assert!(!game.make_move(1, 3, 0));
        assert!(!game.make_move(1, 0, 3));
        assert_eq!(game.occupied_total(), 0);
    }

    #[test]
    fn test_move_rejects_occupied_cell() {
        let mut game = Game::new(3, 3, 2, 2).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(!game.make_move(2, 0, 0));
        assert!(!game.make_move(1, 0, 0));
        assert_eq!(game.owner(0, 0), Some(1));
        assert_eq!(game.busy_fields(2), 0);
    }

    #[test]
    fn test_adjacent_moves_merge_areas() {
        let mut game = Game::new(5, 1, 1, 2).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(game.make_move(1, 2, 0));
        assert_eq!(game.player(1).unwrap().areas, 2);

        // Filling the gap merges both areas into one.
        assert!(game.make_move(1, 1, 0));
        assert_eq!(game.player(1).unwrap().areas, 1);
        assert_invariants(&game);
    }

    #[test]
    fn test_move_at_area_limit_needs_neighbor() {
        let mut game = Game::new(2, 2, 2, 1).unwrap();
        assert!(game.make_move(1, 0, 0));

        // A detached placement would start a second area.
        assert!(!game.make_move(1, 1, 1));
        assert_eq!(game.player(1).unwrap().areas, 1);
        assert_eq!(game.busy_fields(1), 1);

        // An adjacent placement extends the single area.
        assert!(game.make_move(1, 1, 0));
        assert_eq!(game.player(1).unwrap().areas, 1);
        assert_eq!(game.busy_fields(1), 2);
        assert_invariants(&game);
    }

    #[test]
    fn test_border_bookkeeping_between_players() {
        let mut game = Game::new(3, 1, 2, 2).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert_eq!(game.player(1).unwrap().border_empty_fields, 1);

        // Player 2 takes the cell bordering player 1's territory.
        assert!(game.make_move(2, 1, 0));
        assert_eq!(game.player(1).unwrap().border_empty_fields, 0);
        assert_eq!(game.player(2).unwrap().border_empty_fields, 1);
        assert_invariants(&game);
    }

    #[test]
    fn test_free_fields_at_limit_counts_border_only() {
        let mut game = Game::new(3, 1, 2, 1).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert_eq!(game.free_fields(1), 1);
        assert_eq!(game.free_fields(2), 2);
    }
}
