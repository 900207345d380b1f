//! Engine invariants: consistency checks that detect bookkeeping bugs.
//!
//! The move engines maintain every statistic incrementally; these checks
//! recompute the same statistics from the raw cell owners alone (connected
//! components by explicit BFS, not through the union-find) and report any
//! divergence. They should never trigger in a correct engine; the test
//! suites run them after generated operation sequences.

// Grid indices fit usize: the arena exists, so the conversions are exact.
#![allow(clippy::cast_possible_truncation)]

use std::fmt;

use crate::game::{Game, NEIGHBOR_OFFSETS};

/// Invariant violation report.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Statistics recomputed from the raw board.
struct Recount {
    occupied: Vec<u64>,
    border: Vec<u64>,
    areas: Vec<u32>,
    total: u64,
}

fn recount(game: &Game) -> Recount {
    let players = game.players_number() as usize;
    let width = game.width();
    let height = game.height();

    let mut counts = Recount {
        occupied: vec![0; players],
        border: vec![0; players],
        areas: vec![0; players],
        total: 0,
    };

    for y in 0..height {
        for x in 0..width {
            if let Some(owner) = game.owner(x, y) {
                counts.occupied[(owner - 1) as usize] += 1;
                counts.total += 1;
            } else {
                // Empty cell: border cell of each distinct neighbor owner.
                let mut owners = [0u32; 4];
                let mut owner_count = 0;
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let (nx, ny) = (i64::from(x) + dx, i64::from(y) + dy);
                    if let Some(owner) = game.board.owner_at(nx, ny) {
                        if !owners[..owner_count].contains(&owner) {
                            owners[owner_count] = owner;
                            owner_count += 1;
                        }
                    }
                }
                for &owner in &owners[..owner_count] {
                    counts.border[(owner - 1) as usize] += 1;
                }
            }
        }
    }

    // Monochromatic 4-connected components by BFS, independent of the
    // union-find links.
    let mut visited = vec![false; width as usize * height as usize];
    let index_of = |x: u32, y: u32| y as usize * width as usize + x as usize;

    for y in 0..height {
        for x in 0..width {
            let Some(owner) = game.owner(x, y) else {
                continue;
            };
            if visited[index_of(x, y)] {
                continue;
            }

            counts.areas[(owner - 1) as usize] += 1;
            let mut stack = vec![(x, y)];
            visited[index_of(x, y)] = true;
            while let Some((cx, cy)) = stack.pop() {
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let (nx, ny) = (i64::from(cx) + dx, i64::from(cy) + dy);
                    if game.board.owner_at(nx, ny) != Some(owner) {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    if !visited[index_of(nx, ny)] {
                        visited[index_of(nx, ny)] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }

    counts
}

/// Check all engine invariants.
///
/// Returns the violations found, empty if every maintained counter matches
/// its recomputed value and every player respects the areas limit.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let counts = recount(game);

    for player in 1..=game.players_number() {
        let index = (player - 1) as usize;
        let Some(state) = game.player(player) else {
            continue;
        };

        if state.occupied_fields != counts.occupied[index] {
            violations.push(InvariantViolation {
                message: format!(
                    "player {player} occupied_fields {} but the board holds {}",
                    state.occupied_fields, counts.occupied[index]
                ),
            });
        }

        if state.areas != counts.areas[index] {
            violations.push(InvariantViolation {
                message: format!(
                    "player {player} areas {} but BFS found {}",
                    state.areas, counts.areas[index]
                ),
            });
        }

        if state.border_empty_fields != counts.border[index] {
            violations.push(InvariantViolation {
                message: format!(
                    "player {player} border_empty_fields {} but the board holds {}",
                    state.border_empty_fields, counts.border[index]
                ),
            });
        }

        if state.areas > game.max_areas() {
            violations.push(InvariantViolation {
                message: format!(
                    "player {player} has {} areas, above the limit {}",
                    state.areas,
                    game.max_areas()
                ),
            });
        }
    }

    if counts.total != game.occupied_total() {
        violations.push(InvariantViolation {
            message: format!(
                "occupied total {} but the board holds {}",
                game.occupied_total(),
                counts.total
            ),
        });
    }

    violations
}

/// Panic with a readable report when any invariant is violated.
///
/// Intended for tests and debug assertions around operation sequences.
pub fn assert_invariants(game: &Game) {
    let violations = check_invariants(game);
    assert!(
        violations.is_empty(),
        "engine invariants violated:\n{}",
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_game_has_no_violations() {
        let game = Game::new(6, 4, 3, 2).unwrap();
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_violations_after_moves_are_empty() {
        let mut game = Game::new(4, 4, 2, 3).unwrap();
        assert!(game.make_move(1, 0, 0));
        assert!(game.make_move(2, 1, 1));
        assert!(game.make_move(1, 2, 2));
        assert!(game.make_move(2, 1, 2));
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_detects_corrupted_counter() {
        let mut game = Game::new(3, 3, 2, 2).unwrap();
        assert!(game.make_move(1, 1, 1));

        game.players[0].occupied_fields = 7;
        let violations = check_invariants(&game);
        assert!(!violations.is_empty());
        assert!(violations[0].message.contains("occupied_fields"));
    }

    #[test]
    #[should_panic(expected = "engine invariants violated")]
    fn test_assert_panics_on_violation() {
        let mut game = Game::new(3, 3, 2, 2).unwrap();
        assert!(game.make_move(1, 1, 1));
        game.players[0].areas = 9;
        assert_invariants(&game);
    }
}
