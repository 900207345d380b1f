//! End-of-game summary formatting.

use gamma::Game;
use serde::Serialize;

/// JSON-serializable game summary.
#[derive(Debug, Serialize)]
pub(crate) struct JsonGameSummary {
    /// Board width in cells.
    pub(crate) width: u32,
    /// Board height in cells.
    pub(crate) height: u32,
    /// Total number of occupied cells.
    pub(crate) occupied_fields: u64,
    /// Final board rendering, one row per line.
    pub(crate) board: String,
    /// Per-player results, in player-id order.
    pub(crate) players: Vec<JsonPlayerSummary>,
}

/// JSON-serializable per-player summary.
#[derive(Debug, Serialize)]
pub(crate) struct JsonPlayerSummary {
    /// Player id.
    pub(crate) id: u32,
    /// Number of cells the player owns.
    pub(crate) busy_fields: u64,
    /// Number of disjoint areas the player's cells form.
    pub(crate) areas: u32,
    /// Whether the player spent their golden move.
    pub(crate) golden_move_used: bool,
}

impl JsonGameSummary {
    /// Capture a finished game.
    pub(crate) fn from_game(game: &Game) -> Self {
        Self {
            width: game.width(),
            height: game.height(),
            occupied_fields: game.occupied_total(),
            board: game.board(),
            players: (1..=game.players_number())
                .filter_map(|id| {
                    game.player(id).map(|state| JsonPlayerSummary {
                        id,
                        busy_fields: state.occupied_fields,
                        areas: state.areas,
                        golden_move_used: state.golden_move_done,
                    })
                })
                .collect(),
        }
    }
}

/// Format a finished game as human-readable text: the board followed by one
/// line per player, best score first.
pub(crate) fn format_text(game: &Game) -> String {
    let mut output = String::new();
    output.push_str(&game.board());
    output.push('\n');

    let mut standings: Vec<(u32, u64)> = (1..=game.players_number())
        .map(|id| (id, game.busy_fields(id)))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (id, busy) in standings {
        output.push_str(&format!("Player {id}: {busy} fields"));
        if game.player(id).is_some_and(|state| state.golden_move_done) {
            output.push_str(" (golden move used)");
        }
        output.push('\n');
    }

    output
}
