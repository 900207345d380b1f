//! Interactive driver: cursor-driven play in the terminal.
//!
//! Arrow keys move the cursor, space places a piece, `g` attempts the
//! golden move, `c` skips the turn and `q` (or Ctrl-D) ends the game. A
//! failed move keeps the current player. After each completed turn the
//! next player is the first in cyclic order that can still act (free
//! fields left or a golden move possible); the game ends when no player
//! can. The final board and a per-player summary are printed after the
//! terminal is restored.

// Interactive rendering clamps coordinates for display.
#![allow(clippy::cast_possible_truncation)]

use std::io::stdout;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gamma::{Game, PlayerId};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use super::output::{format_text, JsonGameSummary};
use super::{CliError, SummaryFormat};

/// Display colors for the first few players; higher ids reuse white.
const PLAYER_COLORS: [Color; 8] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightBlue,
];

fn player_color(player: PlayerId) -> Color {
    let index = (player as usize).saturating_sub(1);
    PLAYER_COLORS.get(index).copied().unwrap_or(Color::White)
}

/// Execute the interactive command.
///
/// # Errors
///
/// Returns an error if the game cannot be created or the terminal fails.
pub(crate) fn execute(
    width: u32,
    height: u32,
    players: u32,
    areas: u32,
    format: SummaryFormat,
) -> Result<(), CliError> {
    let game = Game::new(width, height, players, areas)?;
    let game = run_tui(game)?;

    match format {
        SummaryFormat::Text => print!("{}", format_text(&game)),
        SummaryFormat::Json => {
            let summary = JsonGameSummary::from_game(&game);
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// App state for the TUI.
struct App {
    game: Game,
    cursor_x: u32,
    cursor_y: u32,
    current_player: PlayerId,
    finished: bool,
}

impl App {
    fn new(game: Game) -> Self {
        Self {
            game,
            cursor_x: 0,
            cursor_y: 0,
            current_player: 1,
            finished: false,
        }
    }

    /// Whether `player` can still take a turn.
    fn can_act(&self, player: PlayerId) -> bool {
        self.game.free_fields(player) > 0 || self.game.golden_possible(player)
    }

    /// Hand the turn to the first player in cyclic order able to act;
    /// finishes the game when nobody can.
    fn advance_turn(&mut self) {
        let players = self.game.players_number();
        let mut candidate = self.current_player;
        for _ in 0..players {
            candidate = candidate % players + 1;
            if self.can_act(candidate) {
                self.current_player = candidate;
                return;
            }
        }
        self.finished = true;
    }

    fn move_cursor(&mut self, dx: i64, dy: i64) {
        let x = i64::from(self.cursor_x) + dx;
        let y = i64::from(self.cursor_y) + dy;
        if x >= 0 && x < i64::from(self.game.width()) {
            self.cursor_x = x as u32;
        }
        if y >= 0 && y < i64::from(self.game.height()) {
            self.cursor_y = y as u32;
        }
    }

    fn try_move(&mut self) {
        if self
            .game
            .make_move(self.current_player, self.cursor_x, self.cursor_y)
        {
            self.advance_turn();
        }
    }

    fn try_golden(&mut self) {
        if self
            .game
            .golden_move(self.current_player, self.cursor_x, self.cursor_y)
        {
            self.advance_turn();
        }
    }

    fn skip(&mut self) {
        self.advance_turn();
    }
}

fn run_tui(game: Game) -> Result<Game, CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(game);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal before reporting anything.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result.map(|()| app.game)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|frame| ui(frame, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if app.finished {
            return Ok(());
        }

        if let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => app.move_cursor(0, 1),
                KeyCode::Down => app.move_cursor(0, -1),
                KeyCode::Right => app.move_cursor(1, 0),
                KeyCode::Left => app.move_cursor(-1, 0),
                KeyCode::Char(' ') => app.try_move(),
                KeyCode::Char('g' | 'G') => app.try_golden(),
                KeyCode::Char('c' | 'C') => app.skip(),
                _ => {}
            }
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(7)])
        .split(frame.area());

    render_board(frame, chunks[0], app);
    render_status(frame, chunks[1], app);
}

fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let (first_width, other_width) = app.game.column_widths();
    let mut lines: Vec<Line> = Vec::new();

    for y in (0..app.game.height()).rev() {
        let mut spans = Vec::new();
        for x in 0..app.game.width() {
            let field_width = if x == 0 { first_width } else { other_width };
            let mut cell = String::new();
            let owner = app
                .game
                .render_cell(&mut cell, x, y, field_width)
                .and_then(|(_, owner)| owner);

            let mut style = owner.map_or(
                Style::default().fg(Color::DarkGray),
                |id| Style::default().fg(player_color(id)),
            );
            if (x, y) == (app.cursor_x, app.cursor_y) && !app.finished {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    frame.render_widget(board, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let player = app.current_player;
    let color = player_color(player);

    let golden = if app.game.golden_possible(player) {
        "available"
    } else {
        "unavailable"
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Player {player}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Busy fields: {}", app.game.busy_fields(player))),
        Line::from(format!("Free fields: {}", app.game.free_fields(player))),
        Line::from(format!("Golden move: {golden}")),
        Line::from("[arrows] Cursor  [space] Place  [g] Golden  [c] Skip  [q] Quit"),
    ];

    let status = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Turn "));
    frame.render_widget(status, area);
}
