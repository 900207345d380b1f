//! Line-oriented batch driver.
//!
//! Every input line increments a line counter; blank and `#` lines are
//! skipped silently and malformed lines produce `ERROR <line>` on stderr.
//! The first accepted command must be `B width height players areas`,
//! acknowledged with `OK <line>` on stdout. After that the driver maps one
//! command line to one engine call until input is exhausted:
//!
//! | command | arguments    | output             |
//! |---------|--------------|--------------------|
//! | `m`     | player x y   | `1`/`0`            |
//! | `g`     | player x y   | `1`/`0`            |
//! | `b`     | player       | busy field count   |
//! | `f`     | player       | free field count   |
//! | `q`     | player       | `1`/`0`            |
//! | `p`     | —            | the board string   |

use std::io::{self, BufRead, Write};

use gamma::{Game, GameError};

use super::input::{parse_line, ParsedLine};
use super::CliError;

/// Execute the batch command against the process's standard streams.
///
/// # Errors
///
/// Returns an error on stream failures or when the game cannot be
/// allocated; protocol-level problems are reported as `ERROR` lines
/// instead.
pub(crate) fn execute() -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(stdin.lock(), stdout.lock(), stderr.lock())
}

/// Outcome of interpreting a line before the game exists.
enum Creation {
    Created(Game),
    Rejected,
}

/// Interpret a command line as the game-creation command.
fn try_create(command: char, args: &[u32]) -> Result<Creation, CliError> {
    if command != 'B' {
        return Ok(Creation::Rejected);
    }
    let &[width, height, players, areas] = args else {
        return Ok(Creation::Rejected);
    };

    match Game::new(width, height, players, areas) {
        Ok(game) => Ok(Creation::Created(game)),
        Err(GameError::InvalidArgument) => Ok(Creation::Rejected),
        Err(error @ GameError::OutOfMemory) => Err(CliError::from(error)),
    }
}

/// Run one game-phase command, printing its result.
///
/// Returns `Ok(false)` for unknown commands or argument-count mismatches.
fn run_command(
    game: &mut Game,
    command: char,
    args: &[u32],
    out: &mut impl Write,
) -> io::Result<bool> {
    match (command, args) {
        ('m', &[player, x, y]) => writeln!(out, "{}", u8::from(game.make_move(player, x, y)))?,
        ('g', &[player, x, y]) => writeln!(out, "{}", u8::from(game.golden_move(player, x, y)))?,
        ('b', &[player]) => writeln!(out, "{}", game.busy_fields(player))?,
        ('f', &[player]) => writeln!(out, "{}", game.free_fields(player))?,
        ('q', &[player]) => writeln!(out, "{}", u8::from(game.golden_possible(player)))?,
        ('p', &[]) => write!(out, "{}", game.board())?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Drive the protocol from `input` until it is exhausted.
fn run(
    input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<(), CliError> {
    let mut line_number: u64 = 0;
    let mut game: Option<Game> = None;

    for line in input.lines() {
        let line = line?;
        line_number += 1;

        let parsed = parse_line(&line);
        let (command, args) = match parsed {
            ParsedLine::Ignored => continue,
            ParsedLine::Invalid => {
                writeln!(err, "ERROR {line_number}")?;
                continue;
            }
            ParsedLine::Command { command, args } => (command, args),
        };

        if let Some(game) = game.as_mut() {
            if !run_command(game, command, &args, &mut out)? {
                writeln!(err, "ERROR {line_number}")?;
            }
        } else {
            match try_create(command, &args)? {
                Creation::Created(created) => {
                    game = Some(created);
                    writeln!(out, "OK {line_number}")?;
                }
                Creation::Rejected => writeln!(err, "ERROR {line_number}")?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_protocol(input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(input.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_creation_acknowledged_with_line_number() {
        let (out, err) = run_protocol("# setup\n\nB 4 2 2 3\n");
        assert_eq!(out, "OK 3\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_rejects_lines_before_creation() {
        let (out, err) = run_protocol("m 1 0 0\nB 0 2 2 3\nx\nB 4 2 2 3\n");
        assert_eq!(out, "OK 4\n");
        assert_eq!(err, "ERROR 1\nERROR 2\nERROR 3\n");
    }

    #[test]
    fn test_moves_and_queries() {
        let (out, err) = run_protocol(
            "B 4 2 2 3\nm 1 0 0\nm 2 3 1\nm 1 1 0\nb 1\nb 2\nf 1\np\n",
        );
        assert_eq!(out, "OK 1\n1\n1\n1\n2\n1\n5\n...2\n11..\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_illegal_move_prints_zero() {
        let (out, err) = run_protocol("B 2 2 2 1\nm 1 0 0\nm 1 1 1\n");
        assert_eq!(out, "OK 1\n1\n0\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_golden_commands() {
        let (out, err) = run_protocol("B 3 1 2 1\nm 1 0 0\nm 2 1 0\nq 1\ng 1 1 0\nq 1\nb 2\n");
        assert_eq!(out, "OK 1\n1\n1\n1\n1\n0\n0\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_arity_mismatch_is_protocol_error() {
        let (out, err) = run_protocol("B 3 3 2 2\nm 1 0\np 1\nz 1\n");
        assert_eq!(out, "OK 1\n");
        assert_eq!(err, "ERROR 2\nERROR 3\nERROR 4\n");
    }

    #[test]
    fn test_second_creation_line_is_a_plain_command_error() {
        let (out, err) = run_protocol("B 3 3 2 2\nB 3 3 2 2\n");
        assert_eq!(out, "OK 1\n");
        assert_eq!(err, "ERROR 2\n");
    }
}
