//! UCI command parsing.

use std::str::FromStr;

use feint_core::Position;
use feint_engine::config::MAX_DEPTH;

use crate::error::UciError;

/// Parameters for the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth instead of the configured one.
    pub depth: Option<u8>,
}

/// An option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// Default search depth in plies.
    Depth(u8),
    /// Shuffle seed; `None` returns to entropy-seeded searches.
    Seed(Option<u64>),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset to the starting position.
    UciNewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(Position),
    /// `go` -- search the current position.
    Go(GoParams),
    /// `setoption name <id> value <x>`.
    SetOption(UciOption),
    /// `d` -- print the current board.
    Display,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command, ignored by the engine.
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "d" => Ok(Command::Display),
        "position" => parse_position(rest),
        "go" => parse_go(rest),
        "setoption" => parse_setoption(rest),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// The FEN may be abbreviated to its placement and color fields.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let (mut position, rest) = match tokens.split_first() {
        Some((&"startpos", rest)) => (Position::starting_position(), rest),
        Some((&"fen", rest)) => {
            let end = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
            let position: Position = rest[..end].join(" ").parse()?;
            (position, &rest[end..])
        }
        _ => return Err(UciError::MalformedPosition),
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for text in moves {
            position.make_move_str(text)?;
        }
    }

    Ok(Command::Position(position))
}

/// Parse the `go` command arguments. Only `depth` is honored; other tokens
/// (clock fields, `infinite`, ...) are skipped since the search is fixed-depth.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_depth(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <id> value <x>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let name_at = tokens.iter().position(|&t| t == "name");
    let value_at = tokens.iter().position(|&t| t == "value");
    let Some(name_at) = name_at else {
        return Err(UciError::MissingValue {
            param: "name".to_string(),
        });
    };

    let name_end = value_at.unwrap_or(tokens.len());
    let name = tokens.get(name_at + 1..name_end).unwrap_or_default().join(" ");
    let value = value_at.and_then(|at| tokens.get(at + 1));

    match name.to_ascii_lowercase().as_str() {
        "depth" => Ok(Command::SetOption(UciOption::Depth(parse_depth(value, "Depth")?))),
        "seed" => {
            let seed: u64 = parse_value(value, "Seed")?;
            Ok(Command::SetOption(UciOption::Seed((seed != 0).then_some(seed))))
        }
        _ => Err(UciError::UnknownOption { name }),
    }
}

/// Parse a depth in `1..=MAX_DEPTH`.
fn parse_depth(token: Option<&&str>, param: &str) -> Result<u8, UciError> {
    let depth: u8 = parse_value(token, param)?;
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(UciError::InvalidValue {
            param: param.to_string(),
            value: depth.to_string(),
        });
    }
    Ok(depth)
}

/// Parse a value token.
fn parse_value<T: FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
