//! Synchronous UCI engine loop.
//!
//! Each `go` runs one fixed-depth search to completion on the live position
//! before the next command is read.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use feint_core::{PieceMoves, Position};
use feint_engine::{SearchConfig, SearchError, SearchResult, Searcher};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;

/// The UCI engine, holding the live game position and search settings.
pub struct UciEngine {
    position: Position,
    config: SearchConfig,
    generator: PieceMoves,
}

impl UciEngine {
    /// Create a new engine with the starting position and default settings.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            position: Position::starting_position(),
            config,
            generator: PieceMoves,
        }
    }

    /// The live position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Run the UCI loop on stdin/stdout until `quit` or input closes.
    pub fn run(&mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop over arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.dispatch(cmd, &mut out)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            out.flush()?;
        }

        info!("feint shutting down");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.position = Position::starting_position(),
            Command::Position(position) => self.position = position,
            Command::Go(params) => self.handle_go(params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Display => {
                writeln!(out, "{}", self.position.board().pretty())?;
                writeln!(out, "Fen: {}", self.position)?;
            }
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name feint")?;
        writeln!(out, "id author the feint developers")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            self.config.max_depth,
            feint_engine::config::MAX_DEPTH
        )?;
        writeln!(out, "option name Seed type spin default 0 min 0 max 18446744073709551615")?;
        writeln!(out, "uciok")
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Depth(depth) => self.config.max_depth = depth,
            UciOption::Seed(seed) => self.config.seed = seed,
        }
        debug!(?option, "option set");
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, out: &mut W) -> Result<(), UciError> {
        let config = match params.depth {
            Some(depth) => self.config.with_depth(depth),
            None => self.config,
        };
        let side = self.position.side_to_move();

        let searched = {
            let board = self.position.board_mut();
            Searcher::new(board, side, &self.generator, config).best_move()
        };

        report_search(searched, out)?;
        Ok(())
    }
}

/// Print the outcome of one `go`. A failed search is logged and answered
/// with a null move so the session keeps running.
fn report_search<W: Write>(searched: Result<SearchResult, SearchError>, out: &mut W) -> io::Result<()> {
    match searched {
        Ok(result) => write_result(&result, out),
        Err(e) => {
            warn!(error = %e, "search failed");
            writeln!(out, "bestmove 0000")
        }
    }
}

fn write_result<W: Write>(result: &SearchResult, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "info depth {} score cp {} nodes {}",
        result.depth, result.score, result.nodes
    )?;
    match result.best_move {
        Some(mv) => writeln!(out, "bestmove {mv}"),
        None => writeln!(out, "bestmove 0000"),
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use feint_core::{Color, Position, Square};
    use feint_engine::{SearchConfig, SearchError};

    use super::{UciEngine, report_search};

    fn run(engine: &mut UciEngine, script: &str) -> String {
        let mut out = Vec::new();
        engine.run_with(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn handshake() {
        let output = run(&mut UciEngine::new(), "uci\nisready\n");
        assert!(output.contains("id name feint"));
        assert!(output.contains("option name Depth type spin default 3"));
        assert!(output.ends_with("uciok\nreadyok\n"));
    }

    #[test]
    fn go_reports_capture() {
        let mut engine = UciEngine::with_config(SearchConfig::default().with_seed(1));
        let output = run(&mut engine, "position fen 8/8/8/8/8/8/8/Rp6 w\ngo depth 1\n");
        assert!(output.contains("info depth 1 score cp 50"));
        assert!(output.contains("bestmove a1b1"));
    }

    #[test]
    fn go_leaves_position_unchanged() {
        let mut engine = UciEngine::with_config(SearchConfig::default().with_seed(3));
        let output = run(&mut engine, "position startpos moves e2e4\ngo depth 2\n");
        assert!(output.contains("bestmove "));
        let mut expected = Position::starting_position();
        expected.make_move_str("e2e4").unwrap();
        assert_eq!(*engine.position(), expected);
        assert_eq!(engine.position().side_to_move(), Color::Black);
    }

    #[test]
    fn no_pieces_means_null_move() {
        let output = run(&mut UciEngine::new(), "position fen 8/8/8/8/8/8/8/K7 b\ngo\n");
        assert!(output.contains("bestmove 0000"));
    }

    #[test]
    fn setoption_changes_depth() {
        let mut engine = UciEngine::with_config(SearchConfig::default().with_seed(5));
        let output = run(
            &mut engine,
            "setoption name Depth value 1\nposition fen 8/8/8/8/8/8/8/Rp6 w\ngo\n",
        );
        assert!(output.contains("info depth 1 "));
    }

    #[test]
    fn parse_errors_do_not_stop_the_loop() {
        let output = run(&mut UciEngine::new(), "position fen bogus\ngo depth 0\nisready\n");
        assert_eq!(output, "readyok\n");
    }

    #[test]
    fn quit_stops_reading() {
        let output = run(&mut UciEngine::new(), "quit\nisready\n");
        assert!(output.is_empty());
    }

    #[test]
    fn ucinewgame_resets_position() {
        let mut engine = UciEngine::new();
        run(&mut engine, "position startpos moves e2e4\nucinewgame\n");
        assert_eq!(*engine.position(), Position::starting_position());
    }

    #[test]
    fn display_prints_board_and_fen() {
        let output = run(&mut UciEngine::new(), "d\n");
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.contains("Fen: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"));
    }

    #[test]
    fn oversized_fen_rank_is_rejected_without_ending_session() {
        let fen = "8".repeat(40) + "/8/8/8/8/8/8/8 w";
        let output = run(&mut UciEngine::new(), &format!("position fen {fen}\nisready\n"));
        assert_eq!(output, "readyok\n");
    }

    #[test]
    fn failed_search_answers_null_move() {
        let square = Square::from_algebraic("e2").unwrap();
        let mut out = Vec::new();
        report_search(Err(SearchError::EmptyOrigin { square }), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bestmove 0000\n");
    }
}
