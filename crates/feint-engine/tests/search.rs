//! End-to-end properties of the fake-move minimax search.

use feint_core::{Board, Color, MoveGenerator, PieceMoves, Position, Square};
use feint_engine::{
    FakeBoard, MoveRecord, SearchConfig, Searcher, Snapshot, enumerate_moves, evaluate, shuffle,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const MIDDLEGAME_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

const SPARSE_FEN: &str = "4k3/8/3q4/8/2N5/8/PP6/4K3 b - - 0 1";

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn root_moves(board: &Board, side: Color) -> Vec<MoveRecord> {
    let mut snapshot = Snapshot::new();
    snapshot.scan(board, side);
    enumerate_moves(board, &snapshot, side, &PieceMoves).unwrap()
}

fn search(position: &Position, depth: u8, seed: Option<u64>) -> (Board, feint_engine::SearchResult) {
    let mut board = *position.board();
    let mut config = SearchConfig::default().with_depth(depth);
    config.seed = seed;
    let result = Searcher::new(&mut board, position.side_to_move(), &PieceMoves, config)
        .best_move()
        .unwrap();
    (board, result)
}

// ── Apply / undo ──────────────────────────────────────────────────────────────

#[test]
fn apply_undo_restores_every_square() {
    for fen in [MIDDLEGAME_FEN, SPARSE_FEN] {
        let position: Position = fen.parse().unwrap();
        let mut board = *position.board();
        let before = board;
        let moves: Vec<MoveRecord> = Color::ALL
            .into_iter()
            .flat_map(|side| root_moves(&board, side))
            .collect();
        assert!(!moves.is_empty());

        let mut fake = FakeBoard::new(&mut board);
        for mv in moves {
            fake.apply(mv);
            fake.undo();
            for square in Square::all() {
                assert_eq!(
                    fake.board().piece_at(square),
                    before.piece_at(square),
                    "{mv} left {square} changed in {fen}"
                );
            }
        }
        assert_eq!(fake.history_len(), 0);
    }
}

#[test]
fn random_walk_unwinds_to_start() {
    let position: Position = MIDDLEGAME_FEN.parse().unwrap();
    let mut board = *position.board();
    let before = board;
    let mut rng = StdRng::seed_from_u64(5);

    let mut fake = FakeBoard::new(&mut board);
    let mut side = position.side_to_move();
    for ply in 0..12 {
        let mut moves = root_moves(fake.board(), side);
        if moves.is_empty() {
            break;
        }
        shuffle(&mut moves, &mut rng);
        fake.apply(moves[0]);
        assert_eq!(fake.history_len(), ply + 1);
        side = !side;
    }
    while fake.history_len() > 0 {
        fake.undo();
    }
    assert_eq!(board, before);
}

// ── Search ────────────────────────────────────────────────────────────────────

#[test]
fn search_leaves_board_untouched() {
    for fen in [MIDDLEGAME_FEN, SPARSE_FEN] {
        let position: Position = fen.parse().unwrap();
        let (after, result) = search(&position, 3, Some(1));
        assert_eq!(&after, position.board(), "search mutated the board for {fen}");
        assert!(result.best_move.is_some());
    }
}

#[test]
fn best_move_is_a_root_move() {
    for seed in 0..5 {
        let position: Position = SPARSE_FEN.parse().unwrap();
        let (_, result) = search(&position, 2, Some(seed));
        let best = result.best_move.unwrap();
        let legal = root_moves(position.board(), position.side_to_move());
        assert!(
            legal
                .iter()
                .any(|m| m.origin == best.origin && m.destination == best.destination),
            "{best} is not a root move"
        );
        assert_eq!(best.piece_moved.color(), Color::Black);
    }
}

#[test]
fn unseeded_search_still_returns_a_root_move() {
    let position = Position::starting_position();
    let (_, result) = search(&position, 2, None);
    let best = result.best_move.unwrap();
    assert!(root_moves(position.board(), Color::White).contains(&MoveRecord { score: 0, ..best }));
}

#[test]
fn lone_rook_captures_adjacent_pawn() {
    let position: Position = "8/8/8/8/8/8/8/Rp6 w".parse().unwrap();
    for seed in 0..10 {
        let (_, result) = search(&position, 1, Some(seed));
        let best = result.best_move.unwrap();
        assert_eq!(best.origin, sq("a1"));
        assert_eq!(best.destination, sq("b1"), "seed {seed} picked {best}");
    }
}

#[test]
fn quiet_position_scores_zero_for_every_move() {
    // Kings only: no capture is possible within one ply.
    let position: Position = "7k/8/8/8/8/8/8/K7 w".parse().unwrap();
    let (_, result) = search(&position, 1, None);
    let best = result.best_move.unwrap();
    assert_eq!(best.score, 0);
    assert_eq!(result.score, 0);
    assert_eq!(best.origin, sq("a1"));
}

#[test]
fn queen_avoids_defended_pawn_at_depth_two() {
    // Taking d5 loses the queen to the e6 pawn; every other queen move keeps material level.
    let position: Position = "8/8/4p3/3p4/8/8/8/3Q4 w".parse().unwrap();
    for seed in 0..5 {
        let (_, result) = search(&position, 2, Some(seed));
        let best = result.best_move.unwrap();
        assert_ne!(best.destination, sq("d5"), "seed {seed} walked into the recapture");
        assert_eq!(result.score, 70);
    }
}

#[test]
fn side_to_move_without_pieces_has_no_best_move() {
    let position: Position = "8/8/8/8/8/8/8/K7 b".parse().unwrap();
    let (_, result) = search(&position, 3, Some(0));
    assert_eq!(result.best_move, None);
}

// ── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn evaluation_negates_when_sides_swap() {
    for fen in [MIDDLEGAME_FEN, SPARSE_FEN] {
        let position: Position = fen.parse().unwrap();
        let mut snapshot = Snapshot::new();
        snapshot.scan(position.board(), Color::White);
        let white = evaluate(&snapshot);
        snapshot.scan(position.board(), Color::Black);
        let black = evaluate(&snapshot);
        assert_eq!(white, -black);
    }
}

#[test]
fn custom_generator_is_honored() {
    /// Knights only.
    struct KnightsOnly;

    impl MoveGenerator for KnightsOnly {
        fn destinations(&self, board: &Board, piece: feint_core::Piece, from: Square) -> Vec<Square> {
            if piece.kind() == feint_core::PieceKind::Knight {
                PieceMoves.destinations(board, piece, from)
            } else {
                Vec::new()
            }
        }
    }

    let mut board = Board::starting_position();
    let config = SearchConfig::default().with_depth(2).with_seed(4);
    let result = Searcher::new(&mut board, Color::White, &KnightsOnly, config)
        .best_move()
        .unwrap();
    let best = result.best_move.unwrap();
    assert_eq!(best.piece_moved.kind(), feint_core::PieceKind::Knight);
}
