use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::Board;
use crate::bots::Bot;
use crate::engine::Engine;
use crate::types::{BOARD_SIZE, FieldState, Move, Player, Pos};

const DEFAULT_TIMEOUT_SECS: u64 = 5;
const MAX_SEARCH_DEPTH: u8 = 32;

/// Static evaluation from White's point of view; higher is better for
/// White.
///
/// Each side's stones are charged their Chebyshev distance to the corner
/// diagonally opposite their home camp: (0, 0) for White, (15, 15) for
/// Black. The advantage is Black's remaining total minus White's.
pub(crate) fn white_advantage(board: &Board) -> i32 {
    let white_corner = Pos { row: 0, col: 0 };
    let black_corner = Pos { row: 15, col: 15 };

    let mut advantage = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos {
                row: row as u8,
                col: col as u8,
            };
            match board.get(pos) {
                FieldState::White => advantage -= pos.chebyshev(white_corner),
                FieldState::Black => advantage += pos.chebyshev(black_corner),
                FieldState::Empty => {}
            }
        }
    }
    advantage
}

/// Evaluation from the side to move's perspective. This is the one sign
/// convention used everywhere in the search: leaves report their own
/// perspective and every level negates the child's score on return.
fn evaluate(board: &Board, side: Player) -> i32 {
    match side {
        Player::White => white_advantage(board),
        Player::Black => -white_advantage(board),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchResult {
    Complete(Option<Move>, i32),
    TimedOut,
}

/// Full-width negamax with deadline-bounded iterative deepening.
///
/// The search runs over a privately-owned scratch copy of the board using
/// apply/undo, so the live board is never touched. Each depth either
/// completes in full or is abandoned in full; an abandoned depth leaves
/// the previous depth's move standing.
struct Searcher {
    start_time: Instant,
    timeout: Duration,
    timed_out: bool,
}

impl Searcher {
    fn new(timeout: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            timeout,
            timed_out: false,
        }
    }

    /// Iteratively deepens until the deadline expires, returning the move
    /// of the last fully completed depth. Depth 1 always completes.
    fn search(&mut self, board: &Board, side: Player, max_depth: u8) -> Option<Move> {
        self.start_time = Instant::now();
        self.timed_out = false;

        let moves = board.player_moves(side);
        if moves.is_empty() {
            return None;
        }
        if moves.len() == 1 {
            return Some(moves[0]);
        }

        let mut scratch = *board;
        let mut best_move = moves[0];

        for depth in 1..=max_depth {
            match self.negamax(&mut scratch, side, depth, depth) {
                SearchResult::Complete(Some(mv), score) => {
                    debug!(depth, score, %mv, "search depth completed");
                    best_move = mv;
                }
                SearchResult::Complete(None, _) | SearchResult::TimedOut => break,
            }
        }

        debug_assert_eq!(scratch, *board, "search must leave the scratch board restored");
        if self.timed_out {
            debug!("deadline reached, keeping the last completed depth");
        }
        Some(best_move)
    }

    fn negamax(&mut self, board: &mut Board, side: Player, depth: u8, root_depth: u8) -> SearchResult {
        // Timeout checks are suppressed for the depth-1 root search so the
        // first depth is always carried to completion.
        if root_depth > 1 && self.start_time.elapsed() >= self.timeout {
            self.timed_out = true;
            return SearchResult::TimedOut;
        }

        if depth == 0 {
            return SearchResult::Complete(None, evaluate(board, side));
        }

        let moves = board.player_moves(side);
        if moves.is_empty() {
            return SearchResult::Complete(None, evaluate(board, side));
        }

        let mut best_move = moves[0];
        let mut best_score = i32::MIN;

        for mv in moves {
            board.apply(mv);
            let result = self.negamax(board, side.enemy(), depth - 1, root_depth);
            board.undo(mv);

            match result {
                SearchResult::TimedOut => return SearchResult::TimedOut,
                SearchResult::Complete(_, score) => {
                    let score = -score;
                    if score > best_score {
                        best_score = score;
                        best_move = mv;
                    }
                }
            }
        }

        SearchResult::Complete(Some(best_move), best_score)
    }
}

/// The strongest bot: minimax over the full move width, deepened one ply
/// at a time inside a wall-clock budget.
pub struct MinimaxBot {
    color: Player,
    timeout: Duration,
    max_depth: u8,
}

impl MinimaxBot {
    pub fn new(color: Player) -> Self {
        Self::with_timeout(color, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(color: Player, timeout: Duration) -> Self {
        Self {
            color,
            timeout,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }
}

impl Bot for MinimaxBot {
    fn choose_move(&mut self, engine: &Engine) -> Option<Move> {
        let mut searcher = Searcher::new(self.timeout);
        searcher.search(engine.board(), self.color, self.max_depth)
    }
}
