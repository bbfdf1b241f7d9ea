use serde_json::Value;

use crate::board::Board;
use crate::engine::Engine;
use crate::error::Result;
use crate::types::{Camp, FieldState, Move, Player, Pos};

/// Rules layer between the engine and its users.
///
/// The engine performs raw board operations; this wrapper speaks the
/// player-facing language: textual move notation, camp membership and win
/// detection. Illegal or malformed moves come back as `false` — rejection
/// is an expected outcome, not an error.
pub struct GameInterface {
    engine: Engine,
}

impl GameInterface {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn get_board(&self) -> &Board {
        self.engine.board()
    }

    /// Sets the game up from a user-supplied mode string.
    pub fn setup(&mut self, mode: &str) -> Result<()> {
        self.engine.setup(mode.parse()?);
        Ok(())
    }

    pub fn current_move(&self) -> u64 {
        self.engine.move_number()
    }

    pub fn moving_player(&self) -> Player {
        self.engine.moving_player()
    }

    /// Parses and plays one move in `RC-RC` notation.
    ///
    /// Each letter `A`..`P` (either case) maps to an index `0..15`, row
    /// first. Returns `false` on malformed notation, on a source that
    /// does not hold the moving player's stone, and on a destination the
    /// move generator cannot reach; `true` means the move was applied and
    /// the turn advanced.
    pub fn try_move(&mut self, notation: &str) -> bool {
        let Some(mv) = parse_notation(notation) else {
            return false;
        };
        if !self.is_legal(mv) {
            return false;
        }
        self.engine.apply_move(mv);
        true
    }

    fn is_legal(&self, mv: Move) -> bool {
        let board = self.engine.board();
        if board.get(mv.from) != self.engine.moving_player().stone() {
            return false;
        }
        board.moves(mv.from).contains(&mv.to)
    }

    /// Which camp, if any, the cell belongs to. Out-of-range coordinates
    /// belong to no camp.
    pub fn in_camp(&self, row: usize, col: usize) -> Option<Camp> {
        Camp::at(Pos::new(row, col)?)
    }

    /// The winner, if the game is over.
    ///
    /// A player wins once the opponent's home camp is completely occupied
    /// and at least one occupant is the winner's own stone. A camp filled
    /// entirely by its rightful owner is not a win.
    pub fn get_winner(&self) -> Option<Player> {
        let board = self.engine.board();

        for invader in [Player::White, Player::Black] {
            let camp = invader.target_camp();
            let mut all_full = true;
            let mut enemy_in = false;

            for cell in camp.cells() {
                match board.get(cell) {
                    FieldState::Empty => all_full = false,
                    state if state == invader.stone() => enemy_in = true,
                    _ => {}
                }
            }

            if all_full && enemy_in {
                return Some(invader);
            }
        }

        None
    }

    pub fn dump_game_state(&self) -> Value {
        self.engine.dump_state()
    }
}

fn parse_label(byte: u8) -> Option<u8> {
    match byte {
        b'a'..=b'p' => Some(byte - b'a'),
        b'A'..=b'P' => Some(byte - b'A'),
        _ => None,
    }
}

/// Parses the 5-character `RC-RC` notation into a [`Move`].
fn parse_notation(notation: &str) -> Option<Move> {
    let bytes = notation.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'-' {
        return None;
    }

    Some(Move {
        from: Pos {
            row: parse_label(bytes[0])?,
            col: parse_label(bytes[1])?,
        },
        to: Pos {
            row: parse_label(bytes[3])?,
            col: parse_label(bytes[4])?,
        },
    })
}
