use rand::Rng;
use serde_json::{Value, json};
use tracing::{debug, trace};

use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{BOARD_SIZE, Camp, FieldState, GameMode, Move, Player, Pos};

/// Number of stones each side plays with (one full camp).
pub const STONES_PER_PLAYER: usize = 19;

/// Owns the board truth, the move counter and whose turn it is.
///
/// All external reads and writes go through the coordinate-checked
/// accessors; one "move" on the counter is a full White+Black round, so
/// the counter only advances after Black has moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    mode: Option<GameMode>,
    move_number: u64,
    moving_player: Player,
}

impl Engine {
    /// Fresh empty engine: no mode, move 1, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mode: None,
            move_number: 1,
            moving_player: Player::White,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Live write access for the UI collaborator and tests. Callers are
    /// trusted to keep the board in an enumerated state.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn move_number(&self) -> u64 {
        self.move_number
    }

    pub fn moving_player(&self) -> Player {
        self.moving_player
    }

    /// Clears the board and populates it for the given mode.
    pub fn setup(&mut self, mode: GameMode) {
        debug!(mode = mode.as_str(), "setting up board");
        self.board = Board::new();
        self.mode = Some(mode);

        match mode {
            GameMode::Classic => self.classic_setup(),
            GameMode::Random => self.random_setup(),
        }
    }

    /// Fills Black's camp and its point-mirrored White camp.
    fn classic_setup(&mut self) {
        for cell in Camp::Black.cells() {
            self.board.set(cell, FieldState::Black);
        }
        for cell in Camp::White.cells() {
            self.board.set(cell, FieldState::White);
        }
    }

    /// Places 19 Black and then 19 White stones uniformly, resampling
    /// any draw that lands on an occupied cell.
    fn random_setup(&mut self) {
        let mut rng = rand::rng();
        for stone in [FieldState::Black, FieldState::White] {
            for _ in 0..STONES_PER_PLAYER {
                loop {
                    let pos = Pos {
                        row: rng.random_range(0..BOARD_SIZE as u8),
                        col: rng.random_range(0..BOARD_SIZE as u8),
                    };
                    if self.board.get(pos) == FieldState::Empty {
                        self.board.set(pos, stone);
                        break;
                    }
                }
            }
        }
    }

    fn checked_pos(row: usize, col: usize) -> Result<Pos> {
        Pos::new(row, col).ok_or(Error::OutOfBounds { row, col })
    }

    pub fn read_field(&self, row: usize, col: usize) -> Result<FieldState> {
        Ok(self.board.get(Self::checked_pos(row, col)?))
    }

    pub fn set_field(&mut self, row: usize, col: usize, value: FieldState) -> Result<()> {
        let pos = Self::checked_pos(row, col)?;
        self.board.set(pos, value);
        Ok(())
    }

    /// Legal destinations from the given cell. Read-only: never mutates
    /// the board.
    pub fn moves(&self, row: usize, col: usize) -> Result<Vec<Pos>> {
        Ok(self.board.moves(Self::checked_pos(row, col)?))
    }

    /// Moves the stone and advances turn state. White's move passes the
    /// turn to Black; Black's move starts the next full round.
    pub fn apply_move(&mut self, mv: Move) {
        trace!(%mv, player = self.moving_player.as_str(), "applying move");
        self.board.apply(mv);

        match self.moving_player {
            Player::White => self.moving_player = Player::Black,
            Player::Black => {
                self.moving_player = Player::White;
                self.move_number += 1;
            }
        }
    }

    /// Serializes `{mode, move, moving_player, board}` into a flat map of
    /// the closed string tokens. An engine that was never set up dumps
    /// `mode: null`, which will not load back.
    pub fn dump_state(&self) -> Value {
        let board: Vec<Vec<&str>> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| {
                        self.board
                            .get(Pos {
                                row: row as u8,
                                col: col as u8,
                            })
                            .as_str()
                    })
                    .collect()
            })
            .collect();

        json!({
            "mode": self.mode.map(GameMode::as_str),
            "move": self.move_number,
            "moving_player": self.moving_player.as_str(),
            "board": board,
        })
    }

    /// Restores the engine from a state map produced by
    /// [`Engine::dump_state`].
    ///
    /// Every field is validated before any engine state changes, so a
    /// failed load leaves the engine exactly as it was.
    pub fn load_state(&mut self, state: &Value) -> Result<()> {
        let map = state
            .as_object()
            .ok_or_else(|| Error::corrupted("engine state is not a map"))?;

        let mode: GameMode = map
            .get("mode")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::corrupted("missing key `mode`"))?
            .parse()?;

        let move_number = map
            .get("move")
            .and_then(Value::as_u64)
            .filter(|n| *n >= 1)
            .ok_or_else(|| Error::corrupted("missing or non-positive key `move`"))?;

        let moving_player: Player = map
            .get("moving_player")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::corrupted("missing key `moving_player`"))?
            .parse()?;

        let rows = map
            .get("board")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::corrupted("missing key `board`"))?;
        if rows.len() != BOARD_SIZE {
            return Err(Error::corrupted("board does not have 16 rows"));
        }

        let mut board = Board::new();
        for (row, row_value) in rows.iter().enumerate() {
            let cells = row_value
                .as_array()
                .filter(|cells| cells.len() == BOARD_SIZE)
                .ok_or_else(|| Error::corrupted("board row does not have 16 cells"))?;
            for (col, cell) in cells.iter().enumerate() {
                let token = cell
                    .as_str()
                    .ok_or_else(|| Error::corrupted("board cell is not a string"))?;
                let pos = Pos {
                    row: row as u8,
                    col: col as u8,
                };
                board.set(pos, token.parse()?);
            }
        }

        debug!(mode = mode.as_str(), move_number, "loaded engine state");
        self.mode = Some(mode);
        self.move_number = move_number;
        self.moving_player = moving_player;
        self.board = board;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Pos {
        Pos::new(row, col).unwrap()
    }

    fn count_stones(engine: &Engine, stone: FieldState) -> usize {
        let mut count = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if engine.read_field(row, col).unwrap() == stone {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn fresh_engine_starts_at_move_one_with_white_to_play() {
        let engine = Engine::new();
        assert_eq!(engine.mode(), None);
        assert_eq!(engine.move_number(), 1);
        assert_eq!(engine.moving_player(), Player::White);
        assert_eq!(count_stones(&engine, FieldState::Empty), 256);
    }

    #[test]
    fn classic_setup_fills_exactly_the_camps() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let expected = match Camp::at(pos(row, col)) {
                    Some(Camp::Black) => FieldState::Black,
                    Some(Camp::White) => FieldState::White,
                    None => FieldState::Empty,
                };
                assert_eq!(engine.read_field(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn random_setup_places_nineteen_stones_per_side() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Random);

        assert_eq!(count_stones(&engine, FieldState::Black), STONES_PER_PLAYER);
        assert_eq!(count_stones(&engine, FieldState::White), STONES_PER_PLAYER);
    }

    #[test]
    fn set_and_read_field_round_trip() {
        let mut engine = Engine::new();

        engine.set_field(10, 10, FieldState::Black).unwrap();
        assert_eq!(engine.read_field(10, 10).unwrap(), FieldState::Black);

        engine.set_field(0, 0, FieldState::White).unwrap();
        assert_eq!(engine.read_field(0, 0).unwrap(), FieldState::White);
    }

    #[test]
    fn accessors_reject_out_of_range_coordinates() {
        let mut engine = Engine::new();

        assert_eq!(
            engine.read_field(16, 0),
            Err(Error::OutOfBounds { row: 16, col: 0 })
        );
        assert_eq!(
            engine.set_field(3, 99, FieldState::Black),
            Err(Error::OutOfBounds { row: 3, col: 99 })
        );
        assert!(engine.moves(0, 16).is_err());
    }

    #[test]
    fn moves_from_classic_corner_stone() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);

        let found = engine.moves(2, 2).unwrap();
        assert_eq!(found, vec![pos(2, 4), pos(3, 3), pos(4, 2)]);
    }

    #[test]
    fn moves_from_classic_edge_stone() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);

        let found = engine.moves(0, 4).unwrap();
        assert_eq!(found, vec![pos(0, 5), pos(1, 5), pos(2, 4)]);
    }

    #[test]
    fn moves_in_empty_centre_are_the_eight_neighbours() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);

        let found = engine.moves(8, 8).unwrap();
        assert_eq!(found.len(), 8);
        for dest in found {
            assert_eq!(pos(8, 8).chebyshev(dest), 1);
        }
    }

    #[test]
    fn apply_move_alternates_players_and_counts_full_rounds() {
        let mut engine = Engine::new();
        engine.set_field(1, 1, FieldState::White).unwrap();
        engine.set_field(14, 14, FieldState::Black).unwrap();

        engine.apply_move(Move {
            from: pos(1, 1),
            to: pos(2, 2),
        });
        assert_eq!(engine.moving_player(), Player::Black);
        assert_eq!(engine.move_number(), 1);

        engine.apply_move(Move {
            from: pos(14, 14),
            to: pos(13, 13),
        });
        assert_eq!(engine.moving_player(), Player::White);
        assert_eq!(engine.move_number(), 2);

        assert_eq!(engine.read_field(1, 1).unwrap(), FieldState::Empty);
        assert_eq!(engine.read_field(2, 2).unwrap(), FieldState::White);
    }

    #[test]
    fn dump_then_load_restores_an_identical_engine() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Random);
        engine.apply_move(Move {
            from: pos(0, 0),
            to: pos(8, 8),
        });

        let dumped = engine.dump_state();

        let mut restored = Engine::new();
        restored.load_state(&dumped).unwrap();
        assert_eq!(restored, engine);
    }

    #[test]
    fn load_rejects_missing_keys() {
        let state = serde_json::json!({
            "mode": "classic",
            "move": "aalmakota",
        });

        let mut engine = Engine::new();
        let err = engine.load_state(&state).unwrap_err();
        assert!(matches!(err, Error::CorruptedSave(_)));
    }

    #[test]
    fn load_rejects_unknown_board_tokens() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);
        let mut state = engine.dump_state();
        state["board"][0][0] = serde_json::json!("PURPLE");

        let err = engine.load_state(&state).unwrap_err();
        assert_eq!(err, Error::UnknownState("PURPLE".to_string()));
    }

    #[test]
    fn failed_load_leaves_the_engine_untouched() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);
        let before = engine.clone();

        let mut state = engine.dump_state();
        state["board"][7][7] = serde_json::json!("PURPLE");
        assert!(engine.load_state(&state).is_err());

        assert_eq!(engine, before);
    }
}
