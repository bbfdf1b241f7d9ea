use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Board side length. Rows and columns are both in `0..BOARD_SIZE`.
pub const BOARD_SIZE: usize = 16;

/// Row lengths of the 19-cell triangular camp, from its corner outward.
pub const CAMP_ROW_LENGTHS: [usize; 5] = [5, 5, 4, 3, 2];

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldState {
    Empty,
    White,
    Black,
}

impl FieldState {
    /// Closed token mapping used by the persisted save format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::White => "WHITE",
            Self::Black => "BLACK",
        }
    }
}

impl FromStr for FieldState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "EMPTY" => Ok(Self::Empty),
            "WHITE" => Ok(Self::White),
            "BLACK" => Ok(Self::Black),
            other => Err(Error::UnknownState(other.to_string())),
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn enemy(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The stone this player moves.
    pub fn stone(self) -> FieldState {
        match self {
            Self::White => FieldState::White,
            Self::Black => FieldState::Black,
        }
    }

    /// The camp this player starts in.
    pub fn home_camp(self) -> Camp {
        match self {
            Self::White => Camp::White,
            Self::Black => Camp::Black,
        }
    }

    /// The enemy camp this player is trying to occupy.
    pub fn target_camp(self) -> Camp {
        self.enemy().home_camp()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "WHITE",
            Self::Black => "BLACK",
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "WHITE" => Ok(Self::White),
            "BLACK" => Ok(Self::Black),
            other => Err(Error::UnknownState(other.to_string())),
        }
    }
}

/// One of the two fixed 19-cell triangular home regions.
///
/// Camps are pure geometry derived from [`CAMP_ROW_LENGTHS`]: Black's camp
/// is anchored at (0,0), White's is the point mirror anchored at (15,15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Camp {
    White,
    Black,
}

impl Camp {
    /// Which camp, if any, the given cell belongs to.
    pub fn at(pos: Pos) -> Option<Camp> {
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row < CAMP_ROW_LENGTHS.len() && col < CAMP_ROW_LENGTHS[row] {
            return Some(Camp::Black);
        }
        let (mrow, mcol) = (BOARD_SIZE - 1 - row, BOARD_SIZE - 1 - col);
        if mrow < CAMP_ROW_LENGTHS.len() && mcol < CAMP_ROW_LENGTHS[mrow] {
            return Some(Camp::White);
        }
        None
    }

    /// Iterates over the 19 cells of this camp.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        CAMP_ROW_LENGTHS
            .iter()
            .enumerate()
            .flat_map(move |(row, &len)| {
                (0..len).map(move |col| match self {
                    Camp::Black => Pos {
                        row: row as u8,
                        col: col as u8,
                    },
                    Camp::White => Pos {
                        row: (BOARD_SIZE - 1 - row) as u8,
                        col: (BOARD_SIZE - 1 - col) as u8,
                    },
                })
            })
    }
}

/// How the board gets populated at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    Classic,
    Random,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Random => "random",
        }
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "classic" => Ok(Self::Classic),
            "random" => Ok(Self::Random),
            other => Err(Error::UnsupportedMode(other.to_string())),
        }
    }
}

/// Persisted tag identifying what controls a player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerKind {
    Human,
    RandomBot,
    ForwardBot,
    AggressiveBot,
    MinimaxBot,
}

impl PlayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::RandomBot => "RANDOM_BOT",
            Self::ForwardBot => "FORWARD_BOT",
            Self::AggressiveBot => "AGGRESSIVE_BOT",
            Self::MinimaxBot => "MINIMAX_BOT",
        }
    }
}

impl FromStr for PlayerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "HUMAN" => Ok(Self::Human),
            "RANDOM_BOT" => Ok(Self::RandomBot),
            "FORWARD_BOT" => Ok(Self::ForwardBot),
            "AGGRESSIVE_BOT" => Ok(Self::AggressiveBot),
            "MINIMAX_BOT" => Ok(Self::MinimaxBot),
            other => Err(Error::UnsupportedPlayerType(other.to_string())),
        }
    }
}

/// A board coordinate. Construction is bounds-checked, so a `Pos` is
/// always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Option<Pos> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Pos {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The cell `(row + dr, col + dc)`, or `None` when it falls off the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Pos {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Chebyshev distance: the number of king-style single steps between
    /// two cells.
    pub fn chebyshev(self, other: Pos) -> i32 {
        let dr = (self.row as i32 - other.row as i32).abs();
        let dc = (self.col as i32 - other.col as i32).abs();
        dr.max(dc)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A proposed move: source and destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Pos {
        Pos::new(row, col).unwrap()
    }

    #[test]
    fn camp_membership_matches_triangle_geometry() {
        assert_eq!(Camp::at(pos(0, 0)), Some(Camp::Black));
        assert_eq!(Camp::at(pos(1, 4)), Some(Camp::Black));
        assert_eq!(Camp::at(pos(1, 5)), None);
        assert_eq!(Camp::at(pos(4, 1)), Some(Camp::Black));
        assert_eq!(Camp::at(pos(4, 2)), None);
        assert_eq!(Camp::at(pos(15, 15)), Some(Camp::White));
        assert_eq!(Camp::at(pos(14, 14)), Some(Camp::White));
        assert_eq!(Camp::at(pos(11, 14)), Some(Camp::White));
        assert_eq!(Camp::at(pos(8, 8)), None);
    }

    #[test]
    fn each_camp_has_nineteen_cells_and_they_self_report() {
        for camp in [Camp::Black, Camp::White] {
            let cells: Vec<Pos> = camp.cells().collect();
            assert_eq!(cells.len(), 19);
            for cell in cells {
                assert_eq!(Camp::at(cell), Some(camp));
            }
        }
    }

    #[test]
    fn closed_enumerations_round_trip_and_reject_unknown_tokens() {
        for state in [FieldState::Empty, FieldState::White, FieldState::Black] {
            assert_eq!(state.as_str().parse::<FieldState>().unwrap(), state);
        }
        for player in [Player::White, Player::Black] {
            assert_eq!(player.as_str().parse::<Player>().unwrap(), player);
        }
        for mode in [GameMode::Classic, GameMode::Random] {
            assert_eq!(mode.as_str().parse::<GameMode>().unwrap(), mode);
        }
        for kind in [
            PlayerKind::Human,
            PlayerKind::RandomBot,
            PlayerKind::ForwardBot,
            PlayerKind::AggressiveBot,
            PlayerKind::MinimaxBot,
        ] {
            assert_eq!(kind.as_str().parse::<PlayerKind>().unwrap(), kind);
        }

        assert_eq!(
            "GREY".parse::<FieldState>(),
            Err(Error::UnknownState("GREY".to_string()))
        );
        assert_eq!(
            "blitz".parse::<GameMode>(),
            Err(Error::UnsupportedMode("blitz".to_string()))
        );
        assert_eq!(
            "ALIEN_BOT".parse::<PlayerKind>(),
            Err(Error::UnsupportedPlayerType("ALIEN_BOT".to_string()))
        );
    }

    #[test]
    fn offset_rejects_cells_off_the_board() {
        assert_eq!(pos(0, 0).offset(-1, 0), None);
        assert_eq!(pos(15, 15).offset(0, 1), None);
        assert_eq!(pos(7, 7).offset(2, -2), Some(pos(9, 5)));
    }

    #[test]
    fn chebyshev_takes_the_larger_axis() {
        assert_eq!(pos(0, 0).chebyshev(pos(15, 15)), 15);
        assert_eq!(pos(3, 3).chebyshev(pos(5, 4)), 2);
        assert_eq!(pos(8, 8).chebyshev(pos(8, 8)), 0);
    }
}
