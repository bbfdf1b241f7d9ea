use crate::types::{BOARD_SIZE, FieldState, Move, Player, Pos};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 16×16 grid of cell states.
///
/// `Copy` so that the search can work on privately-owned scratch copies
/// without ever touching the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    fields: [[FieldState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            fields: [[FieldState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Pos) -> FieldState {
        self.fields[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Pos, value: FieldState) {
        self.fields[pos.row as usize][pos.col as usize] = value;
    }

    /// Every legal destination reachable from `from` in one move.
    ///
    /// A move is either exactly one simple step to an adjacent empty cell,
    /// or a chain of one or more jumps. A jump lands two cells away in any
    /// of the 8 directions whenever that cell is empty and was not landed
    /// on earlier in the chain; the intermediate cell only has to be
    /// unavailable for a simple step (occupied, already visited, or off
    /// the board), not necessarily occupied. The visited list is local to
    /// one chain and rolled back after each explored branch.
    ///
    /// The returned destinations are de-duplicated; their order carries no
    /// meaning.
    pub fn moves(&self, from: Pos) -> Vec<Pos> {
        let mut visited = Vec::new();
        let mut found = Vec::new();
        self.collect_moves(from, &mut visited, &mut found);
        found.sort_unstable();
        found.dedup();
        found
    }

    fn collect_moves(&self, from: Pos, visited: &mut Vec<Pos>, found: &mut Vec<Pos>) {
        for (dr, dc) in DIRECTIONS {
            let step = from
                .offset(dr, dc)
                .filter(|p| !visited.contains(p) && self.get(*p) == FieldState::Empty);

            if let Some(step) = step {
                // Simple steps are only legal as the very first move of
                // the chain, and they never extend it.
                if visited.is_empty() {
                    found.push(step);
                }
            } else if let Some(jump) = from.offset(2 * dr, 2 * dc) {
                if !visited.contains(&jump) && self.get(jump) == FieldState::Empty {
                    found.push(jump);
                    visited.push(from);
                    self.collect_moves(jump, visited, found);
                    visited.pop();
                }
            }
        }
    }

    /// Union of [`Board::moves`] over every cell holding `player`'s stone.
    pub fn player_moves(&self, player: Player) -> Vec<Move> {
        let stone = player.stone();
        let mut all = Vec::new();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let from = Pos {
                    row: row as u8,
                    col: col as u8,
                };
                if self.get(from) != stone {
                    continue;
                }
                for to in self.moves(from) {
                    all.push(Move { from, to });
                }
            }
        }

        all
    }

    /// Moves the stone on `mv.from` to `mv.to`, emptying the source.
    pub fn apply(&mut self, mv: Move) {
        let stone = self.get(mv.from);
        self.set(mv.from, FieldState::Empty);
        self.set(mv.to, stone);
    }

    /// Exact inverse of [`Board::apply`]: `apply(m); undo(m)` is the identity.
    pub fn undo(&mut self, mv: Move) {
        let stone = self.get(mv.to);
        self.set(mv.to, FieldState::Empty);
        self.set(mv.from, stone);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
