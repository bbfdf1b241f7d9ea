use crate::bots::Bot;
use crate::engine::Engine;
use crate::types::{Camp, Move, Player, Pos};

/// Cells on the inner diagonal of each camp, used as approach targets by
/// the distance heuristic.
const BLACK_CAMP_TARGETS: [Pos; 4] = [
    Pos { row: 1, col: 4 },
    Pos { row: 2, col: 3 },
    Pos { row: 3, col: 2 },
    Pos { row: 4, col: 1 },
];
const WHITE_CAMP_TARGETS: [Pos; 4] = [
    Pos { row: 14, col: 11 },
    Pos { row: 13, col: 12 },
    Pos { row: 12, col: 13 },
    Pos { row: 11, col: 14 },
];

/// Term weights of the greedy one-ply move scorer.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    /// Penalty for moving a stone that already sits in the target camp.
    pub in_camp_penalty: i32,
    /// Bonus for entering the target camp from outside any camp.
    pub enter_bonus: i32,
    /// Per-cell reduction of Chebyshev distance to the camp targets.
    pub advance: i32,
    /// Per-cell reduction of the corner-linear metric, breaks advance ties.
    pub corner: i32,
    /// Per-cell reduction of the border-linear metric, breaks corner ties.
    pub border: i32,
    /// Chebyshev span of the move itself; rewards long jump chains.
    pub span: i32,
}

impl Weights {
    /// Steady advance toward the enemy camp.
    pub const FORWARD: Weights = Weights {
        in_camp_penalty: -1000,
        enter_bonus: 1000,
        advance: 10,
        corner: 5,
        border: 1,
        span: 0,
    };

    /// Same terms, but long jump chains are rewarded on top.
    pub const AGGRESSIVE: Weights = Weights {
        in_camp_penalty: -1000,
        enter_bonus: 1000,
        advance: 10,
        corner: 5,
        border: 1,
        span: 3,
    };
}

/// Greedy one-ply bot: scores every candidate move and plays the best.
///
/// Two profiles share the implementation: the forward profile and the
/// aggressive profile, which additionally prefers long jump chains.
pub struct ForwardBot {
    color: Player,
    weights: Weights,
}

impl ForwardBot {
    pub fn forward(color: Player) -> Self {
        Self {
            color,
            weights: Weights::FORWARD,
        }
    }

    pub fn aggressive(color: Player) -> Self {
        Self {
            color,
            weights: Weights::AGGRESSIVE,
        }
    }
}

impl Bot for ForwardBot {
    fn choose_move(&mut self, engine: &Engine) -> Option<Move> {
        let candidates = engine.board().player_moves(self.color);
        let target = self.color.target_camp();

        let mut best: Option<(Move, i32)> = None;
        for mv in candidates {
            let quality = move_quality(mv, target, self.weights);
            // Strict comparison keeps the first best candidate in
            // enumeration order.
            if best.is_none_or(|(_, best_quality)| quality > best_quality) {
                best = Some((mv, quality));
            }
        }

        best.map(|(mv, _)| mv)
    }
}

/// Minimal Chebyshev distance from a cell to the camp's approach targets.
fn dist_to_camp(pos: Pos, camp: Camp) -> i32 {
    let targets = match camp {
        Camp::Black => &BLACK_CAMP_TARGETS,
        Camp::White => &WHITE_CAMP_TARGETS,
    };
    targets
        .iter()
        .map(|target| pos.chebyshev(*target))
        .min()
        .unwrap_or(i32::MAX)
}

/// Taxicab distance to the camp's corner of the board. Diagonally
/// touching cells are two apart under this metric.
fn corner_distance(pos: Pos, camp: Camp) -> i32 {
    match camp {
        Camp::Black => pos.row as i32 + pos.col as i32,
        Camp::White => (15 - pos.row as i32) + (15 - pos.col as i32),
    }
}

/// Column distance to the board edge the camp touches.
fn border_distance(pos: Pos, camp: Camp) -> i32 {
    match camp {
        Camp::Black => pos.col as i32,
        Camp::White => 15 - pos.col as i32,
    }
}

fn move_quality(mv: Move, target: Camp, weights: Weights) -> i32 {
    let mut quality = 0;

    // A stone that reached the target camp stays there.
    if Camp::at(mv.from) == Some(target) {
        quality += weights.in_camp_penalty;
    }

    // Entering the camp beats every non-entering move.
    if Camp::at(mv.from).is_none() && Camp::at(mv.to) == Some(target) {
        quality += weights.enter_bonus;
    }

    quality += (dist_to_camp(mv.from, target) - dist_to_camp(mv.to, target)) * weights.advance;
    quality += (corner_distance(mv.from, target) - corner_distance(mv.to, target)) * weights.corner;
    quality += (border_distance(mv.from, target) - border_distance(mv.to, target)) * weights.border;
    quality += mv.from.chebyshev(mv.to) * weights.span;

    quality
}
