use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::bots::Bot;
use crate::engine::Engine;
use crate::types::{Move, Player};

/// Picks uniformly among all legal (source, destination) pairs.
pub struct RandomBot {
    color: Player,
    rng: SmallRng,
}

impl RandomBot {
    pub fn new(color: Player) -> Self {
        Self {
            color,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn with_seed(color: Player, seed: u64) -> Self {
        Self {
            color,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn choose_move(&mut self, engine: &Engine) -> Option<Move> {
        let candidates = engine.board().player_moves(self.color);
        candidates.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameMode;

    #[test]
    fn chooses_a_legal_move_for_its_own_colour() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);
        let legal = engine.board().player_moves(Player::White);

        let mut bot = RandomBot::with_seed(Player::White, 7);
        for _ in 0..20 {
            let mv = bot.choose_move(&engine).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn same_seed_gives_the_same_sequence() {
        let mut engine = Engine::new();
        engine.setup(GameMode::Classic);

        let mut first = RandomBot::with_seed(Player::Black, 42);
        let mut second = RandomBot::with_seed(Player::Black, 42);
        for _ in 0..5 {
            assert_eq!(first.choose_move(&engine), second.choose_move(&engine));
        }
    }

    #[test]
    fn returns_none_on_an_empty_board() {
        let engine = Engine::new();
        let mut bot = RandomBot::with_seed(Player::White, 1);
        assert_eq!(bot.choose_move(&engine), None);
    }
}
