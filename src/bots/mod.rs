//! Bot opponents and the player capability seam.
//!
//! Every bot implements the same contract: inspect the engine, pick one
//! legal move for its own colour out of the union of moves over all of its
//! stones, and let the caller apply it. Dispatch over the concrete kinds
//! happens through the [`GamePlayer`] tagged variant rather than through
//! an inheritance chain.

pub mod forward;
pub mod minimax;
pub mod random;

use crate::engine::Engine;
use crate::iface::GameInterface;
use crate::types::{Move, Player, PlayerKind};

pub use forward::ForwardBot;
pub use minimax::MinimaxBot;
pub use random::RandomBot;

/// Capability to produce a move from the current engine state.
pub trait Bot {
    /// Selects one legal move for the bot's colour, or `None` when the
    /// colour has no legal move at all.
    fn choose_move(&mut self, engine: &Engine) -> Option<Move>;
}

/// A player slot: a human deferred to the external UI, or one of the bots.
pub enum GamePlayer {
    Human,
    Random(RandomBot),
    Forward(ForwardBot),
    Aggressive(ForwardBot),
    Minimax(MinimaxBot),
}

impl GamePlayer {
    /// Reconstructs a player from its persisted type tag.
    pub fn from_kind(kind: PlayerKind, color: Player) -> Self {
        match kind {
            PlayerKind::Human => Self::Human,
            PlayerKind::RandomBot => Self::Random(RandomBot::new(color)),
            PlayerKind::ForwardBot => Self::Forward(ForwardBot::forward(color)),
            PlayerKind::AggressiveBot => Self::Aggressive(ForwardBot::aggressive(color)),
            PlayerKind::MinimaxBot => Self::Minimax(MinimaxBot::new(color)),
        }
    }

    /// The persisted type tag for this player.
    pub fn kind(&self) -> PlayerKind {
        match self {
            Self::Human => PlayerKind::Human,
            Self::Random(_) => PlayerKind::RandomBot,
            Self::Forward(_) => PlayerKind::ForwardBot,
            Self::Aggressive(_) => PlayerKind::AggressiveBot,
            Self::Minimax(_) => PlayerKind::MinimaxBot,
        }
    }

    /// Chooses and applies exactly one legal move.
    ///
    /// Human players return `None` without touching the engine: their
    /// moves arrive through the external UI and the rules layer instead.
    pub fn make_move(&mut self, iface: &mut GameInterface) -> Option<Move> {
        let bot: &mut dyn Bot = match self {
            Self::Human => return None,
            Self::Random(bot) => bot,
            Self::Forward(bot) | Self::Aggressive(bot) => bot,
            Self::Minimax(bot) => bot,
        };

        let mv = bot.choose_move(iface.engine())?;
        iface.engine_mut().apply_move(mv);
        Some(mv)
    }
}
