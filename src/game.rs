use serde_json::Value;
use tracing::debug;

use crate::bots::GamePlayer;
use crate::error::{Error, Result};
use crate::iface::GameInterface;
use crate::types::{Move, Player, PlayerKind};

/// One whole game session: the rules layer plus both player slots.
///
/// The persisted game record is the flat engine state extended with the
/// two player type tags, so a session can be reconstructed from a single
/// self-describing map.
pub struct Game {
    iface: GameInterface,
    white_player: GamePlayer,
    black_player: GamePlayer,
}

impl Game {
    pub fn new(iface: GameInterface, white_player: GamePlayer, black_player: GamePlayer) -> Self {
        Self {
            iface,
            white_player,
            black_player,
        }
    }

    pub fn iface(&self) -> &GameInterface {
        &self.iface
    }

    pub fn iface_mut(&mut self) -> &mut GameInterface {
        &mut self.iface
    }

    pub fn get_player(&self, color: Player) -> &GamePlayer {
        match color {
            Player::White => &self.white_player,
            Player::Black => &self.black_player,
        }
    }

    pub fn set_player(&mut self, color: Player, player: GamePlayer) {
        match color {
            Player::White => self.white_player = player,
            Player::Black => self.black_player = player,
        }
    }

    /// Lets the player whose turn it is take one move.
    ///
    /// Bots choose and apply their move; a human slot returns `None` and
    /// the move is expected through [`GameInterface::try_move`] instead.
    pub fn play_turn(&mut self) -> Option<Move> {
        let player = match self.iface.moving_player() {
            Player::White => &mut self.white_player,
            Player::Black => &mut self.black_player,
        };
        player.make_move(&mut self.iface)
    }

    /// The flat save record: engine state plus both player tags.
    pub fn save_state(&self) -> Value {
        let mut state = self.iface.dump_game_state();
        state["white_player"] = Value::String(self.white_player.kind().as_str().to_string());
        state["black_player"] = Value::String(self.black_player.kind().as_str().to_string());
        state
    }

    /// Restores a session from a save record.
    ///
    /// The player tags are validated before the engine state is touched,
    /// so a corrupt record never leaves the game half-loaded.
    pub fn load_state(&mut self, state: &Value) -> Result<()> {
        let white_kind = player_kind(state, "white_player")?;
        let black_kind = player_kind(state, "black_player")?;

        self.iface.engine_mut().load_state(state)?;
        self.white_player = GamePlayer::from_kind(white_kind, Player::White);
        self.black_player = GamePlayer::from_kind(black_kind, Player::Black);
        debug!(
            white = white_kind.as_str(),
            black = black_kind.as_str(),
            "loaded game state"
        );
        Ok(())
    }
}

fn player_kind(state: &Value, key: &str) -> Result<PlayerKind> {
    state
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::corrupted(format!("missing key `{key}`")))?
        .parse()
}
