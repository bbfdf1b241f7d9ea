//! Rule engine for the board game Halma on a fixed 16×16 grid.
//!
//! The [`engine::Engine`] owns the board truth and the move generator,
//! [`iface::GameInterface`] translates player-facing notation and decides
//! wins, and [`bots`] provides opponents from uniform-random up to a
//! deadline-bounded minimax search. Terminal rendering, dialogs and file
//! I/O live outside this crate; persistence is exchanged as flat
//! [`serde_json::Value`] maps.

pub mod board;
pub mod bots;
pub mod engine;
pub mod error;
pub mod game;
pub mod iface;
pub mod types;

pub use board::Board;
pub use engine::Engine;
pub use error::{Error, Result};
pub use game::Game;
pub use iface::GameInterface;
pub use types::{Camp, FieldState, GameMode, Move, Player, PlayerKind, Pos};
