use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal error conditions of the engine and the persistence layer.
///
/// Illegal moves are not represented here: the rules layer reports them
/// as a plain `false` because rejection is an expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown or invalid mode: {0:?}")]
    UnsupportedMode(String),

    #[error("field ({row}, {col}) is not on the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("corrupted save data: {0}")]
    CorruptedSave(String),

    #[error("unknown state token: {0:?}")]
    UnknownState(String),

    #[error("unsupported player type: {0:?}")]
    UnsupportedPlayerType(String),
}

impl Error {
    pub(crate) fn corrupted(what: impl Into<String>) -> Self {
        Self::CorruptedSave(what.into())
    }
}
