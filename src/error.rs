//! Error taxonomy for the game core
//!
//! Every variant is fatal at the frame level: the director either finishes a
//! full frame or returns one of these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A group the loop cannot run without ("robot", "banner") is empty or unknown
    #[error("cast has no actor in required group `{group}`")]
    MissingActor { group: String },

    /// An actor in a scoring group carries no point value
    #[error("actor #{index} in group `{group}` is not an artifact or bomb")]
    NotScoring { group: String, index: usize },

    #[error("game has already been started")]
    AlreadyStarted,

    #[error("service I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub(crate) fn missing(group: &str) -> Self {
        GameError::MissingActor {
            group: group.to_string(),
        }
    }
}
