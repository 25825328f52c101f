//! Reasons a player command cannot complete

use crate::model::StoreError;
use thiserror::Error;

/// A command precondition that failed
///
/// The display text is the user-facing reason; the controller prefixes it
/// with the command context (`Cannot play video: ...`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,
}
