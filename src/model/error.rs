//! Errors from the video and playlist stores

use thiserror::Error;

/// A store lookup or mutation that could not be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,
}
