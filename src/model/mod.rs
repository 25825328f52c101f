//! In-memory data model for the video catalogue
//!
//! Videos and playlists live in two separate stores which the player
//! controller owns.

mod error;
mod video;
mod playlist;
mod playlists;
mod library;

pub use error::StoreError;
pub use video::Video;
pub use playlist::Playlist;
pub use playlists::PlaylistStore;
pub use library::VideoLibrary;
