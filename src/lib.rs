//! Video Catalogue - command-driven video player over an in-memory catalogue
//!
//! Lists, plays, searches and flags videos, and manages playlists. All
//! state lives in memory for the lifetime of a session.

pub mod catalog;
pub mod command;
pub mod model;
pub mod player;

pub use command::Shell;
pub use player::{PlayerConfig, VideoPlayer};
