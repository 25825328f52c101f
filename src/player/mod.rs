//! Player controller and its configuration

pub mod config;
pub mod controller;
pub mod error;
pub mod picker;
pub mod state;

pub use config::PlayerConfig;
pub use controller::VideoPlayer;
pub use error::PlayerError;
pub use picker::{RandomPicker, VideoPicker};
pub use state::NowPlaying;
