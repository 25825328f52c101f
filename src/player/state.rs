use crate::model::Video;

/// The single "now playing" slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Video ID (references Video::id)
    pub video_id: String,

    /// Title captured when playback started
    pub title: String,

    /// Whether playback is paused
    pub paused: bool,
}

impl NowPlaying {
    /// Start playing a video, unpaused
    pub fn start(video: &Video) -> Self {
        Self {
            video_id: video.id.clone(),
            title: video.title.clone(),
            paused: false,
        }
    }
}
