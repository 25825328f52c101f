use super::{StoreError, Video};
use std::collections::HashMap;

/// The video catalogue, indexed by video ID
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Build a library from a list of videos; later duplicates replace earlier ones
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut library = Self::new();
        for video in videos {
            library.add_video(video);
        }
        library
    }

    /// Add a video to the library
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// All videos ordered by title (ties broken by ID)
    pub fn videos_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        videos
    }

    /// Videos that are not flagged, ordered by title
    pub fn unflagged_videos(&self) -> Vec<&Video> {
        self.videos_by_title()
            .into_iter()
            .filter(|v| !v.is_flagged())
            .collect()
    }

    /// Flag a video with the given reason
    pub fn flag_video(&mut self, id: &str, reason: &str) -> Result<&Video, StoreError> {
        let video = self.videos.get_mut(id).ok_or(StoreError::VideoNotFound)?;
        if video.is_flagged() {
            return Err(StoreError::AlreadyFlagged);
        }

        video.flag = Some(reason.to_string());
        log::debug!("Flagged {} ({})", video.id, reason);
        Ok(video)
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, id: &str) -> Result<&Video, StoreError> {
        let video = self.videos.get_mut(id).ok_or(StoreError::VideoNotFound)?;
        if video.flag.take().is_none() {
            return Err(StoreError::NotFlagged);
        }

        log::debug!("Allowed {}", video.id);
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> VideoLibrary {
        VideoLibrary::from_videos(vec![
            Video::new("funny_dogs_video_id", "Funny Dogs", vec!["#dog".to_string()]),
            Video::new("amazing_cats_video_id", "Amazing Cats", vec!["#cat".to_string()]),
            Video::new("another_cat_video_id", "Another Cat Video", Vec::new()),
        ])
    }

    #[test]
    fn test_library_creation() {
        let lib = VideoLibrary::new();
        assert_eq!(lib.video_count(), 0);
        assert!(lib.get_video("missing").is_none());
    }

    #[test]
    fn test_videos_sorted_by_title() {
        let lib = sample_library();
        let titles: Vec<&str> = lib.videos_by_title().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video", "Funny Dogs"]);
    }

    #[test]
    fn test_flag_and_allow() {
        let mut lib = sample_library();

        let flagged = lib.flag_video("funny_dogs_video_id", "dont_like_dogs").unwrap();
        assert_eq!(flagged.flag_reason(), Some("dont_like_dogs"));
        assert_eq!(
            lib.flag_video("funny_dogs_video_id", "again").unwrap_err(),
            StoreError::AlreadyFlagged
        );
        assert_eq!(lib.unflagged_videos().len(), 2);

        lib.allow_video("funny_dogs_video_id").unwrap();
        assert!(!lib.get_video("funny_dogs_video_id").unwrap().is_flagged());
        assert_eq!(
            lib.allow_video("funny_dogs_video_id").unwrap_err(),
            StoreError::NotFlagged
        );
    }

    #[test]
    fn test_flag_missing_video() {
        let mut lib = sample_library();
        assert_eq!(
            lib.flag_video("nope", "reason").unwrap_err(),
            StoreError::VideoNotFound
        );
        assert_eq!(lib.allow_video("nope").unwrap_err(), StoreError::VideoNotFound);
    }
}
