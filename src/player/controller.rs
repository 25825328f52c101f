//! Player controller: one method per user command

use super::error::PlayerError;
use super::picker::{RandomPicker, VideoPicker};
use super::state::NowPlaying;
use crate::model::{PlaylistStore, StoreError, Video, VideoLibrary};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Reason recorded when `FLAG_VIDEO` is given none
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

const SEARCH_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// Video player
///
/// Owns the video library, the playlist store and the now-playing slot.
/// Every command writes its result as text lines to `out`; a command that
/// cannot complete prints why and leaves state untouched. The returned
/// `Result` only carries I/O failures.
pub struct VideoPlayer<W: Write, P: VideoPicker = RandomPicker> {
    library: VideoLibrary,
    playlists: PlaylistStore,
    now_playing: Option<NowPlaying>,
    picker: P,
    out: W,
}

fn refuse(out: &mut impl Write, action: &str, err: PlayerError) -> Result<()> {
    log::debug!("Refused to {}: {:?}", action, err);
    writeln!(out, "Cannot {}: {}", action, err)?;
    Ok(())
}

fn flagged_suffix(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!(" - FLAGGED (reason: {})", reason),
        None => String::new(),
    }
}

impl<W: Write, P: VideoPicker> VideoPlayer<W, P> {
    /// Create a player over the given stores
    pub fn new(library: VideoLibrary, playlists: PlaylistStore, picker: P, out: W) -> Self {
        Self {
            library,
            playlists,
            now_playing: None,
            picker,
            out,
        }
    }

    pub fn library(&self) -> &VideoLibrary {
        &self.library
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// The video in the now-playing slot, if any
    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    /// Output sink, for writing lines outside of commands
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn number_of_videos(&mut self) -> Result<()> {
        writeln!(self.out, "{} videos in the library", self.library.video_count())?;
        Ok(())
    }

    /// List every video by title, flagged ones marked
    pub fn show_all_videos(&mut self) -> Result<()> {
        writeln!(self.out, "Here's a list of all available videos:")?;
        for video in self.library.videos_by_title() {
            writeln!(self.out, "{}{}", video.display(), flagged_suffix(video))?;
        }
        Ok(())
    }

    fn playable(&self, video_id: &str) -> Result<NowPlaying, PlayerError> {
        let video = self
            .library
            .get_video(video_id)
            .ok_or(StoreError::VideoNotFound)?;

        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::Flagged(reason.to_string()));
        }
        Ok(NowPlaying::start(video))
    }

    /// Replace the now-playing slot, stopping whatever was in it
    fn start(&mut self, next: NowPlaying) -> Result<()> {
        if let Some(previous) = self.now_playing.take() {
            writeln!(self.out, "Stopping video: {}", previous.title)?;
        }
        writeln!(self.out, "Playing video: {}", next.title)?;
        log::debug!("Now playing {}", next.video_id);
        self.now_playing = Some(next);
        Ok(())
    }

    /// Play a video by ID
    pub fn play_video(&mut self, video_id: &str) -> Result<()> {
        match self.playable(video_id) {
            Ok(next) => self.start(next),
            Err(e) => refuse(&mut self.out, "play video", e),
        }
    }

    pub fn stop_video(&mut self) -> Result<()> {
        match self.now_playing.take() {
            Some(current) => {
                writeln!(self.out, "Stopping video: {}", current.title)?;
                Ok(())
            }
            None => refuse(&mut self.out, "stop video", PlayerError::NothingPlaying),
        }
    }

    /// Play a random video that is not flagged
    pub fn play_random_video(&mut self) -> Result<()> {
        let candidates = self.library.unflagged_videos();
        let next = self
            .picker
            .pick(candidates.len())
            .and_then(|index| candidates.get(index))
            .map(|video| NowPlaying::start(video));

        match next {
            Some(next) => self.start(next),
            None => {
                writeln!(self.out, "No videos available")?;
                Ok(())
            }
        }
    }

    pub fn pause_video(&mut self) -> Result<()> {
        match self.now_playing.as_mut() {
            None => refuse(&mut self.out, "pause video", PlayerError::NothingPlaying),
            Some(current) if current.paused => {
                writeln!(self.out, "Video already paused: {}", current.title)?;
                Ok(())
            }
            Some(current) => {
                current.paused = true;
                writeln!(self.out, "Pausing video: {}", current.title)?;
                Ok(())
            }
        }
    }

    pub fn continue_video(&mut self) -> Result<()> {
        match self.now_playing.as_mut() {
            None => refuse(&mut self.out, "continue video", PlayerError::NothingPlaying),
            Some(current) if !current.paused => {
                refuse(&mut self.out, "continue video", PlayerError::NotPaused)
            }
            Some(current) => {
                current.paused = false;
                writeln!(self.out, "Continuing video: {}", current.title)?;
                Ok(())
            }
        }
    }

    pub fn show_playing(&mut self) -> Result<()> {
        let Some(current) = &self.now_playing else {
            writeln!(self.out, "No video is currently playing")?;
            return Ok(());
        };

        let shown = match self.library.get_video(&current.video_id) {
            Some(video) => video.display(),
            None => current.title.clone(),
        };
        let paused = if current.paused { " - PAUSED" } else { "" };
        writeln!(self.out, "Currently playing: {}{}", shown, paused)?;
        Ok(())
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.create(name) {
            Ok(_) => {
                writeln!(self.out, "Successfully created new playlist: {}", name)?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, "create playlist", e.into()),
        }
    }

    fn addable(&self, name: &str, video_id: &str) -> Result<String, PlayerError> {
        if self.playlists.lookup(name).is_none() {
            return Err(StoreError::PlaylistNotFound.into());
        }

        let video = self
            .library
            .get_video(video_id)
            .ok_or(StoreError::VideoNotFound)?;
        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::Flagged(reason.to_string()));
        }
        Ok(video.title.clone())
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        let added = self
            .addable(name, video_id)
            .and_then(|title| {
                self.playlists
                    .add_video(name, video_id)
                    .map(|_| title)
                    .map_err(PlayerError::from)
            });

        match added {
            Ok(title) => {
                writeln!(self.out, "Added video to {}: {}", name, title)?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, &format!("add video to {}", name), e),
        }
    }

    pub fn show_all_playlists(&mut self) -> Result<()> {
        if self.playlists.is_empty() {
            writeln!(self.out, "No playlists exist yet")?;
            return Ok(());
        }

        writeln!(self.out, "Showing all playlists:")?;
        for name in self.playlists.names() {
            writeln!(self.out, "{}", name)?;
        }
        Ok(())
    }

    /// List a playlist's videos in insertion order
    pub fn show_playlist(&mut self, name: &str) -> Result<()> {
        let Some(playlist) = self.playlists.lookup(name) else {
            return refuse(
                &mut self.out,
                &format!("show playlist {}", name),
                StoreError::PlaylistNotFound.into(),
            );
        };

        writeln!(self.out, "Showing playlist: {}", name)?;
        if playlist.is_empty() {
            writeln!(self.out, "No videos here yet")?;
            return Ok(());
        }

        for video in playlist
            .video_ids
            .iter()
            .filter_map(|id| self.library.get_video(id))
        {
            writeln!(self.out, "{}{}", video.display(), flagged_suffix(video))?;
        }
        Ok(())
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        let removed: Result<String, PlayerError> = if self.playlists.lookup(name).is_none() {
            Err(StoreError::PlaylistNotFound.into())
        } else {
            match self.library.get_video(video_id) {
                Some(video) => self
                    .playlists
                    .remove_video(name, video_id)
                    .map(|_| video.title.clone())
                    .map_err(PlayerError::from),
                None => Err(StoreError::VideoNotFound.into()),
            }
        };

        match removed {
            Ok(title) => {
                writeln!(self.out, "Removed video from {}: {}", name, title)?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, &format!("remove video from {}", name), e),
        }
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.clear(name) {
            Ok(()) => {
                writeln!(self.out, "Successfully removed all videos from {}", name)?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, &format!("clear playlist {}", name), e.into()),
        }
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.delete(name) {
            Ok(_) => {
                writeln!(self.out, "Deleted playlist: {}", name)?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, &format!("delete playlist {}", name), e.into()),
        }
    }

    /// Search unflagged videos by title substring, offering to play a result
    pub fn search_videos(&mut self, term: &str, input: &mut impl BufRead) -> Result<()> {
        let results: Vec<(String, String)> = self
            .library
            .unflagged_videos()
            .into_iter()
            .filter(|v| v.matches_title(term))
            .map(|v| (v.id.clone(), v.display()))
            .collect();

        self.offer_results(term, results, input)
    }

    /// Search unflagged videos by exact tag, offering to play a result
    ///
    /// Tags always start with `#`; any other term has no results.
    pub fn search_videos_with_tag(&mut self, tag: &str, input: &mut impl BufRead) -> Result<()> {
        let results: Vec<(String, String)> = if tag.starts_with('#') {
            self.library
                .unflagged_videos()
                .into_iter()
                .filter(|v| v.has_tag(tag))
                .map(|v| (v.id.clone(), v.display()))
                .collect()
        } else {
            Vec::new()
        };

        self.offer_results(tag, results, input)
    }

    /// Print numbered (id, display) results and play the one the user picks
    fn offer_results(
        &mut self,
        term: &str,
        results: Vec<(String, String)>,
        input: &mut impl BufRead,
    ) -> Result<()> {
        if results.is_empty() {
            writeln!(self.out, "No search results for {}", term)?;
            return Ok(());
        }

        writeln!(self.out, "Here are the results for {}:", term)?;
        for (index, (_, shown)) in results.iter().enumerate() {
            writeln!(self.out, "{}) {}", index + 1, shown)?;
        }
        for line in SEARCH_PROMPT {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;

        let mut reply = String::new();
        input
            .read_line(&mut reply)
            .context("Failed to read search selection")?;

        match reply.trim().parse::<usize>() {
            Ok(choice) if (1..=results.len()).contains(&choice) => {
                let (video_id, _) = &results[choice - 1];
                self.play_video(video_id)
            }
            _ => {
                log::debug!("Ignoring search selection {:?}", reply.trim());
                Ok(())
            }
        }
    }

    /// Flag a video, stopping it first if it is playing
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<()> {
        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);

        let precheck = match self.library.get_video(video_id) {
            None => Err(StoreError::VideoNotFound),
            Some(video) if video.is_flagged() => Err(StoreError::AlreadyFlagged),
            Some(_) => Ok(()),
        };
        if let Err(e) = precheck {
            return refuse(&mut self.out, "flag video", e.into());
        }

        if self
            .now_playing
            .as_ref()
            .is_some_and(|current| current.video_id == video_id)
        {
            self.stop_video()?;
        }

        match self.library.flag_video(video_id, reason) {
            Ok(video) => {
                writeln!(
                    self.out,
                    "Successfully flagged video: {} (reason: {})",
                    video.title, reason
                )?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, "flag video", e.into()),
        }
    }

    pub fn allow_video(&mut self, video_id: &str) -> Result<()> {
        match self.library.allow_video(video_id) {
            Ok(video) => {
                writeln!(self.out, "Successfully removed flag from video: {}", video.title)?;
                Ok(())
            }
            Err(e) => refuse(&mut self.out, "remove flag from video", e.into()),
        }
    }
}

impl<P: VideoPicker> VideoPlayer<Vec<u8>, P> {
    /// Drain everything written so far
    pub fn take_output(&mut self) -> String {
        String::from_utf8_lossy(&std::mem::take(&mut self.out)).into_owned()
    }
}
