//! Command-line parsing for the interactive shell

use thiserror::Error;

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Errors in a command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{verb} expects <{argument}>")]
    MissingArgument { verb: String, argument: &'static str },

    #[error("{verb} does not take {argument:?}")]
    UnexpectedArgument { verb: String, argument: String },
}

/// Usage lines printed by `HELP`
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

struct Args<'a> {
    verb: &'a str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, argument: &'static str) -> Result<String, CommandError> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or_else(|| CommandError::MissingArgument {
                verb: self.verb.to_string(),
                argument,
            })
    }

    /// Remaining words joined by single spaces, None if there are none
    fn rest(&mut self) -> Option<String> {
        let rest: Vec<&str> = self.words.by_ref().collect();
        (!rest.is_empty()).then(|| rest.join(" "))
    }
}

impl Command {
    /// Parse one input line
    ///
    /// The verb is case-insensitive; arguments keep their case. A blank
    /// line parses to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };

        let verb = word.to_uppercase();
        let mut args = Args { verb: &verb, words };
        let command = match verb.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play {
                video_id: args.required("video_id")?,
            },
            "STOP" => Command::Stop,
            "PLAY_RANDOM" => Command::PlayRandom,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: args.required("playlist_name")?,
            },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                name: args.required("playlist_name")?,
                video_id: args.required("video_id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                name: args.required("playlist_name")?,
                video_id: args.required("video_id")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: args.required("playlist_name")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: args.required("playlist_name")?,
            },
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: args.required("playlist_name")?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: args.required("search_term")?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: args.required("tag_name")?,
            },
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: args.required("video_id")?,
                reason: args.rest(),
            },
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: args.required("video_id")?,
            },
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        if let Some(extra) = args.words.next() {
            return Err(CommandError::UnexpectedArgument {
                verb: verb.clone(),
                argument: extra.to_string(),
            });
        }

        Ok(Some(command))
    }
}
