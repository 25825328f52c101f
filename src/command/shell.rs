//! Interactive read-eval-print loop over a `VideoPlayer`

use super::parser::{Command, HELP_TEXT};
use crate::player::{VideoPicker, VideoPlayer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const GREETING: [&str; 2] = [
    "Hello and welcome to YouTube, what would you like to do?",
    "Enter HELP for list of available commands or EXIT to terminate.",
];

const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command shell driving a player from a line-oriented input
pub struct Shell<W: Write, P: VideoPicker> {
    player: VideoPlayer<W, P>,
    prompt: String,
}

impl<W: Write, P: VideoPicker> Shell<W, P> {
    pub fn new(player: VideoPlayer<W, P>, prompt: impl Into<String>) -> Self {
        Self {
            player,
            prompt: prompt.into(),
        }
    }

    pub fn player(&self) -> &VideoPlayer<W, P> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut VideoPlayer<W, P> {
        &mut self.player
    }

    /// Run until `EXIT` or end of input
    ///
    /// Search follow-up answers are read from the same input.
    pub fn run(&mut self, input: &mut impl BufRead) -> Result<()> {
        let out = self.player.output_mut();
        for line in GREETING {
            writeln!(out, "{}", line)?;
        }

        let mut line = String::new();
        loop {
            let out = self.player.output_mut();
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            line.clear();
            let read = input.read_line(&mut line).context("Failed to read command")?;
            if read == 0 {
                log::debug!("End of input");
                break;
            }

            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.execute(command, input)?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    log::debug!("Invalid command {:?}: {}", line.trim(), e);
                    writeln!(self.player.output_mut(), "{}", INVALID_COMMAND)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        let out = self.player.output_mut();
        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        Ok(())
    }

    /// Dispatch one command to the player
    pub fn execute(&mut self, command: Command, input: &mut impl BufRead) -> Result<Flow> {
        log::debug!("Executing {:?}", command);
        let player = &mut self.player;

        match command {
            Command::NumberOfVideos => player.number_of_videos()?,
            Command::ShowAllVideos => player.show_all_videos()?,
            Command::Play { video_id } => player.play_video(&video_id)?,
            Command::Stop => player.stop_video()?,
            Command::PlayRandom => player.play_random_video()?,
            Command::Pause => player.pause_video()?,
            Command::Continue => player.continue_video()?,
            Command::ShowPlaying => player.show_playing()?,
            Command::CreatePlaylist { name } => player.create_playlist(&name)?,
            Command::AddToPlaylist { name, video_id } => {
                player.add_to_playlist(&name, &video_id)?
            }
            Command::RemoveFromPlaylist { name, video_id } => {
                player.remove_from_playlist(&name, &video_id)?
            }
            Command::ClearPlaylist { name } => player.clear_playlist(&name)?,
            Command::DeletePlaylist { name } => player.delete_playlist(&name)?,
            Command::ShowPlaylist { name } => player.show_playlist(&name)?,
            Command::ShowAllPlaylists => player.show_all_playlists()?,
            Command::SearchVideos { term } => player.search_videos(&term, input)?,
            Command::SearchVideosWithTag { tag } => player.search_videos_with_tag(&tag, input)?,
            Command::FlagVideo { video_id, reason } => {
                player.flag_video(&video_id, reason.as_deref())?
            }
            Command::AllowVideo { video_id } => player.allow_video(&video_id)?,
            Command::Help => writeln!(player.output_mut(), "{}", HELP_TEXT)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}
