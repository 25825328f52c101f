//! Video catalogue loading
//!
//! Reads the catalogue text file (or the bundled default) into a
//! `VideoLibrary`.

mod parser;

pub use parser::{parse_catalog_str, CatalogError};

use crate::model::VideoLibrary;
use anyhow::{Context, Result};
use std::path::Path;

/// Catalogue shipped with the binary, used when no file is configured
pub const BUNDLED_CATALOG: &str = include_str!("../../data/videos.txt");

/// Load a catalogue file from disk
///
/// # Arguments
/// * `path` - Path to the catalogue text file
///
/// # Returns
/// A library containing every video in the file, none flagged
pub fn load_catalog(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalogue from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalogue: {:?}", path))?;

    let videos = parse_catalog_str(&text)
        .with_context(|| format!("Failed to parse video catalogue: {:?}", path))?;

    Ok(VideoLibrary::from_videos(videos))
}

/// Load the catalogue bundled with the binary
pub fn bundled_catalog() -> Result<VideoLibrary> {
    log::info!("Loading bundled video catalogue");
    let videos = parse_catalog_str(BUNDLED_CATALOG).context("Bundled catalogue is invalid")?;
    Ok(VideoLibrary::from_videos(videos))
}
