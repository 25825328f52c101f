//! Catalogue text format parser
//!
//! One video per line: `Title | video_id | #tag1 , #tag2`. The tag field
//! may be empty or missing.

use crate::model::Video;
use std::collections::HashSet;
use thiserror::Error;

/// Errors in a catalogue file
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("line {line}: expected `title | id | tags`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: duplicate video id {id:?}")]
    DuplicateId { line: usize, id: String },
}

/// Parse catalogue text into videos, in file order
pub fn parse_catalog_str(text: &str) -> Result<Vec<Video>, CatalogError> {
    let mut videos = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let video = parse_line(index + 1, line)?;
        if !seen.insert(video.id.clone()) {
            return Err(CatalogError::DuplicateId {
                line: index + 1,
                id: video.id,
            });
        }
        videos.push(video);
    }

    log::debug!("Parsed {} videos from catalogue", videos.len());
    Ok(videos)
}

fn parse_line(line_number: usize, line: &str) -> Result<Video, CatalogError> {
    let malformed = || CatalogError::MalformedLine {
        line: line_number,
        content: line.to_string(),
    };

    let mut fields = line.split('|').map(str::trim);
    let title = fields.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let id = fields.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;

    let tags = fields
        .next()
        .map(|field| {
            field
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_lines() {
        let text = "Funny Dogs | funny_dogs_video_id |  #dog , #animal\n\
                    Video about nothing | nothing_video_id |\n";
        let videos = parse_catalog_str(text).unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Funny Dogs");
        assert_eq!(videos[0].id, "funny_dogs_video_id");
        assert_eq!(videos[0].tags, vec!["#dog", "#animal"]);
        assert!(videos[1].tags.is_empty());
        assert!(!videos[1].is_flagged());
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let text = "\n// comment\n  \nA | a_id\n";
        let videos = parse_catalog_str(text).unwrap();
        assert_eq!(videos.len(), 1);
        assert!(videos[0].tags.is_empty());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let text = "A | a_id | #x\njust a title\n";
        assert_eq!(
            parse_catalog_str(text).unwrap_err(),
            CatalogError::MalformedLine {
                line: 2,
                content: "just a title".to_string()
            }
        );
    }

    #[test]
    fn test_empty_id_is_malformed() {
        assert!(matches!(
            parse_catalog_str("A |  | #x"),
            Err(CatalogError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let text = "A | same\nB | same\n";
        assert_eq!(
            parse_catalog_str(text).unwrap_err(),
            CatalogError::DuplicateId {
                line: 2,
                id: "same".to_string()
            }
        );
    }
}
