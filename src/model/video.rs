use serde::{Deserialize, Serialize};

/// Represents a single video in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in catalogue order, each starting with `#`
    pub tags: Vec<String>,

    /// Flag reason; `Some` while the video is flagged
    pub flag: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether this video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Reason the video was flagged, if any
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Human-readable form: `Title (id) [#tag1 #tag2]`
    pub fn display(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }

    /// Case-insensitive substring match on the title
    pub fn matches_title(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}
