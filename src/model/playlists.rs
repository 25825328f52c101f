//! Playlist store keyed by case-insensitive name

use super::{Playlist, StoreError};
use std::collections::HashMap;

/// All user playlists
///
/// Names are matched case-insensitively; each playlist keeps the casing
/// it was created with for display.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    /// Playlists indexed by lower-cased name
    playlists: HashMap<String, Playlist>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            playlists: HashMap::new(),
        }
    }

    /// Create a new playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist, StoreError> {
        let key = key(name);
        if self.playlists.contains_key(&key) {
            return Err(StoreError::PlaylistExists);
        }

        log::debug!("Creating playlist {:?}", name);
        let playlist = self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string()));
        Ok(&*playlist)
    }

    /// Find a playlist by name, ignoring case
    pub fn lookup(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&key(name))
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Playlist, StoreError> {
        self.playlists
            .get_mut(&key(name))
            .ok_or(StoreError::PlaylistNotFound)
    }

    /// Append a video to a playlist
    pub fn add_video(&mut self, name: &str, video_id: &str) -> Result<(), StoreError> {
        if !self.lookup_mut(name)?.add_video(video_id) {
            return Err(StoreError::AlreadyInPlaylist);
        }
        Ok(())
    }

    /// Remove a video from a playlist, leaving it untouched if the video is absent
    pub fn remove_video(&mut self, name: &str, video_id: &str) -> Result<(), StoreError> {
        if !self.lookup_mut(name)?.remove_video(video_id) {
            return Err(StoreError::NotInPlaylist);
        }
        Ok(())
    }

    /// Remove every video from a playlist
    pub fn clear(&mut self, name: &str) -> Result<(), StoreError> {
        self.lookup_mut(name)?.clear();
        Ok(())
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist, StoreError> {
        self.playlists
            .remove(&key(name))
            .ok_or(StoreError::PlaylistNotFound)
    }

    /// Display names of all playlists, in plain string order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name.as_str()).collect();
        names.sort();
        names
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlist exists yet
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_duplicate_any_case() {
        let mut store = PlaylistStore::new();
        store.create("My_Playlist").unwrap();

        assert_eq!(
            store.create("my_PLAYLIST").unwrap_err(),
            StoreError::PlaylistExists
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_keeps_original_casing() {
        let mut store = PlaylistStore::new();
        store.create("My_Playlist").unwrap();

        let playlist = store.lookup("MY_playlist").unwrap();
        assert_eq!(playlist.name, "My_Playlist");
        assert!(store.lookup("other").is_none());
    }

    #[test]
    fn test_add_and_remove() {
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();

        store.add_video("MIX", "a").unwrap();
        store.add_video("mix", "b").unwrap();
        assert_eq!(store.add_video("mix", "a").unwrap_err(), StoreError::AlreadyInPlaylist);
        assert_eq!(store.lookup("mix").unwrap().video_ids, vec!["a", "b"]);

        assert_eq!(store.remove_video("mix", "c").unwrap_err(), StoreError::NotInPlaylist);
        assert_eq!(store.lookup("mix").unwrap().len(), 2);

        store.remove_video("mix", "a").unwrap();
        assert_eq!(store.lookup("mix").unwrap().video_ids, vec!["b"]);
    }

    #[test]
    fn test_clear_and_delete() {
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        store.add_video("mix", "a").unwrap();

        store.clear("Mix").unwrap();
        assert!(store.lookup("mix").unwrap().is_empty());

        let deleted = store.delete("MIX").unwrap();
        assert_eq!(deleted.name, "mix");
        assert!(store.is_empty());
        assert_eq!(store.delete("mix").unwrap_err(), StoreError::PlaylistNotFound);
        assert_eq!(store.clear("mix").unwrap_err(), StoreError::PlaylistNotFound);
    }

    #[test]
    fn test_names_sorted() {
        let mut store = PlaylistStore::new();
        for name in ["beta", "Zeta", "Alpha"] {
            store.create(name).unwrap();
        }
        // Uppercase sorts before lowercase
        assert_eq!(store.names(), vec!["Alpha", "Zeta", "beta"]);
    }
}
