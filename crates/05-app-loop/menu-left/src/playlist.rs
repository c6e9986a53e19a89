//! Playlist to core association table stored as two parallel `;`-joined strings.

use menu_abi::{SettingsStore, StringArray};
use smallvec::SmallVec;

/// Separator between tokens of the persisted lists.
pub const ASSOCIATION_DELIMITER: &str = ";";
/// Association value meaning "detect the core when launching".
pub const DETECT_CORE: &str = "DETECT";

type Tokens = SmallVec<[String; 8]>;

/// Splits a persisted list, dropping empty tokens.
pub fn split_list(value: &str) -> Tokens {
    value
        .split(ASSOCIATION_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Joins tokens back into the persisted form.
pub fn join_list(tokens: &[String]) -> String {
    tokens.join(ASSOCIATION_DELIMITER)
}

/// Final path component of a playlist label.
pub fn playlist_basename(label: &str) -> &str {
    label.rsplit(['/', '\\']).next().unwrap_or(label)
}

/// Parsed view of the association lists, read fresh from the settings store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistAssociations {
    names: Tokens,
    cores: Tokens,
}

impl PlaylistAssociations {
    pub fn load(settings: &dyn SettingsStore) -> Self {
        Self {
            names: split_list(settings.string_array(StringArray::PlaylistNames)),
            cores: split_list(settings.string_array(StringArray::PlaylistCores)),
        }
    }

    /// Position of `playlist` in the names list.
    pub fn position(&self, playlist: &str) -> Option<usize> {
        self.names.iter().position(|name| name == playlist)
    }

    /// Core associated with `playlist`, if any.
    pub fn core_for(&self, playlist: &str) -> Option<&str> {
        let idx = self.position(playlist)?;
        self.cores.get(idx).map(String::as_str)
    }

    /// Sets the core at `index`; returns `false` when the cores list is too short.
    pub fn set_core(&mut self, index: usize, core_path: &str) -> bool {
        match self.cores.get_mut(index) {
            Some(slot) => {
                *slot = core_path.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn cores(&self) -> &[String] {
        &self.cores
    }

    /// Writes the cores list back to the settings store.
    pub fn store_cores(&self, settings: &mut dyn SettingsStore) {
        settings.set_string_array(StringArray::PlaylistCores, join_list(&self.cores));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_empty_tokens() {
        let tokens = split_list(";a;;b;");
        assert_eq!(tokens.as_slice(), ["a".to_string(), "b".to_string()]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn join_uses_delimiter_between_tokens() {
        assert_eq!(join_list(&["a".into(), "b".into()]), "a;b");
        assert_eq!(join_list(&[]), "");
    }

    #[test]
    fn basename_handles_both_separators() {
        assert_eq!(playlist_basename("/playlists/Game A"), "Game A");
        assert_eq!(playlist_basename("C:\\lists\\Game B"), "Game B");
        assert_eq!(playlist_basename("Game C"), "Game C");
    }
}
