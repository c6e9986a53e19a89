//! Owning-list (tab) identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level list that owns a menu entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tab {
    History,
    Playlists,
    Add,
    Netplay,
    #[default]
    MainMenu,
    Music,
    Images,
    Video,
    HorizontalMenu,
    Settings,
    /// Any other list, identified by its label.
    Other(String),
}

impl Tab {
    /// Parses a list label into a tab.
    pub fn from_label(label: &str) -> Self {
        match label {
            "history_tab" => Tab::History,
            "playlists_tab" => Tab::Playlists,
            "add_tab" => Tab::Add,
            "netplay_tab" => Tab::Netplay,
            "main_menu" => Tab::MainMenu,
            "music_tab" => Tab::Music,
            "images_tab" => Tab::Images,
            "video_tab" => Tab::Video,
            "horizontal_menu" => Tab::HorizontalMenu,
            "settings_tab" => Tab::Settings,
            other => Tab::Other(other.to_owned()),
        }
    }

    /// Label this tab is known by.
    pub fn label(&self) -> &str {
        match self {
            Tab::History => "history_tab",
            Tab::Playlists => "playlists_tab",
            Tab::Add => "add_tab",
            Tab::Netplay => "netplay_tab",
            Tab::MainMenu => "main_menu",
            Tab::Music => "music_tab",
            Tab::Images => "images_tab",
            Tab::Video => "video_tab",
            Tab::HorizontalMenu => "horizontal_menu",
            Tab::Settings => "settings_tab",
            Tab::Other(label) => label,
        }
    }

    /// Tabs that browse a horizontal list, including the main menu.
    pub fn is_list_browsing(&self) -> bool {
        self.is_content_tab() || matches!(self, Tab::MainMenu)
    }

    /// Horizontal content tabs, excluding the main menu itself.
    pub fn is_content_tab(&self) -> bool {
        matches!(
            self,
            Tab::History
                | Tab::Playlists
                | Tab::Add
                | Tab::Netplay
                | Tab::Music
                | Tab::Images
                | Tab::Video
                | Tab::HorizontalMenu
                | Tab::Settings
        )
    }
}

impl From<String> for Tab {
    fn from(label: String) -> Self {
        Tab::from_label(&label)
    }
}

impl From<Tab> for String {
    fn from(tab: Tab) -> Self {
        tab.label().to_owned()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
