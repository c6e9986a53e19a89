//! Semantic identifiers and bound-setting metadata carried by menu entries.

use serde::{Deserialize, Serialize};

/// Label key of the settings group that represents the root main menu.
pub const MAIN_MENU_GROUP: &str = "main_menu";

/// Stable tag naming a well-known entry, independent of its numeric type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEnumLabel {
    ConnectNetplayRoom,
    ShaderScalePass,
    ShaderFilterPass,
    ShaderDefaultFilter,
    ShaderNumPasses,
    CheatNumPasses,
    ScreenResolution,
    OpenArchiveDetectCore,
    LoadArchiveDetectCore,
    NoItems,
    NoPlaylistEntries,
    StartVideoProcessor,
    TakeScreenshot,
    // Identifiers without a decrement rule of their own.
    VideoSmooth,
    QuickMenu,
    Information,
    LoadContent,
    CoreOptions,
    DiskIndex,
}

/// Kind of a bound setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    Action,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Path,
    Bind,
    Group,
    SubGroup,
}

/// Reference to the setting an entry is bound to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRef {
    /// Setting name (e.g. `video_smooth`).
    pub name: String,
    /// Name of the group this setting is declared in.
    pub parent_group: String,
    pub kind: SettingKind,
}

impl SettingRef {
    pub fn new(name: impl Into<String>, parent_group: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            name: name.into(),
            parent_group: parent_group.into(),
            kind,
        }
    }

    /// Whether this setting is a group header declared directly under the main menu.
    pub fn is_main_menu_group(&self) -> bool {
        self.parent_group == MAIN_MENU_GROUP && self.kind == SettingKind::Group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tab;

    #[test]
    fn main_menu_group_matches_the_label_key() {
        let header = SettingRef::new("load_content", Tab::MainMenu.label(), SettingKind::Group);
        assert!(header.is_main_menu_group());

        let display_name = SettingRef::new("load_content", "Main Menu", SettingKind::Group);
        assert!(!display_name.is_main_menu_group());
    }
}
