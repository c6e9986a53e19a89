//! Plain records owned by collaborating subsystems.

use serde::{Deserialize, Serialize};

/// Result of running a bound entry action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action completed (including degraded no-ops).
    Handled,
    /// A required collaborator was missing; the caller should pop the current menu level.
    ExitMenu,
}

impl ActionOutcome {
    pub fn is_exit(self) -> bool {
        matches!(self, ActionOutcome::ExitMenu)
    }
}

/// Direction of an entry adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Left,
    Right,
}

/// Kind of list targeted by a navigation cache request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Plain,
    Horizontal,
}

/// Size and selection of the plain menu list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListInfo {
    pub size: usize,
    pub selection: usize,
}

/// String-list settings holding `;`-joined tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringArray {
    PlaylistNames,
    PlaylistCores,
}

/// Tunable shader parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShaderParameter {
    pub id: String,
    #[serde(default)]
    pub pass: u32,
    pub current: f32,
    pub minimum: f32,
    pub maximum: f32,
    pub step: f32,
}

/// Framebuffer scale state of a shader pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FboScale {
    /// Whether the pass carries an explicit scale.
    pub valid: bool,
    pub scale_x: u32,
    pub scale_y: u32,
}

/// Single pass of a shader preset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderPass {
    #[serde(default)]
    pub source: String,
    /// Filter mode ordinal: 0 unspecified, 1 linear, 2 nearest.
    #[serde(default)]
    pub filter: u32,
    /// Scale ordinal in `0..=5`; 0 disables the explicit scale.
    #[serde(default)]
    pub fbo: FboScale,
}

/// Single cheat row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheat {
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Installed core known to the core catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreInfo {
    pub path: String,
    #[serde(default)]
    pub display_name: String,
}

impl CoreInfo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_name: String::new(),
        }
    }
}

/// Core option with a list of choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreOption {
    pub key: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub index: usize,
}

/// Display resolution offered by the video output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}
