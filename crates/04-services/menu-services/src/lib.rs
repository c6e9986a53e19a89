//! In-memory implementations of the menu collaborator traits.
//!
//! Each module owns one subsystem's state and implements the matching
//! `menu-abi` trait. `MenuConfig` seeds all of them from a TOML document.

pub mod cheats;
pub mod config;
pub mod cores;
pub mod devices;
mod error;
pub mod navigation;
pub mod settings;
pub mod shader;

pub use crate::cheats::CheatList;
pub use crate::config::{
    DiskConfig, DisplayConfig, EntryConfig, MenuConfig, NavigationConfig, RemapConfig,
    SettingDef, SettingsConfig, ShaderConfig,
};
pub use crate::cores::{CoreInfoList, CoreOptionList};
pub use crate::devices::{DiskTray, VideoOutputs};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::navigation::NavState;
pub use crate::settings::{ConfigStore, SettingValue};
pub use crate::shader::ShaderPreset;
