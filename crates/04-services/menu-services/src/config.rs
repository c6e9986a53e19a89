//! Configuration file that seeds the in-memory collaborators.

use crate::cheats::CheatList;
use crate::cores::{CoreInfoList, CoreOptionList};
use crate::devices::{DiskTray, VideoOutputs};
use crate::error::{ConfigError, ConfigResult};
use crate::navigation::NavState;
use crate::settings::{ConfigStore, SettingValue};
use crate::shader::ShaderPreset;
use menu_abi::{
    Cheat, CoreInfo, CoreOption, ListInfo, MenuEnumLabel, Resolution, SettingRef, SettingsStore,
    ShaderParameter, ShaderPass, Tab, TypeCode, BINDS_PER_USER, MAX_USERS,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete menu configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    /// Absent when the build has no shader subsystem.
    #[serde(default)]
    pub shader: Option<ShaderConfig>,
    #[serde(default)]
    pub cheats: Vec<Cheat>,
    #[serde(default)]
    pub cores: Vec<CoreInfo>,
    #[serde(default)]
    pub core_options: Vec<CoreOption>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub disk: Option<DiskConfig>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Rows of the menu list, in display order.
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// One menu row as written in a scenario file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    pub label: String,
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub tab: Tab,
    #[serde(default)]
    pub enum_label: Option<MenuEnumLabel>,
    #[serde(default)]
    pub setting: Option<SettingRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    #[serde(default)]
    pub navigation_wraparound: bool,
    /// `;`-joined playlist names.
    #[serde(default)]
    pub playlist_names: String,
    /// `;`-joined core paths, parallel to `playlist_names`.
    #[serde(default)]
    pub playlist_cores: String,
    #[serde(default)]
    pub input_remaps: Vec<RemapConfig>,
    #[serde(default)]
    pub values: Vec<SettingDef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemapConfig {
    pub user: usize,
    pub button: usize,
    pub id: u32,
}

/// Adjustable setting declaration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingDef {
    Bool {
        name: String,
        value: bool,
    },
    #[serde(rename = "uint")]
    UInt {
        name: String,
        value: u32,
        min: u32,
        max: u32,
        #[serde(default = "default_uint_step")]
        step: u32,
    },
    Float {
        name: String,
        value: f32,
        min: f32,
        max: f32,
        step: f32,
    },
}

fn default_uint_step() -> u32 {
    1
}

impl SettingDef {
    pub fn name(&self) -> &str {
        match self {
            SettingDef::Bool { name, .. }
            | SettingDef::UInt { name, .. }
            | SettingDef::Float { name, .. } => name,
        }
    }

    fn to_value(&self) -> SettingValue {
        match *self {
            SettingDef::Bool { value, .. } => SettingValue::Bool(value),
            SettingDef::UInt {
                value,
                min,
                max,
                step,
                ..
            } => SettingValue::UInt {
                value,
                min,
                max,
                step,
            },
            SettingDef::Float {
                value,
                min,
                max,
                step,
                ..
            } => SettingValue::Float {
                value,
                min,
                max,
                step,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShaderConfig {
    #[serde(default = "default_true")]
    pub loaded: bool,
    #[serde(default)]
    pub passes: Vec<ShaderPass>,
    #[serde(default)]
    pub parameters: Vec<ShaderParameter>,
    /// Defaults to a copy of `parameters`.
    #[serde(default)]
    pub preset_parameters: Option<Vec<ShaderParameter>>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub resolutions: Vec<Resolution>,
    #[serde(default)]
    pub current: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiskConfig {
    pub count: usize,
    #[serde(default)]
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    #[serde(default)]
    pub selection: usize,
    /// Rows in the current list; defaults to the number of scenario entries.
    #[serde(default)]
    pub entries: Option<usize>,
    #[serde(default = "default_scroll_accel")]
    pub scroll_accel: Option<usize>,
    #[serde(default = "default_list_size")]
    pub list_size: usize,
    #[serde(default)]
    pub list_selection: usize,
    #[serde(default)]
    pub content_switch: bool,
}

fn default_scroll_accel() -> Option<usize> {
    Some(0)
}

fn default_list_size() -> usize {
    1
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            selection: 0,
            entries: None,
            scroll_accel: default_scroll_accel(),
            list_size: default_list_size(),
            list_selection: 0,
            content_switch: false,
        }
    }
}

impl MenuConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: MenuConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> ConfigResult<()> {
        for remap in &self.settings.input_remaps {
            if remap.user >= MAX_USERS as usize || remap.button >= BINDS_PER_USER as usize {
                return Err(ConfigError::invalid(format!(
                    "input remap user {} button {} out of range",
                    remap.user, remap.button
                )));
            }
        }
        for def in &self.settings.values {
            let ordered = match *def {
                SettingDef::Bool { .. } => true,
                SettingDef::UInt {
                    value, min, max, ..
                } => min <= max && (min..=max).contains(&value),
                SettingDef::Float {
                    value, min, max, ..
                } => min <= max && (min..=max).contains(&value),
            };
            if !ordered {
                return Err(ConfigError::invalid(format!(
                    "setting {} must satisfy min <= value <= max",
                    def.name()
                )));
            }
        }
        if let Some(shader) = &self.shader {
            let preset = shader.preset_parameters.iter().flatten();
            for param in shader.parameters.iter().chain(preset) {
                if param.minimum > param.maximum {
                    return Err(ConfigError::invalid(format!(
                        "shader parameter {} has minimum above maximum",
                        param.id
                    )));
                }
            }
            for pass in &shader.passes {
                if pass.filter > 2 || pass.fbo.scale_x > 5 {
                    return Err(ConfigError::invalid(format!(
                        "shader pass {} has filter/scale out of range",
                        pass.source
                    )));
                }
            }
        }
        for option in &self.core_options {
            if !option.values.is_empty() && option.index >= option.values.len() {
                return Err(ConfigError::invalid(format!(
                    "core option {} index out of range",
                    option.key
                )));
            }
        }
        Ok(())
    }

    pub fn settings_store(&self) -> ConfigStore {
        let mut store = ConfigStore::new();
        let settings = &self.settings;
        store.set_navigation_wraparound(settings.navigation_wraparound);
        store.set_string_array(
            menu_abi::StringArray::PlaylistNames,
            settings.playlist_names.clone(),
        );
        store.set_string_array(
            menu_abi::StringArray::PlaylistCores,
            settings.playlist_cores.clone(),
        );
        for remap in &settings.input_remaps {
            store.set_input_remap_id(remap.user, remap.button, remap.id);
        }
        for def in &settings.values {
            store.insert(def.name(), def.to_value());
        }
        store
    }

    /// Shader preset, or `None` when the shader subsystem is absent.
    pub fn shader_preset(&self) -> Option<ShaderPreset> {
        let shader = self.shader.as_ref()?;
        if !shader.loaded {
            return Some(ShaderPreset::unloaded());
        }
        let preset = ShaderPreset::new(shader.passes.clone(), shader.parameters.clone());
        Some(match &shader.preset_parameters {
            Some(params) => preset.with_preset_parameters(params.clone()),
            None => preset,
        })
    }

    pub fn cheat_list(&self) -> CheatList {
        CheatList::new(self.cheats.clone())
    }

    pub fn core_catalog(&self) -> CoreInfoList {
        CoreInfoList::new(self.cores.clone())
    }

    pub fn core_option_list(&self) -> CoreOptionList {
        CoreOptionList::new(self.core_options.clone())
    }

    pub fn video_outputs(&self) -> VideoOutputs {
        VideoOutputs::new(self.display.resolutions.clone(), self.display.current)
    }

    pub fn disk_tray(&self) -> Option<DiskTray> {
        self.disk.map(|disk| DiskTray::new(disk.count, disk.index))
    }

    /// Navigation state over a list of `default_entries` rows unless overridden.
    pub fn nav_state(&self, default_entries: usize) -> NavState {
        let nav = &self.navigation;
        NavState::new(nav.entries.unwrap_or(default_entries))
            .with_selection(nav.selection)
            .with_scroll_accel(nav.scroll_accel)
            .with_list(ListInfo {
                size: nav.list_size,
                selection: nav.list_selection,
            })
            .with_content_switch(nav.content_switch)
    }
}
