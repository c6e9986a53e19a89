//! Collaborator bundle threaded into every left action.

use anyhow::{anyhow, Result};
use menu_abi::{
    CheatManager, CoreCatalog, CoreOptions, DiskControl, DisplayOutputs, Navigation,
    SettingsStore, ShaderManager,
};

/// Borrowed handles to the subsystems a left action may touch.
///
/// Only the settings store is mandatory. Every other collaborator is optional;
/// actions that need a missing one either degrade to a no-op or request a menu exit.
pub struct MenuContext<'a> {
    pub(crate) settings: &'a mut dyn SettingsStore,
    pub(crate) navigation: Option<&'a mut dyn Navigation>,
    pub(crate) shader: Option<&'a mut dyn ShaderManager>,
    pub(crate) cheats: Option<&'a mut dyn CheatManager>,
    pub(crate) cores: Option<&'a dyn CoreCatalog>,
    pub(crate) core_options: Option<&'a mut dyn CoreOptions>,
    pub(crate) display: Option<&'a mut dyn DisplayOutputs>,
    pub(crate) disks: Option<&'a mut dyn DiskControl>,
}

impl<'a> MenuContext<'a> {
    /// Creates a new builder for constructing a context.
    pub fn builder() -> MenuContextBuilder<'a> {
        MenuContextBuilder::new()
    }

    pub fn settings(&mut self) -> &mut dyn SettingsStore {
        &mut *self.settings
    }

    /// Whether a shader subsystem is attached.
    pub fn has_shader(&self) -> bool {
        self.shader.is_some()
    }
}

/// Builder for assembling a [`MenuContext`] from individual collaborators.
pub struct MenuContextBuilder<'a> {
    settings: Option<&'a mut dyn SettingsStore>,
    navigation: Option<&'a mut dyn Navigation>,
    shader: Option<&'a mut dyn ShaderManager>,
    cheats: Option<&'a mut dyn CheatManager>,
    cores: Option<&'a dyn CoreCatalog>,
    core_options: Option<&'a mut dyn CoreOptions>,
    display: Option<&'a mut dyn DisplayOutputs>,
    disks: Option<&'a mut dyn DiskControl>,
}

impl<'a> MenuContextBuilder<'a> {
    /// Creates an empty builder with no collaborators attached.
    pub fn new() -> Self {
        Self {
            settings: None,
            navigation: None,
            shader: None,
            cheats: None,
            cores: None,
            core_options: None,
            display: None,
            disks: None,
        }
    }

    pub fn settings(mut self, settings: &'a mut dyn SettingsStore) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn navigation(mut self, navigation: &'a mut dyn Navigation) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn shader(mut self, shader: &'a mut dyn ShaderManager) -> Self {
        self.shader = Some(shader);
        self
    }

    pub fn cheats(mut self, cheats: &'a mut dyn CheatManager) -> Self {
        self.cheats = Some(cheats);
        self
    }

    pub fn cores(mut self, cores: &'a dyn CoreCatalog) -> Self {
        self.cores = Some(cores);
        self
    }

    pub fn core_options(mut self, options: &'a mut dyn CoreOptions) -> Self {
        self.core_options = Some(options);
        self
    }

    pub fn display(mut self, display: &'a mut dyn DisplayOutputs) -> Self {
        self.display = Some(display);
        self
    }

    pub fn disks(mut self, disks: &'a mut dyn DiskControl) -> Self {
        self.disks = Some(disks);
        self
    }

    /// Builds a [`MenuContext`], returning an error if the settings store is missing.
    pub fn build(self) -> Result<MenuContext<'a>> {
        Ok(MenuContext {
            settings: self
                .settings
                .ok_or_else(|| anyhow!("missing settings store"))?,
            navigation: self.navigation,
            shader: self.shader,
            cheats: self.cheats,
            cores: self.cores,
            core_options: self.core_options,
            display: self.display,
            disks: self.disks,
        })
    }
}

impl Default for MenuContextBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
