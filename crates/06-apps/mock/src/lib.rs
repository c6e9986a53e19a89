//! In-memory menu with every collaborator attached.

use anyhow::Result;
use menu_abi::ActionOutcome;
use menu_left::{CallbackSlot, Capabilities, EntryDescriptor, LeftResolver, MenuContext};
use menu_services::{
    CheatList, ConfigStore, CoreInfoList, CoreOptionList, DiskTray, MenuConfig, NavState,
    ShaderPreset, VideoOutputs,
};

/// Owns one instance of each in-memory subsystem.
///
/// `shader` and `disk` are optional; leaving them out exercises the degraded paths.
#[derive(Clone, Debug, Default)]
pub struct MockMenu {
    pub settings: ConfigStore,
    pub navigation: NavState,
    pub shader: Option<ShaderPreset>,
    pub cheats: CheatList,
    pub cores: CoreInfoList,
    pub core_options: CoreOptionList,
    pub display: VideoOutputs,
    pub disk: Option<DiskTray>,
}

impl MockMenu {
    /// Empty menu over a list of `entries` rows.
    pub fn new(entries: usize) -> Self {
        Self {
            navigation: NavState::new(entries),
            ..Self::default()
        }
    }

    /// Seeds every subsystem from a parsed configuration.
    pub fn from_config(config: &MenuConfig, entries: usize) -> Self {
        Self {
            settings: config.settings_store(),
            navigation: config.nav_state(entries),
            shader: config.shader_preset(),
            cheats: config.cheat_list(),
            cores: config.core_catalog(),
            core_options: config.core_option_list(),
            display: config.video_outputs(),
            disk: config.disk_tray(),
        }
    }

    /// Capabilities matching the attached subsystems.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            shader_manager: self.shader.is_some(),
        }
    }

    pub fn resolver(&self) -> LeftResolver {
        LeftResolver::new(self.capabilities())
    }

    /// Borrows every subsystem into a context.
    pub fn context(&mut self) -> Result<MenuContext<'_>> {
        let mut builder = MenuContext::builder()
            .settings(&mut self.settings)
            .navigation(&mut self.navigation)
            .cheats(&mut self.cheats)
            .cores(&self.cores)
            .core_options(&mut self.core_options)
            .display(&mut self.display);
        if let Some(shader) = self.shader.as_mut() {
            builder = builder.shader(shader);
        }
        if let Some(disk) = self.disk.as_mut() {
            builder = builder.disks(disk);
        }
        builder.build()
    }

    /// Invokes `slot` for `entry` as a left press.
    pub fn press(
        &mut self,
        slot: &CallbackSlot,
        entry: &EntryDescriptor,
        wraparound: bool,
    ) -> Result<ActionOutcome> {
        let mut ctx = self.context()?;
        Ok(slot.invoke(&mut ctx, entry.type_code(), entry.label(), wraparound))
    }
}
