//! Menu ABI types shared between the decrement resolver and the subsystems it drives.
//!
//! This crate defines the boundary between the menu entry logic (layer 05) and the
//! settings, shader, cheat, core and navigation subsystems (layer 04). It carries
//! vocabulary types and collaborator traits only.

#![allow(missing_docs)]

/// Semantic identifiers and bound-setting metadata.
pub mod label;
/// Records owned by the collaborating subsystems.
pub mod records;
/// Owning-tab identifiers.
pub mod tab;
/// Numeric type codes and family ranges.
pub mod type_code;

pub use crate::label::{MenuEnumLabel, SettingKind, SettingRef, MAIN_MENU_GROUP};
pub use crate::records::{
    ActionOutcome, Cheat, CoreInfo, CoreOption, FboScale, ListInfo, ListKind, MenuAction,
    Resolution, ShaderParameter, ShaderPass, StringArray,
};
pub use crate::tab::Tab;
pub use crate::type_code::{
    TypeCode, BINDS_PER_USER, FIRST_CUSTOM_BIND, MAX_CHEATS, MAX_SHADER_PARAMETERS,
    MAX_SHADER_PASSES, MAX_USERS,
};

/// Configuration store holding scalar settings, string lists and input remaps.
pub trait SettingsStore {
    /// Applies `action` to the setting bound to the entry `(type_code, label)`.
    fn apply_action(
        &mut self,
        type_code: TypeCode,
        label: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> ActionOutcome;

    /// Applies `action` to the named setting; `None` when no such setting exists.
    fn apply_named(&mut self, name: &str, action: MenuAction, wraparound: bool)
        -> Option<ActionOutcome>;

    /// Whether menu navigation wraps around at list edges.
    fn navigation_wraparound(&self) -> bool;

    fn string_array(&self, key: StringArray) -> &str;

    fn set_string_array(&mut self, key: StringArray, value: String);

    /// Remapped button id for `user` / `button`, if both are in range.
    fn input_remap_id(&self, user: usize, button: usize) -> Option<u32>;

    fn set_input_remap_id(&mut self, user: usize, button: usize, id: u32);
}

/// Navigation cursor and list refresh flags of the active menu.
pub trait Navigation {
    fn selection(&self) -> usize;

    /// Moves the selection; implementations keep it within the current list.
    fn set_selection(&mut self, index: usize);

    /// Scroll acceleration counter, when the driver tracks one.
    fn scroll_accel(&self) -> Option<usize>;

    /// Marks the navigation state as changed.
    fn set_dirty(&mut self);

    /// Drops any pending list refresh request.
    fn clear_pending_refresh(&mut self);

    /// Size and selection of the plain list stack.
    fn list_info(&self) -> ListInfo;

    /// Caches navigation context ahead of a list switch.
    fn cache_list(&mut self, kind: ListKind, action: MenuAction);

    /// Runs the active entry's content-list switch; `None` when it has none.
    fn content_list_switch(&mut self) -> Option<ActionOutcome>;

    /// Requests the entry list to be rebuilt.
    fn request_refresh(&mut self);

    /// Blocks list repopulation until the pending refresh completes.
    fn prevent_populate(&mut self);
}

/// Shader preset currently being edited.
pub trait ShaderManager {
    /// Whether a shader preset is loaded.
    fn is_loaded(&self) -> bool;

    fn pass_mut(&mut self, index: usize) -> Option<&mut ShaderPass>;

    /// Parameter of the shader running on the video driver.
    fn parameter_mut(&mut self, index: usize) -> Option<&mut ShaderParameter>;

    /// Parameter of the preset held by the shader manager.
    fn preset_parameter_mut(&mut self, index: usize) -> Option<&mut ShaderParameter>;

    fn pass_count(&self) -> usize;

    fn decrement_pass_count(&mut self);

    /// Re-resolves parameter bindings against the active passes.
    fn resolve_parameters(&mut self);
}

/// Cheat list of the running content.
pub trait CheatManager {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resize(&mut self, len: usize);

    /// Toggles the cheat at `index` in the given direction.
    fn toggle(&mut self, index: usize, action: MenuAction, wraparound: bool) -> ActionOutcome;
}

/// Ordered catalog of installed cores.
pub trait CoreCatalog {
    fn cores(&self) -> &[CoreInfo];
}

/// Option store of the running core.
pub trait CoreOptions {
    fn prev(&mut self, index: usize);
}

/// Display subsystem exposing the supported output resolutions.
pub trait DisplayOutputs {
    fn prev_output(&mut self);
}

/// Disk control interface of the running core.
pub trait DiskControl {
    fn prev_disk(&mut self);
}
