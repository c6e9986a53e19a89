//! Closed registry of left (decrement) actions.

use crate::context::MenuContext;
use crate::handlers;
use menu_abi::{ActionOutcome, TypeCode};
use std::fmt;

/// Handler bound to an entry for the left input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeftAction {
    /// Adjust the bound setting through the settings store.
    Generic,
    /// Switch to the neighbouring horizontal list, or reset/scroll the current one.
    ListCollapse,
    /// Move the selection up by one page.
    ScrollPage,
    CheatToggle,
    /// Live shader parameter.
    ShaderParameter,
    /// Parameter of the preset being edited.
    ShaderPresetParameter,
    InputRemap,
    PlaylistAssociation,
    CoreOption,
    DiskIndex,
    ShaderScalePass,
    ShaderFilterPass,
    ShaderDefaultFilter,
    ShaderNumPasses,
    CheatNumPasses,
    VideoResolution,
}

impl LeftAction {
    pub const ALL: [LeftAction; 16] = [
        LeftAction::Generic,
        LeftAction::ListCollapse,
        LeftAction::ScrollPage,
        LeftAction::CheatToggle,
        LeftAction::ShaderParameter,
        LeftAction::ShaderPresetParameter,
        LeftAction::InputRemap,
        LeftAction::PlaylistAssociation,
        LeftAction::CoreOption,
        LeftAction::DiskIndex,
        LeftAction::ShaderScalePass,
        LeftAction::ShaderFilterPass,
        LeftAction::ShaderDefaultFilter,
        LeftAction::ShaderNumPasses,
        LeftAction::CheatNumPasses,
        LeftAction::VideoResolution,
    ];

    /// Debug identifier of the handler.
    pub fn ident(self) -> &'static str {
        match self {
            LeftAction::Generic => "left_generic",
            LeftAction::ListCollapse => "left_list_collapse",
            LeftAction::ScrollPage => "left_scroll_page",
            LeftAction::CheatToggle => "left_cheat_toggle",
            LeftAction::ShaderParameter => "left_shader_parameter",
            LeftAction::ShaderPresetParameter => "left_shader_preset_parameter",
            LeftAction::InputRemap => "left_input_remap",
            LeftAction::PlaylistAssociation => "left_playlist_association",
            LeftAction::CoreOption => "left_core_option",
            LeftAction::DiskIndex => "left_disk_index",
            LeftAction::ShaderScalePass => "left_shader_scale_pass",
            LeftAction::ShaderFilterPass => "left_shader_filter_pass",
            LeftAction::ShaderDefaultFilter => "left_shader_default_filter",
            LeftAction::ShaderNumPasses => "left_shader_num_passes",
            LeftAction::CheatNumPasses => "left_cheat_num_passes",
            LeftAction::VideoResolution => "left_video_resolution",
        }
    }

    /// Runs the handler for an entry with the given type code and label.
    pub fn invoke(
        self,
        ctx: &mut MenuContext<'_>,
        type_code: TypeCode,
        label: &str,
        wraparound: bool,
    ) -> ActionOutcome {
        match self {
            LeftAction::Generic => handlers::generic(ctx, type_code, label, wraparound),
            LeftAction::ListCollapse => handlers::list_collapse(ctx),
            LeftAction::ScrollPage => handlers::scroll_page(ctx),
            LeftAction::CheatToggle => handlers::cheat_toggle(ctx, type_code, wraparound),
            LeftAction::ShaderParameter => handlers::shader_parameter(ctx, type_code),
            LeftAction::ShaderPresetParameter => handlers::shader_preset_parameter(ctx, type_code),
            LeftAction::InputRemap => handlers::input_remap(ctx, type_code),
            LeftAction::PlaylistAssociation => {
                handlers::playlist_association(ctx, label, wraparound)
            }
            LeftAction::CoreOption => handlers::core_option(ctx, type_code),
            LeftAction::DiskIndex => handlers::disk_index(ctx),
            LeftAction::ShaderScalePass => handlers::shader_scale_pass(ctx, type_code),
            LeftAction::ShaderFilterPass => handlers::shader_filter_pass(ctx, type_code),
            LeftAction::ShaderDefaultFilter => handlers::shader_default_filter(ctx, wraparound),
            LeftAction::ShaderNumPasses => handlers::shader_num_passes(ctx),
            LeftAction::CheatNumPasses => handlers::cheat_num_passes(ctx),
            LeftAction::VideoResolution => handlers::video_resolution(ctx),
        }
    }
}

impl fmt::Display for LeftAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}
