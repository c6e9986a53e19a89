//! Two-stage rule engine choosing the left action for a menu entry.
//!
//! Stage 0 handles the "no selectable item" sentinel in list-browsing tabs.
//! Stage 1 inspects intent: bound setting, label category, owning tab and
//! semantic identifier. Stage 2 inspects mechanism: the numeric type code.
//! The first rule that matches wins; intent always beats mechanism.

use crate::action::LeftAction;
use crate::descriptor::{EntryDescriptor, LabelTag};
use crate::slot::CallbackSlot;
use crate::ResolveError;
use log::{debug, trace};
use menu_abi::{MenuEnumLabel, SettingKind, Tab, TypeCode};
use std::fmt;

/// Optional subsystems the resolver may bind actions for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Shader parameter ranges are only bound when a shader manager is present.
    pub shader_manager: bool,
}

impl Capabilities {
    pub const fn full() -> Self {
        Self {
            shader_manager: true,
        }
    }

    pub const fn without_shader() -> Self {
        Self {
            shader_manager: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// Rule that produced a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    NoItemSentinel,
    MainMenuGroup,
    JoypadIndex,
    PlaylistsTab,
    DatabaseEntry,
    Semantic(MenuEnumLabel),
    CheatRange,
    ShaderParameterRange,
    ShaderPresetParameterRange,
    InputDescRange,
    PlaylistAssociationRange,
    CoreOptionRange,
    DiskIndex,
    Browsable,
    GroupAction,
}

impl Rule {
    /// Stage the rule belongs to (0, 1 or 2).
    pub fn stage(self) -> u8 {
        match self {
            Rule::NoItemSentinel => 0,
            Rule::MainMenuGroup
            | Rule::JoypadIndex
            | Rule::PlaylistsTab
            | Rule::DatabaseEntry
            | Rule::Semantic(_) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NoItemSentinel => f.write_str("no_item_sentinel"),
            Rule::MainMenuGroup => f.write_str("main_menu_group"),
            Rule::JoypadIndex => f.write_str("joypad_index"),
            Rule::PlaylistsTab => f.write_str("playlists_tab"),
            Rule::DatabaseEntry => f.write_str("database_entry"),
            Rule::Semantic(label) => write!(f, "semantic:{label:?}"),
            Rule::CheatRange => f.write_str("cheat_range"),
            Rule::ShaderParameterRange => f.write_str("shader_parameter_range"),
            Rule::ShaderPresetParameterRange => f.write_str("shader_preset_parameter_range"),
            Rule::InputDescRange => f.write_str("input_desc_range"),
            Rule::PlaylistAssociationRange => f.write_str("playlist_association_range"),
            Rule::CoreOptionRange => f.write_str("core_option_range"),
            Rule::DiskIndex => f.write_str("disk_index"),
            Rule::Browsable => f.write_str("browsable"),
            Rule::GroupAction => f.write_str("group_action"),
        }
    }
}

/// Action chosen for an entry together with the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub action: LeftAction,
    pub rule: Rule,
}

impl Binding {
    fn new(action: LeftAction, rule: Rule) -> Self {
        Self { action, rule }
    }
}

/// Decrement Action Resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeftResolver {
    caps: Capabilities,
}

impl LeftResolver {
    pub fn new(caps: Capabilities) -> Self {
        Self { caps }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Classifies `entry`. `Err(NoRule)` is a normal outcome for plain settings.
    pub fn resolve(&self, entry: &EntryDescriptor) -> Result<Binding, ResolveError> {
        if let Some(binding) = sentinel_rule(entry) {
            return Ok(binding);
        }
        trace!("resolve: stage 0 miss for {:?}", entry.label());

        if let Some(binding) = label_rule(entry) {
            return Ok(binding);
        }
        trace!("resolve: stage 1 miss for {:?}", entry.label());

        if let Some(binding) = self.type_rule(entry.type_code(), entry.tab()) {
            return Ok(binding);
        }
        trace!("resolve: stage 2 miss for {:?}", entry.label());

        Err(ResolveError::NoRule {
            type_code: entry.type_code(),
            label: entry.label().to_owned(),
        })
    }

    /// Binds the generic action into `slot`, then overwrites it with the resolved action.
    ///
    /// On failure the slot keeps the generic binding.
    pub fn bind(
        &self,
        slot: &mut CallbackSlot,
        entry: &EntryDescriptor,
    ) -> Result<Binding, ResolveError> {
        slot.bind(LeftAction::Generic);
        let binding = self.resolve(entry)?;
        slot.bind(binding.action);
        debug!(
            "bind: index={} type={} tab={} handler={} rule={}",
            entry.index(),
            entry.type_code(),
            entry.tab(),
            binding.action,
            binding.rule
        );
        Ok(binding)
    }

    /// Builds one slot per entry, in order.
    pub fn populate<'e, I>(&self, entries: I) -> Vec<CallbackSlot>
    where
        I: IntoIterator<Item = &'e EntryDescriptor>,
    {
        entries
            .into_iter()
            .map(|entry| {
                let mut slot = CallbackSlot::default();
                if let Err(err) = self.bind(&mut slot, entry) {
                    debug!("populate: {err}; keeping {}", slot.ident());
                }
                slot
            })
            .collect()
    }

    fn type_rule(&self, type_code: TypeCode, tab: &Tab) -> Option<Binding> {
        let ranged = if TypeCode::cheat_range().contains(&type_code) {
            Some(Binding::new(LeftAction::CheatToggle, Rule::CheatRange))
        } else if self.caps.shader_manager
            && TypeCode::shader_parameter_range().contains(&type_code)
        {
            Some(Binding::new(
                LeftAction::ShaderParameter,
                Rule::ShaderParameterRange,
            ))
        } else if self.caps.shader_manager
            && TypeCode::shader_preset_parameter_range().contains(&type_code)
        {
            Some(Binding::new(
                LeftAction::ShaderPresetParameter,
                Rule::ShaderPresetParameterRange,
            ))
        } else if TypeCode::input_desc_range().contains(&type_code) {
            Some(Binding::new(LeftAction::InputRemap, Rule::InputDescRange))
        } else if type_code >= TypeCode::PLAYLIST_ASSOCIATION_START {
            Some(Binding::new(
                LeftAction::PlaylistAssociation,
                Rule::PlaylistAssociationRange,
            ))
        } else if type_code >= TypeCode::CORE_OPTION_START {
            Some(Binding::new(LeftAction::CoreOption, Rule::CoreOptionRange))
        } else {
            None
        };
        if ranged.is_some() {
            return ranged;
        }

        match type_code {
            TypeCode::DISK_INDEX => Some(Binding::new(LeftAction::DiskIndex, Rule::DiskIndex)),
            TypeCode::SETTING_ACTION | TypeCode::CONTENT_LIST_ENTRY => {
                Some(Binding::new(LeftAction::ListCollapse, Rule::GroupAction))
            }
            code if code.is_browsable() => {
                let action = if tab.is_content_tab() {
                    LeftAction::ListCollapse
                } else {
                    LeftAction::ScrollPage
                };
                Some(Binding::new(action, Rule::Browsable))
            }
            _ => None,
        }
    }
}

fn sentinel_rule(entry: &EntryDescriptor) -> Option<Binding> {
    (entry.type_code() == TypeCode::NO_ITEM && entry.tab().is_list_browsing())
        .then(|| Binding::new(LeftAction::ListCollapse, Rule::NoItemSentinel))
}

fn label_rule(entry: &EntryDescriptor) -> Option<Binding> {
    if let Some(setting) = entry.setting() {
        if setting.is_main_menu_group() && setting.kind == SettingKind::Group {
            return Some(Binding::new(LeftAction::ListCollapse, Rule::MainMenuGroup));
        }
    }

    if let LabelTag::JoypadIndex { .. } = entry.tag() {
        return Some(Binding::new(LeftAction::Generic, Rule::JoypadIndex));
    }

    if *entry.tab() == Tab::Playlists {
        return Some(Binding::new(LeftAction::ListCollapse, Rule::PlaylistsTab));
    }

    if entry.tag() == LabelTag::DatabaseEntry {
        return Some(Binding::new(LeftAction::ScrollPage, Rule::DatabaseEntry));
    }

    let semantic = entry.enum_label()?;
    semantic_action(semantic, entry.tab())
        .map(|action| Binding::new(action, Rule::Semantic(semantic)))
}

fn semantic_action(semantic: MenuEnumLabel, tab: &Tab) -> Option<LeftAction> {
    use MenuEnumLabel::*;

    match semantic {
        ConnectNetplayRoom => Some(LeftAction::ListCollapse),
        ShaderScalePass => Some(LeftAction::ShaderScalePass),
        ShaderFilterPass => Some(LeftAction::ShaderFilterPass),
        ShaderDefaultFilter => Some(LeftAction::ShaderDefaultFilter),
        ShaderNumPasses => Some(LeftAction::ShaderNumPasses),
        CheatNumPasses => Some(LeftAction::CheatNumPasses),
        ScreenResolution => Some(LeftAction::VideoResolution),
        OpenArchiveDetectCore | LoadArchiveDetectCore => Some(LeftAction::ScrollPage),
        NoItems | NoPlaylistEntries => Some(if tab.is_list_browsing() {
            LeftAction::ListCollapse
        } else {
            LeftAction::ScrollPage
        }),
        // Outside the content tabs these fall through to the type rules.
        StartVideoProcessor | TakeScreenshot => {
            tab.is_content_tab().then_some(LeftAction::ListCollapse)
        }
        VideoSmooth | QuickMenu | Information | LoadContent | CoreOptions | DiskIndex => None,
    }
}
