//! End-to-end flows: configuration -> population -> presses -> subsystem state.

use menu_abi::{
    ActionOutcome, CheatManager, Navigation, SettingsStore, ShaderManager, StringArray, Tab,
    TypeCode,
};
use menu_left::{CallbackSlot, EntryDescriptor, LeftAction, Rule};
use menu_services::{MenuConfig, SettingValue};
use mock::MockMenu;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const SCENARIO: &str = r#"
[settings]
playlist_names = "Game A;Game B"
playlist_cores = "coreX;coreY"

[[settings.values]]
kind = "bool"
name = "video_smooth"
value = false

[shader]
passes = [{ source = "a.slang", fbo = { valid = true, scale_x = 1, scale_y = 1 } }, { source = "b.slang" }]
parameters = [
  { id = "gamma", pass = 0, current = 1.0, minimum = 0.5, maximum = 2.0, step = 0.25 },
  { id = "glow", pass = 1, current = 0.2, minimum = 0.0, maximum = 1.0, step = 0.1 },
]

[[cheats]]
desc = "a"
[[cheats]]
desc = "b"

[[cores]]
path = "coreW"
[[cores]]
path = "coreX"
[[cores]]
path = "coreY"

[navigation]
selection = 9
scroll_accel = 2

[[entries]]
label = "Game A"
type = 0x20000
tab = "deferred_playlist_settings_list"

[[entries]]
label = "video_shader_num_passes"
type = 0
tab = "deferred_video_shader_preset_list"
enum_label = "shader_num_passes"

[[entries]]
label = "glow"
type = 0x1001
tab = "deferred_video_shader_parameters"

[[entries]]
label = "video_shader_default_filter"
type = 0
tab = "deferred_video_shader_preset_list"
enum_label = "shader_default_filter"

[[entries]]
label = "cheat_num_passes"
type = 0
tab = "deferred_cheat_list"
enum_label = "cheat_num_passes"

[[entries]]
label = "deferred_rdb_entry_detail"
type = 7
tab = "deferred_database_list"
"#;

struct Scenario {
    menu: MockMenu,
    entries: Vec<EntryDescriptor>,
    slots: Vec<CallbackSlot>,
}

impl Scenario {
    fn load(text: &str) -> Self {
        let config = MenuConfig::from_toml_str(text).expect("scenario parses");
        let entries: Vec<_> = config
            .entries
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let mut builder = EntryDescriptor::builder(row.label.clone(), row.type_code)
                    .index(index)
                    .tab(row.tab.clone());
                if let Some(label) = row.enum_label {
                    builder = builder.enum_label(label);
                }
                builder.build()
            })
            .collect();
        let menu = MockMenu::from_config(&config, 16);
        let slots = menu.resolver().populate(&entries);
        Self {
            menu,
            entries,
            slots,
        }
    }

    fn press(&mut self, index: usize, wrap: bool) -> ActionOutcome {
        self.menu
            .press(&self.slots[index], &self.entries[index], wrap)
            .expect("context")
    }

    fn repopulate(&mut self) {
        self.slots = self.menu.resolver().populate(&self.entries);
    }
}

#[test]
fn population_binds_every_family() {
    init_logs();
    let scenario = Scenario::load(SCENARIO);
    let actions: Vec<_> = scenario.slots.iter().map(CallbackSlot::action).collect();
    assert_eq!(
        actions,
        [
            LeftAction::PlaylistAssociation,
            LeftAction::ShaderNumPasses,
            LeftAction::ShaderParameter,
            LeftAction::ShaderDefaultFilter,
            LeftAction::CheatNumPasses,
            LeftAction::ScrollPage,
        ]
    );
}

#[test]
fn playlist_association_follows_catalog_order() {
    let mut scenario = Scenario::load(SCENARIO);

    assert_eq!(scenario.press(0, false), ActionOutcome::Handled);
    assert_eq!(
        scenario.menu.settings.string_array(StringArray::PlaylistCores),
        "coreW;coreY"
    );
    scenario.press(0, false);
    assert_eq!(
        scenario.menu.settings.string_array(StringArray::PlaylistCores),
        "coreW;coreY"
    );
    scenario.press(0, true);
    assert_eq!(
        scenario.menu.settings.string_array(StringArray::PlaylistCores),
        "coreY;coreY"
    );
    assert_eq!(
        scenario.menu.settings.string_array(StringArray::PlaylistNames),
        "Game A;Game B"
    );
}

#[test]
fn dropping_a_shader_pass_retires_its_parameters() {
    let mut scenario = Scenario::load(SCENARIO);
    let shader = scenario.menu.shader.as_ref().expect("shader");
    assert_eq!(shader.parameters().len(), 2);

    assert_eq!(scenario.press(2, false), ActionOutcome::Handled);
    let glow = &scenario.menu.shader.as_ref().expect("shader").parameters()[1];
    assert!((glow.current - 0.1).abs() < 1e-6);

    assert_eq!(scenario.press(1, false), ActionOutcome::Handled);
    assert!(scenario.menu.navigation.refresh_pending);
    assert!(scenario.menu.navigation.populate_blocked);
    let shader = scenario.menu.shader.as_ref().expect("shader");
    assert_eq!(shader.pass_count(), 1);
    assert_eq!(shader.parameters().len(), 1);

    // The stale slot now points past the live table and degrades to a no-op.
    assert_eq!(scenario.press(2, false), ActionOutcome::Handled);
    assert_eq!(
        scenario.menu.shader.as_ref().expect("shader").parameters()[0].current,
        1.0
    );
}

#[test]
fn default_filter_toggles_video_smooth() {
    let mut scenario = Scenario::load(SCENARIO);
    scenario.press(3, false);
    assert_eq!(
        scenario.menu.settings.value("video_smooth"),
        Some(&SettingValue::Bool(true))
    );
}

#[test]
fn cheat_count_bottoms_out_at_zero() {
    let mut scenario = Scenario::load(SCENARIO);
    for _ in 0..4 {
        assert_eq!(scenario.press(4, false), ActionOutcome::Handled);
    }
    assert_eq!(scenario.menu.cheats.len(), 0);
}

#[test]
fn database_rows_page_up() {
    let mut scenario = Scenario::load(SCENARIO);
    scenario.press(5, false);
    assert_eq!(scenario.menu.navigation.selection(), 1);
    scenario.press(5, false);
    assert_eq!(scenario.menu.navigation.selection(), 1);
}

#[test]
fn shaderless_build_drops_parameter_bindings() {
    let mut scenario = Scenario::load(SCENARIO);
    scenario.menu.shader = None;
    scenario.repopulate();

    assert_eq!(scenario.slots[2].action(), LeftAction::Generic);
    assert_eq!(scenario.slots[1].action(), LeftAction::ShaderNumPasses);
    assert_eq!(scenario.press(1, false), ActionOutcome::ExitMenu);
    assert_eq!(scenario.press(3, false), ActionOutcome::Handled);
    assert_eq!(
        scenario.menu.settings.value("video_smooth"),
        Some(&SettingValue::Bool(false))
    );
}

#[test]
fn repopulation_overwrites_slots_wholesale() {
    let mut scenario = Scenario::load(SCENARIO);
    scenario.slots[0].bind(LeftAction::ScrollPage);
    scenario.repopulate();
    assert_eq!(scenario.slots[0].action(), LeftAction::PlaylistAssociation);
    assert_eq!(scenario.slots[0].ident(), "left_playlist_association");
}

#[test]
fn history_sentinel_switches_lists() {
    init_logs();
    let entry = EntryDescriptor::builder("", TypeCode::NO_ITEM)
        .tab(Tab::History)
        .build();
    let mut menu = MockMenu::new(1);
    menu.navigation = menu
        .navigation
        .clone()
        .with_list(menu_abi::ListInfo {
            size: 2,
            selection: 1,
        })
        .with_content_switch(true);

    let mut slot = CallbackSlot::default();
    let binding = menu.resolver().bind(&mut slot, &entry).expect("sentinel");
    assert_eq!(binding.rule, Rule::NoItemSentinel);

    assert_eq!(menu.press(&slot, &entry, false).expect("press"), ActionOutcome::Handled);
    assert_eq!(menu.navigation.switches, 1);
    assert_eq!(menu.navigation.list_info().selection, 0);
}

#[test]
fn cheat_toggle_reaches_collaborator() {
    let entry = EntryDescriptor::builder("cheat", TypeCode::cheat(1))
        .tab(Tab::from_label("deferred_cheat_list"))
        .build();
    let mut menu = MockMenu::new(1);
    menu.cheats.resize(2);

    let slots = menu.resolver().populate([&entry]);
    menu.press(&slots[0], &entry, false).expect("press");
    assert!(menu.cheats.cheats()[1].enabled);
    assert!(!menu.cheats.cheats()[0].enabled);
}
