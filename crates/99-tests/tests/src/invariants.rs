//! Property tests for the bounded handlers and the resolver ordering.

use menu_abi::{
    CheatManager, FboScale, MenuEnumLabel, Navigation, SettingsStore, ShaderParameter, ShaderPass,
    Tab, TypeCode, BINDS_PER_USER, MAX_USERS,
};
use menu_left::{fast_scroll_speed, CallbackSlot, EntryDescriptor, LeftAction, LeftResolver};
use menu_services::{CheatList, NavState, ShaderPreset};
use mock::MockMenu;
use proptest::prelude::*;

fn shader_menu(pass: ShaderPass, param: ShaderParameter) -> MockMenu {
    let mut menu = MockMenu::new(1);
    menu.shader = Some(ShaderPreset::new(vec![pass], vec![param]));
    menu
}

fn press_n(menu: &mut MockMenu, action: LeftAction, type_code: TypeCode, times: usize) {
    let mut ctx = menu.context().expect("context");
    for _ in 0..times {
        action.invoke(&mut ctx, type_code, "", false);
    }
}

const SEMANTIC_RULES: [MenuEnumLabel; 9] = [
    MenuEnumLabel::ConnectNetplayRoom,
    MenuEnumLabel::ShaderScalePass,
    MenuEnumLabel::ShaderFilterPass,
    MenuEnumLabel::ShaderDefaultFilter,
    MenuEnumLabel::ShaderNumPasses,
    MenuEnumLabel::CheatNumPasses,
    MenuEnumLabel::ScreenResolution,
    MenuEnumLabel::OpenArchiveDetectCore,
    MenuEnumLabel::NoItems,
];

proptest! {
    #[test]
    fn shader_parameter_stays_within_bounds(
        minimum in -10.0f32..10.0,
        span in 0.0f32..20.0,
        start in -40.0f32..40.0,
        step in 0.0f32..5.0,
        presses in 1usize..40,
        preset in any::<bool>(),
    ) {
        let maximum = minimum + span;
        let param = ShaderParameter {
            id: "p".into(),
            pass: 0,
            current: start,
            minimum,
            maximum,
            step,
        };
        let mut menu = shader_menu(ShaderPass::default(), param);
        let (action, code) = if preset {
            (LeftAction::ShaderPresetParameter, TypeCode::shader_preset_parameter(0))
        } else {
            (LeftAction::ShaderParameter, TypeCode::shader_parameter(0))
        };
        press_n(&mut menu, action, code, presses);

        let shader = menu.shader.as_ref().expect("shader");
        let table = if preset { shader.preset_parameters() } else { shader.parameters() };
        let current = table[0].current;
        prop_assert!(
            minimum <= current && current <= maximum,
            "{current} outside [{minimum}, {maximum}]"
        );
    }

    #[test]
    fn shader_scale_cycles_in_six(scale in 0u32..6, presses in 0usize..24) {
        let pass = ShaderPass {
            fbo: FboScale { valid: scale != 0, scale_x: scale, scale_y: scale },
            ..ShaderPass::default()
        };
        let mut menu = shader_menu(pass, ShaderParameter {
            id: "p".into(), pass: 0, current: 0.0, minimum: 0.0, maximum: 1.0, step: 0.1,
        });
        press_n(&mut menu, LeftAction::ShaderScalePass, TypeCode::shader_pass_scale(0), presses);

        let fbo = menu.shader.as_ref().expect("shader").passes()[0].fbo;
        let expected = (scale as usize + 5 * presses) as u32 % 6;
        prop_assert_eq!(fbo.scale_x, expected);
        prop_assert_eq!(fbo.scale_y, expected);
        prop_assert_eq!(fbo.valid, expected != 0);
    }

    #[test]
    fn shader_filter_cycles_in_three(filter in 0u32..3, presses in 0usize..12) {
        let pass = ShaderPass { filter, ..ShaderPass::default() };
        let mut menu = shader_menu(pass, ShaderParameter {
            id: "p".into(), pass: 0, current: 0.0, minimum: 0.0, maximum: 1.0, step: 0.1,
        });
        press_n(&mut menu, LeftAction::ShaderFilterPass, TypeCode::shader_pass_filter(0), presses);

        let after = menu.shader.as_ref().expect("shader").passes()[0].filter;
        prop_assert_eq!(after, (filter as usize + 2 * presses) as u32 % 3);
    }

    #[test]
    fn cheat_count_never_underflows(count in 0usize..16, presses in 0usize..24) {
        let mut menu = MockMenu::new(1);
        menu.cheats = CheatList::new(vec![Default::default(); count]);
        press_n(&mut menu, LeftAction::CheatNumPasses, TypeCode::NONE, presses);
        prop_assert_eq!(menu.cheats.len(), count.saturating_sub(presses));
    }

    #[test]
    fn input_remap_never_underflows(
        user in 0u32..MAX_USERS,
        button in 0u32..BINDS_PER_USER,
        start in 0u32..8,
        presses in 0usize..16,
    ) {
        let mut menu = MockMenu::new(1);
        menu.settings.set_input_remap_id(user as usize, button as usize, start);
        press_n(&mut menu, LeftAction::InputRemap, TypeCode::input_desc(user, button), presses);

        let id = menu.settings.input_remap_id(user as usize, button as usize);
        prop_assert_eq!(id, Some(start.saturating_sub(presses as u32)));
    }

    #[test]
    fn scroll_moves_by_fast_speed_or_not_at_all(
        selection in 0usize..200,
        accel in 0usize..64,
    ) {
        let mut menu = MockMenu::new(1);
        menu.navigation = NavState::new(200).with_selection(selection).with_scroll_accel(Some(accel));
        press_n(&mut menu, LeftAction::ScrollPage, TypeCode::NONE, 1);

        let fast = fast_scroll_speed(accel);
        let expected = if selection > fast { selection - fast } else { selection };
        prop_assert_eq!(menu.navigation.selection(), expected);
        prop_assert!(menu.navigation.selection() < menu.navigation.entries());
    }

    #[test]
    fn semantic_rules_outrank_type_ranges(
        pick in 0usize..SEMANTIC_RULES.len(),
        family in 0u8..4,
        offset in 0u32..16,
    ) {
        let type_code = match family {
            0 => TypeCode::cheat(offset),
            1 => TypeCode::input_desc(0, offset),
            2 => TypeCode::core_option(offset),
            _ => TypeCode::playlist_association(offset),
        };
        let semantic = SEMANTIC_RULES[pick];
        let entry = EntryDescriptor::builder("row", type_code)
            .tab(Tab::from_label("deferred_settings_list"))
            .enum_label(semantic)
            .build();
        let binding = LeftResolver::default().resolve(&entry).expect("resolves");
        prop_assert_eq!(binding.rule.stage(), 1);
    }

    #[test]
    fn failed_resolution_leaves_generic_binding(code in 0x400u32..0x1000) {
        let entry = EntryDescriptor::builder("plain_setting", TypeCode(code))
            .tab(Tab::Settings)
            .build();
        let mut slot = CallbackSlot::new(LeftAction::VideoResolution);
        prop_assert!(LeftResolver::default().bind(&mut slot, &entry).is_err());
        prop_assert_eq!(slot.action(), LeftAction::Generic);
    }
}
