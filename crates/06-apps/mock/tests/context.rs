//! Smoke test ensuring the mock menu wires every subsystem into the context.

use menu_abi::{ActionOutcome, Navigation, Tab, TypeCode};
use menu_left::{CallbackSlot, EntryDescriptor, LeftAction};
use menu_services::ShaderPreset;
use mock::MockMenu;

#[test]
fn capabilities_follow_attached_shader() {
    let mut menu = MockMenu::new(4);
    assert!(!menu.capabilities().shader_manager);
    assert!(!menu.context().expect("context").has_shader());

    menu.shader = Some(ShaderPreset::unloaded());
    assert!(menu.capabilities().shader_manager);
    assert!(menu.context().expect("context").has_shader());
}

#[test]
fn press_runs_the_bound_action() {
    let mut menu = MockMenu::new(30);
    menu.navigation = menu.navigation.clone().with_selection(20).with_scroll_accel(Some(2));
    let entry = EntryDescriptor::builder("rdb_entry_publisher", TypeCode::RDB_ENTRY)
        .tab(Tab::from_label("deferred_database_list"))
        .build();
    let mut slot = CallbackSlot::default();
    menu.resolver().bind(&mut slot, &entry).expect("database rule");
    assert_eq!(slot.action(), LeftAction::ScrollPage);

    let outcome = menu.press(&slot, &entry, false).expect("press");
    assert_eq!(outcome, ActionOutcome::Handled);
    assert_eq!(menu.navigation.selection(), 12);
}
