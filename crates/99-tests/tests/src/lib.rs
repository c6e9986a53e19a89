//! Cross-crate test suite for the menu left actions.

#[cfg(test)]
mod native_e2e;

#[cfg(test)]
mod invariants;

#[cfg(test)]
mod tests {
    use menu_abi::{Tab, TypeCode};
    use menu_left::{EntryDescriptor, LeftAction};
    use mock::MockMenu;

    #[test]
    fn type_rules_reach_each_family() {
        let menu = MockMenu::new(1);
        let resolver = menu.resolver();
        let tab = Tab::from_label("deferred_settings_list");
        let probes = [
            TypeCode::NONE,
            TypeCode::NO_ITEM,
            TypeCode::cheat(0),
            TypeCode::input_desc(0, 0),
            TypeCode::core_option(0),
            TypeCode::playlist_association(0),
            TypeCode::DISK_INDEX,
            TypeCode::PLAIN,
            TypeCode::SETTING_ACTION,
        ];
        let mut reached: Vec<LeftAction> = probes
            .iter()
            .filter_map(|code| {
                let entry = EntryDescriptor::builder("row", *code).tab(tab.clone()).build();
                resolver.resolve(&entry).ok().map(|binding| binding.action)
            })
            .collect();
        reached.sort_by_key(|action| action.ident());
        reached.dedup();
        assert_eq!(
            reached.len(),
            7,
            "type rules reach seven families without a shader: {reached:?}"
        );
    }
}
