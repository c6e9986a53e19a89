//! In-memory configuration store.

use log::trace;
use menu_abi::{
    ActionOutcome, MenuAction, SettingsStore, StringArray, TypeCode, BINDS_PER_USER, MAX_USERS,
};

/// Value held by an adjustable setting.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    UInt {
        value: u32,
        min: u32,
        max: u32,
        step: u32,
    },
    Float {
        value: f32,
        min: f32,
        max: f32,
        step: f32,
    },
}

impl SettingValue {
    /// Applies one step of `action`, wrapping past either bound when `wraparound` is set.
    pub fn step(&mut self, action: MenuAction, wraparound: bool) {
        match self {
            SettingValue::Bool(value) => *value = !*value,
            SettingValue::UInt {
                value,
                min,
                max,
                step,
            } => {
                *value = match action {
                    MenuAction::Left => match value.checked_sub(*step) {
                        Some(next) if next >= *min => next,
                        _ if wraparound => *max,
                        _ => *min,
                    },
                    MenuAction::Right => match value.checked_add(*step) {
                        Some(next) if next <= *max => next,
                        _ if wraparound => *min,
                        _ => *max,
                    },
                };
            }
            SettingValue::Float {
                value,
                min,
                max,
                step,
            } => {
                let next = match action {
                    MenuAction::Left => *value - *step,
                    MenuAction::Right => *value + *step,
                };
                *value = if next < *min {
                    if wraparound {
                        *max
                    } else {
                        *min
                    }
                } else if next > *max {
                    if wraparound {
                        *min
                    } else {
                        *max
                    }
                } else {
                    next
                };
            }
        }
    }
}

/// Settings store backed by plain fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigStore {
    navigation_wraparound: bool,
    playlist_names: String,
    playlist_cores: String,
    remap_ids: Vec<[u32; BINDS_PER_USER as usize]>,
    values: Vec<(String, SettingValue)>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_navigation_wraparound(&mut self, enabled: bool) {
        self.navigation_wraparound = enabled;
    }

    /// Declares (or replaces) a named setting.
    pub fn insert(&mut self, name: impl Into<String>, value: SettingValue) {
        let name = name.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn value(&self, name: &str) -> Option<&SettingValue> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    fn value_mut(&mut self, name: &str) -> Option<&mut SettingValue> {
        self.values
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        let identity: [u32; BINDS_PER_USER as usize] = std::array::from_fn(|button| button as u32);
        Self {
            navigation_wraparound: false,
            playlist_names: String::new(),
            playlist_cores: String::new(),
            remap_ids: vec![identity; MAX_USERS as usize],
            values: Vec::new(),
        }
    }
}

impl SettingsStore for ConfigStore {
    fn apply_action(
        &mut self,
        type_code: TypeCode,
        label: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> ActionOutcome {
        match self.value_mut(label) {
            Some(value) => {
                value.step(action, wraparound);
                trace!("settings::apply_action: {label} ({type_code}) -> {value:?}");
            }
            None => trace!("settings::apply_action: no setting bound to {label} ({type_code})"),
        }
        ActionOutcome::Handled
    }

    fn apply_named(
        &mut self,
        name: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Option<ActionOutcome> {
        let value = self.value_mut(name)?;
        value.step(action, wraparound);
        trace!("settings::apply_named: {name} -> {value:?}");
        Some(ActionOutcome::Handled)
    }

    fn navigation_wraparound(&self) -> bool {
        self.navigation_wraparound
    }

    fn string_array(&self, key: StringArray) -> &str {
        match key {
            StringArray::PlaylistNames => &self.playlist_names,
            StringArray::PlaylistCores => &self.playlist_cores,
        }
    }

    fn set_string_array(&mut self, key: StringArray, value: String) {
        match key {
            StringArray::PlaylistNames => self.playlist_names = value,
            StringArray::PlaylistCores => self.playlist_cores = value,
        }
    }

    fn input_remap_id(&self, user: usize, button: usize) -> Option<u32> {
        self.remap_ids.get(user)?.get(button).copied()
    }

    fn set_input_remap_id(&mut self, user: usize, button: usize, id: u32) {
        if let Some(slot) = self
            .remap_ids
            .get_mut(user)
            .and_then(|binds| binds.get_mut(button))
        {
            *slot = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(value: u32) -> SettingValue {
        SettingValue::UInt {
            value,
            min: 1,
            max: 9,
            step: 2,
        }
    }

    #[test]
    fn uint_left_clamps_without_wraparound() {
        let mut value = uint(2);
        value.step(MenuAction::Left, false);
        assert_eq!(value, uint(1));
    }

    #[test]
    fn uint_left_wraps_to_maximum() {
        let mut value = uint(1);
        value.step(MenuAction::Left, true);
        assert_eq!(value, uint(9));
    }

    #[test]
    fn uint_left_at_zero_does_not_underflow() {
        let mut value = SettingValue::UInt {
            value: 0,
            min: 0,
            max: 4,
            step: 1,
        };
        value.step(MenuAction::Left, false);
        assert!(matches!(value, SettingValue::UInt { value: 0, .. }));
    }

    #[test]
    fn float_left_stays_in_bounds() {
        let mut value = SettingValue::Float {
            value: 0.25,
            min: 0.0,
            max: 1.0,
            step: 0.5,
        };
        value.step(MenuAction::Left, false);
        assert!(matches!(value, SettingValue::Float { value, .. } if value == 0.0));
    }

    #[test]
    fn bool_toggles_in_either_direction() {
        let mut store = ConfigStore::new();
        store.insert("video_smooth", SettingValue::Bool(true));
        assert_eq!(
            store.apply_named("video_smooth", MenuAction::Left, false),
            Some(ActionOutcome::Handled)
        );
        assert_eq!(store.value("video_smooth"), Some(&SettingValue::Bool(false)));
        assert_eq!(store.apply_named("missing", MenuAction::Left, false), None);
    }

    #[test]
    fn remap_ids_default_to_identity_and_ignore_out_of_range() {
        let mut store = ConfigStore::new();
        assert_eq!(store.input_remap_id(3, 5), Some(5));
        store.set_input_remap_id(99, 0, 7);
        assert_eq!(store.input_remap_id(99, 0), None);
    }
}
