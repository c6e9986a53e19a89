//! Immutable description of one menu row at resolution time.

use menu_abi::{MenuEnumLabel, SettingRef, Tab, TypeCode, MAX_USERS};

const DATABASE_ENTRY_MARKER: &str = "rdb_entry";

/// Multiplicative string hash used for menu labels (`h = h * 33 + byte`, seed 5381).
pub fn label_hash(label: &str) -> u32 {
    label
        .bytes()
        .fold(5381u32, |hash, byte| {
            hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(byte as u32)
        })
}

/// Label category assigned once when a descriptor is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelTag {
    /// No special label category.
    Plain,
    /// `input_player{user}_joypad_index`, with `user` 1-based.
    JoypadIndex { user: u32 },
    /// Label names a database record row.
    DatabaseEntry,
}

impl LabelTag {
    fn classify(label: &str, hash: u32) -> Self {
        if label.contains("input_player") && label.contains("_joypad_index") {
            let user = (1..=MAX_USERS)
                .find(|user| label_hash(&format!("input_player{user}_joypad_index")) == hash);
            if let Some(user) = user {
                return LabelTag::JoypadIndex { user };
            }
        }
        if label.contains(DATABASE_ENTRY_MARKER) {
            return LabelTag::DatabaseEntry;
        }
        LabelTag::Plain
    }
}

/// Entry Descriptor handed to the resolver by list population.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryDescriptor {
    path: String,
    label: String,
    label_hash: u32,
    type_code: TypeCode,
    index: usize,
    tab: Tab,
    enum_label: Option<MenuEnumLabel>,
    setting: Option<SettingRef>,
    tag: LabelTag,
}

impl EntryDescriptor {
    /// Starts a descriptor for a row with the given label and type code.
    pub fn builder(label: impl Into<String>, type_code: TypeCode) -> EntryDescriptorBuilder {
        EntryDescriptorBuilder::new(label.into(), type_code)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_hash(&self) -> u32 {
        self.label_hash
    }

    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    /// Position of the row within its list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    pub fn enum_label(&self) -> Option<MenuEnumLabel> {
        self.enum_label
    }

    pub fn setting(&self) -> Option<&SettingRef> {
        self.setting.as_ref()
    }

    pub fn tag(&self) -> LabelTag {
        self.tag
    }
}

/// Builder for [`EntryDescriptor`].
#[derive(Clone, Debug)]
pub struct EntryDescriptorBuilder {
    path: String,
    label: String,
    label_hash: Option<u32>,
    type_code: TypeCode,
    index: usize,
    tab: Tab,
    enum_label: Option<MenuEnumLabel>,
    setting: Option<SettingRef>,
}

impl EntryDescriptorBuilder {
    fn new(label: String, type_code: TypeCode) -> Self {
        Self {
            path: String::new(),
            label,
            label_hash: None,
            type_code,
            index: 0,
            tab: Tab::default(),
            enum_label: None,
            setting: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the hash otherwise computed from the label.
    pub fn label_hash(mut self, hash: u32) -> Self {
        self.label_hash = Some(hash);
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    pub fn enum_label(mut self, label: MenuEnumLabel) -> Self {
        self.enum_label = Some(label);
        self
    }

    pub fn setting(mut self, setting: SettingRef) -> Self {
        self.setting = Some(setting);
        self
    }

    pub fn build(self) -> EntryDescriptor {
        let label_hash = self.label_hash.unwrap_or_else(|| label_hash(&self.label));
        let tag = LabelTag::classify(&self.label, label_hash);
        // Placeholder rows always carry the "no items" identifier.
        let enum_label = match (self.enum_label, self.type_code) {
            (None, TypeCode::NO_ITEM) => Some(MenuEnumLabel::NoItems),
            (label, _) => label,
        };
        EntryDescriptor {
            path: self.path,
            label: self.label,
            label_hash,
            type_code: self.type_code,
            index: self.index,
            tab: self.tab,
            enum_label,
            setting: self.setting,
            tag,
        }
    }
}
