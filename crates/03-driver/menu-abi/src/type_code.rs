//! Numeric entry type codes and the ranges that identify adjustable families.
//!
//! Single-purpose rows (files, groups, messages) use small exact codes. Rows that
//! belong to an indexed family (cheats, shader parameters, input descriptors, core
//! options, playlist associations) encode their index as an offset from the start
//! of the family's range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Maximum number of users with their own input binds.
pub const MAX_USERS: u32 = 16;
/// Core binds per user before the analog binds start.
pub const FIRST_CUSTOM_BIND: u32 = 16;
/// Binds per user covered by the input descriptor range (core + 4 analog axes).
pub const BINDS_PER_USER: u32 = FIRST_CUSTOM_BIND + 4;
/// Maximum number of shader passes in a preset.
pub const MAX_SHADER_PASSES: u32 = 16;
/// Maximum number of shader parameters exposed by a preset.
pub const MAX_SHADER_PARAMETERS: u32 = 128;
/// Maximum number of cheat rows addressable through the cheat range.
pub const MAX_CHEATS: u32 = 0x800;

/// Numeric type code attached to a menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCode(pub u32);

impl TypeCode {
    pub const NONE: TypeCode = TypeCode(0);

    // Browsable file rows.
    pub const PLAIN: TypeCode = TypeCode(1);
    pub const DIRECTORY: TypeCode = TypeCode(2);
    pub const CARCHIVE: TypeCode = TypeCode(3);
    pub const IN_CARCHIVE: TypeCode = TypeCode(4);
    pub const CORE: TypeCode = TypeCode(5);
    pub const RDB: TypeCode = TypeCode(6);
    pub const RDB_ENTRY: TypeCode = TypeCode(7);
    pub const RPL_ENTRY: TypeCode = TypeCode(8);
    pub const CURSOR: TypeCode = TypeCode(9);
    pub const SHADER: TypeCode = TypeCode(10);
    pub const SHADER_PRESET: TypeCode = TypeCode(11);
    pub const IMAGE: TypeCode = TypeCode(12);
    pub const OVERLAY: TypeCode = TypeCode(13);
    pub const VIDEO_FILTER: TypeCode = TypeCode(14);
    pub const AUDIO_FILTER: TypeCode = TypeCode(15);
    pub const CONFIG: TypeCode = TypeCode(16);
    pub const USE_DIRECTORY: TypeCode = TypeCode(17);
    pub const PLAYLIST_ENTRY: TypeCode = TypeCode(18);
    pub const DOWNLOAD_CORE: TypeCode = TypeCode(19);
    pub const CHEAT: TypeCode = TypeCode(20);
    pub const REMAP: TypeCode = TypeCode(21);
    pub const MOVIE: TypeCode = TypeCode(22);
    pub const MUSIC: TypeCode = TypeCode(23);
    pub const IMAGE_VIEWER: TypeCode = TypeCode(24);
    pub const PLAYLIST_COLLECTION: TypeCode = TypeCode(25);
    pub const DOWNLOAD_CORE_CONTENT: TypeCode = TypeCode(26);
    pub const DOWNLOAD_THUMBNAIL_CONTENT: TypeCode = TypeCode(27);
    pub const DOWNLOAD_URL: TypeCode = TypeCode(28);
    pub const SCAN_DIRECTORY: TypeCode = TypeCode(29);
    pub const FONT: TypeCode = TypeCode(30);
    pub const CONTENT_LIST_ENTRY: TypeCode = TypeCode(31);

    // Menu-internal rows.
    pub const NO_ITEM: TypeCode = TypeCode(0x100);
    pub const SETTING_GROUP: TypeCode = TypeCode(0x101);
    pub const SETTING_ACTION: TypeCode = TypeCode(0x102);
    pub const INFO_MESSAGE: TypeCode = TypeCode(0x103);
    pub const CORE_INFO_NONE: TypeCode = TypeCode(0x104);
    pub const DISK_INDEX: TypeCode = TypeCode(0x105);

    // Indexed families.
    pub const SHADER_PARAMETER_0: TypeCode = TypeCode(0x1000);
    pub const SHADER_PARAMETER_LAST: TypeCode = TypeCode(0x1000 + MAX_SHADER_PARAMETERS - 1);
    pub const SHADER_PRESET_PARAMETER_0: TypeCode = TypeCode(0x1100);
    pub const SHADER_PRESET_PARAMETER_LAST: TypeCode =
        TypeCode(0x1100 + MAX_SHADER_PARAMETERS - 1);
    pub const SHADER_PASS_FILTER_0: TypeCode = TypeCode(0x1200);
    pub const SHADER_PASS_FILTER_LAST: TypeCode = TypeCode(0x1200 + MAX_SHADER_PASSES - 1);
    pub const SHADER_PASS_SCALE_0: TypeCode = TypeCode(0x1300);
    pub const SHADER_PASS_SCALE_LAST: TypeCode = TypeCode(0x1300 + MAX_SHADER_PASSES - 1);
    pub const CHEAT_BEGIN: TypeCode = TypeCode(0x2000);
    pub const CHEAT_END: TypeCode = TypeCode(0x2000 + MAX_CHEATS - 1);
    pub const INPUT_DESC_BEGIN: TypeCode = TypeCode(0x3000);
    pub const INPUT_DESC_END: TypeCode = TypeCode(0x3000 + MAX_USERS * BINDS_PER_USER - 1);
    pub const CORE_OPTION_START: TypeCode = TypeCode(0x1_0000);
    pub const PLAYLIST_ASSOCIATION_START: TypeCode = TypeCode(0x2_0000);

    /// Rows that browse a list of files or content items.
    pub const BROWSABLE: [TypeCode; 33] = [
        Self::PLAIN,
        Self::DIRECTORY,
        Self::CARCHIVE,
        Self::IN_CARCHIVE,
        Self::CORE,
        Self::RDB,
        Self::RDB_ENTRY,
        Self::RPL_ENTRY,
        Self::CURSOR,
        Self::SHADER,
        Self::SHADER_PRESET,
        Self::IMAGE,
        Self::OVERLAY,
        Self::VIDEO_FILTER,
        Self::AUDIO_FILTER,
        Self::CONFIG,
        Self::USE_DIRECTORY,
        Self::PLAYLIST_ENTRY,
        Self::INFO_MESSAGE,
        Self::DOWNLOAD_CORE,
        Self::CHEAT,
        Self::REMAP,
        Self::MOVIE,
        Self::MUSIC,
        Self::IMAGE_VIEWER,
        Self::PLAYLIST_COLLECTION,
        Self::DOWNLOAD_CORE_CONTENT,
        Self::DOWNLOAD_THUMBNAIL_CONTENT,
        Self::DOWNLOAD_URL,
        Self::SCAN_DIRECTORY,
        Self::FONT,
        Self::SETTING_GROUP,
        Self::CORE_INFO_NONE,
    ];

    /// Raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the offset of this code inside `range`, if it falls within it.
    pub fn offset_in(self, range: RangeInclusive<TypeCode>) -> Option<u32> {
        range.contains(&self).then(|| self.0 - range.start().0)
    }

    /// Returns the offset from `start` for open-ended families.
    pub fn offset_from(self, start: TypeCode) -> Option<u32> {
        self.0.checked_sub(start.0)
    }

    /// Whether this code is one of the browsable row types.
    pub fn is_browsable(self) -> bool {
        Self::BROWSABLE.contains(&self)
    }

    pub fn cheat_range() -> RangeInclusive<TypeCode> {
        Self::CHEAT_BEGIN..=Self::CHEAT_END
    }

    pub fn shader_parameter_range() -> RangeInclusive<TypeCode> {
        Self::SHADER_PARAMETER_0..=Self::SHADER_PARAMETER_LAST
    }

    pub fn shader_preset_parameter_range() -> RangeInclusive<TypeCode> {
        Self::SHADER_PRESET_PARAMETER_0..=Self::SHADER_PRESET_PARAMETER_LAST
    }

    pub fn shader_pass_filter_range() -> RangeInclusive<TypeCode> {
        Self::SHADER_PASS_FILTER_0..=Self::SHADER_PASS_FILTER_LAST
    }

    pub fn shader_pass_scale_range() -> RangeInclusive<TypeCode> {
        Self::SHADER_PASS_SCALE_0..=Self::SHADER_PASS_SCALE_LAST
    }

    pub fn input_desc_range() -> RangeInclusive<TypeCode> {
        Self::INPUT_DESC_BEGIN..=Self::INPUT_DESC_END
    }

    /// Type code of the cheat row at `index`.
    pub const fn cheat(index: u32) -> TypeCode {
        TypeCode(Self::CHEAT_BEGIN.0 + index)
    }

    /// Type code of the live shader parameter row at `index`.
    pub const fn shader_parameter(index: u32) -> TypeCode {
        TypeCode(Self::SHADER_PARAMETER_0.0 + index)
    }

    /// Type code of the preset shader parameter row at `index`.
    pub const fn shader_preset_parameter(index: u32) -> TypeCode {
        TypeCode(Self::SHADER_PRESET_PARAMETER_0.0 + index)
    }

    pub const fn shader_pass_filter(pass: u32) -> TypeCode {
        TypeCode(Self::SHADER_PASS_FILTER_0.0 + pass)
    }

    pub const fn shader_pass_scale(pass: u32) -> TypeCode {
        TypeCode(Self::SHADER_PASS_SCALE_0.0 + pass)
    }

    /// Type code of the input descriptor row for `user` / `button`.
    pub const fn input_desc(user: u32, button: u32) -> TypeCode {
        TypeCode(Self::INPUT_DESC_BEGIN.0 + user * BINDS_PER_USER + button)
    }

    pub const fn core_option(index: u32) -> TypeCode {
        TypeCode(Self::CORE_OPTION_START.0 + index)
    }

    pub const fn playlist_association(index: u32) -> TypeCode {
        TypeCode(Self::PLAYLIST_ASSOCIATION_START.0 + index)
    }
}

impl From<u32> for TypeCode {
    fn from(value: u32) -> Self {
        TypeCode(value)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}
