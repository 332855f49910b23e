//! Numeric type codes carried by menu entries.
//!
//! Low codes name discrete entry kinds ([`EntryType`]). Higher codes are
//! contiguous slot ranges where the offset from the range start is the slot
//! index (cheat N, shader parameter N, input descriptor N, ...). The
//! core-option range is open-ended and sits above every other code.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Maximum number of users (controller ports).
pub const MAX_USERS: usize = 16;
/// Number of built-in bindable buttons before custom binds start.
pub const FIRST_CUSTOM_BIND: u32 = 16;
/// Input descriptor slots per user: every button plus the four analog axes.
pub const INPUT_DESC_SLOTS_PER_USER: u32 = FIRST_CUSTOM_BIND + 4;
/// Maximum number of shader passes.
pub const GFX_MAX_SHADERS: u32 = 16;
/// Maximum number of shader parameters.
pub const GFX_MAX_PARAMETERS: u32 = 64;
/// Maximum number of cheat slots.
pub const MAX_CHEAT_COUNTERS: u32 = 100;

pub const SHADER_PASS_FILTER_0: u32 = 0x0100;
pub const SHADER_PASS_FILTER_LAST: u32 = SHADER_PASS_FILTER_0 + GFX_MAX_SHADERS - 1;
pub const SHADER_PASS_SCALE_0: u32 = 0x0180;
pub const SHADER_PASS_SCALE_LAST: u32 = SHADER_PASS_SCALE_0 + GFX_MAX_SHADERS - 1;
pub const SHADER_PARAMETER_0: u32 = 0x0200;
pub const SHADER_PARAMETER_LAST: u32 = SHADER_PARAMETER_0 + GFX_MAX_PARAMETERS - 1;
pub const SHADER_PRESET_PARAMETER_0: u32 = 0x0280;
pub const SHADER_PRESET_PARAMETER_LAST: u32 = SHADER_PRESET_PARAMETER_0 + GFX_MAX_PARAMETERS - 1;
pub const CHEAT_BEGIN: u32 = 0x0300;
pub const CHEAT_END: u32 = CHEAT_BEGIN + MAX_CHEAT_COUNTERS - 1;
pub const INPUT_DESC_BEGIN: u32 = 0x0400;
pub const INPUT_DESC_END: u32 =
    INPUT_DESC_BEGIN + (MAX_USERS as u32) * INPUT_DESC_SLOTS_PER_USER - 1;
/// First core option; every code at or above this is a core option slot.
pub const CORE_OPTION_START: u32 = 0x1_0000;

pub const SHADER_PASS_FILTER_RANGE: RangeInclusive<u32> =
    SHADER_PASS_FILTER_0..=SHADER_PASS_FILTER_LAST;
pub const SHADER_PASS_SCALE_RANGE: RangeInclusive<u32> =
    SHADER_PASS_SCALE_0..=SHADER_PASS_SCALE_LAST;
pub const SHADER_PARAMETER_RANGE: RangeInclusive<u32> =
    SHADER_PARAMETER_0..=SHADER_PARAMETER_LAST;
pub const SHADER_PRESET_PARAMETER_RANGE: RangeInclusive<u32> =
    SHADER_PRESET_PARAMETER_0..=SHADER_PRESET_PARAMETER_LAST;
pub const CHEAT_RANGE: RangeInclusive<u32> = CHEAT_BEGIN..=CHEAT_END;
pub const INPUT_DESC_RANGE: RangeInclusive<u32> = INPUT_DESC_BEGIN..=INPUT_DESC_END;
pub const CORE_OPTION_RANGE: RangeInclusive<u32> = CORE_OPTION_START..=u32::MAX;

/// Type code of the input descriptor for `(user, slot)`.
pub const fn input_desc_code(user: usize, slot: u32) -> u32 {
    INPUT_DESC_BEGIN + (user as u32) * INPUT_DESC_SLOTS_PER_USER + slot
}

/// Discrete entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum EntryType {
    None = 0,
    Plain = 1,
    Directory = 2,
    CompressedArchive = 3,
    InCompressedArchive = 4,
    Core = 5,
    Rdb = 6,
    RdbEntry = 7,
    RplEntry = 8,
    Cursor = 9,
    Shader = 10,
    ShaderPreset = 11,
    Image = 12,
    Overlay = 13,
    VideoFilter = 14,
    AudioFilter = 15,
    Config = 16,
    UseDirectory = 17,
    PlaylistEntry = 18,
    DownloadCore = 19,
    Cheat = 20,
    Remap = 21,
    Movie = 22,
    Music = 23,
    ImageViewer = 24,
    PlaylistCollection = 25,
    DownloadCoreContent = 26,
    ScanDirectory = 27,
    ContentListEntry = 28,
    SettingAction = 40,
    SettingGroup = 41,
    DiskIndex = 60,
}

impl EntryType {
    pub const ALL: [EntryType; 32] = [
        EntryType::None,
        EntryType::Plain,
        EntryType::Directory,
        EntryType::CompressedArchive,
        EntryType::InCompressedArchive,
        EntryType::Core,
        EntryType::Rdb,
        EntryType::RdbEntry,
        EntryType::RplEntry,
        EntryType::Cursor,
        EntryType::Shader,
        EntryType::ShaderPreset,
        EntryType::Image,
        EntryType::Overlay,
        EntryType::VideoFilter,
        EntryType::AudioFilter,
        EntryType::Config,
        EntryType::UseDirectory,
        EntryType::PlaylistEntry,
        EntryType::DownloadCore,
        EntryType::Cheat,
        EntryType::Remap,
        EntryType::Movie,
        EntryType::Music,
        EntryType::ImageViewer,
        EntryType::PlaylistCollection,
        EntryType::DownloadCoreContent,
        EntryType::ScanDirectory,
        EntryType::ContentListEntry,
        EntryType::SettingAction,
        EntryType::SettingGroup,
        EntryType::DiskIndex,
    ];

    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// File-browser and category kinds whose left action depends on the
    /// enclosing menu.
    pub fn is_browsable(self) -> bool {
        matches!(
            self,
            EntryType::Plain
                | EntryType::Directory
                | EntryType::CompressedArchive
                | EntryType::InCompressedArchive
                | EntryType::Core
                | EntryType::Rdb
                | EntryType::RdbEntry
                | EntryType::RplEntry
                | EntryType::Cursor
                | EntryType::Shader
                | EntryType::ShaderPreset
                | EntryType::Image
                | EntryType::Overlay
                | EntryType::VideoFilter
                | EntryType::AudioFilter
                | EntryType::Config
                | EntryType::UseDirectory
                | EntryType::PlaylistEntry
                | EntryType::DownloadCore
                | EntryType::Cheat
                | EntryType::Remap
                | EntryType::Movie
                | EntryType::Music
                | EntryType::ImageViewer
                | EntryType::PlaylistCollection
                | EntryType::DownloadCoreContent
                | EntryType::ScanDirectory
                | EntryType::SettingGroup
        )
    }
}
