//! Well-known menu labels and their hashes.

use crate::hash::LabelHasher;
use crate::menu::type_codes::MAX_USERS;
use serde::Serialize;
use std::collections::HashMap;

pub const MAIN_MENU: &str = "main_menu";
pub const HORIZONTAL_MENU: &str = "horizontal_menu";
/// Setting the shader "default filter" entry forwards to.
pub const VIDEO_SMOOTH: &str = "video_smooth";
/// Database entry labels contain this marker.
pub const RDB_ENTRY_MARKER: &str = "rdb_entry";

/// Label of the joypad-index setting of user `user` (0-based).
pub fn joypad_index_label(user: usize) -> String {
    format!("input_player{}_joypad_index", user + 1)
}

/// Labels with a dedicated left action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WellKnownLabel {
    SaveState,
    LoadState,
    ShaderScalePass,
    ShaderFilterPass,
    ShaderDefaultFilter,
    ShaderNumPasses,
    CheatNumPasses,
    ScreenResolution,
    NoPlaylistEntriesAvailable,
}

impl WellKnownLabel {
    pub const ALL: [WellKnownLabel; 9] = [
        WellKnownLabel::SaveState,
        WellKnownLabel::LoadState,
        WellKnownLabel::ShaderScalePass,
        WellKnownLabel::ShaderFilterPass,
        WellKnownLabel::ShaderDefaultFilter,
        WellKnownLabel::ShaderNumPasses,
        WellKnownLabel::CheatNumPasses,
        WellKnownLabel::ScreenResolution,
        WellKnownLabel::NoPlaylistEntriesAvailable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WellKnownLabel::SaveState => "savestate",
            WellKnownLabel::LoadState => "loadstate",
            WellKnownLabel::ShaderScalePass => "video_shader_scale_pass",
            WellKnownLabel::ShaderFilterPass => "video_shader_filter_pass",
            WellKnownLabel::ShaderDefaultFilter => "video_shader_default_filter",
            WellKnownLabel::ShaderNumPasses => "video_shader_num_passes",
            WellKnownLabel::CheatNumPasses => "cheat_num_passes",
            WellKnownLabel::ScreenResolution => "screen_resolution",
            WellKnownLabel::NoPlaylistEntriesAvailable => "no_playlist_entries_available",
        }
    }
}

/// Hashes of every label the resolvers match on, computed once with the
/// same hasher that classifies entries.
#[derive(Debug, Clone)]
pub struct KnownLabels {
    main_menu: u32,
    horizontal_menu: u32,
    joypad_index: Vec<u32>,
    by_hash: HashMap<u32, WellKnownLabel>,
}

impl KnownLabels {
    /// `max_users` is clamped to [`MAX_USERS`].
    pub fn new(hasher: &impl LabelHasher, max_users: usize) -> Self {
        let mut by_hash = HashMap::new();
        for label in WellKnownLabel::ALL {
            let hash = hasher.hash(label.label());
            if let Some(existing) = by_hash.get(&hash) {
                tracing::warn!(
                    "Label hash collision: {:?} and {:?} share {:#010x}, keeping {:?}",
                    existing,
                    label,
                    hash,
                    existing
                );
                continue;
            }
            by_hash.insert(hash, label);
        }

        Self {
            main_menu: hasher.hash(MAIN_MENU),
            horizontal_menu: hasher.hash(HORIZONTAL_MENU),
            joypad_index: (0..max_users.min(MAX_USERS))
                .map(|user| hasher.hash(&joypad_index_label(user)))
                .collect(),
            by_hash,
        }
    }

    pub fn lookup(&self, label_hash: u32) -> Option<WellKnownLabel> {
        self.by_hash.get(&label_hash).copied()
    }

    pub fn is_main_menu(&self, hash: u32) -> bool {
        hash == self.main_menu
    }

    /// True for the main menu and the horizontal (tabbed) menu.
    pub fn is_top_level_menu(&self, hash: u32) -> bool {
        hash == self.main_menu || hash == self.horizontal_menu
    }

    /// The user whose joypad-index label hashes to `label_hash`.
    pub fn joypad_index_user(&self, label_hash: u32) -> Option<usize> {
        self.joypad_index.iter().position(|&h| h == label_hash)
    }

    /// `(label, hash)` for every matched label, for diagnostics.
    pub fn entries(&self) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = WellKnownLabel::ALL
            .iter()
            .filter_map(|label| {
                self.by_hash
                    .iter()
                    .find(|(_, l)| *l == label)
                    .map(|(hash, l)| (l.label().to_string(), *hash))
            })
            .collect();
        entries.push((MAIN_MENU.to_string(), self.main_menu));
        entries.push((HORIZONTAL_MENU.to_string(), self.horizontal_menu));
        entries.extend(
            self.joypad_index
                .iter()
                .enumerate()
                .map(|(user, hash)| (joypad_index_label(user), *hash)),
        );
        entries
    }
}
