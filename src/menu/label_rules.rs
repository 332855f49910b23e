//! Label rules: the first resolver consulted.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. settings grouped directly under the main menu scroll;
//! 2. per-user "joypad index" settings go to the settings store;
//! 3. database entries scroll;
//! 4. well-known labels get their dedicated action.

use super::actions::LeftAction;
use super::classification::{MenuEntryClassification, SettingKind};
use super::labels::{KnownLabels, WellKnownLabel, RDB_ENTRY_MARKER};
use super::resolution::Resolution;
use crate::config::ResolutionMode;

pub fn resolve(
    entry: &MenuEntryClassification,
    labels: &KnownLabels,
    resolution_mode: ResolutionMode,
) -> Resolution {
    if let Some(setting) = &entry.setting {
        if labels.is_main_menu(setting.parent_group_hash) && setting.kind == SettingKind::Group {
            tracing::debug!("{}: main menu group -> scroll", entry.label);
            return Resolution::Bound(LeftAction::ScrollLeft);
        }
    }

    if let Some(user) = labels.joypad_index_user(entry.label_hash) {
        tracing::debug!("{}: joypad index of user {} -> generic", entry.label, user + 1);
        return Resolution::Bound(LeftAction::GenericDelta);
    }

    if entry.label.contains(RDB_ENTRY_MARKER) {
        tracing::debug!("{}: database entry {:?} -> scroll", entry.label, entry.path);
        return Resolution::Bound(LeftAction::ScrollLeft);
    }

    let Some(label) = labels.lookup(entry.label_hash) else {
        return Resolution::Declined;
    };

    let action = match label {
        WellKnownLabel::SaveState | WellKnownLabel::LoadState => LeftAction::SaveStateDecrement,
        WellKnownLabel::ShaderScalePass => LeftAction::ShaderScalePass,
        WellKnownLabel::ShaderFilterPass => LeftAction::ShaderFilterPass,
        WellKnownLabel::ShaderDefaultFilter => LeftAction::ShaderDefaultFilter,
        WellKnownLabel::ShaderNumPasses => LeftAction::ShaderNumPasses,
        WellKnownLabel::CheatNumPasses => LeftAction::CheatNumPasses,
        WellKnownLabel::ScreenResolution => LeftAction::VideoResolution {
            mode: resolution_mode,
        },
        WellKnownLabel::NoPlaylistEntriesAvailable => {
            if !labels.is_top_level_menu(entry.menu_label_hash) {
                return Resolution::Declined;
            }
            LeftAction::MainMenuFallback
        }
    };

    tracing::debug!("{}: {:?} -> {}", entry.label, label, action.name());
    Resolution::Bound(action)
}
