//! Type rules: consulted when no label rule matched.
//!
//! Slot ranges are checked first, in declaration order, then the exact entry
//! kinds. The core-option range has no upper bound, so it must stay after
//! every bounded range.

use super::actions::{LeftAction, ShaderSource};
use super::classification::MenuEntryClassification;
use super::labels::KnownLabels;
use super::resolution::Resolution;
use super::type_codes::{
    EntryType, CHEAT_RANGE, CORE_OPTION_RANGE, INPUT_DESC_RANGE, INPUT_DESC_SLOTS_PER_USER,
    SHADER_PARAMETER_RANGE, SHADER_PRESET_PARAMETER_RANGE,
};
use std::ops::RangeInclusive;

/// A contiguous run of type codes bound to one action family. The action
/// receives the offset of the code from the start of the range.
pub struct RangeRule {
    name: &'static str,
    range: RangeInclusive<u32>,
    requires_shaders: bool,
    bind: fn(u32) -> LeftAction,
}

impl RangeRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Action for `type_code`, if it falls in this range.
    pub fn bind(&self, type_code: u32) -> Option<LeftAction> {
        self.range
            .contains(&type_code)
            .then(|| (self.bind)(type_code - self.range.start()))
    }
}

fn cheat_toggle(offset: u32) -> LeftAction {
    LeftAction::CheatToggle {
        index: offset as usize,
    }
}

fn active_shader_parameter(offset: u32) -> LeftAction {
    LeftAction::ShaderParameter {
        source: ShaderSource::Active,
        index: offset as usize,
    }
}

fn preset_shader_parameter(offset: u32) -> LeftAction {
    LeftAction::ShaderParameter {
        source: ShaderSource::Preset,
        index: offset as usize,
    }
}

fn input_remap(offset: u32) -> LeftAction {
    let user = offset / INPUT_DESC_SLOTS_PER_USER;
    let slot = offset - user * INPUT_DESC_SLOTS_PER_USER;
    LeftAction::InputRemapDecrement {
        user: user as usize,
        slot: slot as usize,
    }
}

fn core_option(offset: u32) -> LeftAction {
    LeftAction::CoreOptionPrev {
        index: offset as usize,
    }
}

static RANGE_RULES: [RangeRule; 5] = [
    RangeRule {
        name: "cheat",
        range: CHEAT_RANGE,
        requires_shaders: false,
        bind: cheat_toggle,
    },
    RangeRule {
        name: "shader_parameter",
        range: SHADER_PARAMETER_RANGE,
        requires_shaders: true,
        bind: active_shader_parameter,
    },
    RangeRule {
        name: "shader_preset_parameter",
        range: SHADER_PRESET_PARAMETER_RANGE,
        requires_shaders: true,
        bind: preset_shader_parameter,
    },
    RangeRule {
        name: "input_desc",
        range: INPUT_DESC_RANGE,
        requires_shaders: false,
        bind: input_remap,
    },
    RangeRule {
        name: "core_option",
        range: CORE_OPTION_RANGE,
        requires_shaders: false,
        bind: core_option,
    },
];

/// Range rules in evaluation order, without the shader rules when shader
/// support is compiled out.
pub fn range_rules() -> impl Iterator<Item = &'static RangeRule> {
    RANGE_RULES
        .iter()
        .filter(|rule| cfg!(feature = "shaders") || !rule.requires_shaders)
}

pub fn resolve(entry: &MenuEntryClassification, labels: &KnownLabels) -> Resolution {
    let code = entry.type_code;

    for rule in range_rules() {
        if let Some(action) = rule.bind(code) {
            tracing::debug!("type {:#x}: {} range -> {}", code, rule.name, action.name());
            return Resolution::Bound(action);
        }
    }

    let Some(kind) = EntryType::from_code(code) else {
        return Resolution::Declined;
    };

    let action = match kind {
        EntryType::DiskIndex => LeftAction::DiskPrev,
        EntryType::SettingAction | EntryType::ContentListEntry => LeftAction::MainMenuFallback,
        kind if kind.is_browsable() => {
            if labels.is_top_level_menu(entry.menu_label_hash) {
                LeftAction::MainMenuFallback
            } else {
                LeftAction::ScrollLeft
            }
        }
        _ => return Resolution::Declined,
    };

    tracing::debug!("type {:#x}: {:?} -> {}", code, kind, action.name());
    Resolution::Bound(action)
}
