//! Per-entry classification consumed once at bind time.

use crate::hash::LabelHasher;
use serde::{Deserialize, Serialize};

/// Kind of the setting behind an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    Action,
    Group,
    Subgroup,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Path,
    Directory,
    Bind,
}

/// The setting an entry edits, when it edits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySetting {
    pub parent_group: String,
    pub parent_group_hash: u32,
    pub kind: SettingKind,
}

impl EntrySetting {
    pub fn new(parent_group: impl Into<String>, kind: SettingKind, hasher: &impl LabelHasher) -> Self {
        let parent_group = parent_group.into();
        Self {
            parent_group_hash: hasher.hash(&parent_group),
            parent_group,
            kind,
        }
    }
}

/// Everything the resolvers look at for one menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntryClassification {
    pub label: String,
    pub label_hash: u32,
    /// Hash of the label of the menu the entry lives in.
    pub menu_label_hash: u32,
    pub type_code: u32,
    /// Path hint of the entry (the first path element), if any.
    pub path: String,
    pub setting: Option<EntrySetting>,
}

impl MenuEntryClassification {
    pub fn new(label: impl Into<String>, type_code: u32, hasher: &impl LabelHasher) -> Self {
        let label = label.into();
        Self {
            label_hash: hasher.hash(&label),
            label,
            menu_label_hash: hasher.hash(""),
            type_code,
            path: String::new(),
            setting: None,
        }
    }

    pub fn with_menu_label(mut self, menu_label: &str, hasher: &impl LabelHasher) -> Self {
        self.menu_label_hash = hasher.hash(menu_label);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_setting(mut self, setting: EntrySetting) -> Self {
        self.setting = Some(setting);
        self
    }
}
