//! The left-action binding facade.

use super::actions::LeftAction;
use super::classification::MenuEntryClassification;
use super::error::BindError;
use super::labels::KnownLabels;
use super::resolution::Resolution;
use super::{label_rules, type_rules};
use crate::config::{Config, ResolutionMode};
use crate::hash::{Djb2, LabelHasher};
use serde::Serialize;

/// Which resolver produced a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSource {
    LabelRule,
    TypeRule,
    /// Neither resolver matched.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    #[serde(flatten)]
    pub action: LeftAction,
    pub source: BindingSource,
}

/// Resolves the left action of menu entries.
///
/// Holds only tables computed at construction, so one binder can serve any
/// number of list rebuilds.
#[derive(Debug, Clone)]
pub struct LeftBinder {
    labels: KnownLabels,
    resolution_mode: ResolutionMode,
}

impl LeftBinder {
    /// `hasher` must be the one used to classify entries.
    pub fn new(hasher: &impl LabelHasher, config: &Config) -> Self {
        Self {
            labels: KnownLabels::new(hasher, config.input.max_users),
            resolution_mode: config.video.resolution_mode,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&Djb2, &Config::default())
    }

    pub fn labels(&self) -> &KnownLabels {
        &self.labels
    }

    pub fn resolution_mode(&self) -> ResolutionMode {
        self.resolution_mode
    }

    /// Label rules first, then type rules, then the generic delta.
    pub fn bind(&self, entry: Option<&MenuEntryClassification>) -> Result<Binding, BindError> {
        let entry = entry.ok_or(BindError::MissingClassification)?;

        if let Resolution::Bound(action) =
            label_rules::resolve(entry, &self.labels, self.resolution_mode)
        {
            return Ok(Binding {
                action,
                source: BindingSource::LabelRule,
            });
        }

        if let Resolution::Bound(action) = type_rules::resolve(entry, &self.labels) {
            return Ok(Binding {
                action,
                source: BindingSource::TypeRule,
            });
        }

        tracing::debug!(
            "{} (type {:#x}): no rule matched, using generic delta",
            entry.label,
            entry.type_code
        );
        Ok(Binding {
            action: LeftAction::GenericDelta,
            source: BindingSource::Default,
        })
    }
}

impl Default for LeftBinder {
    fn default() -> Self {
        Self::with_defaults()
    }
}
