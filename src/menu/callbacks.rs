//! The per-entry callback record.

use super::actions::{LeftAction, LeftRequest};
use super::binder::{BindingSource, LeftBinder};
use super::classification::MenuEntryClassification;
use super::context::MenuContext;
use super::error::{ActionError, BindError};

/// Callbacks attached to one menu row. Rebuilt together with the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCallbacks {
    /// `None` means the entry has no left action.
    pub action_left: Option<LeftAction>,
    pub type_code: u32,
    pub label: String,
}

impl EntryCallbacks {
    pub fn new(label: impl Into<String>, type_code: u32) -> Self {
        Self {
            action_left: None,
            type_code,
            label: label.into(),
        }
    }

    /// Resolve and store the left action. On error the slot is cleared.
    pub fn bind_left(
        &mut self,
        binder: &LeftBinder,
        entry: Option<&MenuEntryClassification>,
    ) -> Result<BindingSource, BindError> {
        match binder.bind(entry) {
            Ok(binding) => {
                self.action_left = Some(binding.action);
                Ok(binding.source)
            }
            Err(e) => {
                self.action_left = None;
                Err(e)
            }
        }
    }

    /// Handle one left input.
    pub fn left(&self, ctx: &mut MenuContext<'_>, wraparound: bool) -> Result<(), ActionError> {
        let Some(action) = self.action_left else {
            tracing::debug!("{}: no left action bound", self.label);
            return Ok(());
        };
        action.invoke(ctx, &LeftRequest::new(self.type_code, &self.label, wraparound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Djb2;
    use crate::menu::context::{Command, MenuState};
    use crate::menu::test_host::TestHost;
    use crate::menu::type_codes::EntryType;

    #[test]
    fn test_bind_then_left() {
        let binder = LeftBinder::with_defaults();
        let entry = MenuEntryClassification::new("loadstate", 0, &Djb2);
        let mut callbacks = EntryCallbacks::new("loadstate", 0);
        assert_eq!(
            callbacks.bind_left(&binder, Some(&entry)),
            Ok(BindingSource::LabelRule)
        );

        let mut state = MenuState::default();
        let mut host = TestHost::default();
        let mut ctx = MenuContext::new(&mut state, &mut host);
        callbacks.left(&mut ctx, false).unwrap();
        callbacks.left(&mut ctx, false).unwrap();
        assert_eq!(
            host.commands,
            vec![Command::SaveStateDecrement, Command::SaveStateDecrement]
        );
    }

    #[test]
    fn test_failed_bind_clears_action() {
        let binder = LeftBinder::with_defaults();
        let mut callbacks = EntryCallbacks {
            action_left: Some(LeftAction::DiskPrev),
            ..EntryCallbacks::new("disk", 0)
        };
        assert_eq!(
            callbacks.bind_left(&binder, None),
            Err(BindError::MissingClassification)
        );
        assert_eq!(callbacks.action_left, None);

        let mut state = MenuState::default();
        let mut host = TestHost::default();
        let mut ctx = MenuContext::new(&mut state, &mut host);
        assert_eq!(callbacks.left(&mut ctx, false), Ok(()));
        assert!(host.commands.is_empty());
    }

    #[test]
    fn test_left_passes_entry_and_wraparound() {
        let binder = LeftBinder::with_defaults();
        let code = EntryType::None.code();
        let entry = MenuEntryClassification::new("audio_volume", code, &Djb2);
        let mut callbacks = EntryCallbacks::new("audio_volume", code);
        assert_eq!(
            callbacks.bind_left(&binder, Some(&entry)),
            Ok(BindingSource::Default)
        );
        assert_eq!(callbacks.action_left, Some(LeftAction::GenericDelta));

        let mut state = MenuState::default();
        let mut host = TestHost::default();
        let mut ctx = MenuContext::new(&mut state, &mut host);
        callbacks.left(&mut ctx, true).unwrap();
        assert_eq!(host.deltas.len(), 1);
        assert_eq!(host.deltas[0].0, code);
        assert_eq!(host.deltas[0].1, "audio_volume");
        assert!(host.deltas[0].3);
    }
}
