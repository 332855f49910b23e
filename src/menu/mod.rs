//! Binding of "navigate left" actions to menu entries.
//!
//! When a list is built, every entry is classified
//! ([`MenuEntryClassification`]) and handed to [`LeftBinder::bind`], which
//! asks the label rules, then the type rules, and falls back to the generic
//! settings delta. The chosen [`LeftAction`] is stored in the entry's
//! [`EntryCallbacks`] and run against a [`MenuContext`] on each left input.

pub mod actions;
pub mod binder;
pub mod callbacks;
pub mod classification;
pub mod context;
pub mod error;
pub mod label_rules;
pub mod labels;
pub mod resolution;
pub mod type_codes;
pub mod type_rules;

#[cfg(test)]
mod test_host;

pub use actions::{LeftAction, LeftRequest, ShaderSource};
pub use binder::{Binding, BindingSource, LeftBinder};
pub use callbacks::EntryCallbacks;
pub use classification::{EntrySetting, MenuEntryClassification, SettingKind};
pub use context::{
    Command, CommandSink, CoreOptions, ListHost, ListKind, MenuAction, MenuContext, MenuHandle,
    MenuHost, MenuState, SettingsBackend, VideoOutput,
};
pub use error::{ActionError, BindError};
pub use labels::{KnownLabels, WellKnownLabel};
pub use resolution::Resolution;
pub use type_codes::EntryType;
