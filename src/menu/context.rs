//! Capabilities handed to left actions.
//!
//! Actions never reach for globals. Everything they read or write comes
//! through a [`MenuContext`]: the menu-owned [`MenuState`] plus a
//! [`MenuHost`] implementing the external subsystems (settings store, command
//! queue, core options, video driver, menu list driver).

use super::error::ActionError;
use crate::model::{CheatList, Navigation, RemapTable, ScreenResolutions, VideoShader};
use serde::Serialize;

/// Menu action forwarded to external subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Left,
}

/// Commands sent to the frontend's command queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    SaveStateDecrement,
    DiskPrev,
}

/// Which menu list the driver should cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// The tab strip of the top-level menu.
    Horizontal,
}

/// The settings store.
pub trait SettingsBackend {
    /// Apply a directional change to the setting behind an entry. The store
    /// owns bounds and wraparound.
    fn apply_directional_delta(
        &mut self,
        type_code: u32,
        label: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Result<(), ActionError>;

    /// Apply a directional change to a setting looked up by name.
    fn apply_named_setting(
        &mut self,
        name: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Result<(), ActionError>;
}

pub trait CommandSink {
    fn emit(&mut self, command: Command);
}

pub trait CoreOptions {
    /// Select the previous value of core option `index`.
    fn core_option_prev(&mut self, index: usize);
}

pub trait VideoOutput {
    fn select_previous_output(&mut self);
}

/// The menu driver's view of the current list.
pub trait ListHost {
    fn list_size(&self) -> usize;

    /// Selection as reported by the menu driver (the horizontal tab index).
    fn driver_selection(&self) -> usize;

    fn cache_list(&mut self, kind: ListKind, action: MenuAction);

    /// Run the "content list switch" callback of the entry at `offset`.
    /// Returns `None` when that entry has no such callback.
    fn content_list_switch(
        &mut self,
        offset: usize,
        path: &str,
        label: &str,
        index: usize,
    ) -> Option<Result<(), ActionError>>;
}

/// Every external capability a left action may use.
pub trait MenuHost: SettingsBackend + CommandSink + CoreOptions + VideoOutput + ListHost {}

impl<T> MenuHost for T where T: SettingsBackend + CommandSink + CoreOptions + VideoOutput + ListHost {}

/// The active menu.
#[derive(Debug, Clone, Default)]
pub struct MenuHandle {
    /// Shader preset being edited in the menu.
    pub shader: Option<VideoShader>,
}

/// State owned by the menu and mutated by left actions.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// `None` while no menu driver is active.
    pub menu: Option<MenuHandle>,
    /// Shader currently running in the video driver.
    pub active_shader: Option<VideoShader>,
    pub cheats: Option<CheatList>,
    pub remaps: RemapTable,
    pub navigation: Navigation,
    pub resolutions: ScreenResolutions,
    /// Set when the entries of the current list must be rebuilt.
    pub needs_refresh: bool,
}

impl MenuState {
    /// State with an active menu and nothing else loaded.
    pub fn with_menu() -> Self {
        Self {
            menu: Some(MenuHandle::default()),
            ..Self::default()
        }
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
    }

    /// The shader preset held by the active menu.
    pub fn menu_shader_mut(&mut self) -> Result<&mut VideoShader, ActionError> {
        self.menu
            .as_mut()
            .ok_or(ActionError::MissingContext("menu"))?
            .shader
            .as_mut()
            .ok_or(ActionError::MissingContext("menu shader"))
    }
}

/// Borrowed access to menu state and host for the duration of one action.
pub struct MenuContext<'a> {
    pub state: &'a mut MenuState,
    pub host: &'a mut dyn MenuHost,
}

impl<'a> MenuContext<'a> {
    pub fn new(state: &'a mut MenuState, host: &'a mut dyn MenuHost) -> Self {
        Self { state, host }
    }
}
