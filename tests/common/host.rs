// RecordingHost - a MenuHost that records every call made to it

use menu_bind::menu::{
    ActionError, Command, CommandSink, CoreOptions, ListHost, ListKind, MenuAction,
    SettingsBackend, VideoOutput,
};

/// A call to the settings store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingCall {
    Delta {
        type_code: u32,
        label: String,
        action: MenuAction,
        wraparound: bool,
    },
    Named {
        name: String,
        action: MenuAction,
        wraparound: bool,
    },
}

/// A call to the content list switch callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSwitch {
    pub offset: usize,
    pub path: String,
    pub label: String,
    pub index: usize,
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub settings: Vec<SettingCall>,
    pub commands: Vec<Command>,
    pub core_option_prevs: Vec<usize>,
    pub previous_outputs: usize,
    pub cached: Vec<(ListKind, MenuAction)>,
    pub list_switches: Vec<ListSwitch>,

    /// Reported list size
    pub list_size: usize,
    /// Reported driver (tab) selection
    pub driver_selection: usize,
    /// Whether the selected entry has a content list switch callback
    pub has_list_switch: bool,
    /// When set, every settings call fails with this message
    pub settings_error: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host for a top-level list with `size` entries and the given tab selected
    pub fn with_list(size: usize, driver_selection: usize) -> Self {
        Self {
            list_size: size,
            driver_selection,
            has_list_switch: true,
            ..Self::default()
        }
    }

    fn check_settings(&self) -> Result<(), ActionError> {
        match &self.settings_error {
            Some(message) => Err(ActionError::Host(message.clone())),
            None => Ok(()),
        }
    }
}

impl SettingsBackend for RecordingHost {
    fn apply_directional_delta(
        &mut self,
        type_code: u32,
        label: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Result<(), ActionError> {
        self.check_settings()?;
        self.settings.push(SettingCall::Delta {
            type_code,
            label: label.to_string(),
            action,
            wraparound,
        });
        Ok(())
    }

    fn apply_named_setting(
        &mut self,
        name: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Result<(), ActionError> {
        self.check_settings()?;
        self.settings.push(SettingCall::Named {
            name: name.to_string(),
            action,
            wraparound,
        });
        Ok(())
    }
}

impl CommandSink for RecordingHost {
    fn emit(&mut self, command: Command) {
        self.commands.push(command);
    }
}

impl CoreOptions for RecordingHost {
    fn core_option_prev(&mut self, index: usize) {
        self.core_option_prevs.push(index);
    }
}

impl VideoOutput for RecordingHost {
    fn select_previous_output(&mut self) {
        self.previous_outputs += 1;
    }
}

impl ListHost for RecordingHost {
    fn list_size(&self) -> usize {
        self.list_size
    }

    fn driver_selection(&self) -> usize {
        self.driver_selection
    }

    fn cache_list(&mut self, kind: ListKind, action: MenuAction) {
        self.cached.push((kind, action));
    }

    fn content_list_switch(
        &mut self,
        offset: usize,
        path: &str,
        label: &str,
        index: usize,
    ) -> Option<Result<(), ActionError>> {
        if !self.has_list_switch {
            return None;
        }
        self.list_switches.push(ListSwitch {
            offset,
            path: path.to_string(),
            label: label.to_string(),
            index,
        });
        Some(Ok(()))
    }
}
