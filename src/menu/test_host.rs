//! Recording [`MenuHost`](super::MenuHost) for unit tests.

use super::context::{
    Command, CommandSink, CoreOptions, ListHost, ListKind, MenuAction, SettingsBackend,
    VideoOutput,
};
use super::error::ActionError;

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub deltas: Vec<(u32, String, MenuAction, bool)>,
    pub named: Vec<(String, MenuAction, bool)>,
    pub known_settings: Vec<String>,
    pub commands: Vec<Command>,
    pub core_option_prevs: Vec<usize>,
    pub previous_outputs: usize,
    pub list_size: usize,
    pub driver_selection: usize,
    pub has_list_switch: bool,
    pub cached: Vec<(ListKind, MenuAction)>,
    pub list_switches: Vec<(usize, String, String, usize)>,
}

impl SettingsBackend for TestHost {
    fn apply_directional_delta(
        &mut self,
        type_code: u32,
        label: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Result<(), ActionError> {
        self.deltas
            .push((type_code, label.to_string(), action, wraparound));
        Ok(())
    }

    fn apply_named_setting(
        &mut self,
        name: &str,
        action: MenuAction,
        wraparound: bool,
    ) -> Result<(), ActionError> {
        if !self.known_settings.iter().any(|s| s == name) {
            return Err(ActionError::MissingContext("setting"));
        }
        self.named.push((name.to_string(), action, wraparound));
        Ok(())
    }
}

impl CommandSink for TestHost {
    fn emit(&mut self, command: Command) {
        self.commands.push(command);
    }
}

impl CoreOptions for TestHost {
    fn core_option_prev(&mut self, index: usize) {
        self.core_option_prevs.push(index);
    }
}

impl VideoOutput for TestHost {
    fn select_previous_output(&mut self) {
        self.previous_outputs += 1;
    }
}

impl ListHost for TestHost {
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
        self.list_switches
            .push((offset, path.to_string(), label.to_string(), index));
        Some(Ok(()))
    }
}
