// MenuTestHarness - binds entries and feeds them left inputs the way the
// menu driver does

use super::host::RecordingHost;
use menu_bind::config::Config;
use menu_bind::hash::Djb2;
use menu_bind::menu::{
    ActionError, BindingSource, EntryCallbacks, LeftBinder, MenuContext, MenuEntryClassification,
    MenuState,
};

pub struct MenuTestHarness {
    pub binder: LeftBinder,
    pub state: MenuState,
    pub host: RecordingHost,
    pub wraparound: bool,
}

impl MenuTestHarness {
    /// Harness with default config, an active menu and an empty host
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            binder: LeftBinder::new(&Djb2, config),
            state: MenuState::with_menu(),
            host: RecordingHost::new(),
            wraparound: config.navigation.wraparound,
        }
    }

    /// Classify an entry of `menu_label` with the harness hasher
    pub fn entry(label: &str, type_code: u32, menu_label: &str) -> MenuEntryClassification {
        MenuEntryClassification::new(label, type_code, &Djb2).with_menu_label(menu_label, &Djb2)
    }

    /// Build the callback record of an entry, as done when a list is populated
    pub fn bind(&self, entry: &MenuEntryClassification) -> (EntryCallbacks, BindingSource) {
        let mut callbacks = EntryCallbacks::new(entry.label.clone(), entry.type_code);
        let source = callbacks
            .bind_left(&self.binder, Some(entry))
            .expect("binding with a classification never fails");
        (callbacks, source)
    }

    /// Send one left input to the entry
    pub fn press_left(&mut self, callbacks: &EntryCallbacks) -> Result<(), ActionError> {
        let mut ctx = MenuContext::new(&mut self.state, &mut self.host);
        callbacks.left(&mut ctx, self.wraparound)
    }

    /// Bind an entry and send it one left input
    pub fn bind_and_press(
        &mut self,
        entry: &MenuEntryClassification,
    ) -> (EntryCallbacks, Result<(), ActionError>) {
        let (callbacks, _) = self.bind(entry);
        let result = self.press_left(&callbacks);
        (callbacks, result)
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
