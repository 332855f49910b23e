//! Cheat list edited from the cheat menu.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cheat {
    pub description: String,
    pub code: String,
    pub enabled: bool,
}

impl Cheat {
    pub fn new(description: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: code.into(),
            enabled: false,
        }
    }
}

/// The active cheat list. Its length is the "number of cheat passes" shown
/// in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheatList {
    cheats: Vec<Cheat>,
}

impl CheatList {
    pub fn len(&self) -> usize {
        self.cheats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cheats.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cheat> {
        self.cheats.get(index)
    }

    /// Resize the list, dropping trailing cheats or appending empty slots.
    pub fn realloc(&mut self, new_size: usize) {
        self.cheats.resize_with(new_size, Cheat::default);
    }

    /// Flip the enabled state of a cheat. Returns the new state, or `None`
    /// if there is no cheat at `index`.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let cheat = self.cheats.get_mut(index)?;
        cheat.enabled = !cheat.enabled;
        Some(cheat.enabled)
    }
}

impl From<Vec<Cheat>> for CheatList {
    fn from(cheats: Vec<Cheat>) -> Self {
        Self { cheats }
    }
}
