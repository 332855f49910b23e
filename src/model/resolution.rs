//! Fixed screen-resolution list used by targets that switch modes from a
//! known table instead of asking the video driver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenResolutions {
    /// Resolution ids in menu order.
    pub list: Vec<u32>,
    pub current_index: usize,
    /// Id at `current_index`, cached for the video driver.
    pub current_id: u32,
}

impl ScreenResolutions {
    pub fn new(list: Vec<u32>, current_index: usize) -> Self {
        let current_id = list.get(current_index).copied().unwrap_or_default();
        Self {
            list,
            current_index,
            current_id,
        }
    }

    /// Select the previous resolution. No-op at the first one.
    pub fn step_back(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        let index = self.current_index - 1;
        match self.list.get(index) {
            Some(&id) => {
                self.current_index = index;
                self.current_id = id;
                true
            }
            None => false,
        }
    }
}
