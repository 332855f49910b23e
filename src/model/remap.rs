//! Per-user input remapping.

use crate::menu::type_codes::{INPUT_DESC_SLOTS_PER_USER, MAX_USERS};
use serde::{Deserialize, Serialize};

/// Remap ids indexed by `(user, slot)`. Slot `s` initially maps to button
/// `s`; a remap id of 0 is the first button and the floor for decrements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapTable {
    ids: Vec<Vec<u32>>,
}

impl Default for RemapTable {
    fn default() -> Self {
        Self::new(MAX_USERS)
    }
}

impl RemapTable {
    pub fn new(users: usize) -> Self {
        let identity: Vec<u32> = (0..INPUT_DESC_SLOTS_PER_USER).collect();
        Self {
            ids: vec![identity; users],
        }
    }

    pub fn users(&self) -> usize {
        self.ids.len()
    }

    pub fn get(&self, user: usize, slot: usize) -> Option<u32> {
        self.ids.get(user)?.get(slot).copied()
    }

    /// Returns false if `(user, slot)` is outside the table.
    pub fn set(&mut self, user: usize, slot: usize, id: u32) -> bool {
        match self.ids.get_mut(user).and_then(|slots| slots.get_mut(slot)) {
            Some(current) => {
                *current = id;
                true
            }
            None => false,
        }
    }

    /// Decrement a remap id, stopping at 0. Returns the resulting id, or
    /// `None` if `(user, slot)` is outside the table.
    pub fn decrement(&mut self, user: usize, slot: usize) -> Option<u32> {
        let current = self.ids.get_mut(user)?.get_mut(slot)?;
        if *current > 0 {
            *current -= 1;
        }
        Some(*current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_defaults() {
        let table = RemapTable::default();
        assert_eq!(table.users(), MAX_USERS);
        assert_eq!(table.get(3, 7), Some(7));
        assert_eq!(table.get(MAX_USERS, 0), None);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut table = RemapTable::new(1);
        assert!(table.set(0, 2, 3));
        assert_eq!(table.decrement(0, 2), Some(2));

        assert!(table.set(0, 2, 0));
        for _ in 0..5 {
            assert_eq!(table.decrement(0, 2), Some(0));
        }
        assert_eq!(table.decrement(1, 0), None);
    }
}
