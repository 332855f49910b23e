//! Left-navigation action binding for hierarchical menus.
//!
//! Every row of a menu list (a setting, a file, a shader parameter, an input
//! binding, ...) gets one "navigate left" action when the list is built.
//! [`menu::LeftBinder`] picks that action from the row's label and type code;
//! [`menu::EntryCallbacks`] stores it and runs it on each left input.

pub mod config;
pub mod hash;
pub mod menu;
pub mod model;
