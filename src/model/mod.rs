//! State owned by the menu and mutated by left actions.

pub mod cheats;
pub mod navigation;
pub mod remap;
pub mod resolution;
pub mod shader;

pub use cheats::{Cheat, CheatList};
pub use navigation::Navigation;
pub use remap::RemapTable;
pub use resolution::ScreenResolutions;
pub use shader::{FboScale, FilterMode, ShaderParameter, ShaderPass, VideoShader};
